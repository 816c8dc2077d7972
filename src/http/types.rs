use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::{Deserialize, Serialize};

use crate::application::todo_service::ServiceError;

#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorBody {
    pub message: String,
}

#[derive(Debug)]
pub struct ApiError {
    pub status: StatusCode,
    pub message: String,
}

impl From<ServiceError> for ApiError {
    fn from(err: ServiceError) -> Self {
        match err {
            ServiceError::NotFound(_) => {
                Self { status: StatusCode::NOT_FOUND, message: err.to_string() }
            }
            ServiceError::Repository(source) => {
                // Store failures surface as opaque 500s; the detail goes to the log.
                tracing::error!(error = %source, "store operation failed");
                Self { status: StatusCode::INTERNAL_SERVER_ERROR, message: "internal error".into() }
            }
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status, Json(ErrorBody { message: self.message })).into_response()
    }
}
