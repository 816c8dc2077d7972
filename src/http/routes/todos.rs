use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::routing::get;
use axum::{Json, Router};
use serde::Deserialize;

use crate::application::todo_service::TodoService;
use crate::domain::todo::{Todo, TodoId, TodoInput, TodoStatus};
use crate::http::types::ApiError;

#[derive(Clone)]
pub struct AppState<S: TodoService> {
    pub service: S,
}

pub fn router<S: TodoService + Clone>(state: AppState<S>) -> Router {
    Router::new()
        .route("/api/todo", get(list_todos::<S>).post(create_todo::<S>))
        .route(
            "/api/todo/:id",
            get(get_todo::<S>).put(update_todo::<S>).delete(delete_todo::<S>),
        )
        .with_state(state)
}

#[derive(Debug, Deserialize)]
struct ListParams {
    status: Option<TodoStatus>,
}

async fn list_todos<S: TodoService>(
    State(state): State<AppState<S>>,
    Query(params): Query<ListParams>,
) -> Result<Json<Vec<Todo>>, ApiError> {
    let todos = match params.status {
        Some(status) => state.service.get_all_todos_by_status(status).await?,
        None => state.service.get_all_todos().await?,
    };
    Ok(Json(todos))
}

async fn get_todo<S: TodoService>(
    State(state): State<AppState<S>>,
    Path(id): Path<String>,
) -> Result<Json<Todo>, ApiError> {
    let todo = state.service.get_todo_by_id(TodoId(id)).await?;
    Ok(Json(todo))
}

async fn create_todo<S: TodoService>(
    State(state): State<AppState<S>>,
    Json(input): Json<TodoInput>,
) -> Result<(StatusCode, Json<Todo>), ApiError> {
    let todo = state.service.create_todo(input.description, input.status).await?;
    Ok((StatusCode::CREATED, Json(todo)))
}

async fn update_todo<S: TodoService>(
    State(state): State<AppState<S>>,
    Path(id): Path<String>,
    Json(input): Json<TodoInput>,
) -> Result<Json<Todo>, ApiError> {
    let todo = state.service.edit_todo_by_id(TodoId(id), input).await?;
    Ok(Json(todo))
}

async fn delete_todo<S: TodoService>(
    State(state): State<AppState<S>>,
    Path(id): Path<String>,
) -> Result<StatusCode, ApiError> {
    state.service.delete_todo_by_id(TodoId(id)).await?;
    Ok(StatusCode::NO_CONTENT)
}
