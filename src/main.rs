use std::net::SocketAddr;

use todo_api::application::todo_service::TodoServiceImpl;
use todo_api::http::routes::{self, todos};
use todo_api::infrastructure::mongo_repo::MongoTodoRepository;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let _ = dotenvy::dotenv();
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    let uri = std::env::var("MONGODB_URI")
        .unwrap_or_else(|_| "mongodb://localhost:27017".to_string());
    let database = std::env::var("MONGODB_DATABASE").unwrap_or_else(|_| "todos".to_string());
    let repo = MongoTodoRepository::connect(&uri, &database).await?;
    let service = TodoServiceImpl::new(repo);
    let router = routes::app(todos::router(todos::AppState { service }));

    let addr: SocketAddr = "127.0.0.1:3000".parse()?;
    tracing::info!(%addr, "listening");
    axum::serve(tokio::net::TcpListener::bind(addr).await?, router)
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    Ok(())
}

async fn shutdown_signal() {
    let _ = tokio::signal::ctrl_c().await;
    tracing::info!("shutdown");
}
