use async_trait::async_trait;
use thiserror::Error;

use crate::domain::repository::TodoRepository;
use crate::domain::todo::{Todo, TodoId, TodoInput, TodoStatus};

#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("todo not found with id: {0}")]
    NotFound(TodoId),
    #[error(transparent)]
    Repository(#[from] anyhow::Error),
}

pub type Result<T> = std::result::Result<T, ServiceError>;

#[async_trait]
pub trait TodoService: Send + Sync + 'static {
    async fn get_all_todos(&self) -> Result<Vec<Todo>>;
    async fn get_all_todos_by_status(&self, status: TodoStatus) -> Result<Vec<Todo>>;
    async fn get_todo_by_id(&self, id: TodoId) -> Result<Todo>;
    async fn create_todo(&self, description: String, status: TodoStatus) -> Result<Todo>;
    async fn edit_todo_by_id(&self, id: TodoId, input: TodoInput) -> Result<Todo>;
    async fn delete_todo_by_id(&self, id: TodoId) -> Result<()>;
}

#[derive(Clone)]
pub struct TodoServiceImpl<R: TodoRepository> {
    repo: R,
}

impl<R: TodoRepository> TodoServiceImpl<R> {
    pub fn new(repo: R) -> Self { Self { repo } }
}

#[async_trait]
impl<R: TodoRepository> TodoService for TodoServiceImpl<R> {
    async fn get_all_todos(&self) -> Result<Vec<Todo>> {
        Ok(self.repo.find_all().await?)
    }

    async fn get_all_todos_by_status(&self, status: TodoStatus) -> Result<Vec<Todo>> {
        Ok(self.repo.find_all_by_status(status).await?)
    }

    async fn get_todo_by_id(&self, id: TodoId) -> Result<Todo> {
        self.repo
            .find_by_id(&id)
            .await?
            .ok_or(ServiceError::NotFound(id))
    }

    async fn create_todo(&self, description: String, status: TodoStatus) -> Result<Todo> {
        let todo = Todo { id: TodoId::generate(), description, status };
        Ok(self.repo.save(todo).await?)
    }

    async fn edit_todo_by_id(&self, id: TodoId, input: TodoInput) -> Result<Todo> {
        // Full replace; the path id wins over anything in the payload.
        if !self.repo.exists_by_id(&id).await? {
            return Err(ServiceError::NotFound(id));
        }
        let updated = Todo { id, description: input.description, status: input.status };
        Ok(self.repo.save(updated).await?)
    }

    async fn delete_todo_by_id(&self, id: TodoId) -> Result<()> {
        if !self.repo.exists_by_id(&id).await? {
            return Err(ServiceError::NotFound(id));
        }
        Ok(self.repo.delete_by_id(&id).await?)
    }
}
