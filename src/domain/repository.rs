use async_trait::async_trait;

use super::todo::{Todo, TodoId, TodoStatus};

/// Pass-through contract over the document store's native operations.
/// `delete_by_id` on an absent id is a silent no-op; callers that need an
/// error must check existence first.
#[async_trait]
pub trait TodoRepository: Send + Sync + 'static {
    async fn find_all(&self) -> anyhow::Result<Vec<Todo>>;
    async fn find_all_by_status(&self, status: TodoStatus) -> anyhow::Result<Vec<Todo>>;
    async fn find_by_id(&self, id: &TodoId) -> anyhow::Result<Option<Todo>>;
    async fn exists_by_id(&self, id: &TodoId) -> anyhow::Result<bool>;
    async fn save(&self, todo: Todo) -> anyhow::Result<Todo>;
    async fn delete_by_id(&self, id: &TodoId) -> anyhow::Result<()>;
}
