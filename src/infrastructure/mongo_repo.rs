use anyhow::Result;
use async_trait::async_trait;
use futures::TryStreamExt;
use mongodb::bson::doc;
use mongodb::{Client, Collection, Database};
use serde::{Deserialize, Serialize};

use crate::domain::{
    repository::TodoRepository,
    todo::{Todo, TodoId, TodoStatus},
};

const COLLECTION: &str = "ToDos";

// Wire shape of a stored todo: the driver keys documents by `_id`, the
// domain type by `id`.
#[derive(Debug, Serialize, Deserialize)]
struct TodoDocument {
    #[serde(rename = "_id")]
    id: String,
    description: String,
    status: TodoStatus,
}

impl From<Todo> for TodoDocument {
    fn from(todo: Todo) -> Self {
        Self { id: todo.id.0, description: todo.description, status: todo.status }
    }
}

impl From<TodoDocument> for Todo {
    fn from(document: TodoDocument) -> Self {
        Self {
            id: TodoId(document.id),
            description: document.description,
            status: document.status,
        }
    }
}

#[derive(Clone)]
pub struct MongoTodoRepository {
    collection: Collection<TodoDocument>,
}

impl MongoTodoRepository {
    pub async fn connect(uri: &str, database: &str) -> Result<Self> {
        let client = Client::with_uri_str(uri).await?;
        Ok(Self::new(client.database(database)))
    }

    pub fn new(database: Database) -> Self {
        Self { collection: database.collection(COLLECTION) }
    }
}

#[async_trait]
impl TodoRepository for MongoTodoRepository {
    async fn find_all(&self) -> Result<Vec<Todo>> {
        let documents: Vec<TodoDocument> =
            self.collection.find(doc! {}).await?.try_collect().await?;
        Ok(documents.into_iter().map(Todo::from).collect())
    }

    async fn find_all_by_status(&self, status: TodoStatus) -> Result<Vec<Todo>> {
        let documents: Vec<TodoDocument> = self
            .collection
            .find(doc! { "status": status.as_str() })
            .await?
            .try_collect()
            .await?;
        Ok(documents.into_iter().map(Todo::from).collect())
    }

    async fn find_by_id(&self, id: &TodoId) -> Result<Option<Todo>> {
        let found = self.collection.find_one(doc! { "_id": id.as_str() }).await?;
        Ok(found.map(Todo::from))
    }

    async fn exists_by_id(&self, id: &TodoId) -> Result<bool> {
        let count = self.collection.count_documents(doc! { "_id": id.as_str() }).await?;
        Ok(count > 0)
    }

    async fn save(&self, todo: Todo) -> Result<Todo> {
        // Upsert: insert when the id is new, full replace when it exists.
        self.collection
            .replace_one(doc! { "_id": todo.id.as_str() }, TodoDocument::from(todo.clone()))
            .upsert(true)
            .await?;
        Ok(todo)
    }

    async fn delete_by_id(&self, id: &TodoId) -> Result<()> {
        self.collection.delete_one(doc! { "_id": id.as_str() }).await?;
        Ok(())
    }
}
