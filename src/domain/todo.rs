use std::fmt;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(transparent)]
pub struct TodoId(pub String);

impl TodoId {
    // Minted once at creation; updates never regenerate it.
    pub fn generate() -> Self { Self(Uuid::new_v4().to_string()) }

    pub fn as_str(&self) -> &str { &self.0 }
}

impl From<String> for TodoId {
    fn from(value: String) -> Self { Self(value) }
}

impl fmt::Display for TodoId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result { f.write_str(&self.0) }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TodoStatus { Open, InProgress, Done }

impl TodoStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            TodoStatus::Open => "OPEN",
            TodoStatus::InProgress => "IN_PROGRESS",
            TodoStatus::Done => "DONE",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Todo {
    pub id: TodoId,
    pub description: String,
    pub status: TodoStatus,
}

/// Client-supplied fields for create and update. Any id in the payload is
/// dropped at deserialization; the server owns id assignment.
#[derive(Debug, Clone, Deserialize)]
pub struct TodoInput {
    pub description: String,
    pub status: TodoStatus,
}
