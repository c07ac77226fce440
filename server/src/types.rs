//! Wire types for the todo API.
//!
//! Every field carries `#[serde(default)]`: a body that omits a field gets the
//! zero value (`""` or `false`) instead of a decode error. Only syntactically
//! broken JSON, or a field of the wrong type, is rejected.

use serde::{Deserialize, Serialize};

/// A single todo record. The `id` is chosen by the client.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Todo {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub item: String,
    #[serde(default)]
    pub completed: bool,
}

impl Todo {
    pub fn new(id: impl Into<String>, item: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            item: item.into(),
            completed: false,
        }
    }
}

/// Body of `PUT /todos/{id}`.
///
/// The body has the full record shape, but its `id` is never used for
/// matching; the path decides which record is updated. An empty `item` leaves
/// the title alone, while `completed` is always written.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct UpdateTodo {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub item: String,
    #[serde(default)]
    pub completed: bool,
}

/// The records present when the process starts.
pub fn seed() -> Vec<Todo> {
    vec![
        Todo::new("1", "Clean Room"),
        Todo::new("2", "Wash the Dishes"),
        Todo::new("3", "Learn English"),
        Todo::new("4", "Go for a walk"),
        Todo::new("5", "Cook a meal"),
    ]
}
