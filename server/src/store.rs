//! In-memory todo collection.
//!
//! # Design
//! `TodoStore` is a cheap-to-clone handle around one `RwLock<Vec<Todo>>`.
//! Reads share the lock; every read-modify-write holds the write guard for its
//! whole duration, so a duplicate check and the append that follows it cannot
//! interleave with another create. Records are kept in insertion order and are
//! never removed, and lookups scan for the first matching id.

use std::sync::Arc;

use tokio::sync::RwLock;

use crate::types::{seed, Todo, UpdateTodo};

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum StoreError {
    #[error("todo {0} not found")]
    NotFound(String),

    #[error("todo {0} already exists")]
    AlreadyExists(String),

    #[error("todo id must not be empty")]
    EmptyId,
}

#[derive(Clone, Debug, Default)]
pub struct TodoStore {
    todos: Arc<RwLock<Vec<Todo>>>,
}

impl TodoStore {
    pub fn new(todos: Vec<Todo>) -> Self {
        Self {
            todos: Arc::new(RwLock::new(todos)),
        }
    }

    /// A store holding the five startup records.
    pub fn seeded() -> Self {
        Self::new(seed())
    }

    pub async fn list(&self) -> Vec<Todo> {
        self.todos.read().await.clone()
    }

    pub async fn len(&self) -> usize {
        self.todos.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.todos.read().await.is_empty()
    }

    pub async fn contains(&self, id: &str) -> bool {
        self.todos.read().await.iter().any(|t| t.id == id)
    }

    pub async fn get(&self, id: &str) -> Result<Todo, StoreError> {
        let todos = self.todos.read().await;
        find(&todos, id).cloned()
    }

    pub async fn create(&self, todo: Todo) -> Result<Todo, StoreError> {
        if todo.id.is_empty() {
            return Err(StoreError::EmptyId);
        }
        let mut todos = self.todos.write().await;
        if todos.iter().any(|t| t.id == todo.id) {
            return Err(StoreError::AlreadyExists(todo.id));
        }
        todos.push(todo.clone());
        tracing::debug!(id = %todo.id, total = todos.len(), "todo created");
        Ok(todo)
    }

    pub async fn toggle(&self, id: &str) -> Result<Todo, StoreError> {
        let mut todos = self.todos.write().await;
        let todo = find_mut(&mut todos, id)?;
        todo.completed = !todo.completed;
        tracing::debug!(id, completed = todo.completed, "todo toggled");
        Ok(todo.clone())
    }

    /// Apply `input` to the record with `id`. A non-empty `item` replaces the
    /// title; `completed` is always overwritten.
    pub async fn update(&self, id: &str, input: UpdateTodo) -> Result<Todo, StoreError> {
        let mut todos = self.todos.write().await;
        let todo = find_mut(&mut todos, id)?;
        if !input.item.is_empty() {
            todo.item = input.item;
        }
        todo.completed = input.completed;
        tracing::debug!(id, completed = todo.completed, "todo updated");
        Ok(todo.clone())
    }
}

fn find<'a>(todos: &'a [Todo], id: &str) -> Result<&'a Todo, StoreError> {
    todos
        .iter()
        .find(|t| t.id == id)
        .ok_or_else(|| StoreError::NotFound(id.to_string()))
}

fn find_mut<'a>(todos: &'a mut [Todo], id: &str) -> Result<&'a mut Todo, StoreError> {
    todos
        .iter_mut()
        .find(|t| t.id == id)
        .ok_or_else(|| StoreError::NotFound(id.to_string()))
}
