//! Domain DTOs for the todo API.
//!
//! # Design
//! These types mirror the server's schema but are defined independently so the
//! client core carries no Axum dependency. The live integration test catches
//! any schema drift between the two crates.

use serde::{Deserialize, Serialize};

/// A single todo item. Also the request payload for creating one, since the
/// caller chooses the id.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Todo {
    pub id: String,
    pub item: String,
    #[serde(default)]
    pub completed: bool,
}

/// Request payload for updating an existing todo. An empty `item` leaves the
/// server's title untouched; `completed` is always applied.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct UpdateTodo {
    pub item: String,
    pub completed: bool,
}
