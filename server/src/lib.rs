//! In-memory todo HTTP service.
//!
//! # Overview
//! Five routes over one ordered collection of todos: list, get, create,
//! toggle (`PATCH`) and update (`PUT`). There is no delete. State lives in a
//! [`TodoStore`] built at startup and is gone when the process exits.
//!
//! # Design
//! - Ids are client-assigned strings and are matched verbatim.
//! - Creating a todo whose id is already taken is a 417.
//! - All store access is serialized through one `RwLock`.

pub mod config;
pub mod error;
pub mod handlers;
pub mod store;
pub mod types;

use axum::{routing::get, Router};
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;

pub use config::Config;
pub use error::AppError;
pub use store::{StoreError, TodoStore};
pub use types::{Todo, UpdateTodo};

/// Router over a freshly seeded store.
pub fn app() -> Router {
    router(TodoStore::seeded())
}

pub fn router(store: TodoStore) -> Router {
    Router::new()
        .route(
            "/todos",
            get(handlers::list_todos).post(handlers::create_todo),
        )
        .route(
            "/todos/{id}",
            get(handlers::get_todo)
                .patch(handlers::toggle_todo)
                .put(handlers::update_todo),
        )
        .layer(TraceLayer::new_for_http())
        .with_state(store)
}

pub async fn run(listener: TcpListener) -> Result<(), std::io::Error> {
    axum::serve(listener, app()).await
}
