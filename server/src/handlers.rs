//! Route handlers.
//!
//! Request bodies arrive as raw bytes and are decoded with `serde_json`, so a
//! malformed body is a 400 regardless of the `Content-Type` header. Only a
//! JSON object is accepted as a body; arrays and scalars are a 400. `PUT`
//! resolves the id before it looks at the body: an unknown id is a 404 even
//! when the body is also broken.

use axum::{
    body::Bytes,
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::error::AppError;
use crate::store::TodoStore;
use crate::types::{Todo, UpdateTodo};

pub async fn list_todos(State(store): State<TodoStore>) -> Json<Vec<Todo>> {
    Json(store.list().await)
}

pub async fn get_todo(
    State(store): State<TodoStore>,
    Path(id): Path<String>,
) -> Result<Json<Todo>, AppError> {
    Ok(Json(store.get(&id).await?))
}

pub async fn create_todo(
    State(store): State<TodoStore>,
    body: Bytes,
) -> Result<(StatusCode, Json<Todo>), AppError> {
    let input: Todo = decode_object(&body)?;
    let todo = store.create(input).await.inspect_err(|err| {
        tracing::warn!(error = %err, "create rejected");
    })?;
    tracing::info!(id = %todo.id, "todo added");
    Ok((StatusCode::CREATED, Json(todo)))
}

pub async fn toggle_todo(
    State(store): State<TodoStore>,
    Path(id): Path<String>,
) -> Result<Json<Todo>, AppError> {
    Ok(Json(store.toggle(&id).await?))
}

pub async fn update_todo(
    State(store): State<TodoStore>,
    Path(id): Path<String>,
    body: Bytes,
) -> Result<Json<Todo>, AppError> {
    // Records are never removed, so a hit here still holds at update time.
    if !store.contains(&id).await {
        return Err(AppError::not_found(format!("todo {id} not found")));
    }
    let input: UpdateTodo = decode_object(&body)?;
    Ok(Json(store.update(&id, input).await?))
}

fn decode_object<T: DeserializeOwned>(body: &[u8]) -> Result<T, AppError> {
    match serde_json::from_slice::<Value>(body)? {
        value @ Value::Object(_) => Ok(serde_json::from_value(value)?),
        _ => Err(AppError::bad_request("invalid JSON: expected a todo object")),
    }
}
