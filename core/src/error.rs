//! Error types for the todo API client.
//!
//! # Design
//! The three statuses the server uses for request-level failures each get a
//! dedicated variant. Any other unexpected status lands in `HttpError` with
//! the raw status code and body for debugging.

/// Errors returned by `TodoClient` build and parse methods.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// The server returned 404: no todo has the requested id.
    #[error("resource not found")]
    NotFound,

    /// The server returned 417: a todo with the same id already exists.
    #[error("conflict: {0}")]
    Conflict(String),

    /// The server returned 400: the request body was rejected.
    #[error("bad request: {0}")]
    BadRequest(String),

    /// The server returned some other unexpected status.
    #[error("HTTP {status}: {body}")]
    HttpError { status: u16, body: String },

    #[error("deserialization failed: {0}")]
    DeserializationError(String),

    #[error("serialization failed: {0}")]
    SerializationError(String),
}
