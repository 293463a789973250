//! Common error types used across the workspace.
//!
//! Each layer defines its own typed errors and converts into
//! [`CatpointError`] via `From` at the port boundary.

/// Top-level error returned by fallible domain and application operations.
#[derive(Debug, thiserror::Error)]
pub enum CatpointError {
    /// A domain invariant was violated.
    #[error("validation error")]
    Validation(#[from] ValidationError),

    /// A referenced item does not exist.
    #[error("not found")]
    NotFound(#[from] NotFoundError),

    /// The cat detector failed to classify an image.
    #[error("cat detector error")]
    Detector(#[source] Box<dyn std::error::Error + Send + Sync>),

    /// A status listener failed to handle a notification.
    #[error("status listener error")]
    Listener(#[source] Box<dyn std::error::Error + Send + Sync>),
}

/// Domain invariant violations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    /// A sensor name was empty or only whitespace.
    #[error("name must not be empty")]
    EmptyName,

    /// A sensor type string did not match any known category.
    #[error("unknown sensor type {0:?}")]
    UnknownSensorType(String),
}

/// Lookup failure for a named item.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{entity} {id} not found")]
pub struct NotFoundError {
    /// Kind of item that was looked up (e.g. `"Sensor"`).
    pub entity: &'static str,
    /// Identifier that was looked up.
    pub id: String,
}
