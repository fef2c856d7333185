//! Common error types used across the workspace.
//!
//! Each layer defines its own typed errors and converts into
//! [`CatalystError`] via `#[from]`.

/// Base error for domain-level failures.
#[derive(Debug, thiserror::Error)]
pub enum CatalystError {
    /// A domain invariant was violated.
    #[error("validation error")]
    Validation(#[from] ValidationError),

    /// The requested record does not exist.
    #[error("not found")]
    NotFound(#[from] NotFoundError),
}

/// Invariant violations detected while building or decoding domain values.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    /// An identifier was empty or whitespace only.
    #[error("identifier must not be empty")]
    EmptyId,

    /// A display name was empty.
    #[error("name must not be empty")]
    EmptyName,
}

/// A lookup by identifier found nothing.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{entity} not found: {id}")]
pub struct NotFoundError {
    /// Kind of record that was looked up (e.g. `"Customer"`).
    pub entity: &'static str,
    /// The identifier that was requested.
    pub id: String,
}
