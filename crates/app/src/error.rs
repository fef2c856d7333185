//! Errors raised at the port boundaries of the client.

/// Failure to fetch a resource from the risk API.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FetchError {
    /// The API answered `404`.
    #[error("resource not found")]
    NotFound,

    /// The API answered with another non-success status.
    #[error("unexpected HTTP status {0}")]
    Status(u16),

    /// The request never produced a response.
    #[error("request failed: {0}")]
    Transport(String),

    /// The response body did not have the expected shape.
    #[error("invalid response body: {0}")]
    Decode(String),
}

impl FetchError {
    /// Classify a non-success HTTP status.
    #[must_use]
    pub fn from_status(status: u16) -> Self {
        if status == 404 {
            Self::NotFound
        } else {
            Self::Status(status)
        }
    }
}

/// Failure to establish a session.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AuthError {
    /// The identity service refused the credentials.
    #[error("credentials rejected")]
    Rejected,
}

/// Failure to record an applied intervention.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum InterventionError {
    /// The sink did not acknowledge the command.
    #[error("intervention was not acknowledged: {0}")]
    NotAcknowledged(String),
}
