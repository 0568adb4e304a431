//! UseCase layer error types.

use thiserror::Error;

use crate::domain::AuthError;

/// Handshake rejection reasons.
///
/// Every variant aborts the connection before any room join; there is no
/// partial admission.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConnectError {
    /// projectId is absent or not a 24-hex-digit identifier
    #[error("invalid project id '{0}'")]
    InvalidProjectId(String),
    /// projectId is well-formed but no such project exists
    #[error("project '{0}' not found")]
    ProjectNotFound(String),
    /// token missing, malformed, expired or wrongly signed
    #[error("authentication error: {0}")]
    Authentication(#[from] AuthError),
}

/// Message relay failures.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RelayError {
    #[error("failed to broadcast message: {0}")]
    BroadcastFailed(String),
}
