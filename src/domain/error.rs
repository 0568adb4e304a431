//! Domain error types.

use thiserror::Error;

/// Validation errors for value objects.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValueError {
    #[error("client_id must not be empty")]
    EmptyClientId,
    #[error("'{0}' is not a valid project id (expected 24 hex digits)")]
    InvalidProjectId(String),
}

/// Errors raised while verifying a handshake token.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum AuthError {
    #[error("no token supplied")]
    MissingToken,
    #[error("token verification failed: {0}")]
    InvalidToken(String),
}

/// Errors raised by the external generation call itself.
///
/// A successful call whose *text* cannot be interpreted is not a
/// `GenerationError`; that case is handled by the sanitizer/parser, which
/// returns a `GenerationResult::Failure` instead of an error.
#[derive(Debug, Error)]
pub enum GenerationError {
    #[error("generation request failed: {0}")]
    Request(#[from] reqwest::Error),
    #[error("generation backend returned status {0}")]
    Status(u16),
    #[error("generation backend returned no candidates")]
    EmptyResponse,
}

/// Errors raised while pushing messages to connected clients.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum MessagePushError {
    #[error("failed to push message: {0}")]
    PushFailed(String),
}
