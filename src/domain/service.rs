//! External collaborator traits consumed by the channel.
//!
//! UseCase 層はこれらの trait にのみ依存し、Infrastructure 層の具体的な
//! 実装（JWT、HTTP クライアント、インメモリストア）には依存しません。

use async_trait::async_trait;
#[cfg(test)]
use mockall::automock;
use serde::{Deserialize, Serialize};

use super::entity::Project;
use super::error::{AuthError, GenerationError};
use super::value_object::ProjectId;

/// Identity claims carried by a verified handshake token.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claims {
    /// User id of the token holder
    pub id: String,
    /// Email of the token holder
    pub email: String,
    /// Issued-at (unix seconds)
    pub iat: i64,
    /// Expiry (unix seconds)
    pub exp: i64,
}

/// Verification of opaque bearer tokens.
#[cfg_attr(test, automock)]
pub trait TokenVerifier: Send + Sync {
    /// Validate signature and expiry, yielding the caller's claims.
    fn verify(&self, token: &str) -> Result<Claims, AuthError>;
}

/// Lookup of project resources by id (the platform's project store).
#[cfg_attr(test, automock)]
#[async_trait]
pub trait ProjectStore: Send + Sync {
    /// Resolve a project, or `None` when no such project exists.
    async fn resolve(&self, id: &ProjectId) -> Option<Project>;
}

/// The external text-generation service.
///
/// One call per trigger; no retry or backoff. The fixed system instruction
/// is configuration of the implementation, not a per-call argument.
#[cfg_attr(test, automock)]
#[async_trait]
pub trait GenerationService: Send + Sync {
    /// Send `prompt` to the backend and return its raw text output.
    async fn generate(&self, prompt: &str) -> Result<String, GenerationError>;
}
