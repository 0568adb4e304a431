//! Value objects for the project channel.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::error::ValueError;

/// Identifier of a single WebSocket connection.
///
/// Generated by the server at handshake time; a room holds `ClientId`s as a
/// membership relation, never the connection itself.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ClientId(String);

impl ClientId {
    pub fn new(value: String) -> Result<Self, ValueError> {
        if value.is_empty() {
            return Err(ValueError::EmptyClientId);
        }
        Ok(Self(value))
    }

    /// Generate a fresh connection id.
    pub fn generate() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Identifier of a project resource.
///
/// The platform's project store issues ObjectId-style identifiers: exactly
/// 24 ASCII hex digits. Anything else is rejected before the project is
/// even looked up.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ProjectId(String);

impl ProjectId {
    pub fn new(value: String) -> Result<Self, ValueError> {
        if value.len() != 24 || !value.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(ValueError::InvalidProjectId(value));
        }
        Ok(Self(value))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Factory for project ids.
///
/// Used where the server itself has to mint an id (the seeded demo project,
/// tests). Derives 24 hex digits from a UUIDv4.
pub struct ProjectIdFactory;

impl ProjectIdFactory {
    pub fn generate() -> Result<ProjectId, ValueError> {
        let hex = Uuid::new_v4().simple().to_string();
        ProjectId::new(hex[..24].to_string())
    }
}

/// Identifier of a room.
///
/// A room id equals the id of the project the room belongs to and is stable
/// for the lifetime of every connection joined to it.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RoomId(String);

impl RoomId {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&ProjectId> for RoomId {
    fn from(project_id: &ProjectId) -> Self {
        Self(project_id.as_str().to_string())
    }
}
