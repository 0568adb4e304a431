//! Domain entities for the project channel.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::generation::GenerationResult;
use super::value_object::ProjectId;

/// A project resource, read-mostly from the channel's point of view.
///
/// The channel only consumes `id`; `name`, `members` and `file_tree` belong
/// to the platform's CRUD surface and are never mutated here.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Project {
    pub id: ProjectId,
    pub name: String,
    /// Ids of the users who belong to this project
    pub members: Vec<String>,
    /// Opaque nested file-tree blob managed by the platform
    pub file_tree: Value,
}

impl Project {
    pub fn new(id: ProjectId, name: String, members: Vec<String>) -> Self {
        Self {
            id,
            name,
            members,
            file_tree: Value::Null,
        }
    }
}

/// The author of a chat message: either a human participant (identity taken
/// from the verified token claims) or the fixed AI sentinel.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Sender {
    pub id: String,
    pub email: String,
}

impl Sender {
    pub fn new(id: String, email: String) -> Self {
        Self { id, email }
    }

    /// The fixed identity attached to every AI-generated message.
    pub fn ai() -> Self {
        Self {
            id: "ai".to_string(),
            email: "AI".to_string(),
        }
    }
}

/// A chat message flowing through a room.
///
/// Transient value: messages are relayed, never persisted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub sender: Sender,
    pub text: String,
}

impl ChatMessage {
    pub fn new(sender: Sender, text: String) -> Self {
        Self { sender, text }
    }

    /// Build the room-visible message for a generation outcome.
    ///
    /// A well-formed assistant payload contributes its `text`; a failure
    /// contributes its diagnostic message, so the room always sees that
    /// something happened.
    pub fn from_generation(result: &GenerationResult) -> Self {
        let text = match result {
            GenerationResult::Assistant(payload) => payload.text.clone(),
            GenerationResult::Failure { message, .. } => message.clone(),
        };
        Self {
            sender: Sender::ai(),
            text,
        }
    }
}
