//! WebSocket wire format.
//!
//! Both directions use the `project-message` event. Inbound payloads carry
//! only the text; the server tags outbound payloads with the sender identity
//! taken from the connection's verified claims (or the AI sentinel).

use serde::{Deserialize, Serialize};

/// Message type discriminator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MessageType {
    #[serde(rename = "project-message")]
    ProjectMessage,
}

/// Client → server: `{ "type": "project-message", "message": "..." }`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClientProjectMessage {
    pub r#type: MessageType,
    pub message: String,
}

/// Sender identity on the wire.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SenderDto {
    pub id: String,
    pub email: String,
}

/// Server → client: `{ "type": "project-message", "message": "...", "sender": { ... } }`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerProjectMessage {
    pub r#type: MessageType,
    pub message: String,
    pub sender: SenderDto,
}
