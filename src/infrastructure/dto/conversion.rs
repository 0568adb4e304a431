//! Conversion logic between DTOs and domain entities.

use crate::domain::entity;
use crate::infrastructure::dto::websocket as dto;

// ========================================
// Domain Entity → DTO
// ========================================

impl From<entity::Sender> for dto::SenderDto {
    fn from(model: entity::Sender) -> Self {
        Self {
            id: model.id,
            email: model.email,
        }
    }
}

impl From<entity::ChatMessage> for dto::ServerProjectMessage {
    fn from(model: entity::ChatMessage) -> Self {
        Self {
            r#type: dto::MessageType::ProjectMessage,
            message: model.text,
            sender: model.sender.into(),
        }
    }
}
