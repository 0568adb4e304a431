//! Domain layer: value objects, entities, pure logic and the traits the
//! usecase layer depends on (dependency inversion).

pub mod entity;
pub mod error;
pub mod generation;
pub mod registry;
pub mod service;
pub mod trigger;
pub mod value_object;

pub use entity::{ChatMessage, Project, Sender};
pub use error::{AuthError, GenerationError, MessagePushError, ValueError};
pub use generation::{
    AssistantPayload, CommandSpec, FailureKind, FileNode, GenerationResult, parse_generation_text,
};
pub use registry::{MessagePusher, PusherChannel, RoomRegistry};
pub use service::{Claims, GenerationService, ProjectStore, TokenVerifier};
pub use value_object::{ClientId, ProjectId, ProjectIdFactory, RoomId};
