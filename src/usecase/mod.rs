//! UseCase layer: one struct per channel operation, depending only on the
//! domain traits.

pub mod connect_participant;
pub mod disconnect_participant;
pub mod error;
pub mod invoke_assistant;
pub mod relay_message;

pub use connect_participant::{Connection, ConnectParticipantUseCase, HandshakeParams};
pub use disconnect_participant::DisconnectParticipantUseCase;
pub use error::{ConnectError, RelayError};
pub use invoke_assistant::InvokeAssistantUseCase;
pub use relay_message::RelayMessageUseCase;
