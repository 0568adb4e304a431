//! Wire DTOs, kept separate from the domain entities.

pub mod conversion;
pub mod http;
pub mod websocket;
