//! Real-time project channel server library.
//!
//! This library implements the WebSocket channel of the Kobo collaborative
//! project platform: authenticated per-project rooms, message relay and an
//! inline `@ai` assistant backed by an external generation service.

// layers
pub mod domain;
pub mod infrastructure;
pub mod ui;
pub mod usecase;

// shared library
pub mod common;
