pub mod auth;
pub mod dto;
pub mod generation;
pub mod message_pusher;
pub mod repository;
