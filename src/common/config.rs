//! Server configuration loaded from the environment.
//!
//! Host and port come from CLI arguments (see `src/bin/server.rs`); secrets
//! and generation backend settings come from environment variables so they
//! never appear on the command line.

use std::env;

use thiserror::Error;

/// Default generation backend base URL (Gemini-style REST API).
pub const DEFAULT_GENERATION_API_URL: &str =
    "https://generativelanguage.googleapis.com/v1beta";

/// Default generation model.
pub const DEFAULT_GENERATION_MODEL: &str = "gemini-2.5-pro-exp-03-25";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("environment variable '{0}' must be set")]
    MissingEnv(&'static str),
}

/// Settings for the external generation backend.
///
/// Loaded once at startup and never mutated afterwards; the system
/// instruction that constrains the backend's output shape lives in
/// `infrastructure::generation::prompt` and is compiled in.
#[derive(Clone, Debug)]
pub struct GenerationConfig {
    /// Base URL of the generation API
    pub api_url: String,
    /// API key appended as a query parameter
    pub api_key: String,
    /// Model identifier (e.g. "gemini-2.5-pro-exp-03-25")
    pub model: String,
}

/// Process-wide server configuration.
#[derive(Clone, Debug)]
pub struct ServerConfig {
    /// Secret used to verify handshake JWTs
    pub jwt_secret: String,
    /// Generation backend settings
    pub generation: GenerationConfig,
}

impl ServerConfig {
    /// Load configuration from environment variables.
    ///
    /// Required: `JWT_SECRET`, `GOOGLE_API_KEY`.
    /// Optional: `GENERATION_API_URL`, `GENERATION_MODEL`.
    pub fn from_env() -> Result<Self, ConfigError> {
        let jwt_secret =
            env::var("JWT_SECRET").map_err(|_| ConfigError::MissingEnv("JWT_SECRET"))?;

        let api_key =
            env::var("GOOGLE_API_KEY").map_err(|_| ConfigError::MissingEnv("GOOGLE_API_KEY"))?;

        let api_url = env::var("GENERATION_API_URL")
            .unwrap_or_else(|_| DEFAULT_GENERATION_API_URL.to_string());

        let model = env::var("GENERATION_MODEL")
            .unwrap_or_else(|_| DEFAULT_GENERATION_MODEL.to_string());

        Ok(Self {
            jwt_secret,
            generation: GenerationConfig {
                api_url,
                api_key,
                model,
            },
        })
    }
}
