pub mod http;
pub mod prompt;

pub use http::HttpGenerationClient;
