pub mod jwt;

pub use jwt::JwtTokenVerifier;
