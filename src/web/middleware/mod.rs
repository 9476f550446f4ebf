//! Middleware for the Web API.

pub mod auth;
pub mod cors;

pub use auth::{jwt_auth, CurrentViewer, JwtClaims, JwtState};
pub use cors::create_cors_layer;
