//! Web API module for Yatube.
//!
//! JSON REST API over posts, groups, profiles and follows.

pub mod dto;
pub mod error;
pub mod handlers;
pub mod middleware;
pub mod router;
pub mod server;

pub use error::ApiError;
pub use router::create_router;
pub use server::WebServer;
