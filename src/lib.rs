//! Yatube - a small blogging service.
//!
//! Users publish posts, file them under groups, comment on them and follow
//! each other. Feeds are paginated and the site-wide feed is page-cached.

pub mod config;
pub mod db;
pub mod error;
pub mod feed;
pub mod logging;
pub mod posts;
pub mod viewer;
pub mod web;

pub use config::Config;
pub use db::{Database, NewUser, User, UserRepository};
pub use error::{Result, YatubeError};
pub use feed::{FeedAssembler, FeedScope};
pub use viewer::Viewer;
