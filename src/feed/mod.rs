//! Feeds for Yatube.
//!
//! This module provides:
//! - Feed scopes (all posts, a group, an author, subscriptions)
//! - Page-number pagination
//! - Feed assembly from the post store
//! - A short-lived page cache for the index feed

mod assembler;
mod cache;
mod paginator;
mod scope;

pub use assembler::{FeedAssembler, FeedContext, FeedPage};
pub use cache::{PageCache, DEFAULT_MAX_ENTRIES};
pub use paginator::{Page, PageInfo, Paginator, DEFAULT_PAGE_SIZE};
pub use scope::FeedScope;
