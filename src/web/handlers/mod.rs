//! API handlers for the Web API.

pub mod groups;
pub mod posts;
pub mod profiles;

pub use groups::*;
pub use posts::*;
pub use profiles::*;

use std::time::Duration;

use crate::config::Config;
use crate::feed::{FeedAssembler, PageCache, Paginator};
use crate::Database;

/// Shared application state.
pub struct AppState {
    /// Database handle.
    pub db: Database,
    /// Rendered pages of the site-wide feed.
    pub page_cache: PageCache,
    /// Feed page size.
    pub paginator: Paginator,
}

impl AppState {
    /// Create a new application state.
    pub fn new(db: Database, paginator: Paginator, page_cache: PageCache) -> Self {
        Self {
            db,
            page_cache,
            paginator,
        }
    }

    /// Create the application state from configuration.
    pub fn from_config(db: Database, config: &Config) -> Self {
        Self::new(
            db,
            Paginator::new(config.feed.page_size),
            PageCache::with_capacity(
                Duration::from_secs(config.cache.ttl_secs),
                config.cache.max_entries,
            ),
        )
    }

    /// Feed assembler over this state's database.
    pub fn feeds(&self) -> FeedAssembler<'_> {
        FeedAssembler::with_paginator(&self.db, self.paginator)
    }
}
