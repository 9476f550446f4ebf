//! Feed assembly.
//!
//! Resolves a [`FeedScope`] to one page of posts, newest first.

use tracing::debug;

use super::paginator::{Page, Paginator};
use super::scope::FeedScope;
use crate::db::{Database, User, UserRepository};
use crate::posts::{Group, GroupRepository, Post, PostRepository};
use crate::{Result, YatubeError};

/// What a feed page was drawn from, resolved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FeedContext {
    /// The site-wide feed.
    All,
    /// A group feed.
    Group(Group),
    /// An author's profile feed.
    Author(User),
    /// The subscriptions feed of a user.
    Following(i64),
}

/// One page of a feed together with the resolved scope.
#[derive(Debug, Clone)]
pub struct FeedPage {
    /// The posts and page metadata.
    pub page: Page<Post>,
    /// Resolved scope metadata.
    pub context: FeedContext,
}

/// Builds paginated post feeds.
pub struct FeedAssembler<'a> {
    db: &'a Database,
    paginator: Paginator,
}

impl<'a> FeedAssembler<'a> {
    /// Create an assembler using the default page size.
    pub fn new(db: &'a Database) -> Self {
        Self::with_paginator(db, Paginator::default())
    }

    /// Create an assembler with a custom paginator.
    pub fn with_paginator(db: &'a Database, paginator: Paginator) -> Self {
        Self { db, paginator }
    }

    /// Get page `page` of the feed for `scope`.
    ///
    /// Unknown group slugs and usernames fail with NotFound. A page past the
    /// end yields no items.
    pub async fn get_feed(&self, scope: &FeedScope, page: u32) -> Result<FeedPage> {
        let posts = PostRepository::new(self.db.pool());
        let page = self.paginator.normalize(page);
        let offset = self.paginator.offset(page);
        let limit = self.paginator.limit();

        let (items, total, context) = match scope {
            FeedScope::All => (
                posts.list_all(offset, limit).await?,
                posts.count_all().await?,
                FeedContext::All,
            ),
            FeedScope::Group(slug) => {
                let group = GroupRepository::new(self.db.pool())
                    .get_by_slug(slug)
                    .await?
                    .ok_or_else(|| YatubeError::NotFound("group".to_string()))?;
                (
                    posts.list_by_group(group.id, offset, limit).await?,
                    posts.count_by_group(group.id).await?,
                    FeedContext::Group(group),
                )
            }
            FeedScope::Author(username) => {
                let author = UserRepository::new(self.db.pool())
                    .get_by_username(username)
                    .await?
                    .ok_or_else(|| YatubeError::NotFound("user".to_string()))?;
                (
                    posts.list_by_author(author.id, offset, limit).await?,
                    posts.count_by_author(author.id).await?,
                    FeedContext::Author(author),
                )
            }
            FeedScope::Following(user_id) => (
                posts.list_followed_by(*user_id, offset, limit).await?,
                posts.count_followed_by(*user_id).await?,
                FeedContext::Following(*user_id),
            ),
        };

        debug!(scope = %scope, page, items = items.len(), total, "feed assembled");

        Ok(FeedPage {
            page: self.paginator.page(page, items, total.max(0) as u64),
            context,
        })
    }
}
