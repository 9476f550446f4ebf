//! Follow-graph service for Yatube.

use tracing::{debug, info};

use super::follow_repository::FollowRepository;
use crate::db::{Database, User, UserRepository};
use crate::viewer::Viewer;
use crate::{Result, YatubeError};

/// What a call to [`FollowService::follow`] did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FollowOutcome {
    /// A new edge was created.
    Created,
    /// The edge already existed.
    AlreadyFollowing,
    /// The viewer tried to follow themselves; nothing was written.
    SelfFollow,
}

/// Service managing follow edges between users.
pub struct FollowService<'a> {
    db: &'a Database,
}

impl<'a> FollowService<'a> {
    /// Create a new FollowService with the given database reference.
    pub fn new(db: &'a Database) -> Self {
        Self { db }
    }

    async fn resolve_author(&self, username: &str) -> Result<User> {
        UserRepository::new(self.db.pool())
            .get_by_username(username)
            .await?
            .ok_or_else(|| YatubeError::NotFound("user".to_string()))
    }

    /// Make the viewer follow `username`.
    ///
    /// Following yourself or someone already followed succeeds without
    /// writing anything.
    pub async fn follow(&self, viewer: &Viewer, username: &str) -> Result<FollowOutcome> {
        let follower = viewer.require_user("follow authors")?;
        let author = self.resolve_author(username).await?;

        if follower.id == author.id {
            debug!(user = %follower.username, "ignoring self-follow");
            return Ok(FollowOutcome::SelfFollow);
        }

        let created = FollowRepository::new(self.db.pool())
            .insert_if_absent(follower.id, author.id)
            .await?;

        if created {
            info!(follower = %follower.username, author = %author.username, "follow created");
            Ok(FollowOutcome::Created)
        } else {
            Ok(FollowOutcome::AlreadyFollowing)
        }
    }

    /// Make the viewer stop following `username`.
    ///
    /// Unfollowing yourself succeeds without writing anything. Otherwise
    /// fails with NotFound when there is no edge to remove.
    pub async fn unfollow(&self, viewer: &Viewer, username: &str) -> Result<()> {
        let follower = viewer.require_user("unfollow authors")?;
        let author = self.resolve_author(username).await?;

        if follower.id == author.id {
            debug!(user = %follower.username, "ignoring self-unfollow");
            return Ok(());
        }

        let deleted = FollowRepository::new(self.db.pool())
            .delete(follower.id, author.id)
            .await?;
        if !deleted {
            return Err(YatubeError::NotFound("follow".to_string()));
        }

        info!(follower = %follower.username, author = %author.username, "follow removed");
        Ok(())
    }

    /// Check whether `follower_id` follows `author_id`.
    pub async fn is_following(&self, follower_id: i64, author_id: i64) -> Result<bool> {
        FollowRepository::new(self.db.pool())
            .exists(follower_id, author_id)
            .await
    }

    /// Check whether the viewer follows `author_id`. Anonymous viewers follow no one.
    pub async fn viewer_follows(&self, viewer: &Viewer, author_id: i64) -> Result<bool> {
        match viewer.user_id() {
            Some(follower_id) => self.is_following(follower_id, author_id).await,
            None => Ok(false),
        }
    }

    /// List the authors the viewer follows.
    pub async fn following(&self, viewer: &Viewer) -> Result<Vec<User>> {
        let follower = viewer.require_user("list subscriptions")?;
        FollowRepository::new(self.db.pool())
            .list_following(follower.id)
            .await
    }

    /// Count the followers of an author.
    pub async fn follower_count(&self, author_id: i64) -> Result<i64> {
        FollowRepository::new(self.db.pool())
            .count_followers(author_id)
            .await
    }

    /// Count the authors a user follows.
    pub async fn following_count(&self, user_id: i64) -> Result<i64> {
        FollowRepository::new(self.db.pool())
            .count_following(user_id)
            .await
    }
}
