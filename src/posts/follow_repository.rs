//! Follow edge repository for Yatube.

use super::follow::Follow;
use crate::db::{DbPool, User};
use crate::Result;

/// Repository for follow edges.
pub struct FollowRepository<'a> {
    pool: &'a DbPool,
}

impl<'a> FollowRepository<'a> {
    /// Create a new FollowRepository with the given database pool reference.
    pub fn new(pool: &'a DbPool) -> Self {
        Self { pool }
    }

    /// Insert the edge unless it already exists.
    ///
    /// Returns true if a new edge was written.
    pub async fn insert_if_absent(&self, user_id: i64, author_id: i64) -> Result<bool> {
        let result = sqlx::query(
            "INSERT INTO follows (user_id, author_id) VALUES (?, ?)
             ON CONFLICT (user_id, author_id) DO NOTHING",
        )
        .bind(user_id)
        .bind(author_id)
        .execute(self.pool)
        .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Delete the edge.
    ///
    /// Returns true if an edge was deleted, false if there was none.
    pub async fn delete(&self, user_id: i64, author_id: i64) -> Result<bool> {
        let result = sqlx::query("DELETE FROM follows WHERE user_id = ? AND author_id = ?")
            .bind(user_id)
            .bind(author_id)
            .execute(self.pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Get the edge between two users, if any.
    pub async fn get(&self, user_id: i64, author_id: i64) -> Result<Option<Follow>> {
        let follow = sqlx::query_as::<_, Follow>(
            "SELECT id, user_id, author_id, created_at FROM follows
             WHERE user_id = ? AND author_id = ?",
        )
        .bind(user_id)
        .bind(author_id)
        .fetch_optional(self.pool)
        .await?;
        Ok(follow)
    }

    /// Check whether `user_id` follows `author_id`.
    pub async fn exists(&self, user_id: i64, author_id: i64) -> Result<bool> {
        let exists: bool = sqlx::query_scalar(
            "SELECT EXISTS(SELECT 1 FROM follows WHERE user_id = ? AND author_id = ?)",
        )
        .bind(user_id)
        .bind(author_id)
        .fetch_one(self.pool)
        .await?;
        Ok(exists)
    }

    /// List the users `user_id` follows, by username.
    pub async fn list_following(&self, user_id: i64) -> Result<Vec<User>> {
        let users = sqlx::query_as::<_, User>(
            "SELECT u.id, u.username, u.created_at FROM users u
             JOIN follows f ON f.author_id = u.id
             WHERE f.user_id = ? ORDER BY u.username",
        )
        .bind(user_id)
        .fetch_all(self.pool)
        .await?;
        Ok(users)
    }

    /// Count the followers of an author.
    pub async fn count_followers(&self, author_id: i64) -> Result<i64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM follows WHERE author_id = ?")
            .bind(author_id)
            .fetch_one(self.pool)
            .await?;
        Ok(count)
    }

    /// Count the authors a user follows.
    pub async fn count_following(&self, user_id: i64) -> Result<i64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM follows WHERE user_id = ?")
            .bind(user_id)
            .fetch_one(self.pool)
            .await?;
        Ok(count)
    }
}
