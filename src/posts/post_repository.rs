//! Post repository for Yatube.
//!
//! Every list query returns posts newest first. Rows created within the same
//! millisecond are ordered by ID, so the ordering is total and stable.

use sqlx::QueryBuilder;

use super::post::{NewPost, Post, PostUpdate};
use crate::db::DbPool;
use crate::{Result, YatubeError};

const POST_SELECT: &str = "SELECT p.id, p.text, p.created_at, p.image, p.author_id,
        u.username AS author_username, p.group_id, g.slug AS group_slug
     FROM posts p
     JOIN users u ON u.id = p.author_id
     LEFT JOIN post_groups g ON g.id = p.group_id";

const NEWEST_FIRST: &str = "ORDER BY p.created_at DESC, p.id DESC";

/// Repository for post CRUD operations and feed queries.
pub struct PostRepository<'a> {
    pool: &'a DbPool,
}

impl<'a> PostRepository<'a> {
    /// Create a new PostRepository with the given database pool reference.
    pub fn new(pool: &'a DbPool) -> Self {
        Self { pool }
    }

    /// Create a new post.
    ///
    /// Returns the created post with the assigned ID.
    pub async fn create(&self, new_post: &NewPost) -> Result<Post> {
        let id: i64 = sqlx::query_scalar(
            "INSERT INTO posts (author_id, text, group_id, image) VALUES (?, ?, ?, ?) RETURNING id",
        )
        .bind(new_post.author_id)
        .bind(&new_post.text)
        .bind(new_post.group_id)
        .bind(&new_post.image)
        .fetch_one(self.pool)
        .await?;

        self.get_by_id(id)
            .await?
            .ok_or_else(|| YatubeError::NotFound("post".to_string()))
    }

    /// Get a post by ID.
    pub async fn get_by_id(&self, id: i64) -> Result<Option<Post>> {
        let post = sqlx::query_as::<_, Post>(&format!("{POST_SELECT} WHERE p.id = ?"))
            .bind(id)
            .fetch_optional(self.pool)
            .await?;
        Ok(post)
    }

    /// Update a post by ID.
    ///
    /// Only fields that are set in the update will be modified.
    /// Returns the updated post, or None if not found.
    pub async fn update(&self, id: i64, update: &PostUpdate) -> Result<Option<Post>> {
        if update.is_empty() {
            return self.get_by_id(id).await;
        }

        let mut query: QueryBuilder<sqlx::Sqlite> = QueryBuilder::new("UPDATE posts SET ");
        let mut separated = query.separated(", ");

        if let Some(ref text) = update.text {
            separated.push("text = ");
            separated.push_bind_unseparated(text.clone());
        }
        if let Some(group_id) = update.group_id {
            separated.push("group_id = ");
            separated.push_bind_unseparated(group_id);
        }
        if let Some(ref image) = update.image {
            separated.push("image = ");
            separated.push_bind_unseparated(image.clone());
        }

        query.push(" WHERE id = ");
        query.push_bind(id);

        let result = query.build().execute(self.pool).await?;
        if result.rows_affected() == 0 {
            return Ok(None);
        }

        self.get_by_id(id).await
    }

    /// List one page of all posts.
    pub async fn list_all(&self, offset: i64, limit: i64) -> Result<Vec<Post>> {
        let posts = sqlx::query_as::<_, Post>(&format!(
            "{POST_SELECT} {NEWEST_FIRST} LIMIT ? OFFSET ?"
        ))
        .bind(limit)
        .bind(offset)
        .fetch_all(self.pool)
        .await?;
        Ok(posts)
    }

    /// Count all posts.
    pub async fn count_all(&self) -> Result<i64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM posts")
            .fetch_one(self.pool)
            .await?;
        Ok(count)
    }

    /// List one page of posts in a group.
    pub async fn list_by_group(&self, group_id: i64, offset: i64, limit: i64) -> Result<Vec<Post>> {
        let posts = sqlx::query_as::<_, Post>(&format!(
            "{POST_SELECT} WHERE p.group_id = ? {NEWEST_FIRST} LIMIT ? OFFSET ?"
        ))
        .bind(group_id)
        .bind(limit)
        .bind(offset)
        .fetch_all(self.pool)
        .await?;
        Ok(posts)
    }

    /// Count posts in a group.
    pub async fn count_by_group(&self, group_id: i64) -> Result<i64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM posts WHERE group_id = ?")
            .bind(group_id)
            .fetch_one(self.pool)
            .await?;
        Ok(count)
    }

    /// List one page of posts by an author.
    pub async fn list_by_author(
        &self,
        author_id: i64,
        offset: i64,
        limit: i64,
    ) -> Result<Vec<Post>> {
        let posts = sqlx::query_as::<_, Post>(&format!(
            "{POST_SELECT} WHERE p.author_id = ? {NEWEST_FIRST} LIMIT ? OFFSET ?"
        ))
        .bind(author_id)
        .bind(limit)
        .bind(offset)
        .fetch_all(self.pool)
        .await?;
        Ok(posts)
    }

    /// Count posts by an author.
    pub async fn count_by_author(&self, author_id: i64) -> Result<i64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM posts WHERE author_id = ?")
            .bind(author_id)
            .fetch_one(self.pool)
            .await?;
        Ok(count)
    }

    /// List one page of posts written by anyone `follower_id` follows.
    ///
    /// All followed authors are merged into a single ordering.
    pub async fn list_followed_by(
        &self,
        follower_id: i64,
        offset: i64,
        limit: i64,
    ) -> Result<Vec<Post>> {
        let posts = sqlx::query_as::<_, Post>(&format!(
            "{POST_SELECT}
             JOIN follows f ON f.author_id = p.author_id
             WHERE f.user_id = ? {NEWEST_FIRST} LIMIT ? OFFSET ?"
        ))
        .bind(follower_id)
        .bind(limit)
        .bind(offset)
        .fetch_all(self.pool)
        .await?;
        Ok(posts)
    }

    /// Count posts written by anyone `follower_id` follows.
    pub async fn count_followed_by(&self, follower_id: i64) -> Result<i64> {
        let count: i64 = sqlx::query_scalar(
            "SELECT COUNT(*) FROM posts p
             JOIN follows f ON f.author_id = p.author_id
             WHERE f.user_id = ?",
        )
        .bind(follower_id)
        .fetch_one(self.pool)
        .await?;
        Ok(count)
    }
}
