//! Comment repository for Yatube.

use super::comment::{Comment, NewComment};
use crate::db::DbPool;
use crate::{Result, YatubeError};

const COMMENT_SELECT: &str = "SELECT c.id, c.post_id, c.author_id, u.username AS author_username,
        c.text, c.created_at
     FROM comments c
     JOIN users u ON u.id = c.author_id";

/// Repository for comments.
pub struct CommentRepository<'a> {
    pool: &'a DbPool,
}

impl<'a> CommentRepository<'a> {
    /// Create a new CommentRepository with the given database pool reference.
    pub fn new(pool: &'a DbPool) -> Self {
        Self { pool }
    }

    /// Create a new comment.
    pub async fn create(&self, new_comment: &NewComment) -> Result<Comment> {
        let id: i64 = sqlx::query_scalar(
            "INSERT INTO comments (post_id, author_id, text) VALUES (?, ?, ?) RETURNING id",
        )
        .bind(new_comment.post_id)
        .bind(new_comment.author_id)
        .bind(&new_comment.text)
        .fetch_one(self.pool)
        .await?;

        self.get_by_id(id)
            .await?
            .ok_or_else(|| YatubeError::NotFound("comment".to_string()))
    }

    /// Get a comment by ID.
    pub async fn get_by_id(&self, id: i64) -> Result<Option<Comment>> {
        let comment = sqlx::query_as::<_, Comment>(&format!("{COMMENT_SELECT} WHERE c.id = ?"))
            .bind(id)
            .fetch_optional(self.pool)
            .await?;
        Ok(comment)
    }

    /// List comments on a post, oldest first.
    pub async fn list_by_post(&self, post_id: i64) -> Result<Vec<Comment>> {
        let comments = sqlx::query_as::<_, Comment>(&format!(
            "{COMMENT_SELECT} WHERE c.post_id = ? ORDER BY c.created_at ASC, c.id ASC"
        ))
        .bind(post_id)
        .fetch_all(self.pool)
        .await?;
        Ok(comments)
    }

    /// Count comments on a post.
    pub async fn count_by_post(&self, post_id: i64) -> Result<i64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM comments WHERE post_id = ?")
            .bind(post_id)
            .fetch_one(self.pool)
            .await?;
        Ok(count)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::{NewUser, UserRepository};
    use crate::posts::{NewPost, PostRepository};
    use crate::Database;

    #[tokio::test]
    async fn test_create_and_list_comments() {
        let db = Database::open_in_memory().await.unwrap();
        let users = UserRepository::new(db.pool());
        let author = users.create(&NewUser::new("auth")).await.unwrap();
        let reader = users.create(&NewUser::new("reader")).await.unwrap();
        let post = PostRepository::new(db.pool())
            .create(&NewPost::new(author.id, "Test post"))
            .await
            .unwrap();
        let repo = CommentRepository::new(db.pool());

        repo.create(&NewComment::new(post.id, reader.id, "first"))
            .await
            .unwrap();
        let second = repo
            .create(&NewComment::new(post.id, author.id, "second"))
            .await
            .unwrap();

        assert_eq!(second.author_username, "auth");

        let texts: Vec<String> = repo
            .list_by_post(post.id)
            .await
            .unwrap()
            .into_iter()
            .map(|c| c.text)
            .collect();
        assert_eq!(texts, vec!["first", "second"]);
        assert_eq!(repo.count_by_post(post.id).await.unwrap(), 2);
    }

    #[tokio::test]
    async fn test_comment_on_missing_post_fails() {
        let db = Database::open_in_memory().await.unwrap();
        let user = UserRepository::new(db.pool())
            .create(&NewUser::new("auth"))
            .await
            .unwrap();

        let result = CommentRepository::new(db.pool())
            .create(&NewComment::new(77, user.id, "lost"))
            .await;
        assert!(result.is_err());
    }
}
