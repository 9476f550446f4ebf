//! Comment model for Yatube.

/// Comment under a post. Comments cannot be edited.
#[derive(Debug, Clone, PartialEq, Eq, sqlx::FromRow)]
pub struct Comment {
    /// Unique comment ID.
    pub id: i64,
    /// ID of the commented post.
    pub post_id: i64,
    /// ID of the author.
    pub author_id: i64,
    /// Username of the author.
    pub author_username: String,
    /// Comment text.
    pub text: String,
    /// Creation timestamp.
    pub created_at: String,
}

/// Data for creating a new comment.
#[derive(Debug, Clone)]
pub struct NewComment {
    /// ID of the commented post.
    pub post_id: i64,
    /// ID of the author.
    pub author_id: i64,
    /// Comment text.
    pub text: String,
}

impl NewComment {
    /// Create a new comment.
    pub fn new(post_id: i64, author_id: i64, text: impl Into<String>) -> Self {
        Self {
            post_id,
            author_id,
            text: text.into(),
        }
    }
}
