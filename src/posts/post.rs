//! Post model for Yatube.

/// Post as read from the database.
///
/// Rows are joined with the author and the group so feeds can be shown
/// without follow-up lookups.
#[derive(Debug, Clone, PartialEq, Eq, sqlx::FromRow)]
pub struct Post {
    /// Unique post ID.
    pub id: i64,
    /// Post text.
    pub text: String,
    /// Creation timestamp (UTC, millisecond precision).
    pub created_at: String,
    /// Stored image path, if any.
    pub image: Option<String>,
    /// ID of the author.
    pub author_id: i64,
    /// Username of the author.
    pub author_username: String,
    /// ID of the group, if the post is filed under one.
    pub group_id: Option<i64>,
    /// Slug of the group, if any.
    pub group_slug: Option<String>,
}

impl Post {
    /// Check if the given user wrote this post.
    pub fn is_authored_by(&self, user_id: i64) -> bool {
        self.author_id == user_id
    }
}

/// Data for creating a new post.
#[derive(Debug, Clone)]
pub struct NewPost {
    /// ID of the author.
    pub author_id: i64,
    /// Post text.
    pub text: String,
    /// Optional group ID.
    pub group_id: Option<i64>,
    /// Optional stored image path.
    pub image: Option<String>,
}

impl NewPost {
    /// Create a new post without group or image.
    pub fn new(author_id: i64, text: impl Into<String>) -> Self {
        Self {
            author_id,
            text: text.into(),
            group_id: None,
            image: None,
        }
    }

    /// File the post under a group.
    pub fn with_group(mut self, group_id: i64) -> Self {
        self.group_id = Some(group_id);
        self
    }

    /// Attach an image path.
    pub fn with_image(mut self, image: impl Into<String>) -> Self {
        self.image = Some(image.into());
        self
    }
}

/// Data for updating an existing post.
#[derive(Debug, Clone, Default)]
pub struct PostUpdate {
    /// New text.
    pub text: Option<String>,
    /// New group (`Some(None)` removes the group).
    pub group_id: Option<Option<i64>>,
    /// New image (`Some(None)` removes the image).
    pub image: Option<Option<String>>,
}

impl PostUpdate {
    /// Create an empty update.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set new text.
    pub fn text(mut self, text: impl Into<String>) -> Self {
        self.text = Some(text.into());
        self
    }

    /// Set new group.
    pub fn group_id(mut self, group_id: Option<i64>) -> Self {
        self.group_id = Some(group_id);
        self
    }

    /// Set new image.
    pub fn image(mut self, image: Option<String>) -> Self {
        self.image = Some(image);
        self
    }

    /// Check if any fields are set.
    pub fn is_empty(&self) -> bool {
        self.text.is_none() && self.group_id.is_none() && self.image.is_none()
    }
}
