//! User model for Yatube.
//!
//! Users are owned by the identity service; this crate keeps a local
//! record so posts, comments and follows can reference them.

/// User entity.
#[derive(Debug, Clone, PartialEq, Eq, sqlx::FromRow)]
pub struct User {
    /// Unique user ID.
    pub id: i64,
    /// Username (unique, case-sensitive).
    pub username: String,
    /// Registration timestamp.
    pub created_at: String,
}

/// Data for creating a new user.
#[derive(Debug, Clone)]
pub struct NewUser {
    /// Username.
    pub username: String,
}

impl NewUser {
    /// Create a new user record.
    pub fn new(username: impl Into<String>) -> Self {
        Self {
            username: username.into(),
        }
    }
}
