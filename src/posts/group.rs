//! Group model for Yatube.

/// A themed group that posts can be filed under.
///
/// Groups are created by administrators and their slug never changes.
#[derive(Debug, Clone, PartialEq, Eq, sqlx::FromRow)]
pub struct Group {
    /// Unique group ID.
    pub id: i64,
    /// Display title.
    pub title: String,
    /// URL slug (unique).
    pub slug: String,
    /// Group description.
    pub description: String,
}

/// Data for creating a new group.
#[derive(Debug, Clone)]
pub struct NewGroup {
    /// Display title.
    pub title: String,
    /// URL slug.
    pub slug: String,
    /// Group description (defaults to empty).
    pub description: String,
}

impl NewGroup {
    /// Create a new group with a title and slug.
    pub fn new(title: impl Into<String>, slug: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            slug: slug.into(),
            description: String::new(),
        }
    }

    /// Set the description.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }
}
