//! Follow edge model for Yatube.

/// Directed edge: `user_id` follows `author_id`.
///
/// The schema rejects self-edges and duplicate pairs.
#[derive(Debug, Clone, PartialEq, Eq, sqlx::FromRow)]
pub struct Follow {
    /// Unique edge ID.
    pub id: i64,
    /// The follower.
    pub user_id: i64,
    /// The followed author.
    pub author_id: i64,
    /// When the edge was created.
    pub created_at: String,
}
