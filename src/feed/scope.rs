//! Feed scopes.

use std::fmt;

/// Which posts a feed is drawn from.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum FeedScope {
    /// Every post.
    All,
    /// Posts filed under the group with this slug.
    Group(String),
    /// Posts written by the user with this username.
    Author(String),
    /// Posts by everyone the user with this ID follows.
    Following(i64),
}

impl FeedScope {
    /// Whether this is the site-wide feed.
    pub fn is_global(&self) -> bool {
        matches!(self, FeedScope::All)
    }
}

impl fmt::Display for FeedScope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FeedScope::All => write!(f, "all"),
            FeedScope::Group(slug) => write!(f, "group:{slug}"),
            FeedScope::Author(username) => write!(f, "author:{username}"),
            FeedScope::Following(user_id) => write!(f, "following:{user_id}"),
        }
    }
}
