//! Request identity for Yatube.
//!
//! The identity service decides who is making a request; this crate only
//! receives the outcome as a [`Viewer`].

use crate::db::User;
use crate::{Result, YatubeError};

/// The identity a request runs as.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Viewer {
    /// No authenticated user.
    #[default]
    Anonymous,
    /// A known user.
    User(User),
}

impl Viewer {
    /// Get the user, if authenticated.
    pub fn user(&self) -> Option<&User> {
        match self {
            Viewer::Anonymous => None,
            Viewer::User(user) => Some(user),
        }
    }

    /// Get the user ID, if authenticated.
    pub fn user_id(&self) -> Option<i64> {
        self.user().map(|u| u.id)
    }

    /// Check whether the viewer is authenticated.
    pub fn is_authenticated(&self) -> bool {
        matches!(self, Viewer::User(_))
    }

    /// Require an authenticated user for `action`.
    ///
    /// # Examples
    ///
    /// ```
    /// use yatube::{Viewer, YatubeError};
    ///
    /// let err = Viewer::Anonymous.require_user("create a post").unwrap_err();
    /// assert!(matches!(err, YatubeError::Unauthorized(_)));
    /// ```
    pub fn require_user(&self, action: &str) -> Result<&User> {
        self.user()
            .ok_or_else(|| YatubeError::Unauthorized(format!("login required to {action}")))
    }
}

impl From<Option<User>> for Viewer {
    fn from(user: Option<User>) -> Self {
        user.map(Viewer::User).unwrap_or(Viewer::Anonymous)
    }
}
