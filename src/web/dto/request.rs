//! Request DTOs for the Web API.

use serde::{Deserialize, Deserializer};
use validator::Validate;

use crate::posts::PostUpdate;

/// Page-number query (`?page=N`).
///
/// The raw value is kept as a string so malformed input can fall back to the
/// first page instead of rejecting the request.
#[derive(Debug, Default, Deserialize)]
pub struct PageQuery {
    /// Requested page number.
    #[serde(default)]
    pub page: Option<String>,
}

impl PageQuery {
    /// Requested page, or 1 if absent, unparsable or below 1.
    pub fn number(&self) -> u32 {
        self.page
            .as_deref()
            .and_then(|p| p.trim().parse::<u32>().ok())
            .filter(|&p| p >= 1)
            .unwrap_or(1)
    }
}

/// Create post request.
#[derive(Debug, Deserialize, Validate)]
pub struct CreatePostRequest {
    /// Post text.
    #[validate(length(min = 1, max = 10000, message = "Text must be 1-10000 characters"))]
    pub text: String,
    /// Group ID to file the post under.
    #[serde(default)]
    pub group: Option<i64>,
    /// Stored image path.
    #[serde(default)]
    pub image: Option<String>,
}

/// Edit post request. Absent fields are left unchanged; an explicit `null`
/// for `group` or `image` clears it.
#[derive(Debug, Default, Deserialize, Validate)]
pub struct EditPostRequest {
    /// New text.
    #[serde(default)]
    #[validate(length(min = 1, max = 10000, message = "Text must be 1-10000 characters"))]
    pub text: Option<String>,
    /// New group ID.
    #[serde(default, deserialize_with = "present")]
    pub group: Option<Option<i64>>,
    /// New image path.
    #[serde(default, deserialize_with = "present")]
    pub image: Option<Option<String>>,
}

impl EditPostRequest {
    /// Convert into a post update.
    pub fn into_update(self) -> PostUpdate {
        PostUpdate {
            text: self.text,
            group_id: self.group,
            image: self.image,
        }
    }
}

/// Create comment request.
#[derive(Debug, Deserialize, Validate)]
pub struct CreateCommentRequest {
    /// Comment text.
    #[validate(length(min = 1, max = 10000, message = "Text must be 1-10000 characters"))]
    pub text: String,
}

/// Marks a field as present, so `null` deserializes to `Some(None)`.
fn present<'de, T, D>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    T: Deserialize<'de>,
    D: Deserializer<'de>,
{
    Option::<T>::deserialize(deserializer).map(Some)
}
