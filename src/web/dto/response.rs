//! Response DTOs for the Web API.

use serde::Serialize;

use crate::db::User;
use crate::feed::{Page, PageInfo};
use crate::posts::{Comment, Group, Post, PostDetail};

// ============================================================================
// Generic Response Wrappers
// ============================================================================

/// Generic API response wrapper.
#[derive(Debug, Serialize)]
pub struct ApiResponse<T: Serialize> {
    /// Response data.
    pub data: T,
}

impl<T: Serialize> ApiResponse<T> {
    /// Create a new API response.
    pub fn new(data: T) -> Self {
        Self { data }
    }
}

/// One page of a feed.
#[derive(Debug, Serialize)]
pub struct FeedResponse<T: Serialize> {
    /// Items on this page.
    pub data: Vec<T>,
    /// Pagination metadata.
    pub meta: PageInfo,
}

impl From<Page<Post>> for FeedResponse<PostResponse> {
    fn from(page: Page<Post>) -> Self {
        Self {
            data: page.items.into_iter().map(PostResponse::from).collect(),
            meta: page.info,
        }
    }
}

// ============================================================================
// Posts
// ============================================================================

/// Author information embedded in posts and comments.
#[derive(Debug, Serialize)]
pub struct AuthorInfo {
    /// User ID.
    pub id: i64,
    /// Username.
    pub username: String,
}

impl From<&User> for AuthorInfo {
    fn from(user: &User) -> Self {
        Self {
            id: user.id,
            username: user.username.clone(),
        }
    }
}

/// Group reference embedded in a post.
#[derive(Debug, Serialize)]
pub struct GroupRef {
    /// Group ID.
    pub id: i64,
    /// Group slug.
    pub slug: String,
}

/// Post response.
#[derive(Debug, Serialize)]
pub struct PostResponse {
    /// Post ID.
    pub id: i64,
    /// Post text.
    pub text: String,
    /// Creation time.
    pub created_at: String,
    /// Image path.
    pub image: Option<String>,
    /// Author.
    pub author: AuthorInfo,
    /// Group, if any.
    pub group: Option<GroupRef>,
}

impl From<Post> for PostResponse {
    fn from(post: Post) -> Self {
        let group = match (post.group_id, post.group_slug) {
            (Some(id), Some(slug)) => Some(GroupRef { id, slug }),
            _ => None,
        };
        Self {
            id: post.id,
            text: post.text,
            created_at: post.created_at,
            image: post.image,
            author: AuthorInfo {
                id: post.author_id,
                username: post.author_username,
            },
            group,
        }
    }
}

/// Comment response.
#[derive(Debug, Serialize)]
pub struct CommentResponse {
    /// Comment ID.
    pub id: i64,
    /// Commented post ID.
    pub post_id: i64,
    /// Comment text.
    pub text: String,
    /// Creation time.
    pub created_at: String,
    /// Author.
    pub author: AuthorInfo,
}

impl From<Comment> for CommentResponse {
    fn from(comment: Comment) -> Self {
        Self {
            id: comment.id,
            post_id: comment.post_id,
            text: comment.text,
            created_at: comment.created_at,
            author: AuthorInfo {
                id: comment.author_id,
                username: comment.author_username,
            },
        }
    }
}

/// Post detail response.
#[derive(Debug, Serialize)]
pub struct PostDetailResponse {
    /// The post.
    pub post: PostResponse,
    /// Comments, oldest first.
    pub comments: Vec<CommentResponse>,
    /// Number of posts by the same author.
    pub author_post_count: i64,
}

impl From<PostDetail> for PostDetailResponse {
    fn from(detail: PostDetail) -> Self {
        Self {
            post: detail.post.into(),
            comments: detail.comments.into_iter().map(Into::into).collect(),
            author_post_count: detail.author_post_count,
        }
    }
}

// ============================================================================
// Groups and profiles
// ============================================================================

/// Group response.
#[derive(Debug, Serialize)]
pub struct GroupResponse {
    /// Group ID.
    pub id: i64,
    /// Title.
    pub title: String,
    /// Slug.
    pub slug: String,
    /// Description.
    pub description: String,
}

impl From<Group> for GroupResponse {
    fn from(group: Group) -> Self {
        Self {
            id: group.id,
            title: group.title,
            slug: group.slug,
            description: group.description,
        }
    }
}

/// Group feed response.
#[derive(Debug, Serialize)]
pub struct GroupFeedResponse {
    /// The group.
    pub group: GroupResponse,
    /// Posts on this page.
    pub data: Vec<PostResponse>,
    /// Pagination metadata.
    pub meta: PageInfo,
}

/// Profile summary.
#[derive(Debug, Serialize)]
pub struct ProfileInfo {
    /// User ID.
    pub id: i64,
    /// Username.
    pub username: String,
    /// Member since.
    pub created_at: String,
    /// Number of posts written.
    pub post_count: u64,
    /// Number of followers.
    pub follower_count: i64,
    /// Number of authors followed.
    pub following_count: i64,
}

/// Profile page response.
#[derive(Debug, Serialize)]
pub struct ProfileResponse {
    /// The author.
    pub author: ProfileInfo,
    /// Whether the viewer follows the author.
    pub following: bool,
    /// Posts on this page.
    pub data: Vec<PostResponse>,
    /// Pagination metadata.
    pub meta: PageInfo,
}

/// Result of a follow or unfollow request.
#[derive(Debug, Serialize)]
pub struct FollowResponse {
    /// Target username.
    pub username: String,
    /// Whether the viewer follows the target after the call.
    pub following: bool,
}
