//! Posts module for Yatube.
//!
//! This module provides the blogging domain:
//! - Groups that posts can be filed under
//! - Posts and their comments
//! - Follow edges between users
//! - Services enforcing authorship and authentication rules

mod comment;
mod comment_repository;
mod follow;
mod follow_repository;
mod follow_service;
mod group;
mod group_repository;
mod post;
mod post_repository;
mod service;

pub use comment::{Comment, NewComment};
pub use comment_repository::CommentRepository;
pub use follow::Follow;
pub use follow_repository::FollowRepository;
pub use follow_service::{FollowOutcome, FollowService};
pub use group::{Group, NewGroup};
pub use group_repository::GroupRepository;
pub use post::{NewPost, Post, PostUpdate};
pub use post_repository::PostRepository;
pub use service::{PostDetail, PostService, MAX_TEXT_LENGTH};
