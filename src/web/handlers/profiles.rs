//! Profile and follow handlers.

use axum::{
    extract::{Path, Query, State},
    Json,
};
use std::sync::Arc;

use crate::feed::{FeedContext, FeedScope};
use crate::posts::{FollowOutcome, FollowService};
use crate::web::dto::{
    ApiResponse, AuthorInfo, FeedResponse, FollowResponse, PageQuery, PostResponse, ProfileInfo,
    ProfileResponse,
};
use crate::web::error::ApiError;
use crate::web::handlers::AppState;
use crate::web::middleware::CurrentViewer;

/// GET /api/profiles/:username - An author's posts and follow state.
pub async fn profile(
    State(state): State<Arc<AppState>>,
    CurrentViewer(viewer): CurrentViewer,
    Path(username): Path<String>,
    Query(query): Query<PageQuery>,
) -> Result<Json<ProfileResponse>, ApiError> {
    let feed = state
        .feeds()
        .get_feed(&FeedScope::Author(username), query.number())
        .await?;

    let FeedContext::Author(author) = feed.context else {
        return Err(ApiError::internal("Unexpected feed context"));
    };

    let follows = FollowService::new(&state.db);
    let following = follows.viewer_follows(&viewer, author.id).await?;
    let follower_count = follows.follower_count(author.id).await?;
    let following_count = follows.following_count(author.id).await?;

    Ok(Json(ProfileResponse {
        author: ProfileInfo {
            id: author.id,
            username: author.username,
            created_at: author.created_at,
            post_count: feed.page.info.total_items,
            follower_count,
            following_count,
        },
        following,
        data: feed.page.items.into_iter().map(PostResponse::from).collect(),
        meta: feed.page.info,
    }))
}

/// POST /api/profiles/:username/follow - Follow an author.
///
/// Following yourself or an author already followed succeeds without
/// changing anything.
pub async fn follow(
    State(state): State<Arc<AppState>>,
    CurrentViewer(viewer): CurrentViewer,
    Path(username): Path<String>,
) -> Result<Json<ApiResponse<FollowResponse>>, ApiError> {
    let outcome = FollowService::new(&state.db)
        .follow(&viewer, &username)
        .await?;

    Ok(Json(ApiResponse::new(FollowResponse {
        username,
        following: outcome != FollowOutcome::SelfFollow,
    })))
}

/// DELETE /api/profiles/:username/follow - Stop following an author.
pub async fn unfollow(
    State(state): State<Arc<AppState>>,
    CurrentViewer(viewer): CurrentViewer,
    Path(username): Path<String>,
) -> Result<Json<ApiResponse<FollowResponse>>, ApiError> {
    FollowService::new(&state.db)
        .unfollow(&viewer, &username)
        .await?;

    Ok(Json(ApiResponse::new(FollowResponse {
        username,
        following: false,
    })))
}

/// GET /api/follow - Posts by authors the viewer follows.
pub async fn follow_index(
    State(state): State<Arc<AppState>>,
    CurrentViewer(viewer): CurrentViewer,
    Query(query): Query<PageQuery>,
) -> Result<Json<FeedResponse<PostResponse>>, ApiError> {
    let user = viewer.require_user("view followed authors")?;
    let feed = state
        .feeds()
        .get_feed(&FeedScope::Following(user.id), query.number())
        .await?;

    Ok(Json(FeedResponse::from(feed.page)))
}

/// GET /api/follow/authors - Authors the viewer follows.
pub async fn followed_authors(
    State(state): State<Arc<AppState>>,
    CurrentViewer(viewer): CurrentViewer,
) -> Result<Json<ApiResponse<Vec<AuthorInfo>>>, ApiError> {
    let authors = FollowService::new(&state.db).following(&viewer).await?;
    Ok(Json(ApiResponse::new(
        authors.iter().map(AuthorInfo::from).collect(),
    )))
}
