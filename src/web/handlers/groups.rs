//! Group handlers.

use axum::{
    extract::{Path, Query, State},
    Json,
};
use std::sync::Arc;

use crate::feed::{FeedContext, FeedScope};
use crate::posts::GroupRepository;
use crate::web::dto::{ApiResponse, GroupFeedResponse, GroupResponse, PageQuery, PostResponse};
use crate::web::error::ApiError;
use crate::web::handlers::AppState;

/// GET /api/groups - List all groups.
pub async fn list_groups(
    State(state): State<Arc<AppState>>,
) -> Result<Json<ApiResponse<Vec<GroupResponse>>>, ApiError> {
    let groups = GroupRepository::new(state.db.pool()).list_all().await?;
    Ok(Json(ApiResponse::new(
        groups.into_iter().map(GroupResponse::from).collect(),
    )))
}

/// GET /api/groups/:slug/posts - Posts filed under a group.
pub async fn group_posts(
    State(state): State<Arc<AppState>>,
    Path(slug): Path<String>,
    Query(query): Query<PageQuery>,
) -> Result<Json<GroupFeedResponse>, ApiError> {
    let feed = state
        .feeds()
        .get_feed(&FeedScope::Group(slug), query.number())
        .await?;

    let FeedContext::Group(group) = feed.context else {
        return Err(ApiError::internal("Unexpected feed context"));
    };

    Ok(Json(GroupFeedResponse {
        group: group.into(),
        data: feed.page.items.into_iter().map(PostResponse::from).collect(),
        meta: feed.page.info,
    }))
}
