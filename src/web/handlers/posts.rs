//! Post handlers.

use axum::{
    extract::{Path, Query, State},
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use std::sync::Arc;
use validator::Validate;

use crate::feed::FeedScope;
use crate::posts::PostService;
use crate::web::dto::{
    ApiResponse, CommentResponse, CreateCommentRequest, CreatePostRequest, EditPostRequest,
    FeedResponse, PageQuery, PostDetailResponse, PostResponse,
};
use crate::web::error::ApiError;
use crate::web::handlers::AppState;
use crate::web::middleware::CurrentViewer;

fn index_cache_key(page: u32) -> String {
    format!("index:page:{page}")
}

/// GET /api/posts - Site-wide feed, newest first.
///
/// Rendered pages are cached for the configured TTL; new posts appear once
/// the cached page expires. Pages past the end are rendered but not cached.
pub async fn index(
    State(state): State<Arc<AppState>>,
    Query(query): Query<PageQuery>,
) -> Result<Response, ApiError> {
    let page = query.number();
    let key = index_cache_key(page);

    let body = match state.page_cache.get(&key) {
        Some(body) => body,
        None => {
            let feed = state.feeds().get_feed(&FeedScope::All, page).await?;
            let in_range = page <= feed.page.info.num_pages;
            let body = serde_json::to_string(&FeedResponse::from(feed.page)).map_err(|e| {
                tracing::error!("Failed to render feed page: {}", e);
                ApiError::internal("Failed to render feed")
            })?;
            if in_range {
                state.page_cache.insert(key, body.clone());
            }
            body
        }
    };

    Ok(([(header::CONTENT_TYPE, "application/json")], body).into_response())
}

/// POST /api/posts - Publish a post.
pub async fn create_post(
    State(state): State<Arc<AppState>>,
    CurrentViewer(viewer): CurrentViewer,
    Json(req): Json<CreatePostRequest>,
) -> Result<(StatusCode, Json<ApiResponse<PostResponse>>), ApiError> {
    viewer.require_user("create a post")?;
    req.validate().map_err(ApiError::from_validation_errors)?;

    let post = PostService::new(&state.db)
        .create_post(&viewer, &req.text, req.group, req.image)
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::new(PostResponse::from(post))),
    ))
}

/// GET /api/posts/:id - Post with its comments.
pub async fn get_post(
    State(state): State<Arc<AppState>>,
    Path(post_id): Path<i64>,
) -> Result<Json<ApiResponse<PostDetailResponse>>, ApiError> {
    let detail = PostService::new(&state.db).post_detail(post_id).await?;
    Ok(Json(ApiResponse::new(detail.into())))
}

/// PUT /api/posts/:id - Edit a post (author only).
pub async fn edit_post(
    State(state): State<Arc<AppState>>,
    CurrentViewer(viewer): CurrentViewer,
    Path(post_id): Path<i64>,
    Json(req): Json<EditPostRequest>,
) -> Result<Json<ApiResponse<PostResponse>>, ApiError> {
    viewer.require_user("edit a post")?;
    req.validate().map_err(ApiError::from_validation_errors)?;

    let post = PostService::new(&state.db)
        .edit_post(&viewer, post_id, &req.into_update())
        .await?;

    Ok(Json(ApiResponse::new(post.into())))
}

/// POST /api/posts/:id/comments - Comment on a post.
pub async fn add_comment(
    State(state): State<Arc<AppState>>,
    CurrentViewer(viewer): CurrentViewer,
    Path(post_id): Path<i64>,
    Json(req): Json<CreateCommentRequest>,
) -> Result<(StatusCode, Json<ApiResponse<CommentResponse>>), ApiError> {
    viewer.require_user("comment")?;
    req.validate().map_err(ApiError::from_validation_errors)?;

    let comment = PostService::new(&state.db)
        .add_comment(&viewer, post_id, &req.text)
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::new(comment.into())),
    ))
}
