//! Router configuration for the Web API.

use axum::{
    middleware,
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tower::ServiceBuilder;
use tower_http::trace::TraceLayer;

use super::handlers::{
    add_comment, create_post, edit_post, follow, follow_index, followed_authors, get_post,
    group_posts, index, list_groups, profile, unfollow, AppState,
};
use super::middleware::{create_cors_layer, jwt_auth, JwtState};

/// Create the main API router.
pub fn create_router(
    app_state: Arc<AppState>,
    jwt_state: Arc<JwtState>,
    cors_origins: &[String],
) -> Router {
    let post_routes = Router::new()
        .route("/", get(index).post(create_post))
        .route("/:id", get(get_post).put(edit_post))
        .route("/:id/comments", post(add_comment));

    let group_routes = Router::new()
        .route("/", get(list_groups))
        .route("/:slug/posts", get(group_posts));

    let profile_routes = Router::new()
        .route("/:username", get(profile))
        .route("/:username/follow", post(follow).delete(unfollow));

    let follow_routes = Router::new()
        .route("/", get(follow_index))
        .route("/authors", get(followed_authors));

    let api_routes = Router::new()
        .nest("/posts", post_routes)
        .nest("/groups", group_routes)
        .nest("/profiles", profile_routes)
        .nest("/follow", follow_routes);

    Router::new()
        .nest("/api", api_routes)
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(create_cors_layer(cors_origins))
                .layer(middleware::from_fn(move |req, next| {
                    let state = jwt_state.clone();
                    jwt_auth(state, req, next)
                })),
        )
        .with_state(app_state)
}

/// Create a health check router.
pub fn create_health_router() -> Router {
    Router::new().route("/health", get(health_check))
}

/// Health check handler.
async fn health_check() -> &'static str {
    "OK"
}
