//! Test helpers for Web API integration tests.

#![allow(dead_code)]

use std::sync::Arc;
use std::time::Duration;

use axum::http::header::AUTHORIZATION;
use axum_test::{TestRequest, TestServer};
use jsonwebtoken::{encode, EncodingKey, Header};

use yatube::db::{NewUser, User, UserRepository};
use yatube::feed::{PageCache, Paginator};
use yatube::posts::{Group, GroupRepository, NewGroup, NewPost, Post, PostRepository};
use yatube::web::handlers::AppState;
use yatube::web::middleware::{JwtClaims, JwtState};
use yatube::web::router::{create_health_router, create_router};
use yatube::Database;

/// Secret shared with the token issuer in tests.
pub const TEST_SECRET: &str = "test-secret-key-for-testing-only";

/// A router under test together with its state.
pub struct TestApp {
    pub server: TestServer,
    pub state: Arc<AppState>,
}

/// Create a test server with an in-memory database and the default cache TTL.
pub async fn create_test_app() -> TestApp {
    create_test_app_with_ttl(Duration::from_secs(20)).await
}

/// Create a test server whose index cache uses `ttl`.
pub async fn create_test_app_with_ttl(ttl: Duration) -> TestApp {
    let db = Database::open_in_memory()
        .await
        .expect("Failed to create test database");
    let state = Arc::new(AppState::new(
        db,
        Paginator::default(),
        PageCache::new(ttl),
    ));
    let jwt_state = Arc::new(JwtState::new(TEST_SECRET));

    let router = create_router(state.clone(), jwt_state, &[]).merge(create_health_router());
    let server = TestServer::new(router).expect("Failed to create test server");

    TestApp { server, state }
}

impl TestApp {
    /// Insert a local user record.
    pub async fn create_user(&self, username: &str) -> User {
        UserRepository::new(self.state.db.pool())
            .create(&NewUser::new(username))
            .await
            .expect("Failed to create user")
    }

    /// Insert a group.
    pub async fn create_group(&self, title: &str, slug: &str) -> Group {
        GroupRepository::new(self.state.db.pool())
            .create(&NewGroup::new(title, slug))
            .await
            .expect("Failed to create group")
    }

    /// Insert a post directly, bypassing the API.
    pub async fn create_post(&self, author: &User, text: &str, group: Option<&Group>) -> Post {
        let mut new_post = NewPost::new(author.id, text);
        if let Some(group) = group {
            new_post = new_post.with_group(group.id);
        }
        PostRepository::new(self.state.db.pool())
            .create(&new_post)
            .await
            .expect("Failed to create post")
    }
}

/// Issue a token the way the identity service does.
pub fn token_for(user_id: i64, username: &str, secret: &str, ttl_secs: i64) -> String {
    let now = chrono::Utc::now().timestamp();
    let claims = JwtClaims {
        sub: user_id,
        username: username.to_string(),
        iat: now as u64,
        exp: (now + ttl_secs) as u64,
    };
    encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(secret.as_bytes()),
    )
    .expect("Failed to encode token")
}

/// Attach a valid bearer token for `user`.
pub fn authed(request: TestRequest, user: &User) -> TestRequest {
    let token = token_for(user.id, &user.username, TEST_SECRET, 3600);
    request.add_header(AUTHORIZATION, format!("Bearer {token}"))
}
