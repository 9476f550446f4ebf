//! Web API Follow Tests
//!
//! Integration tests for following and unfollowing authors.

mod common;

use axum::http::StatusCode;
use serde_json::Value;

use common::{authed, create_test_app};
use yatube::posts::FollowRepository;

#[tokio::test]
async fn test_follow_author() {
    let app = create_test_app().await;
    let author = app.create_user("auth").await;
    let reader = app.create_user("reader").await;

    let response = authed(app.server.post("/api/profiles/auth/follow"), &reader).await;
    response.assert_status_ok();

    let body: Value = response.json();
    assert_eq!(body["data"]["username"], "auth");
    assert_eq!(body["data"]["following"], true);

    let follows = FollowRepository::new(app.state.db.pool());
    assert!(follows.exists(reader.id, author.id).await.unwrap());
}

#[tokio::test]
async fn test_follow_twice_keeps_one_edge() {
    let app = create_test_app().await;
    let author = app.create_user("auth").await;
    let reader = app.create_user("reader").await;

    for _ in 0..2 {
        authed(app.server.post("/api/profiles/auth/follow"), &reader)
            .await
            .assert_status_ok();
    }

    let follows = FollowRepository::new(app.state.db.pool());
    assert_eq!(follows.count_followers(author.id).await.unwrap(), 1);
}

#[tokio::test]
async fn test_follow_self_is_noop() {
    let app = create_test_app().await;
    let author = app.create_user("auth").await;

    let response = authed(app.server.post("/api/profiles/auth/follow"), &author).await;
    response.assert_status_ok();

    let body: Value = response.json();
    assert_eq!(body["data"]["following"], false);

    let follows = FollowRepository::new(app.state.db.pool());
    assert_eq!(follows.count_following(author.id).await.unwrap(), 0);
}

#[tokio::test]
async fn test_follow_unknown_author() {
    let app = create_test_app().await;
    let reader = app.create_user("reader").await;

    authed(app.server.post("/api/profiles/ghost/follow"), &reader)
        .await
        .assert_status(StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_follow_anonymous() {
    let app = create_test_app().await;
    app.create_user("auth").await;

    app.server
        .post("/api/profiles/auth/follow")
        .await
        .assert_status(StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_unfollow_author() {
    let app = create_test_app().await;
    let author = app.create_user("auth").await;
    let reader = app.create_user("reader").await;

    authed(app.server.post("/api/profiles/auth/follow"), &reader)
        .await
        .assert_status_ok();

    let response = authed(app.server.delete("/api/profiles/auth/follow"), &reader).await;
    response.assert_status_ok();

    let body: Value = response.json();
    assert_eq!(body["data"]["following"], false);

    let follows = FollowRepository::new(app.state.db.pool());
    assert!(!follows.exists(reader.id, author.id).await.unwrap());
}

#[tokio::test]
async fn test_unfollow_without_edge() {
    let app = create_test_app().await;
    app.create_user("auth").await;
    let reader = app.create_user("reader").await;

    let response = authed(app.server.delete("/api/profiles/auth/follow"), &reader).await;
    response.assert_status(StatusCode::NOT_FOUND);

    let body: Value = response.json();
    assert_eq!(body["error"]["code"], "NOT_FOUND");
}

#[tokio::test]
async fn test_unfollow_self_is_noop() {
    let app = create_test_app().await;
    let author = app.create_user("auth").await;

    let response = authed(app.server.delete("/api/profiles/auth/follow"), &author).await;
    response.assert_status_ok();

    let body: Value = response.json();
    assert_eq!(body["data"]["following"], false);
}

#[tokio::test]
async fn test_unfollow_unknown_author() {
    let app = create_test_app().await;
    let reader = app.create_user("reader").await;

    authed(app.server.delete("/api/profiles/ghost/follow"), &reader)
        .await
        .assert_status(StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_followed_authors() {
    let app = create_test_app().await;
    app.create_user("auth").await;
    app.create_user("second").await;
    let reader = app.create_user("reader").await;

    authed(app.server.post("/api/profiles/second/follow"), &reader)
        .await
        .assert_status_ok();
    authed(app.server.post("/api/profiles/auth/follow"), &reader)
        .await
        .assert_status_ok();

    let body: Value = authed(app.server.get("/api/follow/authors"), &reader)
        .await
        .json();
    let names: Vec<&str> = body["data"]
        .as_array()
        .unwrap()
        .iter()
        .map(|a| a["username"].as_str().unwrap())
        .collect();
    assert_eq!(names.len(), 2);
    assert!(names.contains(&"auth"));
    assert!(names.contains(&"second"));

    app.server
        .get("/api/follow/authors")
        .await
        .assert_status(StatusCode::UNAUTHORIZED);
}
