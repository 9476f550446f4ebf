//! Web API Post Tests
//!
//! Integration tests for creating, reading and editing posts and comments.

mod common;

use axum::http::header::AUTHORIZATION;
use axum::http::StatusCode;
use serde_json::{json, Value};

use common::{authed, create_test_app, token_for, TEST_SECRET};

#[tokio::test]
async fn test_create_post() {
    let app = create_test_app().await;
    let author = app.create_user("auth").await;
    let group = app.create_group("Test group", "test-slug").await;

    let response = authed(app.server.post("/api/posts"), &author)
        .json(&json!({ "text": "Hello, world", "group": group.id }))
        .await;
    response.assert_status(StatusCode::CREATED);

    let body: Value = response.json();
    assert_eq!(body["data"]["text"], "Hello, world");
    assert_eq!(body["data"]["author"]["username"], "auth");
    assert_eq!(body["data"]["group"]["slug"], "test-slug");
}

#[tokio::test]
async fn test_create_post_anonymous() {
    let app = create_test_app().await;

    let response = app
        .server
        .post("/api/posts")
        .json(&json!({ "text": "Hello" }))
        .await;
    response.assert_status(StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_create_post_with_invalid_token_is_anonymous() {
    let app = create_test_app().await;
    let author = app.create_user("auth").await;

    let forged = token_for(author.id, &author.username, "wrong-secret", 3600);
    app.server
        .post("/api/posts")
        .add_header(AUTHORIZATION, format!("Bearer {forged}"))
        .json(&json!({ "text": "Hello" }))
        .await
        .assert_status(StatusCode::UNAUTHORIZED);

    let expired = token_for(author.id, &author.username, TEST_SECRET, -3600);
    app.server
        .post("/api/posts")
        .add_header(AUTHORIZATION, format!("Bearer {expired}"))
        .json(&json!({ "text": "Hello" }))
        .await
        .assert_status(StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_create_post_token_for_unknown_user() {
    let app = create_test_app().await;

    let token = token_for(42, "ghost", TEST_SECRET, 3600);
    app.server
        .post("/api/posts")
        .add_header(AUTHORIZATION, format!("Bearer {token}"))
        .json(&json!({ "text": "Hello" }))
        .await
        .assert_status(StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_create_post_empty_text() {
    let app = create_test_app().await;
    let author = app.create_user("auth").await;

    let response = authed(app.server.post("/api/posts"), &author)
        .json(&json!({ "text": "" }))
        .await;
    response.assert_status(StatusCode::UNPROCESSABLE_ENTITY);

    let body: Value = response.json();
    assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
    assert!(body["error"]["details"]["text"].is_array());
}

#[tokio::test]
async fn test_create_post_blank_text() {
    let app = create_test_app().await;
    let author = app.create_user("auth").await;

    authed(app.server.post("/api/posts"), &author)
        .json(&json!({ "text": "   " }))
        .await
        .assert_status(StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn test_create_post_unknown_group() {
    let app = create_test_app().await;
    let author = app.create_user("auth").await;

    authed(app.server.post("/api/posts"), &author)
        .json(&json!({ "text": "Hello", "group": 999 }))
        .await
        .assert_status(StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_get_post_detail() {
    let app = create_test_app().await;
    let author = app.create_user("auth").await;
    let reader = app.create_user("reader").await;
    let post = app.create_post(&author, "Discuss", None).await;
    app.create_post(&author, "Another", None).await;

    authed(
        app.server.post(&format!("/api/posts/{}/comments", post.id)),
        &reader,
    )
    .json(&json!({ "text": "First!" }))
    .await
    .assert_status(StatusCode::CREATED);

    authed(
        app.server.post(&format!("/api/posts/{}/comments", post.id)),
        &author,
    )
    .json(&json!({ "text": "Thanks" }))
    .await
    .assert_status(StatusCode::CREATED);

    let response = app.server.get(&format!("/api/posts/{}", post.id)).await;
    response.assert_status_ok();

    let body: Value = response.json();
    assert_eq!(body["data"]["post"]["text"], "Discuss");
    assert_eq!(body["data"]["author_post_count"], 2);
    let comments = body["data"]["comments"].as_array().unwrap();
    assert_eq!(comments.len(), 2);
    assert_eq!(comments[0]["text"], "First!");
    assert_eq!(comments[0]["author"]["username"], "reader");
    assert_eq!(comments[1]["text"], "Thanks");
}

#[tokio::test]
async fn test_get_missing_post() {
    let app = create_test_app().await;

    app.server
        .get("/api/posts/404")
        .await
        .assert_status(StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_edit_post_by_author() {
    let app = create_test_app().await;
    let author = app.create_user("auth").await;
    let group = app.create_group("Test group", "test-slug").await;
    let post = app.create_post(&author, "Old text", Some(&group)).await;

    let response = authed(app.server.put(&format!("/api/posts/{}", post.id)), &author)
        .json(&json!({ "text": "New text", "group": null }))
        .await;
    response.assert_status_ok();

    let body: Value = response.json();
    assert_eq!(body["data"]["id"], post.id);
    assert_eq!(body["data"]["text"], "New text");
    assert!(body["data"]["group"].is_null());
}

#[tokio::test]
async fn test_edit_post_by_other_user() {
    let app = create_test_app().await;
    let author = app.create_user("auth").await;
    let other = app.create_user("other").await;
    let post = app.create_post(&author, "Mine", None).await;

    let response = authed(app.server.put(&format!("/api/posts/{}", post.id)), &other)
        .json(&json!({ "text": "Hijacked" }))
        .await;
    response.assert_status(StatusCode::FORBIDDEN);

    let body: Value = app
        .server
        .get(&format!("/api/posts/{}", post.id))
        .await
        .json();
    assert_eq!(body["data"]["post"]["text"], "Mine");
}

#[tokio::test]
async fn test_edit_post_anonymous() {
    let app = create_test_app().await;
    let author = app.create_user("auth").await;
    let post = app.create_post(&author, "Mine", None).await;

    app.server
        .put(&format!("/api/posts/{}", post.id))
        .json(&json!({ "text": "Anonymous edit" }))
        .await
        .assert_status(StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_comment_anonymous() {
    let app = create_test_app().await;
    let author = app.create_user("auth").await;
    let post = app.create_post(&author, "Discuss", None).await;

    app.server
        .post(&format!("/api/posts/{}/comments", post.id))
        .json(&json!({ "text": "drive-by" }))
        .await
        .assert_status(StatusCode::UNAUTHORIZED);

    let body: Value = app
        .server
        .get(&format!("/api/posts/{}", post.id))
        .await
        .json();
    assert!(body["data"]["comments"].as_array().unwrap().is_empty());
}

#[tokio::test]
async fn test_comment_missing_post() {
    let app = create_test_app().await;
    let reader = app.create_user("reader").await;

    authed(app.server.post("/api/posts/77/comments"), &reader)
        .json(&json!({ "text": "hello?" }))
        .await
        .assert_status(StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_created_post_shows_in_group_and_profile_feeds() {
    let app = create_test_app().await;
    let author = app.create_user("auth").await;
    let group = app.create_group("Test group", "test-slug").await;

    authed(app.server.post("/api/posts"), &author)
        .json(&json!({ "text": "Filed", "group": group.id }))
        .await
        .assert_status(StatusCode::CREATED);

    let group_feed: Value = app.server.get("/api/groups/test-slug/posts").await.json();
    assert_eq!(group_feed["data"][0]["text"], "Filed");

    let profile: Value = app.server.get("/api/profiles/auth").await.json();
    assert_eq!(profile["data"][0]["text"], "Filed");
}

#[tokio::test]
async fn test_created_post_image_shows_in_feeds_and_detail() {
    let app = create_test_app().await;
    let author = app.create_user("auth").await;
    let group = app.create_group("Test group", "test-slug").await;

    let response = authed(app.server.post("/api/posts"), &author)
        .json(&json!({
            "text": "With a picture",
            "group": group.id,
            "image": "posts/small.gif"
        }))
        .await;
    response.assert_status(StatusCode::CREATED);
    let created: Value = response.json();
    assert_eq!(created["data"]["image"], "posts/small.gif");
    let post_id = created["data"]["id"].as_i64().unwrap();

    let index: Value = app.server.get("/api/posts").await.json();
    assert_eq!(index["data"][0]["image"], "posts/small.gif");

    let group_feed: Value = app.server.get("/api/groups/test-slug/posts").await.json();
    assert_eq!(group_feed["data"][0]["image"], "posts/small.gif");

    let profile: Value = app.server.get("/api/profiles/auth").await.json();
    assert_eq!(profile["data"][0]["image"], "posts/small.gif");

    let detail: Value = app
        .server
        .get(&format!("/api/posts/{post_id}"))
        .await
        .json();
    assert_eq!(detail["data"]["post"]["image"], "posts/small.gif");
}
