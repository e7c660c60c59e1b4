mod helpers;

use axum::http::StatusCode;
use helpers::{as_user, like_path, TestApp};
use postlike_app::domain::LikeStatus;
use sea_orm::{ConnectionTrait, TransactionTrait};
use std::future::IntoFuture;
use std::time::Duration;

#[tokio::test]
async fn like_returns_ok_with_empty_body() {
    let app = TestApp::new().await;
    let user = app.create_user().await;
    let post = app.create_post(&user).await;
    let (name, value) = as_user(user.id);

    let response = app.server.post(&like_path(post.id)).add_header(name, value).await;

    response.assert_status_ok();
    assert!(response.text().is_empty());
    assert_eq!(app.ctx.like_registry.count(post.id).await.unwrap(), 1);
}

#[tokio::test]
async fn like_and_unlike_are_idempotent() {
    let app = TestApp::new().await;
    let user = app.create_user().await;
    let post = app.create_post(&user).await;
    let path = like_path(post.id);

    for _ in 0..2 {
        let (name, value) = as_user(user.id);
        app.server
            .post(&path)
            .add_header(name, value)
            .await
            .assert_status_ok();
    }
    assert_eq!(app.ctx.like_registry.count(post.id).await.unwrap(), 1);

    for _ in 0..2 {
        let (name, value) = as_user(user.id);
        app.server
            .delete(&path)
            .add_header(name, value)
            .await
            .assert_status(StatusCode::NO_CONTENT);
    }
    assert_eq!(app.ctx.like_registry.count(post.id).await.unwrap(), 0);
}

#[tokio::test]
async fn unlike_without_like_is_no_content() {
    let app = TestApp::new().await;
    let user = app.create_user().await;
    let post = app.create_post(&user).await;
    let (name, value) = as_user(user.id);

    app.server
        .delete(&like_path(post.id))
        .add_header(name, value)
        .await
        .assert_status(StatusCode::NO_CONTENT);

    assert_eq!(app.ctx.like_registry.count(post.id).await.unwrap(), 0);
}

#[tokio::test]
async fn status_reports_caller_and_total() {
    let app = TestApp::new().await;
    let author = app.create_user().await;
    let fan = app.create_user().await;
    let post = app.create_post(&author).await;
    let path = like_path(post.id);

    let (name, value) = as_user(author.id);
    app.server.post(&path).add_header(name, value).await.assert_status_ok();

    let (name, value) = as_user(fan.id);
    let response = app.server.get(&path).add_header(name, value).await;
    response.assert_status_ok();

    let status = response.json::<LikeStatus>();
    assert_eq!(status.post_id, post.id);
    assert!(!status.liked);
    assert_eq!(status.like_count, 1);
}

#[tokio::test]
async fn unknown_post_is_not_found() {
    let app = TestApp::new().await;
    let user = app.create_user().await;
    let missing = like_path(4242);

    let (name, value) = as_user(user.id);
    let response = app.server.post(&missing).add_header(name, value).await;
    response.assert_status_not_found();
    assert_eq!(
        response.json::<serde_json::Value>()["message"],
        "The requested resource does not exist."
    );

    let (name, value) = as_user(user.id);
    app.server
        .delete(&missing)
        .add_header(name, value)
        .await
        .assert_status_not_found();

    assert_eq!(app.ctx.like_registry.count(4242).await.unwrap(), 0);
}

#[tokio::test]
async fn unknown_user_is_not_found() {
    let app = TestApp::new().await;
    let author = app.create_user().await;
    let post = app.create_post(&author).await;
    let (name, value) = as_user(author.id + 1000);

    app.server
        .post(&like_path(post.id))
        .add_header(name, value)
        .await
        .assert_status_not_found();

    assert_eq!(app.ctx.like_registry.count(post.id).await.unwrap(), 0);
}

#[tokio::test]
async fn missing_identity_is_unauthorized() {
    let app = TestApp::new().await;
    let user = app.create_user().await;
    let post = app.create_post(&user).await;

    app.server
        .post(&like_path(post.id))
        .await
        .assert_status(StatusCode::UNAUTHORIZED);

    assert_eq!(app.ctx.like_registry.count(post.id).await.unwrap(), 0);
}

#[tokio::test]
async fn non_numeric_post_id_is_bad_request() {
    let app = TestApp::new().await;
    let user = app.create_user().await;
    let (name, value) = as_user(user.id);

    app.server
        .post("/api/v1/posts/abc/like")
        .add_header(name, value)
        .await
        .assert_status_bad_request();
}

#[tokio::test]
async fn overlapping_likes_store_one_row() {
    let app = TestApp::new().await;
    let user = app.create_user().await;
    let post = app.create_post(&user).await;
    let path = like_path(post.id);

    let (n1, v1) = as_user(user.id);
    let (n2, v2) = as_user(user.id);
    let (n3, v3) = as_user(user.id);
    let (a, b, c) = tokio::join!(
        app.server.post(&path).add_header(n1, v1).into_future(),
        app.server.post(&path).add_header(n2, v2).into_future(),
        app.server.post(&path).add_header(n3, v3).into_future(),
    );

    a.assert_status_ok();
    b.assert_status_ok();
    c.assert_status_ok();
    assert_eq!(app.ctx.like_registry.count(post.id).await.unwrap(), 1);
}

#[tokio::test]
async fn closed_storage_is_service_unavailable() {
    let app = TestApp::new().await;
    let user = app.create_user().await;
    let post = app.create_post(&user).await;
    app.db.clone().close().await.expect("close pool");

    let (name, value) = as_user(user.id);
    let response = app.server.post(&like_path(post.id)).add_header(name, value).await;

    response.assert_status(StatusCode::SERVICE_UNAVAILABLE);
    assert_eq!(response.header("retry-after"), "1");
    assert_eq!(
        response.json::<serde_json::Value>()["message"],
        "Service is temporarily unavailable. Try again later."
    );

    let (name, value) = as_user(user.id);
    app.server
        .delete(&like_path(post.id))
        .add_header(name, value)
        .await
        .assert_status(StatusCode::SERVICE_UNAVAILABLE);
}

#[tokio::test]
async fn stalled_storage_times_out_as_service_unavailable() {
    let app = TestApp::with_timeout(Duration::from_millis(200)).await;
    let user = app.create_user().await;
    let post = app.create_post(&user).await;

    // Another connection holds the write lock past the request deadline.
    let txn = app.db.begin().await.expect("begin");
    txn.execute_unprepared(
        "INSERT INTO users (username, created_at) VALUES ('holder', '2024-01-01T00:00:00Z')",
    )
    .await
    .expect("write inside transaction");

    let (name, value) = as_user(user.id);
    app.server
        .post(&like_path(post.id))
        .add_header(name, value)
        .await
        .assert_status(StatusCode::SERVICE_UNAVAILABLE);

    txn.rollback().await.expect("rollback");
    // The abandoned insert either landed whole or not at all.
    assert!(app.ctx.like_registry.count(post.id).await.unwrap() <= 1);
}
