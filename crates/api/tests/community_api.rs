//! HTTP-level integration tests for the community feed and voting.

mod common;

use axum::http::StatusCode;
use common::{body_json, delete_auth, get_auth, post_json_auth};
use sqlx::PgPool;

/// Publish a post as `token` and return its id.
async fn publish(pool: &PgPool, token: &str) -> i64 {
    let app = common::build_test_app(pool.clone());
    let body = serde_json::json!({
        "content": "Reuters reports steady rainfall",
        "kind": "text",
        "result": "uncertain",
        "confidence": 50,
        "sources": ["No corroborating sources found"],
        "analysis": "Signals are mixed.",
    });
    let response = post_json_auth(app, "/api/v1/community/posts", body, token).await;
    assert_eq!(response.status(), StatusCode::CREATED);
    body_json(response).await["data"]["id"].as_i64().unwrap()
}

async fn vote(pool: &PgPool, token: &str, post_id: i64, vote_type: &str) -> serde_json::Value {
    let app = common::build_test_app(pool.clone());
    let body = serde_json::json!({ "vote_type": vote_type });
    let response =
        post_json_auth(app, &format!("/api/v1/community/posts/{post_id}/vote"), body, token).await;
    assert_eq!(response.status(), StatusCode::OK);
    body_json(response).await
}

#[sqlx::test(migrations = "../db/migrations")]
async fn publishing_rejects_invalid_fields(pool: PgPool) {
    let app = common::build_test_app(pool.clone());
    let (token, _) = common::register_user(app, "publisher").await;

    // Unknown verdict label.
    let app = common::build_test_app(pool.clone());
    let body = serde_json::json!({
        "content": "a claim", "kind": "text", "result": "maybe",
        "confidence": 50, "analysis": "x",
    });
    let response = post_json_auth(app, "/api/v1/community/posts", body, &token).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    // Out-of-range confidence.
    let app = common::build_test_app(pool);
    let body = serde_json::json!({
        "content": "a claim", "kind": "text", "result": "real",
        "confidence": 120, "analysis": "x",
    });
    let response = post_json_auth(app, "/api/v1/community/posts", body, &token).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn feed_shows_author_and_viewer_vote(pool: PgPool) {
    let app = common::build_test_app(pool.clone());
    let (author, _) = common::register_user(app, "author").await;
    let app = common::build_test_app(pool.clone());
    let (viewer, _) = common::register_user(app, "viewer").await;

    let post_id = publish(&pool, &author).await;
    vote(&pool, &viewer, post_id, "upvote").await;

    let app = common::build_test_app(pool);
    let response = get_auth(app, "/api/v1/community/posts", &viewer).await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    let feed = json["data"].as_array().unwrap();
    assert_eq!(feed.len(), 1);
    assert_eq!(feed[0]["author_name"], "author");
    assert_eq!(feed[0]["viewer_vote"], "upvote");
    assert_eq!(feed[0]["upvotes"], 1);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn repeating_a_vote_toggles_it_off(pool: PgPool) {
    let app = common::build_test_app(pool.clone());
    let (author, _) = common::register_user(app, "author").await;
    let app = common::build_test_app(pool.clone());
    let (voter, _) = common::register_user(app, "voter").await;
    let post_id = publish(&pool, &author).await;

    let first = vote(&pool, &voter, post_id, "upvote").await;
    assert_eq!(first["data"]["post"]["upvotes"], 1);
    assert_eq!(first["data"]["current_vote"], "upvote");
    assert_eq!(first["data"]["stats"]["reputation"], 2);

    let second = vote(&pool, &voter, post_id, "upvote").await;
    assert_eq!(second["data"]["post"]["upvotes"], 0);
    assert!(second["data"]["current_vote"].is_null());
    assert_eq!(second["data"]["stats"]["reputation"], 0);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn switching_a_vote_moves_the_count(pool: PgPool) {
    let app = common::build_test_app(pool.clone());
    let (author, _) = common::register_user(app, "author").await;
    let app = common::build_test_app(pool.clone());
    let (voter, _) = common::register_user(app, "voter").await;
    let post_id = publish(&pool, &author).await;

    vote(&pool, &voter, post_id, "upvote").await;
    let switched = vote(&pool, &voter, post_id, "downvote").await;

    assert_eq!(switched["data"]["post"]["upvotes"], 0);
    assert_eq!(switched["data"]["post"]["downvotes"], 1);
    assert_eq!(switched["data"]["current_vote"], "downvote");
    assert_eq!(switched["data"]["stats"]["reputation"], -1);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn voting_on_a_missing_post_is_404(pool: PgPool) {
    let app = common::build_test_app(pool.clone());
    let (token, _) = common::register_user(app, "voter").await;

    let app = common::build_test_app(pool);
    let body = serde_json::json!({ "vote_type": "upvote" });
    let response =
        post_json_auth(app, "/api/v1/community/posts/999999/vote", body, &token).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn unknown_vote_type_is_rejected(pool: PgPool) {
    let app = common::build_test_app(pool.clone());
    let (author, _) = common::register_user(app, "author").await;
    let post_id = publish(&pool, &author).await;

    let app = common::build_test_app(pool);
    let body = serde_json::json!({ "vote_type": "sideways" });
    let response =
        post_json_auth(app, &format!("/api/v1/community/posts/{post_id}/vote"), body, &author)
            .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn only_admins_can_delete_posts(pool: PgPool) {
    let app = common::build_test_app(pool.clone());
    let (author, _) = common::register_user(app, "author").await;
    let post_id = publish(&pool, &author).await;

    // The author themselves cannot delete.
    let app = common::build_test_app(pool.clone());
    let response = delete_auth(app, &format!("/api/v1/community/posts/{post_id}"), &author).await;
    assert_eq!(response.status(), StatusCode::FORBIDDEN);

    let app = common::build_test_app(pool.clone());
    let (admin, _) = common::register_admin(&pool, app, "moderator").await;

    let app = common::build_test_app(pool.clone());
    let response = delete_auth(app, &format!("/api/v1/community/posts/{post_id}"), &admin).await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    // Deleting it again is a 404.
    let app = common::build_test_app(pool);
    let response = delete_auth(app, &format!("/api/v1/community/posts/{post_id}"), &admin).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
