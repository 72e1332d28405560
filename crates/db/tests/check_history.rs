//! Integration tests for check persistence and history clearing.

use sqlx::PgPool;
use veritas_db::models::check::{CreateImageCheck, CreateNewsCheck};
use veritas_db::models::user::CreateUser;
use veritas_db::repositories::{CheckRepo, UserRepo};

async fn create_user(pool: &PgPool, username: &str) -> i64 {
    let input = CreateUser {
        username: username.to_string(),
        email: format!("{username}@test.com"),
        password_hash: "$argon2id$fake-hash-for-tests".to_string(),
        role: "user".to_string(),
    };
    UserRepo::create(pool, &input).await.unwrap().id
}

fn news_check(user_id: i64, content: &str) -> CreateNewsCheck {
    CreateNewsCheck {
        user_id,
        content: content.to_string(),
        kind: "text".to_string(),
        result: "uncertain".to_string(),
        confidence: 50,
        sources: vec![],
        analysis: "Signals are mixed.".to_string(),
    }
}

#[sqlx::test]
async fn history_is_bounded_and_newest_first(pool: PgPool) {
    let user = create_user(&pool, "checker").await;

    for i in 0..12 {
        CheckRepo::insert_news(&pool, &news_check(user, &format!("claim {i}")))
            .await
            .unwrap();
    }

    let history = CheckRepo::recent_news(&pool, user).await.unwrap();
    assert_eq!(history.len(), 10);
    // Newest first: the last inserted claim leads.
    assert_eq!(history[0].content, "claim 11");
    assert_eq!(history[9].content, "claim 2");
}

#[sqlx::test]
async fn history_is_scoped_to_its_owner(pool: PgPool) {
    let alice = create_user(&pool, "alice").await;
    let bob = create_user(&pool, "bob").await;

    CheckRepo::insert_news(&pool, &news_check(alice, "alice's claim"))
        .await
        .unwrap();

    assert_eq!(CheckRepo::recent_news(&pool, alice).await.unwrap().len(), 1);
    assert!(CheckRepo::recent_news(&pool, bob).await.unwrap().is_empty());
}

#[sqlx::test]
async fn clearing_history_only_removes_the_callers_rows(pool: PgPool) {
    let alice = create_user(&pool, "alice").await;
    let bob = create_user(&pool, "bob").await;

    for i in 0..3 {
        CheckRepo::insert_news(&pool, &news_check(alice, &format!("a{i}")))
            .await
            .unwrap();
    }
    CheckRepo::insert_news(&pool, &news_check(bob, "b0")).await.unwrap();

    let removed = CheckRepo::clear_news(&pool, alice).await.unwrap();
    assert_eq!(removed, 3);

    assert!(CheckRepo::recent_news(&pool, alice).await.unwrap().is_empty());
    assert_eq!(CheckRepo::recent_news(&pool, bob).await.unwrap().len(), 1);
}

#[sqlx::test]
async fn image_checks_round_trip(pool: PgPool) {
    let user = create_user(&pool, "imgchecker").await;

    let input = CreateImageCheck {
        user_id: user,
        storage_key: "uploads/photo-1.png".to_string(),
        probability: 72,
        is_morphed: true,
        analysis: "Artifacts present.".to_string(),
    };
    let saved = CheckRepo::insert_image(&pool, &input).await.unwrap();
    assert_eq!(saved.probability, 72);
    assert!(saved.is_morphed);

    let history = CheckRepo::recent_images(&pool, user).await.unwrap();
    assert_eq!(history.len(), 1);
    assert_eq!(history[0].storage_key, "uploads/photo-1.png");

    assert_eq!(CheckRepo::clear_images(&pool, user).await.unwrap(), 1);
    assert!(CheckRepo::recent_images(&pool, user).await.unwrap().is_empty());
}
