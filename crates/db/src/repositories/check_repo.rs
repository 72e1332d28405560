//! Repository for the `news_checks` and `image_checks` tables.
//!
//! Both tables are append-only; the only deletion path is the owner
//! clearing their own history.

use sqlx::PgPool;
use veritas_core::types::DbId;

use crate::models::check::{CreateImageCheck, CreateNewsCheck, ImageCheck, NewsCheck};

const NEWS_COLUMNS: &str =
    "id, user_id, content, kind, result, confidence, sources, analysis, created_at";

const IMAGE_COLUMNS: &str =
    "id, user_id, storage_key, probability, is_morphed, analysis, created_at";

/// History page size: the ten most recent checks.
pub const HISTORY_LIMIT: i64 = 10;

pub struct CheckRepo;

impl CheckRepo {
    pub async fn insert_news(
        pool: &PgPool,
        input: &CreateNewsCheck,
    ) -> Result<NewsCheck, sqlx::Error> {
        let query = format!(
            "INSERT INTO news_checks (user_id, content, kind, result, confidence, sources, analysis)
             VALUES ($1, $2, $3, $4, $5, $6, $7)
             RETURNING {NEWS_COLUMNS}"
        );
        sqlx::query_as::<_, NewsCheck>(&query)
            .bind(input.user_id)
            .bind(&input.content)
            .bind(&input.kind)
            .bind(&input.result)
            .bind(input.confidence)
            .bind(&input.sources)
            .bind(&input.analysis)
            .fetch_one(pool)
            .await
    }

    /// The caller's most recent news checks, newest first.
    pub async fn recent_news(pool: &PgPool, user_id: DbId) -> Result<Vec<NewsCheck>, sqlx::Error> {
        let query = format!(
            "SELECT {NEWS_COLUMNS} FROM news_checks
             WHERE user_id = $1
             ORDER BY created_at DESC, id DESC
             LIMIT $2"
        );
        sqlx::query_as::<_, NewsCheck>(&query)
            .bind(user_id)
            .bind(HISTORY_LIMIT)
            .fetch_all(pool)
            .await
    }

    /// Delete all of the caller's news checks; returns how many went.
    pub async fn clear_news(pool: &PgPool, user_id: DbId) -> Result<u64, sqlx::Error> {
        let result = sqlx::query("DELETE FROM news_checks WHERE user_id = $1")
            .bind(user_id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected())
    }

    pub async fn insert_image(
        pool: &PgPool,
        input: &CreateImageCheck,
    ) -> Result<ImageCheck, sqlx::Error> {
        let query = format!(
            "INSERT INTO image_checks (user_id, storage_key, probability, is_morphed, analysis)
             VALUES ($1, $2, $3, $4, $5)
             RETURNING {IMAGE_COLUMNS}"
        );
        sqlx::query_as::<_, ImageCheck>(&query)
            .bind(input.user_id)
            .bind(&input.storage_key)
            .bind(input.probability)
            .bind(input.is_morphed)
            .bind(&input.analysis)
            .fetch_one(pool)
            .await
    }

    /// The caller's most recent image checks, newest first.
    pub async fn recent_images(
        pool: &PgPool,
        user_id: DbId,
    ) -> Result<Vec<ImageCheck>, sqlx::Error> {
        let query = format!(
            "SELECT {IMAGE_COLUMNS} FROM image_checks
             WHERE user_id = $1
             ORDER BY created_at DESC, id DESC
             LIMIT $2"
        );
        sqlx::query_as::<_, ImageCheck>(&query)
            .bind(user_id)
            .bind(HISTORY_LIMIT)
            .fetch_all(pool)
            .await
    }

    /// Delete all of the caller's image checks; returns how many went.
    pub async fn clear_images(pool: &PgPool, user_id: DbId) -> Result<u64, sqlx::Error> {
        let result = sqlx::query("DELETE FROM image_checks WHERE user_id = $1")
            .bind(user_id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected())
    }
}
