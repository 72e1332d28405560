//! Repository for the `community_posts` table.

use sqlx::PgPool;
use veritas_core::types::DbId;

use crate::models::post::{CommunityPost, CommunityPostView, CreateCommunityPost};
use crate::repositories::StatsRepo;

const COLUMNS: &str = "id, user_id, content, kind, result, confidence, sources, analysis, \
                       upvotes, downvotes, created_at";

/// Community feed page size: the fifty most recent posts.
pub const FEED_LIMIT: i64 = 50;

pub struct PostRepo;

impl PostRepo {
    /// Publish a check to the community and count it against the author's
    /// stats, in one transaction.
    pub async fn publish(
        pool: &PgPool,
        input: &CreateCommunityPost,
    ) -> Result<CommunityPost, sqlx::Error> {
        let mut tx = pool.begin().await?;

        let query = format!(
            "INSERT INTO community_posts
                 (user_id, content, kind, result, confidence, sources, analysis)
             VALUES ($1, $2, $3, $4, $5, $6, $7)
             RETURNING {COLUMNS}"
        );
        let post = sqlx::query_as::<_, CommunityPost>(&query)
            .bind(input.user_id)
            .bind(&input.content)
            .bind(&input.kind)
            .bind(&input.result)
            .bind(input.confidence)
            .bind(&input.sources)
            .bind(&input.analysis)
            .fetch_one(&mut *tx)
            .await?;

        StatsRepo::bump_posts_created(&mut *tx, input.user_id).await?;

        tx.commit().await?;
        Ok(post)
    }

    pub async fn find_by_id(
        pool: &PgPool,
        id: DbId,
    ) -> Result<Option<CommunityPost>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM community_posts WHERE id = $1");
        sqlx::query_as::<_, CommunityPost>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// The most recent posts, newest first, annotated with the author's
    /// display name and the viewer's current vote (if any).
    pub async fn list_recent(
        pool: &PgPool,
        viewer_id: Option<DbId>,
    ) -> Result<Vec<CommunityPostView>, sqlx::Error> {
        let query = format!(
            "SELECT p.id, p.user_id, p.content, p.kind, p.result, p.confidence,
                    p.sources, p.analysis, p.upvotes, p.downvotes, p.created_at,
                    u.username AS author_name,
                    v.vote_type AS viewer_vote
             FROM community_posts p
             JOIN users u ON u.id = p.user_id
             LEFT JOIN votes v ON v.post_id = p.id AND v.user_id = $1
             ORDER BY p.created_at DESC, p.id DESC
             LIMIT $2"
        );
        sqlx::query_as::<_, CommunityPostView>(&query)
            .bind(viewer_id)
            .bind(FEED_LIMIT)
            .fetch_all(pool)
            .await
    }

    /// Delete a post. Associated votes go with it via `ON DELETE CASCADE`,
    /// so the removal is atomic. Returns whether a row existed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM community_posts WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    /// How many votes reference a post. Used by tests to assert the cascade.
    pub async fn vote_count(pool: &PgPool, post_id: DbId) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar("SELECT COUNT(*) FROM votes WHERE post_id = $1")
            .bind(post_id)
            .fetch_one(pool)
            .await
    }
}
