//! Repository for the `user_stats` table.
//!
//! Rows are created lazily by upserts guarded by the unique constraint on
//! `user_id`, never by read-then-conditionally-insert. The delta-applying
//! functions take a `PgConnection` so callers can run them inside the same
//! transaction as the counter updates they accompany.

use sqlx::{PgConnection, PgPool};
use veritas_core::reputation;
use veritas_core::types::DbId;

use crate::models::stats::UserStats;

const COLUMNS: &str = "id, user_id, reputation, total_upvotes_given, total_downvotes_given, \
                       total_posts_created, credibility_score, created_at, updated_at";

pub struct StatsRepo;

impl StatsRepo {
    pub async fn find_by_user(
        pool: &PgPool,
        user_id: DbId,
    ) -> Result<Option<UserStats>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM user_stats WHERE user_id = $1");
        sqlx::query_as::<_, UserStats>(&query)
            .bind(user_id)
            .fetch_optional(pool)
            .await
    }

    /// Apply signed vote-counter deltas, creating the row if absent, then
    /// recompute reputation from the stored counters.
    ///
    /// Counters are clamped at zero in SQL so a racing double-decrement
    /// can never drive them negative.
    pub async fn apply_vote_deltas(
        conn: &mut PgConnection,
        user_id: DbId,
        upvotes_given_delta: i64,
        downvotes_given_delta: i64,
    ) -> Result<UserStats, sqlx::Error> {
        let seed_up = upvotes_given_delta.max(0);
        let seed_down = downvotes_given_delta.max(0);
        let seed_reputation = reputation::compute(seed_up, seed_down);

        let query = format!(
            "INSERT INTO user_stats
                 (user_id, reputation, total_upvotes_given, total_downvotes_given)
             VALUES ($1, $2, $3, $4)
             ON CONFLICT (user_id) DO UPDATE SET
                 total_upvotes_given =
                     GREATEST(0, user_stats.total_upvotes_given + $5),
                 total_downvotes_given =
                     GREATEST(0, user_stats.total_downvotes_given + $6),
                 updated_at = now()
             RETURNING {COLUMNS}"
        );
        let row = sqlx::query_as::<_, UserStats>(&query)
            .bind(user_id)
            .bind(seed_reputation)
            .bind(seed_up)
            .bind(seed_down)
            .bind(upvotes_given_delta)
            .bind(downvotes_given_delta)
            .fetch_one(&mut *conn)
            .await?;

        // Reputation always equals the formula over the stored counters,
        // including after a toggle-off removal.
        let new_reputation =
            reputation::compute(row.total_upvotes_given, row.total_downvotes_given);
        if new_reputation == row.reputation {
            return Ok(row);
        }

        let query = format!(
            "UPDATE user_stats SET reputation = $2, updated_at = now()
             WHERE user_id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, UserStats>(&query)
            .bind(user_id)
            .bind(new_reputation)
            .fetch_one(&mut *conn)
            .await
    }

    /// Count one created post, creating the stats row if absent.
    pub async fn bump_posts_created(
        conn: &mut PgConnection,
        user_id: DbId,
    ) -> Result<UserStats, sqlx::Error> {
        let query = format!(
            "INSERT INTO user_stats (user_id, total_posts_created)
             VALUES ($1, 1)
             ON CONFLICT (user_id) DO UPDATE SET
                 total_posts_created = user_stats.total_posts_created + 1,
                 updated_at = now()
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, UserStats>(&query)
            .bind(user_id)
            .fetch_one(&mut *conn)
            .await
    }
}
