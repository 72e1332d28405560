//! Per-user aggregate stats models.

use serde::Serialize;
use sqlx::FromRow;
use veritas_core::reputation::DEFAULT_CREDIBILITY;
use veritas_core::types::{DbId, Timestamp};

/// A row from the `user_stats` table. Created lazily on the first
/// qualifying action (vote or post creation).
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct UserStats {
    pub id: DbId,
    pub user_id: DbId,
    pub reputation: i64,
    pub total_upvotes_given: i64,
    pub total_downvotes_given: i64,
    pub total_posts_created: i64,
    pub credibility_score: i32,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// Stats as reported to callers: zeroed defaults when no row exists yet.
#[derive(Debug, Clone, Serialize)]
pub struct StatsSummary {
    pub user_id: DbId,
    pub reputation: i64,
    pub total_upvotes_given: i64,
    pub total_downvotes_given: i64,
    pub total_posts_created: i64,
    pub credibility_score: i32,
}

impl StatsSummary {
    /// Summary for a user with no stats row.
    pub fn empty(user_id: DbId) -> Self {
        Self {
            user_id,
            reputation: 0,
            total_upvotes_given: 0,
            total_downvotes_given: 0,
            total_posts_created: 0,
            credibility_score: DEFAULT_CREDIBILITY,
        }
    }
}

impl From<UserStats> for StatsSummary {
    fn from(row: UserStats) -> Self {
        Self {
            user_id: row.user_id,
            reputation: row.reputation,
            total_upvotes_given: row.total_upvotes_given,
            total_downvotes_given: row.total_downvotes_given,
            total_posts_created: row.total_posts_created,
            credibility_score: row.credibility_score,
        }
    }
}
