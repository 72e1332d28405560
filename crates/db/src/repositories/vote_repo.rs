//! Repository for the `votes` table: the vote ledger.
//!
//! A vote touches three pieces of shared mutable state (the vote row, the
//! post counters, the voter's stats), so the whole application runs in one
//! transaction with the post row and the vote row locked `FOR UPDATE`.
//! This closes the lost-update hazard of a read-modify-write without
//! locking; the `GREATEST(0, ..)` clamps keep counters at their zero floor
//! even if decrements race.

use sqlx::PgPool;
use veritas_core::types::DbId;
use veritas_core::vote::{transition, VoteKind};

use crate::models::post::CommunityPost;
use crate::models::stats::UserStats;
use crate::models::vote::Vote;
use crate::repositories::StatsRepo;

const POST_COLUMNS: &str = "id, user_id, content, kind, result, confidence, sources, analysis, \
                            upvotes, downvotes, created_at";

const COLUMNS: &str = "id, user_id, post_id, vote_type, created_at, updated_at";

/// What a vote application produced: the post with updated counters, the
/// voter's stance afterwards, and their recomputed stats.
#[derive(Debug, Clone)]
pub struct VoteOutcome {
    pub post: CommunityPost,
    pub current_vote: Option<VoteKind>,
    pub stats: UserStats,
}

pub struct VoteRepo;

impl VoteRepo {
    /// The voter's live vote on a post, if any.
    pub async fn find_by_user_and_post(
        pool: &PgPool,
        user_id: DbId,
        post_id: DbId,
    ) -> Result<Option<Vote>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM votes WHERE user_id = $1 AND post_id = $2");
        sqlx::query_as::<_, Vote>(&query)
            .bind(user_id)
            .bind(post_id)
            .fetch_optional(pool)
            .await
    }

    /// Apply one vote per the toggle/switch state machine.
    ///
    /// Returns `Ok(None)` when the post does not exist.
    pub async fn apply(
        pool: &PgPool,
        user_id: DbId,
        post_id: DbId,
        incoming: VoteKind,
    ) -> Result<Option<VoteOutcome>, sqlx::Error> {
        let mut tx = pool.begin().await?;

        // Lock the post row for the duration of the vote.
        let post_exists: Option<DbId> =
            sqlx::query_scalar("SELECT id FROM community_posts WHERE id = $1 FOR UPDATE")
                .bind(post_id)
                .fetch_optional(&mut *tx)
                .await?;
        if post_exists.is_none() {
            return Ok(None);
        }

        // Lock the voter's existing vote row, if any.
        let existing: Option<String> = sqlx::query_scalar(
            "SELECT vote_type FROM votes WHERE user_id = $1 AND post_id = $2 FOR UPDATE",
        )
        .bind(user_id)
        .bind(post_id)
        .fetch_optional(&mut *tx)
        .await?;

        let current = match existing.as_deref() {
            Some(s) => Some(
                s.parse::<VoteKind>()
                    .map_err(|e| sqlx::Error::Decode(Box::new(e)))?,
            ),
            None => None,
        };

        let t = transition(current, incoming);
        tracing::debug!(
            user_id,
            post_id,
            incoming = incoming.as_str(),
            removal = t.is_removal(),
            "Applying vote transition"
        );

        match (current, t.next) {
            (Some(_), None) => {
                sqlx::query("DELETE FROM votes WHERE user_id = $1 AND post_id = $2")
                    .bind(user_id)
                    .bind(post_id)
                    .execute(&mut *tx)
                    .await?;
            }
            (Some(_), Some(next)) => {
                sqlx::query(
                    "UPDATE votes SET vote_type = $3, updated_at = now()
                     WHERE user_id = $1 AND post_id = $2",
                )
                .bind(user_id)
                .bind(post_id)
                .bind(next.as_str())
                .execute(&mut *tx)
                .await?;
            }
            (None, Some(next)) => {
                sqlx::query("INSERT INTO votes (user_id, post_id, vote_type) VALUES ($1, $2, $3)")
                    .bind(user_id)
                    .bind(post_id)
                    .bind(next.as_str())
                    .execute(&mut *tx)
                    .await?;
            }
            // transition() never maps NoVote to NoVote.
            (None, None) => unreachable!("vote transition cannot remove a missing vote"),
        }

        let query = format!(
            "UPDATE community_posts
             SET upvotes = GREATEST(0, upvotes + $2),
                 downvotes = GREATEST(0, downvotes + $3)
             WHERE id = $1
             RETURNING {POST_COLUMNS}"
        );
        let post = sqlx::query_as::<_, CommunityPost>(&query)
            .bind(post_id)
            .bind(t.upvotes_delta)
            .bind(t.downvotes_delta)
            .fetch_one(&mut *tx)
            .await?;

        let stats = StatsRepo::apply_vote_deltas(
            &mut *tx,
            user_id,
            t.upvotes_given_delta,
            t.downvotes_given_delta,
        )
        .await?;

        tx.commit().await?;

        Ok(Some(VoteOutcome {
            post,
            current_vote: t.next,
            stats,
        }))
    }
}
