//! Community post models and DTOs.

use serde::Serialize;
use sqlx::FromRow;
use veritas_core::types::{DbId, Timestamp};

/// A row from the `community_posts` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct CommunityPost {
    pub id: DbId,
    pub user_id: DbId,
    pub content: String,
    pub kind: String,
    pub result: String,
    pub confidence: i32,
    pub sources: Vec<String>,
    pub analysis: String,
    pub upvotes: i64,
    pub downvotes: i64,
    pub created_at: Timestamp,
}

/// Input for publishing a check as a community post.
#[derive(Debug, Clone)]
pub struct CreateCommunityPost {
    pub user_id: DbId,
    pub content: String,
    pub kind: String,
    pub result: String,
    pub confidence: i32,
    pub sources: Vec<String>,
    pub analysis: String,
}

/// A post annotated for a specific viewer: author display name plus the
/// viewer's current vote, if any.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct CommunityPostView {
    pub id: DbId,
    pub user_id: DbId,
    pub content: String,
    pub kind: String,
    pub result: String,
    pub confidence: i32,
    pub sources: Vec<String>,
    pub analysis: String,
    pub upvotes: i64,
    pub downvotes: i64,
    pub created_at: Timestamp,
    pub author_name: String,
    pub viewer_vote: Option<String>,
}
