//! Vote models.

use serde::Serialize;
use sqlx::FromRow;
use veritas_core::types::{DbId, Timestamp};

/// A row from the `votes` table. At most one live row per (user, post).
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Vote {
    pub id: DbId,
    pub user_id: DbId,
    pub post_id: DbId,
    pub vote_type: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}
