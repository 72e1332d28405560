//! News-check and image-check models and DTOs.
//!
//! Verdict fields are stored as plain text validated by CHECK constraints;
//! the typed enums live in `veritas_core::verdict` and are converted at
//! the handler boundary.

use serde::Serialize;
use sqlx::FromRow;
use veritas_core::types::{DbId, Timestamp};

/// A row from the `news_checks` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct NewsCheck {
    pub id: DbId,
    pub user_id: DbId,
    pub content: String,
    pub kind: String,
    pub result: String,
    pub confidence: i32,
    pub sources: Vec<String>,
    pub analysis: String,
    pub created_at: Timestamp,
}

/// Input for persisting a completed news check.
#[derive(Debug, Clone)]
pub struct CreateNewsCheck {
    pub user_id: DbId,
    pub content: String,
    pub kind: String,
    pub result: String,
    pub confidence: i32,
    pub sources: Vec<String>,
    pub analysis: String,
}

/// A row from the `image_checks` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct ImageCheck {
    pub id: DbId,
    pub user_id: DbId,
    pub storage_key: String,
    pub probability: i32,
    pub is_morphed: bool,
    pub analysis: String,
    pub created_at: Timestamp,
}

/// Input for persisting a completed image check.
#[derive(Debug, Clone)]
pub struct CreateImageCheck {
    pub user_id: DbId,
    pub storage_key: String,
    pub probability: i32,
    pub is_morphed: bool,
    pub analysis: String,
}
