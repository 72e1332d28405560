//! Handlers for the `/community` resource (posts, feed, voting, moderation).

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use serde::{Deserialize, Serialize};
use veritas_core::error::CoreError;
use veritas_core::types::DbId;
use veritas_core::verdict::{CheckKind, Verdict};
use veritas_core::vote::VoteKind;
use veritas_db::models::post::{CommunityPost, CommunityPostView, CreateCommunityPost};
use veritas_db::models::stats::StatsSummary;
use veritas_db::repositories::{PostRepo, VoteRepo};

use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::middleware::rbac::RequireAdmin;
use crate::response::DataResponse;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Request / response types
// ---------------------------------------------------------------------------

/// Request body for `POST /community/posts`: a completed check shared
/// with the community.
#[derive(Debug, Deserialize)]
pub struct PublishPostRequest {
    pub content: String,
    pub kind: String,
    pub result: String,
    pub confidence: i32,
    #[serde(default)]
    pub sources: Vec<String>,
    pub analysis: String,
}

/// Request body for `POST /community/posts/{id}/vote`.
#[derive(Debug, Deserialize)]
pub struct VoteRequest {
    pub vote_type: String,
}

/// Response body for a vote: the post with fresh counters, the caller's
/// stance after the toggle/switch, and their updated stats.
#[derive(Debug, Serialize)]
pub struct VoteResponse {
    pub post: CommunityPost,
    pub current_vote: Option<String>,
    pub stats: StatsSummary,
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// POST /api/v1/community/posts
///
/// Publish a completed check to the community feed.
pub async fn publish_post(
    auth_user: AuthUser,
    State(state): State<AppState>,
    Json(input): Json<PublishPostRequest>,
) -> AppResult<(StatusCode, Json<DataResponse<CommunityPost>>)> {
    let content = input.content.trim();
    if content.is_empty() {
        return Err(AppError::Core(CoreError::Validation(
            "Content must not be empty".into(),
        )));
    }
    let kind: CheckKind = input.kind.parse().map_err(AppError::Core)?;
    let result: Verdict = input.result.parse().map_err(AppError::Core)?;
    if !(0..=100).contains(&input.confidence) {
        return Err(AppError::Core(CoreError::Validation(
            "Confidence must be between 0 and 100".into(),
        )));
    }

    let create = CreateCommunityPost {
        user_id: auth_user.user_id,
        content: content.to_string(),
        kind: kind.as_str().to_string(),
        result: result.as_str().to_string(),
        confidence: input.confidence,
        sources: input.sources,
        analysis: input.analysis,
    };
    let post = PostRepo::publish(&state.pool, &create).await?;
    tracing::info!(user_id = auth_user.user_id, post_id = post.id, "Published post");

    Ok((StatusCode::CREATED, Json(DataResponse { data: post })))
}

/// GET /api/v1/community/posts
///
/// The community feed, newest first, annotated with the caller's votes.
pub async fn list_posts(
    auth_user: AuthUser,
    State(state): State<AppState>,
) -> AppResult<Json<DataResponse<Vec<CommunityPostView>>>> {
    let feed = PostRepo::list_recent(&state.pool, Some(auth_user.user_id)).await?;
    Ok(Json(DataResponse { data: feed }))
}

/// POST /api/v1/community/posts/{id}/vote
///
/// Apply one vote per the toggle/switch semantics: repeating a vote
/// removes it, voting the other way switches it.
pub async fn vote_on_post(
    auth_user: AuthUser,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<VoteRequest>,
) -> AppResult<Json<DataResponse<VoteResponse>>> {
    let incoming: VoteKind = input.vote_type.parse().map_err(AppError::Core)?;

    let outcome = VoteRepo::apply(&state.pool, auth_user.user_id, id, incoming)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Post",
            id,
        }))?;

    Ok(Json(DataResponse {
        data: VoteResponse {
            post: outcome.post,
            current_vote: outcome.current_vote.map(|v| v.as_str().to_string()),
            stats: StatsSummary::from(outcome.stats),
        },
    }))
}

/// DELETE /api/v1/community/posts/{id}
///
/// Remove a post and its votes (admin only). Returns 204 No Content.
pub async fn delete_post(
    RequireAdmin(admin): RequireAdmin,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    let removed = PostRepo::delete(&state.pool, id).await?;
    if !removed {
        return Err(AppError::Core(CoreError::NotFound {
            entity: "Post",
            id,
        }));
    }
    tracing::info!(admin_id = admin.user_id, post_id = id, "Deleted post");
    Ok(StatusCode::NO_CONTENT)
}
