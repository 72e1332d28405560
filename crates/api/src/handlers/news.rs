//! Handlers for the `/news` resource (check, history).

use axum::extract::State;
use axum::Json;
use serde::{Deserialize, Serialize};
use veritas_core::error::CoreError;
use veritas_core::provider::region_from_coords;
use veritas_core::verdict::CheckKind;
use veritas_db::models::check::{CreateNewsCheck, NewsCheck};
use veritas_db::repositories::{CheckRepo, UserRepo};

use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::response::DataResponse;
use crate::state::AppState;

/// Request body for `POST /news/check`.
#[derive(Debug, Deserialize)]
pub struct CheckNewsRequest {
    /// The claim text or article URL to assess.
    pub content: String,
    /// `"text"` or `"url"`.
    pub kind: String,
}

/// Response body for `DELETE /news/history` and `DELETE /images/history`.
#[derive(Debug, Serialize)]
pub struct ClearedResponse {
    pub deleted: u64,
}

/// POST /api/v1/news/check
///
/// Run the configured verdict provider over the submitted content and
/// persist the result to the caller's history. Nothing is persisted when
/// the provider fails.
pub async fn check_news(
    auth_user: AuthUser,
    State(state): State<AppState>,
    Json(input): Json<CheckNewsRequest>,
) -> AppResult<Json<DataResponse<NewsCheck>>> {
    let content = input.content.trim();
    if content.is_empty() {
        return Err(AppError::Core(CoreError::Validation(
            "Content must not be empty".into(),
        )));
    }
    let kind: CheckKind = input.kind.parse().map_err(AppError::Core)?;

    // Coordinates, when stored, give the model provider regional context.
    let region = match UserRepo::find_by_id(&state.pool, auth_user.user_id).await? {
        Some(user) => region_from_coords(user.latitude.zip(user.longitude)),
        None => "Global",
    };

    let report = state.provider.evaluate(content, kind, region).await?;
    tracing::info!(
        user_id = auth_user.user_id,
        provider = state.provider.name(),
        result = %report.result.as_str(),
        confidence = report.confidence,
        "News check completed"
    );

    let create = CreateNewsCheck {
        user_id: auth_user.user_id,
        content: content.to_string(),
        kind: kind.as_str().to_string(),
        result: report.result.as_str().to_string(),
        confidence: report.confidence,
        sources: report.sources,
        analysis: report.analysis,
    };
    let saved = CheckRepo::insert_news(&state.pool, &create).await?;

    Ok(Json(DataResponse { data: saved }))
}

/// GET /api/v1/news/history
///
/// The caller's ten most recent news checks, newest first.
pub async fn news_history(
    auth_user: AuthUser,
    State(state): State<AppState>,
) -> AppResult<Json<DataResponse<Vec<NewsCheck>>>> {
    let history = CheckRepo::recent_news(&state.pool, auth_user.user_id).await?;
    Ok(Json(DataResponse { data: history }))
}

/// DELETE /api/v1/news/history
///
/// Clear the caller's entire news-check history.
pub async fn clear_news_history(
    auth_user: AuthUser,
    State(state): State<AppState>,
) -> AppResult<Json<DataResponse<ClearedResponse>>> {
    let deleted = CheckRepo::clear_news(&state.pool, auth_user.user_id).await?;
    tracing::info!(user_id = auth_user.user_id, deleted, "Cleared news history");
    Ok(Json(DataResponse {
        data: ClearedResponse { deleted },
    }))
}
