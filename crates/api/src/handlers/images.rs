//! Handlers for the `/images` resource (check, history).

use axum::extract::State;
use axum::Json;
use serde::Deserialize;
use veritas_core::error::CoreError;
use veritas_core::image;
use veritas_db::models::check::{CreateImageCheck, ImageCheck};
use veritas_db::repositories::CheckRepo;

use crate::error::{AppError, AppResult};
use crate::handlers::news::ClearedResponse;
use crate::middleware::auth::AuthUser;
use crate::response::DataResponse;
use crate::state::AppState;

/// Request body for `POST /images/check`.
#[derive(Debug, Deserialize)]
pub struct CheckImageRequest {
    /// Storage key of the previously uploaded image.
    pub storage_key: String,
}

/// POST /api/v1/images/check
///
/// Run the manipulation analysis over an uploaded image and persist the
/// result to the caller's history.
pub async fn check_image(
    auth_user: AuthUser,
    State(state): State<AppState>,
    Json(input): Json<CheckImageRequest>,
) -> AppResult<Json<DataResponse<ImageCheck>>> {
    let storage_key = input.storage_key.trim();
    if storage_key.is_empty() {
        return Err(AppError::Core(CoreError::Validation(
            "Storage key must not be empty".into(),
        )));
    }

    let report = image::analyze(storage_key);
    tracing::info!(
        user_id = auth_user.user_id,
        probability = report.probability,
        is_morphed = report.is_morphed,
        "Image check completed"
    );

    let create = CreateImageCheck {
        user_id: auth_user.user_id,
        storage_key: storage_key.to_string(),
        probability: report.probability,
        is_morphed: report.is_morphed,
        analysis: report.analysis,
    };
    let saved = CheckRepo::insert_image(&state.pool, &create).await?;

    Ok(Json(DataResponse { data: saved }))
}

/// GET /api/v1/images/history
///
/// The caller's ten most recent image checks, newest first.
pub async fn image_history(
    auth_user: AuthUser,
    State(state): State<AppState>,
) -> AppResult<Json<DataResponse<Vec<ImageCheck>>>> {
    let history = CheckRepo::recent_images(&state.pool, auth_user.user_id).await?;
    Ok(Json(DataResponse { data: history }))
}

/// DELETE /api/v1/images/history
///
/// Clear the caller's entire image-check history.
pub async fn clear_image_history(
    auth_user: AuthUser,
    State(state): State<AppState>,
) -> AppResult<Json<DataResponse<ClearedResponse>>> {
    let deleted = CheckRepo::clear_images(&state.pool, auth_user.user_id).await?;
    tracing::info!(user_id = auth_user.user_id, deleted, "Cleared image history");
    Ok(Json(DataResponse {
        data: ClearedResponse { deleted },
    }))
}
