//! Handlers for the `/users` resource (stats, location, role management).

use axum::extract::{Path, State};
use axum::Json;
use serde::Deserialize;
use veritas_core::error::CoreError;
use veritas_core::roles::{is_known_role, ROLE_ADMIN};
use veritas_core::types::DbId;
use veritas_db::models::stats::StatsSummary;
use veritas_db::models::user::{User, UserLocation};
use veritas_db::repositories::{StatsRepo, UserRepo};

use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::response::DataResponse;
use crate::state::AppState;

/// Request body for `PUT /users/{id}/role`.
#[derive(Debug, Deserialize)]
pub struct SetRoleRequest {
    pub role: String,
}

/// GET /api/v1/users/me/stats
///
/// The caller's aggregate stats. Zeroed defaults when the caller has not
/// voted or posted yet.
pub async fn my_stats(
    auth_user: AuthUser,
    State(state): State<AppState>,
) -> AppResult<Json<DataResponse<StatsSummary>>> {
    let stats = StatsRepo::find_by_user(&state.pool, auth_user.user_id)
        .await?
        .map(StatsSummary::from)
        .unwrap_or_else(|| StatsSummary::empty(auth_user.user_id));
    Ok(Json(DataResponse { data: stats }))
}

/// GET /api/v1/users/{id}/stats
///
/// Aggregate stats for any user. 404 when the user does not exist;
/// zeroed defaults when they exist but have no stats row yet.
pub async fn user_stats(
    _auth_user: AuthUser,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<DataResponse<StatsSummary>>> {
    UserRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: "User", id }))?;

    let stats = StatsRepo::find_by_user(&state.pool, id)
        .await?
        .map(StatsSummary::from)
        .unwrap_or_else(|| StatsSummary::empty(id));
    Ok(Json(DataResponse { data: stats }))
}

/// PUT /api/v1/users/me/location
///
/// Store the caller's coordinates; the model provider uses them for
/// regional context.
pub async fn update_location(
    auth_user: AuthUser,
    State(state): State<AppState>,
    Json(input): Json<UserLocation>,
) -> AppResult<Json<DataResponse<User>>> {
    if !(-90.0..=90.0).contains(&input.latitude) {
        return Err(AppError::Core(CoreError::Validation(
            "Latitude must be between -90 and 90".into(),
        )));
    }
    if !(-180.0..=180.0).contains(&input.longitude) {
        return Err(AppError::Core(CoreError::Validation(
            "Longitude must be between -180 and 180".into(),
        )));
    }

    let user = UserRepo::update_location(&state.pool, auth_user.user_id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "User",
            id: auth_user.user_id,
        }))?;
    Ok(Json(DataResponse { data: user }))
}

/// PUT /api/v1/users/{id}/role
///
/// Change a user's role. Admin only, with one bootstrap exception: the
/// sole registered user may promote themselves so the first admin can
/// exist at all.
pub async fn set_role(
    auth_user: AuthUser,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<SetRoleRequest>,
) -> AppResult<Json<DataResponse<User>>> {
    if !is_known_role(&input.role) {
        return Err(AppError::Core(CoreError::Validation(format!(
            "Unknown role: {}",
            input.role
        ))));
    }

    if auth_user.role != ROLE_ADMIN {
        let user_count = UserRepo::count(&state.pool).await?;
        let bootstrapping = user_count == 1 && id == auth_user.user_id;
        if !bootstrapping {
            return Err(AppError::Core(CoreError::Forbidden(
                "Admin role required".into(),
            )));
        }
    }

    let user = UserRepo::set_role(&state.pool, id, &input.role)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: "User", id }))?;
    tracing::info!(
        actor_id = auth_user.user_id,
        user_id = id,
        role = %input.role,
        "Changed user role"
    );
    Ok(Json(DataResponse { data: user }))
}
