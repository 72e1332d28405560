//! Route definitions for user stats, location, and roles.

use axum::routing::{get, put};
use axum::Router;

use crate::handlers::users;
use crate::state::AppState;

/// User routes mounted at `/users`.
///
/// ```text
/// GET /me/stats      -> my_stats
/// PUT /me/location   -> update_location
/// GET /{id}/stats    -> user_stats
/// PUT /{id}/role     -> set_role (admin, or sole-user bootstrap)
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/me/stats", get(users::my_stats))
        .route("/me/location", put(users::update_location))
        .route("/{id}/stats", get(users::user_stats))
        .route("/{id}/role", put(users::set_role))
}
