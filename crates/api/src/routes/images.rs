//! Route definitions for image checks.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::images;
use crate::state::AppState;

/// Image-check routes mounted at `/images`.
///
/// ```text
/// POST   /check    -> check_image
/// GET    /history  -> image_history
/// DELETE /history  -> clear_image_history
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/check", post(images::check_image))
        .route(
            "/history",
            get(images::image_history).delete(images::clear_image_history),
        )
}
