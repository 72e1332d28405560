//! Route definitions for news checks.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::news;
use crate::state::AppState;

/// News-check routes mounted at `/news`.
///
/// ```text
/// POST   /check    -> check_news
/// GET    /history  -> news_history
/// DELETE /history  -> clear_news_history
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/check", post(news::check_news))
        .route(
            "/history",
            get(news::news_history).delete(news::clear_news_history),
        )
}
