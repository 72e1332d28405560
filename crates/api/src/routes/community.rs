//! Route definitions for the community feed.

use axum::routing::{delete, get, post};
use axum::Router;

use crate::handlers::community;
use crate::state::AppState;

/// Community routes mounted at `/community`.
///
/// ```text
/// POST   /posts            -> publish_post
/// GET    /posts            -> list_posts
/// POST   /posts/{id}/vote  -> vote_on_post
/// DELETE /posts/{id}       -> delete_post (admin only)
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/posts",
            get(community::list_posts).post(community::publish_post),
        )
        .route("/posts/{id}/vote", post(community::vote_on_post))
        .route("/posts/{id}", delete(community::delete_post))
}
