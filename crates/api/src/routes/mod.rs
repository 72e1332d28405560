pub mod auth;
pub mod community;
pub mod health;
pub mod images;
pub mod news;
pub mod users;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /auth/register                       register (public)
/// /auth/login                          login (public)
/// /auth/refresh                        refresh (public)
/// /auth/logout                         logout (requires auth)
///
/// /news/check                          run a news check (POST)
/// /news/history                        recent checks (GET), clear (DELETE)
///
/// /images/check                        run an image check (POST)
/// /images/history                      recent checks (GET), clear (DELETE)
///
/// /community/posts                     publish (POST), feed (GET)
/// /community/posts/{id}/vote           vote (POST)
/// /community/posts/{id}                delete (DELETE, admin only)
///
/// /users/me/stats                      caller's stats (GET)
/// /users/me/location                   store coordinates (PUT)
/// /users/{id}/stats                    any user's stats (GET)
/// /users/{id}/role                     change role (PUT, admin or bootstrap)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        // Authentication routes (register, login, refresh, logout).
        .nest("/auth", auth::router())
        // News checks and per-user history.
        .nest("/news", news::router())
        // Image checks and per-user history.
        .nest("/images", images::router())
        // Community feed, voting, and moderation.
        .nest("/community", community::router())
        // User stats, location, and role management.
        .nest("/users", users::router())
}
