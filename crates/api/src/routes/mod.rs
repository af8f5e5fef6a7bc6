//! Route definitions.

pub mod admin;
pub mod auth;
pub mod health;
pub mod user;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /auth/register                          register (public)
/// /auth/login                             login (public)
///
/// /lots                                   list lots (user)
/// /lots/search?q=                         search lots (user)
/// /reservations                           reserve, own history (user)
/// /reservations/{id}/release              release (user)
/// /summary                                user summary (user)
///
/// /admin/lots                             create, list (admin)
/// /admin/lots/{id}                        update, guarded delete (admin)
/// /admin/lots/{lot_id}/spots/{position}   spot detail (admin)
/// /admin/spots/{id}                       guarded delete (admin)
/// /admin/users                            registered users (admin)
/// /admin/users/search?q=                  search users (admin)
/// /admin/summary                          global summary (admin)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .merge(auth::router())
        .merge(user::router())
        .nest("/admin", admin::router())
}
