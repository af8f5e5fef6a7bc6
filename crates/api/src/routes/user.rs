//! Routes for regular users: browsing lots and managing their own
//! reservations. Every handler here requires the `user` role.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::{lot, reservation};
use crate::state::AppState;

/// ```text
/// GET  /lots                         list lots with availability
/// GET  /lots/search?q=               substring search
/// POST /reservations                 reserve a spot
/// GET  /reservations                 own reservation history
/// POST /reservations/{id}/release    release, returns cost
/// GET  /summary                      active/released counts, total spent
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/lots", get(lot::list_user))
        .route("/lots/search", get(lot::search))
        .route(
            "/reservations",
            get(reservation::list_mine).post(reservation::reserve),
        )
        .route("/reservations/{id}/release", post(reservation::release))
        .route("/summary", get(reservation::summary))
}
