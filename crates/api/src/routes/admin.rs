//! Admin routes, mounted at `/admin`. Every handler requires the `admin`
//! role.

use axum::routing::{delete, get, put};
use axum::Router;

use crate::handlers::{admin, lot, spot};
use crate::state::AppState;

/// ```text
/// POST   /admin/lots                            create lot with spots
/// GET    /admin/lots                            list with live counts
/// PUT    /admin/lots/{id}                       update descriptive fields
/// DELETE /admin/lots/{id}                       guarded delete
/// GET    /admin/lots/{lot_id}/spots/{position}  spot detail (1-indexed)
/// DELETE /admin/spots/{id}                      guarded delete
/// GET    /admin/users                           registered users
/// GET    /admin/users/search?q=                 search by name
/// GET    /admin/summary                         occupancy + revenue
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/lots", get(lot::list_admin).post(lot::create))
        .route("/lots/{id}", put(lot::update).delete(lot::delete))
        .route("/lots/{lot_id}/spots/{position}", get(spot::detail))
        .route("/spots/{id}", delete(spot::delete))
        .route("/users", get(admin::list_users))
        .route("/users/search", get(admin::search_users))
        .route("/summary", get(admin::summary))
}
