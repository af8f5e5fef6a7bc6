//! Admin-only handlers: registered-user listing/search and the global
//! summary.

use axum::extract::{Query, State};
use axum::Json;
use parkhub_db::models::reports::AdminSummary;
use parkhub_db::models::user::UserProfile;
use parkhub_db::repositories::{ReportRepo, UserRepo};
use serde::Deserialize;

use crate::error::AppResult;
use crate::middleware::rbac::RequireAdmin;
use crate::response::DataResponse;
use crate::state::AppState;

/// Query string for user search.
#[derive(Debug, Deserialize)]
pub struct UserSearchQuery {
    pub q: String,
}

/// GET /api/v1/admin/users
///
/// All registered users (admins excluded), profile fields only.
pub async fn list_users(
    RequireAdmin(_admin): RequireAdmin,
    State(state): State<AppState>,
) -> AppResult<Json<DataResponse<Vec<UserProfile>>>> {
    let users = UserRepo::list_registered(&state.pool).await?;
    let profiles = users.into_iter().map(UserProfile::from).collect();
    Ok(Json(DataResponse { data: profiles }))
}

/// GET /api/v1/admin/users/search?q=
///
/// Case-insensitive substring search over registered users' full names.
pub async fn search_users(
    RequireAdmin(_admin): RequireAdmin,
    State(state): State<AppState>,
    Query(query): Query<UserSearchQuery>,
) -> AppResult<Json<DataResponse<Vec<UserProfile>>>> {
    let users = UserRepo::search_by_name(&state.pool, &query.q).await?;
    let profiles = users.into_iter().map(UserProfile::from).collect();
    Ok(Json(DataResponse { data: profiles }))
}

/// GET /api/v1/admin/summary
///
/// Global occupancy, total revenue, and per-lot reserved-spot counts.
pub async fn summary(
    RequireAdmin(_admin): RequireAdmin,
    State(state): State<AppState>,
) -> AppResult<Json<DataResponse<AdminSummary>>> {
    let summary = ReportRepo::admin_summary(&state.pool).await?;
    Ok(Json(DataResponse { data: summary }))
}
