//! Handlers for individual parking spots (admin only).

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use parkhub_core::types::DbId;
use parkhub_db::engine::StructuralGuard;
use parkhub_db::models::reports::SpotDetail;
use parkhub_db::repositories::ReportRepo;

use crate::error::AppResult;
use crate::middleware::rbac::RequireAdmin;
use crate::state::AppState;

/// DELETE /api/v1/admin/spots/{id}
///
/// Guarded delete: only an available, never-reserved spot can go. Shrinks
/// the owning lot's `total_spots` and `available_spots` by one.
pub async fn delete(
    RequireAdmin(_admin): RequireAdmin,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    StructuralGuard::delete_spot(&state.pool, id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// GET /api/v1/admin/lots/{lot_id}/spots/{position}
///
/// Resolve the Nth spot (1-indexed, ordered by id) under a lot; when
/// occupied, includes its most recent reservation.
pub async fn detail(
    RequireAdmin(_admin): RequireAdmin,
    State(state): State<AppState>,
    Path((lot_id, position)): Path<(DbId, i64)>,
) -> AppResult<Json<SpotDetail>> {
    let detail = ReportRepo::spot_detail(&state.pool, position, lot_id).await?;
    Ok(Json(detail))
}
