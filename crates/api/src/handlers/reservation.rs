//! Handlers for the `/reservations` resource and the per-user summary.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use parkhub_core::types::DbId;
use parkhub_db::engine::ReservationEngine;
use parkhub_db::models::reports::{UserReservation, UserSummary};
use parkhub_db::models::reservation::{Reservation, ReserveSpot};
use parkhub_db::repositories::ReportRepo;
use validator::Validate;

use crate::error::AppResult;
use crate::middleware::rbac::RequireUser;
use crate::response::DataResponse;
use crate::state::AppState;

/// POST /api/v1/reservations
///
/// Reserve a spot in the requested lot for the authenticated user.
pub async fn reserve(
    RequireUser(user): RequireUser,
    State(state): State<AppState>,
    Json(input): Json<ReserveSpot>,
) -> AppResult<(StatusCode, Json<Reservation>)> {
    input.validate()?;
    let reservation =
        ReservationEngine::reserve(&state.pool, user.user_id, input.lot_id, &input.vehicle_no)
            .await?;
    Ok((StatusCode::CREATED, Json(reservation)))
}

/// POST /api/v1/reservations/{id}/release
///
/// Release one of the authenticated user's reservations. Responds with the
/// finalized reservation, cost included.
pub async fn release(
    RequireUser(user): RequireUser,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<Reservation>> {
    let reservation = ReservationEngine::release(&state.pool, id, user.user_id).await?;
    Ok(Json(reservation))
}

/// GET /api/v1/reservations
///
/// The authenticated user's reservation history, newest first, joined with
/// lot info.
pub async fn list_mine(
    RequireUser(user): RequireUser,
    State(state): State<AppState>,
) -> AppResult<Json<DataResponse<Vec<UserReservation>>>> {
    let reservations = ReportRepo::user_reservations(&state.pool, user.user_id).await?;
    Ok(Json(DataResponse { data: reservations }))
}

/// GET /api/v1/summary
///
/// Active/released counts and total spend for the authenticated user.
pub async fn summary(
    RequireUser(user): RequireUser,
    State(state): State<AppState>,
) -> AppResult<Json<DataResponse<UserSummary>>> {
    let summary = ReportRepo::user_summary(&state.pool, user.user_id).await?;
    Ok(Json(DataResponse { data: summary }))
}
