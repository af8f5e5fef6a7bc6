//! Handlers for parking lots: admin CRUD plus the user-facing listing and
//! search.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use parkhub_core::error::CoreError;
use parkhub_core::types::DbId;
use parkhub_db::engine::StructuralGuard;
use parkhub_db::models::parking_lot::{CreateParkingLot, ParkingLot, UpdateParkingLot};
use parkhub_db::models::reports::LotAvailability;
use parkhub_db::repositories::{LotRepo, ReportRepo};
use serde::Deserialize;
use validator::Validate;

use crate::error::{AppError, AppResult};
use crate::middleware::rbac::{RequireAdmin, RequireUser};
use crate::response::DataResponse;
use crate::state::AppState;

/// Query string for lot search.
#[derive(Debug, Deserialize)]
pub struct SearchQuery {
    pub q: String,
}

/// POST /api/v1/admin/lots
///
/// Create a lot and its spots atomically.
pub async fn create(
    RequireAdmin(_admin): RequireAdmin,
    State(state): State<AppState>,
    Json(input): Json<CreateParkingLot>,
) -> AppResult<(StatusCode, Json<ParkingLot>)> {
    input.validate()?;
    let lot = LotRepo::create_with_spots(&state.pool, &input).await?;
    tracing::info!(lot_id = lot.id, total_spots = lot.total_spots, "lot created");
    Ok((StatusCode::CREATED, Json(lot)))
}

/// GET /api/v1/admin/lots
///
/// All lots with availability derived by live spot count.
pub async fn list_admin(
    RequireAdmin(_admin): RequireAdmin,
    State(state): State<AppState>,
) -> AppResult<Json<DataResponse<Vec<LotAvailability>>>> {
    let lots = ReportRepo::list_lots(&state.pool).await?;
    Ok(Json(DataResponse { data: lots }))
}

/// GET /api/v1/lots
///
/// Same listing, for regular users browsing where to park.
pub async fn list_user(
    RequireUser(_user): RequireUser,
    State(state): State<AppState>,
) -> AppResult<Json<DataResponse<Vec<LotAvailability>>>> {
    let lots = ReportRepo::list_lots(&state.pool).await?;
    Ok(Json(DataResponse { data: lots }))
}

/// GET /api/v1/lots/search?q=
///
/// Case-insensitive substring search over location, address, and pincode.
pub async fn search(
    RequireUser(_user): RequireUser,
    State(state): State<AppState>,
    Query(query): Query<SearchQuery>,
) -> AppResult<Json<DataResponse<Vec<ParkingLot>>>> {
    let lots = LotRepo::search(&state.pool, &query.q).await?;
    Ok(Json(DataResponse { data: lots }))
}

/// PUT /api/v1/admin/lots/{id}
///
/// Update descriptive fields and price. The spot count is not editable.
pub async fn update(
    RequireAdmin(_admin): RequireAdmin,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateParkingLot>,
) -> AppResult<Json<ParkingLot>> {
    input.validate()?;
    let lot = LotRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "ParkingLot",
            id,
        }))?;
    Ok(Json(lot))
}

/// DELETE /api/v1/admin/lots/{id}
///
/// Guarded delete: refused while reservation history or occupied spots
/// exist.
pub async fn delete(
    RequireAdmin(_admin): RequireAdmin,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    StructuralGuard::delete_lot(&state.pool, id).await?;
    Ok(StatusCode::NO_CONTENT)
}
