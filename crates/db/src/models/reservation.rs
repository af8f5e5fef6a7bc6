//! Reservation entity model and DTOs.

use parkhub_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

/// A row from the `reservations` table.
///
/// `leaving_time` and `cost` are NULL while the reservation is active and are
/// set exactly once on release. Rows are never deleted; they are the
/// permanent history consulted by the structural guard.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Reservation {
    pub id: DbId,
    pub spot_id: DbId,
    pub user_id: DbId,
    pub parking_time: Timestamp,
    pub leaving_time: Option<Timestamp>,
    pub cost: Option<i64>,
    pub vehicle_no: String,
}

impl Reservation {
    pub fn is_active(&self) -> bool {
        self.leaving_time.is_none()
    }
}

/// Request body for reserving a spot.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct ReserveSpot {
    pub lot_id: DbId,
    #[validate(length(min = 1, max = 20))]
    pub vehicle_no: String,
}
