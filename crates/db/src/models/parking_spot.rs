//! Parking-spot entity model.
//!
//! Spots have no create/update DTOs: they are created in bulk with their lot
//! and their status only changes through the spot ledger.

use parkhub_core::roles::SPOT_OCCUPIED;
use parkhub_core::types::DbId;
use serde::Serialize;
use sqlx::FromRow;

/// A row from the `parking_spots` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct ParkingSpot {
    pub id: DbId,
    pub lot_id: DbId,
    /// `available` or `occupied` (see `parkhub_core::roles`).
    pub status: String,
}

impl ParkingSpot {
    pub fn is_occupied(&self) -> bool {
        self.status == SPOT_OCCUPIED
    }
}
