//! Repository for the `parking_spots` table.

use parkhub_core::types::DbId;
use sqlx::PgPool;

use crate::models::parking_spot::ParkingSpot;

const COLUMNS: &str = "id, lot_id, status";

/// Read access to parking spots.
///
/// Status changes go through the spot ledger and deletion through the
/// structural guard; neither is exposed here.
pub struct SpotRepo;

impl SpotRepo {
    /// Find a spot by its internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<ParkingSpot>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM parking_spots WHERE id = $1");
        sqlx::query_as::<_, ParkingSpot>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List all spots under a lot, ordered by id.
    pub async fn list_by_lot(pool: &PgPool, lot_id: DbId) -> Result<Vec<ParkingSpot>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM parking_spots WHERE lot_id = $1 ORDER BY id");
        sqlx::query_as::<_, ParkingSpot>(&query)
            .bind(lot_id)
            .fetch_all(pool)
            .await
    }
}
