//! Structural guard: deletion of lots and spots without breaking history.
//!
//! Both checks are classic check-then-act hazards, so each operation locks
//! the rows it is about to judge (`FOR UPDATE`) before checking. A reserve
//! or release racing against a delete serialises behind the lock and sees
//! either the old world or an absent row, never a half-deleted lot.

use parkhub_core::error::CoreError;
use parkhub_core::roles::SPOT_AVAILABLE;
use parkhub_core::types::DbId;
use sqlx::PgPool;

use crate::error::DbResult;

pub struct StructuralGuard;

impl StructuralGuard {
    /// Delete a lot and all of its spots.
    ///
    /// Fails with `NotFound` if the lot is absent, `HasReservationHistory`
    /// if any reservation (active or historical) references any of its
    /// spots, and `HasOccupiedSpots` if a spot is occupied. A consistent
    /// database never reaches the occupancy check (an occupied spot always
    /// has an active reservation); it catches rows edited outside the
    /// engine.
    pub async fn delete_lot(pool: &PgPool, lot_id: DbId) -> DbResult<()> {
        let mut tx = pool.begin().await?;

        let lot: Option<(DbId,)> =
            sqlx::query_as("SELECT id FROM parking_lots WHERE id = $1 FOR UPDATE")
                .bind(lot_id)
                .fetch_optional(&mut *tx)
                .await?;
        if lot.is_none() {
            return Err(CoreError::NotFound {
                entity: "ParkingLot",
                id: lot_id,
            }
            .into());
        }

        // Lock the spot rows so concurrent allocation against this lot
        // serialises behind the guard.
        sqlx::query("SELECT id FROM parking_spots WHERE lot_id = $1 FOR UPDATE")
            .bind(lot_id)
            .fetch_all(&mut *tx)
            .await?;

        let (has_history,): (bool,) = sqlx::query_as(
            "SELECT EXISTS(
                 SELECT 1 FROM reservations r
                 JOIN parking_spots s ON s.id = r.spot_id
                 WHERE s.lot_id = $1
             )",
        )
        .bind(lot_id)
        .fetch_one(&mut *tx)
        .await?;
        if has_history {
            return Err(CoreError::HasReservationHistory {
                entity: "ParkingLot",
                id: lot_id,
            }
            .into());
        }

        let (has_occupied,): (bool,) = sqlx::query_as(
            "SELECT EXISTS(
                 SELECT 1 FROM parking_spots WHERE lot_id = $1 AND status = 'occupied'
             )",
        )
        .bind(lot_id)
        .fetch_one(&mut *tx)
        .await?;
        if has_occupied {
            return Err(CoreError::HasOccupiedSpots { id: lot_id }.into());
        }

        sqlx::query("DELETE FROM parking_spots WHERE lot_id = $1")
            .bind(lot_id)
            .execute(&mut *tx)
            .await?;
        sqlx::query("DELETE FROM parking_lots WHERE id = $1")
            .bind(lot_id)
            .execute(&mut *tx)
            .await?;

        tx.commit().await?;

        tracing::info!(lot_id, "lot deleted");
        Ok(())
    }

    /// Delete a single spot and shrink its lot's counters.
    ///
    /// Fails with `NotFound` if absent, `SpotOccupied` unless the spot is
    /// available, and `HasReservationHistory` if it was ever reserved. On
    /// success both `total_spots` and `available_spots` drop by one -- the
    /// spot was necessarily counted as available, since deletion requires
    /// that status.
    pub async fn delete_spot(pool: &PgPool, spot_id: DbId) -> DbResult<()> {
        let mut tx = pool.begin().await?;

        let spot: Option<(DbId, String)> =
            sqlx::query_as("SELECT lot_id, status FROM parking_spots WHERE id = $1 FOR UPDATE")
                .bind(spot_id)
                .fetch_optional(&mut *tx)
                .await?;
        let Some((lot_id, status)) = spot else {
            return Err(CoreError::NotFound {
                entity: "ParkingSpot",
                id: spot_id,
            }
            .into());
        };

        if status != SPOT_AVAILABLE {
            return Err(CoreError::SpotOccupied { id: spot_id }.into());
        }

        let (has_history,): (bool,) =
            sqlx::query_as("SELECT EXISTS(SELECT 1 FROM reservations WHERE spot_id = $1)")
                .bind(spot_id)
                .fetch_one(&mut *tx)
                .await?;
        if has_history {
            return Err(CoreError::HasReservationHistory {
                entity: "ParkingSpot",
                id: spot_id,
            }
            .into());
        }

        sqlx::query("DELETE FROM parking_spots WHERE id = $1")
            .bind(spot_id)
            .execute(&mut *tx)
            .await?;
        sqlx::query(
            "UPDATE parking_lots
             SET total_spots = total_spots - 1,
                 available_spots = available_spots - 1
             WHERE id = $1",
        )
        .bind(lot_id)
        .execute(&mut *tx)
        .await?;

        tx.commit().await?;

        tracing::info!(lot_id, spot_id, "spot deleted");
        Ok(())
    }
}
