//! Spot ledger: atomic spot claim/release plus availability counters.
//!
//! Methods take `&mut PgConnection` so the caller composes them into its own
//! transaction together with the reservation row changes. Nothing here
//! commits.

use parkhub_core::error::CoreError;
use parkhub_core::types::DbId;
use sqlx::PgConnection;

use crate::error::DbResult;

pub struct SpotLedger;

impl SpotLedger {
    /// Claim the lowest-id available spot under `lot_id`, flipping it to
    /// occupied and decrementing the lot's `available_spots`.
    ///
    /// The claim is a single conditional UPDATE over a `FOR UPDATE SKIP
    /// LOCKED` subselect: concurrent callers can never claim the same row,
    /// and callers racing for the last spot see `NoCapacity` instead of
    /// blocking on each other.
    pub async fn allocate(conn: &mut PgConnection, lot_id: DbId) -> DbResult<DbId> {
        let claimed: Option<(DbId,)> = sqlx::query_as(
            "UPDATE parking_spots SET status = 'occupied'
             WHERE id = (
                 SELECT id FROM parking_spots
                 WHERE lot_id = $1 AND status = 'available'
                 ORDER BY id
                 LIMIT 1
                 FOR UPDATE SKIP LOCKED
             )
             RETURNING id",
        )
        .bind(lot_id)
        .fetch_optional(&mut *conn)
        .await?;

        let Some((spot_id,)) = claimed else {
            let (lot_exists,): (bool,) =
                sqlx::query_as("SELECT EXISTS(SELECT 1 FROM parking_lots WHERE id = $1)")
                    .bind(lot_id)
                    .fetch_one(&mut *conn)
                    .await?;
            if !lot_exists {
                return Err(CoreError::NotFound {
                    entity: "ParkingLot",
                    id: lot_id,
                }
                .into());
            }
            return Err(CoreError::NoCapacity { lot_id }.into());
        };

        let updated = sqlx::query(
            "UPDATE parking_lots SET available_spots = available_spots - 1
             WHERE id = $1 AND available_spots > 0",
        )
        .bind(lot_id)
        .execute(&mut *conn)
        .await?;
        if updated.rows_affected() != 1 {
            // A claimed spot with a zero counter means the counter drifted
            // from the spot rows. Abort so the transaction rolls back.
            return Err(CoreError::Internal(format!(
                "available_spots counter out of sync for lot {lot_id}"
            ))
            .into());
        }

        tracing::debug!(lot_id, spot_id, "allocated spot");
        Ok(spot_id)
    }

    /// Flip `spot_id` from occupied back to available and increment the
    /// owning lot's `available_spots`. Returns the lot id.
    ///
    /// The caller guarantees the spot is currently occupied with an active
    /// reservation; a spot found in any other state is a contract violation
    /// and aborts the transaction.
    pub async fn release(conn: &mut PgConnection, spot_id: DbId) -> DbResult<DbId> {
        let released: Option<(DbId,)> = sqlx::query_as(
            "UPDATE parking_spots SET status = 'available'
             WHERE id = $1 AND status = 'occupied'
             RETURNING lot_id",
        )
        .bind(spot_id)
        .fetch_optional(&mut *conn)
        .await?;

        let Some((lot_id,)) = released else {
            return Err(CoreError::Internal(format!(
                "release called for spot {spot_id} that is not occupied"
            ))
            .into());
        };

        sqlx::query(
            "UPDATE parking_lots SET available_spots = available_spots + 1 WHERE id = $1",
        )
        .bind(lot_id)
        .execute(&mut *conn)
        .await?;

        tracing::debug!(lot_id, spot_id, "released spot");
        Ok(lot_id)
    }
}
