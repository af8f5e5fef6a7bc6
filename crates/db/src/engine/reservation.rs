//! Reservation engine: spot allocation and release with billing.

use chrono::Utc;
use parkhub_core::billing::reservation_cost;
use parkhub_core::error::CoreError;
use parkhub_core::types::DbId;
use sqlx::PgPool;

use crate::error::DbResult;
use crate::models::reservation::Reservation;

use super::ledger::SpotLedger;

const COLUMNS: &str = "id, spot_id, user_id, parking_time, leaving_time, cost, vehicle_no";

pub struct ReservationEngine;

impl ReservationEngine {
    /// Reserve a spot in `lot_id` for `user_id`.
    ///
    /// Ledger allocation and reservation insert happen in one transaction:
    /// either an occupied spot exists with exactly one active reservation
    /// pointing at it, or nothing persisted.
    ///
    /// Errors: `NotFound` (unknown lot), `NoCapacity` (lot full).
    pub async fn reserve(
        pool: &PgPool,
        user_id: DbId,
        lot_id: DbId,
        vehicle_no: &str,
    ) -> DbResult<Reservation> {
        let mut tx = pool.begin().await?;

        let spot_id = SpotLedger::allocate(&mut *tx, lot_id).await?;

        let query = format!(
            "INSERT INTO reservations (spot_id, user_id, parking_time, vehicle_no)
             VALUES ($1, $2, NOW(), $3)
             RETURNING {COLUMNS}"
        );
        let reservation = sqlx::query_as::<_, Reservation>(&query)
            .bind(spot_id)
            .bind(user_id)
            .bind(vehicle_no)
            .fetch_one(&mut *tx)
            .await?;

        tx.commit().await?;

        tracing::info!(
            reservation_id = reservation.id,
            user_id,
            lot_id,
            spot_id,
            "reservation created"
        );
        Ok(reservation)
    }

    /// Release reservation `reservation_id` on behalf of `user_id`, setting
    /// `leaving_time` and `cost` and freeing the spot, in one transaction.
    ///
    /// The lookup is scoped to `(id, user_id)`: a reservation that exists but
    /// belongs to another user reports the same `NotFound` as one that does
    /// not exist, so callers cannot probe for foreign reservation ids.
    ///
    /// Errors: `NotFound`, `AlreadyReleased`.
    pub async fn release(
        pool: &PgPool,
        reservation_id: DbId,
        user_id: DbId,
    ) -> DbResult<Reservation> {
        let mut tx = pool.begin().await?;

        let query = format!(
            "SELECT {COLUMNS} FROM reservations
             WHERE id = $1 AND user_id = $2
             FOR UPDATE"
        );
        let reservation = sqlx::query_as::<_, Reservation>(&query)
            .bind(reservation_id)
            .bind(user_id)
            .fetch_optional(&mut *tx)
            .await?
            .ok_or(CoreError::NotFound {
                entity: "Reservation",
                id: reservation_id,
            })?;

        if reservation.leaving_time.is_some() {
            return Err(CoreError::AlreadyReleased { id: reservation_id }.into());
        }

        let (price,): (i64,) = sqlx::query_as(
            "SELECT l.price FROM parking_lots l
             JOIN parking_spots s ON s.lot_id = l.id
             WHERE s.id = $1",
        )
        .bind(reservation.spot_id)
        .fetch_one(&mut *tx)
        .await?;

        let leaving_time = Utc::now();
        let cost = reservation_cost(reservation.parking_time, leaving_time, price);

        let query = format!(
            "UPDATE reservations SET leaving_time = $2, cost = $3
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        let released = sqlx::query_as::<_, Reservation>(&query)
            .bind(reservation_id)
            .bind(leaving_time)
            .bind(cost)
            .fetch_one(&mut *tx)
            .await?;

        SpotLedger::release(&mut *tx, reservation.spot_id).await?;

        tx.commit().await?;

        tracing::info!(reservation_id, user_id, cost, "reservation released");
        Ok(released)
    }
}
