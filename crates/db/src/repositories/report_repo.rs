//! Read-only aggregation queries: availability listing, user and admin
//! summaries, and spot detail lookup.

use parkhub_core::error::CoreError;
use parkhub_core::types::DbId;
use sqlx::PgPool;

use crate::error::DbResult;
use crate::models::reports::{
    AdminSummary, LotAvailability, LotShare, SpotDetail, SpotReservation, UserSummary,
    UserReservation,
};

pub struct ReportRepo;

impl ReportRepo {
    /// All lots with availability derived by live spot count.
    ///
    /// Deliberately recounts instead of trusting the `available_spots`
    /// counter, so a drifted counter shows up in this listing rather than
    /// staying hidden.
    pub async fn list_lots(pool: &PgPool) -> Result<Vec<LotAvailability>, sqlx::Error> {
        sqlx::query_as::<_, LotAvailability>(
            "SELECT l.id, l.prime_location, l.price, l.address, l.pincode, l.total_spots,
                    COUNT(s.id) FILTER (WHERE s.status = 'available') AS available_spots,
                    COUNT(s.id) FILTER (WHERE s.status = 'occupied') AS occupied_spots
             FROM parking_lots l
             LEFT JOIN parking_spots s ON s.lot_id = l.id
             GROUP BY l.id
             ORDER BY l.id",
        )
        .fetch_all(pool)
        .await
    }

    /// Active/released counts and total spend for one user.
    pub async fn user_summary(pool: &PgPool, user_id: DbId) -> Result<UserSummary, sqlx::Error> {
        sqlx::query_as::<_, UserSummary>(
            "SELECT COUNT(*) FILTER (WHERE leaving_time IS NULL) AS active_reservations,
                    COUNT(*) FILTER (WHERE leaving_time IS NOT NULL) AS checked_out_reservations,
                    COALESCE(SUM(cost) FILTER (WHERE leaving_time IS NOT NULL), 0)::bigint
                        AS total_spent
             FROM reservations
             WHERE user_id = $1",
        )
        .bind(user_id)
        .fetch_one(pool)
        .await
    }

    /// Global occupancy, revenue, and per-lot reserved-spot counts.
    ///
    /// Occupancy comes from the maintained counters (`total - available`),
    /// matching what the ledger committed.
    pub async fn admin_summary(pool: &PgPool) -> Result<AdminSummary, sqlx::Error> {
        let (occupied, available): (i64, i64) = sqlx::query_as(
            "SELECT COALESCE(SUM(total_spots - available_spots), 0),
                    COALESCE(SUM(available_spots), 0)
             FROM parking_lots",
        )
        .fetch_one(pool)
        .await?;

        let (total_revenue,): (i64,) = sqlx::query_as(
            "SELECT COALESCE(SUM(cost), 0)::bigint
             FROM reservations WHERE leaving_time IS NOT NULL",
        )
        .fetch_one(pool)
        .await?;

        let lot_shares = sqlx::query_as::<_, LotShare>(
            "SELECT prime_location AS lot_name,
                    (total_spots - available_spots)::bigint AS reserved_spots
             FROM parking_lots
             ORDER BY id",
        )
        .fetch_all(pool)
        .await?;

        Ok(AdminSummary {
            occupied,
            available,
            total_revenue,
            lot_shares,
        })
    }

    /// Resolve the Nth spot (1-indexed, ordered by id) under a lot. When the
    /// spot is occupied, attaches its most recent reservation.
    ///
    /// Fails with `Validation` when the position is out of range for the lot
    /// and `NotFound` when the lot itself does not exist.
    pub async fn spot_detail(
        pool: &PgPool,
        position: i64,
        lot_id: DbId,
    ) -> DbResult<SpotDetail> {
        let (lot_exists,): (bool,) =
            sqlx::query_as("SELECT EXISTS(SELECT 1 FROM parking_lots WHERE id = $1)")
                .bind(lot_id)
                .fetch_one(pool)
                .await?;
        if !lot_exists {
            return Err(CoreError::NotFound {
                entity: "ParkingLot",
                id: lot_id,
            }
            .into());
        }

        let spot: Option<(DbId, String)> = if position >= 1 {
            sqlx::query_as(
                "SELECT id, status FROM parking_spots
                 WHERE lot_id = $1
                 ORDER BY id
                 OFFSET $2 LIMIT 1",
            )
            .bind(lot_id)
            .bind(position - 1)
            .fetch_optional(pool)
            .await?
        } else {
            None
        };

        let Some((spot_id, status)) = spot else {
            return Err(CoreError::Validation(format!(
                "Invalid spot position {position} for lot {lot_id}"
            ))
            .into());
        };

        let reservation = if status == parkhub_core::roles::SPOT_OCCUPIED {
            sqlx::query_as::<_, SpotReservation>(
                "SELECT id AS reservation_id, user_id, parking_time, vehicle_no
                 FROM reservations
                 WHERE spot_id = $1
                 ORDER BY parking_time DESC
                 LIMIT 1",
            )
            .bind(spot_id)
            .fetch_optional(pool)
            .await?
        } else {
            None
        };

        Ok(SpotDetail {
            spot_id,
            lot_id,
            status,
            reservation,
        })
    }

    /// A user's full reservation history joined with spot and lot info,
    /// newest first.
    pub async fn user_reservations(
        pool: &PgPool,
        user_id: DbId,
    ) -> Result<Vec<UserReservation>, sqlx::Error> {
        sqlx::query_as::<_, UserReservation>(
            "SELECT r.id AS reservation_id, r.spot_id, l.prime_location, l.price,
                    r.parking_time, r.leaving_time, r.cost, r.vehicle_no
             FROM reservations r
             JOIN parking_spots s ON s.id = r.spot_id
             JOIN parking_lots l ON l.id = s.lot_id
             WHERE r.user_id = $1
             ORDER BY r.parking_time DESC",
        )
        .bind(user_id)
        .fetch_all(pool)
        .await
    }
}
