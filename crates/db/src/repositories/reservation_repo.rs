//! Repository for the `reservations` table.
//!
//! Reservation creation and release are transactional and live in
//! [`crate::engine::reservation`]; this repository covers the read queries,
//! including the feeds consumed by the out-of-band notification jobs.

use chrono::NaiveDate;
use parkhub_core::types::DbId;
use sqlx::PgPool;

use crate::models::reservation::Reservation;
use crate::models::user::User;

const COLUMNS: &str = "id, spot_id, user_id, parking_time, leaving_time, cost, vehicle_no";

pub struct ReservationRepo;

impl ReservationRepo {
    /// Find a reservation by its internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Reservation>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM reservations WHERE id = $1");
        sqlx::query_as::<_, Reservation>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// All reservations for a user, newest first.
    pub async fn list_by_user(
        pool: &PgPool,
        user_id: DbId,
    ) -> Result<Vec<Reservation>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM reservations
             WHERE user_id = $1
             ORDER BY parking_time DESC"
        );
        sqlx::query_as::<_, Reservation>(&query)
            .bind(user_id)
            .fetch_all(pool)
            .await
    }

    /// Reservations whose parking time falls on the given UTC date.
    pub async fn list_on_date(
        pool: &PgPool,
        date: NaiveDate,
    ) -> Result<Vec<Reservation>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM reservations
             WHERE (parking_time AT TIME ZONE 'UTC')::date = $1
             ORDER BY parking_time"
        );
        sqlx::query_as::<_, Reservation>(&query)
            .bind(date)
            .fetch_all(pool)
            .await
    }

    /// A user's reservations with parking time inside `[from, to]` (UTC
    /// dates, inclusive). Feed for the monthly activity report.
    pub async fn list_for_user_between(
        pool: &PgPool,
        user_id: DbId,
        from: NaiveDate,
        to: NaiveDate,
    ) -> Result<Vec<Reservation>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM reservations
             WHERE user_id = $1
               AND (parking_time AT TIME ZONE 'UTC')::date BETWEEN $2 AND $3
             ORDER BY parking_time"
        );
        sqlx::query_as::<_, Reservation>(&query)
            .bind(user_id)
            .bind(from)
            .bind(to)
            .fetch_all(pool)
            .await
    }

    /// Registered users without any reservation on the given UTC date.
    /// Feed for the daily reminder job.
    pub async fn users_without_reservation_on(
        pool: &PgPool,
        date: NaiveDate,
    ) -> Result<Vec<User>, sqlx::Error> {
        sqlx::query_as::<_, User>(
            "SELECT u.id, u.email, u.password_hash, u.full_name, u.address, u.pincode,
                    u.role, u.created_at
             FROM users u
             WHERE u.role = 'user'
               AND NOT EXISTS (
                   SELECT 1 FROM reservations r
                   WHERE r.user_id = u.id
                     AND (r.parking_time AT TIME ZONE 'UTC')::date = $1
               )
             ORDER BY u.id",
        )
        .bind(date)
        .fetch_all(pool)
        .await
    }
}
