//! Repository for the `parking_lots` table.

use parkhub_core::types::DbId;
use sqlx::PgPool;

use crate::models::parking_lot::{CreateParkingLot, ParkingLot, UpdateParkingLot};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str =
    "id, prime_location, price, address, pincode, total_spots, available_spots, created_at";

/// Provides CRUD operations for parking lots.
///
/// Deletion is not here: removing a lot must pass the structural guard in
/// [`crate::engine::guard`].
pub struct LotRepo;

impl LotRepo {
    /// Insert a new lot together with its `total_spots` spots, atomically.
    ///
    /// Every spot starts as `available`, so `available_spots` starts equal to
    /// `total_spots`.
    pub async fn create_with_spots(
        pool: &PgPool,
        input: &CreateParkingLot,
    ) -> Result<ParkingLot, sqlx::Error> {
        let mut tx = pool.begin().await?;

        let query = format!(
            "INSERT INTO parking_lots
                (prime_location, price, address, pincode, total_spots, available_spots)
             VALUES ($1, $2, $3, $4, $5, $5)
             RETURNING {COLUMNS}"
        );
        let lot = sqlx::query_as::<_, ParkingLot>(&query)
            .bind(&input.prime_location)
            .bind(input.price)
            .bind(&input.address)
            .bind(&input.pincode)
            .bind(input.total_spots)
            .fetch_one(&mut *tx)
            .await?;

        sqlx::query(
            "INSERT INTO parking_spots (lot_id)
             SELECT $1 FROM generate_series(1, $2)",
        )
        .bind(lot.id)
        .bind(input.total_spots)
        .execute(&mut *tx)
        .await?;

        tx.commit().await?;
        Ok(lot)
    }

    /// Find a lot by its internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<ParkingLot>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM parking_lots WHERE id = $1");
        sqlx::query_as::<_, ParkingLot>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List all lots, ordered by id.
    pub async fn list_all(pool: &PgPool) -> Result<Vec<ParkingLot>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM parking_lots ORDER BY id");
        sqlx::query_as::<_, ParkingLot>(&query).fetch_all(pool).await
    }

    /// Update a lot's descriptive fields. Only non-`None` fields are applied.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateParkingLot,
    ) -> Result<Option<ParkingLot>, sqlx::Error> {
        let query = format!(
            "UPDATE parking_lots SET
                prime_location = COALESCE($2, prime_location),
                price = COALESCE($3, price),
                address = COALESCE($4, address),
                pincode = COALESCE($5, pincode)
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, ParkingLot>(&query)
            .bind(id)
            .bind(&input.prime_location)
            .bind(input.price)
            .bind(&input.address)
            .bind(&input.pincode)
            .fetch_optional(pool)
            .await
    }

    /// Case-insensitive substring search over location, address, and pincode.
    pub async fn search(pool: &PgPool, term: &str) -> Result<Vec<ParkingLot>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM parking_lots
             WHERE prime_location ILIKE '%' || $1 || '%'
                OR address ILIKE '%' || $1 || '%'
                OR pincode ILIKE '%' || $1 || '%'
             ORDER BY id"
        );
        sqlx::query_as::<_, ParkingLot>(&query)
            .bind(term)
            .fetch_all(pool)
            .await
    }

    /// Lots created on the given UTC date. Feed for the "new lot" notifier.
    pub async fn created_on(
        pool: &PgPool,
        date: chrono::NaiveDate,
    ) -> Result<Vec<ParkingLot>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM parking_lots
             WHERE (created_at AT TIME ZONE 'UTC')::date = $1
             ORDER BY id"
        );
        sqlx::query_as::<_, ParkingLot>(&query)
            .bind(date)
            .fetch_all(pool)
            .await
    }
}
