//! Parking-lot entity model and DTOs.

use parkhub_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

/// A row from the `parking_lots` table.
///
/// `available_spots` is the maintained counter; it equals the live count of
/// spots with status `available` at every commit boundary.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct ParkingLot {
    pub id: DbId,
    pub prime_location: String,
    pub price: i64,
    pub address: String,
    pub pincode: String,
    pub total_spots: i32,
    pub available_spots: i32,
    pub created_at: Timestamp,
}

/// DTO for creating a new lot together with its spots.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateParkingLot {
    #[validate(length(min = 1, max = 100))]
    pub prime_location: String,
    /// Currency units per started hour.
    #[validate(range(min = 0))]
    pub price: i64,
    #[validate(length(min = 1, max = 500))]
    pub address: String,
    #[validate(length(min = 1, max = 10))]
    pub pincode: String,
    /// Number of spots created atomically with the lot.
    #[validate(range(min = 1, max = 10000))]
    pub total_spots: i32,
}

/// DTO for updating a lot's descriptive fields. All fields are optional.
///
/// `total_spots` is intentionally absent: the spot count only changes through
/// spot deletion, which keeps the counter invariants intact.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct UpdateParkingLot {
    #[validate(length(min = 1, max = 100))]
    pub prime_location: Option<String>,
    #[validate(range(min = 0))]
    pub price: Option<i64>,
    #[validate(length(min = 1, max = 500))]
    pub address: Option<String>,
    #[validate(length(min = 1, max = 10))]
    pub pincode: Option<String>,
}
