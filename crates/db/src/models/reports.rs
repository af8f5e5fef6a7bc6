//! Read-only aggregation DTOs for the reporting queries.

use parkhub_core::types::{DbId, Timestamp};
use serde::Serialize;
use sqlx::FromRow;

/// One lot with live availability figures.
///
/// `available_spots` here is recomputed from spot rows, not read from the
/// maintained counter -- the listing doubles as a consistency cross-check.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct LotAvailability {
    pub id: DbId,
    pub prime_location: String,
    pub price: i64,
    pub address: String,
    pub pincode: String,
    pub total_spots: i32,
    pub available_spots: i64,
    pub occupied_spots: i64,
}

/// Per-user reservation statistics.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct UserSummary {
    pub active_reservations: i64,
    pub checked_out_reservations: i64,
    /// Sum of `cost` over released reservations.
    pub total_spent: i64,
}

/// Reserved-spot count for one lot, part of [`AdminSummary`].
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct LotShare {
    pub lot_name: String,
    pub reserved_spots: i64,
}

/// Global occupancy and revenue figures for the admin dashboard.
#[derive(Debug, Clone, Serialize)]
pub struct AdminSummary {
    pub occupied: i64,
    pub available: i64,
    /// Sum of `cost` over all released reservations, regardless of date.
    pub total_revenue: i64,
    pub lot_shares: Vec<LotShare>,
}

/// Reservation info attached to an occupied spot in [`SpotDetail`].
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct SpotReservation {
    pub reservation_id: DbId,
    pub user_id: DbId,
    pub parking_time: Timestamp,
    pub vehicle_no: String,
}

/// One spot resolved by its 1-indexed position within a lot.
#[derive(Debug, Clone, Serialize)]
pub struct SpotDetail {
    pub spot_id: DbId,
    pub lot_id: DbId,
    pub status: String,
    /// Most recent reservation by `parking_time`, present when occupied.
    pub reservation: Option<SpotReservation>,
}

/// One row of a user's reservation history, joined with spot and lot info.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct UserReservation {
    pub reservation_id: DbId,
    pub spot_id: DbId,
    pub prime_location: String,
    pub price: i64,
    pub parking_time: Timestamp,
    pub leaving_time: Option<Timestamp>,
    pub cost: Option<i64>,
    pub vehicle_no: String,
}
