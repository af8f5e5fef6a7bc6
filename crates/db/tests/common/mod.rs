//! Shared seed helpers for the db-layer integration tests.

#![allow(dead_code)]

use parkhub_db::models::parking_lot::{CreateParkingLot, ParkingLot};
use parkhub_db::models::user::{CreateUser, User};
use parkhub_db::repositories::{LotRepo, UserRepo};
use parkhub_core::types::DbId;
use sqlx::PgPool;

/// Insert a regular user with placeholder profile fields.
pub async fn seed_user(pool: &PgPool, email: &str) -> User {
    UserRepo::create(
        pool,
        &CreateUser {
            email: email.to_string(),
            password_hash: "$argon2id$fake-hash-for-tests".to_string(),
            full_name: "Test User".to_string(),
            address: "1 Test Street".to_string(),
            pincode: "560001".to_string(),
            role: None,
        },
    )
    .await
    .expect("seed user")
}

/// Insert a lot with `total_spots` spots, all available.
pub async fn seed_lot(pool: &PgPool, location: &str, price: i64, total_spots: i32) -> ParkingLot {
    LotRepo::create_with_spots(
        pool,
        &CreateParkingLot {
            prime_location: location.to_string(),
            price,
            address: format!("{location} Road"),
            pincode: "560001".to_string(),
            total_spots,
        },
    )
    .await
    .expect("seed lot")
}

/// Assert that every lot's maintained counters match a live recount of its
/// spot rows. This is the core invariant of the spot ledger.
pub async fn assert_counters_consistent(pool: &PgPool) {
    let rows: Vec<(DbId, i32, i32, i64, i64)> = sqlx::query_as(
        "SELECT l.id, l.total_spots, l.available_spots,
                COUNT(s.id),
                COUNT(s.id) FILTER (WHERE s.status = 'available')
         FROM parking_lots l
         LEFT JOIN parking_spots s ON s.lot_id = l.id
         GROUP BY l.id",
    )
    .fetch_all(pool)
    .await
    .expect("recount spots");

    for (lot_id, total, available, live_total, live_available) in rows {
        assert_eq!(
            i64::from(total),
            live_total,
            "total_spots drifted for lot {lot_id}"
        );
        assert_eq!(
            i64::from(available),
            live_available,
            "available_spots drifted for lot {lot_id}"
        );
    }
}

/// Shift a reservation's parking time into the past, to exercise billing
/// for stays longer than the test itself.
pub async fn backdate_reservation(pool: &PgPool, reservation_id: DbId, minutes: i64) {
    sqlx::query(
        "UPDATE reservations
         SET parking_time = parking_time - make_interval(mins => $2::int)
         WHERE id = $1",
    )
    .bind(reservation_id)
    .bind(minutes)
    .execute(pool)
    .await
    .expect("backdate reservation");
}
