//! Integration tests for the reservation engine: allocation, release,
//! billing, and the capacity/ownership error paths.

mod common;

use assert_matches::assert_matches;
use common::{assert_counters_consistent, backdate_reservation, seed_lot, seed_user};
use parkhub_core::error::CoreError;
use parkhub_db::engine::ReservationEngine;
use parkhub_db::error::DbError;
use parkhub_db::repositories::{LotRepo, SpotRepo};
use sqlx::PgPool;

#[sqlx::test]
async fn reserve_claims_lowest_id_available_spot(pool: PgPool) {
    let user = seed_user(&pool, "driver@example.com").await;
    let lot = seed_lot(&pool, "Central", 10, 3).await;

    let spots = SpotRepo::list_by_lot(&pool, lot.id).await.unwrap();
    let reservation = ReservationEngine::reserve(&pool, user.id, lot.id, "KA01AB1234")
        .await
        .unwrap();

    assert_eq!(reservation.spot_id, spots[0].id, "lowest id wins");
    assert!(reservation.is_active());
    assert_eq!(reservation.cost, None);

    let spot = SpotRepo::find_by_id(&pool, reservation.spot_id)
        .await
        .unwrap()
        .unwrap();
    assert!(spot.is_occupied());

    let lot = LotRepo::find_by_id(&pool, lot.id).await.unwrap().unwrap();
    assert_eq!(lot.available_spots, 2);
    assert_counters_consistent(&pool).await;
}

#[sqlx::test]
async fn reserve_unknown_lot_is_not_found(pool: PgPool) {
    let user = seed_user(&pool, "driver@example.com").await;

    let err = ReservationEngine::reserve(&pool, user.id, 9999, "KA01AB1234")
        .await
        .unwrap_err();
    assert_matches!(
        err,
        DbError::Domain(CoreError::NotFound {
            entity: "ParkingLot",
            id: 9999
        })
    );
}

#[sqlx::test]
async fn second_reserve_on_full_lot_is_no_capacity(pool: PgPool) {
    let user = seed_user(&pool, "driver@example.com").await;
    let lot = seed_lot(&pool, "Tiny", 10, 1).await;

    ReservationEngine::reserve(&pool, user.id, lot.id, "KA01AB1234")
        .await
        .unwrap();
    let err = ReservationEngine::reserve(&pool, user.id, lot.id, "KA02CD5678")
        .await
        .unwrap_err();

    assert_matches!(err, DbError::Domain(CoreError::NoCapacity { .. }));
    assert_counters_consistent(&pool).await;
}

#[sqlx::test]
async fn release_bills_partial_hours_as_full(pool: PgPool) {
    let user = seed_user(&pool, "driver@example.com").await;
    let lot = seed_lot(&pool, "Central", 10, 1).await;

    let reservation = ReservationEngine::reserve(&pool, user.id, lot.id, "KA01AB1234")
        .await
        .unwrap();
    backdate_reservation(&pool, reservation.id, 61).await;

    let released = ReservationEngine::release(&pool, reservation.id, user.id)
        .await
        .unwrap();

    // 61 minutes elapsed -> 2 billable hours at price 10.
    assert_eq!(released.cost, Some(20));
    assert!(released.leaving_time.is_some());

    let spot = SpotRepo::find_by_id(&pool, reservation.spot_id)
        .await
        .unwrap()
        .unwrap();
    assert!(!spot.is_occupied());
    assert_counters_consistent(&pool).await;
}

#[sqlx::test]
async fn immediate_release_is_free(pool: PgPool) {
    let user = seed_user(&pool, "driver@example.com").await;
    let lot = seed_lot(&pool, "Central", 10, 1).await;

    let reservation = ReservationEngine::reserve(&pool, user.id, lot.id, "KA01AB1234")
        .await
        .unwrap();
    let released = ReservationEngine::release(&pool, reservation.id, user.id)
        .await
        .unwrap();

    // Sub-second stay rounds up to one hour; only an exactly-zero elapsed
    // duration would be free, which wall clocks never produce here.
    assert_eq!(released.cost, Some(10));
}

#[sqlx::test]
async fn double_release_is_rejected_and_cost_unchanged(pool: PgPool) {
    let user = seed_user(&pool, "driver@example.com").await;
    let lot = seed_lot(&pool, "Central", 10, 1).await;

    let reservation = ReservationEngine::reserve(&pool, user.id, lot.id, "KA01AB1234")
        .await
        .unwrap();
    backdate_reservation(&pool, reservation.id, 30).await;

    let released = ReservationEngine::release(&pool, reservation.id, user.id)
        .await
        .unwrap();
    let err = ReservationEngine::release(&pool, reservation.id, user.id)
        .await
        .unwrap_err();

    assert_matches!(err, DbError::Domain(CoreError::AlreadyReleased { .. }));

    let unchanged = parkhub_db::repositories::ReservationRepo::find_by_id(&pool, reservation.id)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(unchanged.cost, released.cost);
    assert_eq!(unchanged.leaving_time, released.leaving_time);
    assert_counters_consistent(&pool).await;
}

#[sqlx::test]
async fn release_scoped_to_owner_hides_foreign_reservations(pool: PgPool) {
    let owner = seed_user(&pool, "owner@example.com").await;
    let other = seed_user(&pool, "other@example.com").await;
    let lot = seed_lot(&pool, "Central", 10, 1).await;

    let reservation = ReservationEngine::reserve(&pool, owner.id, lot.id, "KA01AB1234")
        .await
        .unwrap();

    // Someone else's reservation id reports plain NotFound, indistinguishable
    // from an id that does not exist.
    let err = ReservationEngine::release(&pool, reservation.id, other.id)
        .await
        .unwrap_err();
    assert_matches!(
        err,
        DbError::Domain(CoreError::NotFound {
            entity: "Reservation",
            ..
        })
    );

    // The spot stays occupied.
    let spot = SpotRepo::find_by_id(&pool, reservation.spot_id)
        .await
        .unwrap()
        .unwrap();
    assert!(spot.is_occupied());
}

#[sqlx::test]
async fn released_spot_is_reusable(pool: PgPool) {
    let user = seed_user(&pool, "driver@example.com").await;
    let lot = seed_lot(&pool, "Tiny", 10, 1).await;

    let first = ReservationEngine::reserve(&pool, user.id, lot.id, "KA01AB1234")
        .await
        .unwrap();
    ReservationEngine::release(&pool, first.id, user.id)
        .await
        .unwrap();

    let second = ReservationEngine::reserve(&pool, user.id, lot.id, "KA01AB1234")
        .await
        .unwrap();
    assert_eq!(second.spot_id, first.spot_id);
    assert_ne!(second.id, first.id);
    assert_counters_consistent(&pool).await;
}
