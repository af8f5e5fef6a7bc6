//! HTTP-level integration tests for the admin dashboard endpoints:
//! registered-user listing/search and the global summary.

mod common;

use axum::http::StatusCode;
use common::{
    admin_token, body_json, create_lot_via_api, create_test_user, get_auth, post_auth,
    post_json_auth, user_with_token,
};
use parkhub_api::auth::password::hash_password;
use parkhub_db::models::user::CreateUser;
use parkhub_db::repositories::UserRepo;
use sqlx::PgPool;

#[sqlx::test(migrations = "../db/migrations")]
async fn list_users_excludes_admins_and_hashes(pool: PgPool) {
    let token = admin_token(&pool).await;
    create_test_user(&pool, "one@test.com", None).await;
    create_test_user(&pool, "two@test.com", None).await;

    let app = common::build_test_app(pool);
    let response = get_auth(app, "/api/v1/admin/users", &token).await;

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    let users = json["data"].as_array().expect("data array");
    assert_eq!(users.len(), 2, "the admin itself is not listed");
    for user in users {
        assert!(user["email"].is_string());
        assert!(
            user.get("password_hash").is_none(),
            "password hashes must never leave the API"
        );
    }
}

#[sqlx::test(migrations = "../db/migrations")]
async fn search_users_matches_full_name(pool: PgPool) {
    let token = admin_token(&pool).await;
    let hash = hash_password("a-long-password").expect("hash");
    UserRepo::create(
        &pool,
        &CreateUser {
            email: "priya@test.com".to_string(),
            password_hash: hash,
            full_name: "Priya Sharma".to_string(),
            address: "5 Lake Road".to_string(),
            pincode: "560034".to_string(),
            role: None,
        },
    )
    .await
    .expect("seed user");
    create_test_user(&pool, "other@test.com", None).await;

    let app = common::build_test_app(pool);
    let response = get_auth(app, "/api/v1/admin/users/search?q=sharma", &token).await;

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    let hits = json["data"].as_array().unwrap();
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0]["full_name"], "Priya Sharma");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn summary_reports_occupancy_and_revenue(pool: PgPool) {
    let admin = admin_token(&pool).await;
    let lot_a = create_lot_via_api(&pool, &admin, "North", 10, 2).await;
    create_lot_via_api(&pool, &admin, "South", 20, 2).await;
    let (_user, token) = user_with_token(&pool, "driver@test.com").await;

    // One released reservation (revenue) and one still active (occupancy).
    let body = serde_json::json!({ "lot_id": lot_a, "vehicle_no": "KA01AB1234" });
    let app = common::build_test_app(pool.clone());
    let response = post_json_auth(app, "/api/v1/reservations", body, &token).await;
    assert_eq!(response.status(), StatusCode::CREATED);
    let id = body_json(response).await["id"].as_i64().unwrap();

    let app = common::build_test_app(pool.clone());
    let response = post_auth(app, &format!("/api/v1/reservations/{id}/release"), &token).await;
    assert_eq!(response.status(), StatusCode::OK);

    let body = serde_json::json!({ "lot_id": lot_a, "vehicle_no": "KA01AB1234" });
    let app = common::build_test_app(pool.clone());
    let response = post_json_auth(app, "/api/v1/reservations", body, &token).await;
    assert_eq!(response.status(), StatusCode::CREATED);

    let app = common::build_test_app(pool);
    let response = get_auth(app, "/api/v1/admin/summary", &admin).await;

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["data"]["occupied"], 1);
    assert_eq!(json["data"]["available"], 3);
    // Sub-second stay still bills one full hour at price 10.
    assert_eq!(json["data"]["total_revenue"], 10);

    let shares = json["data"]["lot_shares"].as_array().unwrap();
    assert_eq!(shares.len(), 2);
    assert_eq!(shares[0]["lot_name"], "North");
    assert_eq!(shares[0]["reserved_spots"], 1);
    assert_eq!(shares[1]["reserved_spots"], 0);
}
