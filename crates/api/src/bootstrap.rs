//! Startup seeding: ensure an admin account exists.
//!
//! Registration only ever creates regular users, so the first admin has to
//! come from the environment: `ADMIN_EMAIL` + `ADMIN_PASSWORD`. Seeding is
//! a no-op when an admin already exists or the variables are unset.

use parkhub_core::roles::ROLE_ADMIN;
use parkhub_db::models::user::CreateUser;
use parkhub_db::repositories::UserRepo;
use parkhub_db::DbPool;

use crate::auth::password::hash_password;

pub async fn seed_admin(pool: &DbPool) -> Result<(), sqlx::Error> {
    if UserRepo::admin_exists(pool).await? {
        return Ok(());
    }

    let (Ok(email), Ok(password)) = (
        std::env::var("ADMIN_EMAIL"),
        std::env::var("ADMIN_PASSWORD"),
    ) else {
        tracing::warn!("No admin account exists and ADMIN_EMAIL/ADMIN_PASSWORD are not set");
        return Ok(());
    };

    let password_hash = hash_password(&password).expect("admin password hashing failed");

    let admin = UserRepo::create(
        pool,
        &CreateUser {
            email,
            password_hash,
            full_name: "Administrator".to_string(),
            address: "-".to_string(),
            pincode: "-".to_string(),
            role: Some(ROLE_ADMIN.to_string()),
        },
    )
    .await?;

    tracing::info!(user_id = admin.id, "seeded admin account");
    Ok(())
}
