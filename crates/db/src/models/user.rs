//! User entity model and DTOs.

use parkhub_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

/// A row from the `users` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct User {
    pub id: DbId,
    pub email: String,
    #[serde(skip_serializing)]
    pub password_hash: String,
    pub full_name: String,
    pub address: String,
    pub pincode: String,
    pub role: String,
    pub created_at: Timestamp,
}

/// Profile fields exposed to admin listings and search results.
#[derive(Debug, Clone, Serialize)]
pub struct UserProfile {
    pub id: DbId,
    pub email: String,
    pub full_name: String,
    pub address: String,
    pub pincode: String,
}

impl From<User> for UserProfile {
    fn from(user: User) -> Self {
        UserProfile {
            id: user.id,
            email: user.email,
            full_name: user.full_name,
            address: user.address,
            pincode: user.pincode,
        }
    }
}

/// DTO for inserting a new user. `password_hash` must already be an
/// Argon2id PHC string; plaintext never reaches this layer.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateUser {
    #[validate(email)]
    pub email: String,
    pub password_hash: String,
    #[validate(length(min = 1, max = 100))]
    pub full_name: String,
    #[validate(length(min = 1, max = 500))]
    pub address: String,
    #[validate(length(min = 1, max = 10))]
    pub pincode: String,
    /// Defaults to `user` if omitted.
    pub role: Option<String>,
}
