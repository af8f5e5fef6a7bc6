//! Repository for the `users` table.

use parkhub_core::roles::{ROLE_ADMIN, ROLE_USER};
use parkhub_core::types::DbId;
use sqlx::PgPool;

use crate::models::user::{CreateUser, User};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str =
    "id, email, password_hash, full_name, address, pincode, role, created_at";

/// Provides CRUD operations for users.
pub struct UserRepo;

impl UserRepo {
    /// Insert a new user, returning the created row.
    ///
    /// If `role` is `None`, defaults to `'user'`.
    pub async fn create(pool: &PgPool, input: &CreateUser) -> Result<User, sqlx::Error> {
        let query = format!(
            "INSERT INTO users (email, password_hash, full_name, address, pincode, role)
             VALUES ($1, $2, $3, $4, $5, COALESCE($6, 'user'))
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, User>(&query)
            .bind(&input.email)
            .bind(&input.password_hash)
            .bind(&input.full_name)
            .bind(&input.address)
            .bind(&input.pincode)
            .bind(&input.role)
            .fetch_one(pool)
            .await
    }

    /// Find a user by internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<User>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM users WHERE id = $1");
        sqlx::query_as::<_, User>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Find a user by email (case-sensitive).
    pub async fn find_by_email(pool: &PgPool, email: &str) -> Result<Option<User>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM users WHERE email = $1");
        sqlx::query_as::<_, User>(&query)
            .bind(email)
            .fetch_optional(pool)
            .await
    }

    /// List all registered users (role `user`), ordered by id.
    pub async fn list_registered(pool: &PgPool) -> Result<Vec<User>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM users WHERE role = $1 ORDER BY id");
        sqlx::query_as::<_, User>(&query)
            .bind(ROLE_USER)
            .fetch_all(pool)
            .await
    }

    /// Case-insensitive substring search over registered users' full names.
    /// Admin accounts are never returned.
    pub async fn search_by_name(pool: &PgPool, term: &str) -> Result<Vec<User>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM users
             WHERE role = $1 AND full_name ILIKE '%' || $2 || '%'
             ORDER BY id"
        );
        sqlx::query_as::<_, User>(&query)
            .bind(ROLE_USER)
            .bind(term)
            .fetch_all(pool)
            .await
    }

    /// True if at least one admin account exists. Used by startup seeding.
    pub async fn admin_exists(pool: &PgPool) -> Result<bool, sqlx::Error> {
        let (exists,): (bool,) =
            sqlx::query_as("SELECT EXISTS(SELECT 1 FROM users WHERE role = $1)")
                .bind(ROLE_ADMIN)
                .fetch_one(pool)
                .await?;
        Ok(exists)
    }
}
