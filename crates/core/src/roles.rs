//! Well-known role and spot-status constants.
//!
//! These must match the CHECK constraints in the `users` and
//! `parking_spots` migrations.

pub const ROLE_ADMIN: &str = "admin";
pub const ROLE_USER: &str = "user";

pub const SPOT_AVAILABLE: &str = "available";
pub const SPOT_OCCUPIED: &str = "occupied";
