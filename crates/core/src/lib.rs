//! Pure domain types and logic for the ParkHub parking-reservation backend.
//!
//! This crate has no database or async dependencies. It defines the shared
//! ID/timestamp aliases, the domain error enum, role and spot-status
//! constants, and the billing math applied when a reservation is released.

pub mod billing;
pub mod error;
pub mod roles;
pub mod types;
