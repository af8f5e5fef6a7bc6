//! Request handlers.
//!
//! Each submodule covers one resource. Handlers delegate to the
//! repositories and the reservation engine in `parkhub_db` and map errors
//! via [`crate::error::AppError`].

pub mod admin;
pub mod auth;
pub mod lot;
pub mod reservation;
pub mod spot;
