pub mod parking_lot;
pub mod parking_spot;
pub mod reports;
pub mod reservation;
pub mod user;
