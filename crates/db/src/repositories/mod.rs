//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async CRUD methods
//! that accept `&PgPool` as the first argument. Multi-step transactional
//! logic lives in [`crate::engine`], not here.

pub mod lot_repo;
pub mod report_repo;
pub mod reservation_repo;
pub mod spot_repo;
pub mod user_repo;

pub use lot_repo::LotRepo;
pub use report_repo::ReportRepo;
pub use reservation_repo::ReservationRepo;
pub use spot_repo::SpotRepo;
pub use user_repo::UserRepo;
