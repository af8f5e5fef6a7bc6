//! The transactional reservation core.
//!
//! Three collaborators, each wrapping its work in a single transaction so
//! the counter invariants hold at every commit boundary:
//!
//! - [`ledger::SpotLedger`] -- per-spot occupancy and per-lot availability
//!   counters; the single source of truth for "is this spot free".
//! - [`reservation::ReservationEngine`] -- allocates a spot to a user and
//!   later finalizes the reservation with duration-based billing.
//! - [`guard::StructuralGuard`] -- validates lot/spot deletion against
//!   reservation history and current occupancy.

pub mod guard;
pub mod ledger;
pub mod reservation;

pub use guard::StructuralGuard;
pub use ledger::SpotLedger;
pub use reservation::ReservationEngine;
