use crate::types::DbId;

/// Domain-level errors shared across the workspace.
///
/// Every variant is an expected, recoverable outcome of a core operation.
/// The API layer maps these to HTTP statuses; none of them represents an
/// infrastructure failure (those surface as storage errors in `parkhub-db`).
#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("Entity not found: {entity} with id {id}")]
    NotFound { entity: &'static str, id: DbId },

    /// No available spot left in the requested lot.
    #[error("No available spots in lot {lot_id}")]
    NoCapacity { lot_id: DbId },

    /// Second release attempt on an already-released reservation.
    #[error("Reservation {id} is already released")]
    AlreadyReleased { id: DbId },

    /// Spot cannot be deleted while occupied.
    #[error("Spot {id} is currently occupied")]
    SpotOccupied { id: DbId },

    /// Lot or spot cannot be deleted because reservation records reference it.
    #[error("{entity} {id} has reservation history")]
    HasReservationHistory { entity: &'static str, id: DbId },

    /// Lot cannot be deleted while any of its spots is occupied.
    #[error("Lot {id} has occupied spots")]
    HasOccupiedSpots { id: DbId },

    #[error("Validation failed: {0}")]
    Validation(String),

    /// Lost a concurrent allocation race; the caller may retry.
    #[error("Conflict: {0}")]
    Conflict(String),

    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    #[error("Forbidden: {0}")]
    Forbidden(String),

    #[error("Internal error: {0}")]
    Internal(String),
}
