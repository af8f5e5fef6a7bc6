//! Time-based billing for released reservations.
//!
//! Pricing is per started hour: any partial hour bills as a full hour. A stay
//! of exactly zero seconds bills zero hours (`ceil(0) = 0`); if product ever
//! wants a one-hour minimum, `billed_hours` is the place to change.

use crate::types::Timestamp;

const SECS_PER_HOUR: i64 = 3600;

/// Number of billable hours between arrival and departure.
///
/// Rounds the elapsed duration up to whole hours. Negative durations (clock
/// skew) clamp to zero rather than producing a negative bill.
pub fn billed_hours(parking_time: Timestamp, leaving_time: Timestamp) -> i64 {
    let elapsed_secs = (leaving_time - parking_time).num_seconds();
    if elapsed_secs <= 0 {
        return 0;
    }
    // Ceiling division; elapsed_secs is positive here so this cannot wrap.
    (elapsed_secs + SECS_PER_HOUR - 1) / SECS_PER_HOUR
}

/// Total cost for a stay at the given hourly price.
pub fn reservation_cost(parking_time: Timestamp, leaving_time: Timestamp, price_per_hour: i64) -> i64 {
    billed_hours(parking_time, leaving_time) * price_per_hour
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, Utc};

    #[test]
    fn test_partial_hour_bills_full_hour() {
        let start = Utc::now();
        let end = start + Duration::minutes(61);
        assert_eq!(billed_hours(start, end), 2);
        assert_eq!(reservation_cost(start, end, 10), 20);
    }

    #[test]
    fn test_exact_hour_bills_one_hour() {
        let start = Utc::now();
        let end = start + Duration::minutes(60);
        assert_eq!(billed_hours(start, end), 1);
        assert_eq!(reservation_cost(start, end, 10), 10);
    }

    #[test]
    fn test_one_second_bills_one_hour() {
        let start = Utc::now();
        let end = start + Duration::seconds(1);
        assert_eq!(billed_hours(start, end), 1);
    }

    #[test]
    fn test_zero_duration_is_free() {
        // ceil(0) = 0: an instant release costs nothing.
        let start = Utc::now();
        assert_eq!(billed_hours(start, start), 0);
        assert_eq!(reservation_cost(start, start, 10), 0);
    }

    #[test]
    fn test_negative_duration_clamps_to_zero() {
        let start = Utc::now();
        let end = start - Duration::minutes(5);
        assert_eq!(billed_hours(start, end), 0);
    }

    #[test]
    fn test_hour_boundaries_round_up() {
        let start = Utc::now();
        assert_eq!(billed_hours(start, start + Duration::seconds(3599)), 1);
        assert_eq!(billed_hours(start, start + Duration::seconds(3600)), 1);
        assert_eq!(billed_hours(start, start + Duration::seconds(3601)), 2);
    }

    #[test]
    fn test_long_stay() {
        let start = Utc::now();
        let end = start + Duration::hours(24) + Duration::minutes(1);
        assert_eq!(billed_hours(start, end), 25);
    }
}
