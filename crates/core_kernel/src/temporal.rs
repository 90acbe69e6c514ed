//! Rental period handling
//!
//! Rental bookings are date-ranged with no time-of-day component. Both
//! boundary days count as rented, so a same-day booking lasts one day.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// The date range of one rental booking
///
/// Construction never fails: a period whose end precedes its start is
/// representable and yields a non-positive day count, which the pricing
/// engine rejects as an invalid priced quantity. Validation belongs to
/// pricing, not to parsing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RentalPeriod {
    /// First rented day (inclusive)
    pub start: NaiveDate,
    /// Last rented day (inclusive)
    pub end: NaiveDate,
}

impl RentalPeriod {
    pub fn new(start: NaiveDate, end: NaiveDate) -> Self {
        Self { start, end }
    }

    /// Returns the rented duration in whole days, counting both boundaries
    ///
    /// Same start and end date yields 1. The result is not clamped and is
    /// zero or negative when the end precedes the start.
    pub fn days(&self) -> i64 {
        (self.end - self.start).num_days() + 1
    }

    /// Returns true if the given date falls within the period
    pub fn contains(&self, date: NaiveDate) -> bool {
        date >= self.start && date <= self.end
    }
}
