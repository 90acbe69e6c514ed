//! Duration discount schedule
//!
//! Long rentals are cheaper per day. The schedule is a set of marginal
//! tiers: every rented day from a tier's first day onward contributes that
//! tier's rate in "equivalent full-price days", until a later tier takes
//! over. The sum over all rented days is the price multiplier applied to
//! the per-day rate.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

/// One marginal tier of the discount schedule
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiscountTier {
    /// First rented day (1-based) this tier applies to
    pub from_day: i64,
    /// Equivalent full-price days contributed by each day in the tier
    pub rate: Decimal,
}

impl DiscountTier {
    pub fn new(from_day: i64, rate: Decimal) -> Self {
        Self { from_day, rate }
    }
}

/// A tiered duration discount schedule
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DiscountSchedule {
    tiers: Vec<DiscountTier>,
}

impl DiscountSchedule {
    /// Creates a schedule from marginal tiers, ordered by first day
    ///
    /// An empty tier list behaves like [`DiscountSchedule::full_price`].
    pub fn new(mut tiers: Vec<DiscountTier>) -> Self {
        tiers.sort_by_key(|tier| tier.from_day);
        Self { tiers }
    }

    /// The standard schedule: day 1 full price, days 2-4 at 0.9, days 5-10
    /// at 0.7, day 11 onward at 0.5
    pub fn standard() -> Self {
        Self::new(vec![
            DiscountTier::new(1, dec!(1.0)),
            DiscountTier::new(2, dec!(0.9)),
            DiscountTier::new(5, dec!(0.7)),
            DiscountTier::new(11, dec!(0.5)),
        ])
    }

    /// A no-discount schedule: every day at full price, so the multiplier
    /// equals the duration
    pub fn full_price() -> Self {
        Self::new(vec![DiscountTier::new(1, dec!(1.0))])
    }

    /// Computes the price multiplier for a rental duration in days
    ///
    /// Valid for duration >= 1; shorter durations yield zero and are
    /// rejected by the pricing engine before this is reached.
    pub fn multiplier(&self, duration: i64) -> Decimal {
        if duration <= 0 {
            return Decimal::ZERO;
        }

        let mut total = if self.tiers.is_empty() {
            Decimal::from(duration)
        } else {
            Decimal::ZERO
        };

        for (i, tier) in self.tiers.iter().enumerate() {
            let first = tier.from_day.max(1);
            let last = match self.tiers.get(i + 1) {
                Some(next) => duration.min(next.from_day - 1),
                None => duration,
            };
            if last >= first {
                total += tier.rate * Decimal::from(last - first + 1);
            }
        }

        total
    }
}

impl Default for DiscountSchedule {
    fn default() -> Self {
        Self::standard()
    }
}
