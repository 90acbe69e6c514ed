//! Pre-built Test Fixtures
//!
//! Ready-to-use, deterministic test data for the rental pricing system.

use chrono::NaiveDate;
use core_kernel::{CarId, Money, RentalPeriod};
use domain_pricing::Car;

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

/// Fixture for car rate cards
pub struct CarFixtures;

impl CarFixtures {
    /// The standard compact car: 2000/day, 10/km
    pub fn compact() -> Car {
        Car::new(
            CarId::new(1),
            Money::from_minor(2000),
            Money::from_minor(10),
        )
    }

    /// A pricier sedan: 3000/day, 15/km
    pub fn sedan() -> Car {
        Car::new(
            CarId::new(2),
            Money::from_minor(3000),
            Money::from_minor(15),
        )
    }

    /// A rate card with a negative per-day price, for failure scenarios
    pub fn broken_rate_card() -> Car {
        Car::new(
            CarId::new(3),
            Money::from_minor(-2000),
            Money::from_minor(10),
        )
    }
}

/// Fixture for rental periods
pub struct TemporalFixtures;

impl TemporalFixtures {
    /// A one-day booking (no discount tier reached)
    pub fn single_day() -> RentalPeriod {
        RentalPeriod::new(date(2017, 12, 8), date(2017, 12, 8))
    }

    /// A three-day booking (second discount tier)
    pub fn three_days() -> RentalPeriod {
        RentalPeriod::new(date(2015, 7, 3), date(2015, 7, 5))
    }

    /// A twelve-day booking (all discount tiers)
    pub fn twelve_days() -> RentalPeriod {
        RentalPeriod::new(date(2015, 7, 3), date(2015, 7, 14))
    }

    /// A reversed booking whose day count is negative
    pub fn reversed() -> RentalPeriod {
        RentalPeriod::new(date(2017, 12, 10), date(2017, 12, 8))
    }
}
