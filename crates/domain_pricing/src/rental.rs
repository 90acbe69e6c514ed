//! The rental aggregate

use core_kernel::{CarId, RentalId, RentalPeriod};
use serde::{Deserialize, Serialize};

use crate::options::RentalOption;

/// One booking of a car by a driver for a date range
///
/// Constructed from one input record, optionally enriched with paid
/// options, then priced. Options are attached before pricing and never
/// change afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rental {
    pub id: RentalId,
    pub car_id: CarId,
    pub period: RentalPeriod,
    /// Distance traveled, kilometers
    pub distance: i64,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    options: Vec<RentalOption>,
}

impl Rental {
    pub fn new(id: RentalId, car_id: CarId, period: RentalPeriod, distance: i64) -> Self {
        Self {
            id,
            car_id,
            period,
            distance,
            options: Vec::new(),
        }
    }

    /// Rented duration in days, counting both boundary days
    pub fn duration(&self) -> i64 {
        self.period.days()
    }

    /// Attaches a paid option to this rental
    pub fn add_option(&mut self, option: RentalOption) {
        self.options.push(option);
    }

    /// The attached options, in attachment order
    pub fn options(&self) -> &[RentalOption] {
        &self.options
    }

    /// The attached option kinds, in attachment order
    pub fn option_kinds(&self) -> Vec<String> {
        self.options.iter().map(|option| option.kind.clone()).collect()
    }
}
