//! Batch orchestration
//!
//! One batch run wires the catalog, rentals, and options together and
//! applies the engine to every rental. Per-rental failures degrade that
//! rental to zero-value defaults and never abort the batch.

use std::collections::HashMap;

use core_kernel::{OptionId, RentalId};
use serde::Serialize;
use tracing::{debug, warn};

use crate::catalog::{Car, Catalog};
use crate::engine::{PricingEngine, Quote};
use crate::error::PricingError;
use crate::options::RentalOption;
use crate::rental::Rental;

/// One parsed input batch
#[derive(Debug, Clone, Default)]
pub struct BatchInput {
    pub cars: Vec<Car>,
    pub rentals: Vec<Rental>,
    pub options: Vec<RentalOption>,
}

/// An option that referenced a rental absent from the batch
///
/// Not an error: recorded and reported back to the input provider.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct MissingRental {
    pub rental_id: RentalId,
    pub option_id: OptionId,
}

/// One rental with its computed cost breakdown
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PricedRental {
    pub id: RentalId,
    /// Attached option kinds, in attachment order
    pub options: Vec<String>,
    pub quote: Quote,
}

/// The outcome of one batch run
///
/// Degraded rentals keep zero-value defaults in `rentals`; the reason is
/// available in `failures` so callers are not limited to spotting zero
/// amounts.
#[derive(Debug, Clone, Default)]
pub struct BatchOutput {
    /// Every input rental, in input order
    pub rentals: Vec<PricedRental>,
    /// Options whose rental was not in the batch (paid-options rule set)
    pub missing_rentals: Vec<MissingRental>,
    /// Per-rental failures absorbed during the run
    pub failures: Vec<PricingError>,
}

impl BatchOutput {
    /// True if every rental was priced without degradation
    pub fn is_fully_priced(&self) -> bool {
        self.failures.is_empty()
    }
}

/// Runs the engine over a whole batch
///
/// Options are attached to their rentals first (when the rule set prices
/// them); unknown rental references go to the `missing_rentals` side list.
/// Each rental is then quoted against its catalog car. A missing car, a
/// negative price component, or an unknown option kind degrades only that
/// rental.
pub fn process_batch(engine: &PricingEngine, input: BatchInput) -> BatchOutput {
    let catalog = Catalog::from_cars(input.cars);
    let mut rentals = input.rentals;
    let mut missing_rentals = Vec::new();
    let mut failures = Vec::new();

    if engine.capabilities().paid_options {
        let index: HashMap<RentalId, usize> = rentals
            .iter()
            .enumerate()
            .map(|(position, rental)| (rental.id, position))
            .collect();

        for option in input.options {
            match index.get(&option.rental_id) {
                Some(&position) => rentals[position].add_option(option),
                None => {
                    warn!(
                        rental_id = %option.rental_id,
                        option_id = %option.id,
                        "missing rental for option"
                    );
                    missing_rentals.push(MissingRental {
                        rental_id: option.rental_id,
                        option_id: option.id,
                    });
                }
            }
        }
    }

    let mut priced = Vec::with_capacity(rentals.len());
    for rental in &rentals {
        let quoted = match catalog.car(rental.car_id) {
            Some(car) => engine.quote(rental, car),
            None => Err(PricingError::MissingCar {
                car_id: rental.car_id,
                rental_id: rental.id,
            }),
        };

        let quote = match quoted {
            Ok(quote) => quote,
            Err(error) => {
                warn!(rental_id = %rental.id, %error, "rental degraded to zero defaults");
                failures.push(error);
                Quote::zeroed(engine.capabilities())
            }
        };

        priced.push(PricedRental {
            id: rental.id,
            options: rental.option_kinds(),
            quote,
        });
    }

    debug!(
        rentals = priced.len(),
        degraded = failures.len(),
        missing_rentals = missing_rentals.len(),
        "batch processed"
    );

    BatchOutput {
        rentals: priced,
        missing_rentals,
        failures,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use core_kernel::{CarId, Money, RentalPeriod};
    use crate::catalog::Car;
    use crate::config::PricingConfig;
    use crate::engine::RuleSet;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn single_day_rental(id: i64, car_id: i64) -> Rental {
        Rental::new(
            RentalId::new(id),
            CarId::new(car_id),
            RentalPeriod::new(date(2017, 12, 8), date(2017, 12, 8)),
            100,
        )
    }

    fn input() -> BatchInput {
        BatchInput {
            cars: vec![Car::new(
                CarId::new(1),
                Money::from_minor(2000),
                Money::from_minor(10),
            )],
            rentals: vec![single_day_rental(1, 1), single_day_rental(2, 7)],
            options: Vec::new(),
        }
    }

    #[test]
    fn test_missing_car_degrades_only_that_rental() {
        let engine = PricingEngine::new(RuleSet::BaseRate, PricingConfig::default());
        let output = process_batch(&engine, input());

        assert_eq!(output.rentals.len(), 2);
        assert_eq!(output.rentals[0].quote.total_price, Money::from_minor(3000));
        assert_eq!(output.rentals[1].quote.total_price, Money::zero());
        assert_eq!(
            output.failures,
            vec![PricingError::MissingCar {
                car_id: CarId::new(7),
                rental_id: RentalId::new(2),
            }]
        );
        assert!(!output.is_fully_priced());
    }

    #[test]
    fn test_orphan_option_goes_to_missing_rentals() {
        let mut batch = input();
        batch.options = vec![RentalOption::new(
            core_kernel::OptionId::new(11),
            RentalId::new(99),
            "gps",
        )];

        let engine = PricingEngine::new(RuleSet::PaidOptions, PricingConfig::default());
        let output = process_batch(&engine, batch);

        assert_eq!(
            output.missing_rentals,
            vec![MissingRental {
                rental_id: RentalId::new(99),
                option_id: core_kernel::OptionId::new(11),
            }]
        );
        // The orphan option is no failure: rental 1 still prices normally.
        assert_eq!(output.rentals[0].quote.total_price, Money::from_minor(3000));
    }

    #[test]
    fn test_options_are_ignored_below_paid_options() {
        let mut batch = input();
        batch.options = vec![RentalOption::new(
            core_kernel::OptionId::new(11),
            RentalId::new(99),
            "gps",
        )];

        let engine = PricingEngine::new(RuleSet::OwnerLedger, PricingConfig::default());
        let output = process_batch(&engine, batch);

        assert!(output.missing_rentals.is_empty());
        assert!(output.rentals.iter().all(|rental| rental.options.is_empty()));
    }

    #[test]
    fn test_output_preserves_input_order() {
        let engine = PricingEngine::new(RuleSet::BaseRate, PricingConfig::default());
        let output = process_batch(&engine, input());

        let ids: Vec<i64> = output.rentals.iter().map(|r| r.id.value()).collect();
        assert_eq!(ids, vec![1, 2]);
    }
}
