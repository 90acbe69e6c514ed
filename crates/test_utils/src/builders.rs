//! Test Data Builders
//!
//! Provides builder patterns for constructing test data with sensible
//! defaults. Tests specify only the relevant fields and rely on defaults
//! for everything else.

use chrono::NaiveDate;
use core_kernel::{CarId, Money, OptionId, RentalId, RentalPeriod};
use domain_pricing::{BatchInput, Car, Rental, RentalOption};

use crate::fixtures::TemporalFixtures;

/// Builder for car rate cards
pub struct CarBuilder {
    id: CarId,
    price_per_day: Money,
    price_per_km: Money,
}

impl Default for CarBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl CarBuilder {
    /// Creates a builder with the standard test rate card (2000/day, 10/km)
    pub fn new() -> Self {
        Self {
            id: CarId::new(1),
            price_per_day: Money::from_minor(2000),
            price_per_km: Money::from_minor(10),
        }
    }

    pub fn with_id(mut self, id: i64) -> Self {
        self.id = CarId::new(id);
        self
    }

    pub fn with_price_per_day(mut self, minor: i64) -> Self {
        self.price_per_day = Money::from_minor(minor);
        self
    }

    pub fn with_price_per_km(mut self, minor: i64) -> Self {
        self.price_per_km = Money::from_minor(minor);
        self
    }

    pub fn build(self) -> Car {
        Car::new(self.id, self.price_per_day, self.price_per_km)
    }
}

/// Builder for rentals
pub struct RentalBuilder {
    id: RentalId,
    car_id: CarId,
    period: RentalPeriod,
    distance: i64,
}

impl Default for RentalBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl RentalBuilder {
    /// Creates a builder for a single-day, 100 km rental of car 1
    pub fn new() -> Self {
        Self {
            id: RentalId::new(1),
            car_id: CarId::new(1),
            period: TemporalFixtures::single_day(),
            distance: 100,
        }
    }

    pub fn with_id(mut self, id: i64) -> Self {
        self.id = RentalId::new(id);
        self
    }

    pub fn with_car_id(mut self, car_id: i64) -> Self {
        self.car_id = CarId::new(car_id);
        self
    }

    pub fn with_period(mut self, start: NaiveDate, end: NaiveDate) -> Self {
        self.period = RentalPeriod::new(start, end);
        self
    }

    /// Sets the duration in days, keeping the fixture start date
    pub fn with_duration_days(mut self, days: i64) -> Self {
        let start = self.period.start;
        self.period = RentalPeriod::new(start, start + chrono::Duration::days(days - 1));
        self
    }

    pub fn with_distance(mut self, distance: i64) -> Self {
        self.distance = distance;
        self
    }

    pub fn build(self) -> Rental {
        Rental::new(self.id, self.car_id, self.period, self.distance)
    }
}

/// Builder for paid options
pub struct OptionBuilder {
    id: OptionId,
    rental_id: RentalId,
    kind: String,
}

impl Default for OptionBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl OptionBuilder {
    /// Creates a builder for a gps option on rental 1
    pub fn new() -> Self {
        Self {
            id: OptionId::new(1),
            rental_id: RentalId::new(1),
            kind: "gps".to_string(),
        }
    }

    pub fn with_id(mut self, id: i64) -> Self {
        self.id = OptionId::new(id);
        self
    }

    pub fn with_rental_id(mut self, rental_id: i64) -> Self {
        self.rental_id = RentalId::new(rental_id);
        self
    }

    pub fn with_kind(mut self, kind: impl Into<String>) -> Self {
        self.kind = kind.into();
        self
    }

    pub fn build(self) -> RentalOption {
        RentalOption::new(self.id, self.rental_id, self.kind)
    }
}

/// Builder for whole input batches
#[derive(Default)]
pub struct BatchInputBuilder {
    cars: Vec<Car>,
    rentals: Vec<Rental>,
    options: Vec<RentalOption>,
}

impl BatchInputBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_car(mut self, car: Car) -> Self {
        self.cars.push(car);
        self
    }

    pub fn with_rental(mut self, rental: Rental) -> Self {
        self.rentals.push(rental);
        self
    }

    pub fn with_option(mut self, option: RentalOption) -> Self {
        self.options.push(option);
        self
    }

    pub fn build(self) -> BatchInput {
        BatchInput {
            cars: self.cars,
            rentals: self.rentals,
            options: self.options,
        }
    }
}
