//! Car catalog
//!
//! Immutable reference data: each car carries the rate card its rentals are
//! priced against. A missing catalog entry is a normal, recoverable
//! condition handled per rental, not a crash.

use std::collections::HashMap;

use core_kernel::{CarId, Money};
use serde::{Deserialize, Serialize};

/// Rate card for one car
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Car {
    pub id: CarId,
    /// Price per rented day, minor units
    pub price_per_day: Money,
    /// Price per traveled kilometer, minor units
    pub price_per_km: Money,
}

impl Car {
    pub fn new(id: CarId, price_per_day: Money, price_per_km: Money) -> Self {
        Self {
            id,
            price_per_day,
            price_per_km,
        }
    }
}

/// Lookup of cars by identifier
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    cars: HashMap<CarId, Car>,
}

impl Catalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a catalog from a list of cars; later duplicates win
    pub fn from_cars(cars: impl IntoIterator<Item = Car>) -> Self {
        Self {
            cars: cars.into_iter().map(|car| (car.id, car)).collect(),
        }
    }

    pub fn insert(&mut self, car: Car) {
        self.cars.insert(car.id, car);
    }

    /// Resolves a car by identifier
    pub fn car(&self, id: CarId) -> Option<&Car> {
        self.cars.get(&id)
    }

    pub fn len(&self) -> usize {
        self.cars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cars.is_empty()
    }
}
