//! Paid rental options and their price resolution
//!
//! An option is a paid add-on (gps, baby seat, ...) attached to exactly one
//! rental. Each option kind maps to a per-day fee split among actors; the
//! split is sparse, with absent actors defaulting to zero.

use std::collections::HashMap;

use core_kernel::{Money, MoneyError, OptionId, RentalId};
use serde::{Deserialize, Serialize};

use crate::error::PricingError;

/// A paid add-on attached to one rental
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RentalOption {
    pub id: OptionId,
    pub rental_id: RentalId,
    /// Key into the configured option fee table
    #[serde(rename = "type")]
    pub kind: String,
}

impl RentalOption {
    pub fn new(id: OptionId, rental_id: RentalId, kind: impl Into<String>) -> Self {
        Self {
            id,
            rental_id,
            kind: kind.into(),
        }
    }
}

/// Per-day fee split of one option kind among actors
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OptionFeeSplit {
    pub owner_fee: Money,
    pub drivy_fee: Money,
}

impl OptionFeeSplit {
    /// A fee that goes entirely to the car owner
    pub fn owner(fee: Money) -> Self {
        Self {
            owner_fee: fee,
            drivy_fee: Money::zero(),
        }
    }

    /// A fee that goes entirely to the platform
    pub fn drivy(fee: Money) -> Self {
        Self {
            owner_fee: Money::zero(),
            drivy_fee: fee,
        }
    }
}

/// Per-day option charges accumulated across one rental's options
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct OptionCharges {
    pub owner: Money,
    pub drivy: Money,
}

impl OptionCharges {
    /// Total option price over the rental duration
    pub fn total(&self, duration: i64) -> Result<Money, MoneyError> {
        (self.owner + self.drivy).checked_mul(duration)
    }

    /// The owner's option share over the rental duration
    pub fn owner_total(&self, duration: i64) -> Result<Money, MoneyError> {
        self.owner.checked_mul(duration)
    }

    /// The platform's option share over the rental duration
    pub fn drivy_total(&self, duration: i64) -> Result<Money, MoneyError> {
        self.drivy.checked_mul(duration)
    }
}

/// Accumulates the per-day charges of a rental's attached options
///
/// # Errors
///
/// Returns [`PricingError::OptionNotFound`] for the first option whose kind
/// is absent from the fee table; the whole rental fails.
pub fn resolve_option_charges(
    options: &[RentalOption],
    prices: &HashMap<String, OptionFeeSplit>,
) -> Result<OptionCharges, PricingError> {
    let mut charges = OptionCharges::default();

    for option in options {
        let split = prices
            .get(&option.kind)
            .ok_or_else(|| PricingError::OptionNotFound {
                option_id: option.id,
                kind: option.kind.clone(),
            })?;
        charges.owner += split.owner_fee;
        charges.drivy += split.drivy_fee;
    }

    Ok(charges)
}
