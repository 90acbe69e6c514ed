//! Pricing domain errors

use core_kernel::{CarId, MoneyError, OptionId, RentalId};
use thiserror::Error;

/// Errors that can occur while pricing a single rental
///
/// None of these abort a batch. The orchestrator records the error, leaves
/// the affected rental at its zero-value defaults, and continues with the
/// rest of the batch.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum PricingError {
    /// A priced quantity is negative, or the duration is not at least one day
    #[error("Negative price component on rental id {rental_id}.")]
    NegativePrice { rental_id: RentalId },

    /// An attached option's kind is absent from the fee configuration
    #[error("Option id {option_id} with name {kind} not found.")]
    OptionNotFound { option_id: OptionId, kind: String },

    /// The rental references a car missing from the catalog
    #[error("Missing car id {car_id} to compute rental id {rental_id}.")]
    MissingCar { car_id: CarId, rental_id: RentalId },

    /// Arithmetic overflow while computing amounts
    #[error("Calculation error on rental id {rental_id}: {source}")]
    Calculation {
        rental_id: RentalId,
        #[source]
        source: MoneyError,
    },
}

impl PricingError {
    /// The rental degraded by this error, if the error is tied to one
    pub fn rental_id(&self) -> Option<RentalId> {
        match self {
            PricingError::NegativePrice { rental_id }
            | PricingError::MissingCar { rental_id, .. }
            | PricingError::Calculation { rental_id, .. } => Some(*rental_id),
            PricingError::OptionNotFound { .. } => None,
        }
    }
}
