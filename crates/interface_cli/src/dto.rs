//! Wire records
//!
//! Input documents parse into plain records, then convert to domain types.
//! Output documents are built per rule set; struct field declaration order
//! fixes the wire key order, which is observable and part of the contract.

use chrono::NaiveDate;
use core_kernel::{CarId, Money, OptionId, RentalId, RentalPeriod};
use domain_pricing::{
    Actor, BatchInput, BatchOutput, Car, EntryKind, MissingRental, PricedRental, Rental,
    RentalOption, RuleSet,
};
use serde::{Deserialize, Serialize};

/// The input document: cars, rentals, and (for the paid-options rule set)
/// options
#[derive(Debug, Clone, Deserialize)]
pub struct InputDocument {
    pub cars: Vec<CarRecord>,
    pub rentals: Vec<RentalRecord>,
    #[serde(default)]
    pub options: Vec<OptionRecord>,
}

#[derive(Debug, Clone, Copy, Deserialize)]
pub struct CarRecord {
    pub id: CarId,
    pub price_per_day: Money,
    pub price_per_km: Money,
}

#[derive(Debug, Clone, Copy, Deserialize)]
pub struct RentalRecord {
    pub id: RentalId,
    pub car_id: CarId,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub distance: i64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct OptionRecord {
    pub id: OptionId,
    pub rental_id: RentalId,
    #[serde(rename = "type")]
    pub kind: String,
}

impl InputDocument {
    /// Second pass: converts the parsed records into the domain batch
    pub fn into_batch(self) -> BatchInput {
        BatchInput {
            cars: self
                .cars
                .into_iter()
                .map(|record| Car::new(record.id, record.price_per_day, record.price_per_km))
                .collect(),
            rentals: self
                .rentals
                .into_iter()
                .map(|record| {
                    Rental::new(
                        record.id,
                        record.car_id,
                        RentalPeriod::new(record.start_date, record.end_date),
                        record.distance,
                    )
                })
                .collect(),
            options: self
                .options
                .into_iter()
                .map(|record| RentalOption::new(record.id, record.rental_id, record.kind))
                .collect(),
        }
    }
}

/// Output documents, one shape per rule set
#[derive(Debug, Clone, Serialize)]
#[serde(untagged)]
pub enum OutputDocument {
    Prices {
        rentals: Vec<PriceRecord>,
    },
    Commissions {
        rentals: Vec<CommissionRecord>,
    },
    Actions {
        rentals: Vec<ActionsRecord>,
    },
    OptionsAndActions {
        rentals: Vec<OptionsRecord>,
        #[serde(skip_serializing_if = "Vec::is_empty")]
        missing_rentals: Vec<MissingRental>,
    },
}

#[derive(Debug, Clone, Copy, Serialize)]
pub struct PriceRecord {
    pub id: RentalId,
    pub price: Money,
}

#[derive(Debug, Clone, Serialize)]
pub struct CommissionRecord {
    pub id: RentalId,
    pub price: Money,
    pub commission: CommissionBreakdownRecord,
}

/// A degraded rental serializes its commission as `{}`
#[derive(Debug, Clone, Copy, Serialize)]
pub struct CommissionBreakdownRecord {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub insurance_fee: Option<Money>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub assistance_fee: Option<Money>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub drivy_fee: Option<Money>,
}

#[derive(Debug, Clone, Copy, Serialize)]
pub struct ActionRecord {
    pub who: Actor,
    #[serde(rename = "type")]
    pub kind: EntryKind,
    pub amount: Money,
}

#[derive(Debug, Clone, Serialize)]
pub struct ActionsRecord {
    pub id: RentalId,
    pub actions: Vec<ActionRecord>,
}

#[derive(Debug, Clone, Serialize)]
pub struct OptionsRecord {
    pub id: RentalId,
    pub options: Vec<String>,
    pub actions: Vec<ActionRecord>,
}

/// Projects the batch outcome into the rule set's output document
pub fn project(rule_set: RuleSet, output: &BatchOutput) -> OutputDocument {
    match rule_set {
        RuleSet::BaseRate | RuleSet::TieredDiscount => OutputDocument::Prices {
            rentals: output.rentals.iter().map(price_record).collect(),
        },
        RuleSet::CommissionSplit => OutputDocument::Commissions {
            rentals: output.rentals.iter().map(commission_record).collect(),
        },
        RuleSet::OwnerLedger => OutputDocument::Actions {
            rentals: output.rentals.iter().map(actions_record).collect(),
        },
        RuleSet::PaidOptions => OutputDocument::OptionsAndActions {
            rentals: output.rentals.iter().map(options_record).collect(),
            missing_rentals: output.missing_rentals.clone(),
        },
    }
}

fn price_record(rental: &PricedRental) -> PriceRecord {
    PriceRecord {
        id: rental.id,
        price: rental.quote.total_price,
    }
}

fn commission_record(rental: &PricedRental) -> CommissionRecord {
    let commission = &rental.quote.commission;
    CommissionRecord {
        id: rental.id,
        price: rental.quote.total_price,
        commission: CommissionBreakdownRecord {
            insurance_fee: commission.amount_for(Actor::Insurance),
            assistance_fee: commission.amount_for(Actor::Assistance),
            drivy_fee: commission.amount_for(Actor::Drivy),
        },
    }
}

fn action_records(rental: &PricedRental) -> Vec<ActionRecord> {
    rental
        .quote
        .actions
        .iter()
        .map(|action| ActionRecord {
            who: action.actor,
            kind: action.kind,
            amount: action.amount,
        })
        .collect()
}

fn actions_record(rental: &PricedRental) -> ActionsRecord {
    ActionsRecord {
        id: rental.id,
        actions: action_records(rental),
    }
}

fn options_record(rental: &PricedRental) -> OptionsRecord {
    OptionsRecord {
        id: rental.id,
        options: rental.options.clone(),
        actions: action_records(rental),
    }
}
