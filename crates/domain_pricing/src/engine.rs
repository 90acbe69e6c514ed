//! The pricing engine and its rule sets

use core_kernel::{Money, MoneyError};
use rust_decimal::Decimal;

use crate::actions::{materialize_actions, Action};
use crate::catalog::Car;
use crate::commission::{split_commission, Commission};
use crate::config::PricingConfig;
use crate::error::PricingError;
use crate::options::{resolve_option_charges, OptionCharges};
use crate::rental::Rental;

/// Feature switches distinguishing the five rule sets
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Capabilities {
    /// Apply the tiered duration discount instead of the raw day count
    pub duration_discount: bool,
    /// Split the base price into commission shares
    pub commission: bool,
    /// Credit the owner's share explicitly
    pub owner_share: bool,
    /// Materialize debit/credit settlement actions
    pub ledger_actions: bool,
    /// Price paid add-on options
    pub paid_options: bool,
}

/// The five cumulative pricing rule sets
///
/// Each rule set is a superset of the previous one and carries its own
/// output shape; both the amounts and their order are part of the wire
/// contract.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum RuleSet {
    /// Duration x day rate + distance x km rate
    BaseRate,
    /// Adds the duration discount schedule
    TieredDiscount,
    /// Adds the insurance/assistance/drivy commission split
    CommissionSplit,
    /// Adds the explicit owner share and settlement actions
    OwnerLedger,
    /// Adds paid add-on options
    PaidOptions,
}

impl RuleSet {
    pub const ALL: [RuleSet; 5] = [
        RuleSet::BaseRate,
        RuleSet::TieredDiscount,
        RuleSet::CommissionSplit,
        RuleSet::OwnerLedger,
        RuleSet::PaidOptions,
    ];

    /// Resolves a 1-based level number to its rule set
    pub fn from_level(level: u8) -> Option<RuleSet> {
        match level {
            1 => Some(RuleSet::BaseRate),
            2 => Some(RuleSet::TieredDiscount),
            3 => Some(RuleSet::CommissionSplit),
            4 => Some(RuleSet::OwnerLedger),
            5 => Some(RuleSet::PaidOptions),
            _ => None,
        }
    }

    /// The 1-based level number of this rule set
    pub fn level(self) -> u8 {
        match self {
            RuleSet::BaseRate => 1,
            RuleSet::TieredDiscount => 2,
            RuleSet::CommissionSplit => 3,
            RuleSet::OwnerLedger => 4,
            RuleSet::PaidOptions => 5,
        }
    }

    pub fn capabilities(self) -> Capabilities {
        Capabilities {
            duration_discount: self >= RuleSet::TieredDiscount,
            commission: self >= RuleSet::CommissionSplit,
            owner_share: self >= RuleSet::OwnerLedger,
            ledger_actions: self >= RuleSet::OwnerLedger,
            paid_options: self >= RuleSet::PaidOptions,
        }
    }
}

/// The fully computed cost breakdown of one rental
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Quote {
    /// Price before options
    pub base_price: Money,
    /// Price including options; what the driver is debited
    pub total_price: Money,
    pub commission: Commission,
    pub actions: Vec<Action>,
}

impl Quote {
    /// The zero-value defaults a degraded rental keeps
    ///
    /// Nothing is priced and no shares exist; rule sets that materialize
    /// actions still get the single driver debit of zero.
    pub fn zeroed(capabilities: Capabilities) -> Self {
        let commission = Commission::empty();
        let actions = if capabilities.ledger_actions {
            materialize_actions(Money::zero(), &commission)
        } else {
            Vec::new()
        };
        Self {
            base_price: Money::zero(),
            total_price: Money::zero(),
            commission,
            actions,
        }
    }
}

/// Prices rentals under one rule set and one configuration
///
/// The engine is pure: quoting a rental reads the rental, its car, and the
/// configuration, and shares no state between rentals or batches.
#[derive(Debug, Clone)]
pub struct PricingEngine {
    rule_set: RuleSet,
    capabilities: Capabilities,
    config: PricingConfig,
}

impl PricingEngine {
    pub fn new(rule_set: RuleSet, config: PricingConfig) -> Self {
        Self {
            rule_set,
            capabilities: rule_set.capabilities(),
            config,
        }
    }

    pub fn rule_set(&self) -> RuleSet {
        self.rule_set
    }

    pub fn capabilities(&self) -> Capabilities {
        self.capabilities
    }

    pub fn config(&self) -> &PricingConfig {
        &self.config
    }

    /// Computes the full cost breakdown for one rental
    ///
    /// # Errors
    ///
    /// - [`PricingError::NegativePrice`] if the duration is below one day
    ///   or any priced quantity is negative
    /// - [`PricingError::OptionNotFound`] if an attached option's kind is
    ///   not configured (paid-options rule set only)
    /// - [`PricingError::Calculation`] on arithmetic overflow
    pub fn quote(&self, rental: &Rental, car: &Car) -> Result<Quote, PricingError> {
        let duration = rental.duration();
        if duration <= 0
            || rental.distance < 0
            || car.price_per_day.is_negative()
            || car.price_per_km.is_negative()
        {
            return Err(PricingError::NegativePrice {
                rental_id: rental.id,
            });
        }

        let calc = |source: MoneyError| PricingError::Calculation {
            rental_id: rental.id,
            source,
        };

        let multiplier = if self.capabilities.duration_discount {
            self.config.discount.multiplier(duration)
        } else {
            Decimal::from(duration)
        };
        let day_price = multiplier * car.price_per_day.to_decimal();
        let distance_price = Decimal::from(rental.distance) * car.price_per_km.to_decimal();
        let base_price = Money::round(day_price + distance_price).map_err(calc)?;

        let option_charges = if self.capabilities.paid_options {
            resolve_option_charges(rental.options(), &self.config.option_prices)?
        } else {
            OptionCharges::default()
        };
        let options_total = option_charges.total(duration).map_err(calc)?;
        let total_price = base_price.checked_add(&options_total).map_err(calc)?;

        let commission = if self.capabilities.commission {
            split_commission(
                &self.config,
                self.capabilities,
                base_price,
                duration,
                option_charges,
            )
            .map_err(calc)?
        } else {
            Commission::empty()
        };

        let actions = if self.capabilities.ledger_actions {
            materialize_actions(total_price, &commission)
        } else {
            Vec::new()
        };

        Ok(Quote {
            base_price,
            total_price,
            commission,
            actions,
        })
    }
}
