//! Pricing configuration
//!
//! Commission rates and the option fee table are an explicit value handed
//! to the engine at construction, so several configurations can coexist in
//! one process. The defaults are the production values.

use std::collections::HashMap;

use core_kernel::{Money, Rate};
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use crate::discount::DiscountSchedule;
use crate::options::OptionFeeSplit;

/// Rates, fees, and schedules the pricing engine runs with
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PricingConfig {
    /// Share of the base price taken as commission
    pub commission_base: Rate,
    /// Share of the commission that goes to the insurer
    pub insurance_commission_part: Rate,
    /// Assistance fee per rented day, minor units
    pub assistance_fee_per_day: Money,
    /// Duration discount schedule
    pub discount: DiscountSchedule,
    /// Per-day option fees by option kind
    pub option_prices: HashMap<String, OptionFeeSplit>,
}

impl Default for PricingConfig {
    /// Production values: 30% commission with half to the insurer, 1 EUR
    /// assistance per day, the standard discount curve, and the gps /
    /// baby_seat / additional_insurance option table.
    fn default() -> Self {
        Self {
            commission_base: Rate::new(dec!(0.3)),
            insurance_commission_part: Rate::new(dec!(0.5)),
            assistance_fee_per_day: Money::from_minor(100),
            discount: DiscountSchedule::standard(),
            option_prices: HashMap::from([
                ("gps".to_string(), OptionFeeSplit::owner(Money::from_minor(500))),
                ("baby_seat".to_string(), OptionFeeSplit::owner(Money::from_minor(200))),
                (
                    "additional_insurance".to_string(),
                    OptionFeeSplit::drivy(Money::from_minor(1000)),
                ),
            ]),
        }
    }
}
