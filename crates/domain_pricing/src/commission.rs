//! Commission split among actors
//!
//! The commission takes a fixed share of the base price and partitions it:
//! half to the insurer, a per-day assistance fee, and the remainder to the
//! platform. Rule sets with an explicit owner share credit the owner with
//! the rest of the base price. Option fees are added to the owner and
//! platform shares after rounding.
//!
//! Every component is rounded independently, and the platform share's
//! round spans the assistance deduction. The share order is observable in
//! the output document and is part of the contract.

use std::fmt;

use core_kernel::{Money, MoneyError};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::config::PricingConfig;
use crate::engine::Capabilities;
use crate::options::OptionCharges;

/// A party to the settlement of one rental
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Actor {
    Driver,
    Owner,
    Insurance,
    Assistance,
    Drivy,
}

impl Actor {
    /// The actor name as it appears on the wire
    pub fn as_str(&self) -> &'static str {
        match self {
            Actor::Driver => "driver",
            Actor::Owner => "owner",
            Actor::Insurance => "insurance",
            Actor::Assistance => "assistance",
            Actor::Drivy => "drivy",
        }
    }
}

impl fmt::Display for Actor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// One actor's share of a rental's price
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CommissionShare {
    pub actor: Actor,
    pub amount: Money,
}

/// The ordered commission shares of one rental
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Commission {
    shares: Vec<CommissionShare>,
}

impl Commission {
    /// A commission with no shares, the default of a degraded rental
    pub fn empty() -> Self {
        Self::default()
    }

    fn push(&mut self, actor: Actor, amount: Money) {
        self.shares.push(CommissionShare { actor, amount });
    }

    /// The shares in their observable output order
    pub fn shares(&self) -> &[CommissionShare] {
        &self.shares
    }

    /// Looks up one actor's share
    pub fn amount_for(&self, actor: Actor) -> Option<Money> {
        self.shares
            .iter()
            .find(|share| share.actor == actor)
            .map(|share| share.amount)
    }

    pub fn is_empty(&self) -> bool {
        self.shares.is_empty()
    }

    /// Sum of all shares
    pub fn total(&self) -> Money {
        self.shares.iter().map(|share| share.amount).sum()
    }
}

/// Partitions a rental's base price into actor shares
///
/// Share order depends on the capability set: without an owner share it is
/// insurance, assistance, drivy; with an owner share the owner goes last,
/// unless paid options are active, in which case the owner leads.
pub fn split_commission(
    config: &PricingConfig,
    capabilities: Capabilities,
    base_price: Money,
    duration: i64,
    option_charges: OptionCharges,
) -> Result<Commission, MoneyError> {
    let commission_pool = config.commission_base.apply(base_price);
    let insurance_part = config.insurance_commission_part.as_decimal();
    let assistance_exact =
        Decimal::from(duration) * config.assistance_fee_per_day.to_decimal();

    let insurance = Money::round(commission_pool * insurance_part)?;
    let assistance = Money::round(assistance_exact)?;
    // The platform keeps what the insurer and assistance leave; the round
    // covers the whole expression.
    let drivy = Money::round(commission_pool * (Decimal::ONE - insurance_part) - assistance_exact)?
        .checked_add(&option_charges.drivy_total(duration)?)?;

    let mut commission = Commission::empty();

    if capabilities.owner_share {
        let owner = Money::round(config.commission_base.complement().apply(base_price))?
            .checked_add(&option_charges.owner_total(duration)?)?;

        if capabilities.paid_options {
            commission.push(Actor::Owner, owner);
            commission.push(Actor::Insurance, insurance);
            commission.push(Actor::Assistance, assistance);
            commission.push(Actor::Drivy, drivy);
        } else {
            commission.push(Actor::Insurance, insurance);
            commission.push(Actor::Assistance, assistance);
            commission.push(Actor::Drivy, drivy);
            commission.push(Actor::Owner, owner);
        }
    } else {
        commission.push(Actor::Insurance, insurance);
        commission.push(Actor::Assistance, assistance);
        commission.push(Actor::Drivy, drivy);
    }

    Ok(commission)
}
