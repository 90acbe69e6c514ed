//! Settlement actions
//!
//! An action is a signed ledger entry for one actor on one rental. Every
//! successfully priced rental settles flat: the driver's debit equals the
//! sum of all credits.

use core_kernel::Money;
use serde::{Deserialize, Serialize};

use crate::commission::{Actor, Commission};

/// Direction of a settlement entry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntryKind {
    Debit,
    Credit,
}

/// A signed ledger entry for one actor on one rental
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Action {
    pub actor: Actor,
    pub kind: EntryKind,
    pub amount: Money,
}

impl Action {
    pub fn debit(actor: Actor, amount: Money) -> Self {
        Self {
            actor,
            kind: EntryKind::Debit,
            amount,
        }
    }

    pub fn credit(actor: Actor, amount: Money) -> Self {
        Self {
            actor,
            kind: EntryKind::Credit,
            amount,
        }
    }
}

/// Builds the settlement actions for one rental
///
/// The driver is debited the total price, then every commission share is
/// credited in the commission's own order.
pub fn materialize_actions(total_price: Money, commission: &Commission) -> Vec<Action> {
    let mut actions = Vec::with_capacity(1 + commission.shares().len());
    actions.push(Action::debit(Actor::Driver, total_price));

    for share in commission.shares() {
        actions.push(Action::credit(share.actor, share.amount));
    }

    actions
}

/// Returns true if total debits equal total credits
pub fn is_balanced(actions: &[Action]) -> bool {
    let mut debits = Money::zero();
    let mut credits = Money::zero();

    for action in actions {
        match action.kind {
            EntryKind::Debit => debits += action.amount,
            EntryKind::Credit => credits += action.amount,
        }
    }

    debits == credits
}
