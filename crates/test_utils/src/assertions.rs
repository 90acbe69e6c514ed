//! Custom Test Assertions
//!
//! Specialized assertion helpers for domain types that give more
//! meaningful error messages than standard assertions.

use core_kernel::Money;
use domain_pricing::{Action, Actor, EntryKind, PricedRental};

/// Asserts that a rental's settlement actions balance to zero
///
/// # Panics
///
/// Panics if the debit total differs from the credit total, printing both.
pub fn assert_actions_balanced(actions: &[Action]) {
    let mut debits = Money::zero();
    let mut credits = Money::zero();

    for action in actions {
        match action.kind {
            EntryKind::Debit => debits += action.amount,
            EntryKind::Credit => credits += action.amount,
        }
    }

    assert_eq!(
        debits, credits,
        "Actions do not balance: debits={debits}, credits={credits}"
    );
}

/// Asserts that the driver debit equals the given total price
pub fn assert_driver_debited(actions: &[Action], total: Money) {
    let debit = actions
        .iter()
        .find(|action| action.actor == Actor::Driver && action.kind == EntryKind::Debit)
        .unwrap_or_else(|| panic!("No driver debit among {} actions", actions.len()));

    assert_eq!(
        debit.amount, total,
        "Driver debited {} instead of {}",
        debit.amount, total
    );
}

/// Asserts that a rental degraded to its zero-value defaults
///
/// # Panics
///
/// Panics if any price is non-zero or any commission share survived.
pub fn assert_zero_defaults(rental: &PricedRental) {
    assert!(
        rental.quote.total_price.is_zero() && rental.quote.base_price.is_zero(),
        "Rental {} kept a price: base={}, total={}",
        rental.id,
        rental.quote.base_price,
        rental.quote.total_price
    );
    assert!(
        rental.quote.commission.is_empty(),
        "Rental {} kept {} commission shares",
        rental.id,
        rental.quote.commission.shares().len()
    );
    for action in &rental.quote.actions {
        assert!(
            action.amount.is_zero(),
            "Rental {} kept a non-zero action for {}",
            rental.id,
            action.actor
        );
    }
}
