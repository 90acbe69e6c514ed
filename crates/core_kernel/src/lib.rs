//! Core Kernel - Foundational types for the rental pricing system
//!
//! This crate provides the fundamental building blocks used across all domain modules:
//! - Money in integer minor units with banker's rounding of decimal intermediates
//! - Rental periods with inclusive day counting
//! - Strongly-typed integer identifiers

pub mod identifiers;
pub mod money;
pub mod temporal;

pub use identifiers::{CarId, OptionId, RentalId};
pub use money::{Money, MoneyError, Rate};
pub use temporal::RentalPeriod;
