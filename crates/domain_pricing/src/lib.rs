//! Pricing Domain - Rental Pricing and Settlement
//!
//! This crate implements the pricing core: it converts raw rental
//! attributes (duration, distance, rate card, paid options) into a price,
//! then splits that price into per-actor commission shares and balanced
//! debit/credit settlement actions.
//!
//! # Rule sets
//!
//! Five cumulative rule sets exist, each a superset of the previous one.
//! They share one engine parameterized by a capability set rather than five
//! copies of the pipeline:
//!
//! 1. [`RuleSet::BaseRate`] - duration x day rate + distance x km rate
//! 2. [`RuleSet::TieredDiscount`] - adds the duration discount schedule
//! 3. [`RuleSet::CommissionSplit`] - adds insurance/assistance/drivy shares
//! 4. [`RuleSet::OwnerLedger`] - adds the owner share and debit/credit actions
//! 5. [`RuleSet::PaidOptions`] - adds paid add-on options
//!
//! # Failure model
//!
//! Pricing failures are per-rental and recoverable: the batch orchestrator
//! records them, leaves the affected rental at zero-value defaults, and
//! processes the rest of the batch.
//!
//! # Example
//!
//! ```rust,ignore
//! use domain_pricing::{process_batch, PricingConfig, PricingEngine, RuleSet};
//!
//! let engine = PricingEngine::new(RuleSet::PaidOptions, PricingConfig::default());
//! let output = process_batch(&engine, batch);
//! for failure in &output.failures {
//!     eprintln!("degraded: {failure}");
//! }
//! ```

pub mod actions;
pub mod batch;
pub mod catalog;
pub mod commission;
pub mod config;
pub mod discount;
pub mod error;
pub mod engine;
pub mod options;
pub mod rental;

pub use actions::{is_balanced, materialize_actions, Action, EntryKind};
pub use batch::{process_batch, BatchInput, BatchOutput, MissingRental, PricedRental};
pub use catalog::{Car, Catalog};
pub use commission::{Actor, Commission, CommissionShare};
pub use config::PricingConfig;
pub use discount::{DiscountSchedule, DiscountTier};
pub use engine::{Capabilities, PricingEngine, Quote, RuleSet};
pub use error::PricingError;
pub use options::{OptionCharges, OptionFeeSplit, RentalOption};
pub use rental::Rental;
