//! CLI Boundary
//!
//! This crate wraps the pricing core for file-to-file use: it parses one
//! input JSON document into plain records, hands the converted batch to
//! the engine, and projects the outcome into the rule set's output shape.
//!
//! Parsing is an explicit two-pass transformation: records first, domain
//! batch second.
//!
//! # Example
//!
//! ```rust,ignore
//! use domain_pricing::{process_batch, PricingConfig, PricingEngine, RuleSet};
//! use interface_cli::{dto, io};
//!
//! let document = io::read_input("data/input.json")?;
//! let engine = PricingEngine::new(RuleSet::PaidOptions, PricingConfig::default());
//! let output = process_batch(&engine, document.into_batch());
//! io::write_output("data/output.json", &dto::project(engine.rule_set(), &output))?;
//! ```

pub mod config;
pub mod dto;
pub mod error;
pub mod io;

pub use config::CliConfig;
pub use error::CliError;
