//! Rental Pricer Binary
//!
//! Reads one input JSON document, runs the selected rule set over the
//! batch, and writes the output JSON document.
//!
//! # Usage
//!
//! ```bash
//! # Defaults: data/input.json -> data/output.json, rule set level 5
//! rental-pricer
//!
//! # Explicit paths, optional level
//! rental-pricer input.json output.json 3
//! ```
//!
//! # Environment Variables
//!
//! * `PRICER_INPUT` - Input document path (default: data/input.json)
//! * `PRICER_OUTPUT` - Output document path (default: data/output.json)
//! * `PRICER_LEVEL` - Rule set level 1-5 (default: 5)
//! * `PRICER_LOG_LEVEL` - Log level: trace, debug, info, warn, error (default: info)
//! * `PRICER_PRICING_FILE` - Optional pricing table file overriding the defaults

use anyhow::Context;
use domain_pricing::{process_batch, PricingConfig, PricingEngine, RuleSet};
use interface_cli::{config, dto, io, CliConfig, CliError};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

fn main() -> anyhow::Result<()> {
    // Load .env file if present (useful for local development)
    dotenvy::dotenv().ok();

    let mut cli = CliConfig::from_env().context("loading environment configuration")?;
    apply_args(&mut cli, std::env::args().skip(1).collect())?;

    init_tracing(&cli.log_level);

    let rule_set = RuleSet::from_level(cli.level).ok_or(CliError::UnknownLevel(cli.level))?;
    let pricing = match &cli.pricing_file {
        Some(path) => config::load_pricing_config(path)
            .with_context(|| format!("loading pricing table from {path}"))?,
        None => PricingConfig::default(),
    };

    tracing::info!(
        input = %cli.input,
        output = %cli.output,
        level = rule_set.level(),
        "pricing batch"
    );

    let document = io::read_input(&cli.input)?;
    let engine = PricingEngine::new(rule_set, pricing);
    let output = process_batch(&engine, document.into_batch());

    tracing::info!(
        rentals = output.rentals.len(),
        degraded = output.failures.len(),
        missing_rentals = output.missing_rentals.len(),
        "batch complete"
    );

    io::write_output(&cli.output, &dto::project(rule_set, &output))?;

    Ok(())
}

/// Applies positional arguments: `[INPUT OUTPUT [LEVEL]]`
fn apply_args(cli: &mut CliConfig, args: Vec<String>) -> anyhow::Result<()> {
    match args.as_slice() {
        [] => {}
        [input, output] => {
            cli.input = input.clone();
            cli.output = output.clone();
        }
        [input, output, level] => {
            cli.input = input.clone();
            cli.output = output.clone();
            cli.level = level
                .parse()
                .with_context(|| format!("LEVEL must be a number 1-5, got {level}"))?;
        }
        _ => anyhow::bail!("usage: rental-pricer [INPUT OUTPUT [LEVEL]]"),
    }
    Ok(())
}

/// Initializes tracing with the configured default level
///
/// `RUST_LOG` takes precedence when set.
fn init_tracing(log_level: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level));

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer())
        .init();
}
