//! CLI configuration

use domain_pricing::PricingConfig;
use serde::Deserialize;

/// Runtime configuration for the pricer binary
///
/// Loaded from the environment with the `PRICER_` prefix; positional
/// command-line arguments override the paths and level.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct CliConfig {
    /// Input document path
    pub input: String,
    /// Output document path
    pub output: String,
    /// Rule set level, 1-5
    pub level: u8,
    /// Log level
    pub log_level: String,
    /// Optional pricing table file overriding the built-in defaults
    pub pricing_file: Option<String>,
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            input: "data/input.json".to_string(),
            output: "data/output.json".to_string(),
            level: 5,
            log_level: "info".to_string(),
            pricing_file: None,
        }
    }
}

impl CliConfig {
    /// Loads configuration from environment variables
    ///
    /// # Example
    ///
    /// ```bash
    /// PRICER_LEVEL=3 PRICER_LOG_LEVEL=debug rental-pricer in.json out.json
    /// ```
    pub fn from_env() -> Result<Self, config::ConfigError> {
        config::Config::builder()
            .add_source(config::Environment::with_prefix("PRICER"))
            .build()?
            .try_deserialize()
    }
}

/// Loads a pricing configuration from a file (TOML, JSON, or YAML)
///
/// Absent keys fall back to the production defaults.
pub fn load_pricing_config(path: &str) -> Result<PricingConfig, config::ConfigError> {
    config::Config::builder()
        .add_source(config::File::with_name(path))
        .build()?
        .try_deserialize()
}
