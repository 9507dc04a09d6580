//! Command implementations for the CLI
//!
//! - translate: interactive translation chat
//! - cost: transcript cost estimation, projection and currency conversion
//! - models: price table listing
//! - languages: target languages and tones
//! - test: configuration and price table check
//! - config: configuration display and validation

pub mod config;
pub mod cost;
pub mod languages;
pub mod models;
pub mod translate;

use anyhow::{Context as _, Result};
use enzo::config::{load_config, Config};
use enzo::pricing::PriceTable;
use std::path::PathBuf;

/// Paths given on the command line
pub struct Context {
    pub config_path: PathBuf,
    pub prices_path: Option<PathBuf>,
}

impl Context {
    pub fn load_config(&self) -> Result<Config> {
        load_config(&self.config_path)
            .with_context(|| format!("Failed to load {}", self.config_path.display()))
    }

    /// Price table path: `--prices` wins over `pricing.path`
    pub fn prices_path(&self, cfg: &Config) -> PathBuf {
        self.prices_path
            .clone()
            .unwrap_or_else(|| PathBuf::from(&cfg.pricing.path))
    }

    pub fn load_prices(&self, cfg: &Config) -> Result<PriceTable> {
        Ok(PriceTable::load(self.prices_path(cfg))?)
    }
}

/// Pick the requested model, or the first one in the table
pub fn resolve_model(prices: &PriceTable, model: Option<String>) -> Result<String> {
    match model {
        Some(model) => {
            // Fails with the table's own "not found" error
            prices.get(&model)?;
            Ok(model)
        }
        None => prices
            .model_names()
            .next()
            .map(str::to_string)
            .ok_or_else(|| anyhow::anyhow!("Price table is empty")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use enzo::pricing::ModelPrice;

    fn table() -> PriceTable {
        let price = ModelPrice {
            prompt_price: 0.03,
            completion_price: 0.06,
        };
        PriceTable::from_prices([("gpt-4", price), ("gpt-3.5-turbo", price)])
    }

    #[test]
    fn test_resolve_model_defaults_to_first() {
        assert_eq!(resolve_model(&table(), None).unwrap(), "gpt-3.5-turbo");
    }

    #[test]
    fn test_resolve_model_rejects_unknown() {
        assert!(resolve_model(&table(), Some("gpt-x".to_string())).is_err());
        assert_eq!(resolve_model(&table(), Some("gpt-4".to_string())).unwrap(), "gpt-4");
    }

    #[test]
    fn test_resolve_model_empty_table() {
        assert!(resolve_model(&PriceTable::default(), None).is_err());
    }
}
