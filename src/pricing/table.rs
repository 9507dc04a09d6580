//! Static price table
//!
//! The file is a JSON object mapping model names to string-encoded rates:
//!
//! ```json
//! { "gpt-4": { "prompt_price": "0.03", "completion_price": "0.06" } }
//! ```
//!
//! Every entry is validated when the table is loaded, so a lookup never
//! has to deal with malformed data.

use crate::error::AppError;
use crate::pricing::models::ModelPrice;
use serde::Deserialize;
use std::collections::{BTreeMap, HashMap};
use std::path::Path;
use tracing::{debug, info};

/// Price table file structure: model name -> raw rates
pub type PricingDataFile = HashMap<String, RawModelPrice>;

/// Rates as they appear in the file
#[derive(Debug, Deserialize)]
pub struct RawModelPrice {
    #[serde(default)]
    pub prompt_price: Option<RawPrice>,
    #[serde(default)]
    pub completion_price: Option<RawPrice>,
}

/// A rate is normally a string ("0.03"), plain numbers are accepted too
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum RawPrice {
    Text(String),
    Number(f64),
}

/// Validated, immutable mapping of model name to rates
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PriceTable {
    prices: BTreeMap<String, ModelPrice>,
}

impl PriceTable {
    /// Load and validate a price table file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, AppError> {
        let path = path.as_ref();
        debug!("Loading price table from: {}", path.display());

        let content = std::fs::read_to_string(path).map_err(|e| {
            AppError::ConfigError(format!(
                "Failed to read price table {}: {}",
                path.display(),
                e
            ))
        })?;

        let table = Self::from_json(&content)?;
        info!("Loaded {} model prices from {}", table.len(), path.display());
        Ok(table)
    }

    /// Parse and validate price table JSON
    pub fn from_json(json: &str) -> Result<Self, AppError> {
        let data: PricingDataFile = serde_json::from_str(json)
            .map_err(|e| AppError::ConfigError(format!("Failed to parse price table JSON: {}", e)))?;

        let mut prices = BTreeMap::new();
        for (model_name, raw) in data {
            let prompt_price = parse_rate(&model_name, "prompt_price", raw.prompt_price)?;
            let completion_price =
                parse_rate(&model_name, "completion_price", raw.completion_price)?;

            prices.insert(
                model_name,
                ModelPrice {
                    prompt_price,
                    completion_price,
                },
            );
        }

        Ok(Self { prices })
    }

    /// Build a table from already-validated rates
    pub fn from_prices<I, S>(prices: I) -> Self
    where
        I: IntoIterator<Item = (S, ModelPrice)>,
        S: Into<String>,
    {
        Self {
            prices: prices.into_iter().map(|(name, price)| (name.into(), price)).collect(),
        }
    }

    /// Rates for `model`, failing if the model is not in the table
    pub fn get(&self, model: &str) -> Result<&ModelPrice, AppError> {
        self.prices.get(model).ok_or_else(|| {
            AppError::ConfigError(format!("Model '{}' not found in price table", model))
        })
    }

    /// Model names in sorted order
    pub fn model_names(&self) -> impl Iterator<Item = &str> {
        self.prices.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &ModelPrice)> {
        self.prices.iter().map(|(name, price)| (name.as_str(), price))
    }

    pub fn len(&self) -> usize {
        self.prices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.prices.is_empty()
    }
}

fn parse_rate(model: &str, field: &str, raw: Option<RawPrice>) -> Result<f64, AppError> {
    let value = match raw {
        Some(RawPrice::Text(text)) => text.trim().parse::<f64>().map_err(|_| {
            AppError::ConfigError(format!(
                "Model '{}' has invalid {}: '{}'",
                model, field, text
            ))
        })?,
        Some(RawPrice::Number(n)) => n,
        None => {
            return Err(AppError::ConfigError(format!(
                "Model '{}' is missing {}",
                model, field
            )))
        }
    };

    if !value.is_finite() || value < 0.0 {
        return Err(AppError::ConfigError(format!(
            "Model '{}' has invalid {}: {} (must be a non-negative number)",
            model, field, value
        )));
    }

    Ok(value)
}
