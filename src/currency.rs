//! Currency conversion
//!
//! Talks to a Frankfurter-compatible exchange-rate API:
//! `GET {base_url}/latest?amount=10&from=USD&to=EUR` answers with
//! `{"amount": 10.0, "base": "USD", "date": "...", "rates": {"EUR": 9.2}}`.

use crate::config::CurrencyConfig;
use crate::error::AppError;
use crate::pricing::CostProjection;
use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde::Deserialize;
use std::collections::HashMap;
use std::time::Duration;
use tracing::debug;

/// Converts an amount between currencies
#[async_trait]
pub trait CurrencyConverter: Send + Sync {
    async fn convert(&self, from: &str, to: &str, amount: f64) -> Result<f64, AppError>;
}

#[derive(Debug, Deserialize)]
struct LatestRatesResponse {
    rates: HashMap<String, f64>,
}

/// HTTP exchange-rate client
pub struct HttpCurrencyConverter {
    client: Client,
    config: CurrencyConfig,
}

impl HttpCurrencyConverter {
    pub fn new(config: CurrencyConfig) -> Result<Self, AppError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_seconds))
            .build()?;

        Ok(Self { client, config })
    }
}

#[async_trait]
impl CurrencyConverter for HttpCurrencyConverter {
    async fn convert(&self, from: &str, to: &str, amount: f64) -> Result<f64, AppError> {
        let from = from.to_ascii_uppercase();
        let to = to.to_ascii_uppercase();
        if from == to {
            return Ok(amount);
        }

        let url = format!("{}/latest", self.config.base_url.trim_end_matches('/'));
        let amount_param = amount.to_string();
        let response = self
            .client
            .get(&url)
            .query(&[
                ("amount", amount_param.as_str()),
                ("from", from.as_str()),
                ("to", to.as_str()),
            ])
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response.text().await.unwrap_or_else(|_| "Unknown error".to_string());
            return Err(AppError::UpstreamError {
                status,
                message: error_text,
            });
        }

        let body: LatestRatesResponse = response.json().await?;
        let converted = body.rates.get(&to).copied().ok_or_else(|| AppError::UpstreamError {
            status: StatusCode::BAD_GATEWAY,
            message: format!("No rate for {} in exchange-rate response", to),
        })?;

        debug!(from = %from, to = %to, amount = amount, converted = converted, "Converted currency");
        Ok(converted)
    }
}

/// Re-express a projection in `target` currency
///
/// The converter is asked for the projection total. The per-run figure is
/// scaled by the same rate, and a zero total stays zero.
pub async fn convert_projection(
    converter: &dyn CurrencyConverter,
    projection: &CostProjection,
    target: &str,
) -> Result<CostProjection, AppError> {
    let total = converter
        .convert(&projection.currency, target, projection.total)
        .await?;
    let rate = if projection.total > 0.0 {
        total / projection.total
    } else {
        0.0
    };

    Ok(projection.converted(rate, target.to_ascii_uppercase()))
}
