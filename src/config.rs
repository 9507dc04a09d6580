use crate::error::AppError;
use crate::translation;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Environment variable prefix, e.g. `ENZO__OPENAI__API_KEY`
pub const ENV_PREFIX: &str = "ENZO";

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct Config {
    pub openai: OpenAIConfig,
    pub completion: CompletionConfig,
    pub pricing: PricingConfig,
    pub translation: TranslationConfig,
    pub currency: CurrencyConfig,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct OpenAIConfig {
    pub api_key: String,
    pub base_url: String,
    pub timeout_seconds: u64,
}

impl Default for OpenAIConfig {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            base_url: "https://api.openai.com/v1".to_string(),
            timeout_seconds: 60,
        }
    }
}

/// Sampling parameters sent with every translation turn
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct CompletionConfig {
    pub max_tokens: u32,
    pub temperature: f32,
    pub top_p: f32,
    pub frequency_penalty: f32,
    pub presence_penalty: f32,
}

impl Default for CompletionConfig {
    fn default() -> Self {
        Self {
            max_tokens: 2000,
            temperature: 0.7,
            top_p: 1.0,
            frequency_penalty: 0.0,
            presence_penalty: 0.0,
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct PricingConfig {
    /// Price table JSON file
    pub path: String,
}

impl Default for PricingConfig {
    fn default() -> Self {
        Self {
            path: "api_pricing.json".to_string(),
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct TranslationConfig {
    pub language: String,
    pub tone: String,
}

impl Default for TranslationConfig {
    fn default() -> Self {
        Self {
            language: "French".to_string(),
            tone: "General Translation".to_string(),
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct CurrencyConfig {
    pub base_url: String,
    pub timeout_seconds: u64,
    /// Currency the price table is quoted in
    pub source: String,
}

impl Default for CurrencyConfig {
    fn default() -> Self {
        Self {
            base_url: "https://api.frankfurter.app".to_string(),
            timeout_seconds: 30,
            source: "USD".to_string(),
        }
    }
}

/// Load configuration from `path` (optional) and `ENZO__*` environment variables
pub fn load_config(path: &Path) -> Result<Config, AppError> {
    let settings = config::Config::builder()
        .add_source(config::File::from(path).required(false))
        .add_source(config::Environment::with_prefix(ENV_PREFIX).separator("__"))
        .build()
        .map_err(|e| AppError::ConfigError(e.to_string()))?;

    let mut cfg: Config = settings
        .try_deserialize()
        .map_err(|e| AppError::ConfigError(e.to_string()))?;

    if cfg.openai.api_key.is_empty() {
        if let Ok(key) = std::env::var("OPENAI_API_KEY") {
            cfg.openai.api_key = key;
        }
    }

    validate_config(&cfg)?;

    Ok(cfg)
}

pub fn validate_config(cfg: &Config) -> Result<(), AppError> {
    if cfg.openai.timeout_seconds == 0 {
        return Err(AppError::ConfigError(
            "openai.timeout_seconds must be greater than 0".to_string(),
        ));
    }

    if cfg.currency.timeout_seconds == 0 {
        return Err(AppError::ConfigError(
            "currency.timeout_seconds must be greater than 0".to_string(),
        ));
    }

    if cfg.completion.max_tokens == 0 {
        return Err(AppError::ConfigError(
            "completion.max_tokens must be greater than 0".to_string(),
        ));
    }

    if !(0.0..=2.0).contains(&cfg.completion.temperature) {
        return Err(AppError::ConfigError(format!(
            "completion.temperature must be between 0 and 2, got {}",
            cfg.completion.temperature
        )));
    }

    if !(cfg.completion.top_p > 0.0 && cfg.completion.top_p <= 1.0) {
        return Err(AppError::ConfigError(format!(
            "completion.top_p must be in (0, 1], got {}",
            cfg.completion.top_p
        )));
    }

    if cfg.pricing.path.is_empty() {
        return Err(AppError::ConfigError("pricing.path cannot be empty".to_string()));
    }

    // Unknown names fail here rather than on the first turn
    translation::language_prompt(&cfg.translation.language)?;
    translation::tone_prompt(&cfg.translation.tone)?;

    Ok(())
}
