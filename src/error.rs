use reqwest::StatusCode;
use thiserror::Error;

/// Application error types
#[derive(Debug, Error)]
pub enum AppError {
    /// Missing model in the price table, malformed price data or invalid settings
    #[error("Configuration error: {0}")]
    ConfigError(String),
    /// Tokenizer could not handle the model/text pair
    #[error("Tokenization error: {0}")]
    TokenizationError(String),
    /// Upstream API error (chat completion or currency conversion)
    #[error("Upstream error ({status}): {message}")]
    UpstreamError { status: StatusCode, message: String },
    /// HTTP request error (connection, timeout, body decoding)
    #[error("HTTP request error: {0}")]
    HttpRequest(#[from] reqwest::Error),
    /// Reading a transcript failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl AppError {
    /// Short machine-readable name of the error class
    pub fn kind(&self) -> &'static str {
        match self {
            Self::ConfigError(_) => "config_error",
            Self::TokenizationError(_) => "tokenization_error",
            Self::UpstreamError { .. } => "upstream_error",
            Self::HttpRequest(_) => "http_request_error",
            Self::Io(_) => "io_error",
        }
    }

    /// Whether the error came from a remote collaborator rather than local input
    pub fn is_upstream(&self) -> bool {
        matches!(self, Self::UpstreamError { .. } | Self::HttpRequest(_))
    }
}
