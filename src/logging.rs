//! Logging setup and secret masking
//!
//! Logs go to stderr so command output on stdout stays machine-readable.

use std::fmt;
use tracing_subscriber::{fmt as tracing_fmt, prelude::*, EnvFilter};

/// Initialize tracing/logging
///
/// Reads the filter from `RUST_LOG`, falling back to `default_level`.
/// Can only be called once per process.
pub fn init_tracing(default_level: &str) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_fmt::layer().with_target(true).with_writer(std::io::stderr))
        .init();
}

/// API key representation that is safe to log
///
/// Only the first 8 characters are shown.
#[derive(Clone, Debug)]
pub struct SensitiveApiKey<'a> {
    inner: &'a str,
}

impl<'a> SensitiveApiKey<'a> {
    /// # Example
    /// ```
    /// use enzo::logging::SensitiveApiKey;
    ///
    /// let key = "sk-proj-abcdef123456";
    /// assert_eq!(SensitiveApiKey::new(key).to_string(), "sk-proj-***");
    /// ```
    pub fn new(key: &'a str) -> Self {
        Self { inner: key }
    }
}

impl fmt::Display for SensitiveApiKey<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let visible_len = 8;
        match self.inner.get(..visible_len) {
            Some(prefix) if self.inner.len() > visible_len => write!(f, "{}***", prefix),
            _ => write!(f, "***"),
        }
    }
}

/// Mask an API key for display
///
/// Shows first 7 and last 4 characters with dots in between.
/// Example: "sk-1234567890abcdef" -> "sk-1234...cdef"
pub fn mask_api_key(key: &str) -> String {
    if key.is_empty() {
        return String::new();
    }

    let chars: Vec<char> = key.chars().collect();
    if chars.len() <= 11 {
        // Too short to mask meaningfully
        return "***".to_string();
    }

    let prefix: String = chars[..7].iter().collect();
    let suffix: String = chars[chars.len() - 4..].iter().collect();
    format!("{}...{}", prefix, suffix)
}
