use crate::error::AppError;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use tiktoken_rs::tokenizer::{get_tokenizer, Tokenizer};
use tiktoken_rs::{get_bpe_from_tokenizer, CoreBPE};
use tracing::debug;

/// Model-aware token counting
///
/// Different models may tokenize the same text differently, so every call
/// names the model.
pub trait TokenCounter {
    fn count_tokens(&self, model: &str, text: &str) -> Result<usize, AppError>;
}

impl<F> TokenCounter for F
where
    F: Fn(&str, &str) -> Result<usize, AppError>,
{
    fn count_tokens(&self, model: &str, text: &str) -> Result<usize, AppError> {
        self(model, text)
    }
}

/// Token counter backed by the OpenAI BPE encodings
///
/// Encoders are built once per encoding and shared by every model that maps
/// to it, so repeated counts skip the BPE rank parsing.
#[derive(Debug, Default)]
pub struct TiktokenCounter {
    encoders: Mutex<HashMap<Tokenizer, Arc<CoreBPE>>>,
}

impl TiktokenCounter {
    pub fn new() -> Self {
        Self::default()
    }

    fn encoder(&self, model: &str) -> Result<Arc<CoreBPE>, AppError> {
        let tokenizer = get_tokenizer(model).ok_or_else(|| {
            AppError::TokenizationError(format!("No tokenizer for model '{}'", model))
        })?;

        let mut encoders = self.encoders.lock().unwrap_or_else(|e| e.into_inner());
        if let Some(bpe) = encoders.get(&tokenizer) {
            return Ok(Arc::clone(bpe));
        }

        let bpe = get_bpe_from_tokenizer(tokenizer).map_err(|e| {
            AppError::TokenizationError(format!(
                "Failed to load {:?} encoding for model '{}': {}",
                tokenizer, model, e
            ))
        })?;
        debug!(model = model, encoding = ?tokenizer, "Loaded tokenizer encoding");

        let bpe = Arc::new(bpe);
        encoders.insert(tokenizer, Arc::clone(&bpe));
        Ok(bpe)
    }

    /// Number of distinct encodings loaded so far
    pub fn cached_encodings(&self) -> usize {
        self.encoders.lock().unwrap_or_else(|e| e.into_inner()).len()
    }
}

impl TokenCounter for TiktokenCounter {
    fn count_tokens(&self, model: &str, text: &str) -> Result<usize, AppError> {
        let count = self.encoder(model)?.encode_with_special_tokens(text).len();
        debug!(model = model, tokens = count, "Counted tokens");
        Ok(count)
    }
}
