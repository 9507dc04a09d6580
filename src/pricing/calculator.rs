use crate::error::AppError;
use crate::pricing::models::CostBreakdown;
use crate::pricing::table::PriceTable;
use crate::pricing::tokenizer::TokenCounter;
use crate::transcript::Splitter;
use tracing::debug;

/// Estimates what a transcript costs for a given model
///
/// The user segment is priced at the prompt rate and the assistant segment
/// at the completion rate.
pub struct CostEstimator<'a> {
    prices: &'a PriceTable,
    counter: &'a dyn TokenCounter,
    splitter: Splitter,
}

impl<'a> CostEstimator<'a> {
    /// Create an estimator using the default transcript splitter
    pub fn new(prices: &'a PriceTable, counter: &'a dyn TokenCounter) -> Self {
        Self {
            prices,
            counter,
            splitter: Splitter::default(),
        }
    }

    /// Use a splitter with a different assistant seed
    pub fn with_splitter(mut self, splitter: Splitter) -> Self {
        self.splitter = splitter;
        self
    }

    /// Calculate the cost breakdown of `text` for `model`
    pub fn breakdown(&self, model: &str, text: &str) -> Result<CostBreakdown, AppError> {
        let price = self.prices.get(model)?;

        let segments = self.splitter.split(text);
        let user_tokens = self.counter.count_tokens(model, &segments.user_text)?;
        let assistant_tokens = self.counter.count_tokens(model, &segments.assistant_text)?;

        let breakdown = CostBreakdown::from_tokens(user_tokens, assistant_tokens, price);
        debug!(
            model = model,
            user_tokens = user_tokens,
            assistant_tokens = assistant_tokens,
            total_cost = breakdown.total_cost,
            "Estimated transcript cost"
        );

        Ok(breakdown)
    }

    /// Total cost of `text` for `model`
    pub fn estimate(&self, model: &str, text: &str) -> Result<f64, AppError> {
        Ok(self.breakdown(model, text)?.total_cost)
    }
}

/// Total cost of `text` for `model` with the default transcript splitter
pub fn estimate_cost(
    model: &str,
    text: &str,
    prices: &PriceTable,
    counter: &dyn TokenCounter,
) -> Result<f64, AppError> {
    CostEstimator::new(prices, counter).estimate(model, text)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pricing::models::ModelPrice;
    use crate::transcript::{ASSISTANT_MARKER, DEFAULT_INSTRUCTION};

    fn test_table() -> PriceTable {
        PriceTable::from_json(r#"{"m1": {"prompt_price": "1.0", "completion_price": "2.0"}}"#)
            .unwrap()
    }

    /// Counter that returns fixed counts for the user and assistant segments
    fn fixed_counter(user: usize, assistant: usize) -> impl Fn(&str, &str) -> Result<usize, AppError> {
        move |_model: &str, text: &str| {
            if text.starts_with(ASSISTANT_MARKER) {
                Ok(assistant)
            } else {
                Ok(user)
            }
        }
    }

    #[test]
    fn test_cost_calculation() {
        let prices = test_table();
        let counter = fixed_counter(100, 50);

        let cost = estimate_cost("m1", "## USER\nHello\n## ASSISTANT\nBonjour", &prices, &counter)
            .unwrap();

        assert!((cost - 0.2).abs() < 1e-12);
    }

    #[test]
    fn test_breakdown_components() {
        let prices = test_table();
        let counter = fixed_counter(100, 50);
        let estimator = CostEstimator::new(&prices, &counter);

        let breakdown = estimator.breakdown("m1", "Hello").unwrap();

        assert_eq!(breakdown.user_tokens, 100);
        assert_eq!(breakdown.assistant_tokens, 50);
        assert!((breakdown.prompt_cost - 0.1).abs() < 1e-12);
        assert!((breakdown.completion_cost - 0.1).abs() < 1e-12);
    }

    #[test]
    fn test_unknown_model_fails_for_any_text() {
        let prices = test_table();
        let counter = fixed_counter(1, 1);

        for text in ["", "Hello", "## USER\nHi\n## ASSISTANT\nSalut"] {
            let err = estimate_cost("gpt-x", text, &prices, &counter).unwrap_err();
            assert!(matches!(err, AppError::ConfigError(_)));
        }
    }

    #[test]
    fn test_unknown_model_checked_before_tokenizing() {
        let prices = test_table();
        let counter = |_: &str, _: &str| -> Result<usize, AppError> {
            panic!("tokenizer must not be called for unknown models")
        };

        assert!(estimate_cost("gpt-x", "Hello", &prices, &counter).is_err());
    }

    #[test]
    fn test_tokenization_error_propagates() {
        let prices = test_table();
        let counter = |model: &str, _: &str| -> Result<usize, AppError> {
            Err(AppError::TokenizationError(format!("unsupported model {}", model)))
        };

        let err = estimate_cost("m1", "Hello", &prices, &counter).unwrap_err();
        assert!(matches!(err, AppError::TokenizationError(_)));
    }

    #[test]
    fn test_monotonic_in_token_counts() {
        let prices = PriceTable::from_prices([(
            "m1",
            ModelPrice {
                prompt_price: 0.5,
                completion_price: 1.5,
            },
        )]);

        let mut previous = 0.0;
        for user in [0, 1, 10, 100, 1_000] {
            for assistant in [0, 5, 50] {
                let counter = fixed_counter(user, assistant);
                let cost = estimate_cost("m1", "text", &prices, &counter).unwrap();
                let more_user = estimate_cost("m1", "text", &prices, &fixed_counter(user + 1, assistant)).unwrap();
                let more_assistant =
                    estimate_cost("m1", "text", &prices, &fixed_counter(user, assistant + 1)).unwrap();

                assert!(cost >= 0.0);
                assert!(more_user >= cost);
                assert!(more_assistant >= cost);
            }
            let cost = estimate_cost("m1", "text", &prices, &fixed_counter(user, 0)).unwrap();
            assert!(cost >= previous);
            previous = cost;
        }
    }

    #[test]
    fn test_counter_receives_split_segments() {
        let prices = test_table();
        let seen = std::cell::RefCell::new(Vec::new());
        let counter = |model: &str, text: &str| -> Result<usize, AppError> {
            seen.borrow_mut().push((model.to_string(), text.to_string()));
            Ok(0)
        };

        estimate_cost("m1", "Hello\n## ASSISTANT\nBonjour", &prices, &counter).unwrap();

        let seen = seen.into_inner();
        assert_eq!(seen.len(), 2);
        assert_eq!(seen[0], ("m1".to_string(), "Hello".to_string()));
        assert_eq!(
            seen[1].1,
            format!("{} {} Bonjour", ASSISTANT_MARKER, DEFAULT_INSTRUCTION)
        );
    }

    #[test]
    fn test_custom_splitter_seed() {
        let prices = test_table();
        let counter = |_: &str, text: &str| -> Result<usize, AppError> {
            Ok(text.split_whitespace().count())
        };
        let estimator =
            CostEstimator::new(&prices, &counter).with_splitter(Splitter::with_seed(["Translate:"]));

        let breakdown = estimator.breakdown("m1", "a b\n## ASSISTANT\nc").unwrap();

        assert_eq!(breakdown.user_tokens, 2);
        assert_eq!(breakdown.assistant_tokens, 2);
    }
}
