use serde::{Deserialize, Serialize};

/// Per-model rates, in price-table currency per 1000 tokens
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ModelPrice {
    /// Rate applied to the user (prompt) segment
    pub prompt_price: f64,
    /// Rate applied to the assistant (completion) segment
    pub completion_price: f64,
}

/// Cost breakdown for a transcript
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct CostBreakdown {
    pub user_tokens: usize,
    pub assistant_tokens: usize,
    pub prompt_cost: f64,
    pub completion_cost: f64,
    pub total_cost: f64,
}

impl CostBreakdown {
    /// Price token counts with the given rates
    pub fn from_tokens(user_tokens: usize, assistant_tokens: usize, price: &ModelPrice) -> Self {
        let mut breakdown = Self {
            user_tokens,
            assistant_tokens,
            prompt_cost: user_tokens as f64 * price.prompt_price / 1000.0,
            completion_cost: assistant_tokens as f64 * price.completion_price / 1000.0,
            total_cost: 0.0,
        };
        breakdown.calculate_total();
        breakdown
    }

    /// Calculate total cost from components
    pub fn calculate_total(&mut self) {
        self.total_cost = self.prompt_cost + self.completion_cost;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_tokens() {
        let price = ModelPrice {
            prompt_price: 0.03,
            completion_price: 0.06,
        };
        let breakdown = CostBreakdown::from_tokens(1000, 500, &price);

        assert_eq!(breakdown.user_tokens, 1000);
        assert_eq!(breakdown.assistant_tokens, 500);
        assert!((breakdown.prompt_cost - 0.03).abs() < 1e-12);
        assert!((breakdown.completion_cost - 0.03).abs() < 1e-12);
        assert!((breakdown.total_cost - 0.06).abs() < 1e-12);
    }

    #[test]
    fn test_zero_tokens_cost_nothing() {
        let price = ModelPrice {
            prompt_price: 1.5,
            completion_price: 2.0,
        };
        assert_eq!(CostBreakdown::from_tokens(0, 0, &price), CostBreakdown::default());
    }
}
