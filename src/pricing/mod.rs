pub mod calculator;
pub mod models;
pub mod projection;
pub mod table;
pub mod tokenizer;

pub use calculator::{estimate_cost, CostEstimator};
pub use models::{CostBreakdown, ModelPrice};
pub use projection::{project_cost, CostProjection, DEFAULT_PROJECTION_DAYS};
pub use table::{PriceTable, PricingDataFile};
pub use tokenizer::{TiktokenCounter, TokenCounter};
