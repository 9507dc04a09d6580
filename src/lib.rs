pub mod config;
pub mod conversation;
pub mod currency;
pub mod error;
pub mod logging;
pub mod models;
pub mod pricing;
pub mod providers;
pub mod transcript;
pub mod translation;

pub use logging::init_tracing;
