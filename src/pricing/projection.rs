use serde::Serialize;

/// Days used when projecting a monthly cost
pub const DEFAULT_PROJECTION_DAYS: u32 = 30;

/// Cost of repeating one run over a period of daily use
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CostProjection {
    pub per_run: f64,
    pub runs_per_day: u32,
    pub days: u32,
    pub total: f64,
    pub currency: String,
}

impl CostProjection {
    pub fn new(per_run: f64, runs_per_day: u32, days: u32, currency: impl Into<String>) -> Self {
        Self {
            per_run,
            runs_per_day,
            days,
            total: project_cost(per_run, runs_per_day, days),
            currency: currency.into(),
        }
    }

    /// One run on one day
    pub fn single_run(per_run: f64, currency: impl Into<String>) -> Self {
        Self::new(per_run, 1, 1, currency)
    }

    /// Projection over `days` when a daily run count is known, otherwise a single run
    pub fn for_usage(
        per_run: f64,
        runs_per_day: Option<u32>,
        days: u32,
        currency: impl Into<String>,
    ) -> Self {
        match runs_per_day {
            Some(runs) => Self::new(per_run, runs, days, currency),
            None => Self::single_run(per_run, currency),
        }
    }

    /// Same projection expressed in another currency
    pub fn converted(&self, rate: f64, currency: impl Into<String>) -> Self {
        Self {
            per_run: self.per_run * rate,
            runs_per_day: self.runs_per_day,
            days: self.days,
            total: self.total * rate,
            currency: currency.into(),
        }
    }
}

pub fn project_cost(per_run: f64, runs_per_day: u32, days: u32) -> f64 {
    per_run * f64::from(runs_per_day) * f64::from(days)
}
