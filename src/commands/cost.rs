use super::{resolve_model, Context};
use anyhow::{Context as _, Result};
use colored::Colorize;
use enzo::currency::{convert_projection, HttpCurrencyConverter};
use enzo::pricing::{CostBreakdown, CostEstimator, CostProjection, TiktokenCounter};
use enzo::transcript::{self, Splitter};
use serde::Serialize;
use std::path::PathBuf;
use tracing::info;

pub struct CostOptions {
    pub model: Option<String>,
    pub file: Option<PathBuf>,
    pub runs_per_day: Option<u32>,
    pub days: u32,
    pub currency: Option<String>,
    pub seed: Option<String>,
    pub json: bool,
}

#[derive(Debug, Serialize)]
struct CostReport {
    model: String,
    currency: String,
    #[serde(flatten)]
    breakdown: CostBreakdown,
    #[serde(skip_serializing_if = "Option::is_none")]
    projection: Option<CostProjection>,
    #[serde(skip_serializing_if = "Option::is_none")]
    converted: Option<CostProjection>,
}

/// Execute the cost command
pub async fn execute(ctx: &Context, options: CostOptions) -> Result<()> {
    let cfg = ctx.load_config()?;
    let prices = ctx.load_prices(&cfg)?;
    let model = resolve_model(&prices, options.model)?;
    let text = match &options.file {
        Some(path) => transcript::read_file(path)?,
        None => transcript::read_from(std::io::stdin().lock())
            .context("Failed to read transcript from stdin")?,
    };

    let counter = TiktokenCounter::new();
    let mut estimator = CostEstimator::new(&prices, &counter);
    if let Some(seed) = &options.seed {
        estimator = estimator.with_splitter(Splitter::with_instruction(seed.as_str()));
    }
    let breakdown = estimator.breakdown(&model, &text)?;
    info!(model = %model, total_cost = breakdown.total_cost, "Estimated transcript cost");

    let source = cfg.currency.source.clone();
    let projection = options
        .runs_per_day
        .map(|runs| CostProjection::new(breakdown.total_cost, runs, options.days, source.as_str()));

    let converted = match &options.currency {
        Some(target) => {
            let converter = HttpCurrencyConverter::new(cfg.currency.clone())?;
            let base = CostProjection::for_usage(
                breakdown.total_cost,
                options.runs_per_day,
                options.days,
                source.as_str(),
            );
            let converted = convert_projection(&converter, &base, target)
                .await
                .with_context(|| format!("Failed to convert {} to {}", source, target))?;
            Some(converted)
        }
        None => None,
    };

    let report = CostReport {
        model,
        currency: source,
        breakdown,
        projection,
        converted,
    };

    if options.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print_report(&report);
    }

    Ok(())
}

fn print_report(report: &CostReport) {
    let b = &report.breakdown;

    println!("{} {}", "Model:".cyan(), report.model);
    println!("  {}: {} tokens -> {:.6} {}", "User", b.user_tokens, b.prompt_cost, report.currency);
    println!(
        "  {}: {} tokens -> {:.6} {}",
        "Assistant", b.assistant_tokens, b.completion_cost, report.currency
    );
    println!(
        "{} {}",
        "Total:".green().bold(),
        format!("{:.6} {}", b.total_cost, report.currency).bold()
    );

    if let Some(p) = &report.projection {
        println!();
        println!(
            "{} {} runs/day over {} days = {:.2} {}",
            "Projection:".cyan(),
            p.runs_per_day,
            p.days,
            p.total,
            p.currency
        );
    }

    if let Some(c) = &report.converted {
        println!("{} {:.2} {}", "Converted:".cyan(), c.total, c.currency);
    }
}
