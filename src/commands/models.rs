use super::Context;
use anyhow::Result;
use colored::Colorize;

/// Execute the models command
///
/// Prints every model in the price table with its per-1000-token rates
pub fn execute(ctx: &Context) -> Result<()> {
    let cfg = ctx.load_config()?;
    let prices = ctx.load_prices(&cfg)?;

    println!(
        "{} ({} per 1000 tokens)",
        "Models:".bold(),
        cfg.currency.source
    );
    for (name, price) in prices.iter() {
        println!(
            "  {:<28} prompt {:>10}  completion {:>10}",
            name.cyan(),
            price.prompt_price,
            price.completion_price
        );
    }

    Ok(())
}
