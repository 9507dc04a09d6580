use super::Context;
use anyhow::Result;
use colored::Colorize;
use enzo::config::Config;
use enzo::logging::mask_api_key;
use tracing::info;

/// Execute the config show command
///
/// Displays the effective configuration with secrets masked
pub fn show(ctx: &Context) -> Result<()> {
    info!("Loading configuration for display");

    let cfg = ctx.load_config()?;
    let sanitized = sanitize_secrets(&cfg);

    println!("{}", "Current Configuration:".green().bold());
    println!();

    let toml_string = toml::to_string_pretty(&sanitized)?;
    println!("{}", toml_string);

    Ok(())
}

/// Execute the config validate command
pub fn validate(ctx: &Context) -> Result<()> {
    println!("{}", "Validating configuration...".yellow());

    let cfg = ctx.load_config()?;

    println!("{}", "✓ Configuration is valid".green());
    println!();
    println!("{}", "Summary:".bold());
    println!("  Price Table: {}", ctx.prices_path(&cfg).display());
    println!("  Language: {}", cfg.translation.language);
    println!("  Tone: {}", cfg.translation.tone);

    info!("Configuration validation successful");
    Ok(())
}

fn sanitize_secrets(cfg: &Config) -> Config {
    let mut sanitized = cfg.clone();
    sanitized.openai.api_key = mask_api_key(&sanitized.openai.api_key);
    sanitized
}
