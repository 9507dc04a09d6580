use anyhow::Result;
use clap::Parser;

mod cli;
mod commands;

use enzo::init_tracing;

#[tokio::main]
async fn main() -> Result<()> {
    // Parse CLI arguments
    let args = cli::Cli::parse();

    init_tracing("info");

    let ctx = commands::Context {
        config_path: args.config.clone(),
        prices_path: args.prices.clone(),
    };

    // Dispatch to appropriate command handler
    match args.get_command() {
        cli::Commands::Translate {
            model,
            language,
            tone,
            rules,
        } => {
            commands::translate::execute(&ctx, model, language, tone, rules).await?;
        }
        cli::Commands::Cost {
            model,
            file,
            runs_per_day,
            days,
            currency,
            seed,
            json,
        } => {
            let options = commands::cost::CostOptions {
                model,
                file,
                runs_per_day,
                days,
                currency,
                seed,
                json,
            };
            commands::cost::execute(&ctx, options).await?;
        }
        cli::Commands::Models => {
            commands::models::execute(&ctx)?;
        }
        cli::Commands::Languages => {
            commands::languages::execute();
        }
        cli::Commands::Test => {
            commands::test::execute(&ctx)?;
        }
        cli::Commands::Config { action } => match action {
            cli::ConfigCommands::Show => commands::config::show(&ctx)?,
            cli::ConfigCommands::Validate => commands::config::validate(&ctx)?,
        },
        cli::Commands::Version => {
            println!("Enzo v{}", env!("CARGO_PKG_VERSION"));
        }
    }

    Ok(())
}
