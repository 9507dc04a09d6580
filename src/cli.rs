use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "enzo", version, about = "Enzo - translation chat with cost estimation")]
pub struct Cli {
    /// Configuration file path
    #[arg(short, long, default_value = "enzo.toml", global = true)]
    pub config: PathBuf,

    /// Price table JSON file (overrides pricing.path)
    #[arg(short, long, global = true, env = "ENZO_PRICES")]
    pub prices: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Interactive translation chat (default)
    Translate {
        /// Model to use (defaults to the first model in the price table)
        #[arg(short, long)]
        model: Option<String>,

        /// Target language (see `enzo languages`)
        #[arg(short, long)]
        language: Option<String>,

        /// Translation tone (see `enzo languages`)
        #[arg(short, long)]
        tone: Option<String>,

        /// Extra rules, e.g. terms to avoid or prefer
        #[arg(short, long)]
        rules: Option<String>,
    },

    /// Estimate what a transcript costs for a model
    Cost {
        /// Model to price (defaults to the first model in the price table)
        #[arg(short, long)]
        model: Option<String>,

        /// Transcript file; reads stdin when omitted
        file: Option<PathBuf>,

        /// Project the cost over this many runs per day
        #[arg(short, long)]
        runs_per_day: Option<u32>,

        /// Number of days for the projection
        #[arg(short, long, default_value = "30")]
        days: u32,

        /// Convert the result into this currency (e.g. EUR)
        #[arg(long)]
        currency: Option<String>,

        /// Instruction that seeds the assistant segment instead of the default
        #[arg(long)]
        seed: Option<String>,

        /// Print the result as JSON
        #[arg(long)]
        json: bool,
    },

    /// List models and their prices
    Models,

    /// List available target languages and tones
    Languages,

    /// Test configuration and price table validity
    Test,

    /// Configuration management commands
    Config {
        #[command(subcommand)]
        action: ConfigCommands,
    },

    /// Show version information
    Version,
}

#[derive(Subcommand, Debug, Clone)]
pub enum ConfigCommands {
    /// Display current configuration (with secrets masked)
    Show,

    /// Validate configuration file
    Validate,
}

impl Cli {
    /// Get the command to execute, defaulting to Translate if none provided
    pub fn get_command(&self) -> Commands {
        self.command.clone().unwrap_or(Commands::Translate {
            model: None,
            language: None,
            tone: None,
            rules: None,
        })
    }
}
