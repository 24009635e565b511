//! Lychee Market CLI - Catalog inspection and store simulations.
//!
//! # Usage
//!
//! ```bash
//! # Print the catalog (built-in seed, or a YAML seed file)
//! lm-cli catalog
//! lm-cli catalog --file seed.yaml
//!
//! # Run a scripted store session and print the accounting report
//! lm-cli simulate
//! ```
//!
//! # Commands
//!
//! - `catalog` - Print the product catalog with converted prices
//! - `simulate` - Drive a full order lifecycle and print the P/L report
//!
//! # Environment
//!
//! - `LM_SEED_FILE` - Default catalog seed file (overridden by `--file`)
//! - `LM_DISCOUNT` - Flat checkout discount (default: 20)

#![cfg_attr(not(test), forbid(unsafe_code))]

use std::path::PathBuf;

use clap::{Parser, Subcommand};

mod commands;
mod config;

use config::CliConfig;

#[derive(Parser)]
#[command(name = "lm-cli")]
#[command(author, version, about = "Lychee Market CLI tools")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the product catalog
    Catalog {
        /// YAML seed file to load instead of the built-in catalog
        #[arg(short, long)]
        file: Option<PathBuf>,
    },
    /// Run a scripted store session and print the accounting report
    Simulate {
        /// YAML seed file to load instead of the built-in catalog
        #[arg(short, long)]
        file: Option<PathBuf>,
    },
}

fn main() {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        tracing::error!("Command failed: {e}");
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    let config = CliConfig::from_env()?;

    match cli.command {
        Commands::Catalog { file } => {
            let catalog = commands::load_catalog(file.or(config.seed_file))?;
            commands::catalog::print(&catalog);
        }
        Commands::Simulate { file } => {
            let catalog = commands::load_catalog(file.or(config.seed_file))?;
            commands::simulate::run(catalog, config.discount)?;
        }
    }
    Ok(())
}
