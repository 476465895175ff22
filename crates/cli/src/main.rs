//! Payroll Relay CLI - Offline tools for operators.
//!
//! # Usage
//!
//! ```bash
//! # Show the notifications a spreadsheet would produce, in Spanish
//! relay-cli preview payroll.csv
//!
//! # Same, in Portuguese
//! relay-cli preview payroll.csv --locale pt
//!
//! # Validate the relay configuration in the environment / .env
//! relay-cli check-config
//! ```
//!
//! # Commands
//!
//! - `preview` - Compose every notification without contacting Slack
//! - `check-config` - Load the relay configuration and report problems

#![cfg_attr(not(test), forbid(unsafe_code))]

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use payroll_relay_core::Locale;

mod commands;

#[derive(Parser)]
#[command(name = "relay-cli")]
#[command(author, version, about = "Payroll Relay CLI tools")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Preview the notifications a spreadsheet would send
    Preview {
        /// Path to the payroll spreadsheet (CSV)
        file: PathBuf,

        /// Message locale (`es`, `pt`, `en`); defaults to `RELAY_LOCALE` or `es`
        #[arg(short, long)]
        locale: Option<Locale>,

        /// Signature override; defaults to `RELAY_SIGN_OFF` or the locale's
        #[arg(short, long)]
        sign_off: Option<String>,
    },
    /// Load the relay configuration and report errors
    CheckConfig,
}

fn main() {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    let result: Result<(), Box<dyn std::error::Error>> = run(cli);

    if let Err(e) = result {
        tracing::error!("Command failed: {e}");
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    match cli.command {
        Commands::Preview {
            file,
            locale,
            sign_off,
        } => commands::preview::run(&file, locale, sign_off)?,
        Commands::CheckConfig => commands::check::run()?,
    }
    Ok(())
}
