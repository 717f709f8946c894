//! Black Cable CLI - Bundle quotes and coverage checks from the terminal.
//!
//! # Usage
//!
//! ```bash
//! # List the services on offer
//! bc-cli catalog
//!
//! # Price a bundle
//! bc-cli quote internet tv phone
//!
//! # Same, as the JSON summary the contact flow receives
//! bc-cli quote internet tv --json
//!
//! # Check availability for a ZIP code
//! bc-cli coverage 10001
//! ```

#![cfg_attr(not(test), forbid(unsafe_code))]

use clap::{Parser, Subcommand};

mod commands;

#[derive(Parser)]
#[command(name = "bc-cli")]
#[command(author, version, about = "Black Cable CLI tools")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List the services on offer
    Catalog,
    /// Price a bundle of services
    Quote {
        /// Service IDs, in the order they are added
        #[arg(required = true)]
        ids: Vec<String>,

        /// Print the contact hand-off summary as JSON
        #[arg(long)]
        json: bool,
    },
    /// Check service availability for a ZIP code
    Coverage {
        /// 5-digit ZIP code
        zip: String,
    },
}

fn main() {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let result: Result<(), Box<dyn std::error::Error>> = run(cli);

    if let Err(e) = result {
        tracing::error!("Command failed: {e}");
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    let mut out = std::io::stdout().lock();
    match cli.command {
        Commands::Catalog => commands::catalog::list(&mut out)?,
        Commands::Quote { ids, json } => commands::quote::quote(&mut out, &ids, json)?,
        Commands::Coverage { zip } => commands::coverage::check(&mut out, &zip)?,
    }
    Ok(())
}
