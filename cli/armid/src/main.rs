//! armid - CLI for Azure Resource Manager resource IDs
//!
//! Parses, formats, and validates resource IDs against the typed catalog in
//! `arm-id`, for use from scripts and when debugging Terraform imports.

use anyhow::Result;
use clap::Parser;

mod commands;
mod config;
mod error;
mod logging;
mod output;

use commands::Cli;

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Run the command
    if let Err(e) = cli.run() {
        // Print error in a user-friendly way
        error::print_error(&e);
        std::process::exit(1);
    }

    Ok(())
}
