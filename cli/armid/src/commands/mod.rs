//! CLI commands.

mod context;
mod detect;
mod format;
mod kinds;
mod parse;
mod validate;

use anyhow::Result;
use arm_id::{catalog, IdSchema};
use clap::{Parser, Subcommand};
use tracing::{debug, warn};

use crate::config::Config;
use crate::error::CliError;
use crate::logging;
use crate::output::OutputFormat;

/// armid - Parse, format, and validate Azure resource IDs.
#[derive(Debug, Parser)]
#[command(name = "armid")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Output format.
    #[arg(long, global = true, env = "ARMID_FORMAT", value_enum)]
    format: Option<OutputFormat>,

    /// Log level (trace, debug, info, warn, error). RUST_LOG takes precedence.
    #[arg(long, global = true, env = "ARMID_LOG_LEVEL")]
    log_level: Option<String>,

    /// Emit logs as JSON lines on stderr.
    #[arg(long, global = true)]
    log_json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Parse a resource ID into its components.
    Parse(parse::ParseCommand),

    /// Build a resource ID from field values.
    Format(format::FormatCommand),

    /// Check that resource IDs are well-formed.
    Validate(validate::ValidateCommand),

    /// List the known resource kinds.
    Kinds(kinds::KindsCommand),

    /// Find the resource kinds that accept an ID.
    Detect(detect::DetectCommand),

    /// Show or update saved CLI defaults.
    Context(context::ContextCommand),

    /// Show CLI version.
    Version,
}

impl Cli {
    /// Run the CLI command.
    pub fn run(self) -> Result<()> {
        let (config, load_error) = Config::load_or_default();

        let log_level = self.log_level.as_deref().unwrap_or(&config.log_level);
        logging::init(log_level, self.log_json || config.log_json);

        if let Some(err) = load_error {
            warn!(error = %format!("{err:#}"), "Ignoring saved config, using defaults");
        }

        let format = self.format.unwrap_or(config.format);
        debug!(?format, "Configuration loaded");

        let ctx = CommandContext { config, format };

        match self.command {
            Commands::Parse(cmd) => cmd.run(&ctx),
            Commands::Format(cmd) => cmd.run(&ctx),
            Commands::Validate(cmd) => cmd.run(&ctx),
            Commands::Kinds(cmd) => cmd.run(&ctx),
            Commands::Detect(cmd) => cmd.run(&ctx),
            Commands::Context(cmd) => cmd.run(ctx),
            Commands::Version => {
                println!("armid {}", env!("CARGO_PKG_VERSION"));
                Ok(())
            }
        }
    }
}

/// Shared command context.
pub struct CommandContext {
    pub config: Config,
    pub format: OutputFormat,
}

/// Look up a catalog schema, failing with a CLI error for unknown kinds.
fn require_schema(kind: &str) -> Result<&'static IdSchema, CliError> {
    catalog::lookup(kind).ok_or_else(|| CliError::UnknownKind(kind.to_string()))
}
