//! Context commands (saved defaults for format and logging).

use anyhow::Result;
use clap::{ArgAction, Args, Subcommand};
use serde::Serialize;

use crate::config::{config_path, Config};
use crate::output::{print_single, print_success, OutputFormat};

use super::CommandContext;

/// Manage saved CLI defaults.
#[derive(Debug, Args)]
pub struct ContextCommand {
    #[command(subcommand)]
    command: ContextSubcommand,
}

#[derive(Debug, Subcommand)]
enum ContextSubcommand {
    /// Show the saved defaults.
    Show,

    /// Set the default output format.
    SetFormat {
        #[arg(value_enum)]
        format: OutputFormat,
    },

    /// Set the default log level.
    SetLogLevel {
        #[arg(value_parser = ["trace", "debug", "info", "warn", "error"])]
        level: String,
    },

    /// Set whether logs are emitted as JSON lines.
    SetLogJson {
        #[arg(action = ArgAction::Set)]
        enabled: bool,
    },

    /// Reset all defaults.
    Clear,
}

#[derive(Debug, Serialize)]
struct ContextView {
    path: String,
    format: &'static str,
    log_level: String,
    log_json: bool,
}

impl ContextCommand {
    pub fn run(self, ctx: CommandContext) -> Result<()> {
        match self.command {
            ContextSubcommand::Show => show(ctx),
            ContextSubcommand::SetFormat { format } => {
                update(ctx, |config| config.format = format)
            }
            ContextSubcommand::SetLogLevel { level } => {
                update(ctx, |config| config.log_level = level)
            }
            ContextSubcommand::SetLogJson { enabled } => {
                update(ctx, |config| config.log_json = enabled)
            }
            ContextSubcommand::Clear => update(ctx, |config| *config = Config::default()),
        }
    }
}

fn show(ctx: CommandContext) -> Result<()> {
    let view = ContextView {
        path: config_path()?.display().to_string(),
        format: ctx.config.format.as_str(),
        log_level: ctx.config.log_level.clone(),
        log_json: ctx.config.log_json,
    };

    match ctx.format {
        OutputFormat::Json => print_single(&view),
        OutputFormat::Table => {
            println!("path: {}", view.path);
            println!("format: {}", view.format);
            println!("log_level: {}", view.log_level);
            println!("log_json: {}", view.log_json);
        }
    }

    Ok(())
}

fn update(mut ctx: CommandContext, apply: impl FnOnce(&mut Config)) -> Result<()> {
    apply(&mut ctx.config);
    let path = ctx.config.save()?;

    match ctx.format {
        OutputFormat::Json => print_single(&serde_json::json!({ "ok": true })),
        OutputFormat::Table => print_success(&format!("Saved defaults to {}", path.display())),
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[derive(Debug, Parser)]
    struct TestCli {
        #[command(flatten)]
        context: ContextCommand,
    }

    fn parse(args: &[&str]) -> Result<ContextSubcommand, clap::Error> {
        let args = std::iter::once("context").chain(args.iter().copied());
        TestCli::try_parse_from(args).map(|cli| cli.context.command)
    }

    #[test]
    fn test_set_log_json() {
        assert!(matches!(
            parse(&["set-log-json", "true"]),
            Ok(ContextSubcommand::SetLogJson { enabled: true })
        ));
        assert!(matches!(
            parse(&["set-log-json", "false"]),
            Ok(ContextSubcommand::SetLogJson { enabled: false })
        ));
        assert!(parse(&["set-log-json", "maybe"]).is_err());
    }

    #[test]
    fn test_set_format_validates_value() {
        assert!(matches!(
            parse(&["set-format", "json"]),
            Ok(ContextSubcommand::SetFormat {
                format: OutputFormat::Json
            })
        ));
        assert!(parse(&["set-format", "yaml"]).is_err());
    }
}
