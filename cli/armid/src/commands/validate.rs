//! Validate command.

use anyhow::Result;
use arm_id::{IdError, IdSchema, ResourceId};
use clap::Args;
use serde::Serialize;
use tabled::Tabled;
use tracing::{debug, info};

use crate::error::CliError;
use crate::output::print_output;

use super::{require_schema, CommandContext};

/// Validate one or more resource IDs.
#[derive(Debug, Args)]
pub struct ValidateCommand {
    /// Resource IDs to check.
    #[arg(required = true)]
    ids: Vec<String>,

    /// Require every ID to be of this resource kind.
    #[arg(long)]
    kind: Option<String>,
}

#[derive(Debug, Clone, Serialize, Tabled)]
struct ValidationRow {
    #[tabled(rename = "ID")]
    id: String,

    #[tabled(rename = "Valid")]
    valid: bool,

    #[tabled(rename = "Error", display = "display_option")]
    error: Option<String>,
}

fn display_option(opt: &Option<String>) -> String {
    opt.as_deref().unwrap_or("-").to_string()
}

impl ValidateCommand {
    pub fn run(self, ctx: &CommandContext) -> Result<()> {
        let schema = self.kind.as_deref().map(require_schema).transpose()?;
        let rows = validate_all(schema, &self.ids);
        print_output(&rows, ctx.format);

        let invalid = rows.iter().filter(|row| !row.valid).count();
        info!(total = rows.len(), invalid, "Validation finished");
        if invalid > 0 {
            return Err(CliError::ValidationFailed {
                invalid,
                total: rows.len(),
            }
            .into());
        }

        Ok(())
    }
}

fn validate_all(schema: Option<&IdSchema>, ids: &[String]) -> Vec<ValidationRow> {
    ids.iter()
        .map(|id| {
            let result = check(schema, id);
            if let Err(err) = &result {
                debug!(%id, error = %err, "Invalid resource ID");
            }
            ValidationRow {
                id: id.clone(),
                valid: result.is_ok(),
                error: result.err().map(|err| err.to_string()),
            }
        })
        .collect()
}

fn check(schema: Option<&IdSchema>, id: &str) -> Result<(), IdError> {
    match schema {
        Some(schema) => schema.parse(id).map(|_| ()),
        None => ResourceId::parse(id).map(|_| ()),
    }
}
