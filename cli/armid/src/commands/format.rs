//! Format command (field values to ID string).

use std::collections::BTreeMap;

use anyhow::Result;
use arm_id::IdSchema;
use clap::Args;
use serde::Serialize;
use tracing::debug;

use crate::error::CliError;
use crate::output::{print_single, OutputFormat};

use super::{require_schema, CommandContext};

/// Build a resource ID from its fields.
#[derive(Debug, Args)]
pub struct FormatCommand {
    /// Resource kind (see `armid kinds`).
    kind: String,

    /// Field values as name=value, e.g. resource_group=rg1.
    #[arg(required = true)]
    fields: Vec<String>,
}

#[derive(Debug, Serialize)]
struct FormatView {
    kind: &'static str,
    id: String,
}

impl FormatCommand {
    pub fn run(self, ctx: &CommandContext) -> Result<()> {
        let schema = require_schema(&self.kind)?;
        let values = ordered_values(schema, &self.fields)?;
        let id = schema.format(&values);
        debug!(kind = schema.kind, %id, "Formatted resource ID");

        match ctx.format {
            OutputFormat::Json => print_single(&FormatView {
                kind: schema.kind,
                id,
            }),
            OutputFormat::Table => println!("{}", id),
        }

        Ok(())
    }
}

/// Turns `name=value` assignments into values ordered by the schema fields.
fn ordered_values(schema: &IdSchema, assignments: &[String]) -> Result<Vec<String>, CliError> {
    let fields = schema.fields();
    let mut provided = BTreeMap::new();

    for assignment in assignments {
        let Some((name, value)) = assignment.split_once('=') else {
            return Err(CliError::invalid_field(assignment, "expected name=value"));
        };
        if !fields.iter().any(|field| *field == name) {
            return Err(CliError::invalid_field(
                assignment,
                format!("{} has no field {:?}", schema.kind, name),
            ));
        }
        if value.is_empty() || value.contains('/') {
            return Err(CliError::invalid_field(
                assignment,
                "value must be non-empty and must not contain '/'",
            ));
        }
        if provided.insert(name, value).is_some() {
            return Err(CliError::invalid_field(assignment, "field given more than once"));
        }
    }

    fields
        .iter()
        .map(|field| {
            provided
                .get(field)
                .map(|value| value.to_string())
                .ok_or_else(|| CliError::invalid_field(*field, "missing value"))
        })
        .collect()
}
