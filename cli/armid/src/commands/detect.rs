//! Detect command (which kinds accept an ID).

use anyhow::Result;
use arm_id::catalog;
use clap::Args;
use serde::Serialize;
use tabled::Tabled;

use crate::error::CliError;
use crate::output::print_output;

use super::CommandContext;

/// Find the resource kinds that accept an ID.
#[derive(Debug, Args)]
pub struct DetectCommand {
    /// The resource ID to classify.
    id: String,
}

#[derive(Debug, Clone, Serialize, Tabled)]
struct DetectRow {
    #[tabled(rename = "Kind")]
    kind: &'static str,

    #[tabled(rename = "Type")]
    type_name: &'static str,

    #[tabled(rename = "Name")]
    name: String,
}

impl DetectCommand {
    pub fn run(self, ctx: &CommandContext) -> Result<()> {
        let rows = detect_rows(&self.id);
        if rows.is_empty() {
            return Err(CliError::NotFound(self.id).into());
        }

        print_output(&rows, ctx.format);
        Ok(())
    }
}

fn detect_rows(id: &str) -> Vec<DetectRow> {
    catalog::detect(id)
        .into_iter()
        .map(|(schema, values)| DetectRow {
            kind: schema.kind,
            type_name: schema.type_name,
            // the innermost segment names the resource itself
            name: values.last().cloned().unwrap_or_default(),
        })
        .collect()
}
