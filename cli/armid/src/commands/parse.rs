//! Parse command (ID string to components).

use anyhow::Result;
use arm_id::{IdSchema, ResourceId};
use clap::Args;
use serde::Serialize;
use tracing::debug;

use crate::error::CliError;
use crate::output::{print_output, print_single, FieldRow, OutputFormat};

use super::{require_schema, CommandContext};

/// Parse a resource ID.
#[derive(Debug, Args)]
pub struct ParseCommand {
    /// The resource ID to parse.
    id: String,

    /// Parse as this resource kind (see `armid kinds`).
    #[arg(long)]
    kind: Option<String>,

    /// Accept IDs without a subscription (generic parse only).
    #[arg(long, conflicts_with = "kind")]
    tenant: bool,
}

#[derive(Debug, Serialize)]
struct TypedView {
    kind: &'static str,
    id: String,
    fields: Vec<FieldRow>,
}

impl ParseCommand {
    pub fn run(self, ctx: &CommandContext) -> Result<()> {
        match self.kind.as_deref() {
            Some(kind) => parse_typed(ctx, require_schema(kind)?, &self.id),
            None => parse_generic(ctx, &self.id, self.tenant),
        }
    }
}

fn parse_typed(ctx: &CommandContext, schema: &'static IdSchema, input: &str) -> Result<()> {
    debug!(kind = schema.kind, "Parsing typed resource ID");
    let values = schema.parse(input).map_err(CliError::from)?;
    let view = TypedView {
        kind: schema.kind,
        id: schema.format(&values),
        fields: typed_rows(schema, values),
    };

    match ctx.format {
        OutputFormat::Json => print_single(&view),
        OutputFormat::Table => print_output(&view.fields, ctx.format),
    }

    Ok(())
}

fn parse_generic(ctx: &CommandContext, input: &str, tenant: bool) -> Result<()> {
    debug!(tenant, "Parsing generic resource ID");
    let id = if tenant {
        ResourceId::parse_without_subscription(input)
    } else {
        ResourceId::parse(input)
    }
    .map_err(CliError::from)?;

    match ctx.format {
        OutputFormat::Json => print_single(&id),
        OutputFormat::Table => print_output(&generic_rows(&id), ctx.format),
    }

    Ok(())
}

fn typed_rows(schema: &IdSchema, values: Vec<String>) -> Vec<FieldRow> {
    schema
        .fields()
        .into_iter()
        .zip(values)
        .map(|(field, value)| FieldRow::new(field, value))
        .collect()
}

fn generic_rows(id: &ResourceId) -> Vec<FieldRow> {
    let mut rows = Vec::new();
    if !id.subscription_id.is_empty() {
        rows.push(FieldRow::new("subscription_id", &id.subscription_id));
    }
    if let Some(rg) = &id.resource_group {
        rows.push(FieldRow::new("resource_group", rg));
    }
    if let Some(provider) = &id.provider {
        rows.push(FieldRow::new("provider", provider));
    }
    if let Some(provider) = &id.secondary_provider {
        rows.push(FieldRow::new("secondary_provider", provider));
    }
    for (key, value) in &id.path {
        rows.push(FieldRow::new(format!("path.{key}"), value));
    }
    rows
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generic_rows() {
        let id = ResourceId::parse(
            "/subscriptions/sub1/resourceGroups/rg1/providers/Microsoft.Network/virtualNetworks/vnet1/subnets/sn1",
        )
        .unwrap();
        let rows = generic_rows(&id);
        assert_eq!(
            rows,
            vec![
                FieldRow::new("subscription_id", "sub1"),
                FieldRow::new("resource_group", "rg1"),
                FieldRow::new("provider", "Microsoft.Network"),
                FieldRow::new("path.subnets", "sn1"),
                FieldRow::new("path.virtualNetworks", "vnet1"),
            ]
        );
    }

    #[test]
    fn test_generic_rows_tenant() {
        let id = ResourceId::parse_without_subscription(
            "/providers/Microsoft.Management/managementGroups/mg1",
        )
        .unwrap();
        let rows = generic_rows(&id);
        assert_eq!(rows[0], FieldRow::new("provider", "Microsoft.Management"));
        assert_eq!(rows.len(), 2);
    }

    #[test]
    fn test_typed_rows() {
        let schema = require_schema("bot_connection").unwrap();
        let values = schema
            .parse("/subscriptions/sub1/resourceGroups/rg1/providers/Microsoft.BotService/botServices/bot1/connections/conn1")
            .unwrap();
        let rows = typed_rows(schema, values);
        assert_eq!(rows[2], FieldRow::new("bot_service_name", "bot1"));
        assert_eq!(rows[3], FieldRow::new("connection_name", "conn1"));
    }
}
