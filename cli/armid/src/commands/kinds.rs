//! Kinds command (catalog listing).

use anyhow::Result;
use arm_id::{catalog, IdSchema, IdScope};
use clap::Args;
use serde::Serialize;
use tabled::Tabled;

use crate::output::print_output;

use super::CommandContext;

/// List the known resource kinds.
#[derive(Debug, Args)]
pub struct KindsCommand {
    /// Only list kinds under this provider namespace.
    #[arg(long)]
    provider: Option<String>,
}

#[derive(Debug, Clone, Serialize, Tabled)]
struct KindRow {
    #[tabled(rename = "Kind")]
    kind: &'static str,

    #[tabled(rename = "Type")]
    type_name: &'static str,

    #[tabled(rename = "Scope")]
    scope: &'static str,

    #[tabled(rename = "Template")]
    template: String,
}

impl From<&IdSchema> for KindRow {
    fn from(schema: &IdSchema) -> Self {
        Self {
            kind: schema.kind,
            type_name: schema.type_name,
            scope: scope_name(schema.scope),
            template: schema.template(),
        }
    }
}

fn scope_name(scope: IdScope) -> &'static str {
    match scope {
        IdScope::Tenant => "tenant",
        IdScope::Subscription => "subscription",
        IdScope::ResourceGroup => "resource_group",
    }
}

impl KindsCommand {
    pub fn run(self, ctx: &CommandContext) -> Result<()> {
        let rows = kind_rows(self.provider.as_deref());
        print_output(&rows, ctx.format);
        Ok(())
    }
}

fn kind_rows(provider: Option<&str>) -> Vec<KindRow> {
    catalog::all()
        .iter()
        .filter(|schema| match provider {
            Some(namespace) => schema.providers.iter().any(|p| p.namespace == namespace),
            None => true,
        })
        .map(KindRow::from)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_rows_cover_catalog() {
        assert_eq!(kind_rows(None).len(), catalog::all().len());
    }

    #[test]
    fn test_kind_rows_filter_by_provider() {
        let rows = kind_rows(Some("Microsoft.Billing"));
        let kinds: Vec<_> = rows.iter().map(|row| row.kind).collect();
        assert_eq!(kinds, vec!["billing_account", "billing_department"]);
        assert_eq!(rows[0].scope, "tenant");
        assert_eq!(
            rows[0].template,
            "/providers/Microsoft.Billing/billingAccounts/{name}"
        );
    }

    #[test]
    fn test_kind_rows_match_secondary_provider() {
        let rows = kind_rows(Some("Microsoft.Insights"));
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].kind, "key_vault_diagnostic_setting");
    }
}
