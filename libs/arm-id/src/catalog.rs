//! Registry of every typed resource ID known to this crate.

use crate::types::*;
use crate::{IdError, IdSchema, TypedResourceId};

static SCHEMAS: &[IdSchema] = &[
    SubscriptionId::SCHEMA,
    ResourceGroupId::SCHEMA,
    ManagementGroupId::SCHEMA,
    BillingAccountId::SCHEMA,
    BillingDepartmentId::SCHEMA,
    SecurityCenterPricingId::SCHEMA,
    VirtualNetworkId::SCHEMA,
    SubnetId::SCHEMA,
    StorageAccountId::SCHEMA,
    KeyVaultId::SCHEMA,
    KeyVaultDiagnosticSettingId::SCHEMA,
    WorkspaceId::SCHEMA,
    ManagedInstanceId::SCHEMA,
    ManagedDatabaseId::SCHEMA,
    ServiceBusTopicId::SCHEMA,
    ServiceBusSubscriptionId::SCHEMA,
    BotServiceId::SCHEMA,
    BotConnectionId::SCHEMA,
];

/// Returns every registered schema.
pub fn all() -> &'static [IdSchema] {
    SCHEMAS
}

/// Finds the schema registered under `kind`.
pub fn lookup(kind: &str) -> Option<&'static IdSchema> {
    SCHEMAS.iter().find(|schema| schema.kind == kind)
}

/// Returns the schemas that accept `input`, paired with the parsed values.
pub fn detect(input: &str) -> Vec<(&'static IdSchema, Vec<String>)> {
    SCHEMAS
        .iter()
        .filter_map(|schema| schema.parse(input).ok().map(|values| (schema, values)))
        .collect()
}

/// Parses `input` against the schema registered under `kind`.
///
/// Returns `None` when no schema has that kind.
pub fn parse(kind: &str, input: &str) -> Option<Result<Vec<String>, IdError>> {
    lookup(kind).map(|schema| schema.parse(input))
}
