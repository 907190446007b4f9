//! The generic, untyped resource ID.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::segments::tokenize;
use crate::{IdError, ResourceGroupId};

const SUBSCRIPTIONS_KEY: &str = "subscriptions";
const RESOURCE_GROUPS_KEY: &str = "resourceGroups";
/// Some Azure APIs return the resource group key in lowercase.
const RESOURCE_GROUPS_LOWER_KEY: &str = "resourcegroups";
const PROVIDERS_KEY: &str = "providers";

/// A parsed resource ID that has not been matched against a resource type.
///
/// The subscription, resource group and provider namespaces are pulled out
/// of the path; every other `key/value` pair lands in [`ResourceId::path`]
/// until a typed wrapper pops it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResourceId {
    /// Subscription the resource lives in. Empty only for IDs parsed with
    /// [`ResourceId::parse_without_subscription`].
    pub subscription_id: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub resource_group: Option<String>,

    /// Namespace of the first `providers` segment.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub provider: Option<String>,

    /// Namespace of the second `providers` segment. Any further `providers`
    /// segment stays in [`ResourceId::path`].
    #[serde(skip_serializing_if = "Option::is_none")]
    pub secondary_provider: Option<String>,

    /// Remaining segments, keyed by segment name.
    pub path: BTreeMap<String, String>,
}

impl ResourceId {
    /// Parses a subscription-scoped resource ID.
    ///
    /// The first `subscriptions` segment wins; a later one (service bus
    /// topic subscriptions, for instance) is kept in the path as an ordinary
    /// segment.
    pub fn parse(input: &str) -> Result<Self, IdError> {
        let id = Self::build(input)?;
        if id.subscription_id.is_empty() {
            return Err(IdError::MissingSubscription {
                id: input.to_string(),
            });
        }
        Ok(id)
    }

    /// Parses a resource ID that may be tenant-scoped, such as
    /// `/providers/Microsoft.Billing/billingAccounts/123`.
    pub fn parse_without_subscription(input: &str) -> Result<Self, IdError> {
        Self::build(input)
    }

    fn build(input: &str) -> Result<Self, IdError> {
        let mut id = ResourceId::default();

        for segment in tokenize(input)? {
            match segment.key {
                SUBSCRIPTIONS_KEY if id.subscription_id.is_empty() => {
                    id.subscription_id = segment.value.to_string();
                }
                PROVIDERS_KEY if id.provider.is_none() => {
                    id.provider = Some(segment.value.to_string());
                }
                PROVIDERS_KEY if id.secondary_provider.is_none() => {
                    id.secondary_provider = Some(segment.value.to_string());
                }
                key => {
                    id.path.insert(key.to_string(), segment.value.to_string());
                }
            }
        }

        id.resource_group = id
            .path
            .remove(RESOURCE_GROUPS_KEY)
            .or_else(|| id.path.remove(RESOURCE_GROUPS_LOWER_KEY));

        Ok(id)
    }

    /// Removes the segment named `name` from the path and returns its value.
    pub fn pop_segment(&mut self, name: &str) -> Result<String, IdError> {
        self.path
            .remove(name)
            .ok_or_else(|| IdError::MissingSegment {
                name: name.to_string(),
                id: self.to_string_lossy(),
            })
    }

    /// Fails if any segment is left unclaimed. `source` is the ID the
    /// caller parsed, used in the error message.
    pub fn validate_no_empty_segments(&self, source: &str) -> Result<(), IdError> {
        if self.path.is_empty() {
            return Ok(());
        }

        Err(IdError::UnexpectedSegments {
            id: source.to_string(),
            segments: self.path.keys().cloned().collect(),
        })
    }

    /// Returns the ID of the resource group containing this resource.
    pub fn resource_group_id(&self) -> Option<ResourceGroupId> {
        let resource_group = self.resource_group.as_deref()?;
        if self.subscription_id.is_empty() {
            return None;
        }
        Some(ResourceGroupId::new(&self.subscription_id, resource_group))
    }

    /// Best-effort rendering for error messages. Path order is not the
    /// order of the original ID.
    fn to_string_lossy(&self) -> String {
        let mut out = String::new();
        if !self.subscription_id.is_empty() {
            out.push_str(&format!("/{}/{}", SUBSCRIPTIONS_KEY, self.subscription_id));
        }
        if let Some(rg) = &self.resource_group {
            out.push_str(&format!("/{}/{}", RESOURCE_GROUPS_KEY, rg));
        }
        for provider in [&self.provider, &self.secondary_provider].into_iter().flatten() {
            out.push_str(&format!("/{}/{}", PROVIDERS_KEY, provider));
        }
        for (key, value) in &self.path {
            out.push_str(&format!("/{}/{}", key, value));
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SUB: &str = "00000000-0000-0000-0000-000000000000";

    #[test]
    fn test_parse_full_id() {
        let input = format!(
            "/subscriptions/{SUB}/resourceGroups/rg1/providers/Microsoft.Network/virtualNetworks/vnet1/subnets/sn1"
        );
        let id = ResourceId::parse(&input).unwrap();
        assert_eq!(id.subscription_id, SUB);
        assert_eq!(id.resource_group.as_deref(), Some("rg1"));
        assert_eq!(id.provider.as_deref(), Some("Microsoft.Network"));
        assert_eq!(id.secondary_provider, None);
        assert_eq!(id.path.len(), 2);
        assert_eq!(id.path["virtualNetworks"], "vnet1");
        assert_eq!(id.path["subnets"], "sn1");
    }

    #[test]
    fn test_parse_requires_subscription() {
        let err = ResourceId::parse("/resourceGroups/rg1").unwrap_err();
        assert_eq!(
            err,
            IdError::MissingSubscription {
                id: "/resourceGroups/rg1".to_string()
            }
        );
    }

    #[test]
    fn test_parse_empty_input() {
        assert!(matches!(
            ResourceId::parse("").unwrap_err(),
            IdError::MalformedPath { .. }
        ));
    }

    #[test]
    fn test_first_subscription_wins() {
        let input = format!(
            "/subscriptions/{SUB}/resourceGroups/rg1/providers/Microsoft.ServiceBus/namespaces/ns1/topics/t1/subscriptions/s1"
        );
        let id = ResourceId::parse(&input).unwrap();
        assert_eq!(id.subscription_id, SUB);
        assert_eq!(id.path["subscriptions"], "s1");
    }

    #[test]
    fn test_secondary_provider() {
        let input = format!(
            "/subscriptions/{SUB}/resourceGroups/rg1/providers/Microsoft.KeyVault/vaults/v1/providers/Microsoft.Insights/diagnosticSettings/d1"
        );
        let id = ResourceId::parse(&input).unwrap();
        assert_eq!(id.provider.as_deref(), Some("Microsoft.KeyVault"));
        assert_eq!(id.secondary_provider.as_deref(), Some("Microsoft.Insights"));
        assert!(!id.path.contains_key("providers"));
        assert_eq!(id.path.len(), 2);
    }

    #[test]
    fn test_third_provider_stays_in_path() {
        let input = format!(
            "/subscriptions/{SUB}/resourceGroups/rg1/providers/Microsoft.KeyVault/vaults/v1/providers/Microsoft.Insights/diagnosticSettings/d1/providers/Other.Namespace"
        );
        let mut id = ResourceId::parse(&input).unwrap();
        assert_eq!(id.provider.as_deref(), Some("Microsoft.KeyVault"));
        assert_eq!(id.secondary_provider.as_deref(), Some("Microsoft.Insights"));
        assert_eq!(id.path["providers"], "Other.Namespace");

        id.pop_segment("vaults").unwrap();
        id.pop_segment("diagnosticSettings").unwrap();
        assert_eq!(
            id.validate_no_empty_segments(&input).unwrap_err(),
            IdError::UnexpectedSegments {
                id: input.clone(),
                segments: vec!["providers".to_string()],
            }
        );
    }

    #[test]
    fn test_both_resource_group_keys() {
        let input = format!("/subscriptions/{SUB}/resourcegroups/rg2/resourceGroups/rg1");
        let id = ResourceId::parse(&input).unwrap();
        assert_eq!(id.resource_group.as_deref(), Some("rg1"));
        assert_eq!(id.path["resourcegroups"], "rg2");
    }

    #[test]
    fn test_lowercase_resource_groups_alias() {
        let input = format!("/subscriptions/{SUB}/resourcegroups/rg1");
        let id = ResourceId::parse(&input).unwrap();
        assert_eq!(id.resource_group.as_deref(), Some("rg1"));
        assert!(id.path.is_empty());
    }

    #[test]
    fn test_other_casings_stay_in_path() {
        let input = format!("/subscriptions/{SUB}/ResourceGroups/rg1");
        let id = ResourceId::parse(&input).unwrap();
        assert_eq!(id.resource_group, None);
        assert_eq!(id.path["ResourceGroups"], "rg1");
    }

    #[test]
    fn test_duplicate_plain_keys_last_wins() {
        let input = format!("/subscriptions/{SUB}/things/a/things/b");
        let id = ResourceId::parse(&input).unwrap();
        assert_eq!(id.path["things"], "b");
    }

    #[test]
    fn test_parse_without_subscription() {
        let id = ResourceId::parse_without_subscription(
            "/providers/Microsoft.Billing/billingAccounts/123456",
        )
        .unwrap();
        assert!(id.subscription_id.is_empty());
        assert_eq!(id.provider.as_deref(), Some("Microsoft.Billing"));
        assert_eq!(id.path["billingAccounts"], "123456");
    }

    #[test]
    fn test_pop_segment() {
        let input = format!("/subscriptions/{SUB}/resourceGroups/rg1/providers/Microsoft.Sql/servers/s1");
        let mut id = ResourceId::parse(&input).unwrap();

        assert_eq!(id.pop_segment("servers").unwrap(), "s1");
        let err = id.pop_segment("servers").unwrap_err();
        assert_eq!(err.missing_segment(), Some("servers"));
        assert!(id.validate_no_empty_segments(&input).is_ok());
    }

    #[test]
    fn test_leftover_segments_rejected() {
        let input = format!("/subscriptions/{SUB}/resourceGroups/rg1/providers/Microsoft.Sql/servers/s1/databases/db1");
        let mut id = ResourceId::parse(&input).unwrap();
        id.pop_segment("servers").unwrap();

        let err = id.validate_no_empty_segments(&input).unwrap_err();
        assert_eq!(
            err,
            IdError::UnexpectedSegments {
                id: input.clone(),
                segments: vec!["databases".to_string()],
            }
        );
    }

    #[test]
    fn test_resource_group_id() {
        let input = format!("/subscriptions/{SUB}/resourceGroups/rg1/providers/Microsoft.Sql/servers/s1");
        let id = ResourceId::parse(&input).unwrap();
        let rg = id.resource_group_id().unwrap();
        assert_eq!(rg.to_string(), format!("/subscriptions/{SUB}/resourceGroups/rg1"));

        let tenant = ResourceId::parse_without_subscription("/resourceGroups/rg1").unwrap();
        assert!(tenant.resource_group_id().is_none());
    }

    #[test]
    fn test_serializes_without_absent_fields() {
        let id = ResourceId::parse(&format!("/subscriptions/{SUB}")).unwrap();
        let json = serde_json::to_value(&id).unwrap();
        assert_eq!(
            json,
            serde_json::json!({ "subscription_id": SUB, "path": {} })
        );
    }
}
