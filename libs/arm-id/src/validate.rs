//! Field validators in the shape Terraform schemas expect.
//!
//! Every validator takes the field value and the field's schema key, and
//! reports the key in its error so it can be surfaced next to the
//! offending attribute.

use std::sync::OnceLock;

use regex::Regex;
use thiserror::Error;

use crate::{parse_typed, IdError, ResourceId, TypedResourceId};

/// Maximum length of a resource group name.
pub const RESOURCE_GROUP_NAME_MAX_LEN: usize = 90;

/// Signature shared by every validator in this module.
pub type ValidateFn = fn(&str, &str) -> Result<(), ValidationError>;

/// A field value failed validation.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// The value is not a resource ID of the expected shape.
    #[error("{key}: {source}")]
    InvalidId {
        key: String,
        #[source]
        source: IdError,
    },

    /// The value is not a UUID.
    #[error("{key}: {value:?} is not a valid UUID")]
    InvalidUuid { key: String, value: String },

    /// The value is empty where a value is required.
    #[error("{key} must not be empty")]
    Empty { key: String },

    /// The value breaks a naming rule.
    #[error("{key}: {message}")]
    InvalidName { key: String, message: String },
}

impl ValidationError {
    /// Returns the schema key that failed validation.
    pub fn key(&self) -> &str {
        match self {
            ValidationError::InvalidId { key, .. }
            | ValidationError::InvalidUuid { key, .. }
            | ValidationError::Empty { key }
            | ValidationError::InvalidName { key, .. } => key,
        }
    }
}

/// The value must parse as a subscription-scoped resource ID.
pub fn resource_id(value: &str, key: &str) -> Result<(), ValidationError> {
    ResourceId::parse(value)
        .map(|_| ())
        .map_err(|source| ValidationError::InvalidId {
            key: key.to_string(),
            source,
        })
}

/// Like [`resource_id`], but an empty value is accepted.
pub fn resource_id_or_empty(value: &str, key: &str) -> Result<(), ValidationError> {
    if value.is_empty() {
        return Ok(());
    }
    resource_id(value, key)
}

/// The value must parse as the typed resource ID `T`.
pub fn typed<T: TypedResourceId>(value: &str, key: &str) -> Result<(), ValidationError> {
    parse_typed::<T>(value)
        .map(|_| ())
        .map_err(|source| ValidationError::InvalidId {
            key: key.to_string(),
            source,
        })
}

/// The value must be a subscription ID (a UUID).
pub fn subscription_id(value: &str, key: &str) -> Result<(), ValidationError> {
    if value.is_empty() {
        return Err(ValidationError::Empty {
            key: key.to_string(),
        });
    }

    uuid::Uuid::parse_str(value)
        .map(|_| ())
        .map_err(|_| ValidationError::InvalidUuid {
            key: key.to_string(),
            value: value.to_string(),
        })
}

fn resource_group_name_regex() -> Option<&'static Regex> {
    static RE: OnceLock<Option<Regex>> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^[-\w._()]+$").ok()).as_ref()
}

/// The value must be a valid resource group name: up to 90 word
/// characters, dashes, periods, underscores and parentheses, not ending in
/// a period.
pub fn resource_group_name(value: &str, key: &str) -> Result<(), ValidationError> {
    let invalid = |message: String| ValidationError::InvalidName {
        key: key.to_string(),
        message,
    };

    if value.is_empty() {
        return Err(ValidationError::Empty {
            key: key.to_string(),
        });
    }

    let len = value.chars().count();
    if len > RESOURCE_GROUP_NAME_MAX_LEN {
        return Err(invalid(format!(
            "may not exceed {RESOURCE_GROUP_NAME_MAX_LEN} characters in length, got {len}"
        )));
    }

    if value.ends_with('.') {
        return Err(invalid("may not end with a period".to_string()));
    }

    if !resource_group_name_regex().is_some_and(|re| re.is_match(value)) {
        return Err(invalid(
            "may only contain alphanumeric characters, dash, underscores, parentheses and periods"
                .to_string(),
        ));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;
    use crate::{SubnetId, VirtualNetworkId};

    #[rstest]
    #[case("/subscriptions/sub1", true)]
    #[case("/subscriptions/sub1/resourceGroups/rg1", true)]
    #[case("/resourceGroups/rg1", false)]
    #[case("", false)]
    #[case("/subscriptions//resourceGroups/rg1", false)]
    fn test_resource_id(#[case] value: &str, #[case] ok: bool) {
        assert_eq!(resource_id(value, "target_resource_id").is_ok(), ok);
    }

    #[test]
    fn test_resource_id_or_empty() {
        assert!(resource_id_or_empty("", "id").is_ok());
        let err = resource_id_or_empty("/nope", "id").unwrap_err();
        assert_eq!(err.key(), "id");
        assert!(matches!(
            err,
            ValidationError::InvalidId {
                source: IdError::MalformedPath { .. },
                ..
            }
        ));
    }

    #[test]
    fn test_typed() {
        let subnet = SubnetId::new("sub1", "rg1", "vnet1", "sn1").id();
        assert!(typed::<SubnetId>(&subnet, "subnet_id").is_ok());

        let err = typed::<VirtualNetworkId>(&subnet, "virtual_network_id").unwrap_err();
        assert_eq!(
            err.to_string(),
            format!(
                "virtual_network_id: ID contained more segments than required in {subnet:?}: subnets"
            )
        );
    }

    #[test]
    fn test_validators_as_fn_pointers() {
        let validators: &[ValidateFn] = &[resource_id, typed::<SubnetId>];
        let errors: Vec<_> = validators
            .iter()
            .filter_map(|validate| validate("/subscriptions/sub1", "id").err())
            .collect();
        assert_eq!(errors.len(), 1);
    }

    #[rstest]
    #[case("00000000-0000-0000-0000-000000000000", true)]
    #[case("12345678-1234-9876-4563-123456789012", true)]
    #[case("not-a-uuid", false)]
    #[case("", false)]
    fn test_subscription_id(#[case] value: &str, #[case] ok: bool) {
        assert_eq!(subscription_id(value, "subscription_id").is_ok(), ok);
    }

    #[rstest]
    #[case("rg1", true)]
    #[case("my-rg_(prod).v2", true)]
    #[case("rg.", false)]
    #[case("rg/1", false)]
    #[case("rg 1", false)]
    #[case("", false)]
    fn test_resource_group_name(#[case] value: &str, #[case] ok: bool) {
        assert_eq!(resource_group_name(value, "name").is_ok(), ok);
    }

    #[test]
    fn test_resource_group_name_length() {
        let max = "a".repeat(RESOURCE_GROUP_NAME_MAX_LEN);
        assert!(resource_group_name(&max, "name").is_ok());

        let err = resource_group_name(&format!("{max}a"), "name").unwrap_err();
        assert!(err.to_string().contains("may not exceed 90 characters"));
    }
}
