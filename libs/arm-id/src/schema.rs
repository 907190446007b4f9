//! The generic engine behind every typed resource ID.
//!
//! A resource type is described once by an [`IdSchema`]: which scope it
//! lives in (tenant, subscription or resource group) and, for each provider
//! namespace it sits under, the segment keys that follow it in order.
//! [`IdSchema::parse`] and [`IdSchema::format`] work from that table alone,
//! so the typed structs generated by [`define_resource_id!`] only map their
//! fields to and from an ordered list of values.
//!
//! [`define_resource_id!`]: crate::define_resource_id

use serde::Serialize;
use tracing::trace;

use crate::{IdError, ResourceId};

/// Where a resource type sits in the ARM hierarchy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum IdScope {
    /// `/providers/...`, no subscription.
    Tenant,
    /// `/subscriptions/{id}/...`, no resource group.
    Subscription,
    /// `/subscriptions/{id}/resourceGroups/{name}/...`.
    ResourceGroup,
}

impl IdScope {
    /// Field names that precede the segment fields for this scope.
    pub const fn scope_fields(self) -> &'static [&'static str] {
        match self {
            IdScope::Tenant => &[],
            IdScope::Subscription => &["subscription_id"],
            IdScope::ResourceGroup => &["subscription_id", "resource_group"],
        }
    }
}

/// A `/{key}/{value}` segment expected by a resource type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SegmentSpec {
    /// Struct field holding the value.
    pub field: &'static str,
    /// Literal segment key, e.g. `virtualNetworks`.
    pub key: &'static str,
}

/// A `providers/{namespace}` segment and the segments under it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ProviderSpec {
    pub namespace: &'static str,
    pub segments: &'static [SegmentSpec],
}

/// Declarative description of one resource ID shape.
///
/// At most two provider groups are supported, matching the primary and
/// secondary providers extracted by [`ResourceId`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct IdSchema {
    /// Short snake_case name used by the catalog, e.g. `virtual_network`.
    pub kind: &'static str,
    /// Rust type implementing this schema.
    pub type_name: &'static str,
    pub scope: IdScope,
    pub providers: &'static [ProviderSpec],
}

impl IdSchema {
    /// Iterates over the segment specs of every provider group, in order.
    pub fn segments(&self) -> impl Iterator<Item = &'static SegmentSpec> {
        self.providers.iter().flat_map(|p| p.segments.iter())
    }

    /// Field names in the order [`IdSchema::parse`] returns values.
    pub fn fields(&self) -> Vec<&'static str> {
        self.scope
            .scope_fields()
            .iter()
            .copied()
            .chain(self.segments().map(|s| s.field))
            .collect()
    }

    /// Renders the ID with `{field}` placeholders in place of values.
    pub fn template(&self) -> String {
        let placeholders: Vec<String> = self
            .fields()
            .into_iter()
            .map(|field| format!("{{{field}}}"))
            .collect();
        self.format(&placeholders)
    }

    /// Renders the canonical ID string.
    ///
    /// `values` holds one entry per [`IdSchema::fields`] entry, in order.
    pub fn format<S: AsRef<str>>(&self, values: &[S]) -> String {
        debug_assert_eq!(values.len(), self.fields().len());

        let mut values = values.iter().map(|value| -> &str { value.as_ref() });
        let mut next = || values.next().unwrap_or_default();
        let mut out = String::new();

        match self.scope {
            IdScope::Tenant => {}
            IdScope::Subscription => {
                push_segment(&mut out, "subscriptions", next());
            }
            IdScope::ResourceGroup => {
                push_segment(&mut out, "subscriptions", next());
                push_segment(&mut out, "resourceGroups", next());
            }
        }

        for provider in self.providers {
            push_segment(&mut out, "providers", provider.namespace);
            for segment in provider.segments {
                push_segment(&mut out, segment.key, next());
            }
        }

        out
    }

    /// Parses `input` against this schema, returning one value per
    /// [`IdSchema::fields`] entry.
    pub fn parse(&self, input: &str) -> Result<Vec<String>, IdError> {
        self.parse_inner(input).inspect_err(|err| {
            trace!(kind = self.kind, error = %err, "resource ID rejected");
        })
    }

    fn parse_inner(&self, input: &str) -> Result<Vec<String>, IdError> {
        let mut id = match self.scope {
            IdScope::Tenant => ResourceId::parse_without_subscription(input)?,
            IdScope::Subscription | IdScope::ResourceGroup => ResourceId::parse(input)?,
        };

        let mut values = Vec::with_capacity(self.fields().len());
        let mut unexpected = Vec::new();

        match self.scope {
            IdScope::Tenant => {
                if !id.subscription_id.is_empty() {
                    unexpected.push("subscriptions".to_string());
                }
            }
            IdScope::Subscription | IdScope::ResourceGroup => {
                values.push(std::mem::take(&mut id.subscription_id));
            }
        }

        match (self.scope, id.resource_group.take()) {
            (IdScope::ResourceGroup, Some(rg)) => values.push(rg),
            (IdScope::ResourceGroup, None) => {
                return Err(IdError::MissingSegment {
                    name: "resourceGroups".to_string(),
                    id: input.to_string(),
                });
            }
            (_, Some(_)) => unexpected.push("resourceGroups".to_string()),
            (_, None) => {}
        }

        let actual_providers = [id.provider.take(), id.secondary_provider.take()];
        for (index, actual) in actual_providers.into_iter().enumerate() {
            match (self.providers.get(index), actual) {
                (Some(expected), Some(actual)) if actual == expected.namespace => {}
                (Some(expected), Some(actual)) => {
                    return Err(IdError::ProviderMismatch {
                        expected: expected.namespace,
                        actual,
                    });
                }
                (Some(_), None) => {
                    return Err(IdError::MissingSegment {
                        name: "providers".to_string(),
                        id: input.to_string(),
                    });
                }
                (None, Some(_)) => unexpected.push("providers".to_string()),
                (None, None) => {}
            }
        }

        if !unexpected.is_empty() {
            return Err(IdError::UnexpectedSegments {
                id: input.to_string(),
                segments: unexpected,
            });
        }

        for segment in self.segments() {
            let value = id.pop_segment(segment.key).map_err(|_| IdError::MissingSegment {
                name: segment.key.to_string(),
                id: input.to_string(),
            })?;
            values.push(value);
        }

        id.validate_no_empty_segments(input)?;

        Ok(values)
    }
}

fn push_segment(out: &mut String, key: &str, value: &str) {
    out.push('/');
    out.push_str(key);
    out.push('/');
    out.push_str(value);
}

/// Implemented by every struct generated with [`define_resource_id!`].
///
/// [`define_resource_id!`]: crate::define_resource_id
pub trait TypedResourceId: Sized {
    /// The segment table for this resource type.
    const SCHEMA: IdSchema;

    /// Builds the struct from values ordered as [`IdSchema::fields`].
    fn from_values(values: Vec<String>) -> Self;

    /// Returns the field values ordered as [`IdSchema::fields`].
    fn values(&self) -> Vec<&str>;
}

/// Parses `input` as the typed resource ID `T`.
pub fn parse_typed<T: TypedResourceId>(input: &str) -> Result<T, IdError> {
    T::SCHEMA.parse(input).map(T::from_values)
}

/// Formats the typed resource ID `id` as its canonical string.
pub fn format_typed<T: TypedResourceId>(id: &T) -> String {
    T::SCHEMA.format(&id.values())
}
