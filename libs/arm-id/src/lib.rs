//! # arm-id
//!
//! Parsing, formatting, and validation of Azure Resource Manager resource IDs.
//!
//! ## ID Format
//!
//! ```text
//! /subscriptions/{subscriptionId}/resourceGroups/{resourceGroupName}/providers/{namespace}/{type}/{name}[/{type}/{name}]*
//! ```
//!
//! Subscription-scoped IDs omit the resource group, and tenant-scoped IDs
//! start directly at `/providers/...`.
//!
//! ## Layers
//!
//! - [`segments::tokenize`] splits a path into `key/value` pairs
//! - [`ResourceId`] pulls out the subscription, resource group and provider
//!   namespaces, leaving the rest in a map
//! - [`IdSchema`] describes one resource type's segments in order, and parses
//!   and formats against that table
//! - [`define_resource_id!`] turns a schema into a typed struct
//!
//! Parsing is case-sensitive on both keys and values, with one exception:
//! the `resourcegroups` key is accepted as an alias for `resourceGroups`,
//! since some Azure APIs return it that way.

pub mod catalog;
mod error;
mod macros;
mod resource_id;
mod schema;
pub mod segments;
mod types;
pub mod validate;

pub use error::IdError;
pub use resource_id::ResourceId;
pub use schema::{
    format_typed, parse_typed, IdSchema, IdScope, ProviderSpec, SegmentSpec, TypedResourceId,
};
pub use types::*;
pub use validate::ValidationError;
