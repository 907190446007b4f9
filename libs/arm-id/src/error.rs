//! Error types for resource ID parsing and validation.

use thiserror::Error;

/// Errors that can occur when parsing a resource ID.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum IdError {
    /// The path does not split into key/value pairs.
    #[error("the number of path segments is not divisible by 2 in {path:?}")]
    MalformedPath { path: String },

    /// A key or value between two slashes is empty.
    #[error("key/value cannot be empty strings in {path:?}")]
    EmptySegment { path: String },

    /// No `subscriptions` segment was found.
    #[error("no subscription ID found in {id:?}")]
    MissingSubscription { id: String },

    /// A segment required by the resource type is absent.
    #[error("ID was missing the `{name}` element in {id:?}")]
    MissingSegment { name: String, id: String },

    /// The ID carries segments the resource type does not claim.
    #[error("ID contained more segments than required in {id:?}: {}", segments.join(", "))]
    UnexpectedSegments { id: String, segments: Vec<String> },

    /// The provider namespace differs from the one the resource type expects.
    #[error("expected provider {expected:?}, got {actual:?}")]
    ProviderMismatch {
        expected: &'static str,
        actual: String,
    },
}

impl IdError {
    /// Returns true if the path itself could not be tokenized.
    pub fn is_malformed(&self) -> bool {
        matches!(
            self,
            IdError::MalformedPath { .. } | IdError::EmptySegment { .. }
        )
    }

    /// Returns true if a required segment (subscription included) was absent.
    pub fn is_missing_segment(&self) -> bool {
        matches!(
            self,
            IdError::MissingSubscription { .. } | IdError::MissingSegment { .. }
        )
    }

    /// Returns the name of the missing segment, if this is a missing-segment error.
    pub fn missing_segment(&self) -> Option<&str> {
        match self {
            IdError::MissingSegment { name, .. } => Some(name.as_str()),
            IdError::MissingSubscription { .. } => Some("subscriptions"),
            _ => None,
        }
    }
}
