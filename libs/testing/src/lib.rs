//! Fixtures and proptest strategies shared by the arm-id test suites.

use proptest::prelude::*;

/// A fixed subscription ID for example-based tests.
pub const SUBSCRIPTION_ID: &str = "12345678-1234-9876-4563-123456789012";

/// Upper bound on the number of fields any catalog ID carries.
pub const MAX_FIELDS: usize = 6;

/// Subscription IDs as Azure hands them out.
pub fn subscription_id() -> impl Strategy<Value = String> {
    any::<u128>().prop_map(|n| uuid::Uuid::from_u128(n).to_string())
}

/// Non-empty segment values without slashes.
pub fn segment_value() -> impl Strategy<Value = String> {
    "[A-Za-z0-9._()-]{1,24}"
}

/// Enough segment values to fill any catalog ID.
pub fn segment_values() -> impl Strategy<Value = Vec<String>> {
    proptest::collection::vec(segment_value(), MAX_FIELDS)
}

/// Every prefix of `id` that ends right before a `/`.
pub fn truncations(id: &str) -> Vec<&str> {
    id.match_indices('/').map(|(index, _)| &id[..index]).collect()
}

/// Copies of `id` with one `/` doubled, once per slash.
pub fn double_slashed(id: &str) -> Vec<String> {
    id.match_indices('/')
        .map(|(index, _)| format!("{}/{}", &id[..index], &id[index..]))
        .collect()
}
