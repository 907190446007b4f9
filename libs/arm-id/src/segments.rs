//! Splitting a resource ID path into key/value segments.

use crate::IdError;

/// One `/key/value` pair of a resource ID path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Segment<'a> {
    pub key: &'a str,
    pub value: &'a str,
}

/// Splits `path` into ordered key/value pairs.
///
/// A single leading and a single trailing `/` are ignored. Keys and values
/// are returned exactly as written: no case folding, no percent-decoding.
pub fn tokenize(path: &str) -> Result<Vec<Segment<'_>>, IdError> {
    let trimmed = path.strip_prefix('/').unwrap_or(path);
    let trimmed = trimmed.strip_suffix('/').unwrap_or(trimmed);

    let components: Vec<&str> = trimmed.split('/').collect();
    if components.len() % 2 != 0 {
        return Err(IdError::MalformedPath {
            path: path.to_string(),
        });
    }

    components
        .chunks_exact(2)
        .map(|pair| {
            let (key, value) = (pair[0], pair[1]);
            if key.is_empty() || value.is_empty() {
                return Err(IdError::EmptySegment {
                    path: path.to_string(),
                });
            }
            Ok(Segment { key, value })
        })
        .collect()
}
