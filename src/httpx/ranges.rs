use crate::stringx;
use lazy_static::lazy_static;
use regex::Regex;
use serde::Serialize;

lazy_static! {
    static ref BYTES_UNIT: Regex = Regex::new(r"bytes=([^;]+)").unwrap();
    static ref SPEC_SEPARATOR: Regex = Regex::new(r",\s*").unwrap();
    static ref RANGE_SPEC: Regex = Regex::new(r"(\d*)-(\d*)").unwrap();
}

/// An inclusive span of byte offsets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ByteRange {
    pub from: u64,
    pub to: u64,
}

impl ByteRange {
    /// Bytes covered. A hand-built range with `to < from` counts as one byte.
    pub fn len(&self) -> u64 {
        self.to.saturating_sub(self.from) + 1
    }

    /// A range always covers at least one byte.
    pub fn is_empty(&self) -> bool {
        false
    }
}

/// Parse a `Range:` header for a resource of `size` bytes.
///
/// Returns `None` when the header is missing or syntactically invalid, and an
/// empty list when none of the ranges can be satisfied. Ranges reaching past
/// the end are cut short at the last byte.
///
/// ```
/// use stdx::httpx::{byte_ranges, ByteRange};
///
/// assert_eq!(byte_ranges("bytes=123-999", 500), Some(vec![ByteRange { from: 123, to: 499 }]));
/// assert_eq!(byte_ranges("bytes=-100", 500), Some(vec![ByteRange { from: 400, to: 499 }]));
/// assert_eq!(byte_ranges("bytes=600-999", 500), Some(vec![]));
/// assert_eq!(byte_ranges("bytes=456-123", 500), None);
/// ```
pub fn byte_ranges(header: &str, size: u64) -> Option<Vec<ByteRange>> {
    if header.is_empty() {
        return None;
    }
    if size == 0 {
        return Some(Vec::new());
    }

    let Some(specs) = BYTES_UNIT.captures(header).and_then(|caps| caps.get(1)) else {
        tracing::debug!(header, "range header has no bytes unit");
        return None;
    };

    let last = size - 1;
    let mut ranges = Vec::new();

    for spec in stringx::split(specs.as_str(), &*SPEC_SEPARATOR, None) {
        let Some(caps) = RANGE_SPEC.captures(spec) else {
            tracing::debug!(spec, "malformed byte range");
            return None;
        };
        let start = caps.get(1).map_or("", |m| m.as_str());
        let end = caps.get(2).map_or("", |m| m.as_str());

        let (from, to) = match (start, end) {
            ("", "") => return None,
            // suffix-byte-range-spec: the final `end` bytes
            ("", end) => (size.saturating_sub(end.parse().ok()?), last),
            (start, "") => (start.parse().ok()?, last),
            (start, end) => {
                let from: u64 = start.parse().ok()?;
                let to: u64 = end.parse().ok()?;
                if to < from {
                    tracing::debug!(spec, "backwards byte range");
                    return None;
                }
                if from >= size {
                    continue;
                }
                (from, to.min(last))
            }
        };

        if from <= to {
            ranges.push(ByteRange { from, to });
        }
    }

    Some(ranges)
}
