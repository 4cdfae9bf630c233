//! HTTP helpers in the spirit of Rack's `Rack::Utils`.

pub mod ranges;

use crate::stringx::{self, ScanMatch};
use chrono::{DateTime, TimeZone, Utc};
use lazy_static::lazy_static;
use percent_encoding::{percent_decode_str, utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use regex::Regex;
use serde::Serialize;
use std::fmt;

pub use ranges::{byte_ranges, ByteRange};

/// Everything but the RFC 3986 unreserved chars.
const QUERY: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'~');

/// Path segments may also keep the sub-delimiters that carry no meaning there.
const PATH_SEGMENT: &AsciiSet = &QUERY
    .remove(b'$')
    .remove(b'&')
    .remove(b'+')
    .remove(b':')
    .remove(b'=')
    .remove(b'@');

lazy_static! {
    static ref LIST_SEPARATOR: Regex = Regex::new(r"\s*,\s*").unwrap();
    static ref PARAM_SEPARATOR: Regex = Regex::new(r"\s*;\s*").unwrap();
    static ref QUALITY_PARAM: Regex = Regex::new(r"\Aq=([\d.]+)").unwrap();
}

/// Escape `s` for a query string or form body: spaces become `+`.
pub fn escape(s: &str) -> String {
    utf8_percent_encode(s, QUERY).to_string().replace("%20", "+")
}

/// Escape `s` for use as a URL path segment: spaces become `%20`.
pub fn escape_path(s: &str) -> String {
    utf8_percent_encode(s, PATH_SEGMENT).to_string()
}

/// Undo [`escape`]. Malformed input is returned unchanged.
pub fn unescape(s: &str) -> String {
    unescape_with(s, true)
}

/// Undo [`escape_path`]. Malformed input is returned unchanged.
pub fn unescape_path(s: &str) -> String {
    unescape_with(s, false)
}

fn unescape_with(s: &str, plus_as_space: bool) -> String {
    if !has_valid_escapes(s) {
        tracing::debug!(input = s, "malformed percent escape");
        return s.to_string();
    }

    let spaced;
    let source = if plus_as_space && s.contains('+') {
        spaced = s.replace('+', " ");
        spaced.as_str()
    } else {
        s
    };

    match percent_decode_str(source).decode_utf8() {
        Ok(decoded) => decoded.into_owned(),
        Err(_) => {
            tracing::debug!(input = s, "percent escape decodes to invalid UTF-8");
            s.to_string()
        }
    }
}

/// Every `%` is followed by two hex digits.
fn has_valid_escapes(s: &str) -> bool {
    let bytes = s.as_bytes();
    let mut idx = 0;
    while idx < bytes.len() {
        if bytes[idx] == b'%' {
            let valid = bytes
                .get(idx + 1..idx + 3)
                .is_some_and(|hex| hex.iter().all(u8::is_ascii_hexdigit));
            if !valid {
                return false;
            }
            idx += 3;
        } else {
            idx += 1;
        }
    }
    true
}

/// One element of a quality-value header such as `Accept`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct QValue {
    pub value: String,
    pub quality: f64,
}

impl fmt::Display for QValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Value: '{}'; Quality: {:.6}", self.value, self.quality)
    }
}

/// Parse a quality-value header into its values, in header order.
///
/// A value without a `q` parameter has quality 1.0; a `q` parameter that is
/// not a number counts as 0.0.
///
/// ```
/// use stdx::httpx::qvalues;
///
/// let values = qvalues("text/html, application/xml;q=0.9");
/// assert_eq!(values[0].value, "text/html");
/// assert_eq!(values[1].quality, 0.9);
/// ```
pub fn qvalues(header: &str) -> Vec<QValue> {
    stringx::split(header, &*LIST_SEPARATOR, None)
        .into_iter()
        .filter_map(|part| {
            let mut fields = stringx::split(part, &*PARAM_SEPARATOR, Some(2)).into_iter();
            let value = fields.next()?;
            let params = fields.next().unwrap_or("");

            let quality = match stringx::scan(params, &*QUALITY_PARAM).first() {
                Some(ScanMatch::Groups(groups)) => groups
                    .first()
                    .and_then(|q| q.parse().ok())
                    .unwrap_or(0.0),
                _ => 1.0,
            };

            Some(QValue {
                value: value.to_string(),
                quality,
            })
        })
        .collect()
}

/// Order values from least to most preferred. Equal qualities keep their
/// header order.
pub fn sort_by_quality(values: &mut [QValue]) {
    values.sort_by(|a, b| a.quality.total_cmp(&b.quality));
}

/// Format `time` the way HTTP headers carry dates (IMF-fixdate, always GMT).
///
/// ```
/// use chrono::{TimeZone, Utc};
/// use stdx::httpx::http_date;
///
/// let time = Utc.with_ymd_and_hms(1994, 11, 6, 8, 49, 37).unwrap();
/// assert_eq!(http_date(&time), "Sun, 06 Nov 1994 08:49:37 GMT");
/// ```
pub fn http_date<Tz: TimeZone>(time: &DateTime<Tz>) -> String {
    time.with_timezone(&Utc)
        .format("%a, %d %b %Y %H:%M:%S GMT")
        .to_string()
}
