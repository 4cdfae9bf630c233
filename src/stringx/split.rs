use crate::error::Result;
use regex::Regex;
use serde::Serialize;
use tracing::trace;

/// What to split on.
///
/// Resolved once when `split` is entered; the empty literal and the single
/// space literal select their own modes (see [`SplitMode`]).
#[derive(Debug, Clone, Copy)]
pub enum Pattern<'p> {
    /// No pattern given. Same as `Literal(" ")`.
    Whitespace,
    Literal(&'p str),
    Regex(&'p Regex),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SplitMode {
    /// Runs of whitespace separate fields, surrounding whitespace is ignored
    Awk,
    Literal,
    /// One field per char
    Chars,
    Regex,
}

impl<'p> Pattern<'p> {
    pub fn mode(&self) -> SplitMode {
        match self {
            Pattern::Whitespace | Pattern::Literal(" ") => SplitMode::Awk,
            Pattern::Literal("") => SplitMode::Chars,
            Pattern::Literal(_) => SplitMode::Literal,
            Pattern::Regex(_) => SplitMode::Regex,
        }
    }
}

impl<'p> From<&'p str> for Pattern<'p> {
    fn from(literal: &'p str) -> Self {
        Pattern::Literal(literal)
    }
}

impl<'p> From<&'p String> for Pattern<'p> {
    fn from(literal: &'p String) -> Self {
        Pattern::Literal(literal.as_str())
    }
}

impl<'p> From<&'p Regex> for Pattern<'p> {
    fn from(re: &'p Regex) -> Self {
        Pattern::Regex(re)
    }
}

impl<'p, P: Into<Pattern<'p>>> From<Option<P>> for Pattern<'p> {
    fn from(pattern: Option<P>) -> Self {
        pattern.map_or(Pattern::Whitespace, Into::into)
    }
}

/// Compile a regex for use as a [`Pattern::Regex`].
pub fn compile_pattern(source: &str) -> Result<Regex> {
    Ok(Regex::new(source)?)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Limit {
    /// Split everything, then drop trailing empty fields
    Suppress,
    /// At most this many fields; the last one keeps the unsplit rest
    Fields(usize),
    /// Split everything, keep trailing empty fields
    Unbounded,
}

impl Limit {
    fn from_raw(limit: Option<i32>) -> Self {
        match limit {
            None | Some(0) => Limit::Suppress,
            Some(n) if n > 0 => Limit::Fields(n as usize),
            Some(_) => Limit::Unbounded,
        }
    }

    fn max_fields(self) -> Option<usize> {
        match self {
            Limit::Fields(n) => Some(n),
            _ => None,
        }
    }
}

/// Divide `input` into substrings around `pattern`.
///
/// A literal pattern is used as the delimiter as-is, except that a single
/// space splits on runs of whitespace (ignoring leading and trailing
/// whitespace) and the empty literal splits into chars. A regex splits at each
/// match; a zero-length match splits between chars. When the regex has
/// capture groups, the groups of the last match used are returned after the
/// split fields and before the final field.
///
/// `limit` follows Ruby's `String#split`:
///
/// - `None` or `Some(0)`: trailing empty fields are dropped
/// - `Some(1)`: the whole input as the only field
/// - `Some(n)`: at most `n` fields (captured groups do not count), the last
///   one holding whatever was left unsplit
/// - negative: no limit, trailing empty fields are kept
///
/// Empty or all-whitespace input has no fields at all.
///
/// ```
/// use stdx::stringx::{split, Pattern};
///
/// assert_eq!(split(" now's  the time ", Pattern::Whitespace, None), ["now's", "the", "time"]);
/// assert_eq!(split("mellow yellow", "ello", None), ["m", "w y", "w"]);
/// assert_eq!(split("1,2,,3,4,,", ",", Some(4)), ["1", "2", "", "3,4,,"]);
/// assert_eq!(split("1,2,,3,4,,", ",", Some(-4)), ["1", "2", "", "3", "4", "", ""]);
/// ```
pub fn split<'a, 'p>(
    input: &'a str,
    pattern: impl Into<Pattern<'p>>,
    limit: Option<i32>,
) -> Vec<&'a str> {
    if input.trim().is_empty() {
        return Vec::new();
    }

    let limit = Limit::from_raw(limit);
    if limit == Limit::Fields(1) {
        return vec![input];
    }

    let pattern = pattern.into();
    trace!(mode = ?pattern.mode(), ?limit, "split");

    let max = limit.max_fields();
    let mut fields = match pattern {
        Pattern::Whitespace | Pattern::Literal(" ") => split_awk(input, max),
        Pattern::Literal("") => split_chars(input, max),
        Pattern::Literal(sep) => match max {
            Some(n) => input.splitn(n, sep).collect(),
            None => input.split(sep).collect(),
        },
        Pattern::Regex(re) => split_regex(input, re, max),
    };

    if limit == Limit::Suppress {
        while fields.last().is_some_and(|field| field.is_empty()) {
            fields.pop();
        }
    }

    fields
}

fn split_awk(input: &str, max: Option<usize>) -> Vec<&str> {
    let mut fields = Vec::new();
    let mut rest = input.trim_start();

    while !rest.is_empty() {
        if max == Some(fields.len() + 1) {
            fields.push(rest.trim_end());
            break;
        }
        match rest.find(char::is_whitespace) {
            Some(end) => {
                fields.push(&rest[..end]);
                rest = rest[end..].trim_start();
            }
            None => {
                fields.push(rest);
                break;
            }
        }
    }

    fields
}

fn split_chars(input: &str, max: Option<usize>) -> Vec<&str> {
    let mut fields = Vec::new();

    for (idx, c) in input.char_indices() {
        if max == Some(fields.len() + 1) {
            fields.push(&input[idx..]);
            break;
        }
        fields.push(&input[idx..idx + c.len_utf8()]);
    }

    fields
}

fn split_regex<'a>(input: &'a str, re: &Regex, max: Option<usize>) -> Vec<&'a str> {
    let mut fields = Vec::new();
    let mut start = 0;
    let mut last_used = None;

    for caps in re.captures_iter(input) {
        let Some(m) = caps.get(0) else {
            continue;
        };
        // An empty match at either edge has nothing on one side to split off
        if m.is_empty() && (m.start() == 0 || m.start() == input.len()) {
            continue;
        }
        if max.is_some_and(|n| fields.len() + 1 >= n) {
            break;
        }
        fields.push(&input[start..m.start()]);
        start = m.end();
        last_used = Some(caps);
    }

    if let Some(caps) = last_used {
        fields.extend(
            caps.iter()
                .skip(1)
                .map(|group| group.map_or("", |g| g.as_str())),
        );
    }
    fields.push(&input[start..]);

    fields
}

#[cfg(test)]
mod tests {
    use super::*;

    fn re(source: &str) -> Regex {
        Regex::new(source).unwrap()
    }

    #[test]
    fn test_whitespace_split() {
        let expected = vec!["now's", "the", "time"];
        assert_eq!(split(" now's  the time ", Pattern::Whitespace, None), expected);
        assert_eq!(split(" now's  the time", " ", None), expected);
        assert_eq!(split(" a  b c ", None::<&str>, None), vec!["a", "b", "c"]);
        assert_eq!(split("a\t\nb", Pattern::Whitespace, Some(-1)), vec!["a", "b"]);
    }

    #[test]
    fn test_whitespace_split_with_limit() {
        assert_eq!(
            split(" now's  the time ", Pattern::Whitespace, Some(2)),
            vec!["now's", "the time"]
        );
        assert_eq!(
            split("a b", Pattern::Whitespace, Some(5)),
            vec!["a", "b"]
        );
    }

    #[test]
    fn test_char_split() {
        assert_eq!(split("hello", "", None), vec!["h", "e", "l", "l", "o"]);
        assert_eq!(split("hello", "", Some(3)), vec!["h", "e", "llo"]);
        assert_eq!(split("héllo", "", Some(-1)), vec!["h", "é", "l", "l", "o"]);
        assert_eq!(split("ab", "", Some(10)), vec!["a", "b"]);
    }

    #[test]
    fn test_literal_split() {
        assert_eq!(split("Slip:knot", ":", None), vec!["Slip", "knot"]);
        assert_eq!(split("mellow yellow", "ello", None), vec!["m", "w y", "w"]);
        assert_eq!(split("1,2,,3,4,,", ",", None), vec!["1", "2", "", "3", "4"]);
        assert_eq!(split("1,2,,3,4,,", ",", Some(0)), vec!["1", "2", "", "3", "4"]);
    }

    #[test]
    fn test_literal_split_limits() {
        assert_eq!(split("1,2,,3,4,,", ",", Some(4)), vec!["1", "2", "", "3,4,,"]);
        assert_eq!(
            split("1,2,,3,4,,", ",", Some(-4)),
            vec!["1", "2", "", "3", "4", "", ""]
        );
        assert_eq!(split("1,2,,3,4,,", ",", Some(1)), vec!["1,2,,3,4,,"]);
    }

    #[test]
    fn test_only_delimiters() {
        assert!(split(",,,", ",", None).is_empty());
        assert_eq!(split(",,,", ",", Some(-1)), vec!["", "", "", ""]);
    }

    #[test]
    fn test_empty_input() {
        assert!(split("", ",", Some(-1)).is_empty());
        assert!(split("", "", None).is_empty());
        assert!(split("   ", ",", Some(1)).is_empty());
        assert!(split("", &re(","), Some(-1)).is_empty());
    }

    #[test]
    fn test_no_match() {
        assert_eq!(split("hello", "x", None), vec!["hello"]);
        assert_eq!(split("hello", &re("x"), Some(-1)), vec!["hello"]);
    }

    #[test]
    fn test_regex_split() {
        assert_eq!(
            split(" now's  the time", &re(" "), None),
            vec!["", "now's", "", "the", "time"]
        );
        assert_eq!(
            split("1, 2.34,56, 7", &re(r",\s*"), None),
            vec!["1", "2.34", "56", "7"]
        );
    }

    #[test]
    fn test_regex_zero_length_match() {
        assert_eq!(split("hello", &re(""), None), vec!["h", "e", "l", "l", "o"]);
        assert_eq!(split("hello", &re(""), Some(3)), vec!["h", "e", "llo"]);
        assert_eq!(split("hi mom", &re(r"\s*"), None), vec!["h", "i", "m", "o", "m"]);
        assert_eq!(split("hello", &re(""), Some(-1)), vec!["h", "e", "l", "l", "o"]);
    }

    #[test]
    fn test_regex_trailing_empty_fields() {
        assert_eq!(split("a,b,", &re(","), None), vec!["a", "b"]);
        assert_eq!(split("a,b,", &re(","), Some(-1)), vec!["a", "b", ""]);
    }

    #[test]
    fn test_regex_capture_groups() {
        assert_eq!(
            split("1:2:3", &re("(:)()()"), Some(2)),
            vec!["1", ":", "", "", "2:3"]
        );
        assert_eq!(split("a-b", &re("(-)|(x)"), None), vec!["a", "-", "", "b"]);
    }

    #[test]
    fn test_regex_groups_come_from_last_match() {
        // only the groups of the final match are kept
        assert_eq!(
            split("a1xb2xc", &re(r"(\d)x"), None),
            vec!["a", "b", "2", "c"]
        );
        assert_eq!(
            split("a1xb2xc", &re(r"(\d)x"), Some(2)),
            vec!["a", "1", "b2xc"]
        );
    }

    #[test]
    fn test_join_and_resplit() {
        let original = "1,2,,3,4,,";
        let fields = split(original, ",", None);
        let joined = fields.join(",");
        assert_eq!(split(&joined, ",", Some(i32::MAX)), fields);
    }

    #[test]
    fn test_pattern_mode() {
        assert_eq!(Pattern::Whitespace.mode(), SplitMode::Awk);
        assert_eq!(Pattern::from(" ").mode(), SplitMode::Awk);
        assert_eq!(Pattern::from("").mode(), SplitMode::Chars);
        assert_eq!(Pattern::from(",").mode(), SplitMode::Literal);
        assert_eq!(Pattern::from(&re(",")).mode(), SplitMode::Regex);
        assert_eq!(Pattern::from(None::<&str>).mode(), SplitMode::Awk);
    }

    #[test]
    fn test_compile_pattern_error() {
        assert!(compile_pattern("(").is_err());
        assert!(compile_pattern(r",\s*").is_ok());
    }
}
