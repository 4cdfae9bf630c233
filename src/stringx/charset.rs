use std::iter::Peekable;
use std::str::Chars;

/// A character set written the way Ruby's `count`, `delete`, `squeeze` and
/// `tr` take them.
///
/// - `c1-c2` is every char from `c1` to `c2` inclusive
/// - a leading `^` negates the set, unless it is the only char
/// - a backslash takes the next char literally; a trailing backslash is itself
/// - a `-` at either end is literal
///
/// Reversed ranges such as `z-a` match nothing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CharSet {
    negated: bool,
    ranges: Vec<(char, char)>,
}

impl CharSet {
    pub fn parse(spec: &str) -> Self {
        let (negated, body) = match spec.strip_prefix('^') {
            Some(rest) if !rest.is_empty() => (true, rest),
            _ => (false, spec),
        };

        Self {
            negated,
            ranges: parse_ranges(body),
        }
    }

    /// Parse without treating a leading `^` as negation.
    pub fn parse_literal(spec: &str) -> Self {
        Self {
            negated: false,
            ranges: parse_ranges(spec),
        }
    }

    pub fn parse_all(specs: &[&str]) -> Vec<Self> {
        specs.iter().map(|spec| Self::parse(spec)).collect()
    }

    pub fn is_negated(&self) -> bool {
        self.negated
    }

    pub fn contains(&self, c: char) -> bool {
        let listed = self.ranges.iter().any(|&(lo, hi)| lo <= c && c <= hi);
        listed != self.negated
    }

    /// Whether every set contains `c`. No sets contain nothing.
    pub fn all_contain(sets: &[CharSet], c: char) -> bool {
        !sets.is_empty() && sets.iter().all(|set| set.contains(c))
    }

    /// The listed chars in spec order, ranges expanded. Ignores negation.
    pub fn chars(&self) -> impl Iterator<Item = char> + '_ {
        self.ranges.iter().flat_map(|&(lo, hi)| lo..=hi)
    }
}

fn parse_ranges(body: &str) -> Vec<(char, char)> {
    let mut ranges = Vec::new();
    let mut chars = body.chars().peekable();

    while let Some(lo) = next_char(&mut chars) {
        if chars.peek() == Some(&'-') {
            let mut lookahead = chars.clone();
            lookahead.next();
            if let Some(hi) = next_char(&mut lookahead) {
                chars = lookahead;
                if lo <= hi {
                    ranges.push((lo, hi));
                }
                continue;
            }
        }
        ranges.push((lo, lo));
    }

    ranges
}

fn next_char(chars: &mut Peekable<Chars<'_>>) -> Option<char> {
    let c = chars.next()?;
    if c == '\\' {
        if let Some(escaped) = chars.next() {
            return Some(escaped);
        }
    }
    Some(c)
}
