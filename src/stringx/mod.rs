//! String helpers modelled on Ruby's `String` methods.

pub mod charset;
pub mod rune;
pub mod scrub;
pub mod split;
pub mod tr;

use charset::CharSet;
use serde::Serialize;
use std::cmp::Ordering;

pub use rune::{rune_index_from_start_byte, rune_indices};
pub use scrub::{scrub, scrub_with};
pub use split::{compile_pattern, split, Pattern, SplitMode};
pub use tr::Translator;

/// Compare `a` and `b` ignoring case.
///
/// ```
/// use std::cmp::Ordering;
/// use stdx::stringx::case_cmp;
///
/// assert_eq!(case_cmp("FOO", "foo"), Ordering::Equal);
/// assert_eq!(case_cmp("foo", "food"), Ordering::Less);
/// ```
pub fn case_cmp(a: &str, b: &str) -> Ordering {
    a.chars()
        .flat_map(char::to_lowercase)
        .cmp(b.chars().flat_map(char::to_lowercase))
}

/// Center `s` in a field of `width` chars, filling both sides by repeating
/// `pad` (a space by default). The left side gets the smaller half.
pub fn center(s: &str, width: usize, pad: Option<&str>) -> String {
    let pad = pad.unwrap_or(" ");
    let len = s.chars().count();
    if width <= len || pad.is_empty() {
        return s.to_string();
    }

    let extra = width - len;
    let left = extra / 2;

    let mut out = String::with_capacity(s.len() + extra * pad.len());
    out.extend(pad.chars().cycle().take(left));
    out.push_str(s);
    out.extend(pad.chars().cycle().take(extra - left));
    out
}

/// Remove a trailing record separator.
///
/// With no separator (or `"\n"`) one trailing `\r\n`, `\n` or `\r` goes. An
/// empty separator removes every trailing newline but leaves a lone `\r`.
/// Any other separator is removed once if `s` ends with it.
pub fn chomp<'a>(s: &'a str, separator: Option<&str>) -> &'a str {
    match separator {
        None | Some("\n") => s
            .strip_suffix("\r\n")
            .or_else(|| s.strip_suffix('\n'))
            .or_else(|| s.strip_suffix('\r'))
            .unwrap_or(s),
        Some("") => {
            let mut rest = s;
            while let Some(stripped) = rest
                .strip_suffix("\r\n")
                .or_else(|| rest.strip_suffix('\n'))
            {
                rest = stripped;
            }
            rest
        }
        Some(sep) => s.strip_suffix(sep).unwrap_or(s),
    }
}

/// The first char of `s`.
pub fn chr(s: &str) -> &str {
    s.chars().next().map_or("", |c| &s[..c.len_utf8()])
}

/// Count the chars of `s` that are in every set (see [`CharSet`]).
///
/// ```
/// use stdx::stringx::count;
///
/// assert_eq!(count("hello world", &["lo"]), 5);
/// assert_eq!(count("hello world", &["lo", "o"]), 2);
/// assert_eq!(count("hello world", &["hello", "^l"]), 4);
/// ```
pub fn count(s: &str, sets: &[&str]) -> usize {
    let sets = CharSet::parse_all(sets);
    s.chars().filter(|&c| CharSet::all_contain(&sets, c)).count()
}

/// Remove the chars of `s` that are in every set.
pub fn delete(s: &str, sets: &[&str]) -> String {
    let sets = CharSet::parse_all(sets);
    s.chars()
        .filter(|&c| !CharSet::all_contain(&sets, c))
        .collect()
}

/// Collapse runs of the same char into one, for chars in every set. With no
/// (non-empty) sets every run is collapsed.
pub fn squeeze(s: &str, sets: &[&str]) -> String {
    let sets: Vec<CharSet> = sets
        .iter()
        .filter(|spec| !spec.is_empty())
        .map(|spec| CharSet::parse(spec))
        .collect();

    let mut out = String::with_capacity(s.len());
    let mut prev = None;

    for c in s.chars() {
        if prev == Some(c) && (sets.is_empty() || CharSet::all_contain(&sets, c)) {
            continue;
        }
        out.push(c);
        prev = Some(c);
    }

    out
}

/// Replace the chars of `from` in `s` with the matching chars of `to`.
/// See [`Translator`].
pub fn tr(s: &str, from: &str, to: &str) -> String {
    Translator::new(from, to).translate(s)
}

pub fn delete_matching_runes(s: &str, r: char) -> String {
    s.chars().filter(|&c| c != r).collect()
}

/// Remove the char at char index `index`. Out of range leaves `s` as is.
pub fn delete_rune(s: &str, index: usize) -> String {
    s.chars()
        .enumerate()
        .filter(|&(idx, _)| idx != index)
        .map(|(_, c)| c)
        .collect()
}

/// Insert `other` before the char at `index`.
///
/// A negative index counts from the end and inserts after that char, so `-1`
/// appends. An index past the end appends; one before the start changes
/// nothing.
///
/// ```
/// use stdx::stringx::insert;
///
/// assert_eq!(insert("foo", 1, "bar"), "fbaroo");
/// assert_eq!(insert("foo", -2, "bar"), "fobaro");
/// ```
pub fn insert(s: &str, index: isize, other: &str) -> String {
    match insertion_offset(s, index) {
        Some(offset) => {
            let mut out = String::with_capacity(s.len() + other.len());
            out.push_str(&s[..offset]);
            out.push_str(other);
            out.push_str(&s[offset..]);
            out
        }
        None => s.to_string(),
    }
}

pub fn insert_rune(s: &str, r: char, index: isize) -> String {
    insert(s, index, r.encode_utf8(&mut [0; 4]))
}

pub fn insert_runes(s: &str, index: isize, runes: &[char]) -> String {
    let other: String = runes.iter().collect();
    insert(s, index, &other)
}

fn insertion_offset(s: &str, index: isize) -> Option<usize> {
    let len = s.chars().count() as isize;
    let at = if index < 0 { len + index + 1 } else { index.min(len) };
    if at < 0 {
        return None;
    }
    Some(rune::byte_offset(s, at as usize))
}

/// Split `s` around the first match of `pattern` into the part before it,
/// the match, and the part after it. Without a match: `(s, "", "")`.
pub fn partition<'a, 'p>(
    s: &'a str,
    pattern: impl Into<Pattern<'p>>,
) -> (&'a str, &'a str, &'a str) {
    let found = match pattern.into() {
        Pattern::Whitespace => s.find(' ').map(|start| (start, start + 1)),
        Pattern::Literal(sep) => s.find(sep).map(|start| (start, start + sep.len())),
        Pattern::Regex(re) => re.find(s).map(|m| (m.start(), m.end())),
    };

    match found {
        Some((start, end)) => (&s[..start], &s[start..end], &s[end..]),
        None => (s, "", ""),
    }
}

/// One result of [`scan`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum ScanMatch<'a> {
    Whole(&'a str),
    /// One entry per capture group; groups that did not take part are empty
    Groups(Vec<&'a str>),
}

/// Every match of `pattern` in `s`, left to right.
///
/// ```
/// use regex::Regex;
/// use stdx::stringx::{scan, ScanMatch};
///
/// let words = Regex::new(r"\w+").unwrap();
/// assert_eq!(scan("cruel world", &words), [ScanMatch::Whole("cruel"), ScanMatch::Whole("world")]);
///
/// let pairs = Regex::new(r"(..)(..)").unwrap();
/// assert_eq!(
///     scan("cruel world", &pairs),
///     [ScanMatch::Groups(vec!["cr", "ue"]), ScanMatch::Groups(vec!["l ", "wo"])]
/// );
/// ```
pub fn scan<'a, 'p>(s: &'a str, pattern: impl Into<Pattern<'p>>) -> Vec<ScanMatch<'a>> {
    match pattern.into() {
        Pattern::Whitespace => s.matches(' ').map(ScanMatch::Whole).collect(),
        Pattern::Literal(lit) => s.matches(lit).map(ScanMatch::Whole).collect(),
        Pattern::Regex(re) if re.captures_len() > 1 => re
            .captures_iter(s)
            .map(|caps| {
                ScanMatch::Groups(
                    caps.iter()
                        .skip(1)
                        .map(|group| group.map_or("", |g| g.as_str()))
                        .collect(),
                )
            })
            .collect(),
        Pattern::Regex(re) => re.find_iter(s).map(|m| ScanMatch::Whole(m.as_str())).collect(),
    }
}

/// Render `items` as `["a", "b"]`.
pub fn format_strings<S: AsRef<str>>(items: &[S]) -> String {
    let quoted: Vec<String> = items
        .iter()
        .map(|item| format!("\"{}\"", item.as_ref()))
        .collect();
    format!("[{}]", quoted.join(", "))
}

#[cfg(test)]
mod tests {
    use super::*;
    use regex::Regex;

    #[test]
    fn test_case_cmp() {
        assert_eq!(case_cmp("foo", "foo"), Ordering::Equal);
        assert_eq!(case_cmp("foo", "food"), Ordering::Less);
        assert_eq!(case_cmp("food", "foo"), Ordering::Greater);
        assert_eq!(case_cmp("foo", "FOO"), Ordering::Equal);
        assert_eq!(case_cmp("foo", "fod"), Ordering::Greater);
        assert_eq!(case_cmp("fod", "foo"), Ordering::Less);
        assert_eq!(case_cmp("foo", "foO"), Ordering::Equal);
    }

    #[test]
    fn test_center() {
        assert_eq!(center("hello", 4, None), "hello");
        assert_eq!(center("hello", 20, None), "       hello        ");
        assert_eq!(center("hello", 20, Some("123")), "1231231hello12312312");
        assert_eq!(center("hello", 20, Some("")), "hello");
    }

    #[test]
    fn test_chomp() {
        assert_eq!(chomp("hello", None), "hello");
        assert_eq!(chomp("hello\n", None), "hello");
        assert_eq!(chomp("hello\r\n", None), "hello");
        assert_eq!(chomp("hello\n\r", None), "hello\n");
        assert_eq!(chomp("hello\r", None), "hello");
        assert_eq!(chomp("hello \n there", None), "hello \n there");
        assert_eq!(chomp("hello", Some("llo")), "he");
        assert_eq!(chomp("hello\r\n\r\n", Some("")), "hello");
        assert_eq!(chomp("hello\r\n\r\r\n", Some("")), "hello\r\n\r");
    }

    #[test]
    fn test_chr() {
        assert_eq!(chr("foo"), "f");
        assert_eq!(chr("éa"), "é");
        assert_eq!(chr(""), "");
    }

    #[test]
    fn test_count() {
        let s = "hello world";
        assert_eq!(count(s, &["lo"]), 5);
        assert_eq!(count(s, &["lo", "o"]), 2);
        assert_eq!(count(s, &["hello", "^l"]), 4);
        assert_eq!(count(s, &["ej-m"]), 4);
        assert_eq!(count(s, &[]), 0);

        let s = "hello^world";
        assert_eq!(count(s, &["\\^aeiou"]), 4);
        assert_eq!(count(s, &["a\\-eo"]), 3);

        let s = "hello world\\r\\n";
        assert_eq!(count(s, &["\\\\"]), 2);
        assert_eq!(count(s, &["\\"]), 2);
        assert_eq!(count(s, &["\\A"]), 0);
        assert_eq!(count(s, &["A-\\\\w"]), 3);
    }

    #[test]
    fn test_delete() {
        assert_eq!(delete("hello", &["l", "lo"]), "heo");
        assert_eq!(delete("hello", &["lo"]), "he");
        assert_eq!(delete("hello", &["aeiou", "^e"]), "hell");
        assert_eq!(delete("hello", &["ej-m"]), "ho");
        assert_eq!(delete("hello", &[]), "hello");
    }

    #[test]
    fn test_squeeze() {
        assert_eq!(squeeze("yellow moon", &[]), "yelow mon");
        assert_eq!(squeeze("yellow moon", &[""]), "yelow mon");
        assert_eq!(squeeze("  now   is  the", &[" "]), " now is the");
        assert_eq!(squeeze("putters shoot balls", &["m-z"]), "puters shot balls");
    }

    #[test]
    fn test_tr() {
        assert_eq!(tr("hello", "el", "ip"), "hippo");
        assert_eq!(tr("hello", "^aeiou", "*"), "*e**o");
    }

    #[test]
    fn test_delete_runes() {
        assert_eq!(delete_matching_runes("hello world", 'l'), "heo word");
        assert_eq!(delete_rune("hello world", 3), "helo world");
        assert_eq!(delete_rune("hello", 5), "hello");
        assert_eq!(delete_rune("héllo", 1), "hllo");
    }

    #[test]
    fn test_insert() {
        assert_eq!(insert("foo", 1, "bar"), "fbaroo");
        assert_eq!(insert("foo", -2, "bar"), "fobaro");
        assert_eq!(insert("foo", 0, "bar"), "barfoo");
        assert_eq!(insert("foo", -1, "bar"), "foobar");
        assert_eq!(insert("foo", 10, "bar"), "foobar");
        assert_eq!(insert("foo", -5, "bar"), "foo");
        assert_eq!(insert("héé", 2, "-"), "hé-é");
    }

    #[test]
    fn test_insert_rune() {
        let s = "helloworld";
        assert_eq!(insert_rune(s, ' ', 5), "hello world");
        assert_eq!(insert_rune(s, '!', 10), "helloworld!");
        assert_eq!(insert_runes(s, 5, &[',', ' ']), "hello, world");

        let mut out = String::new();
        for c in "hello".chars() {
            out = insert_rune(&out, c, -1);
        }
        assert_eq!(out, "hello");
    }

    #[test]
    fn test_partition() {
        assert_eq!(partition("hello", "l"), ("he", "l", "lo"));
        assert_eq!(partition("hello", "x"), ("hello", "", ""));

        let re = Regex::new(".l").unwrap();
        assert_eq!(partition("hello", &re), ("h", "el", "lo"));

        let missing = Regex::new("z").unwrap();
        assert_eq!(partition("hello", &missing), ("hello", "", ""));
    }

    #[test]
    fn test_scan() {
        let a = "cruel world";

        let whole = |items: &[&'static str]| -> Vec<ScanMatch<'static>> {
            items.iter().map(|&item| ScanMatch::Whole(item)).collect()
        };

        assert_eq!(scan(a, &Regex::new(r"\w+").unwrap()), whole(&["cruel", "world"]));
        assert_eq!(scan(a, &Regex::new("...").unwrap()), whole(&["cru", "el ", "wor"]));
        assert_eq!(
            scan(a, &Regex::new("(...)").unwrap()),
            vec![
                ScanMatch::Groups(vec!["cru"]),
                ScanMatch::Groups(vec!["el "]),
                ScanMatch::Groups(vec!["wor"]),
            ]
        );
        assert_eq!(scan("a-b-c", "-"), whole(&["-", "-"]));
        assert_eq!(scan("a b", Pattern::Whitespace), whole(&[" "]));
    }

    #[test]
    fn test_scan_unmatched_group() {
        let re = Regex::new("(a)|(b)").unwrap();
        assert_eq!(
            scan("ab", &re),
            vec![ScanMatch::Groups(vec!["a", ""]), ScanMatch::Groups(vec!["", "b"])]
        );
    }

    #[test]
    fn test_format_strings() {
        assert_eq!(format_strings(&["a", "b"]), "[\"a\", \"b\"]");
        assert_eq!(format_strings::<&str>(&[]), "[]");
    }
}
