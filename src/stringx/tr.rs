use super::charset::CharSet;
use std::collections::HashMap;

/// Maps chars of a `from` set onto a `to` set, Ruby `String#tr` style.
///
/// A `to` shorter than `from` is padded with its last char. An empty `to`
/// deletes every char of `from`. A negated `from` (`^aeiou`) maps everything
/// outside it to the last char of `to`.
pub struct Translator {
    from: CharSet,
    table: HashMap<char, Option<char>>,
    fallback: Option<char>,
}

impl Translator {
    pub fn new(from: &str, to: &str) -> Self {
        let from = CharSet::parse(from);
        let to: Vec<char> = CharSet::parse_literal(to).chars().collect();
        let fallback = to.last().copied();

        let mut table = HashMap::new();
        if !from.is_negated() {
            for (idx, c) in from.chars().enumerate() {
                table.insert(c, to.get(idx).copied().or(fallback));
            }
        }

        Self {
            from,
            table,
            fallback,
        }
    }

    pub fn translate(&self, s: &str) -> String {
        let mut out = String::with_capacity(s.len());

        for c in s.chars() {
            let mapped = if self.from.is_negated() {
                if self.from.contains(c) {
                    self.fallback
                } else {
                    Some(c)
                }
            } else {
                self.table.get(&c).copied().unwrap_or(Some(c))
            };
            if let Some(mapped) = mapped {
                out.push(mapped);
            }
        }

        out
    }
}
