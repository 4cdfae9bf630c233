/// Replace each run of invalid UTF-8 in `bytes` with `repl`, or with U+FFFD
/// when no replacement is given.
///
/// ```
/// use stdx::stringx::scrub;
///
/// let bytes = b"ab\xEF\xBF\xBDcd\xFF\xCEefg\xFF\xFC\xFD\xFAhijk";
/// assert_eq!(scrub(bytes, None), "ab\u{FFFD}cd\u{FFFD}efg\u{FFFD}hijk");
/// assert_eq!(scrub(bytes, Some("")), "ab\u{FFFD}cdefghijk");
/// ```
pub fn scrub(bytes: impl AsRef<[u8]>, repl: Option<&str>) -> String {
    let repl = repl.unwrap_or("\u{FFFD}");
    scrub_with(bytes, |_| repl.to_string())
}

/// Like [`scrub`], but each run of invalid bytes is handed to `replace` and
/// its result is inserted instead.
pub fn scrub_with<F>(bytes: impl AsRef<[u8]>, mut replace: F) -> String
where
    F: FnMut(&[u8]) -> String,
{
    let bytes = bytes.as_ref();
    let mut out = String::with_capacity(bytes.len());
    let mut invalid: Vec<u8> = Vec::new();

    for chunk in bytes.utf8_chunks() {
        if !chunk.valid().is_empty() {
            if !invalid.is_empty() {
                out.push_str(&replace(&invalid));
                invalid.clear();
            }
            out.push_str(chunk.valid());
        }
        invalid.extend_from_slice(chunk.invalid());
    }

    if !invalid.is_empty() {
        out.push_str(&replace(&invalid));
    }

    out
}
