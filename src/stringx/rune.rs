/// Byte offset of every char in `s`, in order.
pub fn rune_indices(s: &str) -> Vec<usize> {
    s.char_indices().map(|(offset, _)| offset).collect()
}

/// Char index of the char starting at byte `offset`, or `None` when `offset`
/// is not the start of a char.
pub fn rune_index_from_start_byte(s: &str, offset: usize) -> Option<usize> {
    s.char_indices().position(|(start, _)| start == offset)
}

/// Byte offset of char `index`, or `s.len()` when `index` is past the end.
pub(crate) fn byte_offset(s: &str, index: usize) -> usize {
    s.char_indices().nth(index).map_or(s.len(), |(offset, _)| offset)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rune_indices() {
        assert_eq!(rune_indices("aéb"), vec![0, 1, 3]);
        assert!(rune_indices("").is_empty());
    }

    #[test]
    fn test_rune_index_from_start_byte() {
        assert_eq!(rune_index_from_start_byte("aéb", 3), Some(2));
        assert_eq!(rune_index_from_start_byte("aéb", 2), None);
        assert_eq!(rune_index_from_start_byte("", 0), None);
    }

    #[test]
    fn test_byte_offset() {
        assert_eq!(byte_offset("aéb", 2), 3);
        assert_eq!(byte_offset("aéb", 9), 4);
    }
}
