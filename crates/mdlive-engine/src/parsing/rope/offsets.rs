//! Conversions between character offsets (what the caret counts) and byte
//! offsets (what the rope and `str` slicing use).

/// Number of Unicode scalar values in `s`.
pub fn char_len(s: &str) -> usize {
    s.chars().count()
}

/// Byte offset of the `char_offset`-th character of `s`, clamped to `s.len()`.
pub fn byte_of_char(s: &str, char_offset: usize) -> usize {
    s.char_indices()
        .nth(char_offset)
        .map_or(s.len(), |(byte, _)| byte)
}
