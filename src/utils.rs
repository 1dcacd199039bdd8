use unicode_width::UnicodeWidthStr;

/// Uppercase the first character, leaving the rest untouched.
pub fn first_uppercased(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Hit counter as shown in the status row, e.g. `05/50`.
pub fn format_hit_count(hits: usize, total: usize) -> String {
    format!("{:02}/{}", hits, total)
}

/// Byte offset of the `char_index`-th character, clamped to the end of the string.
pub fn byte_index(s: &str, char_index: usize) -> usize {
    s.char_indices()
        .nth(char_index)
        .map_or(s.len(), |(idx, _)| idx)
}

/// Terminal column of a cursor placed before the `char_index`-th character.
pub fn cursor_column(s: &str, char_index: usize) -> usize {
    s[..byte_index(s, char_index)].width()
}
