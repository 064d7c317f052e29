//! Pure text wrapping utilities and dimensional constants for the NoteEditor.
//!
//! These are stateless helpers with no dependency on NoteEditor or CursorState.

/// Border (2) + padding (2) consumed horizontally by the bordered block
pub(super) const HORIZONTAL_OVERHEAD: u16 = 4;
/// Top + bottom borders consumed vertically
pub(super) const VERTICAL_OVERHEAD: u16 = 2;
/// Offset from area edge to content (border width)
pub(super) const BORDER_OFFSET: u16 = 1;

/// Build textwrap options configured for the editor inner width.
pub(super) fn wrap_options(inner_width: u16) -> textwrap::Options<'static> {
    textwrap::Options::new(inner_width as usize)
        .break_words(true)
        .word_separator(textwrap::WordSeparator::AsciiSpace)
}

/// Calculate the inner content width after subtracting border/padding overhead.
/// Returns 0 if the area is too narrow.
pub(super) fn inner_width(content_width: u16) -> u16 {
    content_width.saturating_sub(HORIZONTAL_OVERHEAD)
}

/// Content lines visible inside an area of the given height.
pub(super) fn visible_lines(area_height: u16) -> u16 {
    area_height.saturating_sub(VERTICAL_OVERHEAD).max(1)
}

/// Count wrapped lines for the given text, accounting for trailing newlines
/// that textwrap may not represent as empty lines.
pub(super) fn wrap_line_count(text: &str, width: u16) -> u16 {
    if width == 0 || text.is_empty() {
        return 1;
    }

    let lines = textwrap::wrap(text, wrap_options(width));
    let mut count = (lines.len() as u16).max(1);

    // textwrap doesn't always produce an empty trailing line for a trailing newline
    if text.ends_with('\n') && !lines.last().is_some_and(|l| l.is_empty()) {
        count += 1;
    }

    count
}

/// Find the byte offset of the previous character boundary before `pos` in `text`.
pub(super) fn prev_char_boundary(text: &str, pos: usize) -> usize {
    text[..pos]
        .char_indices()
        .next_back()
        .map(|(i, _)| i)
        .unwrap_or(0)
}

/// Find the byte offset of the next character boundary after `pos` in `text`.
pub(super) fn next_char_boundary(text: &str, pos: usize) -> usize {
    text[pos..]
        .char_indices()
        .nth(1)
        .map(|(i, _)| pos + i)
        .unwrap_or(text.len())
}

#[cfg(test)]
mod tests {
    use super::*;

    // -- wrap_line_count -------------------------------------------------

    #[test]
    fn wrap_line_count_empty_string() {
        assert_eq!(wrap_line_count("", 80), 1);
    }

    #[test]
    fn wrap_line_count_zero_width() {
        assert_eq!(wrap_line_count("hello", 0), 1);
    }

    #[test]
    fn wrap_line_count_single_line_fits() {
        assert_eq!(wrap_line_count("hello", 80), 1);
    }

    #[test]
    fn wrap_line_count_wraps_long_text() {
        // 10 chars into a 5-wide column -> 2 lines
        assert_eq!(wrap_line_count("aaaaaaaaaa", 5), 2);
    }

    #[test]
    fn wrap_line_count_trailing_newline_adds_line() {
        assert_eq!(wrap_line_count("hello\n", 80), 2);
    }

    #[test]
    fn wrap_line_count_explicit_newlines() {
        assert_eq!(wrap_line_count("a\nb\nc", 80), 3);
    }

    // -- visible_lines ---------------------------------------------------

    #[test]
    fn visible_lines_subtracts_borders() {
        assert_eq!(visible_lines(10), 8);
    }

    #[test]
    fn visible_lines_never_zero() {
        assert_eq!(visible_lines(0), 1);
        assert_eq!(visible_lines(2), 1);
    }

    // -- prev_char_boundary ----------------------------------------------

    #[test]
    fn prev_char_boundary_ascii() {
        assert_eq!(prev_char_boundary("abc", 2), 1);
        assert_eq!(prev_char_boundary("abc", 1), 0);
    }

    #[test]
    fn prev_char_boundary_shan_glyph() {
        // "aၸb" — 'ၸ' (U+1078) is 3 bytes at offset 1
        let s = "aၸb";
        assert_eq!(s.len(), 5);
        // From byte 5 (end), previous is byte 4 ('b')
        assert_eq!(prev_char_boundary(s, 5), 4);
        // From byte 4 ('b'), previous is byte 1 (the glyph)
        assert_eq!(prev_char_boundary(s, 4), 1);
        // From byte 1 (the glyph), previous is byte 0 ('a')
        assert_eq!(prev_char_boundary(s, 1), 0);
    }

    // -- next_char_boundary ----------------------------------------------

    #[test]
    fn next_char_boundary_ascii() {
        assert_eq!(next_char_boundary("abc", 0), 1);
        assert_eq!(next_char_boundary("abc", 2), 3);
    }

    #[test]
    fn next_char_boundary_shan_glyph() {
        let s = "aၸb";
        // From byte 1 (glyph start), next is byte 4 ('b')
        assert_eq!(next_char_boundary(s, 1), 4);
        // From byte 0 ('a'), next is byte 1 (glyph)
        assert_eq!(next_char_boundary(s, 0), 1);
    }

    #[test]
    fn next_char_boundary_all_shan_text() {
        // "ၸတ" — two 3-byte glyphs
        let s = "ၸတ";
        assert_eq!(next_char_boundary(s, 0), 3);
        assert_eq!(next_char_boundary(s, 3), 6);
        assert_eq!(prev_char_boundary(s, 6), 3);
        assert_eq!(prev_char_boundary(s, 3), 0);
    }
}
