//! Fixed-width text helpers.
//!
//! Widths are counted in chars; every glyph the dashboard draws itself is
//! single-cell.

/// Bar glyph used in the phase summary.
pub const BAR_GLYPH: char = '█';
/// Longest bar drawn in the phase summary.
pub const MAX_BAR_LEN: usize = 20;

pub fn char_width(s: &str) -> usize {
    s.chars().count()
}

/// Keeps at most `max` chars of `s`.
pub fn truncate(s: &str, max: usize) -> String {
    s.chars().take(max).collect()
}

/// Column at which `text` is centered on a line `width` cells wide.
pub fn centered_col(text: &str, width: u16) -> u16 {
    let len = u16::try_from(char_width(text)).unwrap_or(u16::MAX);
    width.saturating_sub(len) / 2
}

/// `glyph` repeated `width` times.
pub fn repeat_to_width(glyph: char, width: u16) -> String {
    std::iter::repeat_n(glyph, usize::from(width)).collect()
}

/// Summary bar for a phase with `count` records: one glyph per three records.
pub fn bar(count: usize) -> String {
    std::iter::repeat_n(BAR_GLYPH, (count / 3).min(MAX_BAR_LEN)).collect()
}
