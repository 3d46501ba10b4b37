//! Width-aware text utilities shared by every item renderer.
//!
//! All measurements count visible terminal columns, not bytes or chars,
//! so wide CJK glyphs and combining marks line up inside the frame.

use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Marker appended when a line is truncated to fit.
pub const ELLIPSIS: &str = "…";

/// Horizontal placement for unwrapped content (ASCII art rows).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum HorizontalAlign {
    Left,
    #[default]
    Center,
    Right,
}

/// Visible terminal columns occupied by `s`.
pub fn display_width(s: &str) -> usize {
    UnicodeWidthStr::width(s)
}

/// Wrap `s` to lines of at most `max_width` columns, breaking at word
/// boundaries and hard-breaking tokens longer than a line. The result is
/// finite and can be re-iterated freely.
pub fn wrap(s: &str, max_width: usize) -> Vec<String> {
    if max_width == 0 {
        return Vec::new();
    }
    textwrap::wrap(s, max_width)
        .into_iter()
        .map(|line| line.into_owned())
        .collect()
}

/// Truncate `line` to `max_width` columns, ending in the ellipsis
/// marker. Keeps whole glyphs: a wide character that would straddle the
/// boundary is dropped rather than split.
pub fn truncate(line: &str, max_width: usize) -> String {
    let ellipsis_width = display_width(ELLIPSIS);
    if max_width < ellipsis_width {
        return String::new();
    }
    let budget = max_width - ellipsis_width;
    let mut out = String::new();
    let mut used = 0;
    for ch in line.chars() {
        let w = ch.width().unwrap_or(0);
        if used + w > budget {
            break;
        }
        out.push(ch);
        used += w;
    }
    out.push_str(ELLIPSIS);
    out
}

/// Center `line` within `max_width`, padding both sides with spaces so
/// the result is exactly `max_width` columns. Overlong input is
/// truncated with the ellipsis marker.
pub fn center(line: &str, max_width: usize) -> String {
    align(line, max_width, HorizontalAlign::Center)
}

/// Place `line` within `max_width` without wrapping; pads with spaces to
/// exactly `max_width` columns, truncating overlong input.
pub fn align(line: &str, max_width: usize, position: HorizontalAlign) -> String {
    let width = display_width(line);
    if width > max_width {
        let cut = truncate(line, max_width);
        let deficit = max_width - display_width(&cut);
        // A dropped wide glyph can leave the cut a column short.
        return format!("{}{}", cut, " ".repeat(deficit));
    }
    let total = max_width - width;
    let (left, right) = match position {
        HorizontalAlign::Left => (0, total),
        HorizontalAlign::Center => (total / 2, total - total / 2),
        HorizontalAlign::Right => (total, 0),
    };
    format!("{}{}{}", " ".repeat(left), line, " ".repeat(right))
}

/// Pad `line` on the right to exactly `max_width` columns, truncating
/// overlong input.
pub fn pad(line: &str, max_width: usize) -> String {
    align(line, max_width, HorizontalAlign::Left)
}
