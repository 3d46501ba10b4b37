//! Horizontal rule rows built from a repeating fill string.

use unicode_width::UnicodeWidthChar;

use crate::text;

#[derive(Debug, Clone)]
pub struct LineBreakItem {
    fill: String,
    lines: usize,
}

impl LineBreakItem {
    pub fn new(fill: impl Into<String>, lines: usize) -> Self {
        let fill = fill.into();
        Self {
            fill: if fill.is_empty() { " ".to_string() } else { fill },
            lines: lines.max(1),
        }
    }

    pub fn fill(&self) -> &str {
        &self.fill
    }

    pub fn lines(&self) -> usize {
        self.lines
    }

    pub fn render(&self, width: usize) -> Vec<String> {
        let row = fill_row(&self.fill, width);
        vec![row; self.lines]
    }
}

/// Repeat `fill` cyclically until `width` columns are covered, cutting
/// at glyph boundaries.
fn fill_row(fill: &str, width: usize) -> String {
    let mut out = String::new();
    let mut used = 0;
    'outer: loop {
        for ch in fill.chars() {
            let w = ch.width().unwrap_or(0);
            if used + w > width {
                break 'outer;
            }
            out.push(ch);
            used += w;
            if used == width {
                break 'outer;
            }
        }
        if used == 0 {
            break; // fill has no visible columns
        }
    }
    text::pad(&out, width)
}
