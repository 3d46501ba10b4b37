//! Multi-line ASCII art blocks with block-level alignment.

use crate::text::{self, HorizontalAlign};

#[derive(Debug, Clone)]
pub struct AsciiArtItem {
    art: String,
    position: HorizontalAlign,
    alt: Option<String>,
}

impl AsciiArtItem {
    pub fn new(art: impl Into<String>, position: HorizontalAlign) -> Self {
        Self {
            art: art.into(),
            position,
            alt: None,
        }
    }

    pub fn with_alt(
        art: impl Into<String>,
        position: HorizontalAlign,
        alt: impl Into<String>,
    ) -> Self {
        Self {
            art: art.into(),
            position,
            alt: Some(alt.into()),
        }
    }

    pub fn art(&self) -> &str {
        &self.art
    }

    pub fn position(&self) -> HorizontalAlign {
        self.position
    }

    pub fn alt(&self) -> Option<&str> {
        self.alt.as_deref()
    }

    /// Widest art row in display columns.
    pub fn natural_width(&self) -> usize {
        self.art.lines().map(text::display_width).max().unwrap_or(0)
    }

    pub fn render(&self, width: usize) -> Vec<String> {
        if self.natural_width() > width {
            // Art that cannot fit degrades to the alternate text, or to
            // nothing at all; never an error.
            return match &self.alt {
                Some(alt) => text::wrap(alt, width)
                    .iter()
                    .map(|line| text::align(line, width, self.position))
                    .collect(),
                None => Vec::new(),
            };
        }

        // Pad rows to the block width first so alignment moves the whole
        // block, not each row independently.
        let block = self.natural_width();
        self.art
            .lines()
            .map(|line| text::align(&text::pad(line, block), width, self.position))
            .collect()
    }
}
