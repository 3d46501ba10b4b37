//! Non-interactive text rows.

use crate::text;

#[derive(Debug, Clone)]
pub struct StaticItem {
    label: String,
}

impl StaticItem {
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
        }
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn render(&self, width: usize) -> Vec<String> {
        text::wrap(&self.label, width)
            .iter()
            .map(|line| text::pad(line, width))
            .collect()
    }
}
