//! Toggleable action item. Activation flips the checked state before
//! running the callback.

use std::fmt;

use super::{render_marked_row, ItemCallback};
use crate::style::MenuStyle;

const CHECKED: &str = "[✔] ";
const UNCHECKED: &str = "[ ] ";

pub struct CheckboxItem {
    label: String,
    callback: ItemCallback,
    enabled: bool,
    checked: bool,
}

impl CheckboxItem {
    pub fn new(label: impl Into<String>, callback: ItemCallback) -> Self {
        Self {
            label: label.into(),
            callback,
            enabled: true,
            checked: false,
        }
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    pub fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
    }

    pub fn is_checked(&self) -> bool {
        self.checked
    }

    pub fn set_checked(&mut self, checked: bool) {
        self.checked = checked;
    }

    pub fn toggle(&mut self) {
        self.checked = !self.checked;
    }

    pub(crate) fn callback(&self) -> ItemCallback {
        self.callback.clone()
    }

    pub fn render(&self, style: &MenuStyle, width: usize, focused: bool) -> Vec<String> {
        let glyph = if self.checked { CHECKED } else { UNCHECKED };
        let label = format!("{}{}", glyph, self.label);
        render_marked_row(style, width, focused, &label, false)
    }
}

impl fmt::Debug for CheckboxItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CheckboxItem")
            .field("label", &self.label)
            .field("enabled", &self.enabled)
            .field("checked", &self.checked)
            .finish_non_exhaustive()
    }
}
