//! The basic action item: a label plus an activation callback.

use std::fmt;

use super::{render_marked_row, ItemCallback};
use crate::style::MenuStyle;

pub struct SelectableItem {
    label: String,
    callback: ItemCallback,
    enabled: bool,
    show_extra: bool,
}

impl SelectableItem {
    pub fn new(label: impl Into<String>, callback: ItemCallback) -> Self {
        Self {
            label: label.into(),
            callback,
            enabled: true,
            show_extra: false,
        }
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn set_label(&mut self, label: impl Into<String>) {
        self.label = label.into();
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    pub fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
    }

    pub fn shows_extra(&self) -> bool {
        self.show_extra
    }

    pub fn set_show_extra(&mut self, show: bool) {
        self.show_extra = show;
    }

    pub(crate) fn callback(&self) -> ItemCallback {
        self.callback.clone()
    }

    pub fn render(&self, style: &MenuStyle, width: usize, focused: bool) -> Vec<String> {
        render_marked_row(style, width, focused, &self.label, self.show_extra)
    }
}

impl fmt::Debug for SelectableItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SelectableItem")
            .field("label", &self.label)
            .field("enabled", &self.enabled)
            .finish_non_exhaustive()
    }
}
