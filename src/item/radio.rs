//! Exclusive-choice item. Activation marks it and clears its sibling
//! radios (handled by the dispatcher, which knows the siblings).

use std::fmt;

use super::{render_marked_row, ItemCallback};
use crate::style::MenuStyle;

const CHOSEN: &str = "[●] ";
const UNCHOSEN: &str = "[○] ";

pub struct RadioItem {
    label: String,
    callback: ItemCallback,
    enabled: bool,
    chosen: bool,
}

impl RadioItem {
    pub fn new(label: impl Into<String>, callback: ItemCallback) -> Self {
        Self {
            label: label.into(),
            callback,
            enabled: true,
            chosen: false,
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

    pub fn is_chosen(&self) -> bool {
        self.chosen
    }

    pub fn set_chosen(&mut self, chosen: bool) {
        self.chosen = chosen;
    }

    pub(crate) fn callback(&self) -> ItemCallback {
        self.callback.clone()
    }

    pub fn render(&self, style: &MenuStyle, width: usize, focused: bool) -> Vec<String> {
        let glyph = if self.chosen { CHOSEN } else { UNCHOSEN };
        let label = format!("{}{}", glyph, self.label);
        render_marked_row(style, width, focused, &label, false)
    }
}

impl fmt::Debug for RadioItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RadioItem")
            .field("label", &self.label)
            .field("enabled", &self.enabled)
            .field("chosen", &self.chosen)
            .finish_non_exhaustive()
    }
}
