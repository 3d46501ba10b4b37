//! Launcher for a nested menu. Renders like a selectable item;
//! activating it pushes the owned child menu onto the stack.

use crate::menu::Menu;
use crate::style::MenuStyle;

use super::render_marked_row;

#[derive(Debug)]
pub struct SubMenuItem {
    label: String,
    menu: Menu,
    enabled: bool,
}

impl SubMenuItem {
    pub fn new(label: impl Into<String>, menu: Menu) -> Self {
        Self {
            label: label.into(),
            menu,
            enabled: true,
        }
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn menu(&self) -> &Menu {
        &self.menu
    }

    pub fn menu_mut(&mut self) -> &mut Menu {
        &mut self.menu
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    pub fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
    }

    pub fn render(&self, style: &MenuStyle, width: usize, focused: bool) -> Vec<String> {
        render_marked_row(style, width, focused, &self.label, false)
    }
}
