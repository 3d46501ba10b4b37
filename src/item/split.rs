//! A row-level cluster of items sharing horizontal space, with its own
//! focus cursor nested inside the parent menu's cursor.

use super::{ItemCallback, MenuItem};
use crate::style::MenuStyle;

#[derive(Debug)]
pub struct SplitItem {
    items: Vec<MenuItem>,
    selected: Option<usize>,
}

impl SplitItem {
    pub fn new(items: Vec<MenuItem>) -> Self {
        let selected = items.iter().position(|item| item.is_selectable());
        Self { items, selected }
    }

    pub fn items(&self) -> &[MenuItem] {
        &self.items
    }

    pub fn items_mut(&mut self) -> &mut [MenuItem] {
        &mut self.items
    }

    pub fn selected_index(&self) -> Option<usize> {
        self.selected
    }

    /// Whether any member can hold focus.
    pub fn is_selectable(&self) -> bool {
        self.items.iter().any(|item| item.is_selectable())
    }

    /// Advance the internal cursor to the next enabled member, wrapping
    /// at the edge. Wrapping never propagates to the parent menu.
    pub fn select_next(&mut self) -> bool {
        self.advance(1)
    }

    pub fn select_previous(&mut self) -> bool {
        self.advance(-1)
    }

    fn advance(&mut self, step: isize) -> bool {
        let len = self.items.len();
        if len == 0 {
            return false;
        }
        let start = match self.selected {
            Some(current) => (current as isize + step).rem_euclid(len as isize) as usize,
            None => 0,
        };
        for offset in 0..len {
            let idx = (start as isize + step * offset as isize).rem_euclid(len as isize) as usize;
            if self.items[idx].is_selectable() {
                let moved = self.selected != Some(idx);
                self.selected = Some(idx);
                return moved;
            }
        }
        false
    }

    /// Re-anchor the cursor if its member vanished or became disabled.
    pub fn revalidate_selection(&mut self) {
        let valid = self
            .selected
            .map(|idx| idx < self.items.len() && self.items[idx].is_selectable())
            .unwrap_or(false);
        if !valid {
            self.selected = self.items.iter().position(|item| item.is_selectable());
        }
    }

    /// Activate the internally focused member: toggles checkboxes,
    /// marks radios (clearing sibling radios in this group) and returns
    /// the callback to run, if any.
    pub(crate) fn activate_focused(&mut self) -> Option<ItemCallback> {
        let idx = self.selected?;
        let callback = match self.items.get_mut(idx)? {
            MenuItem::Selectable(item) if item.is_enabled() => Some(item.callback()),
            MenuItem::Checkbox(item) if item.is_enabled() => {
                item.toggle();
                Some(item.callback())
            }
            MenuItem::Radio(item) if item.is_enabled() => {
                item.set_chosen(true);
                Some(item.callback())
            }
            _ => None,
        }?;
        if matches!(self.items[idx], MenuItem::Radio(_)) {
            for (other, item) in self.items.iter_mut().enumerate() {
                if other != idx {
                    if let MenuItem::Radio(radio) = item {
                        radio.set_chosen(false);
                    }
                }
            }
        }
        Some(callback)
    }

    /// Render members side by side. Width is divided evenly; the
    /// remainder goes to the last segment.
    pub fn render(&self, style: &MenuStyle, width: usize, focused: bool) -> Vec<String> {
        let count = self.items.len();
        if count == 0 {
            return Vec::new();
        }
        let segment = width / count;
        if segment == 0 {
            return Vec::new();
        }
        let last = width - segment * (count - 1);

        let rendered: Vec<Vec<String>> = self
            .items
            .iter()
            .enumerate()
            .map(|(idx, item)| {
                let seg_width = if idx == count - 1 { last } else { segment };
                let member_focused = focused && self.selected == Some(idx);
                item.render(style, seg_width, member_focused)
            })
            .collect();

        let rows = rendered.iter().map(Vec::len).max().unwrap_or(0);
        (0..rows)
            .map(|row| {
                rendered
                    .iter()
                    .enumerate()
                    .map(|(idx, lines)| {
                        let seg_width = if idx == count - 1 { last } else { segment };
                        lines
                            .get(row)
                            .cloned()
                            .unwrap_or_else(|| " ".repeat(seg_width))
                    })
                    .collect::<String>()
            })
            .collect()
    }
}
