//! The menu record: ordered items, resolved style, selection cursor.
//!
//! Structure is fixed at build time; callbacks may still mutate item
//! state (enabled flags, labels, even the item list), so selection
//! validity is re-established after every mutation point rather than
//! cached across it.

use std::collections::HashMap;
use std::rc::Rc;

use crate::item::MenuItem;
use crate::style::MenuStyle;

#[derive(Debug)]
pub struct Menu {
    title: Option<String>,
    items: Vec<MenuItem>,
    style: Rc<MenuStyle>,
    selected: Option<usize>,
    shortcuts: HashMap<char, usize>,
    exit_requested: bool,
    back_requested: bool,
    redraw_requested: bool,
}

impl Menu {
    pub fn new(
        title: Option<String>,
        items: Vec<MenuItem>,
        style: Rc<MenuStyle>,
        shortcuts: HashMap<char, usize>,
    ) -> Self {
        let selected = items.iter().position(|item| item.is_selectable());
        Self {
            title,
            items,
            style,
            selected,
            shortcuts,
            exit_requested: false,
            back_requested: false,
            redraw_requested: false,
        }
    }

    pub fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    pub fn items(&self) -> &[MenuItem] {
        &self.items
    }

    pub fn items_mut(&mut self) -> &mut Vec<MenuItem> {
        &mut self.items
    }

    pub fn style(&self) -> &Rc<MenuStyle> {
        &self.style
    }

    pub fn selected_index(&self) -> Option<usize> {
        self.selected
    }

    /// Convenience for callbacks: flip an item's enabled flag. The
    /// cursor is re-anchored if it pointed at the item.
    pub fn set_item_enabled(&mut self, index: usize, enabled: bool) {
        match self.items.get_mut(index) {
            Some(MenuItem::Selectable(item)) => item.set_enabled(enabled),
            Some(MenuItem::Checkbox(item)) => item.set_enabled(enabled),
            Some(MenuItem::Radio(item)) => item.set_enabled(enabled),
            Some(MenuItem::SubMenu(item)) => item.set_enabled(enabled),
            _ => {}
        }
        self.revalidate_selection();
    }

    /// Move focus to the next enabled selectable, wrapping past the end.
    /// Returns whether the cursor moved.
    pub fn select_next(&mut self) -> bool {
        self.advance(1)
    }

    /// Move focus to the previous enabled selectable, wrapping past the
    /// start.
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
        self.selected = None;
        false
    }

    /// Reset focus to the first enabled selectable (used when a
    /// sub-menu is entered).
    pub fn select_first(&mut self) {
        self.selected = self.items.iter().position(|item| item.is_selectable());
    }

    /// Point focus at a specific item, if it can hold focus.
    pub fn set_selection(&mut self, index: usize) -> bool {
        if self
            .items
            .get(index)
            .map(MenuItem::is_selectable)
            .unwrap_or(false)
        {
            self.selected = Some(index);
            true
        } else {
            false
        }
    }

    /// Re-anchor the cursor after arbitrary item mutation: keep it if
    /// still valid, otherwise scan forward (wrapping) from its old
    /// position; `None` when nothing is selectable.
    pub fn revalidate_selection(&mut self) {
        let len = self.items.len();
        if len == 0 {
            self.selected = None;
            return;
        }
        if let Some(current) = self.selected {
            if current < len && self.items[current].is_selectable() {
                if let MenuItem::Split(split) = &mut self.items[current] {
                    split.revalidate_selection();
                }
                return;
            }
            let start = current.min(len - 1);
            for offset in 0..len {
                let idx = (start + offset) % len;
                if self.items[idx].is_selectable() {
                    self.selected = Some(idx);
                    return;
                }
            }
        } else {
            self.select_first();
            return;
        }
        self.selected = None;
    }

    /// Item index bound to a printable shortcut, if any.
    pub fn shortcut_target(&self, key: char) -> Option<usize> {
        self.shortcuts.get(&key.to_ascii_lowercase()).copied()
    }

    /// Ask the session to end after the current dispatch.
    pub fn request_exit(&mut self) {
        self.exit_requested = true;
    }

    /// Ask the stack to return to the parent menu after the current
    /// dispatch.
    pub fn request_back(&mut self) {
        self.back_requested = true;
    }

    /// Ask the session for a redraw before input is next awaited.
    pub fn request_redraw(&mut self) {
        self.redraw_requested = true;
    }

    pub(crate) fn take_exit_request(&mut self) -> bool {
        std::mem::take(&mut self.exit_requested)
    }

    pub(crate) fn take_back_request(&mut self) -> bool {
        std::mem::take(&mut self.back_requested)
    }

    pub(crate) fn take_redraw_request(&mut self) -> bool {
        std::mem::take(&mut self.redraw_requested)
    }

    /// Clear every radio item except `keep` (single-choice semantics at
    /// menu level; splits manage their own members).
    pub(crate) fn clear_sibling_radios(&mut self, keep: usize) {
        for (idx, item) in self.items.iter_mut().enumerate() {
            if idx != keep {
                if let MenuItem::Radio(radio) = item {
                    radio.set_chosen(false);
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::item::{callback, LineBreakItem, SelectableItem, StaticItem};
    use crate::style::{ColourDepth, StyleSettings, TerminalCaps};

    fn style() -> Rc<MenuStyle> {
        Rc::new(
            StyleSettings::default()
                .resolve(TerminalCaps::new(100, ColourDepth::Ansi8))
                .unwrap(),
        )
    }

    fn selectable(label: &str) -> MenuItem {
        MenuItem::Selectable(SelectableItem::new(label, callback(|_| Ok(()))))
    }

    fn menu_with(items: Vec<MenuItem>) -> Menu {
        Menu::new(None, items, style(), HashMap::new())
    }

    #[test]
    fn test_initial_selection_skips_non_selectable() {
        let menu = menu_with(vec![
            MenuItem::Static(StaticItem::new("header")),
            MenuItem::LineBreak(LineBreakItem::new("-", 1)),
            selectable("First"),
        ]);
        assert_eq!(menu.selected_index(), Some(2));
    }

    #[test]
    fn test_navigation_wraps_cyclically() {
        let mut menu = menu_with(vec![
            selectable("One"),
            MenuItem::Static(StaticItem::new("between")),
            selectable("Two"),
            selectable("Three"),
        ]);
        assert_eq!(menu.selected_index(), Some(0));
        menu.select_next();
        assert_eq!(menu.selected_index(), Some(2));
        menu.select_next();
        assert_eq!(menu.selected_index(), Some(3));
        // Down from the last wraps to the first.
        menu.select_next();
        assert_eq!(menu.selected_index(), Some(0));
        // Up from the first wraps to the last.
        menu.select_previous();
        assert_eq!(menu.selected_index(), Some(3));
    }

    #[test]
    fn test_disabled_items_skipped() {
        let mut menu = menu_with(vec![
            selectable("One"),
            selectable("Two"),
            selectable("Three"),
        ]);
        menu.set_item_enabled(1, false);
        menu.select_next();
        assert_eq!(menu.selected_index(), Some(2));
        menu.select_previous();
        assert_eq!(menu.selected_index(), Some(0));
    }

    #[test]
    fn test_empty_menu_has_no_selection() {
        let mut menu = menu_with(vec![MenuItem::Static(StaticItem::new("text only"))]);
        assert_eq!(menu.selected_index(), None);
        menu.select_next();
        menu.select_previous();
        assert_eq!(menu.selected_index(), None);
    }

    #[test]
    fn test_disabling_focused_item_reanchors_cursor() {
        let mut menu = menu_with(vec![
            selectable("One"),
            selectable("Two"),
            selectable("Three"),
        ]);
        assert_eq!(menu.selected_index(), Some(0));
        menu.set_item_enabled(0, false);
        assert_eq!(menu.selected_index(), Some(1));
    }

    #[test]
    fn test_disabling_everything_clears_cursor() {
        let mut menu = menu_with(vec![selectable("Only")]);
        menu.set_item_enabled(0, false);
        assert_eq!(menu.selected_index(), None);
        // Re-enabling makes it selectable again on revalidation.
        menu.set_item_enabled(0, true);
        assert_eq!(menu.selected_index(), Some(0));
    }

    #[test]
    fn test_structural_mutation_revalidates() {
        let mut menu = menu_with(vec![selectable("One"), selectable("Two")]);
        menu.select_next();
        assert_eq!(menu.selected_index(), Some(1));
        menu.items_mut().pop();
        menu.revalidate_selection();
        assert_eq!(menu.selected_index(), Some(0));
    }

    #[test]
    fn test_set_selection_rejects_non_selectable() {
        let mut menu = menu_with(vec![
            selectable("One"),
            MenuItem::Static(StaticItem::new("text")),
        ]);
        assert!(!menu.set_selection(1));
        assert!(!menu.set_selection(9));
        assert!(menu.set_selection(0));
    }
}
