//! Menu item variants.
//!
//! A closed set: every variant answers `render` and `is_selectable`,
//! which is all the frame compositor and the navigation machine ever ask
//! of an item. Only selectable variants (and split members) can hold
//! focus, and only while enabled.

mod ascii_art;
mod checkbox;
mod line_break;
mod radio;
mod selectable;
mod split;
mod static_item;
mod submenu;

pub use ascii_art::AsciiArtItem;
pub use checkbox::CheckboxItem;
pub use line_break::LineBreakItem;
pub use radio::RadioItem;
pub use selectable::SelectableItem;
pub use split::SplitItem;
pub use static_item::StaticItem;
pub use submenu::SubMenuItem;

use std::cell::RefCell;
use std::rc::Rc;

use crate::menu::Menu;
use crate::style::MenuStyle;
use crate::text;

/// Activation callback. Receives the currently active menu so it can
/// mutate it (disable siblings, request redraw or exit). Stored behind
/// `Rc<RefCell<..>>` so the dispatcher can hand the callback a mutable
/// borrow of the very menu that owns it.
pub type ItemCallback = Rc<RefCell<dyn FnMut(&mut Menu) -> anyhow::Result<()>>>;

/// Wrap a closure as an [`ItemCallback`].
pub fn callback<F>(f: F) -> ItemCallback
where
    F: FnMut(&mut Menu) -> anyhow::Result<()> + 'static,
{
    Rc::new(RefCell::new(f))
}

#[derive(Debug)]
pub enum MenuItem {
    Selectable(SelectableItem),
    Static(StaticItem),
    LineBreak(LineBreakItem),
    AsciiArt(AsciiArtItem),
    Checkbox(CheckboxItem),
    Radio(RadioItem),
    Split(SplitItem),
    SubMenu(SubMenuItem),
}

impl MenuItem {
    /// Whether this item can hold navigation focus right now.
    pub fn is_selectable(&self) -> bool {
        match self {
            MenuItem::Selectable(item) => item.is_enabled(),
            MenuItem::Checkbox(item) => item.is_enabled(),
            MenuItem::Radio(item) => item.is_enabled(),
            MenuItem::SubMenu(item) => item.is_enabled(),
            MenuItem::Split(item) => item.is_selectable(),
            MenuItem::Static(_) | MenuItem::LineBreak(_) | MenuItem::AsciiArt(_) => false,
        }
    }

    /// Render into lines of exactly `width` display columns.
    pub fn render(&self, style: &MenuStyle, width: usize, focused: bool) -> Vec<String> {
        match self {
            MenuItem::Selectable(item) => item.render(style, width, focused),
            MenuItem::Static(item) => item.render(width),
            MenuItem::LineBreak(item) => item.render(width),
            MenuItem::AsciiArt(item) => item.render(width),
            MenuItem::Checkbox(item) => item.render(style, width, focused),
            MenuItem::Radio(item) => item.render(style, width, focused),
            MenuItem::Split(item) => item.render(style, width, focused),
            MenuItem::SubMenu(item) => item.render(style, width, focused),
        }
    }

    /// The item's label, for variants that have one.
    pub fn text(&self) -> Option<&str> {
        match self {
            MenuItem::Selectable(item) => Some(item.label()),
            MenuItem::Static(item) => Some(item.label()),
            MenuItem::Checkbox(item) => Some(item.label()),
            MenuItem::Radio(item) => Some(item.label()),
            MenuItem::SubMenu(item) => Some(item.label()),
            MenuItem::LineBreak(_) | MenuItem::AsciiArt(_) | MenuItem::Split(_) => None,
        }
    }
}

/// Shared row layout for marker-prefixed items: marker, wrapped label,
/// optional right-aligned extra marker on the first row, continuation
/// rows indented past the marker.
pub(crate) fn render_marked_row(
    style: &MenuStyle,
    width: usize,
    focused: bool,
    label: &str,
    show_extra: bool,
) -> Vec<String> {
    let marker = style.marker(focused);
    let marker_width = text::display_width(marker);
    let extra = style.display_extra && show_extra;
    let extra_width = if extra {
        text::display_width(&style.item_extra) + 1
    } else {
        0
    };
    let text_width = width.saturating_sub(marker_width + extra_width);
    if text_width == 0 {
        return Vec::new();
    }

    text::wrap(label, text_width)
        .iter()
        .enumerate()
        .map(|(row, line)| {
            if row == 0 && extra {
                format!("{}{} {}", marker, text::pad(line, text_width), style.item_extra)
            } else if row == 0 {
                format!("{}{}", marker, text::pad(line, text_width))
            } else {
                format!(
                    "{}{}",
                    " ".repeat(marker_width),
                    text::pad(line, text_width + extra_width)
                )
            }
        })
        .collect()
}
