//! Fluent menu assembly.
//!
//! A builder collects items and style overrides, then `build()` resolves
//! everything into an immutable menu tree: colours validated, style
//! shared with or split from the parent, default "Exit"/"Go Back" items
//! appended, auto shortcuts extracted from labels.

use std::collections::HashMap;
use std::rc::Rc;

use crate::error::MenuError;
use crate::item::{
    callback, AsciiArtItem, CheckboxItem, ItemCallback, LineBreakItem, MenuItem, RadioItem,
    SelectableItem, SplitItem, StaticItem, SubMenuItem,
};
use crate::menu::Menu;
use crate::style::{BorderSpec, Colour, MarginSetting, MenuStyle, StyleSettings, TerminalCaps};
use crate::text::HorizontalAlign;

const DEFAULT_EXIT_TEXT: &str = "Exit";
const DEFAULT_GO_BACK_TEXT: &str = "Go Back";

pub struct MenuBuilder {
    caps: TerminalCaps,
    title: Option<String>,
    items: Vec<BuilderItem>,
    style: StyleSettings,
    style_touched: bool,
    default_items: bool,
    exit_text: String,
    go_back_text: String,
    auto_shortcuts: bool,
    is_root: bool,
    launcher_disabled: bool,
}

impl std::fmt::Debug for MenuBuilder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MenuBuilder")
            .field("caps", &self.caps)
            .field("title", &self.title)
            .field("items", &self.items.len())
            .field("style_touched", &self.style_touched)
            .field("default_items", &self.default_items)
            .field("exit_text", &self.exit_text)
            .field("go_back_text", &self.go_back_text)
            .field("auto_shortcuts", &self.auto_shortcuts)
            .field("is_root", &self.is_root)
            .field("launcher_disabled", &self.launcher_disabled)
            .finish()
    }
}

enum BuilderItem {
    Selectable {
        label: String,
        callback: ItemCallback,
        show_extra: bool,
        disabled: bool,
    },
    Static {
        label: String,
    },
    LineBreak {
        fill: String,
        lines: usize,
    },
    AsciiArt {
        art: String,
        position: HorizontalAlign,
        alt: Option<String>,
    },
    Checkbox {
        label: String,
        callback: ItemCallback,
    },
    Radio {
        label: String,
        callback: ItemCallback,
    },
    Split(SplitBuilder),
    SubMenu {
        label: String,
        builder: MenuBuilder,
    },
}

impl MenuBuilder {
    pub fn new(caps: TerminalCaps) -> Self {
        Self::with_root(caps, true)
    }

    fn with_root(caps: TerminalCaps, is_root: bool) -> Self {
        Self {
            caps,
            title: None,
            items: Vec::new(),
            style: StyleSettings::default(),
            style_touched: false,
            default_items: true,
            exit_text: DEFAULT_EXIT_TEXT.to_string(),
            go_back_text: DEFAULT_GO_BACK_TEXT.to_string(),
            auto_shortcuts: false,
            is_root,
            launcher_disabled: false,
        }
    }

    // ---- items ---------------------------------------------------------

    pub fn set_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn add_item<F>(self, label: impl Into<String>, action: F) -> Self
    where
        F: FnMut(&mut Menu) -> anyhow::Result<()> + 'static,
    {
        self.add_item_with(label, callback(action), false, false)
    }

    /// Full item form: extra-marker display and initial disabled state.
    pub fn add_item_with(
        mut self,
        label: impl Into<String>,
        callback: ItemCallback,
        show_extra: bool,
        disabled: bool,
    ) -> Self {
        self.items.push(BuilderItem::Selectable {
            label: label.into(),
            callback,
            show_extra,
            disabled,
        });
        self
    }

    pub fn add_items(mut self, items: impl IntoIterator<Item = (String, ItemCallback)>) -> Self {
        for (label, callback) in items {
            self = self.add_item_with(label, callback, false, false);
        }
        self
    }

    pub fn add_static_item(mut self, label: impl Into<String>) -> Self {
        self.items.push(BuilderItem::Static {
            label: label.into(),
        });
        self
    }

    pub fn add_line_break(mut self, fill: impl Into<String>, lines: usize) -> Self {
        self.items.push(BuilderItem::LineBreak {
            fill: fill.into(),
            lines,
        });
        self
    }

    pub fn add_ascii_art(mut self, art: impl Into<String>, position: HorizontalAlign) -> Self {
        self.items.push(BuilderItem::AsciiArt {
            art: art.into(),
            position,
            alt: None,
        });
        self
    }

    pub fn add_ascii_art_with_alt(
        mut self,
        art: impl Into<String>,
        position: HorizontalAlign,
        alt: impl Into<String>,
    ) -> Self {
        self.items.push(BuilderItem::AsciiArt {
            art: art.into(),
            position,
            alt: Some(alt.into()),
        });
        self
    }

    pub fn add_checkbox_item<F>(mut self, label: impl Into<String>, action: F) -> Self
    where
        F: FnMut(&mut Menu) -> anyhow::Result<()> + 'static,
    {
        self.items.push(BuilderItem::Checkbox {
            label: label.into(),
            callback: callback(action),
        });
        self
    }

    pub fn add_radio_item<F>(mut self, label: impl Into<String>, action: F) -> Self
    where
        F: FnMut(&mut Menu) -> anyhow::Result<()> + 'static,
    {
        self.items.push(BuilderItem::Radio {
            label: label.into(),
            callback: callback(action),
        });
        self
    }

    /// Add a row of items sharing horizontal space.
    pub fn add_split_item(mut self, configure: impl FnOnce(SplitBuilder) -> SplitBuilder) -> Self {
        self.items
            .push(BuilderItem::Split(configure(SplitBuilder::new())));
        self
    }

    /// Add a launcher for a nested menu, configured through its own
    /// builder. The sub-menu inherits this menu's style unless the
    /// closure touches any style setter.
    pub fn add_sub_menu(
        mut self,
        label: impl Into<String>,
        configure: impl FnOnce(MenuBuilder) -> MenuBuilder,
    ) -> Self {
        let builder = configure(Self::with_root(self.caps, false));
        self.items.push(BuilderItem::SubMenu {
            label: label.into(),
            builder,
        });
        self
    }

    // ---- behaviour -----------------------------------------------------

    /// Drop the default "Exit" (and, on sub-menus, "Go Back") items.
    pub fn disable_default_items(mut self) -> Self {
        self.default_items = false;
        self
    }

    pub fn set_exit_button_text(mut self, text: impl Into<String>) -> Self {
        self.exit_text = text.into();
        self
    }

    pub fn set_go_back_button_text(mut self, text: impl Into<String>) -> Self {
        self.go_back_text = text.into();
        self
    }

    /// Extract shortcuts from labels at build time: a label containing
    /// `[x]` binds the printable key `x` to that item.
    pub fn enable_auto_shortcuts(mut self) -> Self {
        self.auto_shortcuts = true;
        self
    }

    /// Mark this menu's launcher disabled. The root has no launcher:
    /// disabling it would remove the only exit path.
    pub fn disable_menu(mut self) -> Result<Self, MenuError> {
        if self.is_root {
            return Err(MenuError::IllegalOperation(
                "can't disable the root menu".into(),
            ));
        }
        self.launcher_disabled = true;
        Ok(self)
    }

    // ---- style ---------------------------------------------------------

    pub fn set_width(mut self, width: usize) -> Self {
        self.style.width = Some(width);
        self.style_touched = true;
        self
    }

    /// Uniform padding on all sides.
    pub fn set_padding(mut self, padding: usize) -> Self {
        self.style.padding_top_bottom = Some(padding);
        self.style.padding_left_right = Some(padding);
        self.style_touched = true;
        self
    }

    pub fn set_padding_top_bottom(mut self, padding: usize) -> Self {
        self.style.padding_top_bottom = Some(padding);
        self.style_touched = true;
        self
    }

    pub fn set_padding_left_right(mut self, padding: usize) -> Self {
        self.style.padding_left_right = Some(padding);
        self.style_touched = true;
        self
    }

    pub fn set_margin(mut self, margin: usize) -> Self {
        self.style.margin = Some(MarginSetting::Fixed(margin));
        self.style_touched = true;
        self
    }

    /// Centre the menu: margin becomes `(terminal - width) / 2` at
    /// build time. A later `set_margin` overrides this, and vice versa.
    pub fn set_margin_auto(mut self) -> Self {
        self.style.margin = Some(MarginSetting::Auto);
        self.style_touched = true;
        self
    }

    pub fn set_background_colour(mut self, colour: impl Into<Colour>) -> Self {
        self.style.bg = Some(colour.into());
        self.style_touched = true;
        self
    }

    pub fn set_foreground_colour(mut self, colour: impl Into<Colour>) -> Self {
        self.style.fg = Some(colour.into());
        self.style_touched = true;
        self
    }

    /// CSS-style border shorthand; see [`BorderSpec`] for the arities.
    pub fn set_border(mut self, spec: impl Into<BorderSpec>) -> Self {
        self.style.set_border(spec.into());
        self.style_touched = true;
        self
    }

    pub fn set_border_top_width(mut self, width: usize) -> Self {
        self.style.border_top_width = Some(width);
        self.style_touched = true;
        self
    }

    pub fn set_border_right_width(mut self, width: usize) -> Self {
        self.style.border_right_width = Some(width);
        self.style_touched = true;
        self
    }

    pub fn set_border_bottom_width(mut self, width: usize) -> Self {
        self.style.border_bottom_width = Some(width);
        self.style_touched = true;
        self
    }

    pub fn set_border_left_width(mut self, width: usize) -> Self {
        self.style.border_left_width = Some(width);
        self.style_touched = true;
        self
    }

    pub fn set_border_colour(mut self, colour: impl Into<Colour>) -> Self {
        self.style.border_colour = Some(colour.into());
        self.style_touched = true;
        self
    }

    pub fn set_selected_marker(mut self, marker: impl Into<String>) -> Self {
        self.style.selected_marker = Some(marker.into());
        self.style_touched = true;
        self
    }

    pub fn set_unselected_marker(mut self, marker: impl Into<String>) -> Self {
        self.style.unselected_marker = Some(marker.into());
        self.style_touched = true;
        self
    }

    pub fn set_item_extra(mut self, extra: impl Into<String>) -> Self {
        self.style.item_extra = Some(extra.into());
        // Toggling the marker on makes no sense without displaying it.
        self.style.display_extra = Some(true);
        self.style_touched = true;
        self
    }

    pub fn set_display_extra(mut self, display: bool) -> Self {
        self.style.display_extra = Some(display);
        self.style_touched = true;
        self
    }

    pub fn set_title_separator(mut self, separator: char) -> Self {
        self.style.title_separator = Some(separator);
        self.style_touched = true;
        self
    }

    // ---- build ---------------------------------------------------------

    pub fn build(self) -> Result<Menu, MenuError> {
        let style = Rc::new(self.style.resolve(self.caps)?);
        self.into_menu(style)
    }

    fn into_menu(mut self, style: Rc<MenuStyle>) -> Result<Menu, MenuError> {
        if self.default_items {
            if !self.is_root {
                self.items.push(BuilderItem::Selectable {
                    label: self.go_back_text.clone(),
                    callback: callback(|menu: &mut Menu| {
                        menu.request_back();
                        Ok(())
                    }),
                    show_extra: false,
                    disabled: false,
                });
            }
            self.items.push(BuilderItem::Selectable {
                label: self.exit_text.clone(),
                callback: callback(|menu: &mut Menu| {
                    menu.request_exit();
                    Ok(())
                }),
                show_extra: false,
                disabled: false,
            });
        }

        let mut built = Vec::with_capacity(self.items.len());
        for item in self.items {
            built.push(build_item(item, &style)?);
        }

        let shortcuts = if self.auto_shortcuts {
            extract_shortcuts(&built)
        } else {
            HashMap::new()
        };

        Ok(Menu::new(self.title, built, style, shortcuts))
    }
}

fn build_item(item: BuilderItem, parent_style: &Rc<MenuStyle>) -> Result<MenuItem, MenuError> {
    Ok(match item {
        BuilderItem::Selectable {
            label,
            callback,
            show_extra,
            disabled,
        } => {
            let mut item = SelectableItem::new(label, callback);
            item.set_show_extra(show_extra);
            item.set_enabled(!disabled);
            MenuItem::Selectable(item)
        }
        BuilderItem::Static { label } => MenuItem::Static(StaticItem::new(label)),
        BuilderItem::LineBreak { fill, lines } => {
            MenuItem::LineBreak(LineBreakItem::new(fill, lines))
        }
        BuilderItem::AsciiArt {
            art,
            position,
            alt,
        } => MenuItem::AsciiArt(match alt {
            Some(alt) => AsciiArtItem::with_alt(art, position, alt),
            None => AsciiArtItem::new(art, position),
        }),
        BuilderItem::Checkbox { label, callback } => {
            MenuItem::Checkbox(CheckboxItem::new(label, callback))
        }
        BuilderItem::Radio { label, callback } => {
            MenuItem::Radio(RadioItem::new(label, callback))
        }
        BuilderItem::Split(split) => MenuItem::Split(split.into_item(parent_style)?),
        BuilderItem::SubMenu { label, builder } => {
            // Copy-on-first-write: untouched sub-menu styles share the
            // parent's resolved record.
            let child_style = if builder.style_touched {
                Rc::new(builder.style.resolve(builder.caps)?)
            } else {
                Rc::clone(parent_style)
            };
            let disabled = builder.launcher_disabled;
            let child = builder.into_menu(child_style)?;
            let mut launcher = SubMenuItem::new(label, child);
            launcher.set_enabled(!disabled);
            MenuItem::SubMenu(launcher)
        }
    })
}

/// Builder for the members of one split row. Only row-sized items are
/// allowed: selectable, static, checkbox and radio.
pub struct SplitBuilder {
    items: Vec<BuilderItem>,
}

impl SplitBuilder {
    fn new() -> Self {
        Self { items: Vec::new() }
    }

    pub fn add_item<F>(mut self, label: impl Into<String>, action: F) -> Self
    where
        F: FnMut(&mut Menu) -> anyhow::Result<()> + 'static,
    {
        self.items.push(BuilderItem::Selectable {
            label: label.into(),
            callback: callback(action),
            show_extra: false,
            disabled: false,
        });
        self
    }

    pub fn add_static_item(mut self, label: impl Into<String>) -> Self {
        self.items.push(BuilderItem::Static {
            label: label.into(),
        });
        self
    }

    pub fn add_checkbox_item<F>(mut self, label: impl Into<String>, action: F) -> Self
    where
        F: FnMut(&mut Menu) -> anyhow::Result<()> + 'static,
    {
        self.items.push(BuilderItem::Checkbox {
            label: label.into(),
            callback: callback(action),
        });
        self
    }

    pub fn add_radio_item<F>(mut self, label: impl Into<String>, action: F) -> Self
    where
        F: FnMut(&mut Menu) -> anyhow::Result<()> + 'static,
    {
        self.items.push(BuilderItem::Radio {
            label: label.into(),
            callback: callback(action),
        });
        self
    }

    fn into_item(self, parent_style: &Rc<MenuStyle>) -> Result<SplitItem, MenuError> {
        let mut members = Vec::with_capacity(self.items.len());
        for item in self.items {
            members.push(build_item(item, parent_style)?);
        }
        Ok(SplitItem::new(members))
    }
}

/// First `[x]` occurrence in a selectable label binds `x` (lowercased)
/// to that item; earlier bindings win.
fn extract_shortcuts(items: &[MenuItem]) -> HashMap<char, usize> {
    let mut shortcuts = HashMap::new();
    for (idx, item) in items.iter().enumerate() {
        if !matches!(
            item,
            MenuItem::Selectable(_) | MenuItem::Checkbox(_) | MenuItem::Radio(_) | MenuItem::SubMenu(_)
        ) {
            continue;
        }
        let Some(label) = item.text() else { continue };
        if let Some(key) = bracketed_key(label) {
            shortcuts.entry(key).or_insert(idx);
        }
    }
    shortcuts
}

fn bracketed_key(label: &str) -> Option<char> {
    let mut chars = label.chars().peekable();
    while let Some(ch) = chars.next() {
        if ch == '[' {
            let key = chars.next()?;
            if key.is_alphanumeric() && chars.peek() == Some(&']') {
                return Some(key.to_ascii_lowercase());
            }
        }
    }
    None
}
