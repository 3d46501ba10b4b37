//! Style configuration files.
//!
//! Deserializes a TOML style table and applies it to a builder. This is
//! the runtime-validated path: values arrive as signed integers and
//! free-form strings, so negative geometry, malformed border arrays and
//! unknown or out-of-range colours are all caught here, before any
//! frame is produced.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;

use crate::builder::MenuBuilder;
use crate::error::MenuError;
use crate::style::{BorderSpec, Colour, NamedColour};

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct StyleConfig {
    pub width: Option<i64>,
    pub margin: Option<MarginValue>,
    /// `[all]` or `[top_bottom, left_right]`.
    pub padding: Option<Vec<i64>>,
    /// CSS-style shorthand, 1 to 4 widths.
    pub border: Option<Vec<i64>>,
    pub border_colour: Option<ColourValue>,
    pub background: Option<ColourValue>,
    pub foreground: Option<ColourValue>,
    pub selected_marker: Option<String>,
    pub unselected_marker: Option<String>,
    pub item_extra: Option<String>,
    pub display_extra: Option<bool>,
    pub title_separator: Option<String>,
}

/// `margin = 4` or `margin = "auto"`.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum MarginValue {
    Fixed(i64),
    Keyword(String),
}

/// A colour name, a 256-palette code, a `#rrggbb` string, or a table
/// pairing a code with its named fallback.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum ColourValue {
    Code(i64),
    Name(String),
    WithFallback { code: i64, fallback: String },
}

impl StyleConfig {
    pub fn load_from_file(path: &Path) -> Result<Self> {
        let raw = fs::read_to_string(path)
            .with_context(|| format!("failed to read style config {}", path.display()))?;
        toml::from_str(&raw)
            .with_context(|| format!("failed to parse style config {}", path.display()))
    }

    /// Validate and transfer every configured value onto the builder.
    pub fn apply(&self, mut builder: MenuBuilder) -> Result<MenuBuilder, MenuError> {
        if let Some(width) = self.width {
            builder = builder.set_width(non_negative(width, "width")?);
        }
        match &self.margin {
            Some(MarginValue::Fixed(margin)) => {
                builder = builder.set_margin(non_negative(*margin, "margin")?);
            }
            Some(MarginValue::Keyword(word)) if word == "auto" => {
                builder = builder.set_margin_auto();
            }
            Some(MarginValue::Keyword(word)) => {
                return Err(MenuError::InvalidArgument(format!(
                    "margin must be a non-negative integer or \"auto\", got {word:?}"
                )));
            }
            None => {}
        }
        if let Some(padding) = &self.padding {
            match padding.as_slice() {
                [all] => builder = builder.set_padding(non_negative(*all, "padding")?),
                [top_bottom, left_right] => {
                    builder = builder
                        .set_padding_top_bottom(non_negative(*top_bottom, "padding")?)
                        .set_padding_left_right(non_negative(*left_right, "padding")?);
                }
                other => {
                    return Err(MenuError::InvalidArgument(format!(
                        "padding takes 1 or 2 values, got {}",
                        other.len()
                    )));
                }
            }
        }
        if let Some(border) = &self.border {
            let widths = border
                .iter()
                .map(|w| non_negative(*w, "border width"))
                .collect::<Result<Vec<_>, _>>()?;
            let colour = match &self.border_colour {
                Some(value) => Some(named_only(value)?),
                None => None,
            };
            builder = builder.set_border(BorderSpec::from_widths(&widths, colour)?);
        } else if let Some(value) = &self.border_colour {
            builder = builder.set_border_colour(Colour::Named(named_only(value)?));
        }
        if let Some(value) = &self.background {
            builder = builder.set_background_colour(parse_colour(value)?);
        }
        if let Some(value) = &self.foreground {
            builder = builder.set_foreground_colour(parse_colour(value)?);
        }
        if let Some(marker) = &self.selected_marker {
            builder = builder.set_selected_marker(marker.clone());
        }
        if let Some(marker) = &self.unselected_marker {
            builder = builder.set_unselected_marker(marker.clone());
        }
        if let Some(extra) = &self.item_extra {
            builder = builder.set_item_extra(extra.clone());
        }
        if let Some(display) = self.display_extra {
            builder = builder.set_display_extra(display);
        }
        if let Some(separator) = &self.title_separator {
            let mut chars = separator.chars();
            match (chars.next(), chars.next()) {
                (Some(ch), None) => builder = builder.set_title_separator(ch),
                _ => {
                    return Err(MenuError::InvalidArgument(format!(
                        "title separator must be a single character, got {separator:?}"
                    )));
                }
            }
        }
        Ok(builder)
    }
}

fn non_negative(value: i64, what: &str) -> Result<usize, MenuError> {
    usize::try_from(value)
        .map_err(|_| MenuError::InvalidArgument(format!("{what} must be >= 0, got {value}")))
}

fn named_only(value: &ColourValue) -> Result<NamedColour, MenuError> {
    match value {
        ColourValue::Name(name) => parse_name(name),
        _ => Err(MenuError::InvalidArgument(
            "border colour must be a colour name".into(),
        )),
    }
}

fn parse_name(name: &str) -> Result<NamedColour, MenuError> {
    NamedColour::parse(name)
        .ok_or_else(|| MenuError::InvalidArgument(format!("unknown colour name {name:?}")))
}

fn parse_colour(value: &ColourValue) -> Result<Colour, MenuError> {
    match value {
        ColourValue::Name(name) => {
            if let Some(hex) = name.strip_prefix('#') {
                if hex.len() != 6 {
                    return Err(MenuError::InvalidColour(format!(
                        "hex colours are #rrggbb, got {name:?}"
                    )));
                }
                let code = u32::from_str_radix(hex, 16).map_err(|_| {
                    MenuError::InvalidColour(format!("malformed hex colour {name:?}"))
                })?;
                Ok(Colour::rgb(code, NamedColour::White))
            } else {
                Ok(Colour::Named(parse_name(name)?))
            }
        }
        ColourValue::Code(code) => colour_code(*code, NamedColour::White),
        ColourValue::WithFallback { code, fallback } => colour_code(*code, parse_name(fallback)?),
    }
}

fn colour_code(code: i64, fallback: NamedColour) -> Result<Colour, MenuError> {
    let code = u32::try_from(code)
        .map_err(|_| MenuError::InvalidColour(format!("colour codes must be >= 0, got {code}")))?;
    Ok(Colour::fixed(code, fallback))
}
