//! Frame composition: one menu, one rectangular block of printable
//! lines.
//!
//! Layout per row, left to right: margin spaces, left border, left
//! padding, content, right padding, right border. Colour escapes
//! bracket the content region (padding included); the margin is always
//! unstyled. Border cells are spaces painted with the border colour as
//! background, so border width N produces N solid columns or rows.

use crossterm::style::Stylize;

use crate::menu::Menu;
use crate::style::{MenuStyle, ResolvedColour};
use crate::text;

/// Compose the full visible frame for `menu`, top to bottom.
pub fn compose(menu: &Menu) -> Vec<String> {
    let style = menu.style();
    let content_width = style.content_width();

    let mut rows: Vec<String> = Vec::new();
    if let Some(title) = menu.title() {
        rows.push(text::center(title, content_width));
        rows.push(text::pad(
            &style.title_separator.to_string().repeat(content_width),
            content_width,
        ));
    }
    for (idx, item) in menu.items().iter().enumerate() {
        let focused = menu.selected_index() == Some(idx);
        rows.extend(item.render(style, content_width, focused));
    }

    assemble(style, &rows)
}

fn assemble(style: &MenuStyle, content_rows: &[String]) -> Vec<String> {
    let margin = " ".repeat(style.margin);
    let blank_content = " ".repeat(style.content_width());

    let border_row = format!(
        "{}{}",
        margin,
        paint(&" ".repeat(style.width), ResolvedColour::None, style.border_colour)
    );

    let mut out = Vec::new();
    for _ in 0..style.border_top_width {
        out.push(border_row.clone());
    }
    for _ in 0..style.padding_top_bottom {
        out.push(content_row(style, &margin, &blank_content));
    }
    for row in content_rows {
        out.push(content_row(style, &margin, row));
    }
    for _ in 0..style.padding_top_bottom {
        out.push(content_row(style, &margin, &blank_content));
    }
    for _ in 0..style.border_bottom_width {
        out.push(border_row.clone());
    }
    out
}

fn content_row(style: &MenuStyle, margin: &str, content: &str) -> String {
    let pad = " ".repeat(style.padding_left_right);
    let left_border = paint(
        &" ".repeat(style.border_left_width),
        ResolvedColour::None,
        style.border_colour,
    );
    let right_border = paint(
        &" ".repeat(style.border_right_width),
        ResolvedColour::None,
        style.border_colour,
    );
    let body = paint(
        &format!("{pad}{content}{pad}"),
        style.fg,
        style.bg,
    );
    format!("{margin}{left_border}{body}{right_border}")
}

/// Wrap `s` in colour escapes; plain passthrough when both colours
/// resolved to nothing (mono terminals).
fn paint(s: &str, fg: ResolvedColour, bg: ResolvedColour) -> String {
    let mut styled = s.stylize();
    if let Some(colour) = fg.term() {
        styled = styled.with(colour);
    }
    if let Some(colour) = bg.term() {
        styled = styled.on(colour);
    }
    styled.to_string()
}
