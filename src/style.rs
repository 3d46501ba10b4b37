//! Resolved menu styling: colours, geometry and markers.
//!
//! A [`MenuStyle`] is resolved once per menu at build time from the
//! builder's settings plus the terminal-reported capabilities, and is
//! immutable afterwards. Sub-menus built without style overrides share
//! their parent's resolved style through an `Rc`, so inheritance is
//! observable with `Rc::ptr_eq`.

use crossterm::style::Color;

use crate::error::MenuError;

/// Terminal capabilities the resolver needs: reported width and
/// negotiated colour depth. Detached from the I/O trait so builders and
/// tests can construct one directly.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TerminalCaps {
    pub width: usize,
    pub depth: ColourDepth,
}

impl TerminalCaps {
    pub fn new(width: usize, depth: ColourDepth) -> Self {
        Self { width, depth }
    }
}

/// Negotiated palette size bounding valid colour codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ColourDepth {
    Mono,
    Ansi8,
    Ansi256,
    TrueColor,
}

impl ColourDepth {
    /// Number of distinct colours this depth can express.
    pub fn colours(self) -> u32 {
        match self {
            ColourDepth::Mono => 1,
            ColourDepth::Ansi8 => 8,
            ColourDepth::Ansi256 => 256,
            ColourDepth::TrueColor => 1 << 24,
        }
    }
}

/// The eight named ANSI colours accepted everywhere a colour name is.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NamedColour {
    Black,
    Red,
    Green,
    Yellow,
    Blue,
    Magenta,
    Cyan,
    White,
}

impl NamedColour {
    pub fn parse(name: &str) -> Option<Self> {
        match name.to_ascii_lowercase().as_str() {
            "black" => Some(Self::Black),
            "red" => Some(Self::Red),
            "green" => Some(Self::Green),
            "yellow" => Some(Self::Yellow),
            "blue" => Some(Self::Blue),
            "magenta" => Some(Self::Magenta),
            "cyan" => Some(Self::Cyan),
            "white" => Some(Self::White),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Black => "black",
            Self::Red => "red",
            Self::Green => "green",
            Self::Yellow => "yellow",
            Self::Blue => "blue",
            Self::Magenta => "magenta",
            Self::Cyan => "cyan",
            Self::White => "white",
        }
    }

    pub fn term(self) -> Color {
        match self {
            Self::Black => Color::Black,
            Self::Red => Color::Red,
            Self::Green => Color::Green,
            Self::Yellow => Color::Yellow,
            Self::Blue => Color::Blue,
            Self::Magenta => Color::Magenta,
            Self::Cyan => Color::Cyan,
            Self::White => Color::White,
        }
    }
}

/// A requested colour, before depth negotiation.
///
/// Numeric requests carry the named fallback used when the terminal's
/// negotiated depth is below the depth the code requires.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Colour {
    Named(NamedColour),
    /// A 256-palette code; valid range 0..=255.
    Fixed { code: u32, fallback: NamedColour },
    /// A 24-bit code (0xRRGGBB); valid range 0..=0xFF_FFFF.
    Rgb { code: u32, fallback: NamedColour },
}

impl Colour {
    pub fn fixed(code: u32, fallback: NamedColour) -> Self {
        Self::Fixed { code, fallback }
    }

    pub fn rgb(code: u32, fallback: NamedColour) -> Self {
        Self::Rgb { code, fallback }
    }

    /// Validate against the depth the code requests, then negotiate down
    /// to the terminal's depth. Out-of-range codes fail; lower negotiated
    /// depths substitute the paired fallback name.
    pub fn resolve(self, depth: ColourDepth) -> Result<ResolvedColour, MenuError> {
        match self {
            Colour::Named(name) => Ok(match depth {
                ColourDepth::Mono => ResolvedColour::None,
                _ => ResolvedColour::Named(name),
            }),
            Colour::Fixed { code, fallback } => {
                if code >= ColourDepth::Ansi256.colours() {
                    return Err(MenuError::InvalidColour(format!(
                        "{code} exceeds the 256 colour palette"
                    )));
                }
                Ok(match depth {
                    ColourDepth::Mono => ResolvedColour::None,
                    ColourDepth::Ansi8 => ResolvedColour::Named(fallback),
                    ColourDepth::Ansi256 | ColourDepth::TrueColor => {
                        ResolvedColour::Fixed(code as u8)
                    }
                })
            }
            Colour::Rgb { code, fallback } => {
                if code >= ColourDepth::TrueColor.colours() {
                    return Err(MenuError::InvalidColour(format!(
                        "{code:#x} exceeds the 24-bit colour range"
                    )));
                }
                Ok(match depth {
                    ColourDepth::Mono => ResolvedColour::None,
                    ColourDepth::TrueColor => ResolvedColour::Rgb(
                        (code >> 16) as u8,
                        (code >> 8) as u8,
                        code as u8,
                    ),
                    ColourDepth::Ansi8 | ColourDepth::Ansi256 => {
                        ResolvedColour::Named(fallback)
                    }
                })
            }
        }
    }
}

impl From<NamedColour> for Colour {
    fn from(name: NamedColour) -> Self {
        Colour::Named(name)
    }
}

/// A colour after depth negotiation. `None` means "emit no escape
/// sequences" (mono terminals).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResolvedColour {
    None,
    Named(NamedColour),
    Fixed(u8),
    Rgb(u8, u8, u8),
}

impl ResolvedColour {
    pub fn term(self) -> Option<Color> {
        match self {
            ResolvedColour::None => None,
            ResolvedColour::Named(name) => Some(name.term()),
            ResolvedColour::Fixed(code) => Some(Color::AnsiValue(code)),
            ResolvedColour::Rgb(r, g, b) => Some(Color::Rgb { r, g, b }),
        }
    }
}

/// Border widths plus colour, as produced by the CSS-style shorthand.
///
/// `From` impls cover the shorthand arities: one width for all four
/// sides, two for (top/bottom, left/right), three for (top, left/right,
/// bottom), four for (top, right, bottom, left), each optionally
/// followed by a trailing colour. The colour defaults to white.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BorderSpec {
    pub top: usize,
    pub right: usize,
    pub bottom: usize,
    pub left: usize,
    pub colour: NamedColour,
}

impl BorderSpec {
    fn sides(top: usize, right: usize, bottom: usize, left: usize, colour: NamedColour) -> Self {
        Self {
            top,
            right,
            bottom,
            left,
            colour,
        }
    }

    /// Runtime shorthand used by the config layer, where arity is only
    /// known after parsing.
    pub fn from_widths(widths: &[usize], colour: Option<NamedColour>) -> Result<Self, MenuError> {
        let colour = colour.unwrap_or(NamedColour::White);
        match *widths {
            [all] => Ok(Self::sides(all, all, all, all, colour)),
            [tb, lr] => Ok(Self::sides(tb, lr, tb, lr, colour)),
            [top, lr, bottom] => Ok(Self::sides(top, lr, bottom, lr, colour)),
            [top, right, bottom, left] => Ok(Self::sides(top, right, bottom, left, colour)),
            _ => Err(MenuError::InvalidArgument(format!(
                "border shorthand takes 1 to 4 widths, got {}",
                widths.len()
            ))),
        }
    }
}

impl From<usize> for BorderSpec {
    fn from(all: usize) -> Self {
        Self::sides(all, all, all, all, NamedColour::White)
    }
}

impl From<(usize, usize)> for BorderSpec {
    fn from((tb, lr): (usize, usize)) -> Self {
        Self::sides(tb, lr, tb, lr, NamedColour::White)
    }
}

impl From<(usize, usize, usize)> for BorderSpec {
    fn from((top, lr, bottom): (usize, usize, usize)) -> Self {
        Self::sides(top, lr, bottom, lr, NamedColour::White)
    }
}

impl From<(usize, usize, usize, usize)> for BorderSpec {
    fn from((top, right, bottom, left): (usize, usize, usize, usize)) -> Self {
        Self::sides(top, right, bottom, left, NamedColour::White)
    }
}

impl From<(usize, NamedColour)> for BorderSpec {
    fn from((all, colour): (usize, NamedColour)) -> Self {
        Self::sides(all, all, all, all, colour)
    }
}

impl From<(usize, usize, NamedColour)> for BorderSpec {
    fn from((tb, lr, colour): (usize, usize, NamedColour)) -> Self {
        Self::sides(tb, lr, tb, lr, colour)
    }
}

impl From<(usize, usize, usize, NamedColour)> for BorderSpec {
    fn from((top, lr, bottom, colour): (usize, usize, usize, NamedColour)) -> Self {
        Self::sides(top, lr, bottom, lr, colour)
    }
}

impl From<(usize, usize, usize, usize, NamedColour)> for BorderSpec {
    fn from(
        (top, right, bottom, left, colour): (usize, usize, usize, usize, NamedColour),
    ) -> Self {
        Self::sides(top, right, bottom, left, colour)
    }
}

/// Margin as configured: a fixed column count, or centred automatically
/// from the terminal and menu widths at resolve time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MarginSetting {
    Fixed(usize),
    Auto,
}

/// Unresolved style overrides collected by a builder. `None` fields fall
/// back to the defaults at resolve time; margin-auto and explicit margin
/// overwrite each other (last writer wins).
#[derive(Debug, Clone, Default)]
pub struct StyleSettings {
    pub bg: Option<Colour>,
    pub fg: Option<Colour>,
    pub width: Option<usize>,
    pub padding_top_bottom: Option<usize>,
    pub padding_left_right: Option<usize>,
    pub margin: Option<MarginSetting>,
    pub border_top_width: Option<usize>,
    pub border_right_width: Option<usize>,
    pub border_bottom_width: Option<usize>,
    pub border_left_width: Option<usize>,
    pub border_colour: Option<Colour>,
    pub selected_marker: Option<String>,
    pub unselected_marker: Option<String>,
    pub item_extra: Option<String>,
    pub display_extra: Option<bool>,
    pub title_separator: Option<char>,
}

impl StyleSettings {
    pub fn set_border(&mut self, spec: BorderSpec) {
        self.border_top_width = Some(spec.top);
        self.border_right_width = Some(spec.right);
        self.border_bottom_width = Some(spec.bottom);
        self.border_left_width = Some(spec.left);
        self.border_colour = Some(Colour::Named(spec.colour));
    }

    /// Resolve into a concrete style for the given terminal. Colour
    /// validation happens here, so a bad code fails the build before any
    /// frame is produced.
    pub fn resolve(&self, caps: TerminalCaps) -> Result<MenuStyle, MenuError> {
        let width = self.width.unwrap_or(caps.width).min(caps.width);
        let margin = match self.margin {
            None => defaults::MARGIN,
            Some(MarginSetting::Fixed(margin)) => margin,
            Some(MarginSetting::Auto) => caps.width.saturating_sub(width) / 2,
        };

        Ok(MenuStyle {
            bg: self
                .bg
                .unwrap_or(Colour::Named(defaults::BG))
                .resolve(caps.depth)?,
            fg: self
                .fg
                .unwrap_or(Colour::Named(defaults::FG))
                .resolve(caps.depth)?,
            width,
            padding_top_bottom: self.padding_top_bottom.unwrap_or(defaults::PADDING_TOP_BOTTOM),
            padding_left_right: self.padding_left_right.unwrap_or(defaults::PADDING_LEFT_RIGHT),
            margin,
            border_top_width: self.border_top_width.unwrap_or(0),
            border_right_width: self.border_right_width.unwrap_or(0),
            border_bottom_width: self.border_bottom_width.unwrap_or(0),
            border_left_width: self.border_left_width.unwrap_or(0),
            border_colour: self
                .border_colour
                .unwrap_or(Colour::Named(NamedColour::White))
                .resolve(caps.depth)?,
            selected_marker: self
                .selected_marker
                .clone()
                .unwrap_or_else(|| defaults::SELECTED_MARKER.to_string()),
            unselected_marker: self
                .unselected_marker
                .clone()
                .unwrap_or_else(|| defaults::UNSELECTED_MARKER.to_string()),
            item_extra: self
                .item_extra
                .clone()
                .unwrap_or_else(|| defaults::ITEM_EXTRA.to_string()),
            display_extra: self.display_extra.unwrap_or(false),
            title_separator: self.title_separator.unwrap_or(defaults::TITLE_SEPARATOR),
            depth: caps.depth,
        })
    }
}

mod defaults {
    use super::NamedColour;

    pub const BG: NamedColour = NamedColour::Blue;
    pub const FG: NamedColour = NamedColour::White;
    pub const PADDING_TOP_BOTTOM: usize = 1;
    pub const PADDING_LEFT_RIGHT: usize = 2;
    pub const MARGIN: usize = 2;
    pub const SELECTED_MARKER: &str = "● ";
    pub const UNSELECTED_MARKER: &str = "○ ";
    pub const ITEM_EXTRA: &str = "✔";
    pub const TITLE_SEPARATOR: char = '=';
}

/// The immutable geometry/colour record consumed by every renderer
/// during one render pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MenuStyle {
    pub bg: ResolvedColour,
    pub fg: ResolvedColour,
    pub width: usize,
    pub padding_top_bottom: usize,
    pub padding_left_right: usize,
    pub margin: usize,
    pub border_top_width: usize,
    pub border_right_width: usize,
    pub border_bottom_width: usize,
    pub border_left_width: usize,
    pub border_colour: ResolvedColour,
    pub selected_marker: String,
    pub unselected_marker: String,
    pub item_extra: String,
    pub display_extra: bool,
    pub title_separator: char,
    pub depth: ColourDepth,
}

impl MenuStyle {
    /// Columns available to item renderers: total width minus side
    /// borders and horizontal padding.
    pub fn content_width(&self) -> usize {
        self.width
            .saturating_sub(self.border_left_width + self.border_right_width)
            .saturating_sub(self.padding_left_right * 2)
    }

    pub fn marker(&self, focused: bool) -> &str {
        if focused {
            &self.selected_marker
        } else {
            &self.unselected_marker
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn caps(width: usize, depth: ColourDepth) -> TerminalCaps {
        TerminalCaps::new(width, depth)
    }

    #[test]
    fn test_defaults_resolve() {
        let style = StyleSettings::default()
            .resolve(caps(120, ColourDepth::Ansi8))
            .unwrap();
        assert_eq!(style.width, 120);
        assert_eq!(style.margin, 2);
        assert_eq!(style.padding_top_bottom, 1);
        assert_eq!(style.padding_left_right, 2);
        assert_eq!(style.bg, ResolvedColour::Named(NamedColour::Blue));
        assert_eq!(style.fg, ResolvedColour::Named(NamedColour::White));
        assert_eq!(style.selected_marker, "● ");
        assert_eq!(style.unselected_marker, "○ ");
        assert_eq!(style.title_separator, '=');
        assert_eq!(style.border_top_width, 0);
    }

    #[test]
    fn test_width_clamped_to_terminal() {
        let mut settings = StyleSettings::default();
        settings.width = Some(500);
        let style = settings.resolve(caps(80, ColourDepth::Ansi8)).unwrap();
        assert_eq!(style.width, 80);
    }

    #[test]
    fn test_content_width_subtracts_borders_and_padding() {
        let mut settings = StyleSettings::default();
        settings.width = Some(50);
        settings.padding_left_right = Some(2);
        settings.set_border(BorderSpec::from((1, 3)));
        let style = settings.resolve(caps(100, ColourDepth::Ansi8)).unwrap();
        // 50 - left 3 - right 3 - padding 2*2
        assert_eq!(style.content_width(), 40);
    }

    #[test]
    fn test_border_shorthand_one_value() {
        let spec = BorderSpec::from(2);
        assert_eq!((spec.top, spec.right, spec.bottom, spec.left), (2, 2, 2, 2));
        assert_eq!(spec.colour, NamedColour::White);
    }

    #[test]
    fn test_border_shorthand_two_values() {
        let spec = BorderSpec::from((2, 4));
        assert_eq!((spec.top, spec.right, spec.bottom, spec.left), (2, 4, 2, 4));
        assert_eq!(spec.colour, NamedColour::White);
    }

    #[test]
    fn test_border_shorthand_three_values() {
        let spec = BorderSpec::from((2, 4, 6));
        assert_eq!((spec.top, spec.right, spec.bottom, spec.left), (2, 4, 6, 4));
    }

    #[test]
    fn test_border_shorthand_four_values() {
        let spec = BorderSpec::from((2, 4, 6, 8));
        assert_eq!((spec.top, spec.right, spec.bottom, spec.left), (2, 4, 6, 8));
    }

    #[test]
    fn test_border_shorthand_trailing_colour() {
        let spec = BorderSpec::from((2, 4, 6, 8, NamedColour::Green));
        assert_eq!((spec.top, spec.right, spec.bottom, spec.left), (2, 4, 6, 8));
        assert_eq!(spec.colour, NamedColour::Green);

        let spec = BorderSpec::from((2, 4, 6, NamedColour::Green));
        assert_eq!((spec.top, spec.right, spec.bottom, spec.left), (2, 4, 6, 4));
        assert_eq!(spec.colour, NamedColour::Green);

        let spec = BorderSpec::from((2, 4, NamedColour::Green));
        assert_eq!((spec.top, spec.right, spec.bottom, spec.left), (2, 4, 2, 4));
        assert_eq!(spec.colour, NamedColour::Green);

        let spec = BorderSpec::from((2, NamedColour::Green));
        assert_eq!((spec.top, spec.right, spec.bottom, spec.left), (2, 2, 2, 2));
        assert_eq!(spec.colour, NamedColour::Green);
    }

    #[test]
    fn test_border_runtime_arity_rejected() {
        let err = BorderSpec::from_widths(&[1, 2, 3, 4, 5], None).unwrap_err();
        assert!(matches!(err, MenuError::InvalidArgument(_)));
        let err = BorderSpec::from_widths(&[], None).unwrap_err();
        assert!(matches!(err, MenuError::InvalidArgument(_)));
    }

    #[test]
    fn test_margin_auto_centres() {
        let mut settings = StyleSettings::default();
        settings.width = Some(100);
        settings.margin = Some(MarginSetting::Auto);
        let style = settings.resolve(caps(200, ColourDepth::Ansi8)).unwrap();
        assert_eq!(style.margin, 50);
    }

    #[test]
    fn test_margin_auto_floors_odd_leftover() {
        let mut settings = StyleSettings::default();
        settings.width = Some(99);
        settings.margin = Some(MarginSetting::Auto);
        let style = settings.resolve(caps(200, ColourDepth::Ansi8)).unwrap();
        assert_eq!(style.margin, 50); // floor(101 / 2)
    }

    #[test]
    fn test_margin_last_writer_wins() {
        let mut settings = StyleSettings::default();
        settings.width = Some(100);
        settings.margin = Some(MarginSetting::Fixed(10));
        settings.margin = Some(MarginSetting::Auto);
        let style = settings.resolve(caps(200, ColourDepth::Ansi8)).unwrap();
        assert_eq!(style.margin, 50);

        settings.margin = Some(MarginSetting::Fixed(10));
        let style = settings.resolve(caps(200, ColourDepth::Ansi8)).unwrap();
        assert_eq!(style.margin, 10);
    }

    #[test]
    fn test_fixed_colour_within_depth() {
        let resolved = Colour::fixed(16, NamedColour::White)
            .resolve(ColourDepth::Ansi256)
            .unwrap();
        assert_eq!(resolved, ResolvedColour::Fixed(16));

        let resolved = Colour::fixed(206, NamedColour::Red)
            .resolve(ColourDepth::TrueColor)
            .unwrap();
        assert_eq!(resolved, ResolvedColour::Fixed(206));
    }

    #[test]
    fn test_fixed_colour_falls_back_below_requested_depth() {
        let resolved = Colour::fixed(16, NamedColour::White)
            .resolve(ColourDepth::Ansi8)
            .unwrap();
        assert_eq!(resolved, ResolvedColour::Named(NamedColour::White));

        let resolved = Colour::fixed(206, NamedColour::Red)
            .resolve(ColourDepth::Ansi8)
            .unwrap();
        assert_eq!(resolved, ResolvedColour::Named(NamedColour::Red));
    }

    #[test]
    fn test_fixed_colour_out_of_range_rejected() {
        let err = Colour::fixed(512, NamedColour::White)
            .resolve(ColourDepth::Ansi256)
            .unwrap_err();
        assert!(matches!(err, MenuError::InvalidColour(_)));

        // Still invalid on a deeper terminal: the code requests the 256
        // palette and 512 is not in it.
        let err = Colour::fixed(256, NamedColour::White)
            .resolve(ColourDepth::TrueColor)
            .unwrap_err();
        assert!(matches!(err, MenuError::InvalidColour(_)));
    }

    #[test]
    fn test_rgb_colour_resolution() {
        let resolved = Colour::rgb(0xFF8800, NamedColour::Yellow)
            .resolve(ColourDepth::TrueColor)
            .unwrap();
        assert_eq!(resolved, ResolvedColour::Rgb(0xFF, 0x88, 0x00));

        let resolved = Colour::rgb(0xFF8800, NamedColour::Yellow)
            .resolve(ColourDepth::Ansi256)
            .unwrap();
        assert_eq!(resolved, ResolvedColour::Named(NamedColour::Yellow));

        let err = Colour::rgb(0x1_000_000, NamedColour::Yellow)
            .resolve(ColourDepth::TrueColor)
            .unwrap_err();
        assert!(matches!(err, MenuError::InvalidColour(_)));
    }

    #[test]
    fn test_mono_strips_all_colour() {
        let style = StyleSettings::default()
            .resolve(caps(80, ColourDepth::Mono))
            .unwrap();
        assert_eq!(style.bg, ResolvedColour::None);
        assert_eq!(style.fg, ResolvedColour::None);
        assert_eq!(style.border_colour, ResolvedColour::None);
        assert!(style.bg.term().is_none());
    }

    #[test]
    fn test_named_colour_parse() {
        assert_eq!(NamedColour::parse("green"), Some(NamedColour::Green));
        assert_eq!(NamedColour::parse("GREEN"), Some(NamedColour::Green));
        assert_eq!(NamedColour::parse("chartreuse"), None);
    }
}
