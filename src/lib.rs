//! Interactive bordered menus for the terminal.
//!
//! A menu is a titled, bordered box of items: selectable actions,
//! static text, line breaks, ASCII art, split rows and nested
//! sub-menus. Arrow keys move a cyclic cursor over the selectable
//! items, Enter activates, Escape returns to the parent menu.
//!
//! Menus are assembled with [`MenuBuilder`], which resolves styling
//! against the terminal's reported width and colour depth at build
//! time, then driven by a [`MenuSession`] that owns the redraw/input
//! loop:
//!
//! ```no_run
//! use boxmenu::{CrosstermInput, CrosstermTerminal, MenuBuilder, MenuSession, TerminalIo};
//!
//! fn main() -> anyhow::Result<()> {
//!     let terminal = CrosstermTerminal::new()?;
//!     let menu = MenuBuilder::new(terminal.caps())
//!         .set_title("Main Menu")
//!         .add_item("Say hello", |_| Ok(()))
//!         .add_sub_menu("Options", |b| b.add_checkbox_item("Sound", |_| Ok(())))
//!         .build()?;
//!     MenuSession::new(menu, terminal, CrosstermInput::new()).run()
//! }
//! ```

pub mod builder;
pub mod config;
pub mod error;
pub mod frame;
pub mod input;
pub mod item;
pub mod menu;
pub mod navigation;
pub mod session;
pub mod style;
pub mod terminal;
pub mod text;

pub use builder::{MenuBuilder, SplitBuilder};
pub use config::StyleConfig;
pub use error::MenuError;
pub use input::{CrosstermInput, InputSource, MenuEvent};
pub use item::{callback, ItemCallback, MenuItem};
pub use menu::Menu;
pub use navigation::{DispatchOutcome, MenuStack};
pub use session::MenuSession;
pub use style::{BorderSpec, Colour, ColourDepth, MenuStyle, NamedColour, TerminalCaps};
pub use terminal::{CrosstermTerminal, TerminalIo};
pub use text::HorizontalAlign;
