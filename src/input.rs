//! Input collaborator: discrete menu events pulled from the terminal.
//!
//! The session blocks on `next_event`; the crossterm source filters the
//! raw event stream down to key presses and maps them onto the menu
//! vocabulary. Printable keys become shortcut events.

use anyhow::{Context, Result};
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// The discrete events the navigation machine understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuEvent {
    Up,
    Down,
    Left,
    Right,
    Activate,
    Back,
    Exit,
    /// A printable key, routed to item shortcuts.
    Char(char),
}

/// Blocking, infinite source of menu events.
pub trait InputSource {
    fn next_event(&mut self) -> Result<MenuEvent>;
}

/// Reads crossterm events from the real terminal.
#[derive(Debug, Default)]
pub struct CrosstermInput;

impl CrosstermInput {
    pub fn new() -> Self {
        Self
    }
}

impl InputSource for CrosstermInput {
    fn next_event(&mut self) -> Result<MenuEvent> {
        loop {
            let event = event::read().context("failed to read terminal event")?;
            if let Event::Key(key) = event {
                // Ignore repeats and releases.
                if key.kind != KeyEventKind::Press {
                    continue;
                }
                if let Some(mapped) = map_key(key) {
                    return Ok(mapped);
                }
            }
        }
    }
}

/// Translate one key press into a menu event, or `None` for keys the
/// menu has no meaning for.
pub fn map_key(key: KeyEvent) -> Option<MenuEvent> {
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return match key.code {
            KeyCode::Char('c') => Some(MenuEvent::Exit),
            _ => None,
        };
    }
    match key.code {
        KeyCode::Up => Some(MenuEvent::Up),
        KeyCode::Down => Some(MenuEvent::Down),
        KeyCode::Left => Some(MenuEvent::Left),
        KeyCode::Right => Some(MenuEvent::Right),
        KeyCode::Enter => Some(MenuEvent::Activate),
        KeyCode::Esc | KeyCode::Backspace => Some(MenuEvent::Back),
        KeyCode::Char(c) if !c.is_control() => Some(MenuEvent::Char(c)),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_arrow_keys_map_to_movement() {
        assert_eq!(map_key(press(KeyCode::Up)), Some(MenuEvent::Up));
        assert_eq!(map_key(press(KeyCode::Down)), Some(MenuEvent::Down));
        assert_eq!(map_key(press(KeyCode::Left)), Some(MenuEvent::Left));
        assert_eq!(map_key(press(KeyCode::Right)), Some(MenuEvent::Right));
    }

    #[test]
    fn test_enter_activates_escape_goes_back() {
        assert_eq!(map_key(press(KeyCode::Enter)), Some(MenuEvent::Activate));
        assert_eq!(map_key(press(KeyCode::Esc)), Some(MenuEvent::Back));
        assert_eq!(map_key(press(KeyCode::Backspace)), Some(MenuEvent::Back));
    }

    #[test]
    fn test_ctrl_c_exits() {
        let key = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert_eq!(map_key(key), Some(MenuEvent::Exit));
        let other = KeyEvent::new(KeyCode::Char('x'), KeyModifiers::CONTROL);
        assert_eq!(map_key(other), None);
    }

    #[test]
    fn test_printable_keys_become_shortcuts() {
        assert_eq!(map_key(press(KeyCode::Char('d'))), Some(MenuEvent::Char('d')));
        assert_eq!(map_key(press(KeyCode::Char('Q'))), Some(MenuEvent::Char('Q')));
    }

    #[test]
    fn test_unmapped_keys_ignored() {
        assert_eq!(map_key(press(KeyCode::Tab)), None);
        assert_eq!(map_key(press(KeyCode::F(1))), None);
    }
}
