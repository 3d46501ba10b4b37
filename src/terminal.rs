//! Terminal collaborator: capability reporting and frame output.
//!
//! The crossterm implementation owns the interactive-mode lifecycle:
//! raw mode, alternate screen and hidden cursor on entry, with the
//! exact inverse applied on leave and, as a backstop, on drop. The
//! user's shell is restored on every exit path, panics included.

use std::io::{self, Write};

use anyhow::{Context, Result};
use crossterm::cursor::{Hide, MoveTo, Show};
use crossterm::terminal::{
    self, disable_raw_mode, enable_raw_mode, Clear, ClearType, EnterAlternateScreen,
    LeaveAlternateScreen,
};
use crossterm::{execute, queue};
use tracing::warn;

use crate::style::{ColourDepth, TerminalCaps};

pub trait TerminalIo {
    /// Reported width in columns.
    fn width(&self) -> usize;

    /// Negotiated colour depth.
    fn colour_depth(&self) -> ColourDepth;

    fn caps(&self) -> TerminalCaps {
        TerminalCaps::new(self.width(), self.colour_depth())
    }

    fn clear(&mut self) -> Result<()>;

    fn write_lines(&mut self, lines: &[String]) -> Result<()>;

    fn enter_interactive(&mut self) -> Result<()>;

    fn leave_interactive(&mut self) -> Result<()>;
}

/// Real terminal backed by crossterm on stdout.
#[derive(Debug)]
pub struct CrosstermTerminal {
    caps: TerminalCaps,
    interactive: bool,
}

impl CrosstermTerminal {
    pub fn new() -> Result<Self> {
        let (width, _) = terminal::size().context("failed to query terminal size")?;
        Ok(Self {
            caps: TerminalCaps::new(width as usize, detect_colour_depth()),
            interactive: false,
        })
    }
}

impl TerminalIo for CrosstermTerminal {
    fn width(&self) -> usize {
        self.caps.width
    }

    fn colour_depth(&self) -> ColourDepth {
        self.caps.depth
    }

    fn clear(&mut self) -> Result<()> {
        execute!(io::stdout(), Clear(ClearType::All), MoveTo(0, 0))
            .context("failed to clear terminal")?;
        Ok(())
    }

    fn write_lines(&mut self, lines: &[String]) -> Result<()> {
        let mut stdout = io::stdout();
        for line in lines {
            // Raw mode: explicit carriage return with every newline.
            queue!(stdout, crossterm::style::Print(line), crossterm::style::Print("\r\n"))
                .context("failed to queue frame line")?;
        }
        stdout.flush().context("failed to flush frame")?;
        Ok(())
    }

    fn enter_interactive(&mut self) -> Result<()> {
        enable_raw_mode().context("failed to enable raw mode")?;
        execute!(io::stdout(), EnterAlternateScreen, Hide)
            .context("failed to enter alternate screen")?;
        self.interactive = true;
        Ok(())
    }

    fn leave_interactive(&mut self) -> Result<()> {
        if !self.interactive {
            return Ok(());
        }
        self.interactive = false;
        execute!(io::stdout(), Show, LeaveAlternateScreen)
            .context("failed to leave alternate screen")?;
        disable_raw_mode().context("failed to disable raw mode")?;
        Ok(())
    }
}

impl Drop for CrosstermTerminal {
    fn drop(&mut self) {
        if self.interactive {
            if let Err(err) = self.leave_interactive() {
                warn!("failed to restore terminal on drop: {err:#}");
            }
        }
    }
}

/// Colour depth from environment conventions. Detection stays out of
/// the core; this is the collaborator's report.
fn detect_colour_depth() -> ColourDepth {
    if std::env::var_os("NO_COLOR").is_some() {
        return ColourDepth::Mono;
    }
    if let Ok(colorterm) = std::env::var("COLORTERM") {
        let colorterm = colorterm.to_ascii_lowercase();
        if colorterm.contains("truecolor") || colorterm.contains("24bit") {
            return ColourDepth::TrueColor;
        }
    }
    match std::env::var("TERM") {
        Ok(term) if term == "dumb" => ColourDepth::Mono,
        Ok(term) if term.contains("256color") => ColourDepth::Ansi256,
        _ => ColourDepth::Ansi8,
    }
}
