//! Showcase binary: builds a menu exercising every item variant and
//! runs it against the real terminal.

use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;

use boxmenu::{
    CrosstermInput, CrosstermTerminal, HorizontalAlign, Menu, MenuBuilder, MenuSession,
    StyleConfig, TerminalCaps, TerminalIo,
};

const LOGO: &str = r#"   _
  | |__   _____  ___ __ ___   ___ _ __  _   _
  | '_ \ / _ \ \/ / '_ ` _ \ / _ \ '_ \| | | |
  | |_) | (_) >  <| | | | | |  __/ | | | |_| |
  |_.__/ \___/_/\_\_| |_| |_|\___|_| |_|\__,_|"#;

#[derive(Parser)]
#[command(name = "boxmenu-demo")]
#[command(about = "Interactive showcase of boxmenu item variants", long_about = None)]
struct Cli {
    /// Style config file (TOML)
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Override the menu width
    #[arg(short, long)]
    width: Option<usize>,

    /// Centre the menu horizontally
    #[arg(long)]
    centre: bool,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let terminal = CrosstermTerminal::new()?;
    let menu = build_menu(&cli, terminal.caps())?;

    MenuSession::new(menu, terminal, CrosstermInput::new()).run()
}

fn build_menu(cli: &Cli, caps: TerminalCaps) -> Result<Menu> {
    let mut builder = MenuBuilder::new(caps);

    if let Some(path) = &cli.config {
        builder = StyleConfig::load_from_file(path)?.apply(builder)?;
    }
    if let Some(width) = cli.width {
        builder = builder.set_width(width);
    }
    if cli.centre {
        builder = builder.set_margin_auto();
    }

    let menu = builder
        .set_title("boxmenu demo")
        .enable_auto_shortcuts()
        .add_ascii_art_with_alt(LOGO, HorizontalAlign::Center, "boxmenu")
        .add_line_break("=", 1)
        .add_static_item("Every item variant, live:")
        .add_line_break(" ", 1)
        .add_item("[G]reet", |_| {
            tracing::info!("hello from a selectable item");
            Ok(())
        })
        .add_item("Disable me", |menu| {
            if let Some(idx) = menu.selected_index() {
                menu.set_item_enabled(idx, false);
            }
            Ok(())
        })
        .add_checkbox_item("Sound", |_| Ok(()))
        .add_split_item(|split| {
            split
                .add_radio_item("Small", |_| Ok(()))
                .add_radio_item("Medium", |_| Ok(()))
                .add_radio_item("Large", |_| Ok(()))
        })
        .add_line_break("-", 1)
        .add_sub_menu("Options", |b| {
            b.set_title("Options")
                .add_checkbox_item("Verbose logging", |_| Ok(()))
                .add_checkbox_item("Autosave", |_| Ok(()))
        })
        .build()?;

    Ok(menu)
}
