//! PinCode TUI - four-digit PIN entry in the terminal
//!
//! Starts in set-new mode; once a PIN is chosen the demo host switches the
//! widget to verify it.

use std::io;
use std::panic;

use anyhow::Result;
use clap::Parser;
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::prelude::*;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use pincode_tui::app::{App, TuiConfig};
use pincode_tui::cli::Cli;

/// Application entry point with panic handling for terminal restoration
fn main() -> Result<()> {
    let cli = Cli::parse();

    // Set up panic hook to restore terminal on crash
    let original_hook = panic::take_hook();
    panic::set_hook(Box::new(move |panic_info| {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen);
        original_hook(panic_info);
    }));

    // Initialize logging
    tracing_subscriber::registry()
        .with(fmt::layer().with_target(false).with_writer(io::stderr))
        .with(EnvFilter::from_default_env().add_directive("pincode_tui=info".parse()?))
        .init();

    let mut config = TuiConfig::load();
    cli.apply(&mut config)?;
    if cli.save_config {
        config.save()?;
        tracing::info!("Configuration saved");
    }

    let result = run_app(config);

    if let Err(e) = &result {
        tracing::error!("Application error: {}", e);
    }

    result
}

/// Main application runner
fn run_app(config: TuiConfig) -> Result<()> {
    let mut app = App::new(config)?;

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = app.run(&mut terminal);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result
}
