//! Gitfolio - Main entry point.
//!
//! A terminal portfolio page for a GitHub profile, driven by a single
//! TOML config file.
//!
//! Usage: folio [OPTIONS] [CONFIG]
//!
//! Options:
//!   --version, -v    Show version
//!   --help, -h       Show help
//!
//! Reads gitfolio.toml from the working directory unless CONFIG is given.

use std::env;
use std::io;
use std::panic;
use std::path::Path;

use crossterm::{
    execute,
    terminal::{
        EnterAlternateScreen, LeaveAlternateScreen, SetTitle, disable_raw_mode, enable_raw_mode,
    },
};
use ratatui::{Terminal, backend::CrosstermBackend};

use gitfolio::app::App;
use gitfolio::config;
use gitfolio::errors::ErrorDescriptor;
use gitfolio::logging::{self, LogConfig};

/// Crate version shown by --version.
const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Maximum iterations for main loop (safety bound).
const MAX_MAIN_ITERATIONS: usize = 10_000_000;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Parse command-line arguments
    let args: Vec<String> = env::args().collect();

    if args.iter().any(|a| a == "--version" || a == "-v") {
        println!("gitfolio v{}", VERSION);
        return Ok(());
    }

    if args.iter().any(|a| a == "--help" || a == "-h") {
        println!("Usage: folio [OPTIONS] [CONFIG]");
        println!();
        println!("Options:");
        println!("  --version, -v    Show version");
        println!("  --help, -h       Show help");
        println!();
        println!("Reads gitfolio.toml from the working directory unless CONFIG is given.");
        return Ok(());
    }

    // Config path (skip flags)
    let config_path = args.iter().skip(1).find(|a| !a.starts_with('-')).cloned();

    // Load and sanitize the config before touching the terminal; an
    // unreadable or invalid config becomes the full-page error state
    let loaded = match config_path {
        Some(path) => config::load_from(Path::new(&path)),
        None => config::load(),
    };

    let (config, window_title) = match loaded {
        Ok(raw) => match config::sanitize(raw) {
            Some(config) => {
                let title = if config.seo.title.is_empty() {
                    format!("gitfolio - {}", config.github.username)
                } else {
                    config.seo.title.clone()
                };
                (Some(config), title)
            }
            None => (None, "gitfolio".to_string()),
        },
        Err(e) => {
            eprintln!("Failed to read config: {e}");
            (None, "gitfolio".to_string())
        }
    };

    // File logging per the [log] table; default settings when the config
    // itself failed to load
    let log_config = config
        .as_ref()
        .map_or_else(LogConfig::default, |c| c.log.clone());
    if let Err(e) = logging::init(&log_config) {
        eprintln!("Failed to initialize logging: {e}");
    }

    if let Some(config) = &config {
        if !config.google_analytics.id.is_empty() || !config.hotjar.id.is_empty() {
            tracing::debug!("[APP] Analytics IDs configured; ignored in terminal rendering");
        }
    }

    // Set up panic hook to restore terminal on panic
    let original_hook = panic::take_hook();
    panic::set_hook(Box::new(move |panic_info| {
        let _ = restore_terminal();
        original_hook(panic_info);
    }));

    // Set up terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, SetTitle(&window_title))?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Create application
    let mut app = match config {
        Some(config) => App::new(config),
        None => App::failed(ErrorDescriptor::invalid_config()),
    };

    // Main event loop
    let mut iterations = 0;
    while app.is_running() && iterations < MAX_MAIN_ITERATIONS {
        // Render
        terminal.draw(|frame| {
            app.render(frame);
        })?;

        // Update
        app.update()?;

        iterations += 1;
    }

    // Shutdown
    app.shutdown();

    // Restore terminal
    restore_terminal()?;

    // Force exit to avoid waiting for the background fetch thread
    std::process::exit(0);
}

/// Restores the terminal to its original state.
fn restore_terminal() -> io::Result<()> {
    disable_raw_mode()?;
    execute!(io::stdout(), LeaveAlternateScreen)?;
    Ok(())
}
