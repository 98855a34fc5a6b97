//! themedit - A terminal editor for JSON UI color themes.

use std::io::{self, Write};
use std::panic;
use std::path::PathBuf;
use std::process::ExitCode;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::{
    event, execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::prelude::*;

use themedit::cli::{run_theme_command, Command};
use themedit::core::{RecentPaths, ThemeSession, DEFAULT_THEME_PATH};
use themedit::metrics;
use themedit::ui::{handle_input, render, App};

/// A terminal editor for JSON UI color themes.
#[derive(Parser, Debug)]
#[command(name = "themedit", version, about)]
struct Cli {
    /// Theme file to edit
    #[arg(short = 'f', long = "file", value_name = "PATH", default_value = DEFAULT_THEME_PATH)]
    file: PathBuf,

    #[command(subcommand)]
    command: Option<Command>,
}

/// RAII guard for terminal state. Restores terminal on drop (including panic).
struct TerminalGuard;

impl TerminalGuard {
    fn new() -> io::Result<Self> {
        enable_raw_mode()?;
        execute!(io::stdout(), EnterAlternateScreen)?;
        Ok(Self)
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        let _ = execute!(io::stdout(), LeaveAlternateScreen);
        let _ = disable_raw_mode();
        let _ = io::stdout().flush();
    }
}

fn main() -> ExitCode {
    metrics::init();

    let cli = Cli::parse();

    if let Some(command) = &cli.command {
        return run_theme_command(&cli.file, command);
    }

    match run_tui(cli.file) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            ExitCode::from(1)
        }
    }
}

/// Run the interactive editor.
fn run_tui(file: PathBuf) -> Result<()> {
    // Set panic hook to ensure terminal cleanup
    let default_hook = panic::take_hook();
    panic::set_hook(Box::new(move |info| {
        let _ = execute!(io::stdout(), LeaveAlternateScreen);
        let _ = disable_raw_mode();
        let _ = io::stdout().flush();
        default_hook(info);
    }));

    // A missing or broken theme file still opens the editor on the fallback theme
    let (session, warning) = ThemeSession::open(&file);
    if let Some(e) = &warning {
        eprintln!("Warning: {}", e);
    }

    let recent = match RecentPaths::open() {
        Ok(recent) => Some(recent),
        Err(e) => {
            eprintln!("Warning: Failed to open recent paths: {}", e);
            None
        }
    };

    let mut app = App::new(session, recent);
    if let Some(e) = warning {
        app.set_error(format!("Using fallback theme: {}", e));
    }

    let _guard = TerminalGuard::new().context("Failed to set up terminal")?;
    let backend = CrosstermBackend::new(io::stdout());
    let mut terminal = Terminal::new(backend).context("Failed to create terminal")?;

    run_loop(&mut terminal, &mut app)
}

fn run_loop<B: Backend>(terminal: &mut Terminal<B>, app: &mut App) -> Result<()> {
    loop {
        // Only redraw if dirty or on resize
        if app.dirty() {
            terminal.draw(|frame| render(frame, app))?;
            app.clear_dirty();
        }

        if event::poll(Duration::from_millis(50))? {
            let event = event::read()?;

            if matches!(event, crossterm::event::Event::Resize(_, _)) {
                app.mark_dirty();
            }

            handle_input(app, event);
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}
