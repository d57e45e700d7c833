//! lxfetch — a live fetch-style system information display for the Linux terminal.
//!
//! Draws an ASCII Tux next to the host identity block (OS, kernel, uptime,
//! memory, clock, color swatch) and refreshes at ~12 fps until `q` is pressed.

#![allow(dead_code)]

mod app;
mod ascii;
mod color_scheme;
mod input;
mod system;
mod ui;

use std::io;
use std::time::Duration;

use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};

use app::App;
use system::collector::Collector;
use system::details::SystemDetails;

/// Refresh interval in milliseconds (~12 fps)
const TICK_RATE_MS: u64 = 83;

fn main() -> Result<()> {
    // Collect the static identity snapshot before touching the terminal, so
    // a missing os-release or PRETTY_NAME fails with a plain diagnostic.
    let details = SystemDetails::collect()?;

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;
    terminal.clear()?;

    // Run the app
    let result = run_app(&mut terminal, App::new(details));

    // Restore terminal on every exit path before reporting errors
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(e) = result {
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }

    Ok(())
}

/// Main application loop
fn run_app(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>, mut app: App) -> Result<()> {
    let collector = Collector::new();
    let tick_rate = Duration::from_millis(TICK_RATE_MS);

    loop {
        collector.refresh(&mut app)?;
        terminal.draw(|f| ui::draw(f, &app))?;

        if app.should_quit {
            return Ok(());
        }

        // The bounded poll doubles as the frame sleep and the quit-key check.
        if event::poll(tick_rate)? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    input::handle_input(&mut app, key);
                    if app.should_quit {
                        return Ok(());
                    }
                }
                Event::Resize(_, _) => {
                    // Size is re-queried on the next draw
                }
                _ => {}
            }
        }
    }
}
