//! FOLIO - Terminal Portfolio
//!
//! A terminal-based personal portfolio application, built in Rust.
//! Features include an animated typewriter hero line, project and
//! testimonial carousels, light/dark theming with a saved preference,
//! and a contact form that submits to an HTTP mailer backend.

use std::io;
use std::sync::Arc;
use std::time::{Duration, Instant};

use crossterm::{
    event::{self, Event, KeyCode, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::{Backend, CrosstermBackend},
    Terminal,
};

mod domain;
mod application;
mod infrastructure;
mod presentation;

use application::{App, AppMode, ThemeManager};
use infrastructure::{
    ContentRepository, HttpTransport, PreferenceRepository, DEFAULT_CONTENT_FILE,
};
use presentation::{render_ui, InputHandler};

/// Upper bound on how long the event loop waits for input before the
/// animation timers get a chance to fire.
const TICK_RATE: Duration = Duration::from_millis(33);

/// Entry point for the FOLIO terminal portfolio application.
///
/// Sets up the terminal interface, loads the saved theme preference and
/// any on-disk portfolio content, and runs the main event loop until the
/// user quits.
///
/// # Errors
///
/// Returns an error if terminal setup fails or if there are issues
/// with the terminal interface during runtime.
fn main() -> Result<(), Box<dyn std::error::Error>> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let portfolio = ContentRepository::load_portfolio(DEFAULT_CONTENT_FILE)
        .map(|(portfolio, _)| portfolio)
        .unwrap_or_default();
    let theme = ThemeManager::load(PreferenceRepository::default());
    let mut app = App::new(portfolio, theme, Arc::new(HttpTransport::default()));
    app.start(Instant::now());

    let res = run_app(&mut terminal, &mut app);

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        println!("{err:?}");
    }

    Ok(())
}

/// Main application event loop.
///
/// Alternates rendering, keyboard dispatch, and timer advancement. Input
/// polling is bounded by the tick rate so the typewriter, toast, and
/// submission timers keep firing while the loop waits for keys.
///
/// # Arguments
///
/// * `terminal` - Terminal interface for rendering
/// * `app` - Mutable reference to application state
///
/// # Errors
///
/// Returns an IO error if terminal operations fail.
fn run_app<B: Backend>(terminal: &mut Terminal<B>, app: &mut App) -> io::Result<()> {
    let mut last_tick = Instant::now();
    loop {
        terminal.draw(|f| render_ui(f, app))?;

        let timeout = TICK_RATE
            .checked_sub(last_tick.elapsed())
            .unwrap_or(Duration::ZERO);

        if event::poll(timeout)? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    match key.code {
                        KeyCode::Char('q') if matches!(app.mode, AppMode::Normal) => {
                            app.typewriter.cancel();
                            return Ok(());
                        }
                        _ => InputHandler::handle_key_event(
                            app,
                            key.code,
                            key.modifiers,
                            Instant::now(),
                        ),
                    }
                }
            }
        }

        if last_tick.elapsed() >= TICK_RATE {
            app.advance(Instant::now());
            last_tick = Instant::now();
        }
    }
}
