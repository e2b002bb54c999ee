//! Interactive dashboard.
//!
//! Renders the project cards, the summary statistics and the active theme
//! with Ratatui, and maps key presses onto [`crate::view_state::ViewState`]
//! transitions:
//!
//! - `t`: toggle light/dark theme
//! - `Enter`/`Space`: expand or collapse the selected card
//! - `Esc`: collapse
//! - Arrow keys or `j`/`k`: move the selection
//! - `q` or `Ctrl+C`: quit
//!
//! The loop is single-threaded: poll for an event, apply it, redraw.

mod app;
mod ui;

pub use app::DashboardApp;
pub use ui::render;

use crate::error::{BoardError, Result};
use crate::project::Projects;
use crate::view_state::ViewState;
use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io::{self, IsTerminal, Stdout};
use std::time::Duration;

/// How long to wait for input before redrawing (handles resizes).
const POLL_INTERVAL: Duration = Duration::from_millis(250);

/// Initialize the terminal for TUI mode.
pub fn init_terminal() -> Result<Terminal<CrosstermBackend<Stdout>>> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let terminal = Terminal::new(backend)?;
    Ok(terminal)
}

/// Restore the terminal to normal mode.
pub fn restore_terminal(terminal: &mut Terminal<CrosstermBackend<Stdout>>) -> Result<()> {
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;
    Ok(())
}

/// Run the dashboard until the user quits.
pub fn run_dashboard(projects: Projects, view: ViewState) -> Result<()> {
    if !io::stdout().is_terminal() {
        return Err(BoardError::Terminal(
            "stdout is not a terminal; use `projboard list` for plain output".to_string(),
        ));
    }

    // Restore the terminal before the panic message is printed.
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen);
        original_hook(panic_info);
    }));

    let mut terminal = init_terminal()?;
    let mut app = DashboardApp::new(projects, view);
    tracing::debug!(projects = app.projects().len(), "dashboard started");

    let result = event_loop(&mut terminal, &mut app);

    // Restore even if the loop failed, then report the first error.
    let restored = restore_terminal(&mut terminal);
    result.and(restored)
}

fn event_loop(
    terminal: &mut Terminal<CrosstermBackend<Stdout>>,
    app: &mut DashboardApp,
) -> Result<()> {
    loop {
        terminal.draw(|frame| render(frame, app))?;

        if event::poll(POLL_INTERVAL)? {
            if let Event::Key(key) = event::read()? {
                // Only handle key press events (not release or repeat)
                if key.kind == KeyEventKind::Press {
                    app.handle_key(key);
                }
            }
        }

        if app.should_quit() {
            return Ok(());
        }
    }
}
