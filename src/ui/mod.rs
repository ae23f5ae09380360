//! Interactive terminal UI for the directory
//!
//! Ratatui/crossterm adapter around the view pipeline. The session starts in
//! the loading phase while a background thread performs the single outbound
//! read; the event loop polls the result channel between input events. If the
//! user quits first, the receiver is dropped and the late result is simply
//! discarded.
//!
//! # Architecture
//!
//! - `app`: mutable session state ([`App`], [`Phase`])
//! - `events`: keyboard/mouse handling mapped onto view-state commands
//! - `render`: the four display states drawn with ratatui widgets
//! - `theme`: widget styles

pub mod app;
pub mod error;
pub mod events;
pub mod render;
pub mod theme;

pub use app::{App, Phase};
pub use error::{Result, UiError};
pub use theme::Theme;

use crate::source::{LoadOutcome, Source, SourceError};
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use events::EventResult;
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io::{self, Stdout};
use std::sync::mpsc::{self, Receiver, TryRecvError};
use std::thread;
use std::time::Duration;

/// Event poll timeout; also bounds how often the load channel is checked
const TICK: Duration = Duration::from_millis(100);

/// Setup terminal for TUI
fn setup_terminal() -> Result<Terminal<CrosstermBackend<Stdout>>> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    Terminal::new(backend).map_err(Into::into)
}

/// Cleanup terminal after TUI
fn cleanup_terminal() -> Result<()> {
    disable_raw_mode()?;
    execute!(io::stdout(), LeaveAlternateScreen, DisableMouseCapture)?;
    Ok(())
}

/// Run an interactive session against the given source
///
/// Blocks until the user quits.
///
/// # Errors
///
/// Returns `UiError` if the terminal cannot be set up or event polling fails.
/// Load failures do not end the session; they surface as the error display
/// state instead.
pub fn run(source: Source, page_size: usize) -> Result<()> {
    let (tx, rx) = mpsc::channel();
    thread::spawn(move || {
        // A dropped receiver just discards the result
        let _ = tx.send(source.load());
    });

    let mut terminal = setup_terminal()?;
    let result = run_loop(&mut terminal, &rx, page_size);
    cleanup_terminal()?;
    result
}

fn run_loop(
    terminal: &mut Terminal<CrosstermBackend<Stdout>>,
    rx: &Receiver<LoadOutcome>,
    page_size: usize,
) -> Result<()> {
    let mut app = App::new(page_size);
    let theme = Theme::default();

    loop {
        poll_load(&mut app, rx);

        terminal.draw(|frame| render::draw(frame, &app, &theme))?;

        if events::poll_and_handle(&mut app, TICK)? == EventResult::Exit || app.should_exit {
            return Ok(());
        }
    }
}

/// Check the load channel while the read is outstanding
///
/// A disconnected channel without a result is the one failure the fallback
/// path cannot absorb; it becomes the terminal error state.
fn poll_load(app: &mut App, rx: &Receiver<LoadOutcome>) {
    if app.phase != Phase::Loading {
        return;
    }
    match rx.try_recv() {
        Ok(outcome) => app.finish_load(outcome),
        Err(TryRecvError::Empty) => {}
        Err(TryRecvError::Disconnected) => {
            app.fail_load(SourceError::WorkerDisconnected.to_string());
        }
    }
}
