//! Terminal setup, teardown and the main loop
//!
//! Raw mode, the alternate screen and mouse capture are switched on for the
//! lifetime of the TUI and switched off again on exit or panic.

use anyhow::Result;
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io::{self, Stdout};
use std::panic;

use crate::config::Settings;
use crate::services::Ledger;

use super::app::App;
use super::event::EventHandler;
use super::handler::handle_event;
use super::views;

pub type Tui = Terminal<CrosstermBackend<Stdout>>;

pub fn init_terminal() -> Result<Tui> {
    let previous_hook = panic::take_hook();
    panic::set_hook(Box::new(move |info| {
        let _ = restore_terminal();
        previous_hook(info);
    }));

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;

    Ok(Terminal::new(CrosstermBackend::new(stdout))?)
}

pub fn restore_terminal() -> Result<()> {
    disable_raw_mode()?;
    execute!(io::stdout(), LeaveAlternateScreen, DisableMouseCapture)?;
    Ok(())
}

/// Open the tracker on `ledger` and block until the user quits.
///
/// The terminal is restored even when the loop fails; the loop's error wins
/// over a restore error.
pub fn run_tui(ledger: &mut Ledger, settings: &Settings) -> Result<()> {
    let mut terminal = init_terminal()?;
    let result = event_loop(&mut terminal, App::new(ledger, settings));
    let restored = restore_terminal();
    result.and(restored)
}

fn event_loop(terminal: &mut Tui, mut app: App<'_>) -> Result<()> {
    let events = EventHandler::default();

    while !app.should_quit {
        terminal.draw(|frame| views::render(frame, &mut app))?;
        handle_event(&mut app, events.next()?)?;
    }

    Ok(())
}
