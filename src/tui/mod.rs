//! # TUI Adapter
//!
//! The ratatui-specific layer. Handles terminal I/O, renders the UI,
//! and translates keyboard events into core::Action values.
//!
//! This is the only module that knows about ratatui and crossterm.
//! The plain-text report in `report.rs` is the other adapter over the same core.
//!
//! ## Redraw Strategy
//!
//! The event loop uses conditional redraw to avoid unnecessary work:
//!
//! - **Loading**: polls every ~80ms so the result shows up promptly.
//! - **Idle**: sleeps up to 500ms, only redraws on events, terminal resize,
//!   or a message from the fetch task.
//!
//! A `SteadyBlock` cursor style is used instead of a blinking cursor because
//! ratatui's `set_cursor_position` resets the terminal's blink timer on every
//! `draw()` call, making blinking cursors appear erratic during redraws.

mod component;
mod components;
mod event;
mod ui;

use log::{debug, info, warn};
use std::io::stdout;
use std::sync::{Arc, mpsc};
use std::time::Duration;

use crossterm::cursor::{Hide, SetCursorStyle, Show};
use crossterm::event::{DisableBracketedPaste, EnableBracketedPaste};
use crossterm::execute;

use crate::core::action::{Action, Effect, update};
use crate::core::query::QueryState;
use crate::core::state::App;
use crate::source::Session;
use crate::tui::components::FilterBarState;
use crate::tui::event::{TuiEvent, poll_event_immediate, poll_event_timeout};

/// TUI-specific presentation state (not part of core business logic)
pub struct TuiState {
    pub filter_bar: FilterBarState,
}

impl TuiState {
    pub fn new(query: &QueryState) -> Self {
        Self {
            filter_bar: FilterBarState::new(query),
        }
    }
}

struct TerminalModeGuard;

impl TerminalModeGuard {
    fn new() -> std::io::Result<Self> {
        execute!(
            stdout(),
            EnableBracketedPaste,
            Show,                        // Show cursor for input editing
            SetCursorStyle::SteadyBlock, // Non-blinking: avoids blink timer reset from redraws
        )?;
        info!("Terminal modes enabled (bracketed paste, steady block cursor)");
        Ok(Self)
    }
}

impl Drop for TerminalModeGuard {
    fn drop(&mut self) {
        let _ = execute!(stdout(), DisableBracketedPaste, Hide);
    }
}

/// Maps a terminal event to the action it stands for, updating focus and
/// text buffers along the way.
///
/// An open notice is modal: only Enter/Esc (dismiss), Ctrl+R (retry) and
/// Ctrl+C get through.
pub fn route_event(app: &App, tui: &mut TuiState, event: TuiEvent) -> Option<Action> {
    if matches!(event, TuiEvent::ForceQuit) {
        return Some(Action::Quit);
    }

    if app.notice.is_some() {
        return match event {
            TuiEvent::Submit | TuiEvent::Escape => Some(Action::DismissNotice),
            TuiEvent::Refresh => Some(Action::Refetch),
            _ => None,
        };
    }

    match event {
        TuiEvent::Refresh => Some(Action::Refetch),
        TuiEvent::Escape => Some(Action::Quit),
        TuiEvent::Resize => None,
        other => {
            let view = app.view();
            tui.filter_bar.handle_event(&other, &view)
        }
    }
}

pub fn run(session: Arc<Session>, query: QueryState) -> std::io::Result<()> {
    let mut app = App::new(query);
    let mut tui = TuiState::new(&app.query);

    let mut terminal = ratatui::init();
    let _terminal_mode_guard = TerminalModeGuard::new();

    // Channel for actions from background tasks
    let (tx, rx) = mpsc::channel();

    update(&mut app, Action::FetchStarted);
    spawn_fetch(session.clone(), tx.clone());

    let mut needs_redraw = true; // Force first frame

    'main: loop {
        let loading = app.fetch.is_pending();

        // Only draw when something changed
        if needs_redraw {
            terminal.draw(|f| ui::draw_ui(f, &app, &mut tui))?;
            needs_redraw = false;
        }

        let timeout = if loading {
            Duration::from_millis(80)
        } else {
            Duration::from_millis(500)
        };
        let first_event = poll_event_timeout(timeout);

        // Process first event + drain ALL pending events before next draw
        if first_event.is_some() {
            needs_redraw = true;
        }
        for event in first_event
            .into_iter()
            .chain(std::iter::from_fn(poll_event_immediate))
        {
            let Some(action) = route_event(&app, &mut tui, event) else {
                continue;
            };
            if dispatch(&mut app, action, &session, &tx) == Effect::Quit {
                break 'main;
            }
        }

        // Handle background task actions (fetch results)
        while let Ok(action) = rx.try_recv() {
            needs_redraw = true;
            if dispatch(&mut app, action, &session, &tx) == Effect::Quit {
                break 'main;
            }
        }
    }

    ratatui::restore();
    Ok(())
}

/// Applies an action and performs the effect it asks for.
fn dispatch(
    app: &mut App,
    action: Action,
    session: &Arc<Session>,
    tx: &mpsc::Sender<Action>,
) -> Effect {
    match &action {
        Action::RecordsLoaded(records) => debug!("Event loop received {} records", records.len()),
        other => debug!("Event loop received: {:?}", other),
    }
    let effect = update(app, action);
    if effect == Effect::SpawnFetch {
        update(app, Action::FetchStarted);
        spawn_fetch(session.clone(), tx.clone());
    }
    effect
}

fn spawn_fetch(session: Arc<Session>, tx: mpsc::Sender<Action>) {
    info!("Spawning country fetch");
    tokio::spawn(async move {
        let action = match session.fetch_all_countries().await {
            Ok(records) => Action::RecordsLoaded(records),
            Err(e) => Action::FetchFailed(e.to_string()),
        };
        if tx.send(action).is_err() {
            warn!("Failed to send fetch result: receiver dropped");
        }
    });
}
