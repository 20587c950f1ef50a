use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// TUI-specific input events
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TuiEvent {
    // Global
    ForceQuit, // Ctrl+C
    Escape,
    Refresh, // Ctrl+R re-invokes the fetch
    Resize,

    // Focus
    FocusNext, // Tab
    FocusPrev, // Shift+Tab

    // Editing / selection
    Submit,
    InputChar(char),
    Paste(String), // Bracketed paste
    Backspace,
    Left,
    Right,
    Up,
    Down,

    // Paging
    PageUp,
    PageDown,
}

/// Poll for an event without blocking (returns immediately)
pub fn poll_event_immediate() -> Option<TuiEvent> {
    poll_event_timeout(std::time::Duration::ZERO)
}

/// Poll for an event, blocking up to `timeout`.
pub fn poll_event_timeout(timeout: std::time::Duration) -> Option<TuiEvent> {
    match event::poll(timeout) {
        Ok(true) => match event::read() {
            Ok(event) => translate(event),
            Err(e) => {
                log::warn!("Failed to read terminal event: {}", e);
                None
            }
        },
        Ok(false) => None,
        Err(e) => {
            log::warn!("Failed to poll terminal events: {}", e);
            None
        }
    }
}

fn translate(event: Event) -> Option<TuiEvent> {
    match event {
        Event::Key(key_event) => translate_key(key_event),
        Event::Paste(data) => Some(TuiEvent::Paste(data)),
        Event::Resize(_, _) => Some(TuiEvent::Resize),
        _ => None,
    }
}

fn translate_key(key_event: KeyEvent) -> Option<TuiEvent> {
    // Some terminals report releases too; act on presses only
    if key_event.kind == KeyEventKind::Release {
        return None;
    }
    log::debug!(
        "Key event: {:?} with modifiers {:?}",
        key_event.code,
        key_event.modifiers
    );
    match (key_event.modifiers, key_event.code) {
        (KeyModifiers::CONTROL, KeyCode::Char('c')) => Some(TuiEvent::ForceQuit),
        (KeyModifiers::CONTROL, KeyCode::Char('r')) => Some(TuiEvent::Refresh),
        (_, KeyCode::BackTab) => Some(TuiEvent::FocusPrev),
        (KeyModifiers::SHIFT, KeyCode::Tab) => Some(TuiEvent::FocusPrev),
        (_, KeyCode::Tab) => Some(TuiEvent::FocusNext),
        (_, KeyCode::Char(c)) => Some(TuiEvent::InputChar(c)),
        (_, KeyCode::Backspace) => Some(TuiEvent::Backspace),
        (_, KeyCode::Enter) => Some(TuiEvent::Submit),
        (_, KeyCode::Esc) => Some(TuiEvent::Escape),
        (_, KeyCode::Left) => Some(TuiEvent::Left),
        (_, KeyCode::Right) => Some(TuiEvent::Right),
        (_, KeyCode::Up) => Some(TuiEvent::Up),
        (_, KeyCode::Down) => Some(TuiEvent::Down),
        (_, KeyCode::PageUp) => Some(TuiEvent::PageUp),
        (_, KeyCode::PageDown) => Some(TuiEvent::PageDown),
        _ => None,
    }
}
