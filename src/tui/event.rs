use std::time::Duration;

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// TUI-specific input events
#[derive(Debug, Clone, PartialEq)]
pub enum TuiEvent {
    Quit,
    Submit,

    // Field editing
    InputChar(char),
    Paste(String),
    Backspace,
    Delete,
    CursorLeft,
    CursorRight,
    CursorHome,
    CursorEnd,

    Resize,
}

/// Waits up to `timeout` for input, then drains everything already queued.
///
/// Returns an empty batch on timeout. A read error ends the batch and is
/// returned to the caller.
pub fn poll_events(timeout: Duration) -> std::io::Result<Vec<TuiEvent>> {
    collect_events(timeout, |wait| {
        if event::poll(wait)? {
            event::read().map(Some)
        } else {
            Ok(None)
        }
    })
}

/// Batching logic behind [`poll_events`], over any raw event source.
///
/// `next(wait)` returns `Ok(None)` when nothing arrives within `wait`. Only
/// the first call waits; the rest use a zero wait. Unbound events are skipped
/// without ending the drain.
fn collect_events<F>(timeout: Duration, mut next: F) -> std::io::Result<Vec<TuiEvent>>
where
    F: FnMut(Duration) -> std::io::Result<Option<Event>>,
{
    let mut events = Vec::new();
    let mut wait = timeout;
    while let Some(raw) = next(wait)? {
        events.extend(translate(raw));
        wait = Duration::ZERO;
    }
    Ok(events)
}

/// Maps a raw crossterm event to a `TuiEvent`. Unbound input yields `None`.
pub fn translate(event: Event) -> Option<TuiEvent> {
    match event {
        Event::Key(key_event) => translate_key(key_event),
        Event::Paste(data) => Some(TuiEvent::Paste(data)),
        Event::Resize(_, _) => Some(TuiEvent::Resize),
        _ => None,
    }
}

fn translate_key(key_event: KeyEvent) -> Option<TuiEvent> {
    // Keyboard enhancement also reports releases; only presses edit.
    if key_event.kind == KeyEventKind::Release {
        return None;
    }
    log::debug!(
        "Key event: {:?} with modifiers {:?}",
        key_event.code,
        key_event.modifiers
    );
    match (key_event.modifiers, key_event.code) {
        (KeyModifiers::CONTROL, KeyCode::Char('c')) => Some(TuiEvent::Quit),
        // AltGr arrives as Ctrl+Alt on some terminals and still types a char.
        (m, KeyCode::Char(_))
            if m.contains(KeyModifiers::CONTROL) && !m.contains(KeyModifiers::ALT) =>
        {
            None
        }
        (_, KeyCode::Char(c)) => Some(TuiEvent::InputChar(c)),
        (_, KeyCode::Enter) => Some(TuiEvent::Submit),
        (_, KeyCode::Esc) => Some(TuiEvent::Quit),
        (_, KeyCode::Backspace) => Some(TuiEvent::Backspace),
        (_, KeyCode::Delete) => Some(TuiEvent::Delete),
        (_, KeyCode::Left) => Some(TuiEvent::CursorLeft),
        (_, KeyCode::Right) => Some(TuiEvent::CursorRight),
        (_, KeyCode::Home) => Some(TuiEvent::CursorHome),
        (_, KeyCode::End) => Some(TuiEvent::CursorEnd),
        _ => None,
    }
}
