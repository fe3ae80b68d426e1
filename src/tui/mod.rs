//! # TUI Adapter
//!
//! The ratatui-specific layer. Handles terminal I/O, renders the form,
//! and translates keyboard events into core::Action values.
//!
//! This is the only module that knows about ratatui and crossterm.
//!
//! ## Submissions
//!
//! Each submit spawns one tokio task that posts the prompt and sends a
//! `SubmissionResolved` action back over an mpsc channel. The loop drains
//! that channel every tick, so the UI never blocks on the network. Nothing
//! is cancelled: if two requests are in flight, whichever resolves last is
//! what the form shows.

mod component;
pub mod components;
pub mod event;
pub mod ui;

use log::{debug, info, warn};
use std::io::stdout;
use std::sync::{Arc, mpsc};
use std::time::Duration;

use crossterm::cursor::{SetCursorStyle, Show};
use crossterm::event::{
    DisableBracketedPaste, EnableBracketedPaste, KeyboardEnhancementFlags,
    PopKeyboardEnhancementFlags, PushKeyboardEnhancementFlags,
};
use crossterm::execute;

use crate::client::PromptClient;
use crate::core::action::{Action, Effect, update};
use crate::core::state::{App, FormField, SubmissionId};
use crate::tui::component::EventHandler;
use crate::tui::components::{InputEvent, PromptInput};
use crate::tui::event::{TuiEvent, poll_events};

pub use ui::draw_ui;

/// TUI-specific presentation state (not part of core business logic)
pub struct TuiState {
    pub input: PromptInput,
    /// Set when Enter hit an empty field; cleared by the next edit.
    pub show_required_hint: bool,
}

impl Default for TuiState {
    fn default() -> Self {
        Self::new()
    }
}

impl TuiState {
    pub fn new() -> Self {
        Self {
            input: PromptInput::new(),
            show_required_hint: false,
        }
    }
}

struct TerminalModeGuard;

impl TerminalModeGuard {
    fn new() -> std::io::Result<Self> {
        execute!(
            stdout(),
            EnableBracketedPaste,
            Show,
            SetCursorStyle::SteadyBar,
            PushKeyboardEnhancementFlags(KeyboardEnhancementFlags::DISAMBIGUATE_ESCAPE_CODES)
        )?;
        info!("Terminal modes enabled (bracketed paste, steady bar cursor, keyboard enhancement)");
        Ok(Self)
    }
}

impl Drop for TerminalModeGuard {
    fn drop(&mut self) {
        let _ = execute!(
            stdout(),
            PopKeyboardEnhancementFlags,
            DisableBracketedPaste,
            SetCursorStyle::DefaultUserShape
        );
    }
}

/// Routes one terminal event through the form and the reducer.
///
/// Returns the effect the loop must run. Enter is always consumed here; while
/// a submission is in flight the submit control is disabled and Enter does
/// nothing.
pub fn dispatch(app: &mut App, tui: &mut TuiState, event: &TuiEvent) -> Effect {
    match event {
        TuiEvent::Quit => return update(app, Action::Quit),
        TuiEvent::Resize => return Effect::None,
        TuiEvent::Submit if app.loading => {
            debug!("Submit ignored: button disabled while loading");
            return Effect::None;
        }
        _ => {}
    }

    match tui.input.handle_event(event) {
        Some(InputEvent::Changed { name, value }) => {
            tui.show_required_hint = false;
            match FormField::from_name(name) {
                Some(field) => update(app, Action::UpdateField { field, value }),
                None => {
                    warn!("Ignoring edit to unknown field '{}'", name);
                    Effect::None
                }
            }
        }
        Some(InputEvent::Submit) => update(app, Action::Submit),
        Some(InputEvent::Blocked) => {
            tui.show_required_hint = true;
            Effect::None
        }
        None => Effect::None,
    }
}

pub fn run(client: Arc<dyn PromptClient>) -> std::io::Result<()> {
    let mut app = App::new();
    let mut tui = TuiState::new();

    let mut terminal = ratatui::init();
    let _terminal_mode_guard = TerminalModeGuard::new();

    // Channel for actions from background tasks
    let (tx, rx) = mpsc::channel();

    info!("Form ready, posting to {}", client.endpoint());

    let mut needs_redraw = true;
    let result = loop {
        if needs_redraw {
            if let Err(e) = terminal.draw(|f| ui::draw_ui(f, &app, &mut tui)) {
                break Err(e);
            }
            needs_redraw = false;
        }

        // Wait for input, then take every queued event before the next draw
        let events = match poll_events(Duration::from_millis(100)) {
            Ok(events) => events,
            Err(e) => break Err(e),
        };
        if !events.is_empty() {
            needs_redraw = true;
        }

        let mut should_quit = false;
        for event in &events {
            match dispatch(&mut app, &mut tui, event) {
                Effect::Quit => {
                    should_quit = true;
                    break;
                }
                Effect::SpawnRequest { id, prompt } => {
                    spawn_submission(client.clone(), id, prompt, tx.clone());
                }
                Effect::None => {}
            }
        }

        if should_quit {
            break Ok(());
        }

        // Handle background task actions (resolved submissions)
        while let Ok(action) = rx.try_recv() {
            needs_redraw = true;
            debug!("Event loop received: {:?}", action);
            update(&mut app, action);
        }
    };

    ratatui::restore();
    result
}

/// Posts `prompt` on a background task and reports the outcome on `tx`.
pub fn spawn_submission(
    client: Arc<dyn PromptClient>,
    id: SubmissionId,
    prompt: String,
    tx: mpsc::Sender<Action>,
) -> tokio::task::JoinHandle<()> {
    info!("Spawning submission {}", id);
    tokio::spawn(async move {
        let result = client.submit(&prompt).await;
        if tx.send(Action::SubmissionResolved { id, result }).is_err() {
            warn!("Failed to deliver submission {}: receiver dropped", id);
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::state::SUBMIT_ERROR_MESSAGE;
    use crate::test_support::StaticClient;

    fn type_text(app: &mut App, tui: &mut TuiState, text: &str) {
        for c in text.chars() {
            dispatch(app, tui, &TuiEvent::InputChar(c));
        }
    }

    #[test]
    fn test_typing_mirrors_into_form_state() {
        let mut app = App::new();
        let mut tui = TuiState::new();
        type_text(&mut app, &mut tui, "Hello");
        assert_eq!(app.form.prompt, "Hello");
        assert_eq!(tui.input.buffer, "Hello");
    }

    #[test]
    fn test_unknown_field_leaves_form_untouched() {
        let mut app = App::new();
        let mut tui = TuiState::new();
        tui.input = PromptInput::named("email");

        let effect = dispatch(&mut app, &mut tui, &TuiEvent::InputChar('a'));
        assert_eq!(effect, Effect::None);
        assert!(app.form.prompt.is_empty());
    }

    #[test]
    fn test_empty_submit_shows_hint_and_spawns_nothing() {
        let mut app = App::new();
        let mut tui = TuiState::new();

        let effect = dispatch(&mut app, &mut tui, &TuiEvent::Submit);
        assert_eq!(effect, Effect::None);
        assert!(tui.show_required_hint);
        assert!(!app.loading);

        type_text(&mut app, &mut tui, "x");
        assert!(!tui.show_required_hint);
    }

    #[test]
    fn test_submit_spawns_request_with_prompt() {
        let mut app = App::new();
        let mut tui = TuiState::new();
        type_text(&mut app, &mut tui, "Hello");

        let effect = dispatch(&mut app, &mut tui, &TuiEvent::Submit);
        assert_eq!(
            effect,
            Effect::SpawnRequest {
                id: SubmissionId(1),
                prompt: "Hello".to_string()
            }
        );
        assert!(app.loading);
    }

    #[test]
    fn test_submit_while_loading_is_swallowed() {
        let mut app = App::new();
        let mut tui = TuiState::new();
        type_text(&mut app, &mut tui, "Hello");
        dispatch(&mut app, &mut tui, &TuiEvent::Submit);

        let effect = dispatch(&mut app, &mut tui, &TuiEvent::Submit);
        assert_eq!(effect, Effect::None);

        // Editing still works while loading
        dispatch(&mut app, &mut tui, &TuiEvent::InputChar('!'));
        assert_eq!(app.form.prompt, "Hello!");
    }

    #[test]
    fn test_quit() {
        let mut app = App::new();
        let mut tui = TuiState::new();
        assert_eq!(dispatch(&mut app, &mut tui, &TuiEvent::Quit), Effect::Quit);
    }

    #[tokio::test]
    async fn test_spawn_submission_reports_success() {
        let (tx, rx) = mpsc::channel();
        let client = Arc::new(StaticClient::ok("Hi there"));

        spawn_submission(client.clone(), SubmissionId(3), "Hello".to_string(), tx)
            .await
            .unwrap();

        let action = rx.try_recv().unwrap();
        assert_eq!(
            action,
            Action::SubmissionResolved {
                id: SubmissionId(3),
                result: Ok("Hi there".to_string())
            }
        );
        assert_eq!(client.received(), vec!["Hello".to_string()]);
    }

    #[tokio::test]
    async fn test_spawned_failure_renders_fixed_message() {
        let mut app = App::new();
        let mut tui = TuiState::new();
        type_text(&mut app, &mut tui, "Hello");

        let Effect::SpawnRequest { id, prompt } = dispatch(&mut app, &mut tui, &TuiEvent::Submit)
        else {
            panic!("Expected SpawnRequest");
        };

        let (tx, rx) = mpsc::channel();
        spawn_submission(Arc::new(StaticClient::api_error(500)), id, prompt, tx)
            .await
            .unwrap();
        update(&mut app, rx.try_recv().unwrap());

        assert!(!app.loading);
        assert_eq!(app.error.as_deref(), Some(SUBMIT_ERROR_MESSAGE));
    }
}
