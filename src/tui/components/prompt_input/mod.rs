//! # PromptInput Component
//!
//! The single required text field of the form.
//!
//! ## Responsibilities
//!
//! - Capture text input (typing, paste, backspace, delete, cursor movement)
//! - Report every edit with the full new value so the form state can mirror it
//! - Enforce the required constraint: Enter on an empty field is blocked
//!
//! The value is NOT cleared on submit; the form keeps showing what was sent.

mod cursor;

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Paragraph};

use crate::tui::component::{Component, EventHandler};
use crate::tui::event::TuiEvent;

use cursor::{CursorState, HORIZONTAL_OVERHEAD, next_char_boundary, prev_char_boundary};

/// Rows taken by the bordered input.
pub const INPUT_HEIGHT: u16 = 3;

/// High-level events emitted by the PromptInput
#[derive(Debug, Clone, PartialEq)]
pub enum InputEvent {
    /// The value changed; carries the input's name and its complete new value.
    Changed { name: &'static str, value: String },
    /// Enter pressed on a non-empty value.
    Submit,
    /// Enter pressed on an empty value (required field).
    Blocked,
}

pub struct PromptInput {
    /// Form field this input is bound to.
    pub name: &'static str,
    pub buffer: String,
    cursor: CursorState,
}

impl Default for PromptInput {
    fn default() -> Self {
        Self::new()
    }
}

impl PromptInput {
    pub fn new() -> Self {
        Self::named("prompt")
    }

    pub fn named(name: &'static str) -> Self {
        Self {
            name,
            buffer: String::new(),
            cursor: CursorState::new(),
        }
    }

    fn changed(&self) -> InputEvent {
        InputEvent::Changed {
            name: self.name,
            value: self.buffer.clone(),
        }
    }

    fn insert_str(&mut self, text: &str) {
        self.buffer.insert_str(self.cursor.pos, text);
        self.cursor.pos += text.len();
    }
}

impl Component for PromptInput {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let inner = area.width.saturating_sub(HORIZONTAL_OVERHEAD);
        self.cursor.update_scroll_offset(&self.buffer, inner);

        let title = Line::from(vec![
            Span::styled("Prompt", Style::default().add_modifier(Modifier::BOLD)),
            Span::styled(" *", Style::default().fg(Color::Red)),
        ]);

        let block = Block::bordered()
            .border_type(BorderType::Rounded)
            .title(title);

        let visible = self.cursor.visible_text(&self.buffer, inner);
        let input = Paragraph::new(visible).block(block);
        frame.render_widget(input, area);

        frame.set_cursor_position(self.cursor.screen_pos(&self.buffer, area));
    }
}

impl EventHandler for PromptInput {
    type Event = InputEvent;

    fn handle_event(&mut self, event: &TuiEvent) -> Option<Self::Event> {
        match event {
            TuiEvent::InputChar(c) => {
                let mut tmp = [0u8; 4];
                self.insert_str(c.encode_utf8(&mut tmp));
                Some(self.changed())
            }
            TuiEvent::Paste(text) => {
                // Single-line field: line breaks are dropped.
                let text: String = text.chars().filter(|c| *c != '\n' && *c != '\r').collect();
                if text.is_empty() {
                    return None;
                }
                self.insert_str(&text);
                Some(self.changed())
            }
            TuiEvent::Backspace => {
                if self.cursor.pos == 0 {
                    return None;
                }
                let prev = prev_char_boundary(&self.buffer, self.cursor.pos);
                self.buffer.drain(prev..self.cursor.pos);
                self.cursor.pos = prev;
                Some(self.changed())
            }
            TuiEvent::Delete => {
                if self.cursor.pos >= self.buffer.len() {
                    return None;
                }
                let next = next_char_boundary(&self.buffer, self.cursor.pos);
                self.buffer.drain(self.cursor.pos..next);
                Some(self.changed())
            }
            TuiEvent::CursorLeft => {
                self.cursor.move_left(&self.buffer);
                None
            }
            TuiEvent::CursorRight => {
                self.cursor.move_right(&self.buffer);
                None
            }
            TuiEvent::CursorHome => {
                self.cursor.pos = 0;
                None
            }
            TuiEvent::CursorEnd => {
                self.cursor.pos = self.buffer.len();
                None
            }
            TuiEvent::Submit => {
                if self.buffer.is_empty() {
                    Some(InputEvent::Blocked)
                } else {
                    Some(InputEvent::Submit)
                }
            }
            TuiEvent::Quit | TuiEvent::Resize => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    fn value_of(event: Option<InputEvent>) -> String {
        match event {
            Some(InputEvent::Changed { value, .. }) => value,
            other => panic!("Expected Changed, got {other:?}"),
        }
    }

    #[test]
    fn test_typing_reports_full_value() {
        let mut input = PromptInput::new();
        assert_eq!(value_of(input.handle_event(&TuiEvent::InputChar('H'))), "H");
        assert_eq!(value_of(input.handle_event(&TuiEvent::InputChar('i'))), "Hi");
        assert_eq!(value_of(input.handle_event(&TuiEvent::Backspace)), "H");
    }

    #[test]
    fn test_insert_in_middle() {
        let mut input = PromptInput::new();
        input.handle_event(&TuiEvent::Paste("Hllo".to_string()));
        input.handle_event(&TuiEvent::CursorHome);
        input.handle_event(&TuiEvent::CursorRight);
        let value = value_of(input.handle_event(&TuiEvent::InputChar('e')));
        assert_eq!(value, "Hello");
    }

    #[test]
    fn test_delete_at_cursor() {
        let mut input = PromptInput::new();
        input.handle_event(&TuiEvent::Paste("héllo".to_string()));
        input.handle_event(&TuiEvent::CursorHome);
        input.handle_event(&TuiEvent::CursorRight);
        assert_eq!(value_of(input.handle_event(&TuiEvent::Delete)), "hllo");
        input.handle_event(&TuiEvent::CursorEnd);
        assert_eq!(input.handle_event(&TuiEvent::Delete), None);
    }

    #[test]
    fn test_changed_carries_input_name() {
        let mut input = PromptInput::new();
        assert_eq!(
            input.handle_event(&TuiEvent::InputChar('x')),
            Some(InputEvent::Changed {
                name: "prompt",
                value: "x".to_string()
            })
        );
    }

    #[test]
    fn test_backspace_on_empty_is_noop() {
        let mut input = PromptInput::new();
        assert_eq!(input.handle_event(&TuiEvent::Backspace), None);
    }

    #[test]
    fn test_paste_drops_line_breaks() {
        let mut input = PromptInput::new();
        let value = value_of(input.handle_event(&TuiEvent::Paste("a\r\nb\nc".to_string())));
        assert_eq!(value, "abc");
        assert_eq!(input.handle_event(&TuiEvent::Paste("\n".to_string())), None);
    }

    #[test]
    fn test_submit_requires_value() {
        let mut input = PromptInput::new();
        assert_eq!(input.handle_event(&TuiEvent::Submit), Some(InputEvent::Blocked));

        input.handle_event(&TuiEvent::InputChar(' '));
        assert_eq!(input.handle_event(&TuiEvent::Submit), Some(InputEvent::Submit));
    }

    #[test]
    fn test_submit_keeps_value() {
        let mut input = PromptInput::new();
        input.handle_event(&TuiEvent::Paste("Hello".to_string()));
        input.handle_event(&TuiEvent::Submit);
        assert_eq!(input.buffer, "Hello");
    }

    #[test]
    fn test_render_shows_label_and_value() {
        let backend = TestBackend::new(30, 3);
        let mut terminal = Terminal::new(backend).unwrap();

        let mut input = PromptInput::new();
        input.handle_event(&TuiEvent::Paste("Hello".to_string()));

        terminal.draw(|f| input.render(f, f.area())).unwrap();

        let text = terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect::<String>();
        assert!(text.contains("Prompt *"));
        assert!(text.contains("Hello"));
    }
}
