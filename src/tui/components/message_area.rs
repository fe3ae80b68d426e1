//! # MessageArea Component
//!
//! Shows the result of the last resolved submission.
//!
//! - error → red
//! - response → green
//! - required-field hint → yellow
//!
//! Error and response are independent props: a failure does not clear an
//! older response, so both lines can be on screen at once.

use ratatui::Frame;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Color, Style};
use ratatui::text::Line;
use ratatui::widgets::{Paragraph, Wrap};

use crate::tui::component::Component;

pub const REQUIRED_HINT: &str = "Please fill out this field.";

pub struct MessageArea<'a> {
    pub error: Option<&'a str>,
    pub response: Option<&'a str>,
    pub show_required_hint: bool,
}

impl<'a> MessageArea<'a> {
    pub fn new(error: Option<&'a str>, response: Option<&'a str>, show_required_hint: bool) -> Self {
        Self {
            error,
            response,
            show_required_hint,
        }
    }

    pub fn error_style() -> Style {
        Style::default().fg(Color::Red)
    }

    pub fn response_style() -> Style {
        Style::default().fg(Color::Green)
    }

    fn lines(&self) -> Vec<Line<'a>> {
        let mut lines = Vec::new();
        if self.show_required_hint {
            lines.push(Line::styled(REQUIRED_HINT, Style::default().fg(Color::Yellow)));
        }
        // Empty strings render nothing, like any falsy message.
        if let Some(error) = self.error.filter(|e| !e.is_empty()) {
            lines.push(Line::styled(error, Self::error_style()));
        }
        if let Some(response) = self.response.filter(|r| !r.is_empty()) {
            if !lines.is_empty() {
                lines.push(Line::default());
            }
            lines.extend(
                response
                    .lines()
                    .map(|l| Line::styled(l, Self::response_style())),
            );
        }
        lines
    }
}

impl Component for MessageArea<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let lines = self.lines();
        if lines.is_empty() {
            return;
        }
        let paragraph = Paragraph::new(lines)
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: false });
        frame.render_widget(paragraph, area);
    }
}
