//! # SubmitButton Component
//!
//! Stateless. The only prop is whether a submission is in flight, which both
//! relabels the button and disables it.

use ratatui::Frame;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::Paragraph;

use crate::tui::component::Component;

pub const SUBMIT_LABEL: &str = "Submit";
pub const SUBMITTING_LABEL: &str = "Submitting...";

pub struct SubmitButton {
    pub loading: bool,
}

impl SubmitButton {
    pub fn new(loading: bool) -> Self {
        Self { loading }
    }

    pub fn label(&self) -> &'static str {
        if self.loading {
            SUBMITTING_LABEL
        } else {
            SUBMIT_LABEL
        }
    }

    pub fn is_disabled(&self) -> bool {
        self.loading
    }

    fn style(&self) -> Style {
        if self.is_disabled() {
            Style::default()
                .fg(Color::Gray)
                .bg(Color::DarkGray)
                .add_modifier(Modifier::DIM)
        } else {
            Style::default()
                .fg(Color::White)
                .bg(Color::Blue)
                .add_modifier(Modifier::BOLD)
        }
    }
}

impl Component for SubmitButton {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let button = Paragraph::new(format!(" {} ", self.label()))
            .style(self.style())
            .alignment(Alignment::Center);
        frame.render_widget(button, area);
    }
}
