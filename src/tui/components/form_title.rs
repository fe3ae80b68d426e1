use ratatui::Frame;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::Paragraph;

use crate::tui::component::Component;

pub const FORM_TITLE: &str = "Submit a Prompt";

/// Heading line at the top of the form.
pub struct FormTitle;

impl Component for FormTitle {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let heading = Paragraph::new(FORM_TITLE)
            .style(Style::default().fg(Color::White).add_modifier(Modifier::BOLD))
            .alignment(Alignment::Center);
        frame.render_widget(heading, area);
    }
}
