use ratatui::Frame;
use ratatui::layout::{Constraint, Flex, Layout, Rect};
use ratatui::style::{Color, Style};
use ratatui::text::Line;
use ratatui::widgets::{Block, BorderType, Padding};

use crate::core::state::App;
use crate::tui::TuiState;
use crate::tui::component::Component;
use crate::tui::components::prompt_input::INPUT_HEIGHT;
use crate::tui::components::{FormTitle, MessageArea, SubmitButton};

/// Widest the form card gets, in columns.
pub const MAX_FORM_WIDTH: u16 = 52;

const FOOTER: &str = " Enter submit · Esc quit ";

/// Centered card area for the given frame.
pub fn form_area(area: Rect) -> Rect {
    let [card] = Layout::horizontal([Constraint::Max(MAX_FORM_WIDTH)])
        .flex(Flex::Center)
        .areas(area);
    card
}

pub fn draw_ui(frame: &mut Frame, app: &App, tui: &mut TuiState) {
    use Constraint::{Length, Min};

    let card = form_area(frame.area());
    let block = Block::bordered()
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(Color::DarkGray))
        .title_bottom(Line::from(FOOTER).centered())
        .padding(Padding::horizontal(1));
    let inner = block.inner(card);
    frame.render_widget(block, card);

    let [title_area, _, input_area, button_area, _, message_area] = Layout::vertical([
        Length(1),
        Length(1),
        Length(INPUT_HEIGHT),
        Length(1),
        Length(1),
        Min(0),
    ])
    .areas(inner);

    FormTitle.render(frame, title_area);
    tui.input.render(frame, input_area);
    SubmitButton::new(app.loading).render(frame, button_area);
    MessageArea::new(
        app.error.as_deref(),
        app.response.as_deref(),
        tui.show_required_hint,
    )
    .render(frame, message_area);
}
