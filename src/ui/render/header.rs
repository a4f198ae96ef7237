use super::*;
use crate::state::{State, ThemeMode};
use crate::ui::widgets::styling;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::Modifier,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

const TITLE: &str = "📌 Tasks";

/// Render the title bar with the theme toggle hint.
///
pub fn header(frame: &mut Frame, size: Rect, state: &State, theme: &Theme) {
    let toggle_label = match state.get_theme() {
        ThemeMode::Light => "Dark Mode",
        ThemeMode::Dark => "Light Mode",
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(styling::normal_block_border_style(theme))
        .style(styling::surface_style(theme));
    let inner = block.inner(size);
    frame.render_widget(block, size);

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(10), Constraint::Length(16)])
        .split(inner);

    let title = Paragraph::new(Line::from(Span::styled(
        TITLE,
        styling::normal_text_style(theme).add_modifier(Modifier::BOLD),
    )));
    frame.render_widget(title, columns[0]);

    let toggle = Paragraph::new(Line::from(vec![
        Span::styled("t: ", styling::muted_text_style(theme)),
        Span::styled(toggle_label, styling::normal_text_style(theme)),
    ]))
    .alignment(Alignment::Right);
    frame.render_widget(toggle, columns[1]);
}
