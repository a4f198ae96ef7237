use super::*;
use crate::state::{State, TaskFilter};
use crate::ui::widgets::styling;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::Modifier,
    text::Span,
    widgets::{Block, Borders, Paragraph, Tabs},
};

/// Render the filter tabs and the pending count for the displayed tasks.
///
pub fn filters(frame: &mut Frame, size: Rect, state: &State, theme: &Theme) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(styling::normal_block_border_style(theme))
        .style(styling::surface_style(theme));
    let inner = block.inner(size);
    frame.render_widget(block, size);

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(30), Constraint::Length(20)])
        .split(inner);

    let titles: Vec<String> = TaskFilter::ALL
        .iter()
        .enumerate()
        .map(|(i, filter)| format!("{} {}", i + 1, filter.label()))
        .collect();
    let tabs = Tabs::new(titles)
        .select(state.get_filter().index())
        .style(styling::muted_text_style(theme))
        .highlight_style(
            styling::normal_text_style(theme)
                .bg(theme.filter_bg.to_color())
                .add_modifier(Modifier::BOLD),
        );
    frame.render_widget(tabs, columns[0]);

    let count = Paragraph::new(Span::styled(
        format!("Pending Tasks: {}", state.pending_count()),
        styling::muted_text_style(theme),
    ))
    .alignment(Alignment::Right);
    frame.render_widget(count, columns[1]);
}
