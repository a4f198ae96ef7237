use super::*;
use crate::logger::LogBuffer;
use crate::ui::widgets::styling;
use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem},
};

const BLOCK_TITLE: &str = "Log";

/// Render the most recent log entries that fit the area.
///
pub fn log(frame: &mut Frame, size: Rect, log_buffer: &LogBuffer, theme: &Theme) {
    let block = Block::default()
        .title(BLOCK_TITLE)
        .borders(Borders::ALL)
        .border_style(styling::normal_block_border_style(theme))
        .style(styling::surface_style(theme));

    let capacity = size.height.saturating_sub(2) as usize;
    let items: Vec<ListItem> = match log_buffer.lock() {
        Ok(entries) => {
            let skip = entries.len().saturating_sub(capacity);
            entries
                .iter()
                .skip(skip)
                .map(|entry| {
                    let style = if entry.contains(" ERROR ") {
                        styling::normal_text_style(theme).fg(theme.error.to_color())
                    } else {
                        styling::muted_text_style(theme)
                    };
                    ListItem::new(Line::from(Span::styled(entry.clone(), style)))
                })
                .collect()
        }
        Err(_) => vec![],
    };

    frame.render_widget(List::new(items).block(block), size);
}
