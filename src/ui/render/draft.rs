use super::*;
use crate::state::{Focus, State};
use crate::ui::widgets::styling;
use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};
use unicode_width::UnicodeWidthStr;

const BLOCK_TITLE: &str = "Add New Task";
const PLACEHOLDER: &str = "Add a new task...";

/// Render the new task input according to state.
///
pub fn draft(frame: &mut Frame, size: Rect, state: &State, theme: &Theme) {
    let active = state.current_focus() == Focus::Draft && !state.is_editing();

    let mut block = Block::default()
        .borders(Borders::ALL)
        .style(styling::surface_style(theme));
    block = if active {
        block
            .border_style(styling::active_block_border_style(theme))
            .title(Span::styled(BLOCK_TITLE, styling::active_block_title_style()))
    } else {
        block
            .border_style(styling::normal_block_border_style(theme))
            .title(BLOCK_TITLE)
    };

    let text = if state.get_draft().is_empty() {
        Line::from(Span::styled(PLACEHOLDER, styling::muted_text_style(theme)))
    } else {
        Line::from(state.get_draft().to_owned())
    };
    let inner = block.inner(size);
    frame.render_widget(
        Paragraph::new(text)
            .style(styling::input_style(theme))
            .block(block),
        size,
    );

    if active {
        frame.set_cursor(cursor_x(inner, state.get_draft()), inner.y);
    }
}

/// Column just past the typed text, measured in terminal cells and kept
/// inside the input area.
///
fn cursor_x(inner: Rect, text: &str) -> u16 {
    let width = u16::try_from(text.width()).unwrap_or(u16::MAX);
    inner
        .x
        .saturating_add(width)
        .min(inner.right().saturating_sub(1))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn area() -> Rect {
        Rect::new(1, 1, 40, 1)
    }

    #[test]
    fn cursor_follows_ascii_text() {
        assert_eq!(cursor_x(area(), ""), 1);
        assert_eq!(cursor_x(area(), "milk"), 5);
    }

    #[test]
    fn cursor_counts_wide_characters_as_two_cells() {
        assert_eq!(cursor_x(area(), "牛乳"), 5);
        assert_eq!(cursor_x(area(), "a📌"), 4);
    }

    #[test]
    fn cursor_stays_inside_for_long_drafts() {
        assert_eq!(cursor_x(area(), &"x".repeat(70_000)), 40);
        assert_eq!(cursor_x(Rect::new(u16::MAX - 2, 0, 2, 1), "abc"), u16::MAX - 1);
    }
}
