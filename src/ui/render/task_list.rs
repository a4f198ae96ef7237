use super::widgets::spinner;
use super::*;
use crate::state::{Focus, State};
use crate::ui::widgets::styling;
use ratatui::{
    layout::{Alignment, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
};

const BLOCK_TITLE: &str = "Tasks";
const EMPTY_TEXT: &str = "No tasks added yet.";

/// Render the filtered task list according to state.
///
pub fn task_list(frame: &mut Frame, size: Rect, state: &State, theme: &Theme) {
    let active = state.current_focus() == Focus::Tasks || state.is_editing();
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

    if !state.is_loaded() {
        frame.render_widget(
            spinner::widget(state, theme, size.height).block(block),
            size,
        );
        return;
    }

    let visible = state.visible_tasks();
    if visible.is_empty() {
        frame.render_widget(
            Paragraph::new(Span::styled(EMPTY_TEXT, styling::muted_text_style(theme)))
                .alignment(Alignment::Center)
                .block(block),
            size,
        );
        return;
    }

    let editing = state.get_editing();
    let items: Vec<ListItem> = visible
        .iter()
        .map(|task| match editing {
            Some(edit) if edit.id == task.id => ListItem::new(Line::from(vec![
                Span::styled("✎ ", styling::normal_text_style(theme)),
                Span::styled(format!("{}▏", edit.text), styling::input_style(theme)),
            ])),
            _ => {
                let status = if task.completed {
                    "(Completed)"
                } else {
                    "(Pending)"
                };
                ListItem::new(Line::from(format!("{} {}", task.title, status)))
                    .style(styling::task_row_style(theme, task.completed))
            }
        })
        .collect();

    let mut highlight = styling::selected_row_style(theme);
    if editing.is_some() {
        highlight = styling::normal_text_style(theme);
    }
    let list = List::new(items)
        .block(block)
        .highlight_style(highlight)
        .highlight_symbol("> ");

    let mut list_state = ListState::default();
    list_state.select(state.selected_index());
    frame.render_stateful_widget(list, size, &mut list_state);
}
