use super::*;
use crate::state::{Focus, State};
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
};

/// Return the mode label and key hints for the current input mode.
///
fn hints(state: &State) -> (&'static str, &'static str) {
    if state.is_editing() {
        return (" EDIT ", " Type to edit, Enter: save, Esc: cancel");
    }
    match state.current_focus() {
        Focus::Draft => (" ADD ", " Type a task, Enter: add, Esc/Tab: back to list"),
        Focus::Tasks => (
            " TASKS ",
            " j/k: navigate, space: toggle, e: edit, d: delete, a: add, f/1-3: filter, t: theme, r: refresh, q: quit",
        ),
    }
}

/// Render footer with key hints according to state.
///
pub fn footer(frame: &mut Frame, size: Rect, state: &State, theme: &Theme) {
    let (mode, text) = hints(state);
    let mode_color = if state.is_editing() {
        theme.info
    } else {
        theme.primary
    };
    let line = Line::from(vec![
        Span::styled(
            mode,
            Style::default()
                .bg(mode_color.to_color())
                .fg(theme.background.to_color())
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(text, Style::default().fg(theme.text_muted.to_color())),
    ]);
    frame.render_widget(Paragraph::new(line), size);
}
