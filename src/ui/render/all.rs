use super::*;
use crate::logger::LogBuffer;
use crate::state::State;
use crate::ui::widgets::styling;
use ratatui::{
    layout::{Constraint, Direction, Layout},
    widgets::Block,
};

/// Render the whole screen according to state.
///
pub fn all(frame: &mut Frame, state: &State, log_buffer: &LogBuffer) {
    let theme = Theme::for_mode(state.get_theme());
    let size = frame.size();
    frame.render_widget(Block::default().style(styling::screen_style(&theme)), size);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Min(5),
            Constraint::Length(8),
            Constraint::Length(1),
        ])
        .split(size);

    header(frame, rows[0], state, &theme);
    draft(frame, rows[1], state, &theme);
    filters(frame, rows[2], state, &theme);
    task_list(frame, rows[3], state, &theme);
    log(frame, rows[4], log_buffer, &theme);
    footer(frame, rows[5], state, &theme);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::{TaskFilter, ThemeMode};
    use crate::todos::Task;
    use ratatui::{backend::TestBackend, Terminal};
    use std::collections::VecDeque;
    use std::sync::{mpsc::channel, Arc, Mutex};

    fn rendered(state: &State, log_buffer: &LogBuffer) -> String {
        let mut terminal = Terminal::new(TestBackend::new(100, 30)).unwrap();
        terminal
            .draw(|frame| all(frame, state, log_buffer))
            .unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|cell| cell.symbol())
            .collect()
    }

    fn sample_state() -> State {
        let (tx, _rx) = channel();
        let mut state = State::new(tx, ThemeMode::Light);
        state.set_tasks(vec![
            Task {
                id: 1,
                title: "Alpha".to_string(),
                completed: false,
            },
            Task {
                id: 2,
                title: "Bravo".to_string(),
                completed: true,
            },
        ]);
        state
    }

    #[test]
    fn renders_rows_and_pending_count() {
        let state = sample_state();
        let screen = rendered(&state, &LogBuffer::default());
        assert!(screen.contains("Alpha (Pending)"));
        assert!(screen.contains("Bravo (Completed)"));
        assert!(screen.contains("Pending Tasks: 1"));
        assert!(screen.contains("Dark Mode"));
    }

    #[test]
    fn renders_filtered_rows_only() {
        let mut state = sample_state();
        state.set_filter(TaskFilter::Completed);
        let screen = rendered(&state, &LogBuffer::default());
        assert!(!screen.contains("Alpha"));
        assert!(screen.contains("Bravo (Completed)"));
        assert!(screen.contains("Pending Tasks: 0"));
    }

    #[test]
    fn renders_empty_and_loading_lists() {
        let state = State::default();
        assert!(rendered(&state, &LogBuffer::default()).contains("Loading tasks"));

        let mut state = State::default();
        state.set_tasks(vec![]);
        assert!(rendered(&state, &LogBuffer::default()).contains("No tasks added yet."));
    }

    #[test]
    fn renders_edit_buffer_and_log_entries() {
        let mut state = sample_state();
        state.begin_edit(1, "Alpha edited");
        let log_buffer: LogBuffer =
            Arc::new(Mutex::new(VecDeque::from(vec!["ERROR Failed to fetch tasks".to_string()])));
        let screen = rendered(&state, &log_buffer);
        assert!(screen.contains("Alpha edited"));
        assert!(screen.contains("Failed to fetch tasks"));
    }
}
