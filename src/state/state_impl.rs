use crate::app::NetworkEventSender;
use crate::events::network::Event as NetworkEvent;
use crate::todos::{Task, TaskId};
use crate::ui::SPINNER_FRAME_COUNT;
use log::*;

use super::error::StateError;
use super::filter::TaskFilter;
use super::form::EditState;
use super::navigation::{Focus, ThemeMode};

/// Houses data representative of application state.
///
/// The task collection is a cached copy of the server's list. It is only
/// ever replaced wholesale by `set_tasks`; everything the user sees is
/// derived from it through the active filter.
pub struct State {
    net_sender: Option<NetworkEventSender>,
    tasks: Vec<Task>,
    loaded: bool,
    filter: TaskFilter,
    draft: String,
    editing: Option<EditState>,
    theme: ThemeMode,
    focus: Focus,
    selected: Option<usize>, // Index into visible tasks
    spinner_index: usize,
}

/// Defines default application state.
///
impl Default for State {
    fn default() -> State {
        State {
            net_sender: None,
            tasks: vec![],
            loaded: false,
            filter: TaskFilter::All,
            draft: String::new(),
            editing: None,
            theme: ThemeMode::Light,
            focus: Focus::Tasks,
            selected: None,
            spinner_index: 0,
        }
    }
}

impl State {
    /// Return new instance with the network sender and initial theme.
    ///
    pub fn new(net_sender: NetworkEventSender, theme: ThemeMode) -> Self {
        State {
            net_sender: Some(net_sender),
            theme,
            ..State::default()
        }
    }

    /// Return the cached task collection in server order.
    ///
    pub fn get_tasks(&self) -> &[Task] {
        &self.tasks
    }

    /// Replace the cached task collection.
    ///
    pub fn set_tasks(&mut self, tasks: Vec<Task>) {
        self.tasks = tasks;
        self.loaded = true;
        self.clamp_selection();
    }

    /// Return whether at least one fetch has succeeded.
    ///
    pub fn is_loaded(&self) -> bool {
        self.loaded
    }

    /// Return the cached tasks that pass the active filter, in server order.
    ///
    pub fn visible_tasks(&self) -> Vec<&Task> {
        self.tasks
            .iter()
            .filter(|task| self.filter.matches(task))
            .collect()
    }

    /// Return the number of incomplete tasks among the visible ones.
    ///
    pub fn pending_count(&self) -> usize {
        self.visible_tasks()
            .iter()
            .filter(|task| !task.completed)
            .count()
    }

    fn find_task(&self, id: TaskId) -> Result<&Task, StateError> {
        self.tasks
            .iter()
            .find(|task| task.id == id)
            .ok_or(StateError::TaskNotFound { id })
    }

    pub fn get_filter(&self) -> TaskFilter {
        self.filter
    }

    pub fn set_filter(&mut self, filter: TaskFilter) {
        debug!("Setting filter to {:?}", filter);
        self.filter = filter;
        self.clamp_selection();
    }

    pub fn next_filter(&mut self) {
        self.set_filter(self.filter.next());
    }

    pub fn get_theme(&self) -> ThemeMode {
        self.theme
    }

    pub fn set_theme(&mut self, theme: ThemeMode) {
        self.theme = theme;
    }

    pub fn toggle_theme(&mut self) {
        self.theme = self.theme.toggled();
    }

    pub fn current_focus(&self) -> Focus {
        self.focus
    }

    pub fn focus_draft(&mut self) {
        self.focus = Focus::Draft;
    }

    pub fn focus_tasks(&mut self) {
        self.focus = Focus::Tasks;
    }

    pub fn get_draft(&self) -> &str {
        &self.draft
    }

    pub fn add_draft_char(&mut self, c: char) {
        self.draft.push(c);
    }

    pub fn remove_draft_char(&mut self) {
        self.draft.pop();
    }

    pub fn clear_draft(&mut self) {
        self.draft.clear();
    }

    /// Request creation of a task from the draft. Returns false without
    /// dispatching anything when the draft is blank.
    ///
    pub fn submit_draft(&mut self) -> bool {
        if self.draft.trim().is_empty() {
            debug!("Ignoring blank task title.");
            return false;
        }
        self.dispatch(NetworkEvent::CreateTask {
            title: self.draft.clone(),
        });
        true
    }

    pub fn get_editing(&self) -> Option<&EditState> {
        self.editing.as_ref()
    }

    pub fn is_editing(&self) -> bool {
        self.editing.is_some()
    }

    /// Enter edit mode for the task with the given title in the buffer.
    ///
    pub fn begin_edit(&mut self, id: TaskId, current_title: &str) {
        debug!("Editing task {}", id);
        self.editing = Some(EditState::new(id, current_title));
    }

    /// Enter edit mode for the selected row.
    ///
    pub fn begin_edit_selected(&mut self) -> Result<(), StateError> {
        let (id, title) = {
            let task = self.selected_task().ok_or(StateError::NothingSelected)?;
            (task.id, task.title.clone())
        };
        self.begin_edit(id, &title);
        Ok(())
    }

    pub fn cancel_edit(&mut self) {
        self.editing = None;
    }

    /// Leave edit mode if it still refers to the given task.
    ///
    pub fn finish_edit(&mut self, id: TaskId) {
        if self.editing.as_ref().map(|edit| edit.id) == Some(id) {
            self.editing = None;
        }
    }

    pub fn add_edit_char(&mut self, c: char) {
        if let Some(edit) = self.editing.as_mut() {
            edit.text.push(c);
        }
    }

    pub fn remove_edit_char(&mut self) {
        if let Some(edit) = self.editing.as_mut() {
            edit.text.pop();
        }
    }

    /// Request replacement of the edited task's title, keeping its cached
    /// completion flag. Returns false without dispatching anything when not
    /// editing or the buffer is blank.
    ///
    pub fn save_edit(&mut self) -> Result<bool, StateError> {
        let (id, title) = match self.editing.as_ref() {
            Some(edit) => match edit.savable_text() {
                Some(text) => (edit.id, text.to_owned()),
                None => {
                    debug!("Ignoring blank title for task {}.", edit.id);
                    return Ok(false);
                }
            },
            None => return Ok(false),
        };
        let completed = self.find_task(id)?.completed;
        self.dispatch(NetworkEvent::UpdateTask {
            id,
            title,
            completed,
        });
        Ok(true)
    }

    /// Request flipping the completion flag of a task.
    ///
    pub fn toggle_completed(&mut self, id: TaskId) -> Result<(), StateError> {
        let completed = !self.find_task(id)?.completed;
        self.dispatch(NetworkEvent::SetCompleted { id, completed });
        Ok(())
    }

    pub fn toggle_selected(&mut self) -> Result<(), StateError> {
        let id = self.selected_task().ok_or(StateError::NothingSelected)?.id;
        self.toggle_completed(id)
    }

    /// Request deletion of a task.
    ///
    pub fn remove(&mut self, id: TaskId) -> Result<(), StateError> {
        self.find_task(id)?;
        self.dispatch(NetworkEvent::DeleteTask { id });
        Ok(())
    }

    pub fn remove_selected(&mut self) -> Result<(), StateError> {
        let id = self.selected_task().ok_or(StateError::NothingSelected)?.id;
        self.remove(id)
    }

    /// Request a full re-fetch of the task collection.
    ///
    pub fn refresh(&mut self) {
        self.dispatch(NetworkEvent::Refresh);
    }

    /// Return the index of the selected row within the visible tasks.
    ///
    pub fn selected_index(&self) -> Option<usize> {
        self.selected
    }

    pub fn selected_task(&self) -> Option<&Task> {
        self.selected
            .and_then(|index| self.visible_tasks().get(index).copied())
    }

    pub fn next_task(&mut self) {
        let len = self.visible_tasks().len();
        if len == 0 {
            self.selected = None;
            return;
        }
        self.selected = Some(match self.selected {
            Some(index) if index + 1 < len => index + 1,
            Some(_) => 0,
            None => 0,
        });
    }

    pub fn previous_task(&mut self) {
        let len = self.visible_tasks().len();
        if len == 0 {
            self.selected = None;
            return;
        }
        self.selected = Some(match self.selected {
            Some(0) | None => len - 1,
            Some(index) => index - 1,
        });
    }

    /// Keep the selection inside the visible list after it changes size.
    ///
    fn clamp_selection(&mut self) {
        let len = self.visible_tasks().len();
        self.selected = match (len, self.selected) {
            (0, _) => None,
            (_, None) => Some(0),
            (len, Some(index)) => Some(index.min(len - 1)),
        };
    }

    pub fn get_spinner_index(&self) -> usize {
        self.spinner_index
    }

    pub fn advance_spinner_index(&mut self) {
        self.spinner_index = (self.spinner_index + 1) % SPINNER_FRAME_COUNT;
    }

    /// Send a network event to the network thread.
    ///
    pub fn dispatch(&self, event: NetworkEvent) {
        if let Some(sender) = &self.net_sender {
            if let Err(e) = sender.send(event) {
                error!("Failed to dispatch network event: {}", e);
            }
        } else {
            warn!("Dropping network event {:?} with no network sender.", event);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::mpsc::{channel, Receiver};

    fn task(id: TaskId, title: &str, completed: bool) -> Task {
        Task {
            id,
            title: title.to_string(),
            completed,
        }
    }

    fn state_with_tasks(tasks: Vec<Task>) -> (State, Receiver<NetworkEvent>) {
        let (tx, rx) = channel();
        let mut state = State::new(tx, ThemeMode::Light);
        state.set_tasks(tasks);
        (state, rx)
    }

    fn sample() -> Vec<Task> {
        vec![task(1, "A", false), task(2, "B", true)]
    }

    #[test]
    fn default_state() {
        let state = State::default();
        assert!(state.get_tasks().is_empty());
        assert!(!state.is_loaded());
        assert_eq!(state.get_filter(), TaskFilter::All);
        assert_eq!(state.current_focus(), Focus::Tasks);
        assert_eq!(state.get_theme(), ThemeMode::Light);
        assert!(state.get_editing().is_none());
        assert_eq!(state.selected_index(), None);
    }

    #[test]
    fn set_tasks_replaces_collection() {
        let (mut state, _rx) = state_with_tasks(sample());
        assert!(state.is_loaded());
        state.set_tasks(vec![task(3, "C", false)]);
        assert_eq!(state.get_tasks(), &[task(3, "C", false)]);
        assert_eq!(state.selected_index(), Some(0));
    }

    #[test]
    fn visible_tasks_under_each_filter() {
        let (mut state, _rx) = state_with_tasks(sample());
        assert_eq!(state.visible_tasks().len(), 2);

        state.set_filter(TaskFilter::Completed);
        assert!(state.visible_tasks().iter().all(|t| t.completed));
        assert_eq!(state.visible_tasks()[0].id, 2);

        state.set_filter(TaskFilter::Pending);
        assert!(state.visible_tasks().iter().all(|t| !t.completed));
        assert_eq!(state.visible_tasks()[0].title, "A");
    }

    #[test]
    fn visible_tasks_keep_server_order() {
        let (state, _rx) = state_with_tasks(vec![
            task(9, "Z", false),
            task(1, "A", false),
            task(5, "M", false),
        ]);
        let ids: Vec<TaskId> = state.visible_tasks().iter().map(|t| t.id).collect();
        assert_eq!(ids, vec![9, 1, 5]);
    }

    #[test]
    fn pending_count_follows_filter() {
        let (mut state, _rx) = state_with_tasks(sample());
        assert_eq!(state.pending_count(), 1);

        state.set_filter(TaskFilter::Pending);
        assert_eq!(state.visible_tasks().len(), 1);
        assert_eq!(state.pending_count(), 1);

        state.set_filter(TaskFilter::Completed);
        assert_eq!(state.pending_count(), 0);
    }

    #[test]
    fn blank_draft_never_dispatches_create() {
        let (mut state, rx) = state_with_tasks(vec![]);
        assert!(!state.submit_draft());
        for c in "   \t".chars() {
            state.add_draft_char(c);
        }
        assert!(!state.submit_draft());
        assert!(rx.try_recv().is_err());
    }

    #[test]
    fn submit_draft_dispatches_create_and_keeps_draft() {
        let (mut state, rx) = state_with_tasks(vec![]);
        for c in "Buy milk".chars() {
            state.add_draft_char(c);
        }
        assert!(state.submit_draft());
        assert!(matches!(
            rx.try_recv(),
            Ok(NetworkEvent::CreateTask { title }) if title == "Buy milk"
        ));
        // The draft is only cleared once the server accepts the task.
        assert_eq!(state.get_draft(), "Buy milk");
    }

    #[test]
    fn remove_draft_char() {
        let mut state = State::default();
        state.add_draft_char('a');
        state.add_draft_char('b');
        state.remove_draft_char();
        assert_eq!(state.get_draft(), "a");
        state.clear_draft();
        assert_eq!(state.get_draft(), "");
    }

    #[test]
    fn toggle_dispatches_negated_completion() {
        let (mut state, rx) = state_with_tasks(sample());
        state.toggle_completed(1).unwrap();
        assert!(matches!(
            rx.try_recv(),
            Ok(NetworkEvent::SetCompleted { id: 1, completed: true })
        ));
        state.toggle_completed(2).unwrap();
        assert!(matches!(
            rx.try_recv(),
            Ok(NetworkEvent::SetCompleted { id: 2, completed: false })
        ));
    }

    #[test]
    fn toggle_unknown_task() {
        let (mut state, rx) = state_with_tasks(sample());
        assert!(matches!(
            state.toggle_completed(99),
            Err(StateError::TaskNotFound { id: 99 })
        ));
        assert!(rx.try_recv().is_err());
    }

    #[test]
    fn begin_and_cancel_edit() {
        let (mut state, _rx) = state_with_tasks(sample());
        state.begin_edit(1, "A");
        assert_eq!(state.get_editing(), Some(&EditState::new(1, "A")));
        state.add_edit_char('!');
        assert_eq!(state.get_editing().unwrap().text, "A!");
        state.remove_edit_char();
        state.remove_edit_char();
        assert_eq!(state.get_editing().unwrap().text, "");
        state.cancel_edit();
        assert!(!state.is_editing());
    }

    #[test]
    fn save_edit_keeps_cached_completion() {
        let (mut state, rx) = state_with_tasks(sample());
        state.begin_edit(2, "B");
        state.add_edit_char('2');
        assert!(state.save_edit().unwrap());
        assert!(matches!(
            rx.try_recv(),
            Ok(NetworkEvent::UpdateTask { id: 2, title, completed: true }) if title == "B2"
        ));
        // Edit state stays until the server confirms.
        assert!(state.is_editing());
    }

    #[test]
    fn save_blank_edit_is_noop() {
        let (mut state, rx) = state_with_tasks(sample());
        state.begin_edit(1, " ");
        assert!(!state.save_edit().unwrap());
        assert!(rx.try_recv().is_err());
        assert!(state.is_editing());
    }

    #[test]
    fn finish_edit_only_clears_matching_task() {
        let (mut state, _rx) = state_with_tasks(sample());
        state.begin_edit(1, "A");
        state.finish_edit(2);
        assert!(state.is_editing());
        state.finish_edit(1);
        assert!(!state.is_editing());
    }

    #[test]
    fn remove_selected_dispatches_delete() {
        let (mut state, rx) = state_with_tasks(sample());
        state.next_task();
        state.remove_selected().unwrap();
        assert!(matches!(rx.try_recv(), Ok(NetworkEvent::DeleteTask { id: 2 })));
    }

    #[test]
    fn selection_wraps_and_clamps() {
        let (mut state, _rx) = state_with_tasks(sample());
        assert_eq!(state.selected_index(), Some(0));
        state.next_task();
        assert_eq!(state.selected_index(), Some(1));
        state.next_task();
        assert_eq!(state.selected_index(), Some(0));
        state.previous_task();
        assert_eq!(state.selected_index(), Some(1));

        state.set_filter(TaskFilter::Pending);
        assert_eq!(state.selected_index(), Some(0));
        assert_eq!(state.selected_task().map(|t| t.id), Some(1));

        state.set_tasks(vec![]);
        assert_eq!(state.selected_index(), None);
        assert!(matches!(
            state.toggle_selected(),
            Err(StateError::NothingSelected)
        ));
    }

    #[test]
    fn theme_transitions() {
        let mut state = State::default();
        state.toggle_theme();
        assert_eq!(state.get_theme(), ThemeMode::Dark);
        state.set_theme(ThemeMode::Light);
        assert_eq!(state.get_theme(), ThemeMode::Light);
    }

    #[test]
    fn focus_transitions() {
        let mut state = State::default();
        state.focus_draft();
        assert_eq!(state.current_focus(), Focus::Draft);
        state.focus_tasks();
        assert_eq!(state.current_focus(), Focus::Tasks);
    }

    #[test]
    fn next_filter_cycles() {
        let mut state = State::default();
        state.next_filter();
        assert_eq!(state.get_filter(), TaskFilter::Completed);
        state.next_filter();
        state.next_filter();
        assert_eq!(state.get_filter(), TaskFilter::All);
    }

    #[test]
    fn refresh_dispatches() {
        let (mut state, rx) = state_with_tasks(vec![]);
        state.refresh();
        assert!(matches!(rx.try_recv(), Ok(NetworkEvent::Refresh)));
    }

    #[test]
    fn advance_spinner_index_wraps() {
        let mut state = State::default();
        for _ in 0..SPINNER_FRAME_COUNT {
            state.advance_spinner_index();
        }
        assert_eq!(state.get_spinner_index(), 0);
    }
}
