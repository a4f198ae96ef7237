//! In-progress edit of a single task row.

use crate::todos::TaskId;

/// Edit buffer for the row currently being edited.
///
#[derive(Debug, PartialEq, Eq, Clone)]
pub struct EditState {
    pub id: TaskId,
    pub text: String,
}

impl EditState {
    /// Start editing a task, seeding the buffer with its current title.
    ///
    pub fn new(id: TaskId, current_title: &str) -> Self {
        EditState {
            id,
            text: current_title.to_owned(),
        }
    }

    /// Return the buffer if it holds something worth saving.
    ///
    pub fn savable_text(&self) -> Option<&str> {
        if self.text.trim().is_empty() {
            None
        } else {
            Some(&self.text)
        }
    }
}
