use fake::Dummy;
use serde::{Deserialize, Serialize};

/// Server-assigned task identifier.
///
pub type TaskId = u64;

/// Defines task data structure.
///
#[derive(Clone, Debug, Dummy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    pub id: TaskId,
    pub title: String,
    pub completed: bool,
}

/// Request body for creating or replacing a task.
///
#[derive(Debug, Serialize)]
pub(crate) struct TaskFields<'a> {
    pub title: &'a str,
    pub completed: bool,
}

/// Request body for a completion-only patch.
///
#[derive(Debug, Serialize)]
pub(crate) struct TaskCompletion {
    pub completed: bool,
}
