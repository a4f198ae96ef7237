//! State management-specific error types.

use crate::todos::TaskId;

/// Errors that can occur during state operations.
#[derive(Debug, thiserror::Error)]
pub enum StateError {
    /// Task not found in the cached collection
    #[error("Task not found: {id}")]
    TaskNotFound { id: TaskId },

    /// An action needed a selected row but none is selected
    #[error("No task selected")]
    NothingSelected,
}
