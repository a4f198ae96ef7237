//! Display filter over the cached task collection.

use crate::todos::Task;

/// Specifying which tasks are displayed.
///
#[derive(Debug, Default, PartialEq, Eq, Clone, Copy)]
pub enum TaskFilter {
    #[default]
    All,
    Completed,
    Pending,
}

impl TaskFilter {
    pub const ALL: [TaskFilter; 3] = [TaskFilter::All, TaskFilter::Completed, TaskFilter::Pending];

    /// Return whether the task passes this filter.
    ///
    pub fn matches(self, task: &Task) -> bool {
        match self {
            TaskFilter::All => true,
            TaskFilter::Completed => task.completed,
            TaskFilter::Pending => !task.completed,
        }
    }

    /// Return the next filter in tab order, wrapping around.
    ///
    pub fn next(self) -> Self {
        match self {
            TaskFilter::All => TaskFilter::Completed,
            TaskFilter::Completed => TaskFilter::Pending,
            TaskFilter::Pending => TaskFilter::All,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            TaskFilter::All => "All",
            TaskFilter::Completed => "Completed",
            TaskFilter::Pending => "Pending",
        }
    }

    /// Position of this filter within `TaskFilter::ALL`.
    ///
    pub fn index(self) -> usize {
        match self {
            TaskFilter::All => 0,
            TaskFilter::Completed => 1,
            TaskFilter::Pending => 2,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn task(completed: bool) -> Task {
        Task {
            id: 1,
            title: "A".to_string(),
            completed,
        }
    }

    #[test]
    fn test_matches() {
        assert!(TaskFilter::All.matches(&task(true)));
        assert!(TaskFilter::All.matches(&task(false)));
        assert!(TaskFilter::Completed.matches(&task(true)));
        assert!(!TaskFilter::Completed.matches(&task(false)));
        assert!(TaskFilter::Pending.matches(&task(false)));
        assert!(!TaskFilter::Pending.matches(&task(true)));
    }

    #[test]
    fn test_next_wraps() {
        assert_eq!(TaskFilter::All.next(), TaskFilter::Completed);
        assert_eq!(TaskFilter::Completed.next(), TaskFilter::Pending);
        assert_eq!(TaskFilter::Pending.next(), TaskFilter::All);
    }

    #[test]
    fn test_index_matches_all_order() {
        for (i, filter) in TaskFilter::ALL.iter().enumerate() {
            assert_eq!(filter.index(), i);
        }
    }
}
