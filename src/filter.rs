//! Filter Projection
//!
//! The pure view derivation: which tasks are visible for the active filter,
//! and the count label that goes with them.

use std::str::FromStr;

use crate::models::Task;

/// Named predicate partitioning the task collection for display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TaskFilter {
    #[default]
    All,
    Completed,
    Pending,
}

impl TaskFilter {
    pub const ALL: [TaskFilter; 3] = [TaskFilter::All, TaskFilter::Completed, TaskFilter::Pending];

    pub fn label(&self) -> &'static str {
        match self {
            TaskFilter::All => "All",
            TaskFilter::Completed => "Completed",
            TaskFilter::Pending => "Pending",
        }
    }

    pub fn matches(&self, task: &Task) -> bool {
        match self {
            TaskFilter::All => true,
            TaskFilter::Completed => task.completed,
            TaskFilter::Pending => !task.completed,
        }
    }
}

impl FromStr for TaskFilter {
    type Err = ();

    /// Anything other than the three known names is invalid; callers leave
    /// the current filter unchanged in that case.
    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        match raw {
            "all" => Ok(TaskFilter::All),
            "completed" => Ok(TaskFilter::Completed),
            "pending" => Ok(TaskFilter::Pending),
            _ => Err(()),
        }
    }
}

/// View-model for the task list: everything the list and counter render.
#[derive(Debug, Clone, PartialEq)]
pub struct TaskListView {
    pub tasks: Vec<Task>,
    pub count_label: String,
    pub is_empty: bool,
}

/// Pure projection `(tasks, filter) -> view`. Preserves the collection's
/// original order.
pub fn project(tasks: &[Task], filter: TaskFilter) -> TaskListView {
    let tasks: Vec<Task> = tasks
        .iter()
        .filter(|task| filter.matches(task))
        .cloned()
        .collect();
    let count = tasks.len();
    let count_label = if count == 1 {
        String::from("1 task")
    } else {
        format!("{} tasks", count)
    };
    TaskListView {
        is_empty: tasks.is_empty(),
        count_label,
        tasks,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_task(id: u32, completed: bool) -> Task {
        Task {
            id,
            title: format!("Task {}", id),
            description: None,
            priority: Default::default(),
            due_date: None,
            completed,
            created_at: String::new(),
            updated_at: String::new(),
        }
    }

    #[test]
    fn test_all_filter_is_identity() {
        let tasks = vec![make_task(1, false), make_task(2, true), make_task(3, false)];
        let view = project(&tasks, TaskFilter::All);
        assert_eq!(view.tasks, tasks);
        assert_eq!(view.count_label, "3 tasks");
    }

    #[test]
    fn test_filters_match_only_their_predicate_and_keep_order() {
        let tasks = vec![
            make_task(1, false),
            make_task(2, true),
            make_task(3, false),
            make_task(4, true),
        ];

        let completed = project(&tasks, TaskFilter::Completed);
        assert_eq!(
            completed.tasks.iter().map(|t| t.id).collect::<Vec<_>>(),
            vec![2, 4]
        );
        assert!(completed.tasks.iter().all(|t| t.completed));

        let pending = project(&tasks, TaskFilter::Pending);
        assert_eq!(
            pending.tasks.iter().map(|t| t.id).collect::<Vec<_>>(),
            vec![1, 3]
        );
        assert!(pending.tasks.iter().all(|t| !t.completed));
    }

    #[test]
    fn test_projection_is_idempotent() {
        let tasks = vec![make_task(1, false), make_task(2, true)];
        let first = project(&tasks, TaskFilter::Pending);
        let second = project(&tasks, TaskFilter::Pending);
        assert_eq!(first, second);
    }

    #[test]
    fn test_pending_scenario_count_label() {
        // tasks = [{id:1, completed:false}, {id:2, completed:true}], filter = pending
        let tasks = vec![make_task(1, false), make_task(2, true)];
        let view = project(&tasks, TaskFilter::Pending);
        assert_eq!(view.tasks.len(), 1);
        assert_eq!(view.tasks[0].id, 1);
        assert_eq!(view.count_label, "1 task");
        assert!(!view.is_empty);
    }

    #[test]
    fn test_empty_projection_sets_empty_flag() {
        let tasks = vec![make_task(1, false)];
        let view = project(&tasks, TaskFilter::Completed);
        assert!(view.is_empty);
        assert_eq!(view.count_label, "0 tasks");
    }

    #[test]
    fn test_filter_parsing_rejects_unknown_names() {
        assert_eq!("all".parse::<TaskFilter>(), Ok(TaskFilter::All));
        assert_eq!("completed".parse::<TaskFilter>(), Ok(TaskFilter::Completed));
        assert_eq!("pending".parse::<TaskFilter>(), Ok(TaskFilter::Pending));
        assert!("archived".parse::<TaskFilter>().is_err());
        assert!("".parse::<TaskFilter>().is_err());
    }
}
