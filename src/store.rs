//! Global Application State Store
//!
//! Uses Leptos reactive_stores for field-level reactivity. The transitions
//! live on the plain `AppState` struct so they can be tested without a DOM.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::filter::TaskFilter;
use crate::models::Task;

/// Client-side state for the page session
#[derive(Clone, Debug, Default, Store)]
pub struct AppState {
    /// Cached task collection, in server order; replaced wholesale on load
    pub tasks: Vec<Task>,
    /// Active display filter
    pub filter: TaskFilter,
    /// Single-slot edit state: the task currently loaded into the form
    pub editing: Option<Task>,
}

impl AppState {
    /// Wholesale replacement after a successful load. Any in-progress edit
    /// is discarded; the fresh collection is authoritative.
    pub fn replace_tasks(&mut self, tasks: Vec<Task>) {
        self.tasks = tasks;
        self.editing = None;
    }

    /// Entering edit mode for another task discards the previous edit.
    pub fn begin_edit(&mut self, task: Task) {
        self.editing = Some(task);
    }

    pub fn clear_edit(&mut self) {
        self.editing = None;
    }
}

/// Type alias for the store
pub type AppStore = Store<AppState>;

/// Get the app store from context
pub fn use_app_store() -> AppStore {
    expect_context::<AppStore>()
}

// ========================
// Store Helper Functions
// ========================

pub fn store_replace_tasks(store: &AppStore, tasks: Vec<Task>) {
    store.write().replace_tasks(tasks);
}

pub fn store_begin_edit(store: &AppStore, task: Task) {
    store.write().begin_edit(task);
}

pub fn store_clear_edit(store: &AppStore) {
    store.write().clear_edit();
}

pub fn store_set_filter(store: &AppStore, filter: TaskFilter) {
    *store.filter().write() = filter;
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_task(id: u32, title: &str) -> Task {
        Task {
            id,
            title: title.to_string(),
            description: None,
            priority: Default::default(),
            due_date: None,
            completed: false,
            created_at: String::new(),
            updated_at: String::new(),
        }
    }

    #[test]
    fn test_edit_mode_is_single_slot() {
        let mut state = AppState::default();
        state.begin_edit(make_task(1, "A"));
        state.begin_edit(make_task(2, "B"));
        // B replaced A; A's in-progress edit is gone
        assert_eq!(state.editing.as_ref().map(|t| t.id), Some(2));
        assert_eq!(state.editing.as_ref().map(|t| t.title.as_str()), Some("B"));
    }

    #[test]
    fn test_fresh_load_replaces_tasks_and_clears_edit() {
        let mut state = AppState::default();
        state.replace_tasks(vec![make_task(1, "A")]);
        state.begin_edit(make_task(1, "A"));

        state.replace_tasks(vec![make_task(2, "B"), make_task(3, "C")]);
        assert_eq!(state.tasks.len(), 2);
        assert_eq!(state.tasks[0].id, 2);
        assert_eq!(state.editing, None);
    }

    #[test]
    fn test_clear_edit() {
        let mut state = AppState::default();
        state.begin_edit(make_task(1, "A"));
        state.clear_edit();
        assert_eq!(state.editing, None);
        // tasks untouched by edit-state changes
        assert!(state.tasks.is_empty());
    }

    #[test]
    fn test_default_filter_is_all() {
        assert_eq!(AppState::default().filter, TaskFilter::All);
    }
}
