//! Task List Component
//!
//! Renders the filtered projection of the task collection, with an explicit
//! empty state when nothing matches the active filter.

use leptos::prelude::*;

use crate::components::TaskCard;
use crate::filter::project;
use crate::store::{use_app_store, AppStateStoreFields};

#[component]
pub fn TaskList() -> impl IntoView {
    let store = use_app_store();

    let view_model = Memo::new(move |_| project(&store.tasks().get(), store.filter().get()));

    view! {
        <div class="task-list">
            <Show when=move || view_model.get().is_empty>
                <div class="empty-state">"No tasks found"</div>
            </Show>

            <For
                each=move || view_model.get().tasks
                key=|task| {
                    // Key on every mutable field so server-side edits
                    // re-render the card
                    (
                        task.id,
                        task.title.clone(),
                        task.description.clone(),
                        task.priority,
                        task.due_date.clone(),
                        task.completed,
                        task.updated_at.clone(),
                    )
                }
                children=move |task| view! { <TaskCard task=task /> }
            />
        </div>
    }
}
