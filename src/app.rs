//! Task Manager App
//!
//! Root component: owns the reload trigger and the loading/error state,
//! provides the store and context, and composes the page.

use leptos::prelude::*;
use leptos::task::spawn_local;
use reactive_stores::Store;

use crate::api;
use crate::components::{FilterBar, Notifications, TaskForm, TaskList};
use crate::context::{AppContext, Notice};
use crate::store::{store_replace_tasks, AppState};

#[component]
pub fn App() -> impl IntoView {
    let store = Store::new(AppState::default());
    provide_context(store);

    let (loading, set_loading) = signal(false);
    let (load_error, set_load_error) = signal::<Option<String>>(None);
    let (reload_trigger, set_reload_trigger) = signal(0u32);
    let (notices, set_notices) = signal(Vec::<Notice>::new());
    let (notice_seq, set_notice_seq) = signal(0u32);

    let ctx = AppContext::new(
        (reload_trigger, set_reload_trigger),
        (notices, set_notices),
        (notice_seq, set_notice_seq),
    );
    provide_context(ctx);

    // Load the collection on mount and after every mutation (trigger bump).
    // The loading indicator is cleared on both exit paths; a failed load
    // leaves the cached tasks untouched.
    Effect::new(move |_| {
        let _ = reload_trigger.get();
        set_loading.set(true);
        set_load_error.set(None);
        spawn_local(async move {
            match api::list_tasks().await {
                Ok(tasks) => {
                    web_sys::console::log_1(
                        &format!("[APP] Loaded {} tasks", tasks.len()).into(),
                    );
                    store_replace_tasks(&store, tasks);
                }
                Err(err) => set_load_error.set(Some(err.to_string())),
            }
            set_loading.set(false);
        });
    });

    view! {
        <div class="app-layout">
            <header class="app-header">
                <h1>"Task Manager"</h1>
            </header>

            <TaskForm />
            <FilterBar />

            <Show when=move || loading.get()>
                <div class="loading-state">"Loading tasks..."</div>
            </Show>
            {move || load_error.get().map(|message| view! {
                <div class="error-state">{message}</div>
            })}

            <TaskList />
            <Notifications />
        </div>
    }
}
