//! Task Form Component
//!
//! One form for both creation and edit mode. Edit mode binds the form to an
//! existing task; the submit button switches to an update affordance. Local
//! validation flags the title field before any request is made.

use leptos::prelude::*;
use leptos::task::spawn_local;
use wasm_bindgen::JsCast;

use crate::api;
use crate::context::{AppContext, NoticeKind};
use crate::draft::TaskDraft;
use crate::due;
use crate::models::Priority;
use crate::store::{store_clear_edit, use_app_store, AppStateStoreFields};

#[component]
pub fn TaskForm() -> impl IntoView {
    let store = use_app_store();
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");

    let (title, set_title) = signal(String::new());
    let (description, set_description) = signal(String::new());
    let (priority, set_priority) = signal(String::from("medium"));
    let (due_date, set_due_date) = signal(String::new());
    let (title_error, set_title_error) = signal::<Option<String>>(None);
    let (submitting, set_submitting) = signal(false);

    // Track which task the form is bound to, so reloads that keep the same
    // edit target (or none) don't wipe in-progress typing.
    let (last_edit_id, set_last_edit_id) = signal::<Option<u32>>(None);

    // Bind the form to the edit slot: populate on enter, reset on clear.
    Effect::new(move |_| {
        let editing = store.editing().get();
        let current = editing.as_ref().map(|t| t.id);
        if last_edit_id.get_untracked() == current {
            return;
        }
        set_last_edit_id.set(current);
        set_title_error.set(None);

        match editing {
            Some(task) => {
                set_title.set(task.title.clone());
                set_description.set(task.description.clone().unwrap_or_default());
                set_priority.set(task.priority.as_str().to_string());
                set_due_date.set(
                    task.due_date
                        .as_deref()
                        .and_then(due::to_datetime_local)
                        .unwrap_or_default(),
                );

                if let Some(document) = web_sys::window().and_then(|w| w.document()) {
                    if let Some(form) = document.get_element_by_id("task-form") {
                        form.scroll_into_view();
                    }
                    if let Some(input) = document.get_element_by_id("task-title") {
                        if let Some(input) = input.dyn_ref::<web_sys::HtmlElement>() {
                            let _ = input.focus();
                        }
                    }
                }
            }
            None => {
                set_title.set(String::new());
                set_description.set(String::new());
                set_priority.set(String::from("medium"));
                set_due_date.set(String::new());
            }
        }
    });

    let editing_active = move || store.editing().get().is_some();

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();

        let draft = TaskDraft::from_form(
            &title.get(),
            &description.get(),
            &priority.get(),
            &due_date.get(),
        );
        if let Err(err) = draft.validate() {
            set_title_error.set(Some(err.to_string()));
            if let Some(document) = web_sys::window().and_then(|w| w.document()) {
                if let Some(input) = document.get_element_by_id("task-title") {
                    if let Some(input) = input.dyn_ref::<web_sys::HtmlElement>() {
                        let _ = input.focus();
                    }
                }
            }
            return;
        }
        set_title_error.set(None);
        set_submitting.set(true);

        let editing_id = store.editing().get().map(|t| t.id);
        spawn_local(async move {
            let result = match editing_id {
                Some(id) => api::update_task(id, &draft).await,
                None => api::create_task(&draft).await,
            };
            match result {
                Ok(message) => {
                    ctx.notify(message, NoticeKind::Success);
                    store_clear_edit(&store);
                    // Creation mode leaves the edit slot untouched, so reset
                    // the fields here as well.
                    set_title.set(String::new());
                    set_description.set(String::new());
                    set_priority.set(String::from("medium"));
                    set_due_date.set(String::new());
                    ctx.reload();
                }
                // Leave the form populated for retry
                Err(err) => ctx.notify(err.to_string(), NoticeKind::Error),
            }
            set_submitting.set(false);
        });
    };

    let submit_label = move || match (editing_active(), submitting.get()) {
        (true, true) => "Updating...",
        (true, false) => "Update Task",
        (false, true) => "Adding...",
        (false, false) => "Add Task",
    };
    let submit_class = move || {
        let mut c = String::from(if editing_active() {
            "btn btn-warning"
        } else {
            "btn btn-primary"
        });
        if submitting.get() {
            c.push_str(" btn-loading");
        }
        c
    };
    let title_class = move || {
        if title_error.get().is_some() {
            "form-input is-invalid"
        } else {
            "form-input"
        }
    };

    view! {
        <form id="task-form" class="task-form" on:submit=on_submit>
            <input
                id="task-title"
                class=title_class
                type="text"
                placeholder="Task title"
                prop:value=move || title.get()
                on:input=move |ev| {
                    set_title.set(event_target_value(&ev));
                    set_title_error.set(None);
                }
            />
            {move || title_error.get().map(|message| view! {
                <div class="invalid-feedback">{message}</div>
            })}

            <textarea
                class="form-input"
                placeholder="Description (optional)"
                prop:value=move || description.get()
                on:input=move |ev| set_description.set(event_target_value(&ev))
            ></textarea>

            <div class="form-row">
                <select
                    class="form-input"
                    prop:value=move || priority.get()
                    on:change=move |ev| set_priority.set(event_target_value(&ev))
                >
                    {Priority::ALL.iter().map(|p| view! {
                        <option value=p.as_str()>{p.label()}</option>
                    }).collect_view()}
                </select>

                <input
                    class="form-input"
                    type="datetime-local"
                    prop:value=move || due_date.get()
                    on:input=move |ev| set_due_date.set(event_target_value(&ev))
                />
            </div>

            <div class="form-actions">
                <button
                    type="submit"
                    class=submit_class
                    prop:disabled=move || submitting.get()
                >
                    {submit_label}
                </button>
                <Show when=editing_active>
                    <button
                        type="button"
                        class="btn btn-secondary"
                        on:click=move |_| store_clear_edit(&store)
                    >
                        "Cancel"
                    </button>
                </Show>
            </div>
        </form>
    }
}
