//! Task Card Component
//!
//! One rendered task: title, badges, due-date state, and the per-task
//! actions (toggle completion, edit, delete-with-confirm).

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api;
use crate::components::DeleteConfirmButton;
use crate::context::{AppContext, NoticeKind};
use crate::due;
use crate::models::Task;
use crate::store::{store_begin_edit, use_app_store};

#[component]
pub fn TaskCard(task: Task) -> impl IntoView {
    let store = use_app_store();
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let id = task.id;

    // No optimistic update: the authoritative state comes from the reload.
    let on_toggle = move |_| {
        spawn_local(async move {
            match api::toggle_task(id).await {
                Ok(message) => {
                    ctx.notify(message, NoticeKind::Success);
                    ctx.reload();
                }
                Err(err) => ctx.notify(err.to_string(), NoticeKind::Error),
            }
        });
    };

    let edit_source = task.clone();
    let on_edit = move |_| store_begin_edit(&store, edit_source.clone());

    let on_delete = Callback::new(move |_: ()| {
        spawn_local(async move {
            match api::delete_task(id).await {
                Ok(message) => {
                    ctx.notify(message, NoticeKind::Success);
                    ctx.reload();
                }
                Err(err) => ctx.notify(err.to_string(), NoticeKind::Error),
            }
        });
    });

    let card_class = {
        let mut c = format!("task-card priority-{}", task.priority.as_str());
        if task.completed {
            c.push_str(" task-completed");
        }
        c
    };

    let due_badge = task.due_date.as_ref().map(|raw| {
        let class = due::due_status(raw)
            .map(|status| status.css_class())
            .unwrap_or("due-date");
        view! { <span class=class>{format!("Due: {}", due::format_due(raw))}</span> }
    });

    let status = if task.completed {
        ("status-completed", "Completed")
    } else {
        ("status-pending", "Pending")
    };

    let created = due::format_day(&task.created_at);
    let updated = due::format_day(&task.updated_at);
    let updated_line = (updated != created).then(|| format!(" | Updated: {}", updated));

    let toggle_title = if task.completed {
        "Mark as incomplete"
    } else {
        "Mark as complete"
    };
    let toggle_glyph = if task.completed { "↺" } else { "✓" };

    view! {
        <div class=card_class>
            <div class="task-card-header">
                <h3 class="task-title">{task.title.clone()}</h3>
                <div class="task-actions">
                    <button class="btn-icon toggle-btn" title=toggle_title on:click=on_toggle>
                        {toggle_glyph}
                    </button>
                    <button class="btn-icon edit-btn" title="Edit task" on:click=on_edit>
                        "✎"
                    </button>
                    <DeleteConfirmButton button_class="btn-icon delete-btn" on_confirm=on_delete />
                </div>
            </div>

            {task.description.clone().filter(|d| !d.is_empty()).map(|text| view! {
                <p class="task-description">{text}</p>
            })}

            <div class="task-badges">
                <span class=format!("badge priority-{}-badge", task.priority.as_str())>
                    {task.priority.label()}
                </span>
                <span class=format!("badge {}", status.0)>{status.1}</span>
                {due_badge}
            </div>

            <div class="task-meta">
                {format!("Created: {}", created)}
                {updated_line}
            </div>
        </div>
    }
}
