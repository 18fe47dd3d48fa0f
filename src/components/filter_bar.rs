//! Filter Bar Component
//!
//! Filter buttons plus the visible-task counter.

use leptos::prelude::*;

use crate::filter::{project, TaskFilter};
use crate::store::{store_set_filter, use_app_store, AppStateStoreFields};

#[component]
pub fn FilterBar() -> impl IntoView {
    let store = use_app_store();

    let count_label = move || project(&store.tasks().get(), store.filter().get()).count_label;

    view! {
        <div class="filter-bar">
            <div class="filter-buttons">
                {TaskFilter::ALL.iter().map(|&filter| {
                    let is_active = move || store.filter().get() == filter;
                    let btn_class = move || {
                        if is_active() { "filter-btn active" } else { "filter-btn" }
                    };
                    view! {
                        <button
                            class=btn_class
                            on:click=move |_| store_set_filter(&store, filter)
                        >
                            {filter.label()}
                        </button>
                    }
                }).collect_view()}
            </div>
            <span class="task-count">{count_label}</span>
        </div>
    }
}
