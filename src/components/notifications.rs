//! Notifications Component
//!
//! Transient stacked notices. Each notice dismisses itself after five
//! seconds and can be closed earlier by the user.

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::context::AppContext;

const NOTICE_LIFETIME_MS: u32 = 5_000;

#[component]
pub fn Notifications() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");

    view! {
        <div class="notifications">
            <For
                each=move || ctx.notices.get()
                key=|notice| notice.id
                children=move |notice| {
                    let id = notice.id;
                    spawn_local(async move {
                        TimeoutFuture::new(NOTICE_LIFETIME_MS).await;
                        // Already-dismissed ids are gone from the list;
                        // retain makes this a no-op then.
                        ctx.dismiss(id);
                    });

                    view! {
                        <div class=format!("notice notice-{}", notice.kind.css_class())>
                            <span class="notice-message">{notice.message.clone()}</span>
                            <button
                                class="notice-close"
                                on:click=move |_| ctx.dismiss(id)
                            >
                                "×"
                            </button>
                        </div>
                    }
                }
            />
        </div>
    }
}
