//! Application Context
//!
//! Shared signals provided via the Leptos Context API: the reload trigger
//! and the transient notification queue.

use leptos::prelude::*;

/// Notice severity; also selects the notice's styling.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    // part of the notify contract; current flows only emit success/error
    #[allow(dead_code)]
    Info,
    Success,
    Error,
}

impl NoticeKind {
    pub fn css_class(&self) -> &'static str {
        match self {
            NoticeKind::Info => "info",
            NoticeKind::Success => "success",
            NoticeKind::Error => "error",
        }
    }
}

/// One transient, independently dismissible notice.
#[derive(Debug, Clone, PartialEq)]
pub struct Notice {
    pub id: u32,
    pub message: String,
    pub kind: NoticeKind,
}

/// App-wide signals provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    /// Trigger to reload tasks from the server - read
    pub reload_trigger: ReadSignal<u32>,
    /// Trigger to reload tasks from the server - write
    set_reload_trigger: WriteSignal<u32>,
    /// Currently visible notices - read
    pub notices: ReadSignal<Vec<Notice>>,
    /// Currently visible notices - write
    set_notices: WriteSignal<Vec<Notice>>,
    /// Monotonic id source so dismiss timers never hit a reused id
    notice_seq: ReadSignal<u32>,
    set_notice_seq: WriteSignal<u32>,
}

impl AppContext {
    pub fn new(
        reload_trigger: (ReadSignal<u32>, WriteSignal<u32>),
        notices: (ReadSignal<Vec<Notice>>, WriteSignal<Vec<Notice>>),
        notice_seq: (ReadSignal<u32>, WriteSignal<u32>),
    ) -> Self {
        Self {
            reload_trigger: reload_trigger.0,
            set_reload_trigger: reload_trigger.1,
            notices: notices.0,
            set_notices: notices.1,
            notice_seq: notice_seq.0,
            set_notice_seq: notice_seq.1,
        }
    }

    /// Trigger a full reload of the task collection
    pub fn reload(&self) {
        self.set_reload_trigger.update(|v| *v += 1);
    }

    /// Show a transient notice; it stacks with any already visible.
    pub fn notify(&self, message: impl Into<String>, kind: NoticeKind) {
        let id = self.notice_seq.get_untracked();
        self.set_notice_seq.update(|v| *v += 1);
        self.set_notices.update(|list| {
            list.push(Notice {
                id,
                message: message.into(),
                kind,
            })
        });
    }

    /// Remove a notice, whether dismissed by the user or by its timer
    pub fn dismiss(&self, id: u32) {
        self.set_notices.update(|list| list.retain(|n| n.id != id));
    }
}
