//! Transient toast notifications.
//!
//! DESIGN
//! ======
//! Flows that need to tell the visitor something push a `Toast` through the
//! `NotificationSink` seam instead of touching the DOM. The `Toaster`
//! component renders whatever the queue holds and schedules auto-dismiss in
//! the browser.

#[cfg(test)]
#[path = "toast_test.rs"]
mod toast_test;

use leptos::prelude::*;

/// Maximum number of toasts visible at once. Oldest are dropped first.
pub const MAX_VISIBLE_TOASTS: usize = 3;

/// How long a toast stays on screen before auto-dismiss.
pub const TOAST_DURATION_MS: u32 = 4_000;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Toast {
    pub kind: ToastKind,
    pub text: String,
}

impl Toast {
    #[must_use]
    pub fn success(text: impl Into<String>) -> Self {
        Self { kind: ToastKind::Success, text: text.into() }
    }

    #[must_use]
    pub fn error(text: impl Into<String>) -> Self {
        Self { kind: ToastKind::Error, text: text.into() }
    }
}

/// A toast that has been queued and assigned an id.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct QueuedToast {
    pub id: u64,
    pub toast: Toast,
}

/// Visible toasts, newest last.
#[derive(Clone, Debug, Default)]
pub struct ToastQueue {
    next_id: u64,
    items: Vec<QueuedToast>,
}

impl ToastQueue {
    /// Queue a toast and return its id.
    pub fn push(&mut self, toast: Toast) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        self.items.push(QueuedToast { id, toast });
        if self.items.len() > MAX_VISIBLE_TOASTS {
            let overflow = self.items.len() - MAX_VISIBLE_TOASTS;
            self.items.drain(..overflow);
        }
        id
    }

    /// Remove a toast by id. Unknown ids are ignored.
    pub fn dismiss(&mut self, id: u64) {
        self.items.retain(|item| item.id != id);
    }

    #[must_use]
    pub fn items(&self) -> &[QueuedToast] {
        &self.items
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

/// Receiver for user-facing notifications.
pub trait NotificationSink {
    fn notify(&self, toast: Toast);
}

impl NotificationSink for RwSignal<ToastQueue> {
    fn notify(&self, toast: Toast) {
        self.update(|queue| {
            queue.push(toast);
        });
    }
}
