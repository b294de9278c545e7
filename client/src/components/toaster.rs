//! Toast viewport.
//!
//! Renders the `ToastQueue` from context. In the browser each toast schedules
//! its own dismissal; on the server the queue is always empty.

use leptos::prelude::*;

use crate::state::toast::{QueuedToast, ToastKind, ToastQueue};

#[component]
pub fn Toaster() -> impl IntoView {
    let queue = expect_context::<RwSignal<ToastQueue>>();

    view! {
        <div class="toaster" role="status" aria-live="polite">
            <For
                each=move || queue.get().items().to_vec()
                key=|item| item.id
                children=move |item: QueuedToast| view! { <ToastItem item queue/> }
            />
        </div>
    }
}

#[component]
fn ToastItem(item: QueuedToast, queue: RwSignal<ToastQueue>) -> impl IntoView {
    let id = item.id;

    #[cfg(feature = "hydrate")]
    {
        gloo_timers::callback::Timeout::new(crate::state::toast::TOAST_DURATION_MS, move || {
            queue.try_update(|q| q.dismiss(id));
        })
        .forget();
    }

    let (modifier, glyph) = match item.toast.kind {
        ToastKind::Success => ("toast--success", "✓"),
        ToastKind::Error => ("toast--error", "✕"),
    };

    view! {
        <div class=format!("toast {modifier}")>
            <span class="toast__icon" aria-hidden="true">{glyph}</span>
            <span class="toast__text">{item.toast.text}</span>
            <button
                class="toast__close"
                type="button"
                aria-label="Dismiss"
                on:click=move |_| queue.update(|q| q.dismiss(id))
            >
                "×"
            </button>
        </div>
    }
}
