//! Transient toast notifications.
//!
//! Signal-backed queue provided as context at the root. Each failed fetch
//! pushes exactly one toast; toasts auto-dismiss after a few seconds.

use gloo_timers::future::TimeoutFuture;
use leptos::*;
use wasm_bindgen_futures::spawn_local;

const DISMISS_AFTER_MS: u32 = 5_000;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    Error,
    Success,
    Info,
}

impl ToastKind {
    fn class(&self) -> &'static str {
        match self {
            ToastKind::Error => "toast toast-error",
            ToastKind::Success => "toast toast-success",
            ToastKind::Info => "toast",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Toast {
    pub id: u64,
    pub kind: ToastKind,
    pub message: String,
}

/// Toast queue context. Copyable; signals are shared.
#[derive(Clone, Copy)]
pub struct Toasts {
    items: RwSignal<Vec<Toast>>,
    next_id: RwSignal<u64>,
}

impl Toasts {
    pub fn new() -> Self {
        Self {
            items: create_rw_signal(Vec::new()),
            next_id: create_rw_signal(0),
        }
    }

    pub fn error(&self, message: impl Into<String>) {
        let message = message.into();
        logging::error!("{}", message);
        self.push(ToastKind::Error, message);
    }

    pub fn success(&self, message: impl Into<String>) {
        self.push(ToastKind::Success, message.into());
    }

    pub fn info(&self, message: impl Into<String>) {
        self.push(ToastKind::Info, message.into());
    }

    fn push(&self, kind: ToastKind, message: String) {
        let id = self.next_id.get_untracked();
        self.next_id.set(id + 1);
        self.items.update(|items| items.push(Toast { id, kind, message }));

        let items = self.items;
        spawn_local(async move {
            TimeoutFuture::new(DISMISS_AFTER_MS).await;
            // The root scope outlives every page, but guard anyway.
            let _ = items.try_update(|list| list.retain(|t| t.id != id));
        });
    }
}

impl Default for Toasts {
    fn default() -> Self {
        Self::new()
    }
}

pub fn use_toasts() -> Toasts {
    expect_context::<Toasts>()
}

/// Fixed-position stack rendering active toasts.
#[component]
pub fn ToastStack() -> impl IntoView {
    let toasts = use_toasts();

    view! {
        <div class="toast-stack" role="status" aria-live="polite">
            <For
                each=move || toasts.items.get()
                key=|t| t.id
                children=|toast| {
                    view! {
                        <div class=toast.kind.class()>{toast.message}</div>
                    }
                }
            />
        </div>
    }
}
