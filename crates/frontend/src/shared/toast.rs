//! Transient notifications ("toasts") shown after saves and failures.

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;

/// Milliseconds a toast stays on screen
pub const TOAST_DURATION_MS: u32 = 3_000;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
}

impl ToastKind {
    fn class(&self) -> &'static str {
        match self {
            ToastKind::Success => "toast toast--success",
            ToastKind::Error => "toast toast--error",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Toast {
    pub id: u64,
    pub kind: ToastKind,
    pub message: String,
}

/// Queue of visible toasts, provided once by `App`
#[derive(Clone, Copy)]
pub struct ToastService {
    toasts: RwSignal<Vec<Toast>>,
    next_id: RwSignal<u64>,
}

impl ToastService {
    pub fn new() -> Self {
        Self {
            toasts: RwSignal::new(Vec::new()),
            next_id: RwSignal::new(1),
        }
    }

    pub fn success(&self, message: impl Into<String>) -> u64 {
        self.push(ToastKind::Success, message.into())
    }

    pub fn error(&self, message: impl Into<String>) -> u64 {
        self.push(ToastKind::Error, message.into())
    }

    /// Show a toast and schedule its removal
    fn push(&self, kind: ToastKind, message: String) -> u64 {
        let id = self.next_id.get_untracked();
        self.next_id.set(id + 1);

        log::debug!("toast #{} ({:?}): {}", id, kind, message);
        self.toasts.update(|t| t.push(Toast { id, kind, message }));

        let svc = *self;
        spawn_local(async move {
            TimeoutFuture::new(TOAST_DURATION_MS).await;
            svc.dismiss(id);
        });

        id
    }

    pub fn dismiss(&self, id: u64) {
        self.toasts.update(|t| t.retain(|toast| toast.id != id));
    }
}

impl Default for ToastService {
    fn default() -> Self {
        Self::new()
    }
}

/// Renders the toast queue in the top-right corner
#[component]
pub fn ToastHost() -> impl IntoView {
    let Some(svc) = use_context::<ToastService>() else {
        log::error!("ToastService not provided in context");
        return view! { <></> }.into_any();
    };

    view! {
        <div class="toast-host">
            <For
                each=move || svc.toasts.get()
                key=|toast| toast.id
                children=move |toast| {
                    let id = toast.id;
                    view! {
                        <div class=toast.kind.class() on:click=move |_| svc.dismiss(id)>
                            {toast.message}
                        </div>
                    }
                }
            />
        </div>
    }
    .into_any()
}
