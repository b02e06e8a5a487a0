pub mod global_context;
pub mod header;

use crate::shared::toast::ToastHost;
use leptos::prelude::*;

/// Main application shell.
///
/// ```text
/// +------------------------------------------+
/// |  Header (title + page tabs)               |
/// +------------------------------------------+
/// |  Content                                  |
/// +------------------------------------------+
/// ```
///
/// Toasts are rendered above everything by `ToastHost`.
#[component]
pub fn Shell<C>(center: C) -> impl IntoView
where
    C: Fn() -> AnyView + 'static + Send,
{
    view! {
        <div class="app-layout">
            <header::Header />
            <div class="app-body">
                <main class="app-main">
                    {center()}
                </main>
            </div>
            <ToastHost />
        </div>
    }
}
