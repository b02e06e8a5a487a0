use crate::layout::global_context::{AppGlobalContext, Page};
use crate::system::auth::storage;
use leptos::prelude::*;

pub const APP_TITLE: &str = "线索数据包管理系统";

#[component]
pub fn Header() -> impl IntoView {
    let ctx = leptos::context::use_context::<AppGlobalContext>()
        .expect("AppGlobalContext context not found");

    // set/clear notify through storage; expiry is noticed on the next navigation
    let authenticated = move || {
        ctx.active.track();
        ctx.data_version.track();
        storage::is_authenticated()
    };

    view! {
        <header data-zone="header" class="header">
            <div class="header__content">
                <span class="header__title">{APP_TITLE}</span>
                <nav class="header__nav">
                    {Page::nav_items()
                        .into_iter()
                        .map(|page| {
                            view! {
                                <button
                                    class="header__tab"
                                    class:header__tab--active=move || ctx.active.get().nav_root() == page
                                    on:click=move |_| ctx.navigate(page)
                                >
                                    {page.title()}
                                </button>
                            }
                        })
                        .collect_view()}
                </nav>
            </div>
            <div class="header__actions">
                {move || if authenticated() {
                    view! { <span class="badge badge--success">{"已认证"}</span> }.into_any()
                } else {
                    view! { <span class="badge badge--neutral">{"未认证"}</span> }.into_any()
                }}
            </div>
        </header>
    }
}
