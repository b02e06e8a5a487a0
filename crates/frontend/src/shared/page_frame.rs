//! Root element of every page: `id`, category data attributes and the
//! `page page--{category}` classes.

use super::page_standard::*;
use leptos::prelude::*;

/// `page page--{category}` followed by `extra`; unknown categories get `page`
pub fn page_class(category: &str, extra: &str) -> String {
    let mut class = String::from("page");
    if is_known_category(category) {
        class.push_str(" page--");
        class.push_str(category);
    }
    if !extra.is_empty() {
        class.push(' ');
        class.push_str(extra);
    }
    class
}

/// Entity half of a `{entity}--{category}` page id
pub fn page_entity(page_id: &str) -> &str {
    page_id.split_once("--").map(|(entity, _)| entity).unwrap_or(page_id)
}

#[component]
pub fn PageFrame(
    page_id: &'static str,
    /// One of the PAGE_CAT_* constants
    category: &'static str,
    #[prop(optional)]
    class: &'static str,
    children: Children,
) -> impl IntoView {
    if !is_valid_page_id(page_id) || !is_known_category(category) {
        log::warn!("non-standard page metadata: id='{}' category='{}'", page_id, category);
    }

    view! {
        <div
            id=page_id
            class=page_class(category, class)
            data-page-category=category
            data-page-entity=page_entity(page_id)
        >
            {children()}
        </div>
    }
}
