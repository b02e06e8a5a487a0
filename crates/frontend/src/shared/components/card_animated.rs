//! Card that slides in when mounted; cards in a row enter one after another.

use leptos::prelude::*;
use thaw::Card;

/// Delay between neighbouring cards of a row
pub const STAGGER_MS: u32 = 80;

/// Inline style for the `index`-th card of a row, `extra` appended as is
pub fn entrance_style(index: usize, extra: &str) -> String {
    let delay = STAGGER_MS.saturating_mul(index as u32);
    let animation = format!("animation: card-appear 0.28s ease-out {delay}ms both;");
    match extra.trim() {
        "" => animation,
        extra => format!("{animation} {extra}"),
    }
}

#[component]
pub fn CardAnimated(
    /// Position in the row, 0 enters immediately
    #[prop(optional)]
    index: usize,
    #[prop(optional, into)]
    style: String,
    children: Children,
) -> impl IntoView {
    view! {
        <Card attr:style=entrance_style(index, &style)>
            {children()}
        </Card>
    }
}
