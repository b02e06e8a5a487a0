use crate::dashboards::PackageOverviewDashboard;
use crate::domain::a001_lead_package::ui::details::LeadPackageDetails;
use crate::domain::a001_lead_package::ui::register::LeadPackageRegister;
use crate::layout::global_context::{AppGlobalContext, Page};
use crate::layout::Shell;
use crate::usecases::u501_calculate_lead_volume::LeadVolumeCalculator;
use leptos::logging::log;
use leptos::prelude::*;

/// View for a page key; the single place that maps pages to components
pub fn render_page(page: Page) -> AnyView {
    log!("render_page: '{}'", page.key());
    match page {
        Page::Dashboard => view! { <PackageOverviewDashboard /> }.into_any(),
        Page::Register => view! { <LeadPackageRegister /> }.into_any(),
        Page::PackageDetail(id) => view! { <LeadPackageDetails id=id /> }.into_any(),
        Page::Calculator => view! { <LeadVolumeCalculator /> }.into_any(),
    }
}

#[component]
pub fn AppRoutes() -> impl IntoView {
    let ctx = leptos::context::use_context::<AppGlobalContext>()
        .expect("AppGlobalContext context not found");

    // Initialize router integration. This runs once when the component is created.
    ctx.init_router_integration();

    view! {
        <Shell center=move || view! { {move || render_page(ctx.active.get())} }.into_any() />
    }
}
