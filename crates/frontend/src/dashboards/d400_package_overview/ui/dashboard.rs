use crate::domain::a001_lead_package::api;
use crate::domain::a001_lead_package::ui::list::LeadPackageList;
use crate::layout::global_context::{AppGlobalContext, Page};
use crate::shared::components::StatCard;
use crate::shared::number_utils::{format_large_number, format_number};
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_DASHBOARD;
use contracts::dashboards::d400_package_overview::DashboardMetrics;
use contracts::domain::a001_lead_package::aggregate::{LeadPackage, PackageListQuery};
use contracts::enums::source_type::SourceType;
use leptos::prelude::*;
use leptos::task::spawn_local;

pub const PAGE_ID: &str = "d400_package_overview--dashboard";

/// Packages fetched for the overview; the dashboard shows one page
const OVERVIEW_PAGE_SIZE: u32 = 100;

/// Numbers the list requests so only the newest response is applied
#[derive(Debug, Default, Clone, Copy)]
struct RequestTicket(u64);

impl RequestTicket {
    fn next(&mut self) -> u64 {
        self.0 += 1;
        self.0
    }

    fn is_current(&self, ticket: u64) -> bool {
        self.0 == ticket
    }
}

/// Home page: headline metrics and the package table
#[component]
pub fn PackageOverviewDashboard() -> impl IntoView {
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext context not found");

    let (packages, set_packages) = signal(Vec::<LeadPackage>::new());
    let (loading, set_loading) = signal(false);
    let (error, set_error) = signal(None::<String>);
    let source_filter = RwSignal::new(String::new());
    let reload = RwSignal::new(0u32);
    let latest = StoredValue::new(RequestTicket::default());

    // Load data when the filter changes or after writes elsewhere
    Effect::new(move |_| {
        reload.track();
        ctx.data_version.track();
        let source = source_filter.get();
        let query = PackageListQuery {
            per_page: OVERVIEW_PAGE_SIZE,
            source: (!source.is_empty()).then_some(source),
            ..PackageListQuery::default()
        };
        set_loading.set(true);
        set_error.set(None);
        let ticket = latest.try_update_value(|t| t.next()).unwrap_or_default();

        spawn_local(async move {
            let result = api::fetch_packages(&query).await;
            if !latest.try_with_value(|t| t.is_current(ticket)).unwrap_or(false) {
                log::debug!("d400: dropping stale response #{}", ticket);
                return;
            }
            match result {
                Ok(list) => {
                    log::debug!("d400: {} packages loaded", list.len());
                    set_packages.set(list);
                }
                Err(e) => set_error.set(Some(format!("加载数据包失败: {}", e))),
            }
            set_loading.set(false);
        });
    });

    let metrics = Memo::new(move |_| packages.with(|p| DashboardMetrics::from_packages(p)));

    view! {
        <PageFrame page_id=PAGE_ID category=PAGE_CAT_DASHBOARD>
            <div class="page__header">
                <div class="page__header-left">
                    <h1 class="page__title">{"首页看板"}</h1>
                </div>
                <div class="page__header-right">
                    <select
                        class="form-select"
                        prop:value=move || source_filter.get()
                        on:change=move |ev| source_filter.set(event_target_value(&ev))
                    >
                        <option value="">{"全部来源"}</option>
                        {SourceType::all()
                            .into_iter()
                            .map(|s| view! { <option value=s.display_name()>{s.display_name()}</option> })
                            .collect_view()}
                    </select>
                    <button class="button button--secondary" on:click=move |_| reload.update(|v| *v += 1)>
                        {"刷新"}
                    </button>
                    <button class="button button--primary" on:click=move |_| ctx.navigate(Page::Register)>
                        {"登记数据包"}
                    </button>
                </div>
            </div>

            <div class="page__content">
                {move || error.get().map(|e| view! { <div class="error">{e}</div> })}

                <div class="stat-cards">
                    <StatCard
                        label="数据包总数"
                        value=Signal::derive(move || metrics.with(|m| format_number(m.total_packages as f64, 0)))
                    />
                    <StatCard
                        label="线索总量"
                        value=Signal::derive(move || metrics.with(|m| format_number(m.total_leads as f64, 0)))
                        subtitle=Signal::derive(move || {
                            metrics.with(|m| (m.total_leads >= 1_000).then(|| format_large_number(m.total_leads as f64)))
                        })
                    />
                    <StatCard
                        label="平均接通率"
                        value=Signal::derive(move || metrics.with(|m| format!("{:.2}%", m.avg_contact_rate)))
                    />
                    <StatCard
                        label="平均意向率"
                        value=Signal::derive(move || metrics.with(|m| format!("{:.2}%", m.avg_interest_rate)))
                    />
                </div>

                <h3 class="section__title">{LeadPackage::list_name()}</h3>
                <Show
                    when=move || !loading.get()
                    fallback=|| view! { <div class="loading">{"加载中..."}</div> }
                >
                    <LeadPackageList packages=packages />
                </Show>
            </div>
        </PageFrame>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_only_newest_ticket_is_current() {
        let mut latest = RequestTicket::default();
        let all_sources = latest.next();
        let purchased = latest.next();

        // the slower response for the earlier filter arrives last
        assert!(latest.is_current(purchased));
        assert!(!latest.is_current(all_sources));

        let refreshed = latest.next();
        assert!(!latest.is_current(purchased));
        assert!(latest.is_current(refreshed));
    }
}
