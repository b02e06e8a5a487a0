use super::view_model::LeadPackageDetailsViewModel;
use crate::layout::global_context::{AppGlobalContext, Page};
use crate::shared::date_utils::format_optional_datetime;
use crate::shared::number_utils::{format_currency, format_number, format_percent};
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_DETAIL;
use crate::shared::toast::ToastService;
use contracts::domain::a001_lead_package::aggregate::LeadPackage;
use leptos::prelude::*;

pub const PAGE_ID: &str = "a001_lead_package--detail";

#[component]
#[allow(non_snake_case)]
pub fn LeadPackageDetails(id: i64) -> impl IntoView {
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext context not found");
    let toasts = use_context::<ToastService>().expect("ToastService not found in context");
    let vm = LeadPackageDetailsViewModel::new(id);
    vm.load();

    let on_deleted = Callback::new(move |_| {
        ctx.mark_data_changed();
        ctx.navigate(Page::Dashboard);
    });

    view! {
        <PageFrame page_id=PAGE_ID category=PAGE_CAT_DETAIL>
            <div class="page__header">
                <div class="page__header-left">
                    <h1 class="page__title">{format!("数据包详情 #{}", id)}</h1>
                </div>
                <div class="page__header-right">
                    <button class="button button--secondary" on:click=move |_| ctx.navigate(Page::Dashboard)>
                        {"返回看板"}
                    </button>
                    <button class="button button--secondary" on:click=move |_| vm.refresh_tasks(toasts)>
                        {"刷新任务"}
                    </button>
                    <button class="button button--danger" on:click=move |_| vm.delete_command(toasts, on_deleted)>
                        {"删除数据包"}
                    </button>
                </div>
            </div>

            <div class="page__content">
                {move || vm.error.get().map(|e| view! { <div class="error">{e}</div> })}
                {move || vm.loading.get().then(|| view! { <div class="loading">{"加载中..."}</div> })}

                {move || vm.detail.get().map(|d| view! { <PackageSummary package=d.package /> })}

                <section class="section">
                    <h3 class="section__title">{"外呼任务"}</h3>
                    <div class="table-container">
                        <table class="table__data table--striped">
                            <thead class="table__head">
                                <tr>
                                    <th class="table__header-cell">{"任务名称"}</th>
                                    <th class="table__header-cell">{"状态"}</th>
                                    <th class="table__header-cell">{"外呼总数"}</th>
                                    <th class="table__header-cell">{"接通数"}</th>
                                    <th class="table__header-cell">{"意向数"}</th>
                                    <th class="table__header-cell">{"接通率"}</th>
                                    <th class="table__header-cell">{"意向率"}</th>
                                    <th class="table__header-cell">{"开始时间"}</th>
                                </tr>
                            </thead>
                            <tbody>
                                {move || {
                                    let tasks = vm.tasks();
                                    if tasks.is_empty() {
                                        return view! {
                                            <tr>
                                                <td class="table__cell table__cell--empty" colspan="8">{"暂无外呼任务"}</td>
                                            </tr>
                                        }
                                        .into_any();
                                    }
                                    tasks
                                        .into_iter()
                                        .map(|task| {
                                            let badge = format!("badge {}", task.status.badge_modifier());
                                            view! {
                                                <tr class="table__row">
                                                    <td class="table__cell">{task.task_name.clone()}</td>
                                                    <td class="table__cell">
                                                        <span class=badge>{task.status.display_name()}</span>
                                                    </td>
                                                    <td class="table__cell table__cell--number">{format_number(task.total_calls as f64, 0)}</td>
                                                    <td class="table__cell table__cell--number">{format_number(task.connected_calls as f64, 0)}</td>
                                                    <td class="table__cell table__cell--number">{format_number(task.interested_calls as f64, 0)}</td>
                                                    <td class="table__cell table__cell--number">{format_percent(task.contact_rate(), 2, true)}</td>
                                                    <td class="table__cell table__cell--number">{format_percent(task.interest_rate(), 2, true)}</td>
                                                    <td class="table__cell">{format_optional_datetime(task.start_time.as_ref())}</td>
                                                </tr>
                                            }
                                        })
                                        .collect_view()
                                        .into_any()
                                }}
                            </tbody>
                        </table>
                    </div>
                </section>

                <section class="section">
                    <h3 class="section__title">{"标签统计"}</h3>
                    {move || {
                        let groups = vm.tag_groups();
                        if groups.is_empty() {
                            return view! { <div class="placeholder">{"暂无标签统计"}</div> }.into_any();
                        }
                        groups
                            .into_iter()
                            .map(|group| {
                                view! {
                                    <div class="tag-group">
                                        <div class="tag-group__title">
                                            {group.tag_name.clone()}
                                            <span class="tag-group__total">
                                                {format!("共 {}", format_number(group.total_count as f64, 0))}
                                            </span>
                                        </div>
                                        <ul class="tag-group__values">
                                            {group
                                                .values
                                                .into_iter()
                                                .map(|v| {
                                                    view! {
                                                        <li class="tag-group__value">
                                                            <span>{v.tag_value.unwrap_or_else(|| "(空)".to_string())}</span>
                                                            <span>{format_number(v.tag_count as f64, 0)}</span>
                                                            <span>{format_percent(v.percentage, 2, true)}</span>
                                                        </li>
                                                    }
                                                })
                                                .collect_view()}
                                        </ul>
                                    </div>
                                }
                            })
                            .collect_view()
                            .into_any()
                    }}
                </section>
            </div>
        </PageFrame>
    }
}

#[component]
#[allow(non_snake_case)]
fn PackageSummary(package: LeadPackage) -> impl IntoView {
    let field = |label: &'static str, value: String| {
        view! {
            <div class="form-group">
                <label>{label}</label>
                <div class="form__value">{value}</div>
            </div>
        }
    };
    let or_dash = |v: &Option<String>| v.clone().unwrap_or_else(|| "-".to_string());

    view! {
        <div class="details-form">
            {field("数据包名称", package.name.clone())}
            {field("数据来源", package.source.clone())}
            {field("行业", or_dash(&package.industry))}
            {field("地区", or_dash(&package.region))}
            {field("内部编号", or_dash(&package.internal_code))}
            {field("线索总量", format_number(package.total_leads as f64, 0))}
            {field("有效线索", format!(
                "{} ({})",
                format_number(package.valid_leads as f64, 0),
                format_percent(package.valid_ratio(), 1, true)
            ))}
            {field("接通率", format_percent(package.contact_rate, 2, true))}
            {field("意向率", format_percent(package.interest_rate, 2, true))}
            {field("单条成本", format_currency(package.cost_per_lead, 2))}
            {field("总成本", format_currency(package.total_cost, 2))}
            {field("登记时间", format_optional_datetime(package.created_at.as_ref()))}
        </div>
    }
}
