pub mod state;

use self::state::create_state;
use crate::layout::global_context::{AppGlobalContext, Page};
use crate::shared::date_utils::format_optional_datetime;
use crate::shared::list_utils::{compare_f64, get_sort_class, get_sort_indicator, sort_list, Sortable};
use crate::shared::number_utils::{format_number, format_percent};
use contracts::domain::a001_lead_package::aggregate::LeadPackage;
use leptos::prelude::*;
use std::cmp::Ordering;

#[derive(Clone, Debug)]
pub struct LeadPackageRow {
    pub id: i64,
    pub name: String,
    pub source: String,
    pub industry: String,
    pub region: String,
    pub total_leads: i64,
    pub valid_leads: i64,
    pub contact_rate: f64,
    pub interest_rate: f64,
    pub created_at: String,
}

impl From<LeadPackage> for LeadPackageRow {
    fn from(p: LeadPackage) -> Self {
        Self {
            id: p.id,
            created_at: format_optional_datetime(p.created_at.as_ref()),
            name: p.name,
            source: p.source,
            industry: p.industry.unwrap_or_else(|| "-".to_string()),
            region: p.region.unwrap_or_else(|| "-".to_string()),
            total_leads: p.total_leads,
            valid_leads: p.valid_leads,
            contact_rate: p.contact_rate,
            interest_rate: p.interest_rate,
        }
    }
}

impl Sortable for LeadPackageRow {
    fn compare_by_field(&self, other: &Self, field: &str) -> Ordering {
        match field {
            "name" => self.name.to_lowercase().cmp(&other.name.to_lowercase()),
            "source" => self.source.cmp(&other.source),
            "industry" => self.industry.cmp(&other.industry),
            "region" => self.region.cmp(&other.region),
            "total_leads" => self.total_leads.cmp(&other.total_leads),
            "valid_leads" => self.valid_leads.cmp(&other.valid_leads),
            "contact_rate" => compare_f64(self.contact_rate, other.contact_rate),
            "interest_rate" => compare_f64(self.interest_rate, other.interest_rate),
            // "YYYY/MM/DD HH:MM:SS" sorts chronologically as text
            "created_at" => self.created_at.cmp(&other.created_at),
            _ => Ordering::Equal,
        }
    }
}

/// Sortable package table; a click on a row opens the package detail page
#[component]
#[allow(non_snake_case)]
pub fn LeadPackageList(#[prop(into)] packages: Signal<Vec<LeadPackage>>) -> impl IntoView {
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext context not found");
    let state = create_state();

    let toggle_sort = move |field: &'static str| {
        move |_| {
            state.update(|s| {
                if s.sort_field == field {
                    s.sort_ascending = !s.sort_ascending;
                } else {
                    s.sort_field = field.to_string();
                    s.sort_ascending = true;
                }
            });
        }
    };

    let sorted_items = move || {
        let mut rows: Vec<LeadPackageRow> = packages.get().into_iter().map(Into::into).collect();
        let s = state.get();
        sort_list(&mut rows, &s.sort_field, s.sort_ascending);
        rows
    };

    let header = move |label: &'static str, field: &'static str| {
        view! {
            <th class="table__header-cell table__header-cell--sortable" on:click=toggle_sort(field)>
                {label}
                <span class={move || get_sort_class(&state.get().sort_field, field)}>
                    {move || get_sort_indicator(&state.get().sort_field, field, state.get().sort_ascending)}
                </span>
            </th>
        }
    };

    view! {
        <div class="table-container">
            <table class="table__data table--striped">
                <thead class="table__head">
                    <tr>
                        {header("数据包名称", "name")}
                        {header("数据来源", "source")}
                        {header("行业", "industry")}
                        {header("地区", "region")}
                        {header("线索总量", "total_leads")}
                        {header("有效线索", "valid_leads")}
                        {header("接通率", "contact_rate")}
                        {header("意向率", "interest_rate")}
                        {header("登记时间", "created_at")}
                        <th class="table__header-cell">{"操作"}</th>
                    </tr>
                </thead>
                <tbody>
                    {move || {
                        let rows = sorted_items();
                        if rows.is_empty() {
                            return view! {
                                <tr>
                                    <td class="table__cell table__cell--empty" colspan="10">{"暂无数据包"}</td>
                                </tr>
                            }
                            .into_any();
                        }
                        rows.into_iter()
                            .map(|row| {
                                let id = row.id;
                                view! {
                                    <tr class="table__row" on:click=move |_| ctx.navigate(Page::PackageDetail(id))>
                                        <td class="table__cell">{row.name}</td>
                                        <td class="table__cell">{row.source}</td>
                                        <td class="table__cell">{row.industry}</td>
                                        <td class="table__cell">{row.region}</td>
                                        <td class="table__cell table__cell--number">{format_number(row.total_leads as f64, 0)}</td>
                                        <td class="table__cell table__cell--number">{format_number(row.valid_leads as f64, 0)}</td>
                                        <td class="table__cell table__cell--number">{format_percent(row.contact_rate, 2, true)}</td>
                                        <td class="table__cell table__cell--number">{format_percent(row.interest_rate, 2, true)}</td>
                                        <td class="table__cell">{row.created_at}</td>
                                        <td class="table__cell">
                                            <button
                                                class="button button--ghost"
                                                on:click=move |ev| {
                                                    ev.stop_propagation();
                                                    ctx.navigate(Page::PackageDetail(id));
                                                }
                                            >
                                                {"查看详情"}
                                            </button>
                                        </td>
                                    </tr>
                                }
                            })
                            .collect_view()
                            .into_any()
                    }}
                </tbody>
            </table>
        </div>
    }
}
