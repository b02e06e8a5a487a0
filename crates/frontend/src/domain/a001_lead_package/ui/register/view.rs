use super::view_model::LeadPackageRegisterViewModel;
use crate::layout::global_context::{AppGlobalContext, Page};
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_DETAIL;
use crate::shared::toast::ToastService;
use contracts::enums::source_type::SourceType;
use contracts::usecases::u502_derive_package_code::DerivedFields;
use leptos::prelude::*;

pub const PAGE_ID: &str = "a001_lead_package_register--detail";

#[component]
#[allow(non_snake_case)]
pub fn LeadPackageRegister() -> impl IntoView {
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext context not found");
    let toasts = use_context::<ToastService>().expect("ToastService not found in context");
    let vm = LeadPackageRegisterViewModel::new();

    let on_saved = Callback::new(move |id: i64| {
        log::info!("registration finished for package #{}", id);
        ctx.mark_data_changed();
        ctx.navigate(Page::Dashboard);
    });

    let company_options = vm.regions.with_value(|table| {
        table
            .iter()
            .map(|(code, region)| (code.to_string(), format!("{} ({})", code, region)))
            .collect::<Vec<_>>()
    });

    let derived_field = move |label: &'static str, pick: fn(&DerivedFields) -> String| {
        view! {
            <div class="form-group">
                <label>{label}</label>
                <input
                    type="text"
                    class="form-input form-input--readonly"
                    readonly=true
                    prop:value=move || {
                        let value = vm.derived.with(pick);
                        if value.is_empty() { "-".to_string() } else { value }
                    }
                />
            </div>
        }
    };

    view! {
        <PageFrame page_id=PAGE_ID category=PAGE_CAT_DETAIL class="page--register">
            <div class="page__header">
                <div class="page__header-left">
                    <h1 class="page__title">{"数据包登记"}</h1>
                </div>
            </div>

            <div class="page__content">

                {move || vm.error.get().map(|e| view! { <div class="error">{e}</div> })}

                <div class="details-form">
                    <div class="form-group">
                        <label for="package_name">{"数据包名称 *"}</label>
                        <input
                            type="text"
                            id="package_name"
                            prop:value=move || vm.form.get().registration.package_name
                            on:input=move |ev| vm.form.update(|f| f.registration.package_name = event_target_value(&ev))
                            placeholder="例如 dyac1-20250826-高中加购.csv"
                        />
                    </div>

                    <div class="form-group">
                        <label for="company_code">{"公司编码 *"}</label>
                        <select
                            id="company_code"
                            prop:value=move || vm.form.get().registration.company_code
                            on:change=move |ev| vm.form.update(|f| f.registration.company_code = event_target_value(&ev))
                        >
                            <option value="">{"请选择"}</option>
                            {company_options
                                .into_iter()
                                .map(|(code, label)| view! { <option value=code>{label}</option> })
                                .collect_view()}
                        </select>
                    </div>

                    <div class="form-group">
                        <label for="source_type">{"数据来源 *"}</label>
                        <select
                            id="source_type"
                            prop:value=move || vm.form.get().registration.source_type.code().to_string()
                            on:change=move |ev| {
                                if let Some(source_type) = SourceType::from_code(&event_target_value(&ev)) {
                                    vm.form.update(|f| f.registration.source_type = source_type);
                                }
                            }
                        >
                            {SourceType::all()
                                .into_iter()
                                .map(|s| view! { <option value=s.code()>{s.display_name()}</option> })
                                .collect_view()}
                        </select>
                    </div>

                    <div class="form-group">
                        <label for="grade">{"年级 *"}</label>
                        <input
                            type="text"
                            id="grade"
                            prop:value=move || vm.form.get().registration.grade
                            on:input=move |ev| vm.form.update(|f| f.registration.grade = event_target_value(&ev))
                            placeholder="例如 高中"
                        />
                    </div>

                    <div class="form-group">
                        <label for="valid_lead_count">{"有效线索量 *"}</label>
                        <input
                            type="number"
                            id="valid_lead_count"
                            min="0"
                            prop:value=move || vm.form.get().registration.valid_lead_count
                            on:input=move |ev| vm.form.update(|f| f.registration.valid_lead_count = event_target_value(&ev))
                        />
                    </div>

                    <div class="form-group">
                        <label for="total_leads">{"线索总量"}</label>
                        <input
                            type="number"
                            id="total_leads"
                            min="0"
                            prop:value=move || vm.form.get().total_leads
                            on:input=move |ev| vm.form.update(|f| f.total_leads = event_target_value(&ev))
                            placeholder="默认等于有效线索量"
                        />
                    </div>

                    <div class="form-group">
                        <label for="cost_per_lead">{"单条线索成本 (¥)"}</label>
                        <input
                            type="number"
                            id="cost_per_lead"
                            min="0"
                            step="0.01"
                            prop:value=move || vm.form.get().cost_per_lead
                            on:input=move |ev| vm.form.update(|f| f.cost_per_lead = event_target_value(&ev))
                        />
                    </div>

                    <div class="form-group">
                        <label for="industry">{"行业"}</label>
                        <input
                            type="text"
                            id="industry"
                            prop:value=move || vm.form.get().industry
                            on:input=move |ev| vm.form.update(|f| f.industry = event_target_value(&ev))
                        />
                    </div>
                </div>

                <h3 class="section__title">{"自动生成"}</h3>
                <div class="details-form">
                    {derived_field("地区", |d| d.region.clone())}
                    {derived_field("发布日期", |d| d.release_date_fragment.clone())}
                    {derived_field("属性编码", |d| d.attribute_code.clone())}
                    {derived_field("内部编号", |d| d.internal_code.clone())}
                    {derived_field("任务前缀", |d| d.task_prefix.clone())}
                </div>

                <div class="details-actions">
                    <button
                        class="button button--primary"
                        disabled=move || !vm.can_submit()
                        on:click=move |_| vm.submit_command(toasts, on_saved)
                    >
                        {move || if vm.submitting.get() { "提交中..." } else { "登记数据包" }}
                    </button>
                    <button class="button button--secondary" on:click=move |_| vm.reset()>
                        {"重置"}
                    </button>
                </div>
            </div>
        </PageFrame>
    }
}
