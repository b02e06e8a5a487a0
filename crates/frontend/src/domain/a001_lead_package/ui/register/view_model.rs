use crate::domain::a001_lead_package::api;
use crate::shared::toast::ToastService;
use contracts::domain::a001_lead_package::aggregate::{LeadPackageDto, LeadPackageForm};
use contracts::usecases::u502_derive_package_code::{derive, DerivedFields, RegionTable};
use leptos::prelude::*;

/// Region table for the company select; `LEAD_REGION_TABLE` (JSON object)
/// replaces the built-in one at compile time
pub fn region_table() -> RegionTable {
    match option_env!("LEAD_REGION_TABLE") {
        Some(json) if !json.trim().is_empty() => RegionTable::from_json(json).unwrap_or_else(|e| {
            log::warn!("LEAD_REGION_TABLE ignored: {:#}", e);
            RegionTable::builtin()
        }),
        _ => RegionTable::builtin(),
    }
}

/// ViewModel for the registration form
#[derive(Clone, Copy)]
pub struct LeadPackageRegisterViewModel {
    pub form: RwSignal<LeadPackageForm>,
    pub derived: Memo<DerivedFields>,
    pub regions: StoredValue<RegionTable>,
    pub submitting: RwSignal<bool>,
    pub error: RwSignal<Option<String>>,
}

impl LeadPackageRegisterViewModel {
    pub fn new() -> Self {
        let form = RwSignal::new(LeadPackageForm::default());
        let table = region_table();
        let regions = StoredValue::new(table.clone());
        // recomputed on every edit of the form
        let derived = Memo::new(move |_| form.with(|f| derive(&f.registration, &table)));
        Self {
            form,
            derived,
            regions,
            submitting: RwSignal::new(false),
            error: RwSignal::new(None),
        }
    }

    pub fn can_submit(&self) -> bool {
        self.derived.get().is_submittable() && !self.submitting.get()
    }

    pub fn reset(&self) {
        self.form.set(LeadPackageForm::default());
        self.error.set(None);
    }

    /// Create the package, then its first dial task. `on_saved` runs once
    /// the package exists.
    pub fn submit_command(&self, toasts: ToastService, on_saved: Callback<i64>) {
        let derived = self.derived.get_untracked();
        let dto = match self.form.with_untracked(|f| LeadPackageDto::from_form(f, &derived)) {
            Ok(dto) => dto,
            Err(msg) => {
                self.error.set(Some(msg.clone()));
                toasts.error(msg);
                return;
            }
        };

        let this = *self;
        this.submitting.set(true);
        this.error.set(None);
        wasm_bindgen_futures::spawn_local(async move {
            match api::register_package(&dto, &derived.task_prefix).await {
                Ok((package, None)) => {
                    toasts.success(format!("数据包登记成功，已创建外呼任务 {}", derived.task_prefix));
                    this.reset();
                    on_saved.run(package.id);
                }
                Ok((package, Some(task_error))) => {
                    toasts.error(format!("数据包已登记，但外呼任务创建失败: {}", task_error));
                    this.reset();
                    on_saved.run(package.id);
                }
                Err(e) => {
                    let msg = format!("登记失败: {}", e);
                    this.error.set(Some(msg.clone()));
                    toasts.error(msg);
                }
            }
            this.submitting.set(false);
        });
    }
}

impl Default for LeadPackageRegisterViewModel {
    fn default() -> Self {
        Self::new()
    }
}
