use crate::domain::a001_lead_package::api;
use crate::shared::toast::ToastService;
use contracts::domain::a001_lead_package::aggregate::LeadPackageDetail;
use contracts::domain::a002_dial_task::aggregate::DialTask;
use contracts::domain::a003_package_tag_summary::aggregate::{group_by_tag, TagGroup};
use leptos::prelude::*;

/// ViewModel for the package detail page
#[derive(Clone, Copy)]
pub struct LeadPackageDetailsViewModel {
    pub id: i64,
    pub detail: RwSignal<Option<LeadPackageDetail>>,
    pub loading: RwSignal<bool>,
    pub error: RwSignal<Option<String>>,
}

impl LeadPackageDetailsViewModel {
    pub fn new(id: i64) -> Self {
        Self {
            id,
            detail: RwSignal::new(None),
            loading: RwSignal::new(false),
            error: RwSignal::new(None),
        }
    }

    pub fn tasks(&self) -> Vec<DialTask> {
        self.detail
            .with(|d| d.as_ref().map(|d| d.dial_tasks.clone()).unwrap_or_default())
    }

    pub fn tag_groups(&self) -> Vec<TagGroup> {
        self.detail
            .with(|d| d.as_ref().map(|d| group_by_tag(&d.tag_summaries)).unwrap_or_default())
    }

    pub fn load(&self) {
        let this = *self;
        this.loading.set(true);
        wasm_bindgen_futures::spawn_local(async move {
            match api::fetch_package(this.id).await {
                Ok(detail) => {
                    this.detail.set(Some(detail));
                    this.error.set(None);
                }
                Err(e) => this.error.set(Some(format!("加载数据包详情失败: {}", e))),
            }
            this.loading.set(false);
        });
    }

    /// Re-read only the dial tasks
    pub fn refresh_tasks(&self, toasts: ToastService) {
        let this = *self;
        wasm_bindgen_futures::spawn_local(async move {
            match api::fetch_tasks(this.id).await {
                Ok(tasks) => this.detail.update(|d| {
                    if let Some(d) = d.as_mut() {
                        d.dial_tasks = tasks;
                    }
                }),
                Err(e) => {
                    toasts.error(format!("刷新外呼任务失败: {}", e));
                }
            }
        });
    }

    /// Delete the package after a browser confirm; `on_deleted` runs on success
    pub fn delete_command(&self, toasts: ToastService, on_deleted: Callback<()>) {
        let confirmed = web_sys::window()
            .and_then(|w| {
                w.confirm_with_message("确定要删除该数据包吗？相关外呼任务也会被删除。")
                    .ok()
            })
            .unwrap_or(false);
        if !confirmed {
            return;
        }

        let id = self.id;
        wasm_bindgen_futures::spawn_local(async move {
            match api::delete_package(id).await {
                Ok(message) => {
                    log::info!("package #{} deleted", id);
                    toasts.success(message.unwrap_or_else(|| "数据包已删除".to_string()));
                    on_deleted.run(());
                }
                Err(e) => {
                    toasts.error(format!("删除失败: {}", e));
                }
            }
        });
    }
}
