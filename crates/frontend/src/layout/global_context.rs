use leptos::prelude::Effect;
use leptos::prelude::*;
use std::collections::HashMap;
use web_sys::window;

use crate::system::auth::storage;

const DETAIL_PREFIX: &str = "a001_lead_package_detail_";

/// Top-level pages. The key is what `?active=` carries in the URL.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Page {
    #[default]
    Dashboard,
    Register,
    PackageDetail(i64),
    Calculator,
}

impl Page {
    pub fn key(&self) -> String {
        match self {
            Page::Dashboard => "d400_package_overview".to_string(),
            Page::Register => "a001_lead_package_register".to_string(),
            Page::PackageDetail(id) => format!("{}{}", DETAIL_PREFIX, id),
            Page::Calculator => "u501_calculate_lead_volume".to_string(),
        }
    }

    pub fn from_key(key: &str) -> Option<Page> {
        match key {
            "d400_package_overview" => Some(Page::Dashboard),
            "a001_lead_package_register" => Some(Page::Register),
            "u501_calculate_lead_volume" => Some(Page::Calculator),
            k => k
                .strip_prefix(DETAIL_PREFIX)
                .and_then(|id| id.parse::<i64>().ok())
                .map(Page::PackageDetail),
        }
    }

    pub fn title(&self) -> String {
        match self {
            Page::Dashboard => "首页看板".to_string(),
            Page::Register => "数据包登记".to_string(),
            Page::PackageDetail(id) => format!("数据包详情 #{}", id),
            Page::Calculator => "需求计算器".to_string(),
        }
    }

    /// Header tab that stays highlighted while this page is shown
    pub fn nav_root(&self) -> Page {
        match self {
            Page::PackageDetail(_) => Page::Dashboard,
            other => *other,
        }
    }

    /// Pages reachable from the header
    pub fn nav_items() -> [Page; 3] {
        [Page::Dashboard, Page::Register, Page::Calculator]
    }
}

#[derive(Clone, Copy)]
pub struct AppGlobalContext {
    pub active: RwSignal<Page>,
    /// Bumped after a write so lists re-fetch
    pub data_version: RwSignal<u64>,
}

impl AppGlobalContext {
    pub fn new() -> Self {
        Self {
            active: RwSignal::new(Page::default()),
            data_version: RwSignal::new(0),
        }
    }

    pub fn navigate(&self, page: Page) {
        leptos::logging::log!("navigate: key='{}'", page.key());
        self.active.set(page);
    }

    pub fn mark_data_changed(&self) {
        self.data_version.update(|v| *v += 1);
    }

    /// Reads `?active=`, picks up a `?token=` handoff, then keeps the URL in
    /// sync with the active page. The synced URL no longer carries the token.
    pub fn init_router_integration(&self) {
        let search = window()
            .and_then(|w| w.location().search().ok())
            .unwrap_or_default();
        let params: HashMap<String, String> =
            serde_qs::from_str(search.trim_start_matches('?')).unwrap_or_default();

        if let Some(token) = params.get("token").filter(|t| !t.is_empty()) {
            let expires_in = params
                .get("expires_in")
                .and_then(|v| v.parse::<u64>().ok());
            storage::set_token(token, expires_in);
            leptos::logging::log!("token received via url, expires_in={:?}", expires_in);
        }

        if let Some(active_key) = params.get("active") {
            match Page::from_key(active_key) {
                Some(page) => self.active.set(page),
                None => leptos::logging::warn!("unknown page key '{}'", active_key),
            }
        }

        let this = *self;
        Effect::new(move |_| {
            let active_key = this.active.get().key();
            let query_string =
                serde_qs::to_string(&HashMap::from([("active".to_string(), active_key)]))
                    .unwrap_or_default();

            let new_url = format!("?{}", query_string);

            let current_search = window()
                .and_then(|w| w.location().search().ok())
                .unwrap_or_default();

            // Only update URL if it actually changed
            if current_search != new_url {
                if let Some(w) = window() {
                    if let Ok(history) = w.history() {
                        let _ = history.replace_state_with_url(
                            &wasm_bindgen::JsValue::NULL,
                            "",
                            Some(&new_url),
                        );
                    }
                }
            }
        });
    }
}

impl Default for AppGlobalContext {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_keys() {
        for page in [
            Page::Dashboard,
            Page::Register,
            Page::Calculator,
            Page::PackageDetail(42),
        ] {
            assert_eq!(Page::from_key(&page.key()), Some(page));
        }
        assert_eq!(Page::PackageDetail(7).key(), "a001_lead_package_detail_7");
    }

    #[test]
    fn test_unknown_keys() {
        assert_eq!(Page::from_key("a001_lead_package_detail_abc"), None);
        assert_eq!(Page::from_key("a999_unknown_page"), None);
        assert_eq!(Page::from_key(""), None);
    }

    #[test]
    fn test_nav_root() {
        assert_eq!(Page::PackageDetail(3).nav_root(), Page::Dashboard);
        assert_eq!(Page::Calculator.nav_root(), Page::Calculator);
        assert_eq!(Page::default(), Page::Dashboard);
    }
}
