use leptos::prelude::*;

#[derive(Clone, Debug)]
pub struct LeadPackageListState {
    pub sort_field: String,
    pub sort_ascending: bool,
}

impl Default for LeadPackageListState {
    fn default() -> Self {
        Self {
            sort_field: "created_at".to_string(),
            sort_ascending: false,
        }
    }
}

pub fn create_state() -> RwSignal<LeadPackageListState> {
    RwSignal::new(LeadPackageListState::default())
}
