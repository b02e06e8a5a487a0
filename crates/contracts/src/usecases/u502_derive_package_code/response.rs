use serde::{Deserialize, Serialize};

/// Codes derived from a registration form.
///
/// `task_prefix` is non-empty iff `internal_code` is non-empty iff region,
/// release date fragment, grade and valid lead count are all present.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DerivedFields {
    pub region: String,
    pub release_date_fragment: String,
    pub attribute_code: String,
    pub internal_code: String,
    pub task_prefix: String,
}

impl DerivedFields {
    /// Registration may be submitted only once a task prefix exists
    pub fn is_submittable(&self) -> bool {
        !self.task_prefix.is_empty()
    }
}
