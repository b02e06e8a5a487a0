use serde::{Deserialize, Serialize};

use crate::enums::source_type::SourceType;

/// Registration form fields the derived codes depend on
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RegistrationInput {
    /// Uploaded file / package name, e.g. "dyac1-20250826-高中加购.csv"
    pub package_name: String,
    pub company_code: String,
    pub source_type: SourceType,
    pub grade: String,
    /// Valid lead count as typed; see `parsed_valid_lead_count`
    pub valid_lead_count: String,
}

impl RegistrationInput {
    /// Valid lead count as a non-negative integer, `None` while blank or invalid
    pub fn parsed_valid_lead_count(&self) -> Option<i64> {
        self.valid_lead_count
            .trim()
            .parse::<i64>()
            .ok()
            .filter(|count| *count >= 0)
    }
}
