use serde::{Deserialize, Serialize};

/// Result of a UseCase
pub type UseCaseResult<T> = Result<T, UseCaseError>;

pub const MISSING_REQUIRED_FIELDS: &str = "MISSING_REQUIRED_FIELDS";
pub const INVALID_NUMBER: &str = "INVALID_NUMBER";
pub const OUT_OF_RANGE: &str = "OUT_OF_RANGE";
pub const ZERO_RATE: &str = "ZERO_RATE";
pub const INTERNAL_ERROR: &str = "INTERNAL_ERROR";

/// UseCase failure.
///
/// Every code except `INTERNAL_ERROR` is a validation failure: the caller is
/// expected to block the action and show `message` to the user.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UseCaseError {
    pub code: String,
    pub message: String,
    pub details: Option<String>,
}

impl UseCaseError {
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: None,
        }
    }

    pub fn with_details(mut self, details: impl Into<String>) -> Self {
        self.details = Some(details.into());
        self
    }

    pub fn missing_fields(fields: &[&str]) -> Self {
        Self::new(MISSING_REQUIRED_FIELDS, "请填写必填项").with_details(fields.join(", "))
    }

    pub fn invalid_number(field: &str, raw: &str) -> Self {
        Self::new(INVALID_NUMBER, format!("{} 不是有效数字", field))
            .with_details(format!("{}={:?}", field, raw))
    }

    pub fn out_of_range(field: &str, message: impl Into<String>) -> Self {
        Self::new(OUT_OF_RANGE, message).with_details(field.to_string())
    }

    pub fn zero_rate(field: &str) -> Self {
        Self::new(ZERO_RATE, "接通率和意向率必须大于 0").with_details(field.to_string())
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(INTERNAL_ERROR, message)
    }
}

impl std::fmt::Display for UseCaseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}] {}", self.code, self.message)?;
        if let Some(details) = &self.details {
            write!(f, ": {}", details)?;
        }
        Ok(())
    }
}

impl std::error::Error for UseCaseError {}

impl From<anyhow::Error> for UseCaseError {
    fn from(err: anyhow::Error) -> Self {
        UseCaseError::internal(format!("{:#}", err))
    }
}
