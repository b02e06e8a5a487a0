use serde::{Deserialize, Serialize};

/// Lifecycle of an outbound-call task as reported by the backend
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DialTaskStatus {
    #[default]
    Pending,
    InProgress,
    Completed,
    Failed,
    Cancelled,
}

impl DialTaskStatus {
    pub fn code(&self) -> &'static str {
        match self {
            DialTaskStatus::Pending => "pending",
            DialTaskStatus::InProgress => "in_progress",
            DialTaskStatus::Completed => "completed",
            DialTaskStatus::Failed => "failed",
            DialTaskStatus::Cancelled => "cancelled",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            DialTaskStatus::Pending => "待开始",
            DialTaskStatus::InProgress => "进行中",
            DialTaskStatus::Completed => "已完成",
            DialTaskStatus::Failed => "失败",
            DialTaskStatus::Cancelled => "已取消",
        }
    }

    /// BEM modifier for the status badge
    pub fn badge_modifier(&self) -> &'static str {
        match self {
            DialTaskStatus::Pending => "badge--neutral",
            DialTaskStatus::InProgress => "badge--warning",
            DialTaskStatus::Completed => "badge--success",
            DialTaskStatus::Failed | DialTaskStatus::Cancelled => "badge--danger",
        }
    }

    pub fn is_finished(&self) -> bool {
        matches!(
            self,
            DialTaskStatus::Completed | DialTaskStatus::Failed | DialTaskStatus::Cancelled
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_backend_status() {
        let status: DialTaskStatus = serde_json::from_str("\"in_progress\"").unwrap();
        assert_eq!(status, DialTaskStatus::InProgress);
        assert_eq!(status.display_name(), "进行中");
        assert!(!status.is_finished());
    }
}
