use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

pub use crate::enums::task_status::DialTaskStatus;

/// Outbound-call task of a lead package
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DialTask {
    pub id: i64,
    pub package_id: i64,
    pub task_name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub start_time: Option<NaiveDateTime>,
    #[serde(default)]
    pub end_time: Option<NaiveDateTime>,
    #[serde(default)]
    pub status: DialTaskStatus,
    #[serde(default)]
    pub total_calls: i64,
    #[serde(default)]
    pub connected_calls: i64,
    #[serde(default)]
    pub interested_calls: i64,
}

impl DialTask {
    /// connected / dialled, 0 before the first call
    pub fn contact_rate(&self) -> f64 {
        if self.total_calls <= 0 {
            return 0.0;
        }
        self.connected_calls as f64 / self.total_calls as f64
    }

    /// interested / connected, 0 before the first connected call
    pub fn interest_rate(&self) -> f64 {
        if self.connected_calls <= 0 {
            return 0.0;
        }
        self.interested_calls as f64 / self.connected_calls as f64
    }
}

/// Body of `POST /packages/:id/tasks`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DialTaskDto {
    pub task_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_time: Option<NaiveDateTime>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_time: Option<NaiveDateTime>,
}

impl DialTaskDto {
    /// First outbound task of a freshly registered package, named after its
    /// task prefix
    pub fn first_for(task_prefix: &str) -> Self {
        Self {
            task_name: task_prefix.to_string(),
            description: Some("首次外呼任务".to_string()),
            start_time: None,
            end_time: None,
        }
    }

    pub fn validate(&self) -> Result<(), String> {
        if self.task_name.trim().is_empty() {
            return Err("任务名称不能为空".into());
        }
        if let (Some(start), Some(end)) = (self.start_time, self.end_time) {
            if end < start {
                return Err("结束时间不能早于开始时间".into());
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn task(total: i64, connected: i64, interested: i64) -> DialTask {
        DialTask {
            id: 1,
            package_id: 1,
            task_name: "淮安-0826-高中-5000-N".into(),
            description: None,
            start_time: None,
            end_time: None,
            status: DialTaskStatus::InProgress,
            total_calls: total,
            connected_calls: connected,
            interested_calls: interested,
        }
    }

    #[test]
    fn test_rates() {
        let t = task(200, 50, 10);
        assert_eq!(t.contact_rate(), 0.25);
        assert_eq!(t.interest_rate(), 0.2);
    }

    #[test]
    fn test_rates_without_calls_are_zero() {
        let t = task(0, 0, 0);
        assert_eq!(t.contact_rate(), 0.0);
        assert_eq!(t.interest_rate(), 0.0);
    }

    #[test]
    fn test_first_task_dto() {
        let dto = DialTaskDto::first_for("淮安-0826-高中-5000-N");
        assert!(dto.validate().is_ok());
        let json = serde_json::to_value(&dto).unwrap();
        assert_eq!(json["task_name"], "淮安-0826-高中-5000-N");
        assert!(json.get("start_time").is_none());
    }

    #[test]
    fn test_dto_rejects_reversed_times() {
        let start = chrono::NaiveDate::from_ymd_opt(2025, 10, 18)
            .unwrap()
            .and_hms_opt(18, 0, 0)
            .unwrap();
        let dto = DialTaskDto {
            task_name: "t".into(),
            start_time: Some(start),
            end_time: Some(start - chrono::Duration::hours(9)),
            ..Default::default()
        };
        assert!(dto.validate().is_err());
        assert!(DialTaskDto::default().validate().is_err());
    }
}
