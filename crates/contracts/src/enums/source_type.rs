use serde::{Deserialize, Serialize};

/// Where a lead package comes from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SourceType {
    /// Bought from a data vendor
    #[default]
    Purchased,
    /// Collected for practice / training calls
    Practice,
}

impl SourceType {
    /// Wire code used by the backend and the form select
    pub fn code(&self) -> &'static str {
        match self {
            SourceType::Purchased => "purchased",
            SourceType::Practice => "practice",
        }
    }

    /// Attribute code appended to the task prefix
    pub fn attribute_code(&self) -> &'static str {
        match self {
            SourceType::Purchased => "N",
            SourceType::Practice => "P1",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            SourceType::Purchased => "采购数据",
            SourceType::Practice => "练习数据",
        }
    }

    pub fn all() -> Vec<SourceType> {
        vec![SourceType::Purchased, SourceType::Practice]
    }

    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "purchased" => Some(SourceType::Purchased),
            "practice" => Some(SourceType::Practice),
            _ => None,
        }
    }
}

impl std::fmt::Display for SourceType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.code())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_codes_round_trip_through_from_code() {
        for source in SourceType::all() {
            assert_eq!(SourceType::from_code(source.code()), Some(source));
        }
        assert_eq!(SourceType::from_code("gifted"), None);
    }

    #[test]
    fn test_serde_uses_wire_codes() {
        assert_eq!(
            serde_json::to_string(&SourceType::Practice).unwrap(),
            "\"practice\""
        );
        let parsed: SourceType = serde_json::from_str("\"purchased\"").unwrap();
        assert_eq!(parsed, SourceType::Purchased);
    }
}
