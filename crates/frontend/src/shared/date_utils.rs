/// Utilities for date and time formatting
///
/// Backend timestamps are naive ISO strings ("2025-10-18T09:00:00.123456");
/// the UI shows them the way zh-CN locale strings look.
use chrono::NaiveDateTime;

/// Format a timestamp as "YYYY/MM/DD HH:MM:SS"
pub fn format_datetime(dt: &NaiveDateTime) -> String {
    dt.format("%Y/%m/%d %H:%M:%S").to_string()
}

/// Same as [`format_datetime`] for an optional value, "-" when absent
pub fn format_optional_datetime(dt: Option<&NaiveDateTime>) -> String {
    dt.map(format_datetime).unwrap_or_else(|| "-".to_string())
}

/// Format ISO datetime text; unparsable input is returned unchanged
/// Example: "2025-10-18T09:00:00.123" -> "2025/10/18 09:00:00"
pub fn format_datetime_str(datetime_str: &str) -> String {
    let without_zone = datetime_str.trim_end_matches('Z');
    match without_zone.parse::<NaiveDateTime>() {
        Ok(dt) => format_datetime(&dt),
        Err(_) => datetime_str.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_datetime_str() {
        assert_eq!(
            format_datetime_str("2025-10-18T09:00:00.123456"),
            "2025/10/18 09:00:00"
        );
        assert_eq!(
            format_datetime_str("2024-12-31T23:59:59Z"),
            "2024/12/31 23:59:59"
        );
    }

    #[test]
    fn test_format_optional() {
        let dt: NaiveDateTime = "2024-03-15T14:02:26".parse().unwrap();
        assert_eq!(format_optional_datetime(None), "-");
        assert_eq!(format_optional_datetime(Some(&dt)), "2024/03/15 14:02:26");
    }

    #[test]
    fn test_invalid_format() {
        assert_eq!(format_datetime_str("invalid"), "invalid");
    }
}
