//! Number formatting for tables and result cards (zh-CN conventions:
//! "," thousands separator, "¥" currency).

/// Placeholder for a missing or non-numeric value
pub const EMPTY: &str = "-";

/// Format with `decimals` fraction digits and "," every three integer digits.
/// `format_number(1234567.891, 2)` gives "1,234,567.89".
pub fn format_number(value: f64, decimals: usize) -> String {
    if !value.is_finite() {
        return EMPTY.to_string();
    }
    let formatted = format!("{:.*}", decimals, value);
    let (sign, unsigned) = match formatted.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", formatted.as_str()),
    };
    let (integer_part, fraction_part) = match unsigned.split_once('.') {
        Some((int, frac)) => (int, Some(frac)),
        None => (unsigned, None),
    };

    let mut grouped = String::with_capacity(integer_part.len() + integer_part.len() / 3);
    for (i, c) in integer_part.chars().enumerate() {
        if i > 0 && (integer_part.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }

    // "-0.00" reads as a negative zero; show it unsigned
    let sign = if unsigned.chars().all(|c| c == '0' || c == '.') {
        ""
    } else {
        sign
    };

    match fraction_part {
        Some(frac) => format!("{}{}.{}", sign, grouped, frac),
        None => format!("{}{}", sign, grouped),
    }
}

/// Percentage with `decimals` digits. `is_fraction` means `value` is 0-1.
pub fn format_percent(value: f64, decimals: usize, is_fraction: bool) -> String {
    if !value.is_finite() {
        return EMPTY.to_string();
    }
    let percent = if is_fraction { value * 100.0 } else { value };
    format!("{:.*}%", decimals, percent)
}

/// Money amount: "¥" + grouped number
pub fn format_currency(value: f64, decimals: usize) -> String {
    if !value.is_finite() {
        return format!("¥{:.*}", decimals, 0.0);
    }
    format!("¥{}", format_number(value, decimals))
}

/// Compact form with K / M / B suffix and one decimal
pub fn format_large_number(value: f64) -> String {
    if !value.is_finite() {
        return EMPTY.to_string();
    }
    if value >= 1_000_000_000.0 {
        format!("{:.1}B", value / 1_000_000_000.0)
    } else if value >= 1_000_000.0 {
        format!("{:.1}M", value / 1_000_000.0)
    } else if value >= 1_000.0 {
        format!("{:.1}K", value / 1_000.0)
    } else {
        value.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_number() {
        assert_eq!(format_number(0.0, 0), "0");
        assert_eq!(format_number(999.0, 0), "999");
        assert_eq!(format_number(1000.0, 0), "1,000");
        assert_eq!(format_number(1905.0, 0), "1,905");
        assert_eq!(format_number(1234567.891, 2), "1,234,567.89");
        assert_eq!(format_number(-4525.0, 2), "-4,525.00");
        assert_eq!(format_number(-0.001, 2), "0.00");
        assert_eq!(format_number(f64::NAN, 2), "-");
    }

    #[test]
    fn test_format_percent() {
        assert_eq!(format_percent(0.355, 2, true), "35.50%");
        assert_eq!(format_percent(35.5, 1, false), "35.5%");
        assert_eq!(format_percent(f64::INFINITY, 2, true), "-");
    }

    #[test]
    fn test_format_currency() {
        assert_eq!(format_currency(9525.0, 2), "¥9,525.00");
        assert_eq!(format_currency(-4525.0, 2), "¥-4,525.00");
        assert_eq!(format_currency(f64::NAN, 2), "¥0.00");
    }

    #[test]
    fn test_format_large_number() {
        assert_eq!(format_large_number(950.0), "950");
        assert_eq!(format_large_number(1500.0), "1.5K");
        assert_eq!(format_large_number(2_500_000.0), "2.5M");
        assert_eq!(format_large_number(3_000_000_000.0), "3.0B");
    }
}
