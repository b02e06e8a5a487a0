use serde::{Deserialize, Serialize};

use crate::usecases::common::{UseCaseError, UseCaseResult};

/// Calculator form exactly as typed by the user
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CalculatorInput {
    /// Target number of interested customers (required)
    pub target_conversions: String,
    /// Expected contact rate, percent 0-100 (required)
    pub contact_rate: String,
    /// Expected interest rate among contacted leads, percent 0-100 (required)
    pub interest_rate: String,
    /// Cost of a single lead, blank means 0
    pub cost_per_lead: String,
    /// Revenue of a single interested customer, blank means 0
    pub revenue_per_lead: String,
}

/// Parsed calculator input. Rates are still percentages here.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CalculatorParams {
    pub target_conversions: f64,
    pub contact_rate: f64,
    pub interest_rate: f64,
    pub cost_per_lead: f64,
    pub revenue_per_lead: f64,
}

impl CalculatorInput {
    /// Whether the optional cost field was filled in
    pub fn has_cost(&self) -> bool {
        !self.cost_per_lead.trim().is_empty()
    }

    /// Whether the optional revenue field was filled in
    pub fn has_revenue(&self) -> bool {
        !self.revenue_per_lead.trim().is_empty()
    }

    /// Parse and range-check the form.
    ///
    /// Blank required fields are reported together as `MISSING_REQUIRED_FIELDS`.
    pub fn parse(&self) -> UseCaseResult<CalculatorParams> {
        let missing: Vec<&str> = [
            ("target_conversions", &self.target_conversions),
            ("contact_rate", &self.contact_rate),
            ("interest_rate", &self.interest_rate),
        ]
        .into_iter()
        .filter(|(_, raw)| raw.trim().is_empty())
        .map(|(name, _)| name)
        .collect();
        if !missing.is_empty() {
            return Err(UseCaseError::missing_fields(&missing));
        }

        let params = CalculatorParams {
            target_conversions: parse_number("target_conversions", &self.target_conversions)?,
            contact_rate: parse_number("contact_rate", &self.contact_rate)?,
            interest_rate: parse_number("interest_rate", &self.interest_rate)?,
            cost_per_lead: parse_optional("cost_per_lead", &self.cost_per_lead)?,
            revenue_per_lead: parse_optional("revenue_per_lead", &self.revenue_per_lead)?,
        };
        params.validate()?;
        Ok(params)
    }
}

impl CalculatorParams {
    pub fn validate(&self) -> UseCaseResult<()> {
        for (name, value) in [
            ("target_conversions", self.target_conversions),
            ("cost_per_lead", self.cost_per_lead),
            ("revenue_per_lead", self.revenue_per_lead),
        ] {
            if value < 0.0 {
                return Err(UseCaseError::out_of_range(name, "数值不能为负数"));
            }
        }
        for (name, value) in [
            ("contact_rate", self.contact_rate),
            ("interest_rate", self.interest_rate),
        ] {
            if !(0.0..=100.0).contains(&value) {
                return Err(UseCaseError::out_of_range(name, "比率必须在 0 到 100 之间"));
            }
        }
        Ok(())
    }

    pub fn contact_fraction(&self) -> f64 {
        self.contact_rate / 100.0
    }

    pub fn interest_fraction(&self) -> f64 {
        self.interest_rate / 100.0
    }
}

fn parse_number(field: &str, raw: &str) -> UseCaseResult<f64> {
    let value: f64 = raw
        .trim()
        .parse()
        .map_err(|_| UseCaseError::invalid_number(field, raw))?;
    if !value.is_finite() {
        return Err(UseCaseError::invalid_number(field, raw));
    }
    Ok(value)
}

fn parse_optional(field: &str, raw: &str) -> UseCaseResult<f64> {
    if raw.trim().is_empty() {
        return Ok(0.0);
    }
    parse_number(field, raw)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::usecases::common::usecase_result::{
        INVALID_NUMBER, MISSING_REQUIRED_FIELDS, OUT_OF_RANGE,
    };

    fn input(target: &str, contact: &str, interest: &str) -> CalculatorInput {
        CalculatorInput {
            target_conversions: target.into(),
            contact_rate: contact.into(),
            interest_rate: interest.into(),
            ..Default::default()
        }
    }

    #[test]
    fn test_blank_required_fields_are_reported_together() {
        let err = input("100", " ", "").parse().unwrap_err();
        assert_eq!(err.code, MISSING_REQUIRED_FIELDS);
        assert_eq!(err.details.as_deref(), Some("contact_rate, interest_rate"));
    }

    #[test]
    fn test_optional_fields_default_to_zero() {
        let params = input("100", "35", "15").parse().unwrap();
        assert_eq!(params.cost_per_lead, 0.0);
        assert_eq!(params.revenue_per_lead, 0.0);
        assert_eq!(params.contact_fraction(), 0.35);
    }

    #[test]
    fn test_garbage_is_rejected() {
        let err = input("abc", "35", "15").parse().unwrap_err();
        assert_eq!(err.code, INVALID_NUMBER);

        let mut form = input("100", "35", "15");
        form.cost_per_lead = "5元".into();
        assert_eq!(form.parse().unwrap_err().code, INVALID_NUMBER);

        assert_eq!(input("inf", "35", "15").parse().unwrap_err().code, INVALID_NUMBER);
    }

    #[test]
    fn test_out_of_range_values() {
        assert_eq!(input("100", "135", "15").parse().unwrap_err().code, OUT_OF_RANGE);
        assert_eq!(input("-1", "35", "15").parse().unwrap_err().code, OUT_OF_RANGE);
        assert_eq!(input("100", "35", "-0.5").parse().unwrap_err().code, OUT_OF_RANGE);
    }

    #[test]
    fn test_has_cost_and_revenue() {
        let mut form = input("100", "35", "15");
        assert!(!form.has_cost());
        form.cost_per_lead = "5".into();
        form.revenue_per_lead = "  ".into();
        assert!(form.has_cost());
        assert!(!form.has_revenue());
    }
}
