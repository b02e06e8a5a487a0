//! Inverse funnel arithmetic: from a conversion target back to the number of
//! leads that must be bought, then forward again to contacts, interested
//! customers, cost, revenue and ROI.

use super::request::{CalculatorInput, CalculatorParams};
use super::response::CalculatorResult;
use crate::usecases::common::{UseCaseError, UseCaseResult};

/// Parse the raw form and compute the projection
pub fn calculate(input: &CalculatorInput) -> UseCaseResult<CalculatorResult> {
    compute(&input.parse()?)
}

/// Compute the projection for already parsed parameters.
///
/// A zero contact or interest rate leaves the required lead volume undefined
/// and is rejected with `ZERO_RATE`, including rates whose product underflows
/// to zero. A lead volume or amount beyond `u64`/`f64` range is `OUT_OF_RANGE`.
pub fn compute(params: &CalculatorParams) -> UseCaseResult<CalculatorResult> {
    params.validate()?;

    let contact = params.contact_fraction();
    let interest = params.interest_fraction();
    if contact <= 0.0 {
        return Err(UseCaseError::zero_rate("contact_rate"));
    }
    if interest <= 0.0 {
        return Err(UseCaseError::zero_rate("interest_rate"));
    }

    let yield_per_lead = contact * interest;
    if yield_per_lead <= 0.0 {
        return Err(UseCaseError::zero_rate("contact_rate * interest_rate"));
    }
    let required_leads = (params.target_conversions / yield_per_lead).ceil();
    if !required_leads.is_finite() || required_leads > MAX_LEADS {
        return Err(UseCaseError::out_of_range(
            "target_conversions",
            "所需线索量超出可计算范围",
        ));
    }
    let expected_contacts = (required_leads * contact).round();
    let expected_interested = (expected_contacts * interest).round();

    let total_cost = required_leads * params.cost_per_lead;
    let total_revenue = expected_interested * params.revenue_per_lead;
    if !total_cost.is_finite() || !total_revenue.is_finite() {
        return Err(UseCaseError::out_of_range("amount", "金额超出可计算范围"));
    }
    let profit = total_revenue - total_cost;
    let roi = if total_cost > 0.0 {
        round2(profit / total_cost * 100.0)
    } else {
        0.0
    };
    if !roi.is_finite() {
        return Err(UseCaseError::out_of_range("roi", "金额超出可计算范围"));
    }

    Ok(CalculatorResult {
        required_leads: required_leads as u64,
        expected_contacts: expected_contacts as u64,
        expected_interested: expected_interested as u64,
        total_cost,
        total_revenue,
        profit,
        roi,
    })
}

/// Largest lead volume that still converts to `u64` exactly
const MAX_LEADS: f64 = 9_007_199_254_740_992.0;

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::usecases::common::usecase_result::{MISSING_REQUIRED_FIELDS, OUT_OF_RANGE, ZERO_RATE};

    fn params(target: f64, contact: f64, interest: f64) -> CalculatorParams {
        CalculatorParams {
            target_conversions: target,
            contact_rate: contact,
            interest_rate: interest,
            cost_per_lead: 0.0,
            revenue_per_lead: 0.0,
        }
    }

    #[test]
    fn test_funnel_without_money() {
        let result = compute(&params(100.0, 35.0, 15.0)).unwrap();
        assert_eq!(result.required_leads, 1905);
        assert_eq!(result.expected_contacts, 667);
        assert_eq!(result.expected_interested, 100);
        assert_eq!(result.total_cost, 0.0);
        assert_eq!(result.roi, 0.0);
        assert_eq!(result.roi_display(), "0");
    }

    #[test]
    fn test_funnel_with_cost_and_revenue() {
        let input = CalculatorInput {
            target_conversions: "100".into(),
            contact_rate: "35".into(),
            interest_rate: "15".into(),
            cost_per_lead: "5".into(),
            revenue_per_lead: "50".into(),
        };
        let result = calculate(&input).unwrap();
        assert_eq!(result.required_leads, 1905);
        assert_eq!(format!("{:.2}", result.total_cost), "9525.00");
        assert_eq!(format!("{:.2}", result.total_revenue), "5000.00");
        assert_eq!(format!("{:.2}", result.profit), "-4525.00");
        assert_eq!(result.roi_display(), "-47.51");
        assert!(!result.is_profitable());
    }

    #[test]
    fn test_required_leads_is_smallest_sufficient_integer() {
        for target in [1.0, 7.0, 50.0, 100.0, 333.0, 1000.0] {
            for contact in [5.0, 12.5, 35.0, 60.0, 100.0] {
                for interest in [1.0, 15.0, 33.3, 80.0] {
                    let p = params(target, contact, interest);
                    let result = compute(&p).unwrap();
                    let yield_per_lead = p.contact_fraction() * p.interest_fraction();
                    let leads = result.required_leads as f64;
                    assert!(
                        leads * yield_per_lead >= target - 1e-9,
                        "{target}/{contact}/{interest}: {leads} leads too few"
                    );
                    assert!(
                        (leads - 1.0) * yield_per_lead < target + 1e-9,
                        "{target}/{contact}/{interest}: {leads} leads not minimal"
                    );
                }
            }
        }
    }

    #[test]
    fn test_zero_target_needs_no_leads() {
        let result = compute(&params(0.0, 35.0, 15.0)).unwrap();
        assert_eq!(result.required_leads, 0);
        assert_eq!(result.expected_contacts, 0);
        assert_eq!(result.expected_interested, 0);
    }

    #[test]
    fn test_zero_rates_are_rejected() {
        let err = compute(&params(100.0, 0.0, 15.0)).unwrap_err();
        assert_eq!(err.code, ZERO_RATE);
        assert_eq!(err.details.as_deref(), Some("contact_rate"));

        let err = compute(&params(100.0, 35.0, 0.0)).unwrap_err();
        assert_eq!(err.code, ZERO_RATE);
        assert_eq!(err.details.as_deref(), Some("interest_rate"));

        let input = CalculatorInput {
            target_conversions: "100".into(),
            contact_rate: "0".into(),
            interest_rate: "15".into(),
            ..Default::default()
        };
        assert_eq!(calculate(&input).unwrap_err().code, ZERO_RATE);
    }

    #[test]
    fn test_underflowing_yield_is_rejected() {
        let input = CalculatorInput {
            target_conversions: "100".into(),
            contact_rate: "1e-160".into(),
            interest_rate: "1e-160".into(),
            cost_per_lead: "5".into(),
            ..Default::default()
        };
        let err = calculate(&input).unwrap_err();
        assert_eq!(err.code, ZERO_RATE);

        assert_eq!(err.details.as_deref(), Some("contact_rate * interest_rate"));

        let err = compute(&params(1e300, 0.01, 0.01)).unwrap_err();
        assert_eq!(err.code, OUT_OF_RANGE);

        let mut p = params(1e15, 100.0, 100.0);
        p.cost_per_lead = f64::MAX;
        assert_eq!(compute(&p).unwrap_err().code, OUT_OF_RANGE);
    }

    #[test]
    fn test_missing_fields_block_calculation() {
        let err = calculate(&CalculatorInput::default()).unwrap_err();
        assert_eq!(err.code, MISSING_REQUIRED_FIELDS);
    }

    #[test]
    fn test_profitable_roi() {
        let mut p = params(10.0, 50.0, 50.0);
        p.cost_per_lead = 2.0;
        p.revenue_per_lead = 20.0;
        let result = compute(&p).unwrap();
        assert_eq!(result.required_leads, 40);
        assert_eq!(result.expected_interested, 10);
        assert_eq!(result.total_cost, 80.0);
        assert_eq!(result.total_revenue, 200.0);
        assert_eq!(result.roi, 150.0);
        assert_eq!(result.roi_display(), "150.00");
    }

    #[test]
    fn test_compute_is_deterministic() {
        let p = params(250.0, 42.0, 18.0);
        assert_eq!(compute(&p).unwrap(), compute(&p).unwrap());
    }
}
