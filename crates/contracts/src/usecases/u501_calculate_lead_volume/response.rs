use serde::{Deserialize, Serialize};

/// Funnel and financial projection for a target number of conversions
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CalculatorResult {
    pub required_leads: u64,
    pub expected_contacts: u64,
    pub expected_interested: u64,
    pub total_cost: f64,
    pub total_revenue: f64,
    pub profit: f64,
    /// Percent, rounded to two decimals; 0 when there is no cost
    pub roi: f64,
}

impl CalculatorResult {
    /// ROI as shown on the result card: two decimals, or "0" without cost
    pub fn roi_display(&self) -> String {
        if self.total_cost > 0.0 {
            format!("{:.2}", self.roi)
        } else {
            "0".to_string()
        }
    }

    pub fn is_profitable(&self) -> bool {
        self.profit >= 0.0
    }
}
