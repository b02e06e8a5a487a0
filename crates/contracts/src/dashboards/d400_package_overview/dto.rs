use serde::{Deserialize, Serialize};

use crate::domain::a001_lead_package::aggregate::LeadPackage;

/// Headline figures of the package dashboard
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DashboardMetrics {
    pub total_packages: usize,
    pub total_leads: i64,
    /// Mean contact rate over packages, percent with two decimals
    pub avg_contact_rate: f64,
    /// Mean interest rate over packages, percent with two decimals
    pub avg_interest_rate: f64,
}

impl DashboardMetrics {
    pub fn from_packages(packages: &[LeadPackage]) -> Self {
        if packages.is_empty() {
            return Self::default();
        }
        let count = packages.len() as f64;
        let contact_sum: f64 = packages.iter().map(|p| p.contact_rate).sum();
        let interest_sum: f64 = packages.iter().map(|p| p.interest_rate).sum();

        Self {
            total_packages: packages.len(),
            total_leads: packages.iter().map(|p| p.total_leads).sum(),
            avg_contact_rate: to_percent(contact_sum / count),
            avg_interest_rate: to_percent(interest_sum / count),
        }
    }
}

fn to_percent(fraction: f64) -> f64 {
    (fraction * 10_000.0).round() / 100.0
}
