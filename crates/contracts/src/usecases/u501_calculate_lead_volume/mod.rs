pub mod calculator;
pub mod request;
pub mod response;

pub use calculator::{calculate, compute};
pub use request::{CalculatorInput, CalculatorParams};
pub use response::CalculatorResult;

use crate::usecases::common::UseCaseMetadata;

pub struct CalculateLeadVolume;

impl UseCaseMetadata for CalculateLeadVolume {
    fn usecase_index() -> &'static str {
        "u501"
    }

    fn usecase_name() -> &'static str {
        "calculate_lead_volume"
    }

    fn display_name() -> &'static str {
        "线索需求计算器"
    }

    fn description() -> &'static str {
        "根据目标意向客户数和漏斗转化率反推所需线索量及投入产出"
    }
}
