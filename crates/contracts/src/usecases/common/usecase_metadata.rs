/// Identification of a UseCase for page titles and logging
pub trait UseCaseMetadata {
    /// UseCase index, e.g. "u501"
    fn usecase_index() -> &'static str;

    /// Technical name, e.g. "calculate_lead_volume"
    fn usecase_name() -> &'static str;

    /// Name shown in the UI, e.g. "线索需求计算器"
    fn display_name() -> &'static str;

    fn description() -> &'static str {
        ""
    }

    /// Full name in the form "u501_calculate_lead_volume"
    fn full_name() -> String {
        format!("{}_{}", Self::usecase_index(), Self::usecase_name())
    }
}
