//! Page category constants.
//!
//! Every page declares an HTML `id` in the format `{entity}--{category}`
//! (e.g. `"a001_lead_package--detail"`) and a `data-page-category` with one
//! of the constants below. The entity part matches the module directory.

/// Table of records
pub const PAGE_CAT_LIST: &str = "list";

/// Detail view or form for a single record
pub const PAGE_CAT_DETAIL: &str = "detail";

/// Metrics overview
pub const PAGE_CAT_DASHBOARD: &str = "dashboard";

/// Use-case page (calculator, wizards)
pub const PAGE_CAT_USECASE: &str = "usecase";

/// All known category values.
pub const ALL_CATEGORIES: &[&str] = &[
    PAGE_CAT_LIST,
    PAGE_CAT_DETAIL,
    PAGE_CAT_DASHBOARD,
    PAGE_CAT_USECASE,
];

/// Validate that a page id matches the `{entity}--{category}` format.
pub fn is_valid_page_id(id: &str) -> bool {
    let parts: Vec<&str> = id.splitn(2, "--").collect();
    parts.len() == 2 && !parts[0].is_empty() && !parts[1].is_empty()
}

/// Return true if the category value is recognised.
pub fn is_known_category(cat: &str) -> bool {
    ALL_CATEGORIES.contains(&cat)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_ids() {
        assert!(is_valid_page_id("a001_lead_package--detail"));
        assert!(is_valid_page_id("u501_calculate_lead_volume--usecase"));
        assert!(!is_valid_page_id("d400_package_overview"));
        assert!(!is_valid_page_id("--list"));
    }

    #[test]
    fn test_pages_have_distinct_standard_ids() {
        let ids = [
            crate::dashboards::d400_package_overview::ui::dashboard::PAGE_ID,
            crate::domain::a001_lead_package::ui::register::view::PAGE_ID,
            crate::domain::a001_lead_package::ui::details::view::PAGE_ID,
            crate::usecases::u501_calculate_lead_volume::view::PAGE_ID,
        ];
        for id in ids {
            assert!(is_valid_page_id(id), "{id}");
        }
        let unique: std::collections::HashSet<_> = ids.iter().collect();
        assert_eq!(unique.len(), ids.len());
    }

    #[test]
    fn test_categories() {
        assert!(is_known_category(PAGE_CAT_DASHBOARD));
        assert!(!is_known_category("legacy"));
    }
}
