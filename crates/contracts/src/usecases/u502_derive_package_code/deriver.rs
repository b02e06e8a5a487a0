use once_cell::sync::Lazy;
use regex::Regex;

use super::region_table::RegionTable;
use super::request::RegistrationInput;
use super::response::DerivedFields;

/// Eight consecutive ASCII digits, e.g. the `20250826` in a file name.
/// Not checked against the calendar.
static DATE_RUN: Lazy<Regex> = Lazy::new(|| Regex::new(r"[0-9]{8}").expect("valid date pattern"));

/// Last four characters (MMDD) of the first 8-digit run in `package_name`,
/// or an empty string when there is none
pub fn release_date_fragment(package_name: &str) -> String {
    DATE_RUN
        .find(package_name)
        .map(|m| m.as_str()[4..].to_string())
        .unwrap_or_default()
}

/// Derive region, release date, attribute code, internal code and task prefix
pub fn derive(input: &RegistrationInput, regions: &RegionTable) -> DerivedFields {
    let region = regions
        .region_of(&input.company_code)
        .unwrap_or_default()
        .to_string();
    let release_date_fragment = release_date_fragment(&input.package_name);
    let attribute_code = input.source_type.attribute_code().to_string();
    let grade = input.grade.trim();
    let valid_lead_count = input
        .parsed_valid_lead_count()
        .map(|count| count.to_string())
        .unwrap_or_default();

    let parts = [
        region.as_str(),
        release_date_fragment.as_str(),
        grade,
        valid_lead_count.as_str(),
    ];
    let internal_code = if parts.iter().all(|part| !part.is_empty()) {
        parts.join("-")
    } else {
        String::new()
    };
    let task_prefix = if internal_code.is_empty() {
        String::new()
    } else {
        format!("{}-{}", internal_code, attribute_code)
    };

    DerivedFields {
        region,
        release_date_fragment,
        attribute_code,
        internal_code,
        task_prefix,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::enums::source_type::SourceType;

    fn registration(name: &str) -> RegistrationInput {
        RegistrationInput {
            package_name: name.into(),
            company_code: "107848".into(),
            source_type: SourceType::Purchased,
            grade: "高中".into(),
            valid_lead_count: "5000".into(),
        }
    }

    #[test]
    fn test_full_derivation() {
        let derived = derive(
            &registration("dyac1-20250826-高中加购.csv"),
            &RegionTable::builtin(),
        );
        assert_eq!(derived.region, "淮安");
        assert_eq!(derived.release_date_fragment, "0826");
        assert_eq!(derived.attribute_code, "N");
        assert_eq!(derived.internal_code, "淮安-0826-高中-5000");
        assert_eq!(derived.task_prefix, "淮安-0826-高中-5000-N");
        assert!(derived.is_submittable());
    }

    #[test]
    fn test_practice_source_uses_p1() {
        let mut input = registration("dyac1-20250826-高中加购.csv");
        input.source_type = SourceType::Practice;
        let derived = derive(&input, &RegionTable::builtin());
        assert_eq!(derived.attribute_code, "P1");
        assert_eq!(derived.task_prefix, "淮安-0826-高中-5000-P1");
    }

    #[test]
    fn test_no_date_blocks_submission() {
        let derived = derive(&registration("dyac1-2025-高中.csv"), &RegionTable::builtin());
        assert_eq!(derived.region, "淮安");
        assert_eq!(derived.release_date_fragment, "");
        assert_eq!(derived.internal_code, "");
        assert_eq!(derived.task_prefix, "");
        assert!(!derived.is_submittable());
    }

    #[test]
    fn test_date_extraction_is_not_calendar_checked() {
        assert_eq!(release_date_fragment("pkg-99999999.csv"), "9999");
        assert_eq!(release_date_fragment("a20240101b20250202"), "0101");
        assert_eq!(release_date_fragment("1234567"), "");
        // a longer run still yields its first eight digits
        assert_eq!(release_date_fragment("x2025082612y"), "0826");
        // full-width digits are not ASCII digits
        assert_eq!(release_date_fragment("２０２５０８２６"), "");
    }

    #[test]
    fn test_each_missing_part_clears_codes() {
        let table = RegionTable::builtin();
        let base = registration("dyac1-20250826.csv");

        let mut unknown_company = base.clone();
        unknown_company.company_code = "999".into();
        let mut blank_grade = base.clone();
        blank_grade.grade = "  ".into();
        let mut blank_count = base.clone();
        blank_count.valid_lead_count = String::new();

        for input in [unknown_company, blank_grade, blank_count] {
            let derived = derive(&input, &table);
            assert_eq!(derived.internal_code, "");
            assert_eq!(derived.task_prefix, "");
            assert_eq!(derived.attribute_code, "N");
        }
    }

    #[test]
    fn test_non_integer_count_blocks_submission() {
        let table = RegionTable::builtin();
        for raw in ["-5", "5.5", "1e3", "abc", "5 000"] {
            let mut input = registration("dyac1-20250826.csv");
            input.valid_lead_count = raw.into();
            let derived = derive(&input, &table);
            assert_eq!(derived.internal_code, "", "count {raw:?}");
            assert_eq!(derived.task_prefix, "", "count {raw:?}");
            assert!(!derived.is_submittable(), "count {raw:?}");
        }
    }

    #[test]
    fn test_count_is_normalised() {
        let mut input = registration("dyac1-20250826.csv");
        input.valid_lead_count = " 05000 ".into();
        let derived = derive(&input, &RegionTable::builtin());
        assert_eq!(derived.task_prefix, "淮安-0826-高中-5000-N");
    }

    #[test]
    fn test_fabricated_region_table() {
        let table = RegionTable::from_pairs([("A1", "测试区")]);
        let mut input = registration("20991231");
        input.company_code = "A1".into();
        let derived = derive(&input, &table);
        assert_eq!(derived.internal_code, "测试区-1231-高中-5000");
    }

    #[test]
    fn test_derive_is_deterministic() {
        let input = registration("dyac1-20250826-高中加购.csv");
        let table = RegionTable::builtin();
        assert_eq!(derive(&input, &table), derive(&input, &table));
    }
}
