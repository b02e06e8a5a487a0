use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::domain::a002_dial_task::aggregate::DialTask;
use crate::domain::a003_package_tag_summary::aggregate::PackageTagSummary;
use crate::enums::source_type::SourceType;
use crate::usecases::u502_derive_package_code::{DerivedFields, RegistrationInput};

// ============================================================================
// Aggregate
// ============================================================================

/// Lead package as returned by `GET /packages`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LeadPackage {
    pub id: i64,
    pub name: String,
    pub source: String,
    #[serde(default)]
    pub industry: Option<String>,
    #[serde(default)]
    pub region: Option<String>,

    #[serde(default)]
    pub total_leads: i64,
    #[serde(default)]
    pub valid_leads: i64,
    /// Fraction 0-1
    #[serde(default)]
    pub contact_rate: f64,
    /// Fraction 0-1
    #[serde(default)]
    pub interest_rate: f64,

    #[serde(default)]
    pub cost_per_lead: f64,
    #[serde(default)]
    pub total_cost: f64,

    #[serde(default)]
    pub company_code: Option<String>,
    #[serde(default)]
    pub source_type: Option<SourceType>,
    #[serde(default)]
    pub grade: Option<String>,
    #[serde(default)]
    pub internal_code: Option<String>,

    #[serde(default)]
    pub created_at: Option<NaiveDateTime>,
    #[serde(default)]
    pub updated_at: Option<NaiveDateTime>,
}

impl LeadPackage {
    /// Share of valid leads in the package, 0 for an empty package
    pub fn valid_ratio(&self) -> f64 {
        if self.total_leads <= 0 {
            return 0.0;
        }
        self.valid_leads as f64 / self.total_leads as f64
    }

    pub fn element_name() -> &'static str {
        "数据包"
    }

    pub fn list_name() -> &'static str {
        "数据包列表"
    }
}

/// `GET /packages/:id`: the package with its tasks and tag statistics
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LeadPackageDetail {
    #[serde(flatten)]
    pub package: LeadPackage,
    #[serde(default)]
    pub dial_tasks: Vec<DialTask>,
    #[serde(default)]
    pub tag_summaries: Vec<PackageTagSummary>,
}

// ============================================================================
// Forms / DTOs
// ============================================================================

/// Registration form: the fields the codes are derived from plus the
/// commercial figures of the package
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LeadPackageForm {
    #[serde(flatten)]
    pub registration: RegistrationInput,
    /// Blank means "same as valid lead count"
    pub total_leads: String,
    pub cost_per_lead: String,
    pub industry: String,
}

/// Body of `POST /packages`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LeadPackageDto {
    pub name: String,
    pub source: String,
    pub industry: Option<String>,
    pub region: Option<String>,
    pub total_leads: i64,
    pub valid_leads: i64,
    pub cost_per_lead: f64,
    pub company_code: Option<String>,
    pub source_type: Option<SourceType>,
    pub grade: Option<String>,
    pub internal_code: Option<String>,
}

impl LeadPackageDto {
    /// Build the create request from a filled registration form.
    ///
    /// Fails while the derived codes are incomplete or a number is invalid.
    pub fn from_form(form: &LeadPackageForm, derived: &DerivedFields) -> Result<Self, String> {
        if !derived.is_submittable() {
            return Err("登记信息不完整，无法生成任务前缀".into());
        }
        let reg = &form.registration;

        let valid_leads = parse_count("有效线索量", &reg.valid_lead_count)?;
        let total_leads = if form.total_leads.trim().is_empty() {
            valid_leads
        } else {
            parse_count("线索总量", &form.total_leads)?
        };
        let cost_per_lead = if form.cost_per_lead.trim().is_empty() {
            0.0
        } else {
            form.cost_per_lead
                .trim()
                .parse::<f64>()
                .ok()
                .filter(|v| v.is_finite() && *v >= 0.0)
                .ok_or_else(|| "单条线索成本必须是非负数".to_string())?
        };

        let dto = Self {
            name: reg.package_name.trim().to_string(),
            source: reg.source_type.display_name().to_string(),
            industry: non_blank(&form.industry),
            region: non_blank(&derived.region),
            total_leads,
            valid_leads,
            cost_per_lead,
            company_code: non_blank(&reg.company_code),
            source_type: Some(reg.source_type),
            grade: non_blank(&reg.grade),
            internal_code: non_blank(&derived.internal_code),
        };
        dto.validate()?;
        Ok(dto)
    }

    /// Same rules the backend applies to `POST /packages`
    pub fn validate(&self) -> Result<(), String> {
        if self.name.trim().is_empty() {
            return Err("数据包名称不能为空".into());
        }
        if self.source.trim().is_empty() {
            return Err("数据来源不能为空".into());
        }
        if self.valid_leads > self.total_leads {
            return Err("有效线索量不能大于线索总量".into());
        }
        Ok(())
    }
}

/// Query of `GET /packages`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PackageListQuery {
    pub page: u32,
    pub per_page: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub industry: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub region: Option<String>,
}

impl Default for PackageListQuery {
    fn default() -> Self {
        Self {
            page: 1,
            per_page: 20,
            source: None,
            industry: None,
            region: None,
        }
    }
}

fn parse_count(label: &str, raw: &str) -> Result<i64, String> {
    raw.trim()
        .parse::<i64>()
        .ok()
        .filter(|v| *v >= 0)
        .ok_or_else(|| format!("{}必须是非负整数", label))
}

fn non_blank(value: &str) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::usecases::u502_derive_package_code::{derive, RegionTable};

    fn form() -> LeadPackageForm {
        LeadPackageForm {
            registration: RegistrationInput {
                package_name: "dyac1-20250826-高中加购.csv".into(),
                company_code: "107848".into(),
                source_type: SourceType::Purchased,
                grade: "高中".into(),
                valid_lead_count: "5000".into(),
            },
            total_leads: "".into(),
            cost_per_lead: "2.5".into(),
            industry: " 教育培训 ".into(),
        }
    }

    #[test]
    fn test_dto_from_complete_form() {
        let form = form();
        let derived = derive(&form.registration, &RegionTable::builtin());
        let dto = LeadPackageDto::from_form(&form, &derived).unwrap();
        assert_eq!(dto.name, "dyac1-20250826-高中加购.csv");
        assert_eq!(dto.source, "采购数据");
        assert_eq!(dto.region.as_deref(), Some("淮安"));
        assert_eq!(dto.industry.as_deref(), Some("教育培训"));
        assert_eq!(dto.total_leads, 5000);
        assert_eq!(dto.valid_leads, 5000);
        assert_eq!(dto.cost_per_lead, 2.5);
        assert_eq!(dto.internal_code.as_deref(), Some("淮安-0826-高中-5000"));
    }

    #[test]
    fn test_dto_rejects_incomplete_derivation() {
        let mut form = form();
        form.registration.package_name = "no-date.csv".into();
        let derived = derive(&form.registration, &RegionTable::builtin());
        assert!(LeadPackageDto::from_form(&form, &derived).is_err());
    }

    #[test]
    fn test_dto_rejects_bad_numbers() {
        let table = RegionTable::builtin();

        let mut bad_count = form();
        bad_count.registration.valid_lead_count = "5k".into();
        let derived = derive(&bad_count.registration, &table);
        assert!(!derived.is_submittable());
        assert_eq!(
            LeadPackageDto::from_form(&bad_count, &derived).unwrap_err(),
            "登记信息不完整，无法生成任务前缀"
        );

        let mut bad_total = form();
        bad_total.total_leads = "1.5".into();
        let derived = derive(&bad_total.registration, &table);
        assert_eq!(
            LeadPackageDto::from_form(&bad_total, &derived).unwrap_err(),
            "线索总量必须是非负整数"
        );

        let mut too_few_total = form();
        too_few_total.total_leads = "100".into();
        let derived = derive(&too_few_total.registration, &table);
        assert!(LeadPackageDto::from_form(&too_few_total, &derived).is_err());

        let mut negative_cost = form();
        negative_cost.cost_per_lead = "-1".into();
        let derived = derive(&negative_cost.registration, &table);
        assert!(LeadPackageDto::from_form(&negative_cost, &derived).is_err());
    }

    #[test]
    fn test_deserialize_backend_package() {
        let json = r#"{
            "id": 7,
            "name": "江苏职场-教育行业-2024Q1",
            "source": "某某平台",
            "industry": "教育培训",
            "region": null,
            "total_leads": 1000,
            "valid_leads": 800,
            "contact_rate": 0.355,
            "interest_rate": 0.152,
            "cost_per_lead": 2.5,
            "total_cost": 2500.0,
            "created_at": "2025-10-18T09:00:00.123456",
            "updated_at": null
        }"#;
        let package: LeadPackage = serde_json::from_str(json).unwrap();
        assert_eq!(package.id, 7);
        assert_eq!(package.region, None);
        assert_eq!(package.source_type, None);
        assert_eq!(package.valid_ratio(), 0.8);
        assert!(package.created_at.is_some());
    }

    #[test]
    fn test_detail_flattens_package() {
        let json = r#"{
            "id": 1, "name": "p", "source": "s",
            "dial_tasks": [{"id": 3, "package_id": 1, "task_name": "t", "status": "completed"}],
            "tag_summaries": []
        }"#;
        let detail: LeadPackageDetail = serde_json::from_str(json).unwrap();
        assert_eq!(detail.package.id, 1);
        assert_eq!(detail.dial_tasks.len(), 1);
        assert!(detail.tag_summaries.is_empty());
    }
}
