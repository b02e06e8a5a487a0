use serde::{Deserialize, Serialize};

/// How often one tag value occurred across the calls of a package
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PackageTagSummary {
    #[serde(default)]
    pub id: i64,
    #[serde(default)]
    pub package_id: i64,
    pub tag_name: String,
    #[serde(default)]
    pub tag_value: Option<String>,
    #[serde(default)]
    pub tag_count: i64,
    /// Fraction 0-1
    #[serde(default)]
    pub percentage: f64,
}

/// All values of one tag, most frequent first
#[derive(Debug, Clone, PartialEq)]
pub struct TagGroup {
    pub tag_name: String,
    pub total_count: i64,
    pub values: Vec<PackageTagSummary>,
}

/// Group summaries by tag name.
///
/// Groups keep the order in which tag names first appear; values inside a
/// group are sorted by count, descending.
pub fn group_by_tag(summaries: &[PackageTagSummary]) -> Vec<TagGroup> {
    let mut groups: Vec<TagGroup> = Vec::new();
    for summary in summaries {
        match groups.iter_mut().find(|g| g.tag_name == summary.tag_name) {
            Some(group) => {
                group.total_count += summary.tag_count;
                group.values.push(summary.clone());
            }
            None => groups.push(TagGroup {
                tag_name: summary.tag_name.clone(),
                total_count: summary.tag_count,
                values: vec![summary.clone()],
            }),
        }
    }
    for group in &mut groups {
        group.values.sort_by(|a, b| b.tag_count.cmp(&a.tag_count));
    }
    groups
}
