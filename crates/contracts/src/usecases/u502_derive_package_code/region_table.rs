use std::collections::BTreeMap;

use anyhow::Context;
use serde::{Deserialize, Serialize};

/// Immutable company code -> region name lookup
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RegionTable {
    entries: BTreeMap<String, String>,
}

impl RegionTable {
    /// Table used in production
    pub fn builtin() -> Self {
        Self::from_pairs([("107848", "淮安")])
    }

    pub fn from_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            entries: pairs
                .into_iter()
                .map(|(code, region)| (code.into(), region.into()))
                .collect(),
        }
    }

    /// Parse a JSON object `{ "<company code>": "<region>" }`
    pub fn from_json(json: &str) -> anyhow::Result<Self> {
        serde_json::from_str(json).context("region table must be a JSON object of strings")
    }

    /// Region for a company code; unknown codes have no region
    pub fn region_of(&self, company_code: &str) -> Option<&str> {
        self.entries.get(company_code.trim()).map(String::as_str)
    }

    /// (code, region) pairs in code order, for the company select
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
