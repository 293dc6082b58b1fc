//! Search and filter helpers.
//!
//! Remote search runs through the catalog API; these helpers decide whether a
//! query should run at all and combine filter results.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::models::{Gender, Perfume};
use crate::util::normalize_text_option;

/// Shortest query, in characters, that triggers a remote search
pub const MIN_SEARCH_CHARS: usize = 2;

/// Trim a search query, returning `None` when it is too short to run.
#[must_use]
pub fn normalize_search_query(query: &str) -> Option<String> {
    let query = query.trim();
    (query.chars().count() >= MIN_SEARCH_CHARS).then(|| query.to_string())
}

/// Gender and brand filters for the perfume list
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FilterOptions {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gender: Option<Gender>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub brand_id: Option<String>,
}

impl FilterOptions {
    #[must_use]
    pub fn new(gender: Option<Gender>, brand_id: Option<String>) -> Self {
        Self {
            gender,
            brand_id: normalize_text_option(brand_id),
        }
    }

    /// A filter query only runs when at least one filter is set.
    #[must_use]
    pub const fn is_active(&self) -> bool {
        self.gender.is_some() || self.brand_id.is_some()
    }
}

/// Perfumes present in both lists, keeping the order of `primary`.
#[must_use]
pub fn intersect_by_id(primary: Vec<Perfume>, secondary: &[Perfume]) -> Vec<Perfume> {
    let ids: HashSet<&str> = secondary.iter().map(|perfume| perfume.id.as_str()).collect();
    primary
        .into_iter()
        .filter(|perfume| ids.contains(perfume.id.as_str()))
        .collect()
}

/// Case-insensitive name filter over an already loaded list.
#[must_use]
pub fn filter_by_name<'a>(perfumes: &'a [Perfume], needle: &str) -> Vec<&'a Perfume> {
    let needle = needle.trim().to_lowercase();
    if needle.is_empty() {
        return perfumes.iter().collect();
    }
    perfumes
        .iter()
        .filter(|perfume| perfume.name.to_lowercase().contains(&needle))
        .collect()
}
