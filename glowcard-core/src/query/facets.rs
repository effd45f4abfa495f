//! Distinct filter values offered to the user, derived from the records.

use std::collections::HashMap;

use glowcard_model::Professional;

use super::sorting::collate;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FacetCount {
    pub value: String,
    pub count: usize,
}

/// Specialty and location options with how many records carry each.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Facets {
    pub specialties: Vec<FacetCount>,
    pub locations: Vec<FacetCount>,
}

impl Facets {
    /// Blank values are skipped. Options are listed in collation order.
    pub fn from_records(records: &[Professional]) -> Self {
        Self {
            specialties: count_values(records.iter().map(|p| p.specialty.as_str())),
            locations: count_values(records.iter().map(|p| p.location.as_str())),
        }
    }

    pub fn specialty_names(&self) -> impl Iterator<Item = &str> {
        self.specialties.iter().map(|facet| facet.value.as_str())
    }

    pub fn location_names(&self) -> impl Iterator<Item = &str> {
        self.locations.iter().map(|facet| facet.value.as_str())
    }
}

fn count_values<'a>(values: impl Iterator<Item = &'a str>) -> Vec<FacetCount> {
    let mut counts: HashMap<&str, usize> = HashMap::new();
    for value in values.filter(|value| !value.trim().is_empty()) {
        *counts.entry(value).or_default() += 1;
    }

    let mut facets: Vec<FacetCount> = counts
        .into_iter()
        .map(|(value, count)| FacetCount {
            value: value.to_string(),
            count,
        })
        .collect();
    facets.sort_by(|a, b| collate(&a.value, &b.value));
    facets
}
