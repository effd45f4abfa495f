//! Query descriptors handed from the presentation layer to the query engine.

use std::collections::BTreeSet;
use std::fmt;

/// Fields available for sorting the catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum SortBy {
    /// Curator-defined `order`, unranked entries last, then by name.
    #[default]
    #[cfg_attr(feature = "serde", serde(alias = "none"))]
    Manual,
    Name,
    Location,
    Rating,
    Experience,
}

impl SortBy {
    pub fn all() -> &'static [SortBy] {
        &[
            SortBy::Manual,
            SortBy::Name,
            SortBy::Location,
            SortBy::Rating,
            SortBy::Experience,
        ]
    }

    /// Direction a picker should select when the user switches to this field.
    /// Numeric fields read best highest-first.
    pub fn preferred_order(&self) -> SortOrder {
        match self {
            SortBy::Rating | SortBy::Experience => SortOrder::Descending,
            SortBy::Manual | SortBy::Name | SortBy::Location => {
                SortOrder::Ascending
            }
        }
    }

    pub fn api_name(&self) -> &'static str {
        match self {
            SortBy::Manual => "none",
            SortBy::Name => "name",
            SortBy::Location => "location",
            SortBy::Rating => "rating",
            SortBy::Experience => "experience",
        }
    }
}

impl fmt::Display for SortBy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.api_name())
    }
}

/// Sort order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum SortOrder {
    #[default]
    #[cfg_attr(feature = "serde", serde(alias = "asc"))]
    Ascending,
    #[cfg_attr(feature = "serde", serde(alias = "desc"))]
    Descending,
}

impl SortOrder {
    pub fn toggled(self) -> Self {
        match self {
            SortOrder::Ascending => SortOrder::Descending,
            SortOrder::Descending => SortOrder::Ascending,
        }
    }

    pub fn is_descending(self) -> bool {
        self == SortOrder::Descending
    }
}

/// Search, sort and filter state for one browsing session.
///
/// Filters are OR within a field and AND across fields. Empty sets and an
/// empty search term filter nothing.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default, rename_all = "camelCase"))]
pub struct CatalogQuery {
    pub search: String,
    pub sort_by: SortBy,
    pub order: SortOrder,
    pub specialties: BTreeSet<String>,
    pub locations: BTreeSet<String>,
}

impl CatalogQuery {
    pub fn new() -> Self {
        Self::default()
    }

    /// True when no search term or filter is active (sorting aside).
    pub fn is_unfiltered(&self) -> bool {
        self.search.is_empty()
            && self.specialties.is_empty()
            && self.locations.is_empty()
    }

    pub fn active_filter_count(&self) -> usize {
        usize::from(!self.search.is_empty())
            + self.specialties.len()
            + self.locations.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn numeric_fields_prefer_descending() {
        assert_eq!(SortBy::Rating.preferred_order(), SortOrder::Descending);
        assert_eq!(SortBy::Experience.preferred_order(), SortOrder::Descending);
        assert_eq!(SortBy::Name.preferred_order(), SortOrder::Ascending);
        assert_eq!(SortBy::Manual.preferred_order(), SortOrder::Ascending);
    }

    #[test]
    fn filter_count_tracks_every_active_constraint() {
        let mut query = CatalogQuery::new();
        assert!(query.is_unfiltered());

        query.search = "lash".into();
        query.specialties.insert("Lashes".into());
        query.locations.insert("Austin".into());
        query.locations.insert("Dallas".into());

        assert!(!query.is_unfiltered());
        assert_eq!(query.active_filter_count(), 4);
    }
}
