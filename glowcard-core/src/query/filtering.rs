//! Predicates behind the search and facet filters.
//!
//! All three filters compose as a logical AND. Each one only ever removes
//! records, so adding characters to the search term or values to a facet set
//! that was empty narrows the surviving set monotonically.

use std::collections::BTreeSet;
use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

use glowcard_model::{CatalogQuery, Professional};

/// Case-fold `text` one character at a time.
///
/// Folding per character (instead of `str::to_lowercase`, which applies
/// context rules such as the Greek final sigma) keeps the fold of a prefix a
/// prefix of the fold.
pub fn fold_case(text: &str) -> String {
    text.chars().flat_map(char::to_lowercase).collect()
}

/// Substring match of an already folded term against the searchable fields.
/// An empty term matches everything.
pub fn matches_search(pro: &Professional, folded_term: &str) -> bool {
    if folded_term.is_empty() {
        return true;
    }

    let fields = [
        Some(pro.name.as_str()),
        Some(pro.specialty.as_str()),
        Some(pro.location.as_str()),
        pro.instagram.as_deref(),
    ];

    fields
        .into_iter()
        .flatten()
        .any(|field| fold_case(field).contains(folded_term))
}

/// Membership test for a facet filter; an empty selection keeps everything.
pub fn matches_facet(value: &str, selected: &BTreeSet<String>) -> bool {
    selected.is_empty() || selected.contains(value)
}

/// Full predicate for `query`. Prefer [`super::project`] for whole record
/// sets; it folds the term once.
pub fn matches_query(pro: &Professional, query: &CatalogQuery) -> bool {
    matches_search(pro, &fold_case(&query.search))
        && matches_facet(&pro.specialty, &query.specialties)
        && matches_facet(&pro.location, &query.locations)
}

/// Hash of everything that affects a projection, for cheap change detection
/// within one process. Not stable across builds.
pub fn query_fingerprint(query: &CatalogQuery) -> u64 {
    let mut hasher = DefaultHasher::new();
    fold_case(&query.search).hash(&mut hasher);
    query.sort_by.hash(&mut hasher);
    query.order.hash(&mut hasher);
    query.specialties.hash(&mut hasher);
    query.locations.hash(&mut hasher);
    hasher.finish()
}
