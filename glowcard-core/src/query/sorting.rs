//! Comparators for the catalog sort modes.
//!
//! Every mode resolves to a total order: the primary comparator, then the
//! manual rank (`None` last), then the name, then the id. Only the primary
//! comparator follows the requested [`SortOrder`]; the tie-break chain always
//! runs ascending so the relative order of tied entries is the same in both
//! directions.

use std::cmp::Ordering;

use glowcard_model::{Professional, SortBy, SortOrder};
use ordered_float::OrderedFloat;

/// Accent- and case-insensitive key used for text comparisons.
pub fn collation_key(text: &str) -> String {
    deunicode::deunicode(text).to_lowercase()
}

/// Locale-style comparison: transliterated, case-folded keys first, raw text
/// as the tie-break so distinct strings never compare equal.
pub fn collate(a: &str, b: &str) -> Ordering {
    collation_key(a)
        .cmp(&collation_key(b))
        .then_with(|| a.cmp(b))
}

/// Professional with its collation keys extracted once.
#[derive(Debug)]
struct SortEntry<'a> {
    pro: &'a Professional,
    name_key: String,
    location_key: String,
}

impl<'a> SortEntry<'a> {
    fn new(pro: &'a Professional, sort_by: SortBy) -> Self {
        let location_key = if sort_by == SortBy::Location {
            collation_key(&pro.location)
        } else {
            String::new()
        };
        Self {
            pro,
            name_key: collation_key(&pro.name),
            location_key,
        }
    }
}

fn compare_order(a: Option<f64>, b: Option<f64>) -> Ordering {
    match (a, b) {
        (Some(a), Some(b)) => OrderedFloat(a).cmp(&OrderedFloat(b)),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

fn compare_names(a: &SortEntry<'_>, b: &SortEntry<'_>) -> Ordering {
    a.name_key
        .cmp(&b.name_key)
        .then_with(|| a.pro.name.cmp(&b.pro.name))
}

fn compare_primary(
    a: &SortEntry<'_>,
    b: &SortEntry<'_>,
    sort_by: SortBy,
) -> Ordering {
    match sort_by {
        SortBy::Manual => compare_order(a.pro.order, b.pro.order),
        SortBy::Name => compare_names(a, b),
        SortBy::Location => a
            .location_key
            .cmp(&b.location_key)
            .then_with(|| a.pro.location.cmp(&b.pro.location)),
        SortBy::Rating => OrderedFloat(a.pro.rating_or_zero())
            .cmp(&OrderedFloat(b.pro.rating_or_zero())),
        SortBy::Experience => {
            a.pro.experience_or_zero().cmp(&b.pro.experience_or_zero())
        }
    }
}

fn compare_entries(
    a: &SortEntry<'_>,
    b: &SortEntry<'_>,
    sort_by: SortBy,
    sort_order: SortOrder,
) -> Ordering {
    let primary = compare_primary(a, b, sort_by);
    let primary = if sort_order.is_descending() {
        primary.reverse()
    } else {
        primary
    };

    primary
        .then_with(|| compare_order(a.pro.order, b.pro.order))
        .then_with(|| compare_names(a, b))
        .then_with(|| a.pro.id.cmp(&b.pro.id))
}

/// Compare two professionals under the given sort mode.
pub fn compare_professionals(
    a: &Professional,
    b: &Professional,
    sort_by: SortBy,
    sort_order: SortOrder,
) -> Ordering {
    compare_entries(
        &SortEntry::new(a, sort_by),
        &SortEntry::new(b, sort_by),
        sort_by,
        sort_order,
    )
}

/// Sort references in place. Keys are extracted once per record.
pub fn sort_professionals(
    items: &mut Vec<&Professional>,
    sort_by: SortBy,
    sort_order: SortOrder,
) {
    let mut entries: Vec<SortEntry<'_>> = items
        .iter()
        .map(|pro| SortEntry::new(pro, sort_by))
        .collect();

    entries.sort_by(|a, b| compare_entries(a, b, sort_by, sort_order));

    items.clear();
    items.extend(entries.into_iter().map(|entry| entry.pro));
}
