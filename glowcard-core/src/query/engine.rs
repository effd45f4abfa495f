use glowcard_model::{CatalogQuery, Professional};

use super::filtering::{fold_case, matches_facet, matches_search};
use super::sorting::sort_professionals;

/// Filter and sort `records` for `query`.
///
/// The input is never modified; surviving records are cloned into the
/// returned projection. Given the same inputs the output order is always the
/// same, independent of the input order of tied records.
pub fn project(
    records: &[Professional],
    query: &CatalogQuery,
) -> Vec<Professional> {
    let folded_term = fold_case(&query.search);

    let mut survivors: Vec<&Professional> = records
        .iter()
        .filter(|pro| matches_search(pro, &folded_term))
        .filter(|pro| matches_facet(&pro.specialty, &query.specialties))
        .filter(|pro| matches_facet(&pro.location, &query.locations))
        .collect();

    sort_professionals(&mut survivors, query.sort_by, query.order);

    tracing::trace!(
        total = records.len(),
        kept = survivors.len(),
        sort_by = %query.sort_by,
        "catalog projection computed"
    );

    survivors.into_iter().cloned().collect()
}
