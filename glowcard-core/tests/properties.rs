//! Property-based tests for projection, pagination and carousel windowing.

use std::collections::HashSet;
use std::time::Duration;

use glowcard_core::carousel::WindowState;
use glowcard_core::pagination::paginate;
use glowcard_core::query::project;
use glowcard_core::{CatalogQuery, PageState, Professional, ProfessionalID, SortBy, SortOrder};
use proptest::prelude::*;

// ============================================================================
// Strategies
// ============================================================================

const SPECIALTIES: &[&str] = &["Lash Designer", "Nail Artist", "Brow Specialist", ""];
const LOCATIONS: &[&str] = &["Recife, PE", "São Luís, MA", "Natal, RN", ""];

fn sort_by_strategy() -> impl Strategy<Value = SortBy> {
    prop::sample::select(SortBy::all().to_vec())
}

fn sort_order_strategy() -> impl Strategy<Value = SortOrder> {
    prop_oneof![Just(SortOrder::Ascending), Just(SortOrder::Descending)]
}

/// Records without ids; ids are assigned by position so they stay unique.
fn record_fields() -> impl Strategy<
    Value = (String, &'static str, &'static str, Option<f32>, Option<u32>, Option<f64>),
> {
    (
        "[A-Za-zé ]{0,8}",
        prop::sample::select(SPECIALTIES),
        prop::sample::select(LOCATIONS),
        prop::option::of(prop::sample::select(vec![1.0f32, 2.5, 3.0, 4.0, 4.5, 5.0])),
        prop::option::of(0u32..20),
        // Half-step ranks so fractional and tied ranks both occur.
        prop::option::of((-6i32..8).prop_map(|n| f64::from(n) / 2.0)),
    )
}

fn records_strategy(max: usize) -> impl Strategy<Value = Vec<Professional>> {
    prop::collection::vec(record_fields(), 0..max).prop_map(|fields| {
        fields
            .into_iter()
            .enumerate()
            .map(|(i, (name, specialty, location, rating, years, order))| {
                let mut pro = Professional::new(
                    ProfessionalID::new(format!("pro-{i}")).unwrap(),
                    name,
                )
                .with_specialty(specialty)
                .with_location(location);
                pro.rating = rating;
                pro.years_experience = years;
                pro.order = order;
                pro
            })
            .collect()
    })
}

fn query_strategy() -> impl Strategy<Value = CatalogQuery> {
    (
        "[a-zé ]{0,3}",
        sort_by_strategy(),
        sort_order_strategy(),
        prop::collection::btree_set(prop::sample::select(SPECIALTIES), 0..2),
        prop::collection::btree_set(prop::sample::select(LOCATIONS), 0..2),
    )
        .prop_map(|(search, sort_by, order, specialties, locations)| CatalogQuery {
            search,
            sort_by,
            order,
            specialties: specialties.into_iter().map(String::from).collect(),
            locations: locations.into_iter().map(String::from).collect(),
        })
}

fn ids(records: &[Professional]) -> Vec<String> {
    records.iter().map(|p| p.id.to_string()).collect()
}

// ============================================================================
// Projection
// ============================================================================

proptest! {
    /// Appending characters to the search term can only narrow the result.
    #[test]
    fn search_is_monotonic(
        records in records_strategy(40),
        prefix in "[a-zé ]{0,3}",
        suffix in "[a-z]{1,3}",
    ) {
        let broad = CatalogQuery { search: prefix.clone(), ..Default::default() };
        let narrow = CatalogQuery { search: format!("{prefix}{suffix}"), ..Default::default() };

        let broad_ids: HashSet<_> = ids(&project(&records, &broad)).into_iter().collect();
        for id in ids(&project(&records, &narrow)) {
            prop_assert!(broad_ids.contains(&id), "{id} matched the longer term only");
        }
    }

    /// Projecting a projection with the same query changes nothing.
    #[test]
    fn projection_is_idempotent(records in records_strategy(40), query in query_strategy()) {
        let once = project(&records, &query);
        let twice = project(&once, &query);
        prop_assert_eq!(once, twice);
    }

    /// Output order is fully determined by the records, not their input order.
    #[test]
    fn sort_is_deterministic(records in records_strategy(40), query in query_strategy()) {
        let first = project(&records, &query);
        prop_assert_eq!(&first, &project(&records, &query));

        let mut reversed = records.clone();
        reversed.reverse();
        prop_assert_eq!(ids(&first), ids(&project(&reversed, &query)));
    }

    /// Filtering never invents or duplicates records.
    #[test]
    fn projection_is_a_subset(records in records_strategy(40), query in query_strategy()) {
        let all: HashSet<_> = ids(&records).into_iter().collect();
        let projected = ids(&project(&records, &query));
        let unique: HashSet<_> = projected.iter().cloned().collect();
        prop_assert_eq!(unique.len(), projected.len());
        prop_assert!(unique.is_subset(&all));
    }
}

// ============================================================================
// Pagination
// ============================================================================

proptest! {
    /// Concatenating every page rebuilds the projection exactly.
    #[test]
    fn pages_cover_the_projection(len in 0usize..80, page_size in 1usize..12) {
        let projection: Vec<usize> = (0..len).collect();
        let mut state = PageState::new(page_size, true).unwrap();
        let total_pages = state.total_pages_for(len);
        prop_assert_eq!(total_pages, len.div_ceil(page_size));

        let mut rebuilt = Vec::with_capacity(len);
        for page in 1..=total_pages {
            state.set_current_page(page);
            let slice = paginate(&projection, &state);
            prop_assert_eq!(slice.total_pages, total_pages);
            prop_assert!(!slice.items.is_empty());
            prop_assert!(slice.items.len() <= page_size);
            rebuilt.extend(slice.items);
        }
        prop_assert_eq!(rebuilt, projection);
    }

    /// Pages past the end are empty rather than panicking.
    #[test]
    fn pages_past_the_end_are_empty(len in 0usize..40, page_size in 1usize..8, extra in 1usize..5) {
        let projection: Vec<usize> = (0..len).collect();
        let mut state = PageState::new(page_size, true).unwrap();
        state.set_current_page(state.total_pages_for(len) + extra);
        prop_assert!(paginate(&projection, &state).items.is_empty());
    }
}

// ============================================================================
// Carousel windowing
// ============================================================================

proptest! {
    /// Focus stays in bounds and the guards always describe the boundary.
    #[test]
    fn window_focus_stays_in_bounds(
        window_size in 1usize..=3,
        item_count in 0usize..20,
        steps in prop::collection::vec(any::<bool>(), 0..60),
    ) {
        let mut state = WindowState::new(window_size, Duration::ZERO);
        state.set_item_count(item_count);

        for forward in steps {
            let before = state.clone();
            let moved = if forward { state.advance() } else { state.retreat() };

            if forward {
                prop_assert_eq!(moved, before.can_go_next());
            } else {
                prop_assert_eq!(moved, before.can_go_previous());
            }
            if item_count == 0 {
                prop_assert_eq!(state.focused_index(), 0);
            } else {
                prop_assert!(state.focused_index() < item_count);
            }
            prop_assert_eq!(state.can_go_next(), state.focused_index() + 1 < item_count);
            prop_assert_eq!(state.can_go_previous(), state.focused_index() > 0);
            prop_assert!(state.visible_range().end <= item_count);
        }
    }

    /// Stepping past either end leaves the state untouched.
    #[test]
    fn window_steps_at_the_ends_are_no_ops(
        window_size in 1usize..=3,
        item_count in 1usize..20,
    ) {
        let mut state = WindowState::new(window_size, Duration::ZERO);
        state.set_item_count(item_count);

        let at_start = state.clone();
        prop_assert!(!state.retreat());
        prop_assert_eq!(&state, &at_start);

        while state.advance() {}
        prop_assert_eq!(state.focused_index(), item_count - 1);
        let at_end = state.clone();
        prop_assert!(!state.advance());
        prop_assert_eq!(&state, &at_end);
    }
}
