//! Browse session: the state behind one catalog screen.
//!
//! A [`BrowseSession`] owns the loaded records, the active [`CatalogQuery`],
//! the cached projection, the pager and the per-breakpoint carousel windows.
//! Every user interaction maps to one method. Methods return `true` when
//! they changed something so callers know whether to re-render.
//!
//! Reset rules:
//! - a query change recomputes the projection, returns to page one and
//!   resets carousel navigation
//! - a page change resets carousel navigation
//! - replacing the records behaves like a query change

use std::sync::Arc;
use std::time::{Duration, Instant};

use glowcard_model::{
    Breakpoint, CatalogQuery, ModelError, Professional, SortBy, SortOrder,
};
use tracing::debug;

use crate::carousel::{CarouselRegistry, DEFAULT_TRANSITION_LOCK, DragStep};
use crate::error::PaginationError;
use crate::pagination::{PageInput, Paginator};
use crate::query::{Facets, project};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BrowseOptions {
    pub page_size: usize,
    pub pagination_enabled: bool,
    pub transition_lock: Duration,
}

impl Default for BrowseOptions {
    fn default() -> Self {
        Self {
            page_size: 9,
            pagination_enabled: true,
            transition_lock: DEFAULT_TRANSITION_LOCK,
        }
    }
}

/// What a renderer needs for the current page.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BrowseView<'a> {
    pub items: &'a [Professional],
    pub current_page: usize,
    /// Never below one, even for an empty projection.
    pub total_pages: usize,
    /// Records matching the query.
    pub result_count: usize,
    /// Records loaded, before filtering.
    pub total_count: usize,
    pub can_go_next_page: bool,
    pub can_go_previous_page: bool,
}

#[derive(Debug, Clone)]
pub struct BrowseSession {
    records: Arc<Vec<Professional>>,
    query: CatalogQuery,
    projection: Vec<Professional>,
    facets: Facets,
    pager: Paginator,
    page_input: PageInput,
    carousel: CarouselRegistry,
}

impl BrowseSession {
    /// Fails only for a zero page size.
    pub fn new(options: BrowseOptions) -> Result<Self, ModelError> {
        Ok(Self {
            records: Arc::new(Vec::new()),
            query: CatalogQuery::default(),
            projection: Vec::new(),
            facets: Facets::default(),
            pager: Paginator::new(options.page_size, options.pagination_enabled)?,
            page_input: PageInput::new(1),
            carousel: CarouselRegistry::new(options.transition_lock),
        })
    }

    pub fn with_records(
        options: BrowseOptions,
        records: Arc<Vec<Professional>>,
    ) -> Result<Self, ModelError> {
        let mut session = Self::new(options)?;
        session.replace_records(records);
        Ok(session)
    }

    pub fn records(&self) -> &[Professional] {
        &self.records
    }

    pub fn query(&self) -> &CatalogQuery {
        &self.query
    }

    pub fn projection(&self) -> &[Professional] {
        &self.projection
    }

    /// Filter options derived from all loaded records.
    pub fn facets(&self) -> &Facets {
        &self.facets
    }

    pub fn paginator(&self) -> &Paginator {
        &self.pager
    }

    pub fn page_input(&self) -> &PageInput {
        &self.page_input
    }

    pub fn carousel(&self) -> &CarouselRegistry {
        &self.carousel
    }

    /// Swap in a new record set, e.g. after a catalog refetch.
    pub fn replace_records(&mut self, records: Arc<Vec<Professional>>) {
        self.records = records;
        self.facets = Facets::from_records(&self.records);
        self.refresh_projection();
    }

    pub fn set_search(&mut self, term: impl Into<String>) -> bool {
        let term = term.into();
        if term == self.query.search {
            return false;
        }
        let mut query = self.query.clone();
        query.search = term;
        self.apply_query(query)
    }

    /// Switch the sort field, picking the field's natural direction.
    pub fn set_sort(&mut self, sort_by: SortBy) -> bool {
        let mut query = self.query.clone();
        query.sort_by = sort_by;
        query.order = sort_by.preferred_order();
        self.apply_query(query)
    }

    pub fn set_sort_order(&mut self, order: SortOrder) -> bool {
        let mut query = self.query.clone();
        query.order = order;
        self.apply_query(query)
    }

    pub fn toggle_sort_order(&mut self) -> bool {
        self.set_sort_order(self.query.order.toggled())
    }

    pub fn toggle_specialty(&mut self, specialty: &str) -> bool {
        let mut query = self.query.clone();
        if !query.specialties.remove(specialty) {
            query.specialties.insert(specialty.to_string());
        }
        self.apply_query(query)
    }

    pub fn toggle_location(&mut self, location: &str) -> bool {
        let mut query = self.query.clone();
        if !query.locations.remove(location) {
            query.locations.insert(location.to_string());
        }
        self.apply_query(query)
    }

    /// Clear search and facet selections. The sort is kept.
    pub fn clear_filters(&mut self) -> bool {
        let mut query = self.query.clone();
        query.search.clear();
        query.specialties.clear();
        query.locations.clear();
        self.apply_query(query)
    }

    /// Replace the whole query at once.
    pub fn set_query(&mut self, query: CatalogQuery) -> bool {
        self.apply_query(query)
    }

    pub fn go_to_page(&mut self, page: usize) -> bool {
        let changed = self.pager.go_to(page);
        self.after_page_change(changed)
    }

    pub fn next_page(&mut self) -> bool {
        let changed = self.pager.next();
        self.after_page_change(changed)
    }

    pub fn previous_page(&mut self) -> bool {
        let changed = self.pager.previous();
        self.after_page_change(changed)
    }

    pub fn edit_page_input(&mut self, text: impl Into<String>) {
        self.page_input.edit(text);
    }

    /// Jump to the typed page. Rejected input leaves the page unchanged.
    pub fn commit_page_input(&mut self) -> Result<usize, PaginationError> {
        let page = self.page_input.commit(self.pager.total_pages())?;
        self.go_to_page(page);
        Ok(page)
    }

    pub fn blur_page_input(&mut self) {
        self.page_input.blur();
    }

    pub fn advance(&mut self, breakpoint: Breakpoint) -> bool {
        self.carousel.advance(breakpoint)
    }

    pub fn advance_at(&mut self, breakpoint: Breakpoint, now: Instant) -> bool {
        self.carousel.advance_at(breakpoint, now)
    }

    pub fn retreat(&mut self, breakpoint: Breakpoint) -> bool {
        self.carousel.retreat(breakpoint)
    }

    pub fn retreat_at(&mut self, breakpoint: Breakpoint, now: Instant) -> bool {
        self.carousel.retreat_at(breakpoint, now)
    }

    pub fn apply_drag(&mut self, breakpoint: Breakpoint, step: DragStep) -> bool {
        self.carousel.apply_drag(breakpoint, step)
    }

    pub fn view(&self) -> BrowseView<'_> {
        BrowseView {
            items: self.pager.page_slice(&self.projection),
            current_page: self.pager.current_page(),
            total_pages: self.pager.display_total_pages(),
            result_count: self.projection.len(),
            total_count: self.records.len(),
            can_go_next_page: self.pager.can_go_next(),
            can_go_previous_page: self.pager.can_go_previous(),
        }
    }

    fn apply_query(&mut self, query: CatalogQuery) -> bool {
        if query == self.query {
            return false;
        }
        debug!(
            search = %query.search,
            sort = %query.sort_by,
            filters = query.active_filter_count(),
            "catalog query changed"
        );
        self.query = query;
        self.refresh_projection();
        true
    }

    fn refresh_projection(&mut self) {
        self.projection = project(&self.records, &self.query);
        self.pager.sync_len(self.projection.len());
        self.pager.reset();
        self.page_input.sync(self.pager.current_page());
        self.sync_carousel();
    }

    fn after_page_change(&mut self, changed: bool) -> bool {
        if changed {
            self.page_input.sync(self.pager.current_page());
            self.sync_carousel();
        }
        changed
    }

    fn sync_carousel(&mut self) {
        let on_page = self.pager.page_slice(&self.projection).len();
        self.carousel.set_item_count(on_page);
        self.carousel.reset_navigation();
    }
}
