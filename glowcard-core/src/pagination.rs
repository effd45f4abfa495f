//! Page slicing over a projection.
//!
//! Two layouts share this module: hard pagination (`page_size` items per
//! page) and the continuous layout, which shows only the first
//! [`CONTINUOUS_PAGE_CAP`] items on a single page.

use glowcard_model::{CONTINUOUS_PAGE_CAP, ModelError, Page, PageState};
use tracing::debug;

use crate::error::PaginationError;

/// Index range of the current page within a projection of `len` items.
fn page_bounds(len: usize, state: &PageState) -> std::ops::Range<usize> {
    if !state.pagination_enabled {
        return 0..len.min(CONTINUOUS_PAGE_CAP);
    }
    let start = (state.current_page() - 1)
        .saturating_mul(state.page_size())
        .min(len);
    let end = start.saturating_add(state.page_size()).min(len);
    start..end
}

/// Cut the current page out of `projection`.
///
/// An out-of-range page yields an empty item list rather than panicking.
pub fn paginate<T: Clone>(projection: &[T], state: &PageState) -> Page<T> {
    Page {
        items: projection[page_bounds(projection.len(), state)].to_vec(),
        total_pages: state.total_pages_for(projection.len()),
    }
}

/// Borrowing variant of [`paginate`].
pub fn page_slice<'a, T>(projection: &'a [T], state: &PageState) -> &'a [T] {
    &projection[page_bounds(projection.len(), state)]
}

/// Page selection for one browsing session.
///
/// Tracks the page count of the latest projection so navigation can clamp.
#[derive(Debug, Clone)]
pub struct Paginator {
    state: PageState,
    total_pages: usize,
}

impl Paginator {
    pub fn new(
        page_size: usize,
        pagination_enabled: bool,
    ) -> Result<Self, ModelError> {
        Ok(Self {
            state: PageState::new(page_size, pagination_enabled)?,
            total_pages: 0,
        })
    }

    pub fn state(&self) -> &PageState {
        &self.state
    }

    pub fn current_page(&self) -> usize {
        self.state.current_page()
    }

    /// Raw page count; zero for an empty projection.
    pub fn total_pages(&self) -> usize {
        self.total_pages
    }

    /// Page count for display, never below one.
    pub fn display_total_pages(&self) -> usize {
        self.total_pages.max(1)
    }

    /// Record the size of a freshly computed projection. A current page that
    /// no longer exists is pulled back to the last page.
    pub fn sync_len(&mut self, len: usize) {
        self.total_pages = self.state.total_pages_for(len);
        let max_page = self.display_total_pages();
        if self.state.current_page() > max_page {
            debug!(
                from = self.state.current_page(),
                to = max_page,
                "current page clamped after projection shrank"
            );
            self.state.set_current_page(max_page);
        }
    }

    /// Back to page one. Returns whether the page changed.
    pub fn reset(&mut self) -> bool {
        self.go_to(1)
    }

    /// Select `page`, clamped into `1..=display_total_pages()`. Returns
    /// whether the page changed.
    pub fn go_to(&mut self, page: usize) -> bool {
        let target = page.clamp(1, self.display_total_pages());
        if target == self.state.current_page() {
            return false;
        }
        debug!(from = self.state.current_page(), to = target, "page changed");
        self.state.set_current_page(target);
        true
    }

    pub fn next(&mut self) -> bool {
        self.go_to(self.current_page().saturating_add(1))
    }

    pub fn previous(&mut self) -> bool {
        self.go_to(self.current_page().saturating_sub(1))
    }

    pub fn can_go_next(&self) -> bool {
        self.current_page() < self.total_pages
    }

    pub fn can_go_previous(&self) -> bool {
        self.current_page() > 1
    }

    pub fn paginate<T: Clone>(&self, projection: &[T]) -> Page<T> {
        paginate(projection, &self.state)
    }

    pub fn page_slice<'a, T>(&self, projection: &'a [T]) -> &'a [T] {
        page_slice(projection, &self.state)
    }
}

/// Text buffer behind a "go to page" field.
///
/// Edits are free-form; only a committed value that parses and lies within
/// the page range is accepted. Blurring the field restores the last
/// accepted page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageInput {
    buffer: String,
    committed: usize,
}

impl PageInput {
    pub fn new(current_page: usize) -> Self {
        Self {
            buffer: current_page.to_string(),
            committed: current_page,
        }
    }

    pub fn text(&self) -> &str {
        &self.buffer
    }

    pub fn committed(&self) -> usize {
        self.committed
    }

    pub fn edit(&mut self, text: impl Into<String>) {
        self.buffer = text.into();
    }

    /// Validate the buffer against `total_pages`. On success the value
    /// becomes the new committed page.
    pub fn commit(&mut self, total_pages: usize) -> Result<usize, PaginationError> {
        let raw = self.buffer.trim();
        let page: usize = raw
            .parse()
            .map_err(|_| PaginationError::NotANumber(raw.to_string()))?;
        let max_page = total_pages.max(1);
        if page < 1 || page > max_page {
            return Err(PaginationError::OutOfRange {
                page,
                total_pages: max_page,
            });
        }
        self.committed = page;
        self.buffer = page.to_string();
        Ok(page)
    }

    /// Drop uncommitted edits.
    pub fn blur(&mut self) {
        self.buffer = self.committed.to_string();
    }

    /// Follow a page change made elsewhere (buttons, query reset).
    pub fn sync(&mut self, current_page: usize) {
        self.committed = current_page;
        self.buffer = current_page.to_string();
    }
}
