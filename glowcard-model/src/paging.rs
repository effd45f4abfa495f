use crate::error::{ModelError, Result};

/// Number of items shown when pagination is disabled.
pub const CONTINUOUS_PAGE_CAP: usize = 12;

/// Pagination settings and the currently selected page (1-based).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageState {
    current_page: usize,
    page_size: usize,
    pub pagination_enabled: bool,
}

impl PageState {
    /// A zero page size is rejected so page counts never divide by zero.
    pub fn new(page_size: usize, pagination_enabled: bool) -> Result<Self> {
        if page_size == 0 {
            return Err(ModelError::InvalidPageSize(page_size));
        }
        Ok(Self {
            current_page: 1,
            page_size,
            pagination_enabled,
        })
    }

    pub fn current_page(&self) -> usize {
        self.current_page
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    /// Select a page without range checks beyond the 1-based floor. Callers
    /// that know the page count should clamp first.
    pub fn set_current_page(&mut self, page: usize) {
        self.current_page = page.max(1);
    }

    /// Number of pages needed for `len` items. Zero for an empty projection,
    /// always one when pagination is disabled.
    pub fn total_pages_for(&self, len: usize) -> usize {
        if !self.pagination_enabled {
            return 1;
        }
        len.div_ceil(self.page_size)
    }
}

impl Default for PageState {
    fn default() -> Self {
        Self {
            current_page: 1,
            page_size: 9,
            pagination_enabled: true,
        }
    }
}

/// One page of a projection.
#[derive(Debug, Clone, PartialEq)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub total_pages: usize,
}

impl<T> Page<T> {
    /// Page count as shown to users: an empty result still reads "page 1 of 1".
    pub fn display_total_pages(&self) -> usize {
        self.total_pages.max(1)
    }
}
