use glowcard_model::{CatalogQuery, SortBy, SortOrder};

/// Fluent API for building catalog queries
#[derive(Debug, Clone, Default)]
pub struct CatalogQueryBuilder {
    query: CatalogQuery,
}

impl CatalogQueryBuilder {
    /// Create a new query builder
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from an existing query
    pub fn from_query(query: CatalogQuery) -> Self {
        Self { query }
    }

    // === Search methods ===

    /// Set the free-text search term
    pub fn search(mut self, text: impl Into<String>) -> Self {
        self.query.search = text.into();
        self
    }

    // === Filter methods ===

    /// Add a specialty to the specialty filter
    pub fn specialty(mut self, specialty: impl Into<String>) -> Self {
        self.query.specialties.insert(specialty.into());
        self
    }

    /// Replace the specialty filter
    pub fn specialties<I, S>(mut self, specialties: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.query.specialties = specialties.into_iter().map(Into::into).collect();
        self
    }

    /// Add a location to the location filter
    pub fn location(mut self, location: impl Into<String>) -> Self {
        self.query.locations.insert(location.into());
        self
    }

    /// Replace the location filter
    pub fn locations<I, S>(mut self, locations: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.query.locations = locations.into_iter().map(Into::into).collect();
        self
    }

    // === Sort methods ===

    /// Set sort field and order
    pub fn sort_by(mut self, field: SortBy, order: SortOrder) -> Self {
        self.query.sort_by = field;
        self.query.order = order;
        self
    }

    /// Set sort field with the order a picker would preselect for it
    pub fn sort_by_preferred(self, field: SortBy) -> Self {
        self.sort_by(field, field.preferred_order())
    }

    // === Build method ===

    /// Build the final query
    pub fn build(self) -> CatalogQuery {
        self.query
    }
}

// === Convenience constructors ===

/// Plain text search over the default ordering
pub fn search_query(text: impl Into<String>) -> CatalogQuery {
    CatalogQueryBuilder::new().search(text).build()
}

/// Top-rated first
pub fn top_rated() -> CatalogQuery {
    CatalogQueryBuilder::new()
        .sort_by_preferred(SortBy::Rating)
        .build()
}
