//! FILENAME: app/src/data_source.rs
// PURPOSE: The seam between the engine and whatever supplies records.
// CONTEXT: A backend, or the mock generator in development and tests. A fetch
// failure is recoverable: callers keep their filter state and may retry.

use crate::api_types::{FilterOptions, RecordPage};
use hierarchy::HierarchyStore;
use query_engine::FilterSet;

/// Errors a data source may surface. None of them invalidate the caller's
/// filter state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SourceError {
    /// Network or backend failure; retryable.
    Upstream(String),
}

impl std::fmt::Display for SourceError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SourceError::Upstream(msg) => write!(f, "upstream fetch failed: {}", msg),
        }
    }
}

impl std::error::Error for SourceError {}

/// What the engine consumes from the outside world.
pub trait DataSource {
    /// A page of records matching the filter set, with pagination meta.
    fn list_records(
        &self,
        filters: &FilterSet,
        page: usize,
        limit: usize,
    ) -> Result<RecordPage, SourceError>;

    /// Distinct values for the non-hierarchy attribute selectors.
    fn list_filter_options(&self) -> Result<FilterOptions, SourceError>;

    /// The full location tree, fetched once per session.
    fn get_hierarchy(&self) -> Result<HierarchyStore, SourceError>;
}
