// Low-level, read-only access to the venue records.
// The record store itself is an external collaborator,
// only the contract of its query capability is defined
// here: equality filters, ordering by a single field,
// projections and "many rows" or "single row" fetches.

use crate::entities::*;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("The requested object could not be found")]
    NotFound,
    #[error("Expected at most a single record but found {0}")]
    MultipleMatches(usize),
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SortField {
    Name,
    City,
    State,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum SortDirection {
    #[default]
    Ascending,
    Descending,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Ordering {
    pub field: SortField,
    pub direction: SortDirection,
}

/// Single-column projections.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum VenueKey {
    Slug,
    StateSlug,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VenueQuery {
    // All filters are equality filters and combined with AND.
    // None means: don't filter by this column.
    pub slug: Option<String>,
    pub state_slug: Option<String>,
    pub status: Option<VenueStatus>,
    // None: the natural order of the store
    pub order: Option<Ordering>,
    pub limit: Option<u64>,
}

impl VenueQuery {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn slug(mut self, slug: impl Into<String>) -> Self {
        self.slug = Some(slug.into());
        self
    }

    pub fn state_slug(mut self, state_slug: impl Into<String>) -> Self {
        self.state_slug = Some(state_slug.into());
        self
    }

    pub fn status(mut self, status: impl Into<Option<VenueStatus>>) -> Self {
        self.status = status.into();
        self
    }

    pub fn order_by(mut self, field: SortField, direction: SortDirection) -> Self {
        self.order = Some(Ordering { field, direction });
        self
    }

    pub fn limit(mut self, limit: u64) -> Self {
        self.limit = Some(limit);
        self
    }
}

pub trait VenueGateway {
    /// All columns.
    fn load_venues(&self, query: &VenueQuery) -> Result<Vec<Venue>>;

    /// Only the descriptive columns, see [`VenueSummary`].
    fn load_venue_summaries(&self, query: &VenueQuery) -> Result<Vec<VenueSummary>>;

    /// A single key column, e.g. all slugs of a region.
    fn load_keys(&self, key: VenueKey, query: &VenueQuery) -> Result<Vec<String>>;

    // Single row or none. More than one matching row
    // is reported as an error and never silently
    // truncated.
    fn load_single_venue(&self, query: &VenueQuery) -> Result<Option<Venue>> {
        single_row(self.load_venues(query)?)
    }

    fn load_single_summary(&self, query: &VenueQuery) -> Result<Option<VenueSummary>> {
        single_row(self.load_venue_summaries(query)?)
    }
}

fn single_row<T>(rows: Vec<T>) -> Result<Option<T>> {
    match rows.len() {
        0 | 1 => Ok(rows.into_iter().next()),
        n => Err(Error::MultipleMatches(n)),
    }
}
