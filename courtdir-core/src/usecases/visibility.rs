use super::prelude::*;

/// Status required for region enumeration, region listings and the
/// root listing. Independent of [`Visibility`].
pub const LISTING_STATUS: VenueStatus = VenueStatus::Published;

/// Which venues are reachable by their slug.
///
/// Applied consistently by venue enumeration, venue detail and
/// venue metadata resolution.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Visibility {
    /// Venues of any status, only listings are restricted to
    /// published venues.
    #[default]
    ListingsOnly,
    /// Only published venues.
    Published,
}

impl Visibility {
    /// Status filter for lookups of individual venues.
    pub const fn venue_status(self) -> Option<VenueStatus> {
        match self {
            Self::Published => Some(LISTING_STATUS),
            Self::ListingsOnly => None,
        }
    }
}
