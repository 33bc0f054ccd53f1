/// A top-level grouping of venues, e.g. a state.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Region {
    pub slug: String,
    pub name: String,
}

/// Entry of the root listing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegionSummary {
    pub region: Region,
    pub venue_count: usize,
}
