use super::prelude::*;

#[derive(Debug, Clone, PartialEq)]
pub struct VenueDetail {
    pub venue: Venue,
    /// Directions to the venue.
    pub map_link: MapLink,
}

impl From<Venue> for VenueDetail {
    fn from(venue: Venue) -> Self {
        let map_link = venue.map_link();
        Self { venue, map_link }
    }
}

// Venues are looked up by slug alone, the region segment of
// the path is not used for filtering.
fn venue_query(visibility: Visibility, slug: &str) -> VenueQuery {
    VenueQuery::new()
        .slug(slug)
        .status(visibility.venue_status())
}

pub fn resolve_venue_detail<G: VenueGateway>(
    gw: &G,
    visibility: Visibility,
    slug: &str,
) -> Resolution<VenueDetail> {
    if slug.is_empty() {
        return Resolution::NotFound;
    }
    let venue = gw.load_single_venue(&venue_query(visibility, slug));
    Resolution::from_primary_lookup(venue, format_args!("venue '{slug}'")).map(Into::into)
}

pub fn resolve_venue_meta<G: VenueGateway>(
    gw: &G,
    site: &SiteInfo,
    visibility: Visibility,
    slug: &str,
) -> Option<PageMeta> {
    if slug.is_empty() {
        return None;
    }
    let meta = gw
        .load_single_summary(&venue_query(visibility, slug))
        .map(|summary| summary.map(|s| site.venue_meta(&s)));
    PageMeta::from_lookup(meta, format_args!("venue '{slug}'"))
}

pub fn resolve_venue_page<G: VenueGateway>(
    gw: &G,
    site: &SiteInfo,
    visibility: Visibility,
    slug: &str,
) -> Resolution<Page<VenueDetail>> {
    Page::merge(
        resolve_venue_detail(gw, visibility, slug),
        resolve_venue_meta(gw, site, visibility, slug),
    )
}
