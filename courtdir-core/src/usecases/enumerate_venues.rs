use super::{enumerate_regions::distinct_keys, prelude::*};

/// Slugs of all venues in a region that are reachable under the
/// given visibility.
pub fn enumerate_venues_in_region<G: VenueGateway>(
    gw: &G,
    visibility: Visibility,
    region: &str,
) -> Vec<String> {
    if region.is_empty() {
        return vec![];
    }
    let query = VenueQuery::new()
        .state_slug(region)
        .status(visibility.venue_status());
    match gw.load_keys(VenueKey::Slug, &query) {
        Ok(keys) => distinct_keys(keys, "venue"),
        Err(err) => {
            log::warn!("Failed to enumerate venues of region '{region}': {err}");
            vec![]
        }
    }
}
