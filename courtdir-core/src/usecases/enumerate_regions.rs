use std::collections::BTreeSet;

use super::prelude::*;

/// Identifiers of all regions with at least one published venue.
///
/// The result is free of duplicates and sorted. If the store cannot
/// be queried no regions are enumerated.
pub fn enumerate_regions<G: VenueGateway>(gw: &G) -> Vec<String> {
    let query = VenueQuery::new().status(LISTING_STATUS);
    match gw.load_keys(VenueKey::StateSlug, &query) {
        Ok(keys) => distinct_keys(keys, "region"),
        Err(err) => {
            log::warn!("Failed to enumerate regions: {err}");
            vec![]
        }
    }
}

// Blank keys would address the parent page and are skipped.
pub(crate) fn distinct_keys(keys: Vec<String>, kind: &str) -> Vec<String> {
    let blank_count = keys.iter().filter(|k| k.trim().is_empty()).count();
    if blank_count > 0 {
        log::warn!("Skipping {blank_count} records with a blank {kind} identifier");
    }
    keys.into_iter()
        .filter(|k| !k.trim().is_empty())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}
