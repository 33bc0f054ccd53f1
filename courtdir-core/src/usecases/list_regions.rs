use std::collections::BTreeMap;

use super::prelude::*;

/// All regions with published venues for the root listing.
///
/// Sorted by display name. The slugs are exactly those of
/// [`enumerate_regions`](super::enumerate_regions).
pub fn list_regions<G: VenueGateway>(gw: &G) -> Vec<RegionSummary> {
    let query = VenueQuery::new()
        .status(LISTING_STATUS)
        .order_by(SortField::State, SortDirection::Ascending);
    let summaries = match gw.load_venue_summaries(&query) {
        Ok(summaries) => summaries,
        Err(err) => {
            log::warn!("Failed to list regions: {err}");
            return vec![];
        }
    };
    let mut regions: BTreeMap<String, RegionSummary> = BTreeMap::new();
    for VenueSummary {
        state, state_slug, ..
    } in summaries
    {
        if state_slug.trim().is_empty() {
            continue;
        }
        regions
            .entry(state_slug)
            .or_insert_with_key(|slug| RegionSummary {
                region: Region {
                    slug: slug.clone(),
                    name: state,
                },
                venue_count: 0,
            })
            .venue_count += 1;
    }
    let mut regions: Vec<_> = regions.into_values().collect();
    regions.sort_by(|a, b| {
        a.region
            .name
            .cmp(&b.region.name)
            .then_with(|| a.region.slug.cmp(&b.region.slug))
    });
    regions
}

/// The root listing page never resolves to not found, an empty
/// directory is still a directory.
pub fn resolve_root_page<G: VenueGateway>(gw: &G, site: &SiteInfo) -> Page<Vec<RegionSummary>> {
    Page {
        meta: site.root_meta(),
        body: list_regions(gw),
    }
}

#[cfg(test)]
mod tests {
    use super::{
        super::{
            enumerate_regions,
            tests::{unpublished, venue, MockDb},
        },
        *,
    };

    fn db() -> MockDb {
        MockDb::with_venues(vec![
            venue("a", "Utah", "Provo"),
            venue("b", "Utah", "Ogden"),
            venue("c", "Arizona", "Mesa"),
            unpublished(venue("d", "Arizona", "Tempe")),
            unpublished(venue("e", "Idaho", "Boise")),
        ])
    }

    #[test]
    fn list_regions_with_published_venue_counts() {
        let regions = list_regions(&db());
        assert_eq!(
            vec![("arizona", "Arizona", 1), ("utah", "Utah", 2)],
            regions
                .iter()
                .map(|r| (r.region.slug.as_str(), r.region.name.as_str(), r.venue_count))
                .collect::<Vec<_>>()
        );
    }

    #[test]
    fn listed_regions_equal_enumerated_regions() {
        let db = db();
        let mut listed: Vec<_> = list_regions(&db)
            .into_iter()
            .map(|r| r.region.slug)
            .collect();
        listed.sort();
        assert_eq!(enumerate_regions(&db), listed);
    }

    #[test]
    fn root_page_of_unavailable_store_is_empty() {
        let db = db();
        db.set_unavailable();
        let page = resolve_root_page(&db, &SiteInfo::default());
        assert!(page.body.is_empty());
        assert_eq!(Some("Pickleball Playgrounds"), page.meta.title.as_deref());
    }
}
