use super::prelude::*;

#[derive(Debug, Clone, PartialEq)]
pub struct RegionListing {
    pub region: Region,
    /// Published venues ordered by city.
    pub venues: Vec<Venue>,
}

/// Body of a region listing page.
///
/// A region without published venues is not found, an empty listing
/// is never rendered.
pub fn resolve_region_listing<G: VenueGateway>(gw: &G, region: &str) -> Resolution<RegionListing> {
    if region.is_empty() {
        return Resolution::NotFound;
    }
    let query = VenueQuery::new()
        .state_slug(region)
        .status(LISTING_STATUS)
        .order_by(SortField::City, SortDirection::Ascending);
    let venues = gw
        .load_venues(&query)
        .map(|venues| (!venues.is_empty()).then_some(venues));
    Resolution::from_primary_lookup(venues, format_args!("region '{region}'")).map(|venues| {
        let name = venues[0].state.clone();
        RegionListing {
            region: Region {
                slug: region.to_owned(),
                name,
            },
            venues,
        }
    })
}

/// Metadata of a region listing page, derived from any published
/// venue of the region.
pub fn resolve_region_meta<G: VenueGateway>(
    gw: &G,
    site: &SiteInfo,
    region: &str,
) -> Option<PageMeta> {
    if region.is_empty() {
        return None;
    }
    let query = VenueQuery::new()
        .state_slug(region)
        .status(LISTING_STATUS)
        .limit(1);
    let meta = gw
        .load_venue_summaries(&query)
        .map(|summaries| summaries.first().map(|s| site.region_meta(&s.state)));
    PageMeta::from_lookup(meta, format_args!("region '{region}'"))
}

pub fn resolve_region_page<G: VenueGateway>(
    gw: &G,
    site: &SiteInfo,
    region: &str,
) -> Resolution<Page<RegionListing>> {
    Page::merge(
        resolve_region_listing(gw, region),
        resolve_region_meta(gw, site, region),
    )
}

#[cfg(test)]
mod tests {
    use super::{
        super::tests::{unpublished, venue, MockDb},
        *,
    };

    fn slugs(listing: &RegionListing) -> Vec<&str> {
        listing.venues.iter().map(|v| v.slug.as_str()).collect()
    }

    #[test]
    fn list_venues_ordered_by_city() {
        let db = MockDb::with_venues(vec![
            venue("a", "Utah", "Provo"),
            venue("b", "Utah", "Ogden"),
        ]);
        let listing = resolve_region_listing(&db, "utah").into_option().unwrap();
        assert_eq!(vec!["b", "a"], slugs(&listing));
        assert_eq!("Utah", listing.region.name);
        assert_eq!("utah", listing.region.slug);
    }

    #[test]
    fn list_exactly_the_published_venues() {
        let db = MockDb::with_venues(vec![
            venue("a", "Utah", "Provo"),
            unpublished(venue("b", "Utah", "Logan")),
            venue("c", "Utah", "American Fork"),
            venue("d", "Idaho", "Boise"),
            venue("e", "Utah", "Provo"),
        ]);
        let listing = resolve_region_listing(&db, "utah").into_option().unwrap();
        assert_eq!(3, listing.venues.len());
        assert!(listing.venues.iter().all(|v| v.is_published()));
        assert!(listing
            .venues
            .windows(2)
            .all(|pair| pair[0].city <= pair[1].city));
        assert_eq!(vec!["c", "a", "e"], slugs(&listing));
    }

    #[test]
    fn region_without_records_is_not_found() {
        let db = MockDb::with_venues(vec![venue("a", "Utah", "Provo")]);
        assert!(resolve_region_listing(&db, "idaho").is_not_found());
        assert!(resolve_region_page(&db, &SiteInfo::default(), "idaho").is_not_found());
    }

    #[test]
    fn region_with_only_unpublished_records_is_not_found() {
        let db = MockDb::with_venues(vec![unpublished(venue("a", "Utah", "Provo"))]);
        assert!(resolve_region_listing(&db, "utah").is_not_found());
    }

    #[test]
    fn empty_region_is_not_found_without_querying() {
        let db = MockDb::with_venues(vec![venue("a", "Utah", "Provo")]);
        assert!(resolve_region_page(&db, &SiteInfo::default(), "").is_not_found());
        assert!(db.queries.borrow().is_empty());
    }

    #[test]
    fn region_is_not_found_if_store_is_unavailable() {
        let db = MockDb::with_venues(vec![venue("a", "Utah", "Provo")]);
        db.venues_unavailable.set(true);
        assert!(resolve_region_page(&db, &SiteInfo::default(), "utah").is_not_found());
    }

    #[test]
    fn resolve_page_with_metadata() {
        let db = MockDb::with_venues(vec![venue("a", "Utah", "Provo")]);
        let page = resolve_region_page(&db, &SiteInfo::default(), "utah")
            .into_option()
            .unwrap();
        assert_eq!(
            Some("Pickleball Courts in Utah | Pickleball Playgrounds"),
            page.meta.title.as_deref()
        );
        assert_eq!(1, page.body.venues.len());
    }

    #[test]
    fn missing_metadata_does_not_affect_the_listing() {
        let db = MockDb::with_venues(vec![venue("a", "Utah", "Provo")]);
        db.summaries_unavailable.set(true);
        let page = resolve_region_page(&db, &SiteInfo::default(), "utah")
            .into_option()
            .unwrap();
        assert!(page.meta.is_empty());
        assert_eq!(1, page.body.venues.len());
    }

    #[test]
    fn metadata_is_queried_with_a_limit() {
        let db = MockDb::with_venues(vec![
            venue("a", "Utah", "Provo"),
            venue("b", "Utah", "Ogden"),
        ]);
        let meta = resolve_region_meta(&db, &SiteInfo::default(), "utah").unwrap();
        assert!(!meta.is_empty());
        assert_eq!(Some(1), db.queries.borrow()[0].limit);
        assert_eq!(None, resolve_region_meta(&db, &SiteInfo::default(), "idaho"));
    }
}
