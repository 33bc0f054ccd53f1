use super::prelude::*;

use anyhow::anyhow;
use std::{
    cell::{Cell, RefCell},
    cmp,
};

pub use courtdir_entities::builders::Builder;

/// In-memory record store that follows the gateway contract.
#[derive(Default)]
pub struct MockDb {
    pub venues: RefCell<Vec<Venue>>,
    // Simulated outages of the full-row and of the
    // projected queries respectively.
    pub venues_unavailable: Cell<bool>,
    pub summaries_unavailable: Cell<bool>,
    pub queries: RefCell<Vec<VenueQuery>>,
}

impl MockDb {
    pub fn with_venues(venues: Vec<Venue>) -> Self {
        Self {
            venues: RefCell::new(venues),
            ..Default::default()
        }
    }

    pub fn set_unavailable(&self) {
        self.venues_unavailable.set(true);
        self.summaries_unavailable.set(true);
    }

    fn select(&self, query: &VenueQuery, unavailable: bool) -> Result<Vec<Venue>> {
        self.queries.borrow_mut().push(query.clone());
        if unavailable {
            return Err(anyhow!("The record store is unreachable").into());
        }
        let mut rows: Vec<_> = self
            .venues
            .borrow()
            .iter()
            .filter(|v| matches_filters(query, v))
            .cloned()
            .collect();
        if let Some(order) = query.order {
            // Stable sort: ties keep the natural order
            rows.sort_by(|a, b| compare(order, a, b));
        }
        if let Some(limit) = query.limit {
            rows.truncate(limit as usize);
        }
        Ok(rows)
    }
}

fn matches_filters(query: &VenueQuery, venue: &Venue) -> bool {
    let VenueQuery {
        slug,
        state_slug,
        status,
        ..
    } = query;
    slug.as_ref().map_or(true, |s| *s == venue.slug)
        && state_slug.as_ref().map_or(true, |s| *s == venue.state_slug)
        && status.map_or(true, |s| s == venue.status)
}

fn compare(order: Ordering, a: &Venue, b: &Venue) -> cmp::Ordering {
    let ord = match order.field {
        SortField::Name => a.name.cmp(&b.name),
        SortField::City => a.city.cmp(&b.city),
        SortField::State => a.state.cmp(&b.state),
    };
    match order.direction {
        SortDirection::Ascending => ord,
        SortDirection::Descending => ord.reverse(),
    }
}

impl VenueGateway for MockDb {
    fn load_venues(&self, query: &VenueQuery) -> Result<Vec<Venue>> {
        self.select(query, self.venues_unavailable.get())
    }

    fn load_venue_summaries(&self, query: &VenueQuery) -> Result<Vec<VenueSummary>> {
        Ok(self
            .select(query, self.summaries_unavailable.get())?
            .into_iter()
            .map(VenueSummary::from)
            .collect())
    }

    fn load_keys(&self, key: VenueKey, query: &VenueQuery) -> Result<Vec<String>> {
        Ok(self
            .select(query, self.venues_unavailable.get())?
            .into_iter()
            .map(|v| match key {
                VenueKey::Slug => v.slug,
                VenueKey::StateSlug => v.state_slug,
            })
            .collect())
    }
}

pub fn venue(slug: &str, state: &str, city: &str) -> Venue {
    Venue::build()
        .slug(slug)
        .name(&format!("Courts {slug}"))
        .state(state)
        .city(city)
        .finish()
}

pub fn unpublished(venue: Venue) -> Venue {
    Venue {
        status: VenueStatus::Draft,
        ..venue
    }
}

#[test]
fn mock_db_orders_stable() {
    let db = MockDb::with_venues(vec![
        venue("c", "Utah", "Provo"),
        venue("a", "Utah", "Ogden"),
        venue("b", "Utah", "Provo"),
    ]);
    let query = VenueQuery::new().order_by(SortField::City, SortDirection::Ascending);
    let slugs: Vec<_> = db
        .load_venues(&query)
        .unwrap()
        .into_iter()
        .map(|v| v.slug)
        .collect();
    assert_eq!(vec!["a", "c", "b"], slugs);
}
