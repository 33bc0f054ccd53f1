use super::*;

use schema::venues::{self, dsl};

impl<'a> VenueGateway for DbReadOnly<'a> {
    fn load_venues(&self, query: &VenueQuery) -> Result<Vec<Venue>> {
        load_venues(&mut self.conn.borrow_mut(), query)
    }
    fn load_venue_summaries(&self, query: &VenueQuery) -> Result<Vec<VenueSummary>> {
        load_venue_summaries(&mut self.conn.borrow_mut(), query)
    }
    fn load_keys(&self, key: VenueKey, query: &VenueQuery) -> Result<Vec<String>> {
        load_keys(&mut self.conn.borrow_mut(), key, query)
    }
}

impl<'a> VenueGateway for DbReadWrite<'a> {
    fn load_venues(&self, query: &VenueQuery) -> Result<Vec<Venue>> {
        load_venues(&mut self.conn.borrow_mut(), query)
    }
    fn load_venue_summaries(&self, query: &VenueQuery) -> Result<Vec<VenueSummary>> {
        load_venue_summaries(&mut self.conn.borrow_mut(), query)
    }
    fn load_keys(&self, key: VenueKey, query: &VenueQuery) -> Result<Vec<String>> {
        load_keys(&mut self.conn.borrow_mut(), key, query)
    }
}

fn filtered_query(query: &VenueQuery) -> venues::BoxedQuery<'_, Sqlite> {
    let VenueQuery {
        slug,
        state_slug,
        status,
        order,
        limit,
    } = query;
    let mut q = venues::table.into_boxed();
    if let Some(slug) = slug {
        q = q.filter(dsl::slug.eq(slug.as_str()));
    }
    if let Some(state_slug) = state_slug {
        q = q.filter(dsl::state_slug.eq(state_slug.as_str()));
    }
    if let Some(status) = status {
        q = q.filter(dsl::status.eq(status.to_string()));
    }
    if let Some(Ordering { field, direction }) = order {
        use SortDirection as Dir;
        use SortField as F;
        q = match (field, direction) {
            (F::Name, Dir::Ascending) => q.order_by(dsl::name.asc()),
            (F::Name, Dir::Descending) => q.order_by(dsl::name.desc()),
            (F::City, Dir::Ascending) => q.order_by(dsl::city.asc()),
            (F::City, Dir::Descending) => q.order_by(dsl::city.desc()),
            (F::State, Dir::Ascending) => q.order_by(dsl::state.asc()),
            (F::State, Dir::Descending) => q.order_by(dsl::state.desc()),
        };
    }
    // Ties and unordered queries follow the insertion order
    q = q.then_order_by(dsl::rowid.asc());
    if let Some(limit) = limit {
        q = q.limit(i64::try_from(*limit).unwrap_or(i64::MAX));
    }
    q
}

fn load_venues(conn: &mut SqliteConnection, query: &VenueQuery) -> Result<Vec<Venue>> {
    let rows = filtered_query(query)
        .select((
            dsl::id,
            dsl::name,
            dsl::slug,
            dsl::state,
            dsl::state_slug,
            dsl::city,
            dsl::address,
            dsl::lat,
            dsl::lng,
            dsl::indoor_outdoor,
            dsl::price_type,
            dsl::num_courts,
            dsl::description,
            dsl::image_url,
            dsl::lighting,
            dsl::featured,
            dsl::status,
        ))
        .load::<models::Venue>(conn)
        .map_err(from_diesel_err)?;
    Ok(rows.into_iter().map(load_venue).collect())
}

fn load_venue_summaries(
    conn: &mut SqliteConnection,
    query: &VenueQuery,
) -> Result<Vec<VenueSummary>> {
    let rows = filtered_query(query)
        .select((
            dsl::name,
            dsl::slug,
            dsl::state,
            dsl::state_slug,
            dsl::city,
            dsl::description,
        ))
        .load::<models::VenueSummary>(conn)
        .map_err(from_diesel_err)?;
    Ok(rows.into_iter().map(Into::into).collect())
}

fn load_keys(conn: &mut SqliteConnection, key: VenueKey, query: &VenueQuery) -> Result<Vec<String>> {
    let q = filtered_query(query);
    match key {
        VenueKey::Slug => q.select(dsl::slug).load::<String>(conn),
        VenueKey::StateSlug => q.select(dsl::state_slug).load::<String>(conn),
    }
    .map_err(from_diesel_err)
}

#[cfg(any(test, feature = "fixtures"))]
fn new_venue(venue: &Venue) -> models::NewVenue<'_> {
    models::NewVenue {
        id: venue.id.as_str(),
        name: &venue.name,
        slug: &venue.slug,
        state: &venue.state,
        state_slug: &venue.state_slug,
        city: &venue.city,
        address: venue.address.as_deref(),
        lat: venue.pos.lat(),
        lng: venue.pos.lng(),
        indoor_outdoor: venue.indoor_outdoor.map(|x| x.to_string()),
        price_type: venue.price_type.map(|x| x.to_string()),
        num_courts: venue
            .num_courts
            .and_then(|n| i32::try_from(n.get()).ok()),
        description: venue.description.as_deref(),
        image_url: venue.image_url.as_ref().map(|url| url.as_str()),
        lighting: venue.lighting,
        featured: venue.featured,
        status: venue.status.to_string(),
    }
}

/// Insert all venues within a single transaction.
#[cfg(any(test, feature = "fixtures"))]
pub fn import_venues(db: &DbReadWrite, records: &[Venue]) -> Result<usize> {
    use diesel::Connection as _;
    db.sqlite_conn()
        .transaction::<_, DieselError, _>(|conn| {
            let mut count = 0;
            for venue in records {
                count += diesel::insert_into(venues::table)
                    .values(&new_venue(venue))
                    .execute(conn)?;
            }
            Ok(count)
        })
        .map_err(|err| {
            log::error!("Failed to import {} venue(s): {err}", records.len());
            from_diesel_err(err)
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use courtdir_entities::builders::Builder;

    fn venue(slug: &str, state: &str, city: &str) -> Venue {
        Venue::build()
            .slug(slug)
            .name(&format!("Courts {slug}"))
            .state(state)
            .city(city)
            .finish()
    }

    fn setup(venues: &[Venue]) -> Connections {
        let connections = Connections::init(":memory:", 1).unwrap();
        run_embedded_database_migrations(connections.exclusive().unwrap()).unwrap();
        import_venues(&connections.exclusive().unwrap(), venues).unwrap();
        connections
    }

    fn slugs(venues: Vec<Venue>) -> Vec<String> {
        venues.into_iter().map(|v| v.slug).collect()
    }

    #[test]
    fn import_and_load_all_attributes() {
        let x = Venue::build()
            .slug("rock-canyon-park")
            .name("Rock Canyon Park")
            .state("Utah")
            .city("Provo")
            .address(Some("2620 N 1200 E, Provo, UT"))
            .pos(MapPoint::from_lat_lng_deg(40.2, -111.6))
            .indoor_outdoor(Some(IndoorOutdoor::Outdoor))
            .price_type(Some(PriceType::Free))
            .num_courts(8)
            .description(Some("Eight dedicated courts"))
            .image_url(Some("https://example.com/rock-canyon.jpg"))
            .lighting(true)
            .featured(true)
            .finish();
        let db = setup(&[x.clone()]);
        let loaded = db.shared().unwrap().load_venues(&VenueQuery::new()).unwrap();
        assert_eq!(vec![x], loaded);
    }

    #[test]
    fn filter_by_region_and_status_ordered_by_city() {
        let db = setup(&[
            venue("a", "Utah", "Provo"),
            venue("b", "Utah", "Ogden"),
            Venue {
                status: VenueStatus::Draft,
                ..venue("c", "Utah", "Logan")
            },
            venue("d", "Idaho", "Boise"),
        ]);
        let query = VenueQuery::new()
            .state_slug("utah")
            .status(VenueStatus::Published)
            .order_by(SortField::City, SortDirection::Ascending);
        let venues = db.shared().unwrap().load_venues(&query).unwrap();
        assert_eq!(vec!["b", "a"], slugs(venues));

        let query = query.order_by(SortField::City, SortDirection::Descending);
        let venues = db.shared().unwrap().load_venues(&query).unwrap();
        assert_eq!(vec!["a", "b"], slugs(venues));
    }

    #[test]
    fn limit_number_of_rows() {
        let db = setup(&[
            venue("a", "Utah", "Provo"),
            venue("b", "Utah", "Ogden"),
        ]);
        let summaries = db
            .shared()
            .unwrap()
            .load_venue_summaries(&VenueQuery::new().state_slug("utah").limit(1))
            .unwrap();
        assert_eq!(1, summaries.len());
        assert_eq!("a", summaries[0].slug);
        assert_eq!("Utah", summaries[0].state);
    }

    #[test]
    fn load_key_columns() {
        let db = setup(&[
            venue("a", "Utah", "Provo"),
            venue("b", "Utah", "Ogden"),
            venue("c", "New Mexico", "Taos"),
        ]);
        let conn = db.shared().unwrap();
        let query = VenueQuery::new().status(VenueStatus::Published);
        assert_eq!(
            vec!["utah", "utah", "new-mexico"],
            conn.load_keys(VenueKey::StateSlug, &query).unwrap()
        );
        assert_eq!(
            vec!["c"],
            conn.load_keys(VenueKey::Slug, &VenueQuery::new().state_slug("new-mexico"))
                .unwrap()
        );
    }

    #[test]
    fn single_row_lookup_of_ambiguous_slug_fails() {
        let db = setup(&[venue("x", "Utah", "Provo"), venue("x", "Idaho", "Boise")]);
        let conn = db.shared().unwrap();
        assert!(matches!(
            conn.load_single_venue(&VenueQuery::new().slug("x")),
            Err(repo::Error::MultipleMatches(2))
        ));
        assert!(conn
            .load_single_venue(&VenueQuery::new().slug("x").state_slug("idaho"))
            .unwrap()
            .is_some());
        assert!(conn
            .load_single_summary(&VenueQuery::new().slug("y"))
            .unwrap()
            .is_none());
    }

    #[test]
    fn same_slug_twice_in_a_region_is_rejected() {
        let db = setup(&[venue("x", "Utah", "Provo")]);
        let again = venue("x", "Utah", "Ogden");
        assert!(import_venues(&db.exclusive().unwrap(), &[again]).is_err());
    }

    #[test]
    fn tolerate_invalid_attributes() {
        let db = setup(&[]);
        {
            let db_rw = db.exclusive().unwrap();
            let conn: &mut SqliteConnection = &mut db_rw.sqlite_conn();
            diesel::sql_query(
                r#"INSERT INTO venues
      (id, name, slug, state, state_slug, city, lat, lng,
       indoor_outdoor, price_type, num_courts, image_url, status)
    VALUES
      ('v1', 'Odd Courts', 'odd', 'Utah', 'utah', 'Provo', 40.2, -111.6,
       'underwater', 'PAID', 0, 'not a url', 'pending')"#,
            )
            .execute(conn)
            .unwrap();
        }
        let venue = db
            .shared()
            .unwrap()
            .load_single_venue(&VenueQuery::new().slug("odd"))
            .unwrap()
            .unwrap();
        assert_eq!(None, venue.indoor_outdoor);
        assert_eq!(Some(PriceType::Paid), venue.price_type);
        assert_eq!(None, venue.num_courts);
        assert_eq!(None, venue.image_url);
        assert!(!venue.is_published());
    }
}
