#![allow(clippy::extra_unused_lifetimes)]

#[cfg(any(test, feature = "fixtures"))]
use super::schema::*;

#[cfg(any(test, feature = "fixtures"))]
#[derive(Insertable)]
#[diesel(table_name = venues)]
pub struct NewVenue<'a> {
    pub id: &'a str,
    pub name: &'a str,
    pub slug: &'a str,
    pub state: &'a str,
    pub state_slug: &'a str,
    pub city: &'a str,
    pub address: Option<&'a str>,
    pub lat: f64,
    pub lng: f64,
    pub indoor_outdoor: Option<String>,
    pub price_type: Option<String>,
    pub num_courts: Option<i32>,
    pub description: Option<&'a str>,
    pub image_url: Option<&'a str>,
    pub lighting: bool,
    pub featured: bool,
    pub status: String,
}

#[derive(Queryable)]
pub struct Venue {
    pub id: String,
    pub name: String,
    pub slug: String,
    pub state: String,
    pub state_slug: String,
    pub city: String,
    pub address: Option<String>,
    pub lat: f64,
    pub lng: f64,
    pub indoor_outdoor: Option<String>,
    pub price_type: Option<String>,
    pub num_courts: Option<i32>,
    pub description: Option<String>,
    pub image_url: Option<String>,
    pub lighting: bool,
    pub featured: bool,
    pub status: String,
}

#[derive(Queryable)]
pub struct VenueSummary {
    pub name: String,
    pub slug: String,
    pub state: String,
    pub state_slug: String,
    pub city: String,
    pub description: Option<String>,
}
