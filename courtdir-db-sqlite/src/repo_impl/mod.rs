// NOTE:
// Records are maintained outside of this application. Loading
// is lenient: optional attributes that cannot be parsed are
// dropped with a warning instead of failing the whole query.

use std::{num::NonZeroU32, str::FromStr};

use diesel::{self, prelude::*, result::Error as DieselError, sqlite::Sqlite};

use courtdir_core::{
    entities::*,
    repositories::{self as repo, *},
};

use super::*;

mod venue;

#[cfg(any(test, feature = "fixtures"))]
pub use venue::import_venues;

type Result<T> = std::result::Result<T, repo::Error>;

pub fn from_diesel_err(err: DieselError) -> repo::Error {
    match err {
        DieselError::NotFound => repo::Error::NotFound,
        _ => repo::Error::Other(err.into()),
    }
}

fn load_attribute<T: FromStr>(venue_id: &str, column: &str, value: Option<String>) -> Option<T> {
    let value = value?;
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return None;
    }
    let parsed = trimmed.parse().ok();
    if parsed.is_none() {
        log::warn!("Ignoring invalid {column} '{value}' of venue {venue_id}");
    }
    parsed
}

fn load_num_courts(venue_id: &str, num_courts: Option<i32>) -> Option<NonZeroU32> {
    let num_courts = num_courts?;
    let parsed = u32::try_from(num_courts).ok().and_then(NonZeroU32::new);
    if parsed.is_none() {
        log::warn!("Ignoring invalid number of courts ({num_courts}) of venue {venue_id}");
    }
    parsed
}

fn load_status(venue_id: &str, status: &str) -> VenueStatus {
    status.parse().unwrap_or_else(|_| {
        // Never list a venue with an unknown lifecycle
        log::warn!("Unknown status '{status}' of venue {venue_id}");
        VenueStatus::Draft
    })
}

fn load_venue(row: models::Venue) -> Venue {
    let models::Venue {
        id,
        name,
        slug,
        state,
        state_slug,
        city,
        address,
        lat,
        lng,
        indoor_outdoor,
        price_type,
        num_courts,
        description,
        image_url,
        lighting,
        featured,
        status,
    } = row;
    if !is_valid_slug(&slug) || !is_valid_slug(&state_slug) {
        log::warn!("Venue {id} is addressed by a malformed path '/{state_slug}/{slug}'");
    }
    Venue {
        indoor_outdoor: load_attribute(&id, "indoor_outdoor", indoor_outdoor),
        price_type: load_attribute(&id, "price_type", price_type),
        num_courts: load_num_courts(&id, num_courts),
        image_url: load_attribute(&id, "image_url", image_url),
        status: load_status(&id, &status),
        id: id.into(),
        name,
        slug,
        state,
        state_slug,
        city,
        address,
        pos: MapPoint::from_lat_lng_deg(lat, lng),
        description,
        lighting,
        featured,
    }
}

impl From<models::VenueSummary> for VenueSummary {
    fn from(from: models::VenueSummary) -> Self {
        let models::VenueSummary {
            name,
            slug,
            state,
            state_slug,
            city,
            description,
        } = from;
        Self {
            name,
            slug,
            state,
            state_slug,
            city,
            description,
        }
    }
}
