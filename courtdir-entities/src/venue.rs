use std::num::NonZeroU32;

use strum::{AsRefStr, Display, EnumIter, EnumString};
use url::Url;

use crate::{geo::*, id::*, region::*};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, AsRefStr, Display, EnumIter, EnumString)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum VenueStatus {
    Draft,
    Published,
    Archived,
}

impl VenueStatus {
    /// Only published venues are eligible for public listings.
    pub fn is_public(self) -> bool {
        self == Self::Published
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, AsRefStr, Display, EnumIter, EnumString)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum IndoorOutdoor {
    Indoor,
    Outdoor,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, AsRefStr, Display, EnumIter, EnumString)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum PriceType {
    Free,
    Paid,
}

impl PriceType {
    pub fn is_free(self) -> bool {
        self == Self::Free
    }
}

/// A single listed court location.
#[derive(Debug, Clone, PartialEq)]
pub struct Venue {
    pub id: Id,
    pub name: String,
    /// Unique within [`Venue::state_slug`].
    pub slug: String,
    /// Display name of the region.
    pub state: String,
    /// URL-safe region identifier shared by all venues of the region.
    pub state_slug: String,
    pub city: String,
    pub address: Option<String>,
    pub pos: MapPoint,
    pub indoor_outdoor: Option<IndoorOutdoor>,
    pub price_type: Option<PriceType>,
    pub num_courts: Option<NonZeroU32>,
    pub description: Option<String>,
    pub image_url: Option<Url>,
    pub lighting: bool,
    pub featured: bool,
    pub status: VenueStatus,
}

impl Venue {
    pub fn is_published(&self) -> bool {
        self.status.is_public()
    }

    pub fn map_link(&self) -> MapLink {
        self.pos.map_link()
    }

    pub fn region(&self) -> Region {
        Region {
            slug: self.state_slug.clone(),
            name: self.state.clone(),
        }
    }
}

/// The descriptive columns of a venue, without location and attributes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VenueSummary {
    pub name: String,
    pub slug: String,
    pub state: String,
    pub state_slug: String,
    pub city: String,
    pub description: Option<String>,
}

impl From<Venue> for VenueSummary {
    fn from(from: Venue) -> Self {
        let Venue {
            name,
            slug,
            state,
            state_slug,
            city,
            description,
            ..
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
