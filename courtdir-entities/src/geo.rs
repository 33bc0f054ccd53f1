use std::fmt;

/// Base URL of the external map search used for directions.
pub const MAP_SEARCH_BASE_URL: &str = "https://www.google.com/maps/search/";

/// A position in degrees as stored with the record.
///
/// Coordinates are taken as they are, no range validation is
/// applied.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct MapPoint {
    lat: f64,
    lng: f64,
}

impl MapPoint {
    pub const fn from_lat_lng_deg(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }

    pub const fn lat(&self) -> f64 {
        self.lat
    }

    pub const fn lng(&self) -> f64 {
        self.lng
    }

    /// Outbound link that searches the map service for this position.
    pub fn map_link(&self) -> MapLink {
        MapLink::new(self)
    }
}

impl fmt::Display for MapPoint {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{},{}", self.lat, self.lng)
    }
}

/// Hyperlink into the external map service.
///
/// The coordinates appear verbatim in the query string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MapLink(String);

impl MapLink {
    fn new(pos: &MapPoint) -> Self {
        Self(format!("{MAP_SEARCH_BASE_URL}?api=1&query={pos}"))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for MapLink {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Display for MapLink {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(&self.0)
    }
}
