use super::prelude::*;

/// Texts of the site that end up in page metadata.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SiteInfo {
    /// e.g. "Pickleball Playgrounds"
    pub name: String,
    /// What a listing shows, e.g. "Pickleball Courts"
    pub listing_label: String,
    pub tagline: String,
}

impl Default for SiteInfo {
    fn default() -> Self {
        Self {
            name: "Pickleball Playgrounds".into(),
            listing_label: "Pickleball Courts".into(),
            tagline: "Find pickleball courts across the United States. Browse by state.".into(),
        }
    }
}

impl SiteInfo {
    pub fn root_meta(&self) -> PageMeta {
        PageMeta {
            title: Some(self.name.clone()),
            description: Some(self.tagline.clone()),
        }
    }

    pub fn region_meta(&self, state: &str) -> PageMeta {
        let Self {
            name,
            listing_label,
            ..
        } = self;
        PageMeta {
            title: Some(format!("{listing_label} in {state} | {name}")),
            description: Some(format!(
                "Find {} across {state}. Browse free and paid indoor and outdoor courts by city.",
                listing_label.to_lowercase()
            )),
        }
    }

    pub fn venue_meta(&self, venue: &VenueSummary) -> PageMeta {
        let VenueSummary {
            name, city, state, ..
        } = venue;
        PageMeta {
            title: Some(format!(
                "{name} | {} in {city}, {state}",
                self.listing_label
            )),
            description: Some(format!(
                "Find details about {name} in {city}, {state}. Court info, location, and more."
            )),
        }
    }
}
