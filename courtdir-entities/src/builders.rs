pub trait Builder {
    type Build;
    fn build() -> Self::Build;
}

pub use self::venue_builder::*;

pub mod venue_builder {

    use super::*;
    use crate::{geo::*, id::*, slug::derive_slug, venue::*};
    use std::num::NonZeroU32;

    #[derive(Debug)]
    pub struct VenueBuild {
        venue: Venue,
    }

    impl VenueBuild {
        pub fn id(mut self, id: &str) -> Self {
            self.venue.id = id.into();
            self
        }
        pub fn name(mut self, name: &str) -> Self {
            self.venue.name = name.into();
            self
        }
        pub fn slug(mut self, slug: &str) -> Self {
            self.venue.slug = slug.into();
            self
        }
        /// Sets the display name and derives the region slug from it.
        pub fn state(mut self, state: &str) -> Self {
            self.venue.state = state.into();
            self.venue.state_slug = derive_slug(state);
            self
        }
        pub fn state_slug(mut self, state_slug: &str) -> Self {
            self.venue.state_slug = state_slug.into();
            self
        }
        pub fn city(mut self, city: &str) -> Self {
            self.venue.city = city.into();
            self
        }
        pub fn address(mut self, address: Option<&str>) -> Self {
            self.venue.address = address.map(Into::into);
            self
        }
        pub fn pos(mut self, pos: MapPoint) -> Self {
            self.venue.pos = pos;
            self
        }
        pub fn indoor_outdoor(mut self, v: Option<IndoorOutdoor>) -> Self {
            self.venue.indoor_outdoor = v;
            self
        }
        pub fn price_type(mut self, v: Option<PriceType>) -> Self {
            self.venue.price_type = v;
            self
        }
        pub fn num_courts(mut self, n: u32) -> Self {
            self.venue.num_courts = NonZeroU32::new(n);
            self
        }
        pub fn description(mut self, desc: Option<&str>) -> Self {
            self.venue.description = desc.map(Into::into);
            self
        }
        pub fn image_url(mut self, image_url: Option<&str>) -> Self {
            self.venue.image_url = image_url.map(|url| url.parse().unwrap());
            self
        }
        pub fn lighting(mut self, lighting: bool) -> Self {
            self.venue.lighting = lighting;
            self
        }
        pub fn featured(mut self, featured: bool) -> Self {
            self.venue.featured = featured;
            self
        }
        pub fn status(mut self, status: VenueStatus) -> Self {
            self.venue.status = status;
            self
        }
        pub fn finish(self) -> Venue {
            self.venue
        }
    }

    impl Builder for Venue {
        type Build = VenueBuild;
        fn build() -> Self::Build {
            VenueBuild {
                venue: Venue {
                    id: Id::new(),
                    name: "".into(),
                    slug: "".into(),
                    state: "".into(),
                    state_slug: "".into(),
                    city: "".into(),
                    address: None,
                    pos: MapPoint::default(),
                    indoor_outdoor: None,
                    price_type: None,
                    num_courts: None,
                    description: None,
                    image_url: None,
                    lighting: false,
                    featured: false,
                    status: VenueStatus::Published,
                },
            }
        }
    }
}
