mod enumerate_paths;
mod enumerate_regions;
mod enumerate_venues;
mod list_regions;
mod resolution;
mod resolve_region;
mod resolve_venue;
mod site;
mod visibility;

#[cfg(test)]
pub mod tests;

pub use self::{
    enumerate_paths::*, enumerate_regions::*, enumerate_venues::*, list_regions::*,
    resolution::*, resolve_region::*, resolve_venue::*, site::*, visibility::*,
};

mod prelude {
    pub use super::{resolution::*, site::*, visibility::*};
    pub use crate::{entities::*, repositories::*};
}
