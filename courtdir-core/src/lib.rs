//! Enumeration and resolution of the directory pages.
//!
//! Everything in here only reads from the record store through
//! [`repositories::VenueGateway`].

pub mod entities {
    pub use courtdir_entities::{geo::*, id::*, region::*, slug::*, venue::*};
}

pub mod repositories;
pub mod usecases;

pub use repositories::Error as RepoError;
