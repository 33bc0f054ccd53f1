#![deny(missing_debug_implementations)]
#![deny(rustdoc::broken_intra_doc_links)]

//! # courtdir-entities
//!
//! Reusable, agnostic domain entities for the court directory.
//!
//! The entities only contain generic functionality that does not reveal any application-specific business logic.

pub mod geo;
pub mod id;
pub mod region;
pub mod slug;
pub mod venue;

#[cfg(any(test, feature = "builders"))]
pub mod builders;
