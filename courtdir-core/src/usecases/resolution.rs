use std::fmt;

use super::prelude::*;

/// Terminal outcome of resolving the data of a single page.
#[derive(Debug, Clone, PartialEq)]
pub enum Resolution<T> {
    Resolved(T),
    NotFound,
}

impl<T> Resolution<T> {
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound)
    }

    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Resolution<U> {
        match self {
            Self::Resolved(x) => Resolution::Resolved(f(x)),
            Self::NotFound => Resolution::NotFound,
        }
    }

    pub fn into_option(self) -> Option<T> {
        match self {
            Self::Resolved(x) => Some(x),
            Self::NotFound => None,
        }
    }

    /// Apply the not-found policy to the outcome of a primary query.
    ///
    /// Absent records, ambiguous matches and store failures all end
    /// up as [`Resolution::NotFound`]. Nothing is propagated.
    pub fn from_primary_lookup(result: Result<Option<T>>, what: impl fmt::Display) -> Self {
        match result {
            Ok(Some(x)) => Self::Resolved(x),
            Ok(None) | Err(Error::NotFound) => {
                log::debug!("No records found for {what}");
                Self::NotFound
            }
            Err(Error::MultipleMatches(count)) => {
                log::error!("Ambiguous lookup of {what}: {count} matching records");
                Self::NotFound
            }
            Err(err) => {
                log::warn!("Failed to load {what}: {err}");
                Self::NotFound
            }
        }
    }
}

impl<T> From<Option<T>> for Resolution<T> {
    fn from(from: Option<T>) -> Self {
        from.map_or(Self::NotFound, Self::Resolved)
    }
}

/// Title and description of a page.
///
/// Empty metadata is a valid outcome, it never turns a page into
/// a not-found page.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PageMeta {
    pub title: Option<String>,
    pub description: Option<String>,
}

impl PageMeta {
    pub fn is_empty(&self) -> bool {
        self.title.is_none() && self.description.is_none()
    }

    /// Metadata lookups degrade silently.
    pub fn from_lookup(result: Result<Option<PageMeta>>, what: impl fmt::Display) -> Option<Self> {
        result
            .inspect_err(|err| log::debug!("No metadata for {what}: {err}"))
            .ok()
            .flatten()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Page<T> {
    pub meta: PageMeta,
    pub body: T,
}

impl<T> Page<T> {
    /// Combine the independent body and metadata results.
    ///
    /// Only the body decides about the outcome.
    pub fn merge(body: Resolution<T>, meta: Option<PageMeta>) -> Resolution<Self> {
        body.map(|body| Self {
            meta: meta.unwrap_or_default(),
            body,
        })
    }
}
