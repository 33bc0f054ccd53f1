use std::fmt;

use super::{enumerate_regions, enumerate_venues_in_region, prelude::*};

/// A page that is generated ahead of request time.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum PagePath {
    Root,
    Region { region: String },
    Venue { region: String, slug: String },
}

impl PagePath {
    pub fn segments(&self) -> Vec<&str> {
        match self {
            Self::Root => vec![],
            Self::Region { region } => vec![region.as_str()],
            Self::Venue { region, slug } => vec![region.as_str(), slug.as_str()],
        }
    }
}

impl fmt::Display for PagePath {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if matches!(self, Self::Root) {
            return f.write_str("/");
        }
        for segment in self.segments() {
            write!(f, "/{segment}")?;
        }
        Ok(())
    }
}

/// The complete page plan: the root listing, every region and
/// every venue beneath its region.
pub fn enumerate_paths<G: VenueGateway>(gw: &G, visibility: Visibility) -> Vec<PagePath> {
    let regions = enumerate_regions(gw);
    let mut paths = Vec::with_capacity(1 + regions.len());
    paths.push(PagePath::Root);
    for region in regions {
        let slugs = enumerate_venues_in_region(gw, visibility, &region);
        log::debug!("Enumerated {} venues in region '{region}'", slugs.len());
        paths.push(PagePath::Region {
            region: region.clone(),
        });
        paths.extend(slugs.into_iter().map(|slug| PagePath::Venue {
            region: region.clone(),
            slug,
        }));
    }
    paths
}

#[cfg(test)]
mod tests {
    use super::{
        super::tests::{unpublished, venue, MockDb},
        *,
    };

    #[test]
    fn display_paths() {
        assert_eq!("/", PagePath::Root.to_string());
        assert_eq!(
            "/utah",
            PagePath::Region {
                region: "utah".into()
            }
            .to_string()
        );
        assert_eq!(
            "/utah/pioneer-park",
            PagePath::Venue {
                region: "utah".into(),
                slug: "pioneer-park".into()
            }
            .to_string()
        );
    }

    #[test]
    fn enumerate_all_pages() {
        let db = MockDb::with_venues(vec![
            venue("a", "Utah", "Provo"),
            venue("b", "Utah", "Ogden"),
            unpublished(venue("c", "Utah", "Logan")),
            unpublished(venue("d", "Idaho", "Boise")),
        ]);
        let paths: Vec<_> = enumerate_paths(&db, Visibility::Published)
            .iter()
            .map(ToString::to_string)
            .collect();
        assert_eq!(vec!["/", "/utah", "/utah/a", "/utah/b"], paths);

        let paths: Vec<_> = enumerate_paths(&db, Visibility::ListingsOnly)
            .iter()
            .map(ToString::to_string)
            .collect();
        assert_eq!(vec!["/", "/utah", "/utah/a", "/utah/b", "/utah/c"], paths);
    }

    #[test]
    fn only_root_if_store_is_unavailable() {
        let db = MockDb::with_venues(vec![venue("a", "Utah", "Provo")]);
        db.set_unavailable();
        assert_eq!(
            vec![PagePath::Root],
            enumerate_paths(&db, Visibility::Published)
        );
    }
}
