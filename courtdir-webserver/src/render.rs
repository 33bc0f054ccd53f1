use courtdir_core::usecases::{self, Page, Resolution};
use courtdir_db_sqlite::{Connections, DbReadOnly};
use maud::Markup;

use crate::{view, web::Cfg};

// Each query gets its own pooled connection. An unavailable
// store is treated like a store without matching records.
fn with_shared<T>(db: &Connections, fallback: T, f: impl FnOnce(&DbReadOnly) -> T) -> T {
    match db.shared() {
        Ok(conn) => f(&conn),
        Err(err) => {
            warn!("Database is unavailable: {err}");
            fallback
        }
    }
}

pub fn root(db: &Connections, cfg: &Cfg) -> Markup {
    let page = with_shared(
        db,
        Page {
            meta: cfg.site.root_meta(),
            body: vec![],
        },
        |db| usecases::resolve_root_page(db, &cfg.site),
    );
    view::index(&cfg.site, cfg.theme, &page)
}

/// `None` if the region has no published venues.
pub fn region(db: &Connections, cfg: &Cfg, region: &str) -> Option<Markup> {
    let (listing, meta) = rayon::join(
        || {
            with_shared(db, Resolution::NotFound, |db| {
                usecases::resolve_region_listing(db, region)
            })
        },
        || {
            with_shared(db, None, |db| {
                usecases::resolve_region_meta(db, &cfg.site, region)
            })
        },
    );
    Page::merge(listing, meta)
        .into_option()
        .map(|page| view::region(&cfg.site, cfg.theme, &page))
}

/// The venue is looked up by its slug, independent of the
/// region it is requested in.
pub fn venue(db: &Connections, cfg: &Cfg, slug: &str) -> Option<Markup> {
    let Cfg {
        site, visibility, ..
    } = cfg;
    let (detail, meta) = rayon::join(
        || {
            with_shared(db, Resolution::NotFound, |db| {
                usecases::resolve_venue_detail(db, *visibility, slug)
            })
        },
        || {
            with_shared(db, None, |db| {
                usecases::resolve_venue_meta(db, site, *visibility, slug)
            })
        },
    );
    Page::merge(detail, meta)
        .into_option()
        .map(|page| view::venue(site, cfg.theme, &page))
}

pub fn not_found(cfg: &Cfg) -> Markup {
    view::not_found(&cfg.site, cfg.theme)
}
