use maud::{html, Markup};

use courtdir_core::{entities::*, usecases::*};

mod page;
mod region;
mod venue;

pub use self::{region::*, venue::*};
use page::*;

pub const MAIN_CSS: &str = include_str!("main.css");

/// Presentation variant of the listing pages.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub const fn css_class(self) -> &'static str {
        match self {
            Self::Light => "theme-light",
            Self::Dark => "theme-dark",
        }
    }
}

fn region_href(region_slug: &str) -> String {
    format!("/{region_slug}")
}

fn venue_href(venue: &Venue) -> String {
    format!("/{}/{}", venue.state_slug, venue.slug)
}

fn courts_label(count: usize) -> String {
    if count == 1 {
        "1 court".to_owned()
    } else {
        format!("{count} courts")
    }
}

fn price_class(price: PriceType) -> &'static str {
    if price.is_free() {
        "price-free"
    } else {
        "price-paid"
    }
}

pub fn index(site: &SiteInfo, theme: Theme, root: &Page<Vec<RegionSummary>>) -> Markup {
    page(
        site,
        theme,
        &root.meta,
        html! {
            div class="intro" {
                h1 { (site.name) }
                p { (site.tagline) }
            }
            @if root.body.is_empty() {
                p class="empty" { "No courts have been listed yet." }
            } @else {
                ul class="region-list" {
                    @for RegionSummary { region, venue_count } in &root.body {
                        li {
                            a href=(region_href(&region.slug)) { (region.name) }
                            " "
                            span class="count" { "(" (venue_count) ")" }
                        }
                    }
                }
            }
        },
    )
}

pub fn not_found(site: &SiteInfo, theme: Theme) -> Markup {
    let meta = PageMeta {
        title: Some(format!("Page not found | {}", site.name)),
        description: None,
    };
    page(
        site,
        theme,
        &meta,
        html! {
            h1 { "Page not found" }
            p {
                "The page you are looking for does not exist. "
                a href="/" { "Browse all states" }
            }
        },
    )
}
