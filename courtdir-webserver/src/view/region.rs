use super::*;

pub fn region(site: &SiteInfo, theme: Theme, listing: &Page<RegionListing>) -> Markup {
    let RegionListing { region, venues } = &listing.body;
    page(
        site,
        theme,
        &listing.meta,
        html! {
            h1 { (site.listing_label) " in " (region.name) }
            p class="summary" {
                "Browse " (courts_label(venues.len())) " across " (region.name) "."
            }
            ul class="venue-list" {
                @for v in venues {
                    li class=[v.featured.then_some("featured")] {
                        (venue_card(v))
                    }
                }
            }
            a class="back" href="/" { "All states" }
        },
    )
}

fn venue_card(v: &Venue) -> Markup {
    html! {
        @if let Some(image_url) = &v.image_url {
            img class="card-image" src=(image_url.as_str()) alt=(v.name);
        } @else {
            div class="card-image placeholder" { "No image" }
        }
        h3 {
            a href=(venue_href(v)) { (v.name) }
        }
        p class="city" { (v.city) }
        (attribute_badges(v))
        @if let Some(desc) = &v.description {
            p class="description" { (desc) }
        }
    }
}

fn attribute_badges(v: &Venue) -> Markup {
    html! {
        ul class="badges" {
            @if let Some(io) = v.indoor_outdoor {
                li { (io.to_string()) }
            }
            @if let Some(price) = v.price_type {
                li class=(price_class(price)) { (price.to_string()) }
            }
            @if let Some(n) = v.num_courts {
                li { (courts_label(n.get() as usize)) }
            }
            @if v.lighting {
                li { "lighted" }
            }
        }
    }
}
