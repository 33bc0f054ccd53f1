use super::*;

pub fn venue(site: &SiteInfo, theme: Theme, detail: &Page<VenueDetail>) -> Markup {
    let VenueDetail { venue: v, map_link } = &detail.body;
    let region = v.region();
    page(
        site,
        theme,
        &detail.meta,
        html! {
            h1 { (v.name) }
            p class="location" { (v.city) ", " (v.state) }
            @if let Some(image_url) = &v.image_url {
                img class="venue-image" src=(image_url.as_str()) alt=(v.name);
            }
            table class="attributes" {
                @if let Some(address) = &v.address {
                    tr { td { "Address" } td { (address) } }
                }
                @if let Some(io) = v.indoor_outdoor {
                    tr { td { "Type" } td { (io.to_string()) } }
                }
                @if let Some(price) = v.price_type {
                    tr { td { "Price" } td class=(price_class(price)) { (price.to_string()) } }
                }
                @if let Some(n) = v.num_courts {
                    tr { td { "Courts" } td { (n.get()) } }
                }
                tr { td { "Lighting" } td { @if v.lighting { "yes" } @else { "no" } } }
            }
            @if let Some(desc) = &v.description {
                p class="description" { (desc) }
            }
            a class="directions" href=(map_link.as_str()) target="_blank" rel="noopener noreferrer" {
                "Get directions"
            }
            a class="back" href=(region_href(&region.slug)) {
                "Back to " (region.name)
            }
        },
    )
}
