use maud::{html, Markup, DOCTYPE};

use super::*;

const MAIN_CSS_URL: &str = "/main.css";

pub fn page(site: &SiteInfo, theme: Theme, meta: &PageMeta, content: Markup) -> Markup {
    let title = meta.title.as_deref().unwrap_or(&site.name);
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1, shrink-to-fit=no";
                title { (title) }
                @if let Some(description) = &meta.description {
                    meta name="description" content=(description);
                }
                link rel="stylesheet" href=(MAIN_CSS_URL);
            }
            body class=(theme.css_class()) {
                (header(site))
                main { (content) }
            }
        }
    }
}

fn header(site: &SiteInfo) -> Markup {
    html! {
        header {
            nav {
                a class="home" href="/" { (site.name) }
            }
        }
    }
}
