use maud::Markup;
use rocket::{catch, catchers, get, response::content::RawCss, routes, Catcher, Request, Route, State};

use crate::{
    render,
    view::MAIN_CSS,
    web::{sqlite, Cfg},
};


#[get("/")]
pub fn get_index(db: sqlite::Connections, cfg: &State<Cfg>) -> Markup {
    render::root(&db, cfg)
}

#[get("/main.css")]
pub fn get_main_css() -> RawCss<&'static str> {
    RawCss(MAIN_CSS)
}

#[get("/<region>")]
pub fn get_region(db: sqlite::Connections, cfg: &State<Cfg>, region: &str) -> Option<Markup> {
    render::region(&db, cfg, region)
}

// The region segment is part of the path but not of the lookup.
#[get("/<_>/<slug>")]
pub fn get_venue(db: sqlite::Connections, cfg: &State<Cfg>, slug: &str) -> Option<Markup> {
    render::venue(&db, cfg, slug)
}

#[catch(404)]
pub fn not_found(req: &Request) -> Markup {
    match req.rocket().state::<Cfg>() {
        Some(cfg) => render::not_found(cfg),
        None => render::not_found(&Cfg::default()),
    }
}

pub fn routes() -> Vec<Route> {
    routes![get_index, get_main_css, get_region, get_venue]
}

pub fn catchers() -> Vec<Catcher> {
    catchers![not_found]
}
