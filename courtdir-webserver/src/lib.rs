#![recursion_limit = "128"]

#[macro_use]
extern crate log;

use courtdir_db_sqlite::Connections;

mod export;
mod render;
mod view;
mod web;

pub use self::{
    export::{export_site, Error as ExportError, ExportSummary},
    view::Theme,
    web::Cfg,
};

pub async fn run(connections: Connections, cfg: Cfg) {
    web::run(connections.into(), cfg).await;
}
