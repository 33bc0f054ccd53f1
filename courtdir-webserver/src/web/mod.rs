use courtdir_core::usecases::{SiteInfo, Visibility};
use rocket::{config::Config as RocketCfg, Catcher, Rocket, Route};

use crate::view::Theme;

mod frontend;
mod sqlite;


#[derive(Debug, Clone, Default)]
pub struct Cfg {
    pub site: SiteInfo,
    pub theme: Theme,
    pub visibility: Visibility,
}

pub(crate) struct InstanceOptions {
    mounts: Vec<(&'static str, Vec<Route>)>,
    catchers: Vec<(&'static str, Vec<Catcher>)>,
    rocket_cfg: Option<RocketCfg>,
    cfg: Cfg,
}

pub(crate) fn rocket_instance(
    options: InstanceOptions,
    db: sqlite::Connections,
) -> Rocket<rocket::Build> {
    let InstanceOptions {
        mounts,
        catchers,
        rocket_cfg,
        cfg,
    } = options;

    info!(
        "Serving '{}' ({:?} theme, {:?} visibility)",
        cfg.site.name, cfg.theme, cfg.visibility
    );

    let r = match rocket_cfg {
        Some(cfg) => rocket::custom(cfg),
        None => rocket::build(),
    };

    let mut instance = r.manage(db).manage(cfg);

    for (m, r) in mounts {
        instance = instance.mount(m, r);
    }
    for (m, c) in catchers {
        instance = instance.register(m, c);
    }
    instance
}

fn mounts() -> Vec<(&'static str, Vec<Route>)> {
    vec![("/", frontend::routes())]
}

fn catchers() -> Vec<(&'static str, Vec<Catcher>)> {
    vec![("/", frontend::catchers())]
}

pub async fn run(db: sqlite::Connections, cfg: Cfg) {
    let options = InstanceOptions {
        mounts: mounts(),
        catchers: catchers(),
        rocket_cfg: None,
        cfg,
    };
    let instance = rocket_instance(options, db);
    if let Err(err) = instance.launch().await {
        log::error!("Unable to run web server: {err}");
    }
}
