use anyhow::{anyhow, Result};
use std::{
    env, fs,
    io::ErrorKind,
    path::{Path, PathBuf},
};

use courtdir_core::usecases::{SiteInfo, Visibility};
use courtdir_webserver::{Cfg as WebServerCfg, Theme};

mod raw;

const DEFAULT_CONFIG_FILE_NAME: &str = "courtdir.toml";

const ENV_NAME_DB_URL: &str = "DATABASE_URL";

pub struct Config {
    pub db: Db,
    pub site: Site,
    pub export: Export,
}

impl Config {
    pub fn try_load_from_file_or_default<P: AsRef<Path>>(file_path: Option<P>) -> Result<Self> {
        let file_path: &Path = file_path.as_ref().map(|p| p.as_ref()).unwrap_or_else(|| {
            log::info!("No configuration file specified. load {DEFAULT_CONFIG_FILE_NAME}");
            Path::new(DEFAULT_CONFIG_FILE_NAME)
        });

        let raw_config = match fs::read_to_string(file_path) {
            Ok(cfg_string) => toml::from_str(&cfg_string)?,
            Err(err) => match err.kind() {
                ErrorKind::NotFound => {
                    log::info!(
                        "{} not found => load default configuration.",
                        file_path.display()
                    );
                    Ok(raw::Config::default())
                }
                _ => Err(err),
            }?,
        };
        let mut cfg = Self::try_from(raw_config)?;
        if let Ok(db_url) = env::var(ENV_NAME_DB_URL) {
            cfg.db.conn_sqlite = db_url;
        }
        Ok(cfg)
    }

    pub fn webserver_cfg(&self) -> WebServerCfg {
        let Site {
            info,
            theme,
            visibility,
        } = &self.site;
        WebServerCfg {
            site: info.clone(),
            theme: *theme,
            visibility: *visibility,
        }
    }
}

pub struct Db {
    /// SQLite connection
    pub conn_sqlite: String,
    pub conn_pool_size: u32,
}

pub struct Site {
    pub info: SiteInfo,
    pub theme: Theme,
    pub visibility: Visibility,
}

pub struct Export {
    /// File system directory for the generated pages.
    pub output_dir: PathBuf,
}

impl From<raw::Theme> for Theme {
    fn from(from: raw::Theme) -> Self {
        match from {
            raw::Theme::Light => Self::Light,
            raw::Theme::Dark => Self::Dark,
        }
    }
}

impl From<raw::Visibility> for Visibility {
    fn from(from: raw::Visibility) -> Self {
        match from {
            raw::Visibility::Published => Self::Published,
            raw::Visibility::ListingsOnly => Self::ListingsOnly,
        }
    }
}

fn non_empty(value: Option<String>, default: String, key: &str) -> Result<String> {
    match value {
        None => Ok(default),
        Some(value) if value.trim().is_empty() => Err(anyhow!("Empty site {key}")),
        Some(value) => Ok(value),
    }
}

impl TryFrom<raw::Config> for Config {
    type Error = anyhow::Error;
    fn try_from(from: raw::Config) -> Result<Self> {
        let raw::Config { db, site, export } = from;

        let raw::Db {
            connection_sqlite,
            connection_pool_size,
        } = db.unwrap_or_default();

        if connection_pool_size == 0 {
            return Err(anyhow!("Invalid database connection pool size: 0"));
        }
        let db = Db {
            conn_sqlite: connection_sqlite,
            conn_pool_size: connection_pool_size,
        };

        let raw::Site {
            name,
            listing_label,
            tagline,
            theme,
            visibility,
        } = site.unwrap_or_default();

        let defaults = SiteInfo::default();
        let info = SiteInfo {
            name: non_empty(name, defaults.name, "name")?,
            listing_label: non_empty(listing_label, defaults.listing_label, "listing-label")?,
            tagline: tagline.unwrap_or(defaults.tagline),
        };
        let site = Site {
            info,
            theme: theme.map(Into::into).unwrap_or_default(),
            visibility: visibility.map(Into::into).unwrap_or_default(),
        };

        let raw::Export { output_dir } = export.unwrap_or_default();
        let export = Export { output_dir };

        Ok(Self { db, site, export })
    }
}
