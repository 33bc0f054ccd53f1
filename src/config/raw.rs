use serde::Deserialize;
use std::path::PathBuf;

const DEFAULT_CONFIG_FILE: &str = include_str!("courtdir.default.toml");

#[derive(Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Config {
    pub db: Option<Db>,
    pub site: Option<Site>,
    pub export: Option<Export>,
}

impl Default for Config {
    fn default() -> Self {
        toml::from_str(DEFAULT_CONFIG_FILE).expect("Default configuration")
    }
}

#[derive(Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Db {
    pub connection_sqlite: String,
    pub connection_pool_size: u32,
}

impl Default for Db {
    fn default() -> Self {
        Config::default().db.expect("DB configuration")
    }
}

// All fields are optional, missing texts fall
// back to the defaults one by one.
#[derive(Default, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Site {
    pub name: Option<String>,
    pub listing_label: Option<String>,
    pub tagline: Option<String>,
    pub theme: Option<Theme>,
    pub visibility: Option<Visibility>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Theme {
    Light,
    Dark,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Visibility {
    Published,
    ListingsOnly,
}

#[derive(Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Export {
    pub output_dir: PathBuf,
}

impl Default for Export {
    fn default() -> Self {
        Config::default().export.expect("Export configuration")
    }
}
