use duration_str::deserialize_duration;
use serde::Deserialize;
use std::time::Duration;

const DEFAULT_CONFIG_FILE: &str = include_str!("ugcdb.default.toml");

#[derive(Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Config {
    pub scores: Option<Scores>,
    pub listing: Option<Listing>,
}

impl Default for Config {
    fn default() -> Self {
        let cfg: Self = toml::from_str(DEFAULT_CONFIG_FILE).expect("Default configuration");
        cfg
    }
}

#[derive(Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Scores {
    #[serde(deserialize_with = "deserialize_duration")]
    pub cache_ttl: Duration,
    pub decay_base: f64,
}

impl Default for Scores {
    fn default() -> Self {
        Config::default().scores.expect("Scores configuration")
    }
}

#[derive(Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Listing {
    pub page_size: u64,
    pub search_page_size: u64,
}

impl Default for Listing {
    fn default() -> Self {
        Config::default().listing.expect("Listing configuration")
    }
}
