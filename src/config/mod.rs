use anyhow::{anyhow, Result};
use std::{env, fs, io::ErrorKind, path::Path, time::Duration};
use ugc_core::score::ScoringParams;

mod raw;

const DEFAULT_CONFIG_FILE_NAME: &str = "ugcdb.toml";

const ENV_NAME_SCORE_CACHE_TTL: &str = "UGCDB_SCORE_CACHE_TTL";

#[derive(Debug)]
pub struct Config {
    pub scores: ScoringParams,
    pub listing: Listing,
}

#[derive(Debug)]
pub struct Listing {
    pub page_size: u64,
    pub search_page_size: u64,
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
        if let Ok(ttl) = env::var(ENV_NAME_SCORE_CACHE_TTL) {
            cfg.scores.cache_ttl = parse_cache_ttl(&ttl)?;
            log::info!("Use score cache TTL from {ENV_NAME_SCORE_CACHE_TTL}");
        }
        Ok(cfg)
    }
}

fn parse_cache_ttl(s: &str) -> Result<Duration> {
    let ttl = duration_str::parse(s).map_err(|err| anyhow!("Invalid score cache TTL: {err}"))?;
    if ttl.is_zero() {
        return Err(anyhow!("The score cache TTL must not be zero"));
    }
    Ok(ttl)
}

impl TryFrom<raw::Config> for Config {
    type Error = anyhow::Error;
    fn try_from(from: raw::Config) -> Result<Self> {
        let raw::Config { scores, listing } = from;

        let raw::Scores {
            cache_ttl,
            decay_base,
        } = scores.unwrap_or_default();

        if cache_ttl.is_zero() {
            return Err(anyhow!("The score cache TTL must not be zero"));
        }
        if !(decay_base > 0.0 && decay_base <= 1.0) {
            return Err(anyhow!(
                "The decay base must be within (0, 1], got {decay_base}"
            ));
        }
        let scores = ScoringParams {
            cache_ttl,
            decay_base,
        };

        let raw::Listing {
            page_size,
            search_page_size,
        } = listing.unwrap_or_default();

        if page_size == 0 || search_page_size == 0 {
            return Err(anyhow!("Page sizes must be positive"));
        }
        let listing = Listing {
            page_size,
            search_page_size,
        };

        Ok(Self { scores, listing })
    }
}
