// src/config.rs
use std::env;
use std::net::SocketAddr;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{var} is not valid: {value:?} ({reason})")]
    Invalid {
        var: &'static str,
        value: String,
        reason: String,
    },
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub bind_addr: SocketAddr,
    /// JSON fixture holding every listing.
    pub data_path: PathBuf,
    /// Cards per page. Always > 0.
    pub page_size: usize,
    pub max_workers: usize,
    /// Fake delay before the first grid render, in milliseconds.
    pub load_delay_ms: u64,
    /// Fake delay before a filter change is applied, in milliseconds.
    pub filter_delay_ms: u64,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            bind_addr: SocketAddr::from(([127, 0, 0, 1], 3000)),
            data_path: PathBuf::from("data/listings.json"),
            page_size: 6, // 3 rows of 2
            max_workers: 8,
            load_delay_ms: 0,
            filter_delay_ms: 0,
        }
    }
}

impl AppConfig {
    /// Reads `LISTINGS_*` variables from the process environment
    /// (after `.env`, if present, has been loaded).
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Same as `from_env` but with an injectable lookup, so tests don't touch
    /// the real environment.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut cfg = AppConfig::default();

        if let Some(v) = lookup("LISTINGS_BIND_ADDR") {
            cfg.bind_addr = parse_var("LISTINGS_BIND_ADDR", &v)?;
        }
        if let Some(v) = lookup("LISTINGS_DATA_PATH") {
            cfg.data_path = PathBuf::from(v);
        }
        if let Some(v) = lookup("LISTINGS_PAGE_SIZE") {
            cfg.page_size = parse_var("LISTINGS_PAGE_SIZE", &v)?;
            if cfg.page_size == 0 {
                return Err(ConfigError::Invalid {
                    var: "LISTINGS_PAGE_SIZE",
                    value: v,
                    reason: "must be greater than zero".into(),
                });
            }
        }
        if let Some(v) = lookup("LISTINGS_MAX_WORKERS") {
            cfg.max_workers = parse_var("LISTINGS_MAX_WORKERS", &v)?;
        }
        if let Some(v) = lookup("LISTINGS_LOAD_DELAY_MS") {
            cfg.load_delay_ms = parse_var("LISTINGS_LOAD_DELAY_MS", &v)?;
        }
        if let Some(v) = lookup("LISTINGS_FILTER_DELAY_MS") {
            cfg.filter_delay_ms = parse_var("LISTINGS_FILTER_DELAY_MS", &v)?;
        }

        Ok(cfg)
    }
}

fn parse_var<T>(var: &'static str, value: &str) -> Result<T, ConfigError>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    value.trim().parse().map_err(|e: T::Err| ConfigError::Invalid {
        var,
        value: value.to_string(),
        reason: e.to_string(),
    })
}
