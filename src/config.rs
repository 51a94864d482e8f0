use std::env;
use std::path::PathBuf;
use std::str::FromStr;

use thiserror::Error;

use crate::domain::locale::{DEFAULT_DATETIME_FORMAT, DEFAULT_DATE_FORMAT};

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{0} must be set")]
    Missing(&'static str),

    #[error("{name} has an invalid value '{value}'")]
    Invalid { name: &'static str, value: String },

    #[error("Translations: {0}")]
    Translations(String),
}

/// Service settings, read from the environment (and `.env` when present).
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub database_url: String,
    pub host: String,
    pub port: u16,
    pub lang_id: i32,
    pub shop_id: Option<i32>,
    pub currency_iso: String,
    pub date_format: String,
    pub datetime_format: String,
    pub shop_base_url: String,
    /// Per-shop front-office URLs of a multistore install.
    pub shop_urls: Vec<(i32, String)>,
    pub admin_base_path: String,
    pub translations_path: Option<PathBuf>,
}

impl AppConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Build from any variable source; `from_env` passes the process
    /// environment.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |name: &str| lookup(name).filter(|v| !v.is_empty());
        let or = |name: &str, default: &str| var(name).unwrap_or_else(|| default.to_string());

        Ok(Self {
            database_url: var("DATABASE_URL").ok_or(ConfigError::Missing("DATABASE_URL"))?,
            host: or("HOST", "0.0.0.0"),
            port: parse("PORT", &or("PORT", "8080"))?,
            lang_id: parse("CONTEXT_LANG_ID", &or("CONTEXT_LANG_ID", "1"))?,
            shop_id: var("CONTEXT_SHOP_ID")
                .map(|v| parse("CONTEXT_SHOP_ID", &v))
                .transpose()?,
            currency_iso: or("CURRENCY_ISO", "EUR").to_ascii_uppercase(),
            date_format: or("DATE_FORMAT", DEFAULT_DATE_FORMAT),
            datetime_format: or("DATETIME_FORMAT", DEFAULT_DATETIME_FORMAT),
            shop_base_url: or("SHOP_BASE_URL", "http://localhost"),
            shop_urls: var("SHOP_URLS")
                .map(|v| parse_shop_urls(&v))
                .transpose()?
                .unwrap_or_default(),
            admin_base_path: or("ADMIN_BASE_PATH", "/admin"),
            translations_path: var("TRANSLATIONS_PATH").map(PathBuf::from),
        })
    }
}

fn parse<T: FromStr>(name: &'static str, value: &str) -> Result<T, ConfigError> {
    value.parse().map_err(|_| ConfigError::Invalid {
        name,
        value: value.to_string(),
    })
}

/// `SHOP_URLS=2=https://outlet.example,3=https://pro.example`
fn parse_shop_urls(value: &str) -> Result<Vec<(i32, String)>, ConfigError> {
    let invalid = || ConfigError::Invalid {
        name: "SHOP_URLS",
        value: value.to_string(),
    };
    value
        .split(',')
        .map(str::trim)
        .filter(|entry| !entry.is_empty())
        .map(|entry| {
            let (shop_id, url) = entry.split_once('=').ok_or_else(invalid)?;
            let shop_id = shop_id.trim().parse().map_err(|_| invalid())?;
            let url = url.trim();
            if url.is_empty() {
                return Err(invalid());
            }
            Ok((shop_id, url.to_string()))
        })
        .collect()
}
