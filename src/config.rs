//! Host configuration read from the environment.
//!
//! SYSTEM CONTEXT
//! ==============
//! The host owns every deploy-time setting, including the ones the browser
//! needs. Those are collected into the client's `AppConfig` and embedded in
//! the rendered page.
//!
//! ERROR HANDLING
//! ==============
//! A missing Firestore project or an unparsable number stops startup. Blank
//! variables count as unset.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use std::path::PathBuf;
use std::str::FromStr;

use client::config::{AppConfig, FirestoreConfig};
use client::state::plans::Plan;

const DEFAULT_PORT: u16 = 3000;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("{0} is required")]
    Missing(&'static str),

    #[error("invalid {name}: {value:?}")]
    Invalid { name: &'static str, value: String },
}

#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub port: u16,
    /// Directory served under `/calculators`.
    pub calculators_dir: PathBuf,
    /// Settings handed to the browser.
    pub app: AppConfig,
}

impl ServerConfig {
    /// Read configuration from the process environment.
    ///
    /// # Errors
    ///
    /// See [`ServerConfig::from_lookup`].
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Read configuration through `lookup`, which maps a variable name to its
    /// value.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Missing`] without `FIRESTORE_PROJECT_ID` and
    /// [`ConfigError::Invalid`] when `PORT` or `BACKEND_READY_TIMEOUT_MS` do
    /// not parse.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let var = |name: &str| lookup(name).map(|v| v.trim().to_owned()).filter(|v| !v.is_empty());

        let defaults = AppConfig::default();
        let firestore_defaults = FirestoreConfig::default();

        let firestore = FirestoreConfig {
            endpoint: var("FIRESTORE_ENDPOINT").unwrap_or(firestore_defaults.endpoint),
            project_id: var("FIRESTORE_PROJECT_ID").ok_or(ConfigError::Missing("FIRESTORE_PROJECT_ID"))?,
            database: var("FIRESTORE_DATABASE").unwrap_or(firestore_defaults.database),
            collection: var("FIRESTORE_COLLECTION").unwrap_or(firestore_defaults.collection),
            api_key: var("FIRESTORE_API_KEY"),
        };

        let mut subscription_urls = defaults.subscription_urls;
        for plan in Plan::ALL {
            let name = format!("SUBSCRIPTION_URL_{}", plan.key().to_ascii_uppercase());
            if let Some(url) = var(&name) {
                subscription_urls.insert(plan, url);
            }
        }

        let app = AppConfig {
            firestore,
            storage_key: var("SESSION_STORAGE_KEY").unwrap_or(defaults.storage_key),
            ready_timeout_ms: parse_or("BACKEND_READY_TIMEOUT_MS", var("BACKEND_READY_TIMEOUT_MS"), defaults.ready_timeout_ms)?,
            subscription_urls,
            calculators: defaults.calculators,
        };

        Ok(Self {
            port: parse_or("PORT", var("PORT"), DEFAULT_PORT)?,
            calculators_dir: var("CALCULATORS_DIR")
                .map_or_else(|| PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("calculators"), PathBuf::from),
            app,
        })
    }
}

fn parse_or<T: FromStr>(name: &'static str, raw: Option<String>, default: T) -> Result<T, ConfigError> {
    match raw {
        None => Ok(default),
        Some(value) => value.parse().map_err(|_| ConfigError::Invalid { name, value }),
    }
}
