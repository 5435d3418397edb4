//! Runtime configuration shared by the host server and the browser.
//!
//! SYSTEM CONTEXT
//! ==============
//! The server builds an [`AppConfig`] from its environment and embeds it in the
//! SSR shell as `<meta name="app-config">`. At hydration the client reads it
//! back with [`AppConfig::from_document`]. Every field has a default so a
//! partial payload still yields a usable config.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::state::plans::Plan;

/// Name of the meta tag carrying the serialized config.
pub const CONFIG_META_NAME: &str = "app-config";

pub const DEFAULT_FIRESTORE_ENDPOINT: &str = "https://firestore.googleapis.com/v1";
pub const DEFAULT_FIRESTORE_DATABASE: &str = "(default)";
pub const DEFAULT_USERS_COLLECTION: &str = "users";
pub const DEFAULT_STORAGE_KEY: &str = "freepro_user";
pub const DEFAULT_READY_TIMEOUT_MS: u32 = 5_000;

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub firestore: FirestoreConfig,
    /// `localStorage` key holding the persisted session.
    pub storage_key: String,
    /// Upper bound on the startup wait for the backend adapter.
    pub ready_timeout_ms: u32,
    /// Purchase page per plan.
    pub subscription_urls: BTreeMap<Plan, String>,
    pub calculators: Vec<CalculatorConfig>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            firestore: FirestoreConfig::default(),
            storage_key: DEFAULT_STORAGE_KEY.to_owned(),
            ready_timeout_ms: DEFAULT_READY_TIMEOUT_MS,
            subscription_urls: BTreeMap::new(),
            calculators: CalculatorConfig::defaults(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FirestoreConfig {
    pub endpoint: String,
    pub project_id: String,
    pub database: String,
    pub collection: String,
    pub api_key: Option<String>,
}

impl Default for FirestoreConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_FIRESTORE_ENDPOINT.to_owned(),
            project_id: String::new(),
            database: DEFAULT_FIRESTORE_DATABASE.to_owned(),
            collection: DEFAULT_USERS_COLLECTION.to_owned(),
            api_key: None,
        }
    }
}

impl FirestoreConfig {
    /// Whether enough is set to address a document.
    pub fn is_configured(&self) -> bool {
        !self.project_id.trim().is_empty() && !self.endpoint.trim().is_empty()
    }

    /// REST URL of the user document keyed by `email`.
    pub fn document_url(&self, email: &str) -> String {
        let url = format!("{}/{}", self.collection_url(), urlencoding::encode(email));
        self.with_key(url, '?')
    }

    /// One-document listing of the collection, used to check reachability.
    pub fn probe_url(&self) -> String {
        let url = format!("{}?pageSize=1", self.collection_url());
        self.with_key(url, '&')
    }

    fn collection_url(&self) -> String {
        format!(
            "{}/projects/{}/databases/{}/documents/{}",
            self.endpoint.trim_end_matches('/'),
            self.project_id,
            self.database,
            self.collection,
        )
    }

    fn with_key(&self, mut url: String, sep: char) -> String {
        if let Some(key) = self.api_key.as_deref().filter(|k| !k.is_empty()) {
            url.push(sep);
            url.push_str("key=");
            url.push_str(&urlencoding::encode(key));
        }
        url
    }
}

/// One embedded calculator tab.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalculatorConfig {
    pub id: String,
    pub title: String,
    /// Page loaded into the calculator frame.
    pub src: String,
}

impl CalculatorConfig {
    fn defaults() -> Vec<Self> {
        vec![
            Self {
                id: "arbipro".to_owned(),
                title: "ArbiPro Calculator".to_owned(),
                src: "/calculators/arbipro/index.html".to_owned(),
            },
            Self {
                id: "freepro".to_owned(),
                title: "FreePro Calculator".to_owned(),
                src: "/calculators/freepro/index.html".to_owned(),
            },
        ]
    }
}

impl AppConfig {
    /// Purchase URL for `plan`, tagged with the buyer's e-mail when known.
    pub fn checkout_url(&self, plan: Plan, email: Option<&str>) -> Option<String> {
        let base = self.subscription_urls.get(&plan).filter(|u| !u.trim().is_empty())?;
        Some(match email.filter(|e| !e.is_empty()) {
            Some(email) => {
                let sep = if base.contains('?') { '&' } else { '?' };
                format!("{base}{sep}email={}", urlencoding::encode(email))
            }
            None => base.clone(),
        })
    }

    /// Read the config embedded by the server. Falls back to defaults when the
    /// tag is missing or malformed.
    pub fn from_document() -> Self {
        #[cfg(feature = "hydrate")]
        {
            let raw = web_sys::window()
                .and_then(|w| w.document())
                .and_then(|d| d.query_selector(&format!("meta[name=\"{CONFIG_META_NAME}\"]")).ok().flatten())
                .and_then(|el| el.get_attribute("content"));
            match raw.as_deref().map(serde_json::from_str::<Self>) {
                Some(Ok(config)) => return config,
                Some(Err(e)) => log::warn!("app config unreadable, using defaults: {e}"),
                None => log::warn!("app config meta tag missing, using defaults"),
            }
        }
        Self::default()
    }

    /// Serialized form embedded in the shell.
    pub fn to_meta_content(&self) -> String {
        serde_json::to_string(self).unwrap_or_else(|_| "{}".to_owned())
    }
}
