//! Client settings loaded from JSON
//!
//! ```json
//! {
//!   "base_url": "https://catfact.ninja",
//!   "page_size": 100,
//!   "timeout_secs": 10,
//!   "user_agent": "my-app/1.0"
//! }
//! ```
//!
//! Every field is optional.

use super::catfacts::{CatFactsClient, DEFAULT_BASE_URL, DEFAULT_PAGE_SIZE};
use crate::error::{Error, Result};
use crate::transport::{HttpTransport, HttpTransportConfig};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

/// Settings for building a [`CatFactsClient`] backed by [`HttpTransport`]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ClientConfig {
    /// API base URL
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Items requested per page
    #[serde(default = "default_page_size")]
    pub page_size: i64,

    /// Per-request timeout in seconds
    #[serde(default)]
    pub timeout_secs: Option<u64>,

    /// User-Agent header override
    #[serde(default)]
    pub user_agent: Option<String>,
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

fn default_page_size() -> i64 {
    DEFAULT_PAGE_SIZE
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            page_size: default_page_size(),
            timeout_secs: None,
            user_agent: None,
        }
    }
}

impl ClientConfig {
    /// Parse settings from a JSON string
    pub fn from_json_str(json: &str) -> Result<Self> {
        serde_json::from_str(json).map_err(|e| Error::config(format!("Invalid client config: {e}")))
    }

    /// Load settings from a JSON file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)?;
        serde_json::from_str(&content).map_err(|e| {
            Error::config(format!("Invalid client config in {}: {e}", path.display()))
        })
    }

    /// Transport settings derived from this config
    pub fn transport_config(&self) -> HttpTransportConfig {
        let mut builder = HttpTransportConfig::builder();
        if let Some(secs) = self.timeout_secs {
            builder = builder.timeout(Duration::from_secs(secs));
        }
        if let Some(agent) = &self.user_agent {
            builder = builder.user_agent(agent.clone());
        }
        builder.build()
    }

    /// Build a client using these settings
    pub fn build_client(&self) -> Result<CatFactsClient> {
        let transport = HttpTransport::with_config(self.transport_config())?;
        Ok(CatFactsClient::from_url_str(&self.base_url)?
            .with_page_size(self.page_size)
            .with_transport(transport))
    }
}
