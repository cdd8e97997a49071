//! Client configuration, credentials and cached tokens.

use std::env;
use std::time::Duration;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Azure public-cloud management endpoint.
pub const ARM_BASE: &str = "https://management.azure.com";

/// Azure AD authority for the public cloud.
pub const DEFAULT_AUTHORITY_HOST: &str = "https://login.microsoftonline.com";

/// Scope requested for management-plane tokens.
pub const ARM_SCOPE: &str = "https://management.azure.com/.default";

/// Runtime tuning for [`crate::AzureClient`].
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct ArmConfig {
    /// Management endpoint, without a trailing slash.
    pub endpoint: String,
    pub request_timeout_secs: u64,
    /// Retries for 429 and transient 5xx responses.
    pub max_retries: u32,
    /// Base delay between retries (doubled each attempt).
    pub retry_base_delay_ms: u64,
    /// Poll interval used when the service sends no `Retry-After`.
    pub poll_interval_secs: u64,
    /// Upper bound on how long a poller keeps going.
    pub poll_timeout_secs: u64,
}

impl Default for ArmConfig {
    fn default() -> Self {
        Self {
            endpoint: ARM_BASE.into(),
            request_timeout_secs: 30,
            max_retries: 3,
            retry_base_delay_ms: 500,
            poll_interval_secs: 10,
            poll_timeout_secs: 60 * 60,
        }
    }
}

impl ArmConfig {
    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }

    pub fn poll_interval(&self) -> Duration {
        Duration::from_secs(self.poll_interval_secs)
    }

    pub fn poll_timeout(&self) -> Duration {
        Duration::from_secs(self.poll_timeout_secs)
    }
}

/// Client credentials for Azure AD (service principal / app registration).
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct AzureCredentials {
    pub client_id: String,
    pub client_secret: String,
    pub tenant_id: String,
    pub subscription_id: String,
    /// Authority override for sovereign clouds.
    #[serde(default)]
    pub authority_host: Option<String>,
}

impl AzureCredentials {
    /// Read the conventional `AZURE_*` environment variables.
    ///
    /// Returns `None` unless tenant, client id and client secret are all set.
    pub fn from_env() -> Option<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Option<Self> {
        let non_empty = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());
        Some(Self {
            tenant_id: non_empty("AZURE_TENANT_ID")?,
            client_id: non_empty("AZURE_CLIENT_ID")?,
            client_secret: non_empty("AZURE_CLIENT_SECRET")?,
            subscription_id: non_empty("AZURE_SUBSCRIPTION_ID").unwrap_or_default(),
            authority_host: non_empty("AZURE_AUTHORITY_HOST"),
        })
    }

    pub fn is_complete(&self) -> bool {
        !self.client_id.is_empty() && !self.client_secret.is_empty() && !self.tenant_id.is_empty()
    }

    pub fn authority(&self) -> &str {
        self.authority_host
            .as_deref()
            .map(|h| h.trim_end_matches('/'))
            .unwrap_or(DEFAULT_AUTHORITY_HOST)
    }
}

/// Cached bearer token.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct AzureToken {
    pub access_token: String,
    pub token_type: String,
    #[serde(default)]
    pub expires_at: Option<DateTime<Utc>>,
}

impl AzureToken {
    /// A token without an expiry never expires.
    pub fn is_expired(&self) -> bool {
        match self.expires_at {
            // refresh a minute early so in-flight requests don't race expiry
            Some(exp) => Utc::now() + chrono::Duration::seconds(60) >= exp,
            None => false,
        }
    }

    pub fn is_usable(&self) -> bool {
        !self.access_token.is_empty() && !self.is_expired()
    }
}

/// Raw token endpoint response.
#[derive(Debug, Deserialize)]
pub struct TokenResponse {
    pub access_token: String,
    pub token_type: String,
    #[serde(default)]
    pub expires_in: Option<u64>,
}
