use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use super::ProxyResource;
use crate::constants::{
    AzureStorageProtocol, AzureStorageState, AzureStorageType, BuiltInAuthenticationProvider,
    ConfigReferenceSource, ConnectionStringType, LogLevel, ResolveStatus,
    UnauthenticatedClientAction,
};

/// App settings as a flat name → value map.
pub type StringDictionary = ProxyResource<HashMap<String, String>>;

/// Connection strings keyed by name.
pub type ConnectionStringDictionary = ProxyResource<HashMap<String, ConnStringValueTypePair>>;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConnStringValueTypePair {
    #[serde(rename = "type")]
    pub connection_type: ConnectionStringType,
    pub value: String,
}

// ─── Auth settings ──────────────────────────────────────────────────

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SiteAuthSettingsProperties {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub aad_claims_authorization: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub additional_login_params: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub allowed_audiences: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub allowed_external_redirect_urls: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub auth_file_path: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub client_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub client_secret: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub client_secret_setting_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub config_version: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_provider: Option<BuiltInAuthenticationProvider>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub enabled: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub facebook_app_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub git_hub_client_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub google_client_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_auth_from_file: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub issuer: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub microsoft_account_client_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub runtime_version: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub token_refresh_extension_hours: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub token_store_enabled: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub twitter_consumer_key: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub unauthenticated_client_action: Option<UnauthenticatedClientAction>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub validate_issuer: Option<bool>,
}

pub type SiteAuthSettings = ProxyResource<SiteAuthSettingsProperties>;

/// Whether FTP or SCM basic-auth publishing is allowed.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CsmPublishingCredentialsPoliciesEntityProperties {
    pub allow: bool,
}

pub type CsmPublishingCredentialsPoliciesEntity =
    ProxyResource<CsmPublishingCredentialsPoliciesEntityProperties>;

// ─── Diagnostic logs ────────────────────────────────────────────────

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SiteLogsConfigProperties {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub application_logs: Option<ApplicationLogsConfig>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub detailed_error_messages: Option<EnabledConfig>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub failed_requests_tracing: Option<EnabledConfig>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub http_logs: Option<HttpLogsConfig>,
}

pub type SiteLogsConfig = ProxyResource<SiteLogsConfigProperties>;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApplicationLogsConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub azure_blob_storage: Option<AzureBlobStorageApplicationLogsConfig>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub azure_table_storage: Option<AzureTableStorageApplicationLogsConfig>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file_system: Option<FileSystemApplicationLogsConfig>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AzureBlobStorageApplicationLogsConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub level: Option<LogLevel>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub retention_in_days: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sas_url: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AzureTableStorageApplicationLogsConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub level: Option<LogLevel>,
    pub sas_url: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FileSystemApplicationLogsConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub level: Option<LogLevel>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EnabledConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub enabled: Option<bool>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HttpLogsConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub azure_blob_storage: Option<AzureBlobStorageHttpLogsConfig>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file_system: Option<FileSystemHttpLogsConfig>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AzureBlobStorageHttpLogsConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub enabled: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub retention_in_days: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sas_url: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FileSystemHttpLogsConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub enabled: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub retention_in_days: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub retention_in_mb: Option<i64>,
}

// ─── Azure storage mounts ───────────────────────────────────────────

/// Storage mounts keyed by mount name.
pub type AzureStoragePropertyDictionaryResource = ProxyResource<HashMap<String, AzureStorageInfoValue>>;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AzureStorageInfoValue {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub access_key: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub account_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mount_path: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub protocol: Option<AzureStorageProtocol>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub share_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub state: Option<AzureStorageState>,
    #[serde(default, rename = "type", skip_serializing_if = "Option::is_none")]
    pub storage_type: Option<AzureStorageType>,
}

// ─── Slot-sticky names ──────────────────────────────────────────────

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SlotConfigNames {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub app_setting_names: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub azure_storage_config_names: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub connection_string_names: Option<Vec<String>>,
}

pub type SlotConfigNamesResource = ProxyResource<SlotConfigNames>;

// ─── Key Vault references ───────────────────────────────────────────

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiKvReferenceProperties {
    #[serde(default)]
    pub active_version: Option<String>,
    #[serde(default)]
    pub details: Option<String>,
    #[serde(default)]
    pub identity_type: Option<super::ManagedServiceIdentity>,
    #[serde(default)]
    pub reference: Option<String>,
    #[serde(default)]
    pub secret_name: Option<String>,
    #[serde(default)]
    pub secret_version: Option<String>,
    #[serde(default)]
    pub source: Option<ConfigReferenceSource>,
    #[serde(default)]
    pub status: Option<ResolveStatus>,
    #[serde(default)]
    pub vault_name: Option<String>,
}

pub type ApiKvReference = ProxyResource<ApiKvReferenceProperties>;
