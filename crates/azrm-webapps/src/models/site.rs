use std::collections::HashMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{ErrorEntity, ProxyResource, ResourceFields};
use crate::constants::{
    ClientCertMode, ConnectionStringType, DefaultAction, FtpsState, HostType, IpFilterTag,
    ManagedPipelineMode, MySqlMigrationType, OperationStatus, RedundancyMode, ScmType,
    SiteAvailabilityState, SiteLoadBalancing, SslState, SupportedTlsVersions, TlsCipherSuites,
    UsageState,
};

// ─── Site ───────────────────────────────────────────────────────────

/// A web app, function app or deployment slot.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Site {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub extended_location: Option<ExtendedLocation>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub identity: Option<ManagedServiceIdentity>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
    pub location: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub properties: Option<SiteProperties>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tags: Option<HashMap<String, String>>,
    #[serde(default, rename = "type", skip_serializing_if = "Option::is_none")]
    pub resource_type: Option<String>,
}

impl ResourceFields for Site {
    fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    fn kind(&self) -> Option<&str> {
        self.kind.as_deref()
    }

    fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    fn resource_type(&self) -> Option<&str> {
        self.resource_type.as_deref()
    }

    fn location(&self) -> Option<&str> {
        Some(&self.location)
    }
}

/// Body of a PATCH against a site.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SitePatchResource {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub identity: Option<ManagedServiceIdentity>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub properties: Option<SiteProperties>,
    #[serde(default, rename = "type", skip_serializing_if = "Option::is_none")]
    pub resource_type: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExtendedLocation {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default, rename = "type")]
    pub location_type: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ManagedServiceIdentity {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub principal_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tenant_id: Option<String>,
    /// `None`, `SystemAssigned`, `UserAssigned` or `SystemAssigned, UserAssigned`.
    #[serde(rename = "type")]
    pub identity_type: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_assigned_identities: Option<HashMap<String, UserAssignedIdentity>>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserAssignedIdentity {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub client_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub principal_id: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SiteProperties {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub availability_state: Option<SiteAvailabilityState>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub client_affinity_enabled: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub client_cert_enabled: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub client_cert_exclusion_paths: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub client_cert_mode: Option<ClientCertMode>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub container_size: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub custom_domain_verification_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub daily_memory_time_quota: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_host_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub enabled: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub enabled_host_names: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub host_name_ssl_states: Option<Vec<HostNameSslState>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub host_names: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub host_names_disabled: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub https_only: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hyper_v: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub in_progress_operation_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_default_container: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub key_vault_reference_identity: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_modified_time_utc: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub outbound_ip_addresses: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub possible_outbound_ip_addresses: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub public_network_access: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub redundancy_mode: Option<RedundancyMode>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub repository_site_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reserved: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub resource_group: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scm_site_also_stopped: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub server_farm_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub site_config: Option<SiteConfig>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub slot_swap_status: Option<SlotSwapStatus>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub storage_account_required: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub suspended_till: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target_swap_slot: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub usage_state: Option<UsageState>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub virtual_network_subnet_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vnet_content_share_enabled: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vnet_image_pull_enabled: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vnet_route_all_enabled: Option<bool>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HostNameSslState {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub host_type: Option<HostType>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ssl_state: Option<SslState>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub thumbprint: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub to_update: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub virtual_ip: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SlotSwapStatus {
    #[serde(default)]
    pub destination_slot_name: Option<String>,
    #[serde(default)]
    pub source_slot_name: Option<String>,
    #[serde(default)]
    pub timestamp_utc: Option<DateTime<Utc>>,
}

// ─── Site config ────────────────────────────────────────────────────

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SiteConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub acr_use_managed_identity_creds: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub acr_user_managed_identity_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub always_on: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub app_command_line: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub app_settings: Option<Vec<NameValuePair>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub auto_heal_enabled: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub connection_strings: Option<Vec<ConnStringInfo>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cors: Option<CorsSettings>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_documents: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub detailed_error_logging_enabled: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub document_root: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub elastic_web_app_scale_limit: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ftps_state: Option<FtpsState>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub function_app_scale_limit: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub health_check_path: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub http20_enabled: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub http_logging_enabled: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ip_security_restrictions: Option<Vec<IpSecurityRestriction>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ip_security_restrictions_default_action: Option<DefaultAction>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub java_container: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub java_container_version: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub java_version: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub linux_fx_version: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub load_balancing: Option<SiteLoadBalancing>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub local_my_sql_enabled: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub managed_pipeline_mode: Option<ManagedPipelineMode>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_tls_cipher_suite: Option<TlsCipherSuites>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_tls_version: Option<SupportedTlsVersions>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub minimum_elastic_instance_count: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub net_framework_version: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub node_version: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub number_of_workers: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub php_version: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub power_shell_version: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pre_warmed_instance_count: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub python_version: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub remote_debugging_enabled: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub remote_debugging_version: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub request_tracing_enabled: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scm_ip_security_restrictions: Option<Vec<IpSecurityRestriction>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scm_ip_security_restrictions_default_action: Option<DefaultAction>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scm_ip_security_restrictions_use_main: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scm_min_tls_version: Option<SupportedTlsVersions>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scm_type: Option<ScmType>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub use32_bit_worker_process: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub virtual_applications: Option<Vec<VirtualApplication>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vnet_route_all_enabled: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub web_sockets_enabled: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub windows_fx_version: Option<String>,
}

pub type SiteConfigResource = ProxyResource<SiteConfig>;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NameValuePair {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub value: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConnStringInfo {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub connection_string: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, rename = "type", skip_serializing_if = "Option::is_none")]
    pub connection_type: Option<ConnectionStringType>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CorsSettings {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub allowed_origins: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub support_credentials: Option<bool>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IpSecurityRestriction {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub action: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub headers: Option<HashMap<String, Vec<String>>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ip_address: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub priority: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subnet_mask: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tag: Option<IpFilterTag>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vnet_subnet_resource_id: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VirtualApplication {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub physical_path: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub preload_enabled: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub virtual_directories: Option<Vec<VirtualDirectory>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub virtual_path: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VirtualDirectory {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub physical_path: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub virtual_path: Option<String>,
}

// ─── Slot swap & migrations ─────────────────────────────────────────

/// Body of the slot-swap operations.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CsmSlotEntity {
    pub preserve_vnet: bool,
    pub target_slot: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StorageMigrationOptionsProperties {
    pub azurefiles_connection_string: String,
    pub azurefiles_share: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub block_write_access_to_site: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub switch_site_after_migration: Option<bool>,
}

pub type StorageMigrationOptions = ProxyResource<StorageMigrationOptionsProperties>;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StorageMigrationResponseProperties {
    #[serde(default)]
    pub operation_id: Option<String>,
}

pub type StorageMigrationResponse = ProxyResource<StorageMigrationResponseProperties>;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MigrateMySqlRequestProperties {
    pub connection_string: String,
    pub migration_type: MySqlMigrationType,
}

pub type MigrateMySqlRequest = ProxyResource<MigrateMySqlRequestProperties>;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MigrateMySqlStatusProperties {
    #[serde(default)]
    pub local_my_sql_enabled: Option<bool>,
    #[serde(default)]
    pub migration_operation_status: Option<OperationStatus>,
    #[serde(default)]
    pub operation_id: Option<String>,
}

pub type MigrateMySqlStatus = ProxyResource<MigrateMySqlStatusProperties>;

/// An asynchronous App Service operation.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Operation {
    #[serde(default)]
    pub created_time: Option<DateTime<Utc>>,
    #[serde(default)]
    pub errors: Option<Vec<ErrorEntity>>,
    #[serde(default)]
    pub expiration_time: Option<DateTime<Utc>>,
    #[serde(default)]
    pub geo_master_operation_id: Option<String>,
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub modified_time: Option<DateTime<Utc>>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub status: Option<OperationStatus>,
}
