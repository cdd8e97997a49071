use serde::{Deserialize, Serialize};

use super::ProxyResource;
use crate::constants::{AzureResourceType, CustomHostNameDnsRecordType, HostNameType, SslState};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HostNameBindingProperties {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub azure_resource_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub azure_resource_type: Option<AzureResourceType>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub custom_host_name_dns_record_type: Option<CustomHostNameDnsRecordType>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub domain_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub host_name_type: Option<HostNameType>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub site_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ssl_state: Option<SslState>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub thumbprint: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub virtual_ip: Option<String>,
}

pub type HostNameBinding = ProxyResource<HostNameBindingProperties>;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct IdentifierProperties {
    /// The ownership token; the wire name is `id`.
    #[serde(default, rename = "id", skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
}

/// A domain ownership identifier.
pub type Identifier = ProxyResource<IdentifierProperties>;
