use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use super::{ArmIdWrapper, ProxyResource, ResourceFields};
use crate::constants::{PublicCertificateLocation, RouteType};

// ─── Virtual network integration ────────────────────────────────────

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VnetInfo {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cert_blob: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cert_thumbprint: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dns_servers: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_swift: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub resync_required: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub routes: Option<Vec<VnetRoute>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vnet_resource_id: Option<String>,
}

pub type VnetInfoResource = ProxyResource<VnetInfo>;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VnetRouteProperties {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_address: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub route_type: Option<RouteType>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_address: Option<String>,
}

pub type VnetRoute = ProxyResource<VnetRouteProperties>;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VnetGatewayProperties {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vnet_name: Option<String>,
    /// SAS URL of the VPN client package.
    pub vpn_package_uri: String,
}

pub type VnetGateway = ProxyResource<VnetGatewayProperties>;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NetworkFeaturesProperties {
    #[serde(default)]
    pub hybrid_connections: Option<Vec<RelayServiceConnectionEntity>>,
    #[serde(default)]
    pub hybrid_connections_v2: Option<Vec<HybridConnection>>,
    #[serde(default)]
    pub virtual_network_connection: Option<VnetInfo>,
    #[serde(default)]
    pub virtual_network_name: Option<String>,
}

pub type NetworkFeatures = ProxyResource<NetworkFeaturesProperties>;

// ─── Hybrid connections ─────────────────────────────────────────────

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HybridConnectionProperties {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hostname: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub port: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub relay_arm_uri: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub relay_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub send_key_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub send_key_value: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub service_bus_namespace: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub service_bus_suffix: Option<String>,
}

pub type HybridConnection = ProxyResource<HybridConnectionProperties>;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RelayServiceConnectionEntityProperties {
    #[serde(default)]
    pub biztalk_uri: Option<String>,
    #[serde(default)]
    pub entity_connection_string: Option<String>,
    #[serde(default)]
    pub entity_name: Option<String>,
    #[serde(default)]
    pub hostname: Option<String>,
    #[serde(default)]
    pub port: Option<i64>,
    #[serde(default)]
    pub resource_connection_string: Option<String>,
    #[serde(default)]
    pub resource_type: Option<String>,
}

pub type RelayServiceConnectionEntity = ProxyResource<RelayServiceConnectionEntityProperties>;

// ─── Network traces ─────────────────────────────────────────────────

/// One capture produced by a network trace operation.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NetworkTrace {
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub path: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
}

// ─── Private endpoints ──────────────────────────────────────────────

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PrivateLinkConnectionState {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub actions_required: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// `Approved`, `Rejected`, `Pending` or `Disconnected`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RemotePrivateEndpointConnectionProperties {
    #[serde(default)]
    pub ip_addresses: Option<Vec<String>>,
    #[serde(default)]
    pub private_endpoint: Option<ArmIdWrapper>,
    #[serde(default)]
    pub private_link_service_connection_state: Option<PrivateLinkConnectionState>,
    #[serde(default)]
    pub provisioning_state: Option<String>,
}

pub type RemotePrivateEndpointConnectionArmResource =
    ProxyResource<RemotePrivateEndpointConnectionProperties>;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PrivateLinkConnectionApprovalRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub private_link_service_connection_state: Option<PrivateLinkConnectionState>,
}

pub type PrivateLinkConnectionApprovalRequestResource =
    ProxyResource<PrivateLinkConnectionApprovalRequest>;

// ─── Premier add-ons ────────────────────────────────────────────────

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PremierAddOnProperties {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub marketplace_offer: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub marketplace_publisher: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub product: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sku: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vendor: Option<String>,
}

/// A premier add-on; unlike most child resources it is location-bound.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PremierAddOn {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
    pub location: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub properties: Option<PremierAddOnProperties>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tags: Option<HashMap<String, String>>,
    #[serde(default, rename = "type", skip_serializing_if = "Option::is_none")]
    pub resource_type: Option<String>,
}

impl ResourceFields for PremierAddOn {
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

// ─── Public certificates ────────────────────────────────────────────

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PublicCertificateProperties {
    /// Base64-encoded certificate bytes.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub blob: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub public_certificate_location: Option<PublicCertificateLocation>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub thumbprint: Option<String>,
}

pub type PublicCertificate = ProxyResource<PublicCertificateProperties>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn vnet_routes() {
        let vnet: VnetInfoResource = serde_json::from_str(
            r#"{"name":"vnet1","properties":{"vnetResourceId":"/vnet","isSwift":true,"routes":[{"properties":{"routeType":"STATIC","startAddress":"10.0.0.0"}}]}}"#,
        )
        .unwrap();
        let props = vnet.properties.unwrap();
        assert_eq!(props.is_swift, Some(true));
        let route = props.routes.unwrap().remove(0).properties.unwrap();
        assert_eq!(route.route_type, Some(RouteType::Static));
    }

    #[test]
    fn premier_add_on_location() {
        let addon: PremierAddOn =
            serde_json::from_str(r#"{"name":"addon1","location":"westus","properties":{"sku":"Basic"}}"#)
                .unwrap();
        assert_eq!(addon.location(), Some("westus"));
        assert_eq!(addon.properties.unwrap().sku.as_deref(), Some("Basic"));
    }

    #[test]
    fn approval_request_body() {
        let body = PrivateLinkConnectionApprovalRequestResource::with_properties(
            PrivateLinkConnectionApprovalRequest {
                private_link_service_connection_state: Some(PrivateLinkConnectionState {
                    status: Some("Approved".into()),
                    ..Default::default()
                }),
            },
        );
        assert_eq!(
            serde_json::to_value(&body).unwrap(),
            serde_json::json!({"properties": {"privateLinkServiceConnectionState": {"status": "Approved"}}})
        );
    }
}
