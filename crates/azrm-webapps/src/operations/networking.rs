//! Azure App Service – VNet integration, hybrid connections, private
//! endpoints, premier add-ons and public certificates.

use serde::de::DeserializeOwned;
use serde::Serialize;

use azrm_core::{
    AzureResult, HttpMethod, ListOperationResponse, LongRunningResponse, OperationResponse,
    RequestOptions,
};
use azrm_resourceids::ResourceId;

use crate::ids::{
    AppServiceId, GatewayId, HybridConnectionNamespaceRelayId, PremierAddonId,
    PrivateEndpointConnectionId, PublicCertificateId, SlotGatewayId,
    SlotHybridConnectionNamespaceRelayId, SlotId, SlotPremierAddonId,
    SlotPrivateEndpointConnectionId, SlotPublicCertificateId, SlotVirtualNetworkConnectionId,
    VirtualNetworkConnectionId,
};
use crate::models::{
    HybridConnection, PremierAddOn, PrivateLinkConnectionApprovalRequestResource,
    PublicCertificate, RemotePrivateEndpointConnectionArmResource, VnetGateway, VnetInfoResource,
};
use crate::{WebAppsClient, NO_BODY};

impl WebAppsClient {
    // ─── Virtual network connections ────────────────────────────────

    /// All VNet connections of the site. The API answers with a bare JSON
    /// array rather than a page.
    pub async fn list_vnet_connections(
        &self,
        id: &AppServiceId,
    ) -> AzureResult<OperationResponse<Vec<VnetInfoResource>>> {
        self.get_network_item_at(
            "list_vnet_connections",
            format!("{}/virtualNetworkConnections", id.id()),
        )
        .await
    }

    pub async fn list_vnet_connections_slot(
        &self,
        id: &SlotId,
    ) -> AzureResult<OperationResponse<Vec<VnetInfoResource>>> {
        self.get_network_item_at(
            "list_vnet_connections",
            format!("{}/virtualNetworkConnections", id.id()),
        )
        .await
    }

    pub async fn get_vnet_connection(
        &self,
        id: &VirtualNetworkConnectionId,
    ) -> AzureResult<OperationResponse<VnetInfoResource>> {
        self.get_network_item_at("get_vnet_connection", id.id()).await
    }

    pub async fn get_vnet_connection_slot(
        &self,
        id: &SlotVirtualNetworkConnectionId,
    ) -> AzureResult<OperationResponse<VnetInfoResource>> {
        self.get_network_item_at("get_vnet_connection", id.id()).await
    }

    pub async fn create_or_update_vnet_connection(
        &self,
        id: &VirtualNetworkConnectionId,
        connection: &VnetInfoResource,
    ) -> AzureResult<OperationResponse<VnetInfoResource>> {
        self.put_network_item_at("create_or_update_vnet_connection", id.id(), connection)
            .await
    }

    pub async fn create_or_update_vnet_connection_slot(
        &self,
        id: &SlotVirtualNetworkConnectionId,
        connection: &VnetInfoResource,
    ) -> AzureResult<OperationResponse<VnetInfoResource>> {
        self.put_network_item_at("create_or_update_vnet_connection", id.id(), connection)
            .await
    }

    pub async fn delete_vnet_connection(
        &self,
        id: &VirtualNetworkConnectionId,
    ) -> AzureResult<OperationResponse<()>> {
        self.delete_network_item_at("delete_vnet_connection", id.id(), &[200, 404])
            .await
    }

    pub async fn delete_vnet_connection_slot(
        &self,
        id: &SlotVirtualNetworkConnectionId,
    ) -> AzureResult<OperationResponse<()>> {
        self.delete_network_item_at("delete_vnet_connection", id.id(), &[200, 404])
            .await
    }

    pub async fn get_vnet_connection_gateway(
        &self,
        id: &GatewayId,
    ) -> AzureResult<OperationResponse<VnetGateway>> {
        self.get_network_item_at("get_vnet_connection_gateway", id.id())
            .await
    }

    pub async fn get_vnet_connection_gateway_slot(
        &self,
        id: &SlotGatewayId,
    ) -> AzureResult<OperationResponse<VnetGateway>> {
        self.get_network_item_at("get_vnet_connection_gateway", id.id())
            .await
    }

    pub async fn create_or_update_vnet_connection_gateway(
        &self,
        id: &GatewayId,
        gateway: &VnetGateway,
    ) -> AzureResult<OperationResponse<VnetGateway>> {
        self.put_network_item_at("create_or_update_vnet_connection_gateway", id.id(), gateway)
            .await
    }

    pub async fn create_or_update_vnet_connection_gateway_slot(
        &self,
        id: &SlotGatewayId,
        gateway: &VnetGateway,
    ) -> AzureResult<OperationResponse<VnetGateway>> {
        self.put_network_item_at("create_or_update_vnet_connection_gateway", id.id(), gateway)
            .await
    }

    // ─── Hybrid connections ─────────────────────────────────────────

    pub async fn get_hybrid_connection(
        &self,
        id: &HybridConnectionNamespaceRelayId,
    ) -> AzureResult<OperationResponse<HybridConnection>> {
        self.get_network_item_at("get_hybrid_connection", id.id()).await
    }

    pub async fn get_hybrid_connection_slot(
        &self,
        id: &SlotHybridConnectionNamespaceRelayId,
    ) -> AzureResult<OperationResponse<HybridConnection>> {
        self.get_network_item_at("get_hybrid_connection", id.id()).await
    }

    pub async fn create_or_update_hybrid_connection(
        &self,
        id: &HybridConnectionNamespaceRelayId,
        connection: &HybridConnection,
    ) -> AzureResult<OperationResponse<HybridConnection>> {
        self.put_network_item_at("create_or_update_hybrid_connection", id.id(), connection)
            .await
    }

    pub async fn create_or_update_hybrid_connection_slot(
        &self,
        id: &SlotHybridConnectionNamespaceRelayId,
        connection: &HybridConnection,
    ) -> AzureResult<OperationResponse<HybridConnection>> {
        self.put_network_item_at("create_or_update_hybrid_connection", id.id(), connection)
            .await
    }

    pub async fn delete_hybrid_connection(
        &self,
        id: &HybridConnectionNamespaceRelayId,
    ) -> AzureResult<OperationResponse<()>> {
        self.delete_network_item_at("delete_hybrid_connection", id.id(), &[200, 404])
            .await
    }

    pub async fn delete_hybrid_connection_slot(
        &self,
        id: &SlotHybridConnectionNamespaceRelayId,
    ) -> AzureResult<OperationResponse<()>> {
        self.delete_network_item_at("delete_hybrid_connection", id.id(), &[200, 404])
            .await
    }

    // ─── Private endpoint connections ───────────────────────────────

    pub async fn get_private_endpoint_connection_list(
        &self,
        id: &AppServiceId,
    ) -> AzureResult<ListOperationResponse<RemotePrivateEndpointConnectionArmResource>> {
        self.list_network_items_at(
            "get_private_endpoint_connection_list",
            format!("{}/privateEndpointConnections", id.id()),
        )
        .await
    }

    pub async fn get_private_endpoint_connection_list_slot(
        &self,
        id: &SlotId,
    ) -> AzureResult<ListOperationResponse<RemotePrivateEndpointConnectionArmResource>> {
        self.list_network_items_at(
            "get_private_endpoint_connection_list",
            format!("{}/privateEndpointConnections", id.id()),
        )
        .await
    }

    complete_variants!(
        get_private_endpoint_connection_list,
        get_private_endpoint_connection_list_complete,
        get_private_endpoint_connection_list_complete_matching_predicate,
        AppServiceId,
        RemotePrivateEndpointConnectionArmResource
    );
    complete_variants!(
        get_private_endpoint_connection_list_slot,
        get_private_endpoint_connection_list_slot_complete,
        get_private_endpoint_connection_list_slot_complete_matching_predicate,
        SlotId,
        RemotePrivateEndpointConnectionArmResource
    );

    pub async fn get_private_endpoint_connection(
        &self,
        id: &PrivateEndpointConnectionId,
    ) -> AzureResult<OperationResponse<RemotePrivateEndpointConnectionArmResource>> {
        self.get_network_item_at("get_private_endpoint_connection", id.id())
            .await
    }

    pub async fn get_private_endpoint_connection_slot(
        &self,
        id: &SlotPrivateEndpointConnectionId,
    ) -> AzureResult<OperationResponse<RemotePrivateEndpointConnectionArmResource>> {
        self.get_network_item_at("get_private_endpoint_connection", id.id())
            .await
    }

    pub async fn approve_or_reject_private_endpoint_connection(
        &self,
        id: &PrivateEndpointConnectionId,
        request: &PrivateLinkConnectionApprovalRequestResource,
    ) -> AzureResult<LongRunningResponse<RemotePrivateEndpointConnectionArmResource>> {
        self.approve_or_reject_at(id.id(), request).await
    }

    pub async fn approve_or_reject_private_endpoint_connection_slot(
        &self,
        id: &SlotPrivateEndpointConnectionId,
        request: &PrivateLinkConnectionApprovalRequestResource,
    ) -> AzureResult<LongRunningResponse<RemotePrivateEndpointConnectionArmResource>> {
        self.approve_or_reject_at(id.id(), request).await
    }

    then_poll!(
        approve_or_reject_private_endpoint_connection,
        approve_or_reject_private_endpoint_connection_then_poll(
            id: &PrivateEndpointConnectionId,
            request: &PrivateLinkConnectionApprovalRequestResource
        )
    );
    then_poll!(
        approve_or_reject_private_endpoint_connection_slot,
        approve_or_reject_private_endpoint_connection_slot_then_poll(
            id: &SlotPrivateEndpointConnectionId,
            request: &PrivateLinkConnectionApprovalRequestResource
        )
    );

    async fn approve_or_reject_at(
        &self,
        path: String,
        request: &PrivateLinkConnectionApprovalRequestResource,
    ) -> AzureResult<LongRunningResponse<RemotePrivateEndpointConnectionArmResource>> {
        let options = RequestOptions::new(HttpMethod::Put, path, &[200, 202]);
        self.execute_lro(
            "approve_or_reject_private_endpoint_connection",
            options,
            Some(request),
        )
        .await
    }

    pub async fn delete_private_endpoint_connection(
        &self,
        id: &PrivateEndpointConnectionId,
    ) -> AzureResult<LongRunningResponse<()>> {
        self.delete_private_endpoint_connection_at(id.id()).await
    }

    pub async fn delete_private_endpoint_connection_slot(
        &self,
        id: &SlotPrivateEndpointConnectionId,
    ) -> AzureResult<LongRunningResponse<()>> {
        self.delete_private_endpoint_connection_at(id.id()).await
    }

    then_poll!(
        delete_private_endpoint_connection,
        delete_private_endpoint_connection_then_poll(id: &PrivateEndpointConnectionId)
    );
    then_poll!(
        delete_private_endpoint_connection_slot,
        delete_private_endpoint_connection_slot_then_poll(id: &SlotPrivateEndpointConnectionId)
    );

    async fn delete_private_endpoint_connection_at(
        &self,
        path: String,
    ) -> AzureResult<LongRunningResponse<()>> {
        let options = RequestOptions::new(HttpMethod::Delete, path, &[200, 202, 204]);
        self.execute_lro_no_model("delete_private_endpoint_connection", options, NO_BODY)
            .await
    }

    // ─── Premier add-ons ────────────────────────────────────────────

    /// The premier add-ons of the site, returned as a single resource.
    pub async fn list_premier_add_ons(
        &self,
        id: &AppServiceId,
    ) -> AzureResult<OperationResponse<PremierAddOn>> {
        self.get_network_item_at("list_premier_add_ons", format!("{}/premierAddons", id.id()))
            .await
    }

    pub async fn list_premier_add_ons_slot(
        &self,
        id: &SlotId,
    ) -> AzureResult<OperationResponse<PremierAddOn>> {
        self.get_network_item_at("list_premier_add_ons", format!("{}/premierAddons", id.id()))
            .await
    }

    pub async fn get_premier_add_on(
        &self,
        id: &PremierAddonId,
    ) -> AzureResult<OperationResponse<PremierAddOn>> {
        self.get_network_item_at("get_premier_add_on", id.id()).await
    }

    pub async fn get_premier_add_on_slot(
        &self,
        id: &SlotPremierAddonId,
    ) -> AzureResult<OperationResponse<PremierAddOn>> {
        self.get_network_item_at("get_premier_add_on", id.id()).await
    }

    pub async fn add_premier_add_on(
        &self,
        id: &PremierAddonId,
        add_on: &PremierAddOn,
    ) -> AzureResult<OperationResponse<PremierAddOn>> {
        self.put_network_item_at("add_premier_add_on", id.id(), add_on)
            .await
    }

    pub async fn add_premier_add_on_slot(
        &self,
        id: &SlotPremierAddonId,
        add_on: &PremierAddOn,
    ) -> AzureResult<OperationResponse<PremierAddOn>> {
        self.put_network_item_at("add_premier_add_on", id.id(), add_on)
            .await
    }

    pub async fn delete_premier_add_on(
        &self,
        id: &PremierAddonId,
    ) -> AzureResult<OperationResponse<()>> {
        self.delete_network_item_at("delete_premier_add_on", id.id(), &[200])
            .await
    }

    pub async fn delete_premier_add_on_slot(
        &self,
        id: &SlotPremierAddonId,
    ) -> AzureResult<OperationResponse<()>> {
        self.delete_network_item_at("delete_premier_add_on", id.id(), &[200])
            .await
    }

    // ─── Public certificates ────────────────────────────────────────

    pub async fn list_public_certificates(
        &self,
        id: &AppServiceId,
    ) -> AzureResult<ListOperationResponse<PublicCertificate>> {
        self.list_network_items_at(
            "list_public_certificates",
            format!("{}/publicCertificates", id.id()),
        )
        .await
    }

    pub async fn list_public_certificates_slot(
        &self,
        id: &SlotId,
    ) -> AzureResult<ListOperationResponse<PublicCertificate>> {
        self.list_network_items_at(
            "list_public_certificates",
            format!("{}/publicCertificates", id.id()),
        )
        .await
    }

    complete_variants!(
        list_public_certificates,
        list_public_certificates_complete,
        list_public_certificates_complete_matching_predicate,
        AppServiceId,
        PublicCertificate
    );
    complete_variants!(
        list_public_certificates_slot,
        list_public_certificates_slot_complete,
        list_public_certificates_slot_complete_matching_predicate,
        SlotId,
        PublicCertificate
    );

    pub async fn get_public_certificate(
        &self,
        id: &PublicCertificateId,
    ) -> AzureResult<OperationResponse<PublicCertificate>> {
        self.get_network_item_at("get_public_certificate", id.id()).await
    }

    pub async fn get_public_certificate_slot(
        &self,
        id: &SlotPublicCertificateId,
    ) -> AzureResult<OperationResponse<PublicCertificate>> {
        self.get_network_item_at("get_public_certificate", id.id()).await
    }

    pub async fn create_or_update_public_certificate(
        &self,
        id: &PublicCertificateId,
        certificate: &PublicCertificate,
    ) -> AzureResult<OperationResponse<PublicCertificate>> {
        self.put_network_item_at("create_or_update_public_certificate", id.id(), certificate)
            .await
    }

    pub async fn create_or_update_public_certificate_slot(
        &self,
        id: &SlotPublicCertificateId,
        certificate: &PublicCertificate,
    ) -> AzureResult<OperationResponse<PublicCertificate>> {
        self.put_network_item_at("create_or_update_public_certificate", id.id(), certificate)
            .await
    }

    pub async fn delete_public_certificate(
        &self,
        id: &PublicCertificateId,
    ) -> AzureResult<OperationResponse<()>> {
        self.delete_network_item_at("delete_public_certificate", id.id(), &[200, 204])
            .await
    }

    pub async fn delete_public_certificate_slot(
        &self,
        id: &SlotPublicCertificateId,
    ) -> AzureResult<OperationResponse<()>> {
        self.delete_network_item_at("delete_public_certificate", id.id(), &[200, 204])
            .await
    }

    // ─── Shared ─────────────────────────────────────────────────────

    async fn list_network_items_at<T: DeserializeOwned>(
        &self,
        operation: &'static str,
        path: String,
    ) -> AzureResult<ListOperationResponse<T>> {
        let options = RequestOptions::new(HttpMethod::Get, path, &[200]);
        self.execute_paged(operation, options).await
    }

    async fn get_network_item_at<T: DeserializeOwned>(
        &self,
        operation: &'static str,
        path: String,
    ) -> AzureResult<OperationResponse<T>> {
        let options = RequestOptions::new(HttpMethod::Get, path, &[200]);
        self.execute(operation, options, NO_BODY).await
    }

    async fn put_network_item_at<B, T>(
        &self,
        operation: &'static str,
        path: String,
        body: &B,
    ) -> AzureResult<OperationResponse<T>>
    where
        B: Serialize,
        T: DeserializeOwned,
    {
        let options = RequestOptions::new(HttpMethod::Put, path, &[200]);
        self.execute(operation, options, Some(body)).await
    }

    async fn delete_network_item_at(
        &self,
        operation: &'static str,
        path: String,
        expected: &[u16],
    ) -> AzureResult<OperationResponse<()>> {
        let options = RequestOptions::new(HttpMethod::Delete, path, expected);
        self.execute_no_model(operation, options, NO_BODY).await
    }
}
