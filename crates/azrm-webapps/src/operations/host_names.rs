//! Azure App Service – custom host name bindings and domain ownership identifiers.

use serde::de::DeserializeOwned;
use serde::Serialize;

use azrm_core::{AzureResult, HttpMethod, ListOperationResponse, OperationResponse, RequestOptions};
use azrm_resourceids::ResourceId;

use crate::ids::{
    AppServiceId, DomainOwnershipIdentifierId, HostNameBindingId, SlotDomainOwnershipIdentifierId,
    SlotHostNameBindingId, SlotId,
};
use crate::models::{HostNameBinding, Identifier};
use crate::{WebAppsClient, NO_BODY};

impl WebAppsClient {
    // ─── Host name bindings ─────────────────────────────────────────

    pub async fn list_host_name_bindings(
        &self,
        id: &AppServiceId,
    ) -> AzureResult<ListOperationResponse<HostNameBinding>> {
        self.list_host_items_at("list_host_name_bindings", format!("{}/hostNameBindings", id.id()))
            .await
    }

    pub async fn list_host_name_bindings_slot(
        &self,
        id: &SlotId,
    ) -> AzureResult<ListOperationResponse<HostNameBinding>> {
        self.list_host_items_at("list_host_name_bindings", format!("{}/hostNameBindings", id.id()))
            .await
    }

    complete_variants!(
        list_host_name_bindings,
        list_host_name_bindings_complete,
        list_host_name_bindings_complete_matching_predicate,
        AppServiceId,
        HostNameBinding
    );
    complete_variants!(
        list_host_name_bindings_slot,
        list_host_name_bindings_slot_complete,
        list_host_name_bindings_slot_complete_matching_predicate,
        SlotId,
        HostNameBinding
    );

    pub async fn get_host_name_binding(
        &self,
        id: &HostNameBindingId,
    ) -> AzureResult<OperationResponse<HostNameBinding>> {
        self.get_host_item_at("get_host_name_binding", id.id()).await
    }

    pub async fn get_host_name_binding_slot(
        &self,
        id: &SlotHostNameBindingId,
    ) -> AzureResult<OperationResponse<HostNameBinding>> {
        self.get_host_item_at("get_host_name_binding", id.id()).await
    }

    /// Bind a custom host name; ARM validates the DNS records first.
    pub async fn create_or_update_host_name_binding(
        &self,
        id: &HostNameBindingId,
        binding: &HostNameBinding,
    ) -> AzureResult<OperationResponse<HostNameBinding>> {
        self.put_host_item_at("create_or_update_host_name_binding", id.id(), binding)
            .await
    }

    pub async fn create_or_update_host_name_binding_slot(
        &self,
        id: &SlotHostNameBindingId,
        binding: &HostNameBinding,
    ) -> AzureResult<OperationResponse<HostNameBinding>> {
        self.put_host_item_at("create_or_update_host_name_binding", id.id(), binding)
            .await
    }

    pub async fn delete_host_name_binding(
        &self,
        id: &HostNameBindingId,
    ) -> AzureResult<OperationResponse<()>> {
        self.delete_host_item_at("delete_host_name_binding", id.id())
            .await
    }

    pub async fn delete_host_name_binding_slot(
        &self,
        id: &SlotHostNameBindingId,
    ) -> AzureResult<OperationResponse<()>> {
        self.delete_host_item_at("delete_host_name_binding", id.id())
            .await
    }

    // ─── Domain ownership identifiers ───────────────────────────────

    pub async fn list_domain_ownership_identifiers(
        &self,
        id: &AppServiceId,
    ) -> AzureResult<ListOperationResponse<Identifier>> {
        self.list_host_items_at(
            "list_domain_ownership_identifiers",
            format!("{}/domainOwnershipIdentifiers", id.id()),
        )
        .await
    }

    pub async fn list_domain_ownership_identifiers_slot(
        &self,
        id: &SlotId,
    ) -> AzureResult<ListOperationResponse<Identifier>> {
        self.list_host_items_at(
            "list_domain_ownership_identifiers",
            format!("{}/domainOwnershipIdentifiers", id.id()),
        )
        .await
    }

    complete_variants!(
        list_domain_ownership_identifiers,
        list_domain_ownership_identifiers_complete,
        list_domain_ownership_identifiers_complete_matching_predicate,
        AppServiceId,
        Identifier
    );
    complete_variants!(
        list_domain_ownership_identifiers_slot,
        list_domain_ownership_identifiers_slot_complete,
        list_domain_ownership_identifiers_slot_complete_matching_predicate,
        SlotId,
        Identifier
    );

    pub async fn get_domain_ownership_identifier(
        &self,
        id: &DomainOwnershipIdentifierId,
    ) -> AzureResult<OperationResponse<Identifier>> {
        self.get_host_item_at("get_domain_ownership_identifier", id.id())
            .await
    }

    pub async fn get_domain_ownership_identifier_slot(
        &self,
        id: &SlotDomainOwnershipIdentifierId,
    ) -> AzureResult<OperationResponse<Identifier>> {
        self.get_host_item_at("get_domain_ownership_identifier", id.id())
            .await
    }

    pub async fn create_or_update_domain_ownership_identifier(
        &self,
        id: &DomainOwnershipIdentifierId,
        identifier: &Identifier,
    ) -> AzureResult<OperationResponse<Identifier>> {
        self.put_host_item_at(
            "create_or_update_domain_ownership_identifier",
            id.id(),
            identifier,
        )
        .await
    }

    pub async fn create_or_update_domain_ownership_identifier_slot(
        &self,
        id: &SlotDomainOwnershipIdentifierId,
        identifier: &Identifier,
    ) -> AzureResult<OperationResponse<Identifier>> {
        self.put_host_item_at(
            "create_or_update_domain_ownership_identifier",
            id.id(),
            identifier,
        )
        .await
    }

    pub async fn delete_domain_ownership_identifier(
        &self,
        id: &DomainOwnershipIdentifierId,
    ) -> AzureResult<OperationResponse<()>> {
        self.delete_host_item_at("delete_domain_ownership_identifier", id.id())
            .await
    }

    pub async fn delete_domain_ownership_identifier_slot(
        &self,
        id: &SlotDomainOwnershipIdentifierId,
    ) -> AzureResult<OperationResponse<()>> {
        self.delete_host_item_at("delete_domain_ownership_identifier", id.id())
            .await
    }

    async fn list_host_items_at<T: DeserializeOwned>(
        &self,
        operation: &'static str,
        path: String,
    ) -> AzureResult<ListOperationResponse<T>> {
        let options = RequestOptions::new(HttpMethod::Get, path, &[200]);
        self.execute_paged(operation, options).await
    }

    async fn get_host_item_at<T: DeserializeOwned>(
        &self,
        operation: &'static str,
        path: String,
    ) -> AzureResult<OperationResponse<T>> {
        let options = RequestOptions::new(HttpMethod::Get, path, &[200]);
        self.execute(operation, options, NO_BODY).await
    }

    async fn put_host_item_at<B, T>(
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

    async fn delete_host_item_at(
        &self,
        operation: &'static str,
        path: String,
    ) -> AzureResult<OperationResponse<()>> {
        let options = RequestOptions::new(HttpMethod::Delete, path, &[200, 204]);
        self.execute_no_model(operation, options, NO_BODY).await
    }
}

#[cfg(test)]
mod tests {
    use azrm_core::testing::FakeBackend;
    use azrm_core::HttpMethod;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    use super::*;
    use crate::constants::SslState;
    use crate::models::{HostNameBindingProperties, IdentifierProperties};
    use crate::test_support::{client, last_path, SITE};

    #[tokio::test]
    async fn bind_host_name() {
        let backend = FakeBackend::new().with_json(
            200,
            json!({"name": "site1/www.contoso.com", "properties": {"sslState": "SniEnabled", "thumbprint": "AB12"}}),
        );
        let c = client(&backend).await;
        let binding = HostNameBinding::with_properties(HostNameBindingProperties {
            ssl_state: Some(SslState::SniEnabled),
            thumbprint: Some("AB12".into()),
            ..Default::default()
        });
        let resp = c
            .create_or_update_host_name_binding(
                &HostNameBindingId::new("sub1", "rg1", "site1", "www.contoso.com"),
                &binding,
            )
            .await
            .unwrap();
        assert_eq!(resp.model.unwrap().properties, binding.properties);
        let req = backend.last_request().unwrap();
        assert_eq!(req.method, HttpMethod::Put);
        assert_eq!(
            req.json_body().unwrap(),
            json!({"properties": {"sslState": "SniEnabled", "thumbprint": "AB12"}})
        );
        assert_eq!(
            last_path(&backend),
            format!("{SITE}/hostNameBindings/www.contoso.com?api-version=2023-12-01")
        );
    }

    #[tokio::test]
    async fn domain_identifier_slot() {
        let backend = FakeBackend::new().with_json(200, json!({"properties": {"id": "token"}}));
        let c = client(&backend).await;
        let identifier = Identifier::with_properties(IdentifierProperties {
            value: Some("token".into()),
        });
        let resp = c
            .create_or_update_domain_ownership_identifier_slot(
                &SlotDomainOwnershipIdentifierId::new("sub1", "rg1", "site1", "stage", "contoso"),
                &identifier,
            )
            .await
            .unwrap();
        assert_eq!(
            resp.model.unwrap().properties.unwrap().value.as_deref(),
            Some("token")
        );
        assert_eq!(
            last_path(&backend),
            format!("{SITE}/slots/stage/domainOwnershipIdentifiers/contoso?api-version=2023-12-01")
        );
    }

    #[tokio::test]
    async fn delete_binding_no_content() {
        let backend = FakeBackend::new().with_status(204, &[]);
        let c = client(&backend).await;
        let resp = c
            .delete_host_name_binding_slot(&SlotHostNameBindingId::new(
                "sub1",
                "rg1",
                "site1",
                "stage",
                "www.contoso.com",
            ))
            .await
            .unwrap();
        assert_eq!(resp.status, 204);
    }
}
