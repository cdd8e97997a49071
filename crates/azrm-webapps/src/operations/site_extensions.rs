//! Azure App Service – Kudu site extensions.

use azrm_core::{
    AzureResult, HttpMethod, ListOperationResponse, LongRunningResponse, OperationResponse,
    RequestOptions,
};
use azrm_resourceids::ResourceId;

use crate::ids::{AppServiceId, SiteExtensionId, SlotId, SlotSiteExtensionId};
use crate::models::SiteExtensionInfo;
use crate::{WebAppsClient, NO_BODY};

impl WebAppsClient {
    pub async fn list_site_extensions(
        &self,
        id: &AppServiceId,
    ) -> AzureResult<ListOperationResponse<SiteExtensionInfo>> {
        self.list_site_extensions_at(id.id()).await
    }

    pub async fn list_site_extensions_slot(
        &self,
        id: &SlotId,
    ) -> AzureResult<ListOperationResponse<SiteExtensionInfo>> {
        self.list_site_extensions_at(id.id()).await
    }

    complete_variants!(
        list_site_extensions,
        list_site_extensions_complete,
        list_site_extensions_complete_matching_predicate,
        AppServiceId,
        SiteExtensionInfo
    );
    complete_variants!(
        list_site_extensions_slot,
        list_site_extensions_slot_complete,
        list_site_extensions_slot_complete_matching_predicate,
        SlotId,
        SiteExtensionInfo
    );

    async fn list_site_extensions_at(
        &self,
        path: String,
    ) -> AzureResult<ListOperationResponse<SiteExtensionInfo>> {
        let options =
            RequestOptions::new(HttpMethod::Get, format!("{path}/siteExtensions"), &[200]);
        self.execute_paged("list_site_extensions", options).await
    }

    pub async fn get_site_extension(
        &self,
        id: &SiteExtensionId,
    ) -> AzureResult<OperationResponse<SiteExtensionInfo>> {
        self.get_site_extension_at(id.id()).await
    }

    pub async fn get_site_extension_slot(
        &self,
        id: &SlotSiteExtensionId,
    ) -> AzureResult<OperationResponse<SiteExtensionInfo>> {
        self.get_site_extension_at(id.id()).await
    }

    async fn get_site_extension_at(
        &self,
        path: String,
    ) -> AzureResult<OperationResponse<SiteExtensionInfo>> {
        let options = RequestOptions::new(HttpMethod::Get, path, &[200]);
        self.execute("get_site_extension", options, NO_BODY).await
    }

    /// Install from the extension gallery. The request has no body; the
    /// extension ID selects the package.
    pub async fn install_site_extension(
        &self,
        id: &SiteExtensionId,
    ) -> AzureResult<LongRunningResponse<SiteExtensionInfo>> {
        self.install_site_extension_at(id.id()).await
    }

    pub async fn install_site_extension_slot(
        &self,
        id: &SlotSiteExtensionId,
    ) -> AzureResult<LongRunningResponse<SiteExtensionInfo>> {
        self.install_site_extension_at(id.id()).await
    }

    then_poll!(install_site_extension, install_site_extension_then_poll(id: &SiteExtensionId));
    then_poll!(
        install_site_extension_slot,
        install_site_extension_slot_then_poll(id: &SlotSiteExtensionId)
    );

    async fn install_site_extension_at(
        &self,
        path: String,
    ) -> AzureResult<LongRunningResponse<SiteExtensionInfo>> {
        let options = RequestOptions::new(HttpMethod::Put, path, &[200, 201]);
        self.execute_lro("install_site_extension", options, NO_BODY)
            .await
    }

    pub async fn delete_site_extension(
        &self,
        id: &SiteExtensionId,
    ) -> AzureResult<OperationResponse<()>> {
        self.delete_site_extension_at(id.id()).await
    }

    pub async fn delete_site_extension_slot(
        &self,
        id: &SlotSiteExtensionId,
    ) -> AzureResult<OperationResponse<()>> {
        self.delete_site_extension_at(id.id()).await
    }

    async fn delete_site_extension_at(&self, path: String) -> AzureResult<OperationResponse<()>> {
        let options = RequestOptions::new(HttpMethod::Delete, path, &[204, 404]);
        self.execute_no_model("delete_site_extension", options, NO_BODY)
            .await
    }
}

#[cfg(test)]
mod tests {
    use azrm_core::testing::FakeBackend;
    use azrm_core::HttpMethod;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    use super::*;
    use crate::test_support::{client, last_path, SITE};

    #[tokio::test]
    async fn install_waits_for_provisioning() {
        let backend = FakeBackend::new()
            .with_json(
                201,
                json!({"name": "site1/AspNetCoreRuntime", "properties": {"provisioningState": "Installing"}}),
            )
            .with_json(
                200,
                json!({"name": "site1/AspNetCoreRuntime", "properties": {"provisioningState": "Succeeded", "version": "8.0.1"}}),
            );
        let c = client(&backend).await;
        let id = SiteExtensionId::new("sub1", "rg1", "site1", "AspNetCoreRuntime");
        let mut lro = c.install_site_extension(&id).await.unwrap();
        assert_eq!(lro.status, 201);
        assert!(!lro.poller.is_done());
        let installed = lro.poll_until_done().await.unwrap().unwrap();
        assert_eq!(
            installed.properties.unwrap().version.as_deref(),
            Some("8.0.1")
        );

        let requests = backend.requests();
        assert_eq!(requests[0].method, HttpMethod::Put);
        assert!(requests[0].body.is_none());
        assert_eq!(requests[1].method, HttpMethod::Get);
        assert_eq!(
            last_path(&backend),
            format!("{SITE}/siteExtensions/AspNetCoreRuntime?api-version=2023-12-01")
        );
    }

    #[tokio::test]
    async fn delete_missing_extension() {
        let backend = FakeBackend::new().with_status(404, &[]);
        let c = client(&backend).await;
        let resp = c
            .delete_site_extension_slot(&SlotSiteExtensionId::new(
                "sub1", "rg1", "site1", "stage", "ext",
            ))
            .await
            .unwrap();
        assert_eq!(resp.status, 404);
    }
}
