//! Azure App Service – site and slot lifecycle.

use azrm_core::{
    AzureResult, HttpMethod, ListOperationResponse, LongRunningResponse, OperationResponse,
    RequestOptions,
};
use azrm_resourceids::ResourceId;

use crate::ids::{AppServiceId, ResourceGroupId, SlotId, SubscriptionId};
use crate::models::{
    CsmSlotEntity, MigrateMySqlRequest, MigrateMySqlStatus, Operation, Site, SitePatchResource,
    StorageMigrationOptions, StorageMigrationResponse,
};
use crate::options::{
    DeleteOperationOptions, ListByResourceGroupOperationOptions, MigrateStorageOperationOptions,
    RestartOperationOptions,
};
use crate::predicates::ResourcePredicate;
use crate::{WebAppsClient, NO_BODY};

impl WebAppsClient {
    // ─── Get / create / update / delete ─────────────────────────────

    pub async fn get(&self, id: &AppServiceId) -> AzureResult<OperationResponse<Site>> {
        self.get_at(id.id()).await
    }

    pub async fn get_slot(&self, id: &SlotId) -> AzureResult<OperationResponse<Site>> {
        self.get_at(id.id()).await
    }

    async fn get_at(&self, path: String) -> AzureResult<OperationResponse<Site>> {
        let options = RequestOptions::new(HttpMethod::Get, path, &[200]);
        self.execute("get", options, NO_BODY).await
    }

    /// Create a site, or replace an existing one.
    pub async fn create_or_update(
        &self,
        id: &AppServiceId,
        site: &Site,
    ) -> AzureResult<LongRunningResponse<Site>> {
        self.create_or_update_at(id.id(), site).await
    }

    pub async fn create_or_update_slot(
        &self,
        id: &SlotId,
        site: &Site,
    ) -> AzureResult<LongRunningResponse<Site>> {
        self.create_or_update_at(id.id(), site).await
    }

    then_poll!(create_or_update, create_or_update_then_poll(id: &AppServiceId, site: &Site));
    then_poll!(create_or_update_slot, create_or_update_slot_then_poll(id: &SlotId, site: &Site));

    async fn create_or_update_at(
        &self,
        path: String,
        site: &Site,
    ) -> AzureResult<LongRunningResponse<Site>> {
        let options = RequestOptions::new(HttpMethod::Put, path, &[200, 202]);
        self.execute_lro("create_or_update", options, Some(site)).await
    }

    pub async fn update(
        &self,
        id: &AppServiceId,
        patch: &SitePatchResource,
    ) -> AzureResult<OperationResponse<Site>> {
        self.update_at(id.id(), patch).await
    }

    pub async fn update_slot(
        &self,
        id: &SlotId,
        patch: &SitePatchResource,
    ) -> AzureResult<OperationResponse<Site>> {
        self.update_at(id.id(), patch).await
    }

    async fn update_at(
        &self,
        path: String,
        patch: &SitePatchResource,
    ) -> AzureResult<OperationResponse<Site>> {
        let options = RequestOptions::new(HttpMethod::Patch, path, &[200, 202]);
        self.execute("update", options, Some(patch)).await
    }

    pub async fn delete(
        &self,
        id: &AppServiceId,
        opts: &DeleteOperationOptions,
    ) -> AzureResult<OperationResponse<()>> {
        self.delete_at(id.id(), opts).await
    }

    pub async fn delete_slot(
        &self,
        id: &SlotId,
        opts: &DeleteOperationOptions,
    ) -> AzureResult<OperationResponse<()>> {
        self.delete_at(id.id(), opts).await
    }

    async fn delete_at(
        &self,
        path: String,
        opts: &DeleteOperationOptions,
    ) -> AzureResult<OperationResponse<()>> {
        let options =
            RequestOptions::new(HttpMethod::Delete, path, &[200, 204]).with_options(opts);
        self.execute_no_model("delete", options, NO_BODY).await
    }

    // ─── Listing ────────────────────────────────────────────────────

    /// Every site in the subscription.
    pub async fn list(&self, id: &SubscriptionId) -> AzureResult<ListOperationResponse<Site>> {
        let options = RequestOptions::new(
            HttpMethod::Get,
            format!("{}/providers/Microsoft.Web/sites", id.id()),
            &[200],
        );
        self.execute_paged("list", options).await
    }

    complete_variants!(list, list_complete, list_complete_matching_predicate, SubscriptionId, Site);

    pub async fn list_by_resource_group(
        &self,
        id: &ResourceGroupId,
        opts: &ListByResourceGroupOperationOptions,
    ) -> AzureResult<ListOperationResponse<Site>> {
        let options = RequestOptions::new(
            HttpMethod::Get,
            format!("{}/providers/Microsoft.Web/sites", id.id()),
            &[200],
        )
        .with_options(opts);
        self.execute_paged("list_by_resource_group", options).await
    }

    pub async fn list_by_resource_group_complete(
        &self,
        id: &ResourceGroupId,
        opts: &ListByResourceGroupOperationOptions,
    ) -> AzureResult<Vec<Site>> {
        self.list_by_resource_group_complete_matching_predicate(
            id,
            opts,
            ResourcePredicate::default(),
        )
        .await
    }

    pub async fn list_by_resource_group_complete_matching_predicate(
        &self,
        id: &ResourceGroupId,
        opts: &ListByResourceGroupOperationOptions,
        predicate: ResourcePredicate,
    ) -> AzureResult<Vec<Site>> {
        let resp = self.list_by_resource_group(id, opts).await?;
        Ok(resp
            .items
            .into_iter()
            .filter(|site| predicate.matches(site))
            .collect())
    }

    pub async fn list_slots(&self, id: &AppServiceId) -> AzureResult<ListOperationResponse<Site>> {
        let options = RequestOptions::new(HttpMethod::Get, format!("{}/slots", id.id()), &[200]);
        self.execute_paged("list_slots", options).await
    }

    complete_variants!(
        list_slots,
        list_slots_complete,
        list_slots_complete_matching_predicate,
        AppServiceId,
        Site
    );

    // ─── Start / stop / restart ─────────────────────────────────────

    pub async fn restart(
        &self,
        id: &AppServiceId,
        opts: &RestartOperationOptions,
    ) -> AzureResult<OperationResponse<()>> {
        self.restart_at(id.id(), opts).await
    }

    pub async fn restart_slot(
        &self,
        id: &SlotId,
        opts: &RestartOperationOptions,
    ) -> AzureResult<OperationResponse<()>> {
        self.restart_at(id.id(), opts).await
    }

    async fn restart_at(
        &self,
        path: String,
        opts: &RestartOperationOptions,
    ) -> AzureResult<OperationResponse<()>> {
        let options = RequestOptions::new(HttpMethod::Post, format!("{path}/restart"), &[200])
            .with_options(opts);
        self.execute_no_model("restart", options, NO_BODY).await
    }

    pub async fn start(&self, id: &AppServiceId) -> AzureResult<OperationResponse<()>> {
        self.power_at("start", id.id()).await
    }

    pub async fn start_slot(&self, id: &SlotId) -> AzureResult<OperationResponse<()>> {
        self.power_at("start", id.id()).await
    }

    pub async fn stop(&self, id: &AppServiceId) -> AzureResult<OperationResponse<()>> {
        self.power_at("stop", id.id()).await
    }

    pub async fn stop_slot(&self, id: &SlotId) -> AzureResult<OperationResponse<()>> {
        self.power_at("stop", id.id()).await
    }

    async fn power_at(
        &self,
        action: &'static str,
        path: String,
    ) -> AzureResult<OperationResponse<()>> {
        let options = RequestOptions::new(HttpMethod::Post, format!("{path}/{action}"), &[200]);
        self.execute_no_model(action, options, NO_BODY).await
    }

    // ─── Slot swap ──────────────────────────────────────────────────

    /// Swap `entity.target_slot` into production.
    pub async fn swap_slot_with_production(
        &self,
        id: &AppServiceId,
        entity: &CsmSlotEntity,
    ) -> AzureResult<LongRunningResponse<()>> {
        self.swap_at("swap_slot_with_production", id.id(), entity).await
    }

    /// Swap this slot with `entity.target_slot`.
    pub async fn swap_slot(
        &self,
        id: &SlotId,
        entity: &CsmSlotEntity,
    ) -> AzureResult<LongRunningResponse<()>> {
        self.swap_at("swap_slot", id.id(), entity).await
    }

    then_poll!(
        swap_slot_with_production,
        swap_slot_with_production_then_poll(id: &AppServiceId, entity: &CsmSlotEntity)
    );
    then_poll!(swap_slot, swap_slot_then_poll(id: &SlotId, entity: &CsmSlotEntity));

    async fn swap_at(
        &self,
        operation: &'static str,
        path: String,
        entity: &CsmSlotEntity,
    ) -> AzureResult<LongRunningResponse<()>> {
        let options =
            RequestOptions::new(HttpMethod::Post, format!("{path}/slotsswap"), &[200, 202]);
        self.execute_lro_no_model(operation, options, Some(entity))
            .await
    }

    // ─── Migrations ─────────────────────────────────────────────────

    /// Move the site's content to an Azure Files share.
    pub async fn migrate_storage(
        &self,
        id: &AppServiceId,
        body: &StorageMigrationOptions,
        opts: &MigrateStorageOperationOptions,
    ) -> AzureResult<LongRunningResponse<StorageMigrationResponse>> {
        let options =
            RequestOptions::new(HttpMethod::Put, format!("{}/migrate", id.id()), &[200])
                .with_options(opts);
        self.execute_lro("migrate_storage", options, Some(body))
            .await
    }

    then_poll!(
        migrate_storage,
        migrate_storage_then_poll(
            id: &AppServiceId,
            body: &StorageMigrationOptions,
            opts: &MigrateStorageOperationOptions
        )
    );

    /// Move a MySQL in App database to a remote server, or back.
    pub async fn migrate_my_sql(
        &self,
        id: &AppServiceId,
        body: &MigrateMySqlRequest,
    ) -> AzureResult<LongRunningResponse<Operation>> {
        let options =
            RequestOptions::new(HttpMethod::Post, format!("{}/migratemysql", id.id()), &[200]);
        self.execute_lro("migrate_my_sql", options, Some(body))
            .await
    }

    then_poll!(migrate_my_sql, migrate_my_sql_then_poll(id: &AppServiceId, body: &MigrateMySqlRequest));

    pub async fn get_migrate_my_sql_status(
        &self,
        id: &AppServiceId,
    ) -> AzureResult<OperationResponse<MigrateMySqlStatus>> {
        let options = RequestOptions::new(
            HttpMethod::Get,
            format!("{}/migratemysql/status", id.id()),
            &[200],
        );
        self.execute("get_migrate_my_sql_status", options, NO_BODY)
            .await
    }
}

#[cfg(test)]
mod tests {
    use azrm_core::testing::FakeBackend;
    use azrm_core::{AzureErrorKind, HttpMethod};
    use pretty_assertions::assert_eq;
    use serde_json::json;

    use super::*;
    use crate::test_support::{client, last_path, SITE};

    fn site_json(name: &str, kind: &str) -> serde_json::Value {
        json!({
            "id": format!("/subscriptions/sub1/resourceGroups/rg1/providers/Microsoft.Web/sites/{name}"),
            "name": name,
            "kind": kind,
            "location": "westeurope",
            "type": "Microsoft.Web/sites"
        })
    }

    #[tokio::test]
    async fn get_site() {
        let backend = FakeBackend::new().with_json(200, site_json("site1", "app"));
        let c = client(&backend).await;
        let resp = c.get(&AppServiceId::new("sub1", "rg1", "site1")).await.unwrap();
        assert_eq!(resp.status, 200);
        assert_eq!(resp.model.unwrap().name.as_deref(), Some("site1"));
        let req = backend.last_request().unwrap();
        assert_eq!(req.method, HttpMethod::Get);
        assert_eq!(last_path(&backend), format!("{SITE}?api-version=2023-12-01"));
    }

    #[tokio::test]
    async fn get_slot_path() {
        let backend = FakeBackend::new().with_json(200, site_json("site1/staging", "app"));
        let c = client(&backend).await;
        c.get_slot(&SlotId::new("sub1", "rg1", "site1", "staging"))
            .await
            .unwrap();
        assert_eq!(
            last_path(&backend),
            format!("{SITE}/slots/staging?api-version=2023-12-01")
        );
    }

    #[tokio::test]
    async fn not_found_is_an_error() {
        let backend = FakeBackend::new().with_json(
            404,
            json!({"error": {"code": "ResourceNotFound", "message": "no such site"}}),
        );
        let c = client(&backend).await;
        let err = c
            .get(&AppServiceId::new("sub1", "rg1", "missing"))
            .await
            .unwrap_err();
        assert_eq!(err.kind, AzureErrorKind::NotFound);
        assert_eq!(err.status_code, Some(404));
        assert!(err.message.contains("ResourceNotFound"));
    }

    #[tokio::test]
    async fn delete_sends_options() {
        let backend = FakeBackend::new().with_status(200, &[]);
        let c = client(&backend).await;
        let opts = DeleteOperationOptions {
            delete_empty_server_farm: Some(true),
            delete_metrics: None,
        };
        let resp = c
            .delete(&AppServiceId::new("sub1", "rg1", "site1"), &opts)
            .await
            .unwrap();
        assert_eq!(resp.status, 200);
        assert_eq!(backend.last_request().unwrap().method, HttpMethod::Delete);
        assert_eq!(
            last_path(&backend),
            format!("{SITE}?api-version=2023-12-01&deleteEmptyServerFarm=true")
        );
    }

    #[tokio::test]
    async fn restart_slot_query() {
        let backend = FakeBackend::new().with_status(200, &[]);
        let c = client(&backend).await;
        c.restart_slot(
            &SlotId::new("sub1", "rg1", "site1", "blue"),
            &RestartOperationOptions {
                soft_restart: Some(true),
                synchronous: None,
            },
        )
        .await
        .unwrap();
        assert_eq!(
            last_path(&backend),
            format!("{SITE}/slots/blue/restart?api-version=2023-12-01&softRestart=true")
        );
    }

    #[tokio::test]
    async fn list_follows_next_link_and_filters() {
        let backend = FakeBackend::new()
            .with_json(
                200,
                json!({
                    "value": [site_json("a", "app"), site_json("b", "functionapp")],
                    "nextLink": "https://management.azure.com/subscriptions/sub1/providers/Microsoft.Web/sites?api-version=2023-12-01&$skiptoken=2"
                }),
            )
            .with_json(200, json!({"value": [site_json("c", "app")]}));
        let c = client(&backend).await;
        let apps = c
            .list_complete_matching_predicate(
                &SubscriptionId::new("sub1"),
                ResourcePredicate::by_kind("app"),
            )
            .await
            .unwrap();
        let names: Vec<_> = apps.iter().filter_map(|s| s.name.clone()).collect();
        assert_eq!(names, vec!["a".to_string(), "c".to_string()]);
        assert_eq!(backend.requests().len(), 2);
        assert_eq!(
            backend.requests()[0].url,
            "https://management.azure.com/subscriptions/sub1/providers/Microsoft.Web/sites?api-version=2023-12-01"
        );
    }

    #[tokio::test]
    async fn list_by_resource_group_include_slots() {
        let backend = FakeBackend::new().with_json(200, json!({"value": []}));
        let c = client(&backend).await;
        let items = c
            .list_by_resource_group_complete(
                &ResourceGroupId::new("sub1", "rg1"),
                &ListByResourceGroupOperationOptions {
                    include_slots: Some(true),
                },
            )
            .await
            .unwrap();
        assert!(items.is_empty());
        assert_eq!(
            last_path(&backend),
            "/subscriptions/sub1/resourceGroups/rg1/providers/Microsoft.Web/sites?api-version=2023-12-01&includeSlots=true"
        );
    }

    #[tokio::test]
    async fn create_or_update_polls_async_operation() {
        let op_url = "https://management.azure.com/subscriptions/sub1/providers/Microsoft.Web/locations/westeurope/operations/op1";
        let backend = FakeBackend::new()
            .with_json_headers(202, &[("Azure-AsyncOperation", op_url)], json!({}))
            .with_json(200, json!({"status": "InProgress"}))
            .with_json(200, json!({"status": "Succeeded"}))
            .with_json(200, site_json("site1", "app"));
        let c = client(&backend).await;
        let site = Site {
            location: "westeurope".into(),
            ..Default::default()
        };
        let mut lro = c
            .create_or_update(&AppServiceId::new("sub1", "rg1", "site1"), &site)
            .await
            .unwrap();
        assert_eq!(lro.status, 202);
        assert!(lro.model.is_none());
        let done = lro.poll_until_done().await.unwrap().unwrap();
        assert_eq!(done.name.as_deref(), Some("site1"));

        let requests = backend.requests();
        assert_eq!(requests.len(), 4);
        assert_eq!(requests[0].method, HttpMethod::Put);
        assert_eq!(requests[0].json_body().unwrap(), json!({"location": "westeurope"}));
        assert_eq!(requests[1].url, op_url);
        assert_eq!(
            requests[3].url,
            format!("https://management.azure.com{SITE}?api-version=2023-12-01")
        );
    }

    #[tokio::test]
    async fn swap_then_poll_follows_location() {
        let loc = "https://management.azure.com/subscriptions/sub1/providers/Microsoft.Web/operationresults/swap1";
        let backend = FakeBackend::new()
            .with_status(202, &[("Location", loc)])
            .with_status(202, &[("Location", loc)])
            .with_status(200, &[]);
        let c = client(&backend).await;
        c.swap_slot_then_poll(
            &SlotId::new("sub1", "rg1", "site1", "staging"),
            &CsmSlotEntity {
                preserve_vnet: true,
                target_slot: "production".into(),
            },
        )
        .await
        .unwrap();
        let requests = backend.requests();
        assert_eq!(requests.len(), 3);
        assert!(requests[0].url.contains("/slots/staging/slotsswap?"));
        assert_eq!(requests[2].url, loc);
    }

    #[tokio::test]
    async fn failed_async_operation_surfaces_error() {
        let op_url = "https://management.azure.com/operations/op2";
        let backend = FakeBackend::new()
            .with_json_headers(202, &[("Azure-AsyncOperation", op_url)], json!({}))
            .with_json(
                200,
                json!({"status": "Failed", "error": {"code": "Conflict", "message": "slot busy"}}),
            );
        let c = client(&backend).await;
        let err = c
            .swap_slot_with_production_then_poll(
                &AppServiceId::new("sub1", "rg1", "site1"),
                &CsmSlotEntity {
                    preserve_vnet: false,
                    target_slot: "staging".into(),
                },
            )
            .await
            .unwrap_err();
        assert_eq!(err.kind, AzureErrorKind::OperationFailed);
        assert!(err.message.contains("slot busy"));
    }

    #[tokio::test]
    async fn migrate_storage_query() {
        let backend = FakeBackend::new().with_json(200, json!({"properties": {"operationId": "m1"}}));
        let c = client(&backend).await;
        let body = StorageMigrationOptions::with_properties(
            crate::models::StorageMigrationOptionsProperties {
                azurefiles_connection_string: "cs".into(),
                azurefiles_share: "share".into(),
                ..Default::default()
            },
        );
        let lro = c
            .migrate_storage(
                &AppServiceId::new("sub1", "rg1", "site1"),
                &body,
                &MigrateStorageOperationOptions {
                    subscription_name: Some("prod".into()),
                },
            )
            .await
            .unwrap();
        assert!(lro.poller.is_done());
        assert_eq!(
            lro.model.unwrap().properties.unwrap().operation_id.as_deref(),
            Some("m1")
        );
        assert_eq!(
            last_path(&backend),
            format!("{SITE}/migrate?api-version=2023-12-01&subscriptionName=prod")
        );
    }
}
