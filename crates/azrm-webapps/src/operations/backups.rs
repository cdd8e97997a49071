//! Azure App Service – backups, restores and the backup schedule.

use azrm_core::{
    AzureResult, HttpMethod, ListOperationResponse, LongRunningResponse, OperationResponse,
    RequestOptions,
};
use azrm_resourceids::ResourceId;

use crate::ids::{AppServiceId, BackupId, SlotBackupId, SlotId};
use crate::models::{BackupItem, BackupRequest, RestoreRequest};
use crate::{WebAppsClient, NO_BODY};

impl WebAppsClient {
    pub async fn list_backups(
        &self,
        id: &AppServiceId,
    ) -> AzureResult<ListOperationResponse<BackupItem>> {
        self.list_backups_at(id.id()).await
    }

    pub async fn list_backups_slot(
        &self,
        id: &SlotId,
    ) -> AzureResult<ListOperationResponse<BackupItem>> {
        self.list_backups_at(id.id()).await
    }

    complete_variants!(
        list_backups,
        list_backups_complete,
        list_backups_complete_matching_predicate,
        AppServiceId,
        BackupItem
    );
    complete_variants!(
        list_backups_slot,
        list_backups_slot_complete,
        list_backups_slot_complete_matching_predicate,
        SlotId,
        BackupItem
    );

    async fn list_backups_at(&self, path: String) -> AzureResult<ListOperationResponse<BackupItem>> {
        let options = RequestOptions::new(HttpMethod::Get, format!("{path}/backups"), &[200]);
        self.execute_paged("list_backups", options).await
    }

    pub async fn get_backup_status(
        &self,
        id: &BackupId,
    ) -> AzureResult<OperationResponse<BackupItem>> {
        self.get_backup_status_at(id.id()).await
    }

    pub async fn get_backup_status_slot(
        &self,
        id: &SlotBackupId,
    ) -> AzureResult<OperationResponse<BackupItem>> {
        self.get_backup_status_at(id.id()).await
    }

    async fn get_backup_status_at(&self, path: String) -> AzureResult<OperationResponse<BackupItem>> {
        let options = RequestOptions::new(HttpMethod::Get, path, &[200]);
        self.execute("get_backup_status", options, NO_BODY).await
    }

    pub async fn delete_backup(&self, id: &BackupId) -> AzureResult<OperationResponse<()>> {
        self.delete_backup_at(id.id()).await
    }

    pub async fn delete_backup_slot(&self, id: &SlotBackupId) -> AzureResult<OperationResponse<()>> {
        self.delete_backup_at(id.id()).await
    }

    async fn delete_backup_at(&self, path: String) -> AzureResult<OperationResponse<()>> {
        let options = RequestOptions::new(HttpMethod::Delete, path, &[200, 404]);
        self.execute_no_model("delete_backup", options, NO_BODY).await
    }

    /// Start an on-demand backup.
    pub async fn backup(
        &self,
        id: &AppServiceId,
        request: &BackupRequest,
    ) -> AzureResult<OperationResponse<BackupItem>> {
        self.backup_at(id.id(), request).await
    }

    pub async fn backup_slot(
        &self,
        id: &SlotId,
        request: &BackupRequest,
    ) -> AzureResult<OperationResponse<BackupItem>> {
        self.backup_at(id.id(), request).await
    }

    async fn backup_at(
        &self,
        path: String,
        request: &BackupRequest,
    ) -> AzureResult<OperationResponse<BackupItem>> {
        let options = RequestOptions::new(HttpMethod::Post, format!("{path}/backup"), &[200]);
        self.execute("backup", options, Some(request)).await
    }

    pub async fn restore(
        &self,
        id: &BackupId,
        request: &RestoreRequest,
    ) -> AzureResult<LongRunningResponse<()>> {
        self.restore_at(id.id(), request).await
    }

    pub async fn restore_slot(
        &self,
        id: &SlotBackupId,
        request: &RestoreRequest,
    ) -> AzureResult<LongRunningResponse<()>> {
        self.restore_at(id.id(), request).await
    }

    then_poll!(restore, restore_then_poll(id: &BackupId, request: &RestoreRequest));
    then_poll!(restore_slot, restore_slot_then_poll(id: &SlotBackupId, request: &RestoreRequest));

    async fn restore_at(
        &self,
        path: String,
        request: &RestoreRequest,
    ) -> AzureResult<LongRunningResponse<()>> {
        let options =
            RequestOptions::new(HttpMethod::Post, format!("{path}/restore"), &[200, 202]);
        self.execute_lro_no_model("restore", options, Some(request))
            .await
    }

    /// Backup status including secrets such as the storage SAS URL.
    pub async fn list_backup_status_secrets(
        &self,
        id: &BackupId,
        request: &BackupRequest,
    ) -> AzureResult<OperationResponse<BackupItem>> {
        self.list_backup_status_secrets_at(id.id(), request).await
    }

    pub async fn list_backup_status_secrets_slot(
        &self,
        id: &SlotBackupId,
        request: &BackupRequest,
    ) -> AzureResult<OperationResponse<BackupItem>> {
        self.list_backup_status_secrets_at(id.id(), request).await
    }

    async fn list_backup_status_secrets_at(
        &self,
        path: String,
        request: &BackupRequest,
    ) -> AzureResult<OperationResponse<BackupItem>> {
        let options = RequestOptions::new(HttpMethod::Post, format!("{path}/list"), &[200]);
        self.execute("list_backup_status_secrets", options, Some(request))
            .await
    }

    // ─── Scheduled backups ──────────────────────────────────────────

    pub async fn get_backup_configuration(
        &self,
        id: &AppServiceId,
    ) -> AzureResult<OperationResponse<BackupRequest>> {
        self.get_backup_configuration_at(id.id()).await
    }

    pub async fn get_backup_configuration_slot(
        &self,
        id: &SlotId,
    ) -> AzureResult<OperationResponse<BackupRequest>> {
        self.get_backup_configuration_at(id.id()).await
    }

    async fn get_backup_configuration_at(
        &self,
        path: String,
    ) -> AzureResult<OperationResponse<BackupRequest>> {
        let options =
            RequestOptions::new(HttpMethod::Post, format!("{path}/config/backup/list"), &[200]);
        self.execute("get_backup_configuration", options, NO_BODY)
            .await
    }

    pub async fn update_backup_configuration(
        &self,
        id: &AppServiceId,
        request: &BackupRequest,
    ) -> AzureResult<OperationResponse<BackupRequest>> {
        self.update_backup_configuration_at(id.id(), request).await
    }

    pub async fn update_backup_configuration_slot(
        &self,
        id: &SlotId,
        request: &BackupRequest,
    ) -> AzureResult<OperationResponse<BackupRequest>> {
        self.update_backup_configuration_at(id.id(), request).await
    }

    async fn update_backup_configuration_at(
        &self,
        path: String,
        request: &BackupRequest,
    ) -> AzureResult<OperationResponse<BackupRequest>> {
        let options =
            RequestOptions::new(HttpMethod::Put, format!("{path}/config/backup"), &[200]);
        self.execute("update_backup_configuration", options, Some(request))
            .await
    }

    pub async fn delete_backup_configuration(
        &self,
        id: &AppServiceId,
    ) -> AzureResult<OperationResponse<()>> {
        self.delete_backup_configuration_at(id.id()).await
    }

    pub async fn delete_backup_configuration_slot(
        &self,
        id: &SlotId,
    ) -> AzureResult<OperationResponse<()>> {
        self.delete_backup_configuration_at(id.id()).await
    }

    async fn delete_backup_configuration_at(
        &self,
        path: String,
    ) -> AzureResult<OperationResponse<()>> {
        let options =
            RequestOptions::new(HttpMethod::Delete, format!("{path}/config/backup"), &[200]);
        self.execute_no_model("delete_backup_configuration", options, NO_BODY)
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
    use crate::constants::BackupItemStatus;
    use crate::models::{BackupRequestProperties, RestoreRequestProperties};
    use crate::test_support::{client, last_path, SITE};

    #[tokio::test]
    async fn backup_posts_request() {
        let backend = FakeBackend::new().with_json(
            200,
            json!({"name": "7", "properties": {"id": 7, "status": "Created"}}),
        );
        let c = client(&backend).await;
        let request = BackupRequest::with_properties(BackupRequestProperties {
            backup_name: Some("nightly".into()),
            storage_account_url: "https://acct.blob.core.windows.net/backups?sig=x".into(),
            ..Default::default()
        });
        let resp = c
            .backup(&AppServiceId::new("sub1", "rg1", "site1"), &request)
            .await
            .unwrap();
        let props = resp.model.unwrap().properties.unwrap();
        assert_eq!(props.backup_id, Some(7));
        assert_eq!(props.status, Some(BackupItemStatus::Created));
        let req = backend.last_request().unwrap();
        assert_eq!(req.method, HttpMethod::Post);
        assert_eq!(
            req.json_body().unwrap(),
            json!({"properties": {
                "backupName": "nightly",
                "storageAccountUrl": "https://acct.blob.core.windows.net/backups?sig=x"
            }})
        );
        assert_eq!(last_path(&backend), format!("{SITE}/backup?api-version=2023-12-01"));
    }

    #[tokio::test]
    async fn restore_slot_polls_location() {
        let loc = "https://management.azure.com/operationresults/r1";
        let backend = FakeBackend::new()
            .with_status(202, &[("Location", loc), ("Retry-After", "0")])
            .with_status(204, &[]);
        let c = client(&backend).await;
        let request = RestoreRequest::with_properties(RestoreRequestProperties {
            overwrite: true,
            storage_account_url: "https://acct.blob.core.windows.net/backups?sig=x".into(),
            ..Default::default()
        });
        let mut lro = c
            .restore_slot(&SlotBackupId::new("sub1", "rg1", "site1", "stage", "7"), &request)
            .await
            .unwrap();
        assert_eq!(lro.status, 202);
        assert!(!lro.poller.is_done());
        assert_eq!(lro.poll_until_done().await.unwrap(), None);
        assert!(lro.poller.is_done());
        assert_eq!(
            backend.requests()[0].url,
            format!("https://management.azure.com{SITE}/slots/stage/backups/7/restore?api-version=2023-12-01")
        );
    }

    #[tokio::test]
    async fn list_backups_collects_pages() {
        let backend = FakeBackend::new()
            .with_json(
                200,
                json!({"value": [{"name": "1"}], "nextLink": "https://management.azure.com/next?page=2"}),
            )
            .with_json(200, json!({"value": [{"name": "2"}], "nextLink": ""}));
        let c = client(&backend).await;
        let resp = c
            .list_backups(&AppServiceId::new("sub1", "rg1", "site1"))
            .await
            .unwrap();
        assert_eq!(resp.items.len(), 2);
        assert_eq!(backend.requests()[1].url, "https://management.azure.com/next?page=2");
    }
}
