//! Azure App Service – scaled-out instances and the processes running on them.
//!
//! The `processes` paths directly under a site address the instance the
//! request lands on; the `instances/{id}/processes` paths pin one instance.

use serde::de::DeserializeOwned;

use azrm_core::{AzureResult, HttpMethod, ListOperationResponse, OperationResponse, RequestOptions};
use azrm_resourceids::ResourceId;

use crate::ids::{
    AppServiceId, InstanceId, InstanceProcessId, InstanceProcessModuleId, ProcessId,
    ProcessModuleId, SlotId, SlotInstanceId, SlotInstanceProcessId, SlotInstanceProcessModuleId,
    SlotProcessId, SlotProcessModuleId,
};
use crate::models::{ProcessInfo, ProcessModuleInfo, WebSiteInstanceStatus};
use crate::{WebAppsClient, NO_BODY};

impl WebAppsClient {
    pub async fn list_processes(
        &self,
        id: &AppServiceId,
    ) -> AzureResult<ListOperationResponse<ProcessInfo>> {
        self.list_process_items_at("list_processes", format!("{}/processes", id.id()))
            .await
    }

    pub async fn list_processes_slot(
        &self,
        id: &SlotId,
    ) -> AzureResult<ListOperationResponse<ProcessInfo>> {
        self.list_process_items_at("list_processes", format!("{}/processes", id.id()))
            .await
    }

    complete_variants!(
        list_processes,
        list_processes_complete,
        list_processes_complete_matching_predicate,
        AppServiceId,
        ProcessInfo
    );
    complete_variants!(
        list_processes_slot,
        list_processes_slot_complete,
        list_processes_slot_complete_matching_predicate,
        SlotId,
        ProcessInfo
    );

    pub async fn get_process(&self, id: &ProcessId) -> AzureResult<OperationResponse<ProcessInfo>> {
        self.get_process_item_at("get_process", id.id()).await
    }

    pub async fn get_process_slot(
        &self,
        id: &SlotProcessId,
    ) -> AzureResult<OperationResponse<ProcessInfo>> {
        self.get_process_item_at("get_process", id.id()).await
    }

    /// Terminate a process.
    pub async fn delete_process(&self, id: &ProcessId) -> AzureResult<OperationResponse<()>> {
        self.kill_process_at("delete_process", id.id()).await
    }

    pub async fn delete_process_slot(&self, id: &SlotProcessId) -> AzureResult<OperationResponse<()>> {
        self.kill_process_at("delete_process", id.id()).await
    }

    pub async fn list_process_modules(
        &self,
        id: &ProcessId,
    ) -> AzureResult<ListOperationResponse<ProcessModuleInfo>> {
        self.list_process_items_at("list_process_modules", format!("{}/modules", id.id()))
            .await
    }

    pub async fn list_process_modules_slot(
        &self,
        id: &SlotProcessId,
    ) -> AzureResult<ListOperationResponse<ProcessModuleInfo>> {
        self.list_process_items_at("list_process_modules", format!("{}/modules", id.id()))
            .await
    }

    complete_variants!(
        list_process_modules,
        list_process_modules_complete,
        list_process_modules_complete_matching_predicate,
        ProcessId,
        ProcessModuleInfo
    );
    complete_variants!(
        list_process_modules_slot,
        list_process_modules_slot_complete,
        list_process_modules_slot_complete_matching_predicate,
        SlotProcessId,
        ProcessModuleInfo
    );

    pub async fn get_process_module(
        &self,
        id: &ProcessModuleId,
    ) -> AzureResult<OperationResponse<ProcessModuleInfo>> {
        self.get_process_item_at("get_process_module", id.id()).await
    }

    pub async fn get_process_module_slot(
        &self,
        id: &SlotProcessModuleId,
    ) -> AzureResult<OperationResponse<ProcessModuleInfo>> {
        self.get_process_item_at("get_process_module", id.id()).await
    }

    // ─── Instances ──────────────────────────────────────────────────

    pub async fn list_instance_identifiers(
        &self,
        id: &AppServiceId,
    ) -> AzureResult<ListOperationResponse<WebSiteInstanceStatus>> {
        self.list_process_items_at("list_instance_identifiers", format!("{}/instances", id.id()))
            .await
    }

    pub async fn list_instance_identifiers_slot(
        &self,
        id: &SlotId,
    ) -> AzureResult<ListOperationResponse<WebSiteInstanceStatus>> {
        self.list_process_items_at("list_instance_identifiers", format!("{}/instances", id.id()))
            .await
    }

    complete_variants!(
        list_instance_identifiers,
        list_instance_identifiers_complete,
        list_instance_identifiers_complete_matching_predicate,
        AppServiceId,
        WebSiteInstanceStatus
    );
    complete_variants!(
        list_instance_identifiers_slot,
        list_instance_identifiers_slot_complete,
        list_instance_identifiers_slot_complete_matching_predicate,
        SlotId,
        WebSiteInstanceStatus
    );

    pub async fn get_instance_info(
        &self,
        id: &InstanceId,
    ) -> AzureResult<OperationResponse<WebSiteInstanceStatus>> {
        self.get_process_item_at("get_instance_info", id.id()).await
    }

    pub async fn get_instance_info_slot(
        &self,
        id: &SlotInstanceId,
    ) -> AzureResult<OperationResponse<WebSiteInstanceStatus>> {
        self.get_process_item_at("get_instance_info", id.id()).await
    }

    pub async fn list_instance_processes(
        &self,
        id: &InstanceId,
    ) -> AzureResult<ListOperationResponse<ProcessInfo>> {
        self.list_process_items_at("list_instance_processes", format!("{}/processes", id.id()))
            .await
    }

    pub async fn list_instance_processes_slot(
        &self,
        id: &SlotInstanceId,
    ) -> AzureResult<ListOperationResponse<ProcessInfo>> {
        self.list_process_items_at("list_instance_processes", format!("{}/processes", id.id()))
            .await
    }

    complete_variants!(
        list_instance_processes,
        list_instance_processes_complete,
        list_instance_processes_complete_matching_predicate,
        InstanceId,
        ProcessInfo
    );
    complete_variants!(
        list_instance_processes_slot,
        list_instance_processes_slot_complete,
        list_instance_processes_slot_complete_matching_predicate,
        SlotInstanceId,
        ProcessInfo
    );

    pub async fn get_instance_process(
        &self,
        id: &InstanceProcessId,
    ) -> AzureResult<OperationResponse<ProcessInfo>> {
        self.get_process_item_at("get_instance_process", id.id()).await
    }

    pub async fn get_instance_process_slot(
        &self,
        id: &SlotInstanceProcessId,
    ) -> AzureResult<OperationResponse<ProcessInfo>> {
        self.get_process_item_at("get_instance_process", id.id()).await
    }

    pub async fn delete_instance_process(
        &self,
        id: &InstanceProcessId,
    ) -> AzureResult<OperationResponse<()>> {
        self.kill_process_at("delete_instance_process", id.id()).await
    }

    pub async fn delete_instance_process_slot(
        &self,
        id: &SlotInstanceProcessId,
    ) -> AzureResult<OperationResponse<()>> {
        self.kill_process_at("delete_instance_process", id.id()).await
    }

    pub async fn get_instance_process_module(
        &self,
        id: &InstanceProcessModuleId,
    ) -> AzureResult<OperationResponse<ProcessModuleInfo>> {
        self.get_process_item_at("get_instance_process_module", id.id())
            .await
    }

    pub async fn get_instance_process_module_slot(
        &self,
        id: &SlotInstanceProcessModuleId,
    ) -> AzureResult<OperationResponse<ProcessModuleInfo>> {
        self.get_process_item_at("get_instance_process_module", id.id())
            .await
    }

    async fn list_process_items_at<T: DeserializeOwned>(
        &self,
        operation: &'static str,
        path: String,
    ) -> AzureResult<ListOperationResponse<T>> {
        let options = RequestOptions::new(HttpMethod::Get, path, &[200]);
        self.execute_paged(operation, options).await
    }

    async fn get_process_item_at<T: DeserializeOwned>(
        &self,
        operation: &'static str,
        path: String,
    ) -> AzureResult<OperationResponse<T>> {
        let options = RequestOptions::new(HttpMethod::Get, path, &[200]);
        self.execute(operation, options, NO_BODY).await
    }

    // a process that already exited answers 404
    async fn kill_process_at(
        &self,
        operation: &'static str,
        path: String,
    ) -> AzureResult<OperationResponse<()>> {
        let options = RequestOptions::new(HttpMethod::Delete, path, &[204, 404]);
        self.execute_no_model(operation, options, NO_BODY).await
    }
}
