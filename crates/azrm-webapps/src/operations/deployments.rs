//! Azure App Service – Kudu deployments and OneDeploy deployment status.

use azrm_core::{
    AzureResult, HttpMethod, ListOperationResponse, LongRunningResponse, OperationResponse,
    RequestOptions,
};
use azrm_resourceids::ResourceId;

use crate::ids::{
    AppServiceId, DeploymentId, DeploymentStatusId, SlotDeploymentId, SlotDeploymentStatusId,
    SlotId,
};
use crate::models::{CsmDeploymentStatus, Deployment};
use crate::{WebAppsClient, NO_BODY};

impl WebAppsClient {
    pub async fn list_deployments(
        &self,
        id: &AppServiceId,
    ) -> AzureResult<ListOperationResponse<Deployment>> {
        self.list_deployments_at(id.id()).await
    }

    pub async fn list_deployments_slot(
        &self,
        id: &SlotId,
    ) -> AzureResult<ListOperationResponse<Deployment>> {
        self.list_deployments_at(id.id()).await
    }

    complete_variants!(
        list_deployments,
        list_deployments_complete,
        list_deployments_complete_matching_predicate,
        AppServiceId,
        Deployment
    );
    complete_variants!(
        list_deployments_slot,
        list_deployments_slot_complete,
        list_deployments_slot_complete_matching_predicate,
        SlotId,
        Deployment
    );

    async fn list_deployments_at(&self, path: String) -> AzureResult<ListOperationResponse<Deployment>> {
        let options = RequestOptions::new(HttpMethod::Get, format!("{path}/deployments"), &[200]);
        self.execute_paged("list_deployments", options).await
    }

    pub async fn get_deployment(&self, id: &DeploymentId) -> AzureResult<OperationResponse<Deployment>> {
        self.get_deployment_at("get_deployment", id.id()).await
    }

    pub async fn get_deployment_slot(
        &self,
        id: &SlotDeploymentId,
    ) -> AzureResult<OperationResponse<Deployment>> {
        self.get_deployment_at("get_deployment", id.id()).await
    }

    /// Record a deployment made outside of Kudu.
    pub async fn create_deployment(
        &self,
        id: &DeploymentId,
        deployment: &Deployment,
    ) -> AzureResult<OperationResponse<Deployment>> {
        self.create_deployment_at(id.id(), deployment).await
    }

    pub async fn create_deployment_slot(
        &self,
        id: &SlotDeploymentId,
        deployment: &Deployment,
    ) -> AzureResult<OperationResponse<Deployment>> {
        self.create_deployment_at(id.id(), deployment).await
    }

    async fn create_deployment_at(
        &self,
        path: String,
        deployment: &Deployment,
    ) -> AzureResult<OperationResponse<Deployment>> {
        let options = RequestOptions::new(HttpMethod::Put, path, &[200]);
        self.execute("create_deployment", options, Some(deployment))
            .await
    }

    pub async fn delete_deployment(&self, id: &DeploymentId) -> AzureResult<OperationResponse<()>> {
        self.delete_deployment_at(id.id()).await
    }

    pub async fn delete_deployment_slot(
        &self,
        id: &SlotDeploymentId,
    ) -> AzureResult<OperationResponse<()>> {
        self.delete_deployment_at(id.id()).await
    }

    async fn delete_deployment_at(&self, path: String) -> AzureResult<OperationResponse<()>> {
        let options = RequestOptions::new(HttpMethod::Delete, path, &[200, 204]);
        self.execute_no_model("delete_deployment", options, NO_BODY).await
    }

    /// The deployment log; `properties.details` links to the full entries.
    pub async fn list_deployment_log(
        &self,
        id: &DeploymentId,
    ) -> AzureResult<OperationResponse<Deployment>> {
        self.get_deployment_at("list_deployment_log", format!("{}/log", id.id()))
            .await
    }

    pub async fn list_deployment_log_slot(
        &self,
        id: &SlotDeploymentId,
    ) -> AzureResult<OperationResponse<Deployment>> {
        self.get_deployment_at("list_deployment_log", format!("{}/log", id.id()))
            .await
    }

    async fn get_deployment_at(
        &self,
        operation: &'static str,
        path: String,
    ) -> AzureResult<OperationResponse<Deployment>> {
        let options = RequestOptions::new(HttpMethod::Get, path, &[200]);
        self.execute(operation, options, NO_BODY).await
    }

    // ─── Deployment status ──────────────────────────────────────────

    pub async fn list_production_site_deployment_statuses(
        &self,
        id: &AppServiceId,
    ) -> AzureResult<ListOperationResponse<CsmDeploymentStatus>> {
        self.list_deployment_statuses_at(id.id()).await
    }

    pub async fn list_slot_site_deployment_statuses_slot(
        &self,
        id: &SlotId,
    ) -> AzureResult<ListOperationResponse<CsmDeploymentStatus>> {
        self.list_deployment_statuses_at(id.id()).await
    }

    complete_variants!(
        list_production_site_deployment_statuses,
        list_production_site_deployment_statuses_complete,
        list_production_site_deployment_statuses_complete_matching_predicate,
        AppServiceId,
        CsmDeploymentStatus
    );
    complete_variants!(
        list_slot_site_deployment_statuses_slot,
        list_slot_site_deployment_statuses_slot_complete,
        list_slot_site_deployment_statuses_slot_complete_matching_predicate,
        SlotId,
        CsmDeploymentStatus
    );

    async fn list_deployment_statuses_at(
        &self,
        path: String,
    ) -> AzureResult<ListOperationResponse<CsmDeploymentStatus>> {
        let options =
            RequestOptions::new(HttpMethod::Get, format!("{path}/deploymentStatus"), &[200]);
        self.execute_paged("list_deployment_statuses", options).await
    }

    /// Status of one deployment; answers 202 with a `Location` while the
    /// build is still running.
    pub async fn get_production_site_deployment_status(
        &self,
        id: &DeploymentStatusId,
    ) -> AzureResult<LongRunningResponse<CsmDeploymentStatus>> {
        self.get_deployment_status_at(id.id()).await
    }

    pub async fn get_slot_site_deployment_status_slot(
        &self,
        id: &SlotDeploymentStatusId,
    ) -> AzureResult<LongRunningResponse<CsmDeploymentStatus>> {
        self.get_deployment_status_at(id.id()).await
    }

    then_poll!(
        get_production_site_deployment_status,
        get_production_site_deployment_status_then_poll(id: &DeploymentStatusId)
    );
    then_poll!(
        get_slot_site_deployment_status_slot,
        get_slot_site_deployment_status_slot_then_poll(id: &SlotDeploymentStatusId)
    );

    async fn get_deployment_status_at(
        &self,
        path: String,
    ) -> AzureResult<LongRunningResponse<CsmDeploymentStatus>> {
        let options = RequestOptions::new(HttpMethod::Get, path, &[200, 202]);
        self.execute_lro("get_deployment_status", options, NO_BODY)
            .await
    }
}
