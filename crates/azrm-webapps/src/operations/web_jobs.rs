//! Azure App Service – WebJobs: continuous, triggered and their run history.

use serde::de::DeserializeOwned;

use azrm_core::{AzureResult, HttpMethod, ListOperationResponse, OperationResponse, RequestOptions};
use azrm_resourceids::ResourceId;

use crate::ids::{
    AppServiceId, ContinuousWebJobId, SlotContinuousWebJobId, SlotId, SlotTriggeredWebJobHistoryId,
    SlotTriggeredWebJobId, SlotWebJobId, TriggeredWebJobHistoryId, TriggeredWebJobId, WebJobId,
};
use crate::models::{ContinuousWebJob, TriggeredJobHistory, TriggeredWebJob, WebJob};
use crate::{WebAppsClient, NO_BODY};

impl WebAppsClient {
    // ─── All web jobs ───────────────────────────────────────────────

    pub async fn list_web_jobs(&self, id: &AppServiceId) -> AzureResult<ListOperationResponse<WebJob>> {
        self.list_web_job_items_at("list_web_jobs", format!("{}/webJobs", id.id()))
            .await
    }

    pub async fn list_web_jobs_slot(&self, id: &SlotId) -> AzureResult<ListOperationResponse<WebJob>> {
        self.list_web_job_items_at("list_web_jobs", format!("{}/webJobs", id.id()))
            .await
    }

    complete_variants!(
        list_web_jobs,
        list_web_jobs_complete,
        list_web_jobs_complete_matching_predicate,
        AppServiceId,
        WebJob
    );
    complete_variants!(
        list_web_jobs_slot,
        list_web_jobs_slot_complete,
        list_web_jobs_slot_complete_matching_predicate,
        SlotId,
        WebJob
    );

    pub async fn get_web_job(&self, id: &WebJobId) -> AzureResult<OperationResponse<WebJob>> {
        self.get_web_job_item_at("get_web_job", id.id()).await
    }

    pub async fn get_web_job_slot(&self, id: &SlotWebJobId) -> AzureResult<OperationResponse<WebJob>> {
        self.get_web_job_item_at("get_web_job", id.id()).await
    }

    // ─── Continuous ─────────────────────────────────────────────────

    pub async fn list_continuous_web_jobs(
        &self,
        id: &AppServiceId,
    ) -> AzureResult<ListOperationResponse<ContinuousWebJob>> {
        self.list_web_job_items_at(
            "list_continuous_web_jobs",
            format!("{}/continuousWebJobs", id.id()),
        )
        .await
    }

    pub async fn list_continuous_web_jobs_slot(
        &self,
        id: &SlotId,
    ) -> AzureResult<ListOperationResponse<ContinuousWebJob>> {
        self.list_web_job_items_at(
            "list_continuous_web_jobs",
            format!("{}/continuousWebJobs", id.id()),
        )
        .await
    }

    complete_variants!(
        list_continuous_web_jobs,
        list_continuous_web_jobs_complete,
        list_continuous_web_jobs_complete_matching_predicate,
        AppServiceId,
        ContinuousWebJob
    );
    complete_variants!(
        list_continuous_web_jobs_slot,
        list_continuous_web_jobs_slot_complete,
        list_continuous_web_jobs_slot_complete_matching_predicate,
        SlotId,
        ContinuousWebJob
    );

    pub async fn get_continuous_web_job(
        &self,
        id: &ContinuousWebJobId,
    ) -> AzureResult<OperationResponse<ContinuousWebJob>> {
        self.get_web_job_item_at("get_continuous_web_job", id.id())
            .await
    }

    pub async fn get_continuous_web_job_slot(
        &self,
        id: &SlotContinuousWebJobId,
    ) -> AzureResult<OperationResponse<ContinuousWebJob>> {
        self.get_web_job_item_at("get_continuous_web_job", id.id())
            .await
    }

    pub async fn start_continuous_web_job(
        &self,
        id: &ContinuousWebJobId,
    ) -> AzureResult<OperationResponse<()>> {
        self.web_job_action_at("start_continuous_web_job", format!("{}/start", id.id()))
            .await
    }

    pub async fn start_continuous_web_job_slot(
        &self,
        id: &SlotContinuousWebJobId,
    ) -> AzureResult<OperationResponse<()>> {
        self.web_job_action_at("start_continuous_web_job", format!("{}/start", id.id()))
            .await
    }

    pub async fn stop_continuous_web_job(
        &self,
        id: &ContinuousWebJobId,
    ) -> AzureResult<OperationResponse<()>> {
        self.web_job_action_at("stop_continuous_web_job", format!("{}/stop", id.id()))
            .await
    }

    pub async fn stop_continuous_web_job_slot(
        &self,
        id: &SlotContinuousWebJobId,
    ) -> AzureResult<OperationResponse<()>> {
        self.web_job_action_at("stop_continuous_web_job", format!("{}/stop", id.id()))
            .await
    }

    pub async fn delete_continuous_web_job(
        &self,
        id: &ContinuousWebJobId,
    ) -> AzureResult<OperationResponse<()>> {
        self.delete_web_job_at("delete_continuous_web_job", id.id())
            .await
    }

    pub async fn delete_continuous_web_job_slot(
        &self,
        id: &SlotContinuousWebJobId,
    ) -> AzureResult<OperationResponse<()>> {
        self.delete_web_job_at("delete_continuous_web_job", id.id())
            .await
    }

    // ─── Triggered ──────────────────────────────────────────────────

    pub async fn list_triggered_web_jobs(
        &self,
        id: &AppServiceId,
    ) -> AzureResult<ListOperationResponse<TriggeredWebJob>> {
        self.list_web_job_items_at(
            "list_triggered_web_jobs",
            format!("{}/triggeredWebJobs", id.id()),
        )
        .await
    }

    pub async fn list_triggered_web_jobs_slot(
        &self,
        id: &SlotId,
    ) -> AzureResult<ListOperationResponse<TriggeredWebJob>> {
        self.list_web_job_items_at(
            "list_triggered_web_jobs",
            format!("{}/triggeredWebJobs", id.id()),
        )
        .await
    }

    complete_variants!(
        list_triggered_web_jobs,
        list_triggered_web_jobs_complete,
        list_triggered_web_jobs_complete_matching_predicate,
        AppServiceId,
        TriggeredWebJob
    );
    complete_variants!(
        list_triggered_web_jobs_slot,
        list_triggered_web_jobs_slot_complete,
        list_triggered_web_jobs_slot_complete_matching_predicate,
        SlotId,
        TriggeredWebJob
    );

    pub async fn get_triggered_web_job(
        &self,
        id: &TriggeredWebJobId,
    ) -> AzureResult<OperationResponse<TriggeredWebJob>> {
        self.get_web_job_item_at("get_triggered_web_job", id.id())
            .await
    }

    pub async fn get_triggered_web_job_slot(
        &self,
        id: &SlotTriggeredWebJobId,
    ) -> AzureResult<OperationResponse<TriggeredWebJob>> {
        self.get_web_job_item_at("get_triggered_web_job", id.id())
            .await
    }

    /// Queue a run; progress shows up in the job history.
    pub async fn run_triggered_web_job(
        &self,
        id: &TriggeredWebJobId,
    ) -> AzureResult<OperationResponse<()>> {
        self.web_job_action_at("run_triggered_web_job", format!("{}/run", id.id()))
            .await
    }

    pub async fn run_triggered_web_job_slot(
        &self,
        id: &SlotTriggeredWebJobId,
    ) -> AzureResult<OperationResponse<()>> {
        self.web_job_action_at("run_triggered_web_job", format!("{}/run", id.id()))
            .await
    }

    pub async fn delete_triggered_web_job(
        &self,
        id: &TriggeredWebJobId,
    ) -> AzureResult<OperationResponse<()>> {
        self.delete_web_job_at("delete_triggered_web_job", id.id())
            .await
    }

    pub async fn delete_triggered_web_job_slot(
        &self,
        id: &SlotTriggeredWebJobId,
    ) -> AzureResult<OperationResponse<()>> {
        self.delete_web_job_at("delete_triggered_web_job", id.id())
            .await
    }

    pub async fn list_triggered_web_job_history(
        &self,
        id: &TriggeredWebJobId,
    ) -> AzureResult<ListOperationResponse<TriggeredJobHistory>> {
        self.list_web_job_items_at(
            "list_triggered_web_job_history",
            format!("{}/history", id.id()),
        )
        .await
    }

    pub async fn list_triggered_web_job_history_slot(
        &self,
        id: &SlotTriggeredWebJobId,
    ) -> AzureResult<ListOperationResponse<TriggeredJobHistory>> {
        self.list_web_job_items_at(
            "list_triggered_web_job_history",
            format!("{}/history", id.id()),
        )
        .await
    }

    complete_variants!(
        list_triggered_web_job_history,
        list_triggered_web_job_history_complete,
        list_triggered_web_job_history_complete_matching_predicate,
        TriggeredWebJobId,
        TriggeredJobHistory
    );
    complete_variants!(
        list_triggered_web_job_history_slot,
        list_triggered_web_job_history_slot_complete,
        list_triggered_web_job_history_slot_complete_matching_predicate,
        SlotTriggeredWebJobId,
        TriggeredJobHistory
    );

    pub async fn get_triggered_web_job_history(
        &self,
        id: &TriggeredWebJobHistoryId,
    ) -> AzureResult<OperationResponse<TriggeredJobHistory>> {
        self.get_web_job_item_at("get_triggered_web_job_history", id.id())
            .await
    }

    pub async fn get_triggered_web_job_history_slot(
        &self,
        id: &SlotTriggeredWebJobHistoryId,
    ) -> AzureResult<OperationResponse<TriggeredJobHistory>> {
        self.get_web_job_item_at("get_triggered_web_job_history", id.id())
            .await
    }

    // ─── Shared ─────────────────────────────────────────────────────

    async fn list_web_job_items_at<T: DeserializeOwned>(
        &self,
        operation: &'static str,
        path: String,
    ) -> AzureResult<ListOperationResponse<T>> {
        let options = RequestOptions::new(HttpMethod::Get, path, &[200]);
        self.execute_paged(operation, options).await
    }

    async fn get_web_job_item_at<T: DeserializeOwned>(
        &self,
        operation: &'static str,
        path: String,
    ) -> AzureResult<OperationResponse<T>> {
        let options = RequestOptions::new(HttpMethod::Get, path, &[200]);
        self.execute(operation, options, NO_BODY).await
    }

    async fn web_job_action_at(
        &self,
        operation: &'static str,
        path: String,
    ) -> AzureResult<OperationResponse<()>> {
        let options = RequestOptions::new(HttpMethod::Post, path, &[200]);
        self.execute_no_model(operation, options, NO_BODY).await
    }

    async fn delete_web_job_at(
        &self,
        operation: &'static str,
        path: String,
    ) -> AzureResult<OperationResponse<()>> {
        let options = RequestOptions::new(HttpMethod::Delete, path, &[200, 204]);
        self.execute_no_model(operation, options, NO_BODY).await
    }
}
