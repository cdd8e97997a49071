//! Logic Apps (Standard) workflows hosted on a site.

use azrm_core::{AzureResult, HttpMethod, ListOperationResponse, OperationResponse, RequestOptions};
use azrm_resourceids::ResourceId;

use crate::ids::{AppServiceId, WorkflowId};
use crate::models::WorkflowEnvelope;
use crate::{WebAppsClient, NO_BODY};

impl WebAppsClient {
    pub async fn list_workflows(
        &self,
        id: &AppServiceId,
    ) -> AzureResult<ListOperationResponse<WorkflowEnvelope>> {
        let options =
            RequestOptions::new(HttpMethod::Get, format!("{}/workflows", id.id()), &[200]);
        self.execute_paged("list_workflows", options).await
    }

    complete_variants!(
        list_workflows,
        list_workflows_complete,
        list_workflows_complete_matching_predicate,
        AppServiceId,
        WorkflowEnvelope
    );

    pub async fn get_workflow(&self, id: &WorkflowId) -> AzureResult<OperationResponse<WorkflowEnvelope>> {
        let options = RequestOptions::new(HttpMethod::Get, id.id(), &[200]);
        self.execute("get_workflow", options, NO_BODY).await
    }
}
