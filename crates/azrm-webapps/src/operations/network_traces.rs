//! Azure App Service – network trace captures and network features.

use azrm_core::{AzureResult, HttpMethod, LongRunningResponse, OperationResponse, RequestOptions};
use azrm_resourceids::ResourceId;

use crate::ids::{
    AppServiceId, NetworkFeatureId, NetworkTraceId, NetworkTraceOperationResultId, SlotId,
    SlotNetworkFeatureId, SlotNetworkTraceId, SlotNetworkTraceOperationResultId,
};
use crate::models::{NetworkFeatures, NetworkTrace};
use crate::options::StartWebSiteNetworkTraceOperationOperationOptions;
use crate::{WebAppsClient, NO_BODY};

impl WebAppsClient {
    /// Start capturing network traffic; the final result lists the
    /// captures written to the `sasUrl` container.
    pub async fn start_web_site_network_trace_operation(
        &self,
        id: &AppServiceId,
        options: &StartWebSiteNetworkTraceOperationOperationOptions,
    ) -> AzureResult<LongRunningResponse<Vec<NetworkTrace>>> {
        self.start_network_trace_at(id.id(), options).await
    }

    pub async fn start_web_site_network_trace_operation_slot(
        &self,
        id: &SlotId,
        options: &StartWebSiteNetworkTraceOperationOperationOptions,
    ) -> AzureResult<LongRunningResponse<Vec<NetworkTrace>>> {
        self.start_network_trace_at(id.id(), options).await
    }

    then_poll!(
        start_web_site_network_trace_operation,
        start_web_site_network_trace_operation_then_poll(
            id: &AppServiceId,
            options: &StartWebSiteNetworkTraceOperationOperationOptions
        )
    );
    then_poll!(
        start_web_site_network_trace_operation_slot,
        start_web_site_network_trace_operation_slot_then_poll(
            id: &SlotId,
            options: &StartWebSiteNetworkTraceOperationOperationOptions
        )
    );

    async fn start_network_trace_at(
        &self,
        path: String,
        options: &StartWebSiteNetworkTraceOperationOperationOptions,
    ) -> AzureResult<LongRunningResponse<Vec<NetworkTrace>>> {
        let request = RequestOptions::new(
            HttpMethod::Post,
            format!("{path}/networkTrace/startOperation"),
            &[200, 202],
        )
        .with_options(options);
        self.execute_lro("start_web_site_network_trace_operation", request, NO_BODY)
            .await
    }

    pub async fn stop_web_site_network_trace(
        &self,
        id: &AppServiceId,
    ) -> AzureResult<OperationResponse<()>> {
        self.stop_network_trace_at(id.id()).await
    }

    pub async fn stop_web_site_network_trace_slot(
        &self,
        id: &SlotId,
    ) -> AzureResult<OperationResponse<()>> {
        self.stop_network_trace_at(id.id()).await
    }

    async fn stop_network_trace_at(&self, path: String) -> AzureResult<OperationResponse<()>> {
        let options =
            RequestOptions::new(HttpMethod::Post, format!("{path}/networkTrace/stop"), &[200, 204]);
        self.execute_no_model("stop_web_site_network_trace", options, NO_BODY)
            .await
    }

    pub async fn get_network_traces(
        &self,
        id: &NetworkTraceId,
    ) -> AzureResult<OperationResponse<Vec<NetworkTrace>>> {
        self.get_network_traces_at(id.id(), &[200]).await
    }

    pub async fn get_network_traces_slot(
        &self,
        id: &SlotNetworkTraceId,
    ) -> AzureResult<OperationResponse<Vec<NetworkTrace>>> {
        self.get_network_traces_at(id.id(), &[200]).await
    }

    /// Status of a capture started by
    /// [`Self::start_web_site_network_trace_operation`]; 202 while running.
    pub async fn get_network_trace_operation(
        &self,
        id: &NetworkTraceOperationResultId,
    ) -> AzureResult<OperationResponse<Vec<NetworkTrace>>> {
        self.get_network_traces_at(id.id(), &[200, 202]).await
    }

    pub async fn get_network_trace_operation_slot(
        &self,
        id: &SlotNetworkTraceOperationResultId,
    ) -> AzureResult<OperationResponse<Vec<NetworkTrace>>> {
        self.get_network_traces_at(id.id(), &[200, 202]).await
    }

    async fn get_network_traces_at(
        &self,
        path: String,
        expected: &[u16],
    ) -> AzureResult<OperationResponse<Vec<NetworkTrace>>> {
        let options = RequestOptions::new(HttpMethod::Get, path, expected);
        self.execute("get_network_traces", options, NO_BODY).await
    }

    /// Hybrid connections and the VNet integration of the site, as one view.
    pub async fn get_network_features(
        &self,
        id: &NetworkFeatureId,
    ) -> AzureResult<OperationResponse<NetworkFeatures>> {
        self.get_network_features_at(id.id()).await
    }

    pub async fn get_network_features_slot(
        &self,
        id: &SlotNetworkFeatureId,
    ) -> AzureResult<OperationResponse<NetworkFeatures>> {
        self.get_network_features_at(id.id()).await
    }

    async fn get_network_features_at(
        &self,
        path: String,
    ) -> AzureResult<OperationResponse<NetworkFeatures>> {
        let options = RequestOptions::new(HttpMethod::Get, path, &[200]);
        self.execute("get_network_features", options, NO_BODY).await
    }
}

#[cfg(test)]
mod tests {
    use azrm_core::testing::FakeBackend;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    use super::*;
    use crate::test_support::{client, last_path, SITE};

    #[tokio::test]
    async fn start_trace_polls_location_for_captures() {
        let loc = "https://management.azure.com/subscriptions/sub1/resourceGroups/rg1/providers/Microsoft.Web/sites/site1/networkTrace/operationResults/t1?api-version=2023-12-01";
        let backend = FakeBackend::new()
            .with_status(202, &[("Location", loc), ("Retry-After", "0")])
            .with_json(
                200,
                json!([{"message": "done", "path": "https://acct.blob.core.windows.net/c/t1.zip", "status": "Succeeded"}]),
            );
        let c = client(&backend).await;
        let mut lro = c
            .start_web_site_network_trace_operation(
                &AppServiceId::new("sub1", "rg1", "site1"),
                &StartWebSiteNetworkTraceOperationOperationOptions {
                    duration_in_seconds: Some(60),
                    max_frame_length: None,
                    sas_url: Some("https://acct.blob.core.windows.net/c?sig=x".into()),
                },
            )
            .await
            .unwrap();
        assert_eq!(lro.status, 202);
        let traces = lro.poll_until_done().await.unwrap().unwrap();
        assert_eq!(traces.len(), 1);
        assert_eq!(traces[0].status.as_deref(), Some("Succeeded"));

        let first = &backend.requests()[0];
        assert!(first
            .url
            .starts_with(&format!("https://management.azure.com{SITE}/networkTrace/startOperation?api-version=2023-12-01&durationInSeconds=60&sasUrl=")));
        assert_eq!(backend.requests()[1].url, loc);
    }

    #[tokio::test]
    async fn trace_operation_still_running() {
        let backend = FakeBackend::new().with_status(202, &[]);
        let c = client(&backend).await;
        let resp = c
            .get_network_trace_operation_slot(&SlotNetworkTraceOperationResultId::new(
                "sub1", "rg1", "site1", "stage", "t1",
            ))
            .await
            .unwrap();
        assert_eq!(resp.status, 202);
        assert!(resp.model.is_none());
        assert_eq!(
            last_path(&backend),
            format!("{SITE}/slots/stage/networkTrace/operationResults/t1?api-version=2023-12-01")
        );
    }

    #[tokio::test]
    async fn traces_by_operation() {
        let backend = FakeBackend::new().with_json(200, json!([]));
        let c = client(&backend).await;
        let resp = c
            .get_network_traces(&NetworkTraceId::new("sub1", "rg1", "site1", "t1"))
            .await
            .unwrap();
        assert_eq!(resp.model, Some(vec![]));
        assert_eq!(
            last_path(&backend),
            format!("{SITE}/networkTraces/t1?api-version=2023-12-01")
        );
    }
}
