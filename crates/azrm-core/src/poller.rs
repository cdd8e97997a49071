//! Long-running operation polling.
//!
//! ARM signals asynchronous work in one of three ways, checked in order:
//! an `Azure-AsyncOperation` status URL, a `Location` URL that answers 202
//! until done, or a `properties.provisioningState` on the resource itself.

use std::time::Duration;

use log::{debug, warn};
use serde::de::DeserializeOwned;
use serde_json::Value;
use tokio::time::Instant;

use crate::client::AzureClient;
use crate::error::{AzureError, AzureErrorKind, AzureResult};
use crate::http::{HttpMethod, HttpResponse};

/// Where a long-running operation currently stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PollingStatus {
    InProgress,
    Succeeded,
    Failed,
    Cancelled,
}

impl PollingStatus {
    /// Map an ARM status string (`status` or `provisioningState`).
    pub fn from_arm(value: &str) -> Self {
        match value.to_ascii_lowercase().as_str() {
            "succeeded" => Self::Succeeded,
            "failed" => Self::Failed,
            "canceled" | "cancelled" => Self::Cancelled,
            _ => Self::InProgress,
        }
    }

    pub fn is_terminal(&self) -> bool {
        !matches!(self, Self::InProgress)
    }
}

#[derive(Debug, Clone, PartialEq)]
enum Strategy {
    AsyncOperation {
        url: String,
        location: Option<String>,
    },
    Location {
        url: String,
    },
    ProvisioningState {
        url: String,
    },
    Done,
}

/// Drives one long-running operation to completion.
#[derive(Clone)]
pub struct Poller {
    client: AzureClient,
    method: HttpMethod,
    resource_url: String,
    strategy: Strategy,
    status: PollingStatus,
    retry_after: Option<Duration>,
    final_response: Option<HttpResponse>,
}

impl std::fmt::Debug for Poller {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Poller")
            .field("method", &self.method)
            .field("resource_url", &self.resource_url)
            .field("strategy", &self.strategy)
            .field("status", &self.status)
            .finish()
    }
}

impl Poller {
    /// Pick a polling strategy from the initial response of `method` on
    /// `resource_url`.
    pub fn new(
        client: AzureClient,
        method: HttpMethod,
        resource_url: impl Into<String>,
        initial: &HttpResponse,
    ) -> Self {
        let resource_url = resource_url.into();
        let strategy = if let Some(url) = initial.header("Azure-AsyncOperation") {
            Strategy::AsyncOperation {
                url: url.to_string(),
                location: initial.header("Location").map(str::to_string),
            }
        } else if let (202, Some(url)) = (initial.status, initial.header("Location")) {
            Strategy::Location {
                url: url.to_string(),
            }
        } else if matches!(method, HttpMethod::Put | HttpMethod::Patch)
            && provisioning_state(initial).is_some_and(|s| !s.is_terminal())
        {
            Strategy::ProvisioningState {
                url: resource_url.clone(),
            }
        } else {
            Strategy::Done
        };

        let (status, final_response) = match strategy {
            // a bare 202 carries no result
            Strategy::Done if initial.status == 202 => (PollingStatus::Succeeded, None),
            Strategy::Done => (PollingStatus::Succeeded, Some(initial.clone())),
            _ => (PollingStatus::InProgress, None),
        };
        debug!("Azure {method} {resource_url} → poller {strategy:?}");

        Self {
            client,
            method,
            resource_url,
            strategy,
            status,
            retry_after: retry_after(initial),
            final_response,
        }
    }

    pub fn status(&self) -> PollingStatus {
        self.status
    }

    pub fn is_done(&self) -> bool {
        self.status.is_terminal()
    }

    /// The response that carried the final result, once succeeded.
    pub fn final_response(&self) -> Option<&HttpResponse> {
        self.final_response.as_ref()
    }

    /// Perform a single status check.
    pub async fn poll(&mut self) -> AzureResult<PollingStatus> {
        if self.is_done() {
            return Ok(self.status);
        }

        match self.strategy.clone() {
            Strategy::Done => {}
            Strategy::AsyncOperation { url, location } => {
                let resp = self.get(&url).await?;
                let status = resp
                    .json::<Value>()?
                    .get("status")
                    .and_then(Value::as_str)
                    .map(PollingStatus::from_arm)
                    .unwrap_or(PollingStatus::InProgress);
                match status {
                    PollingStatus::InProgress => {}
                    PollingStatus::Succeeded => {
                        let final_resp = self.fetch_final(location.as_deref()).await?;
                        self.finish(PollingStatus::Succeeded, final_resp);
                    }
                    failed => return Err(self.fail(failed, &resp)),
                }
            }
            Strategy::Location { url } => {
                let resp = self.client.get_absolute(&url).await?;
                self.retry_after = retry_after(&resp);
                match resp.status {
                    202 => {
                        if let Some(next) = resp.header("Location") {
                            self.strategy = Strategy::Location {
                                url: next.to_string(),
                            };
                        }
                    }
                    200 | 201 | 204 => self.finish(PollingStatus::Succeeded, resp),
                    _ => return Err(self.fail(PollingStatus::Failed, &resp)),
                }
            }
            Strategy::ProvisioningState { url } => {
                let resp = self.get(&url).await?;
                match provisioning_state(&resp).unwrap_or(PollingStatus::Succeeded) {
                    PollingStatus::InProgress => {}
                    PollingStatus::Succeeded => self.finish(PollingStatus::Succeeded, resp),
                    failed => return Err(self.fail(failed, &resp)),
                }
            }
        }

        Ok(self.status)
    }

    /// Poll until the operation reaches a terminal state, sleeping for
    /// `Retry-After` (or the configured interval) between checks.
    pub async fn poll_until_done(&mut self) -> AzureResult<Option<HttpResponse>> {
        let deadline = Instant::now() + self.client.config().poll_timeout();
        while !self.is_done() {
            let wait = self
                .retry_after
                .unwrap_or_else(|| self.client.config().poll_interval());
            if Instant::now() + wait > deadline {
                warn!("Azure {} {} → gave up polling", self.method, self.resource_url);
                return Err(AzureError::new(
                    AzureErrorKind::PollTimeout,
                    format!("{} {} did not complete in time", self.method, self.resource_url),
                ));
            }
            tokio::time::sleep(wait).await;
            self.poll().await?;
        }
        Ok(self.final_response.clone())
    }

    async fn get(&mut self, url: &str) -> AzureResult<HttpResponse> {
        let resp = self.client.get_absolute(url).await?;
        if !(200..300).contains(&resp.status) {
            return Err(AzureError::from_status(resp.status, &resp.text()));
        }
        self.retry_after = retry_after(&resp);
        Ok(resp)
    }

    /// After an async-operation succeeds, the result lives on the resource
    /// (PUT/PATCH/GET) or behind `Location` (POST/DELETE).
    async fn fetch_final(&mut self, location: Option<&str>) -> AzureResult<HttpResponse> {
        let target = match (self.method, location) {
            (HttpMethod::Put | HttpMethod::Patch | HttpMethod::Get, _) => {
                Some(self.resource_url.clone())
            }
            (_, Some(loc)) => Some(loc.to_string()),
            _ => None,
        };
        match target {
            Some(url) => self.get(&url).await,
            None => Ok(HttpResponse {
                status: 200,
                ..Default::default()
            }),
        }
    }

    fn finish(&mut self, status: PollingStatus, resp: HttpResponse) {
        debug!("Azure {} {} → {:?}", self.method, self.resource_url, status);
        self.status = status;
        self.strategy = Strategy::Done;
        self.final_response = Some(resp);
    }

    fn fail(&mut self, status: PollingStatus, resp: &HttpResponse) -> AzureError {
        self.status = status;
        self.strategy = Strategy::Done;
        let mut err = AzureError::from_status(resp.status, &resp.text());
        err.kind = AzureErrorKind::OperationFailed;
        err.message = format!(
            "{} {} {:?}: {}",
            self.method, self.resource_url, status, err.message
        );
        warn!("Azure {}", err.message);
        err
    }
}

fn provisioning_state(resp: &HttpResponse) -> Option<PollingStatus> {
    let body: Value = resp.json_opt().ok().flatten()?;
    body.pointer("/properties/provisioningState")
        .and_then(Value::as_str)
        .map(PollingStatus::from_arm)
}

fn retry_after(resp: &HttpResponse) -> Option<Duration> {
    resp.header("Retry-After")
        .and_then(|v| v.trim().parse::<u64>().ok())
        .map(Duration::from_secs)
}

/// Response of an operation that may continue in the background.
#[derive(Debug)]
pub struct LongRunningResponse<T> {
    pub status: u16,
    pub headers: Vec<(String, String)>,
    /// Model from the initial response, when it carried one.
    pub model: Option<T>,
    pub poller: Poller,
    decode: fn(&HttpResponse) -> AzureResult<Option<T>>,
}

fn decode_json<T: DeserializeOwned>(resp: &HttpResponse) -> AzureResult<Option<T>> {
    resp.json_opt()
}

fn decode_nothing(_: &HttpResponse) -> AzureResult<Option<()>> {
    Ok(None)
}

impl<T: DeserializeOwned> LongRunningResponse<T> {
    pub fn with_model(
        client: &AzureClient,
        method: HttpMethod,
        resource_url: String,
        resp: HttpResponse,
    ) -> AzureResult<Self> {
        let poller = Poller::new(client.clone(), method, resource_url, &resp);
        // a 202 body is an operation status, not the model
        let model = if resp.status == 202 { None } else { resp.json_opt()? };
        Ok(Self {
            status: resp.status,
            headers: resp.headers,
            model,
            poller,
            decode: decode_json::<T>,
        })
    }
}

impl LongRunningResponse<()> {
    pub fn without_model(
        client: &AzureClient,
        method: HttpMethod,
        resource_url: String,
        resp: HttpResponse,
    ) -> Self {
        let poller = Poller::new(client.clone(), method, resource_url, &resp);
        Self {
            status: resp.status,
            headers: resp.headers,
            model: None,
            poller,
            decode: decode_nothing,
        }
    }
}

impl<T> LongRunningResponse<T> {
    /// Wait for completion and return the final model, if any.
    pub async fn poll_until_done(&mut self) -> AzureResult<Option<T>> {
        match self.poller.poll_until_done().await? {
            Some(resp) => (self.decode)(&resp),
            None => Ok(None),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{ArmConfig, AzureToken};
    use crate::testing::FakeBackend;
    use serde::Deserialize;
    use serde_json::json;
    use std::sync::Arc;

    const RESOURCE: &str = "https://management.azure.com/subscriptions/s/resourceGroups/rg/providers/Microsoft.Web/sites/site1?api-version=2023-12-01";

    #[derive(Debug, Deserialize, PartialEq)]
    struct Site {
        name: String,
    }

    async fn client(backend: &FakeBackend, poll_timeout_secs: u64) -> AzureClient {
        let config = ArmConfig {
            poll_interval_secs: 0,
            poll_timeout_secs,
            ..Default::default()
        };
        let c = AzureClient::with_backend(config, Arc::new(backend.clone()));
        c.set_token(AzureToken {
            access_token: "t".into(),
            token_type: "Bearer".into(),
            expires_at: None,
        })
        .await;
        c
    }

    fn initial(status: u16, headers: &[(&str, &str)], body: Value) -> HttpResponse {
        HttpResponse {
            status,
            headers: headers
                .iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect(),
            body: serde_json::to_vec(&body).unwrap(),
        }
    }

    #[test]
    fn arm_status_mapping() {
        assert_eq!(PollingStatus::from_arm("Succeeded"), PollingStatus::Succeeded);
        assert_eq!(PollingStatus::from_arm("FAILED"), PollingStatus::Failed);
        assert_eq!(PollingStatus::from_arm("Canceled"), PollingStatus::Cancelled);
        assert_eq!(PollingStatus::from_arm("Running"), PollingStatus::InProgress);
        assert!(!PollingStatus::InProgress.is_terminal());
    }

    #[tokio::test]
    async fn completed_initial_response_needs_no_polling() {
        let backend = FakeBackend::new();
        let c = client(&backend, 60).await;
        let resp = initial(200, &[], json!({"name": "site1"}));
        let mut lro: LongRunningResponse<Site> =
            LongRunningResponse::with_model(&c, HttpMethod::Put, RESOURCE.into(), resp).unwrap();
        assert!(lro.poller.is_done());
        assert_eq!(lro.model, Some(Site { name: "site1".into() }));

        let done = lro.poll_until_done().await.unwrap();
        assert_eq!(done, Some(Site { name: "site1".into() }));
        assert!(backend.requests().is_empty());
    }

    #[tokio::test]
    async fn async_operation_then_resource_get() {
        let backend = FakeBackend::new()
            .with_json_headers(200, &[("Retry-After", "0")], json!({"status": "InProgress"}))
            .with_json(200, json!({"status": "Succeeded"}))
            .with_json(200, json!({"name": "site1"}));
        let c = client(&backend, 60).await;
        let resp = initial(
            201,
            &[("Azure-AsyncOperation", "https://management.azure.com/op/1")],
            json!({"name": "site1"}),
        );
        let mut lro: LongRunningResponse<Site> =
            LongRunningResponse::with_model(&c, HttpMethod::Put, RESOURCE.into(), resp).unwrap();
        assert_eq!(lro.poller.status(), PollingStatus::InProgress);

        let done = lro.poll_until_done().await.unwrap();
        assert_eq!(done, Some(Site { name: "site1".into() }));

        let sent = backend.requests();
        assert_eq!(sent.len(), 3);
        assert_eq!(sent[0].url, "https://management.azure.com/op/1");
        assert_eq!(sent[2].url, RESOURCE);
    }

    #[tokio::test]
    async fn location_polling_until_ok() {
        let backend = FakeBackend::new()
            .with_status(202, &[("Location", "https://management.azure.com/loc/2"), ("Retry-After", "0")])
            .with_status(200, &[]);
        let c = client(&backend, 60).await;
        let resp = initial(202, &[("Location", "https://management.azure.com/loc/1")], Value::Null);
        let mut lro = LongRunningResponse::without_model(&c, HttpMethod::Post, RESOURCE.into(), resp);

        assert_eq!(lro.poll_until_done().await.unwrap(), None);
        assert_eq!(lro.poller.status(), PollingStatus::Succeeded);
        let sent = backend.requests();
        assert_eq!(sent[0].url, "https://management.azure.com/loc/1");
        assert_eq!(sent[1].url, "https://management.azure.com/loc/2");
    }

    #[tokio::test]
    async fn provisioning_state_polling() {
        let backend = FakeBackend::new()
            .with_json(200, json!({"name": "site1", "properties": {"provisioningState": "InProgress"}}))
            .with_json(200, json!({"name": "site1", "properties": {"provisioningState": "Succeeded"}}));
        let c = client(&backend, 60).await;
        let resp = initial(
            201,
            &[],
            json!({"name": "site1", "properties": {"provisioningState": "Accepted"}}),
        );
        let mut lro: LongRunningResponse<Site> =
            LongRunningResponse::with_model(&c, HttpMethod::Put, RESOURCE.into(), resp).unwrap();
        let done = lro.poll_until_done().await.unwrap();
        assert_eq!(done, Some(Site { name: "site1".into() }));
        assert_eq!(backend.requests().len(), 2);
    }

    #[tokio::test]
    async fn failed_operation_surfaces_error() {
        let backend = FakeBackend::new().with_json(
            200,
            json!({"status": "Failed", "error": {"code": "Conflict", "message": "slot busy"}}),
        );
        let c = client(&backend, 60).await;
        let resp = initial(202, &[("Azure-AsyncOperation", "https://management.azure.com/op/9")], Value::Null);
        let mut lro = LongRunningResponse::without_model(&c, HttpMethod::Post, RESOURCE.into(), resp);

        let err = lro.poll_until_done().await.unwrap_err();
        assert_eq!(err.kind, AzureErrorKind::OperationFailed);
        assert!(err.message.contains("slot busy"));
        assert_eq!(lro.poller.status(), PollingStatus::Failed);
    }

    #[tokio::test]
    async fn times_out() {
        let backend = FakeBackend::new();
        let c = client(&backend, 0).await;
        let resp = initial(
            202,
            &[("Location", "https://management.azure.com/loc/1"), ("Retry-After", "5")],
            Value::Null,
        );
        let mut poller = Poller::new(c, HttpMethod::Delete, RESOURCE, &resp);
        let err = poller.poll_until_done().await.unwrap_err();
        assert_eq!(err.kind, AzureErrorKind::PollTimeout);
        assert!(backend.requests().is_empty());
    }

    #[tokio::test]
    async fn location_conflict_fails_operation() {
        let backend = FakeBackend::new().with_json(
            409,
            json!({"error": {"code": "Conflict", "message": "swap already running"}}),
        );
        let c = client(&backend, 60).await;
        let resp = initial(202, &[("Location", "https://management.azure.com/loc/1")], Value::Null);
        let mut lro = LongRunningResponse::without_model(&c, HttpMethod::Post, RESOURCE.into(), resp);

        let err = lro.poll_until_done().await.unwrap_err();
        assert_eq!(err.kind, AzureErrorKind::OperationFailed);
        assert_eq!(err.status_code, Some(409));
        assert!(err.message.contains("swap already running"));
        assert_eq!(lro.poller.status(), PollingStatus::Failed);
        assert_eq!(backend.requests().len(), 1);
    }

    #[tokio::test]
    async fn get_operation_refetches_resource() {
        let backend = FakeBackend::new()
            .with_json(200, json!({"status": "Succeeded"}))
            .with_json(200, json!({"name": "final"}));
        let c = client(&backend, 60).await;
        let resp = initial(
            202,
            &[("Azure-AsyncOperation", "https://management.azure.com/op/3")],
            json!({"status": "Running"}),
        );
        let mut lro: LongRunningResponse<Site> =
            LongRunningResponse::with_model(&c, HttpMethod::Get, RESOURCE.into(), resp).unwrap();

        let done = lro.poll_until_done().await.unwrap();
        assert_eq!(done, Some(Site { name: "final".into() }));
        let sent = backend.requests();
        assert_eq!(sent.len(), 2);
        assert_eq!(sent[1].url, RESOURCE);
    }

    #[tokio::test]
    async fn bare_accepted_has_no_model() {
        let backend = FakeBackend::new();
        let c = client(&backend, 60).await;
        let resp = initial(202, &[], json!({"name": "not-a-site"}));
        let mut lro: LongRunningResponse<Site> =
            LongRunningResponse::with_model(&c, HttpMethod::Post, RESOURCE.into(), resp).unwrap();

        assert!(lro.poller.is_done());
        assert!(lro.poller.final_response().is_none());
        assert_eq!(lro.poll_until_done().await.unwrap(), None);
        assert!(backend.requests().is_empty());
    }
}
