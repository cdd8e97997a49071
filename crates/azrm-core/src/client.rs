//! HTTP client wrapper for Azure Resource Manager API.
//!
//! Handles bearer-token injection, rate-limit retries with exponential backoff,
//! expected-status checking and `nextLink` pagination.

use std::sync::Arc;
use std::time::Duration;

use log::{debug, warn};
use serde::de::DeserializeOwned;
use serde::Serialize;
use tokio::sync::Mutex;
use url::Url;

use crate::auth;
use crate::config::{ArmConfig, AzureCredentials, AzureToken};
use crate::error::{AzureError, AzureErrorKind, AzureResult};
use crate::http::{HttpBackend, HttpMethod, HttpRequest, HttpResponse, ReqwestBackend};
use crate::options::{ListOperationResponse, RequestOptions};
use crate::pager::Pager;

/// HTTP client with Azure-specific auth and retry logic.
///
/// Cheap to clone: the backend and the token cache are shared.
#[derive(Clone)]
pub struct AzureClient {
    backend: Arc<dyn HttpBackend>,
    config: ArmConfig,
    credentials: Option<AzureCredentials>,
    token: Arc<Mutex<Option<AzureToken>>>,
}

impl AzureClient {
    /// Client backed by reqwest.
    pub fn new(config: ArmConfig) -> Self {
        let backend = Arc::new(ReqwestBackend::new(&config));
        Self::with_backend(config, backend)
    }

    pub fn with_backend(config: ArmConfig, backend: Arc<dyn HttpBackend>) -> Self {
        Self {
            backend,
            config,
            credentials: None,
            token: Arc::new(Mutex::new(None)),
        }
    }

    pub fn with_credentials(mut self, creds: AzureCredentials) -> Self {
        self.credentials = Some(creds);
        self
    }

    // ── Accessors ────────────────────────────────────────────────────

    pub fn config(&self) -> &ArmConfig {
        &self.config
    }

    pub fn credentials(&self) -> Option<&AzureCredentials> {
        self.credentials.as_ref()
    }

    pub fn subscription_id(&self) -> Option<&str> {
        self.credentials
            .as_ref()
            .map(|c| c.subscription_id.as_str())
            .filter(|s| !s.is_empty())
    }

    pub async fn set_token(&self, token: AzureToken) {
        *self.token.lock().await = Some(token);
    }

    pub async fn clear_token(&self) {
        *self.token.lock().await = None;
    }

    pub async fn is_authenticated(&self) -> bool {
        self.token
            .lock()
            .await
            .as_ref()
            .map(AzureToken::is_usable)
            .unwrap_or(false)
    }

    // ── URL builders ─────────────────────────────────────────────────

    /// Absolute URL for `path` with `api-version` and extra query pairs.
    pub fn url_for(
        &self,
        path: &str,
        api_version: &str,
        query: &[(String, String)],
    ) -> AzureResult<String> {
        let raw = format!("{}{}", self.config.endpoint.trim_end_matches('/'), path);
        let mut url = Url::parse(&raw)
            .map_err(|e| AzureError::new(AzureErrorKind::Validation, format!("invalid URL {raw:?}: {e}")))?;
        {
            let mut pairs = url.query_pairs_mut();
            pairs.append_pair("api-version", api_version);
            for (k, v) in query {
                pairs.append_pair(k, v);
            }
        }
        Ok(url.into())
    }

    // ── Auth ─────────────────────────────────────────────────────────

    /// Current bearer token, acquiring a new one when it is missing or stale.
    async fn bearer(&self) -> AzureResult<String> {
        let mut cached = self.token.lock().await;
        if let Some(token) = cached.as_ref().filter(|t| t.is_usable()) {
            return Ok(token.access_token.clone());
        }

        let creds = self
            .credentials
            .as_ref()
            .filter(|c| c.is_complete())
            .ok_or_else(AzureError::not_authenticated)?;
        debug!("Azure token missing or expired, acquiring a new one");
        let token = auth::acquire_token(self.backend.as_ref(), creds).await?;
        let access = token.access_token.clone();
        *cached = Some(token);
        Ok(access)
    }

    // ── Core send ────────────────────────────────────────────────────

    /// Send with auth and the transient-status retry loop. The status code
    /// is not checked here.
    pub async fn send(&self, request: HttpRequest) -> AzureResult<HttpResponse> {
        let bearer = self.bearer().await?;
        let request = request.header("Authorization", format!("Bearer {bearer}"));

        let max_retries = self.config.max_retries;
        let mut attempt = 0;
        loop {
            debug!("Azure {} {}", request.method, request.url);
            let resp = self.backend.send(request.clone()).await?;

            if should_retry(resp.status) && attempt < max_retries {
                let delay = retry_delay_ms(self.config.retry_base_delay_ms, attempt);
                warn!(
                    "Azure {} {} → {} – retrying in {}ms",
                    request.method, request.url, resp.status, delay
                );
                tokio::time::sleep(Duration::from_millis(delay)).await;
                attempt += 1;
                continue;
            }

            return Ok(resp);
        }
    }

    /// GET an absolute URL (a `nextLink` or a polling URL).
    pub async fn get_absolute(&self, url: &str) -> AzureResult<HttpResponse> {
        self.send(HttpRequest::new(HttpMethod::Get, url)).await
    }

    /// Execute an operation without a request body.
    pub async fn execute(
        &self,
        api_version: &str,
        options: &RequestOptions,
    ) -> AzureResult<HttpResponse> {
        self.dispatch(api_version, options, None).await
    }

    /// Execute an operation with a JSON request body.
    pub async fn execute_with_body<B: Serialize + ?Sized>(
        &self,
        api_version: &str,
        options: &RequestOptions,
        body: &B,
    ) -> AzureResult<HttpResponse> {
        let bytes = serde_json::to_vec(body)
            .map_err(|e| AzureError::parse("serialising request body", e))?;
        self.dispatch(api_version, options, Some(bytes)).await
    }

    /// Build the request for `options` without sending it.
    pub fn prepare(
        &self,
        api_version: &str,
        options: &RequestOptions,
        body: Option<Vec<u8>>,
    ) -> AzureResult<HttpRequest> {
        let url = self.url_for(&options.path, api_version, &options.query)?;
        let mut request = HttpRequest::new(options.method, url);
        for (name, value) in &options.headers {
            request = request.header(name.clone(), value.clone());
        }
        if let Some(body) = body {
            request = request.body(options.content_type, body);
        }
        Ok(request)
    }

    async fn dispatch(
        &self,
        api_version: &str,
        options: &RequestOptions,
        body: Option<Vec<u8>>,
    ) -> AzureResult<HttpResponse> {
        let request = self.prepare(api_version, options, body)?;
        let resp = self.send(request).await?;
        ensure_status(options, resp)
    }

    // ── Pagination ───────────────────────────────────────────────────

    /// Page-by-page iteration over a list operation.
    pub fn pager<T: DeserializeOwned>(
        &self,
        api_version: &str,
        options: RequestOptions,
    ) -> Pager<T> {
        Pager::new(self.clone(), api_version, options)
    }

    /// Follow `nextLink` to collect **all** items from a list operation.
    pub async fn execute_paged<T: DeserializeOwned>(
        &self,
        api_version: &str,
        options: RequestOptions,
    ) -> AzureResult<ListOperationResponse<T>> {
        self.pager(api_version, options).collect_all().await
    }
}

/// Reject statuses the operation does not accept.
pub(crate) fn ensure_status(
    options: &RequestOptions,
    resp: HttpResponse,
) -> AzureResult<HttpResponse> {
    if options.accepts(resp.status) {
        Ok(resp)
    } else {
        Err(AzureError::unexpected_status(
            resp.status,
            &options.expected_status_codes,
            &resp.text(),
        ))
    }
}

fn should_retry(status: u16) -> bool {
    matches!(status, 429 | 500 | 502 | 503 | 504)
}

/// Longest single wait between retries.
const MAX_RETRY_DELAY_MS: u64 = 60_000;

/// `base * 2^attempt`, saturating and capped at [`MAX_RETRY_DELAY_MS`].
fn retry_delay_ms(base: u64, attempt: u32) -> u64 {
    let factor = 2u64.checked_pow(attempt).unwrap_or(u64::MAX);
    base.saturating_mul(factor).min(MAX_RETRY_DELAY_MS)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::FakeBackend;
    use serde_json::json;

    fn token() -> AzureToken {
        AzureToken {
            access_token: "abc".into(),
            token_type: "Bearer".into(),
            expires_at: Some(chrono::Utc::now() + chrono::Duration::hours(1)),
        }
    }

    fn fast_config() -> ArmConfig {
        ArmConfig {
            retry_base_delay_ms: 1,
            ..Default::default()
        }
    }

    async fn client_with(backend: &FakeBackend) -> AzureClient {
        let client = AzureClient::with_backend(fast_config(), Arc::new(backend.clone()));
        client.set_token(token()).await;
        client
    }

    #[tokio::test]
    async fn new_client_default() {
        let c = AzureClient::new(ArmConfig::default());
        assert!(!c.is_authenticated().await);
        assert!(c.credentials().is_none());
        assert!(c.subscription_id().is_none());
    }

    #[tokio::test]
    async fn clear_token_removes_auth() {
        let c = AzureClient::new(ArmConfig::default());
        c.set_token(token()).await;
        assert!(c.is_authenticated().await);
        c.clear_token().await;
        assert!(!c.is_authenticated().await);
    }

    #[test]
    fn url_construction() {
        let c = AzureClient::new(ArmConfig::default());
        let url = c
            .url_for(
                "/subscriptions/abc/providers/Microsoft.Web/sites",
                "2023-12-01",
                &[("includeSlots".into(), "true".into())],
            )
            .unwrap();
        assert_eq!(
            url,
            "https://management.azure.com/subscriptions/abc/providers/Microsoft.Web/sites?api-version=2023-12-01&includeSlots=true"
        );
    }

    #[test]
    fn should_retry_logic() {
        for s in [429, 500, 502, 503, 504] {
            assert!(should_retry(s));
        }
        for s in [200, 400, 401, 404, 409] {
            assert!(!should_retry(s));
        }
    }

    #[tokio::test]
    async fn execute_sends_bearer_and_body() {
        let backend = FakeBackend::new().with_json(200, json!({"name": "site1"}));
        let client = client_with(&backend).await;
        let options = RequestOptions::new(HttpMethod::Put, "/subscriptions/s/x", &[200]);

        let resp = client
            .execute_with_body("2023-12-01", &options, &json!({"location": "westeurope"}))
            .await
            .unwrap();
        assert_eq!(resp.status, 200);

        let sent = backend.last_request().unwrap();
        assert_eq!(sent.method, HttpMethod::Put);
        assert_eq!(sent.header_value("authorization"), Some("Bearer abc"));
        assert_eq!(sent.json_body().unwrap()["location"], "westeurope");
        assert!(sent.url.ends_with("/subscriptions/s/x?api-version=2023-12-01"));
    }

    #[tokio::test]
    async fn unexpected_status_is_error() {
        let backend = FakeBackend::new().with_status(202, &[]);
        let client = client_with(&backend).await;
        let options = RequestOptions::new(HttpMethod::Get, "/x", &[200]);
        let err = client.execute("2023-12-01", &options).await.unwrap_err();
        assert_eq!(err.status_code, Some(202));
    }

    #[tokio::test]
    async fn retries_transient_statuses() {
        let backend = FakeBackend::new()
            .with_status(429, &[])
            .with_status(503, &[])
            .with_json(200, json!({}));
        let client = client_with(&backend).await;
        let options = RequestOptions::new(HttpMethod::Get, "/x", &[200]);
        let resp = client.execute("v", &options).await.unwrap();
        assert_eq!(resp.status, 200);
        assert_eq!(backend.requests().len(), 3);
    }

    #[tokio::test]
    async fn gives_up_after_max_retries() {
        let backend = FakeBackend::new()
            .with_status(500, &[])
            .with_status(500, &[])
            .with_status(500, &[])
            .with_status(500, &[]);
        let client = client_with(&backend).await;
        let options = RequestOptions::new(HttpMethod::Get, "/x", &[200]);
        let err = client.execute("v", &options).await.unwrap_err();
        assert_eq!(err.kind, AzureErrorKind::ServerError);
        assert_eq!(backend.requests().len(), 4);
    }

    #[test]
    fn retry_delay_doubles_then_caps() {
        assert_eq!(retry_delay_ms(500, 0), 500);
        assert_eq!(retry_delay_ms(500, 3), 4_000);
        assert_eq!(retry_delay_ms(500, 20), MAX_RETRY_DELAY_MS);
        assert_eq!(retry_delay_ms(500, 70), MAX_RETRY_DELAY_MS);
        assert_eq!(retry_delay_ms(0, 70), 0);
    }

    #[tokio::test]
    async fn many_retries_do_not_overflow() {
        let mut backend = FakeBackend::new();
        for _ in 0..70 {
            backend = backend.with_status(503, &[]);
        }
        let backend = backend.with_json(200, json!({}));
        let config = ArmConfig {
            max_retries: 70,
            retry_base_delay_ms: 0,
            ..Default::default()
        };
        let client = AzureClient::with_backend(config, Arc::new(backend.clone()));
        client.set_token(token()).await;
        let options = RequestOptions::new(HttpMethod::Get, "/x", &[200]);

        let resp = client.execute("v", &options).await.unwrap();
        assert_eq!(resp.status, 200);
        assert_eq!(backend.requests().len(), 71);
    }

    #[tokio::test]
    async fn acquires_token_from_credentials() {
        let backend = FakeBackend::new()
            .with_json(200, json!({"access_token": "fresh", "token_type": "Bearer", "expires_in": 3600}))
            .with_json(200, json!({}))
            .with_json(200, json!({}));
        let client = AzureClient::with_backend(fast_config(), Arc::new(backend.clone()))
            .with_credentials(AzureCredentials {
                client_id: "c".into(),
                client_secret: "s".into(),
                tenant_id: "t".into(),
                subscription_id: "sub".into(),
                authority_host: None,
            });
        let options = RequestOptions::new(HttpMethod::Get, "/x", &[200]);
        client.execute("v", &options).await.unwrap();
        client.execute("v", &options).await.unwrap();

        // one token request, then two API calls reusing the cached token
        let sent = backend.requests();
        assert_eq!(sent.len(), 3);
        assert!(sent[0].url.contains("/oauth2/v2.0/token"));
        assert_eq!(sent[2].header_value("Authorization"), Some("Bearer fresh"));
        assert_eq!(client.subscription_id(), Some("sub"));
    }

    #[tokio::test]
    async fn no_token_no_credentials() {
        let backend = FakeBackend::new();
        let client = AzureClient::with_backend(fast_config(), Arc::new(backend.clone()));
        let options = RequestOptions::new(HttpMethod::Get, "/x", &[200]);
        let err = client.execute("v", &options).await.unwrap_err();
        assert_eq!(err.kind, AzureErrorKind::NotAuthenticated);
        assert!(backend.requests().is_empty());
    }

    #[tokio::test]
    async fn clone_shares_token_cache() {
        let c = AzureClient::new(ArmConfig::default());
        let c2 = c.clone();
        c.set_token(token()).await;
        assert!(c2.is_authenticated().await);
    }
}
