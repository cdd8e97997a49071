//! HTTP backend abstraction.
//!
//! [`crate::AzureClient`] talks to the management plane through the
//! [`HttpBackend`] trait so tests can swap reqwest for canned responses.

use std::fmt;
use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::de::DeserializeOwned;

use crate::config::ArmConfig;
use crate::error::{AzureError, AzureErrorKind, AzureResult};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HttpMethod {
    Get,
    Put,
    Post,
    Patch,
    Delete,
}

impl HttpMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Put => "PUT",
            Self::Post => "POST",
            Self::Patch => "PATCH",
            Self::Delete => "DELETE",
        }
    }
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A fully-resolved request: absolute URL, headers and an optional body.
#[derive(Debug, Clone, PartialEq)]
pub struct HttpRequest {
    pub method: HttpMethod,
    pub url: String,
    pub headers: Vec<(String, String)>,
    pub body: Option<Vec<u8>>,
}

impl HttpRequest {
    pub fn new(method: HttpMethod, url: impl Into<String>) -> Self {
        Self {
            method,
            url: url.into(),
            headers: Vec::new(),
            body: None,
        }
    }

    pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.push((name.into(), value.into()));
        self
    }

    pub fn body(mut self, content_type: &str, body: Vec<u8>) -> Self {
        self.headers.push(("Content-Type".into(), content_type.into()));
        self.body = Some(body);
        self
    }

    pub fn header_value(&self, name: &str) -> Option<&str> {
        find_header(&self.headers, name)
    }

    /// Body decoded as JSON, for assertions in tests.
    pub fn json_body(&self) -> Option<serde_json::Value> {
        self.body
            .as_deref()
            .and_then(|b| serde_json::from_slice(b).ok())
    }
}

/// A received response with the body fully buffered.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct HttpResponse {
    pub status: u16,
    pub headers: Vec<(String, String)>,
    pub body: Vec<u8>,
}

impl HttpResponse {
    pub fn header(&self, name: &str) -> Option<&str> {
        find_header(&self.headers, name)
    }

    pub fn text(&self) -> String {
        String::from_utf8_lossy(&self.body).into_owned()
    }

    pub fn is_empty(&self) -> bool {
        self.body.iter().all(u8::is_ascii_whitespace)
    }

    pub fn json<T: DeserializeOwned>(&self) -> AzureResult<T> {
        serde_json::from_slice(&self.body).map_err(|e| AzureError::parse("JSON parse", e))
    }

    /// `None` for an empty body (204s, bare 202s), otherwise the decoded model.
    pub fn json_opt<T: DeserializeOwned>(&self) -> AzureResult<Option<T>> {
        if self.is_empty() {
            return Ok(None);
        }
        self.json().map(Some)
    }
}

fn find_header<'a>(headers: &'a [(String, String)], name: &str) -> Option<&'a str> {
    headers
        .iter()
        .find(|(k, _)| k.eq_ignore_ascii_case(name))
        .map(|(_, v)| v.as_str())
}

/// Transport used by [`crate::AzureClient`].
#[async_trait]
pub trait HttpBackend: Send + Sync {
    /// Send a request and buffer the response. Non-2xx statuses are not
    /// errors at this layer; only transport failures are.
    async fn send(&self, request: HttpRequest) -> AzureResult<HttpResponse>;
}

/// Production backend built on reqwest.
pub struct ReqwestBackend {
    http: Client,
}

impl ReqwestBackend {
    pub fn new(config: &ArmConfig) -> Self {
        Self {
            http: Client::builder()
                .timeout(config.request_timeout())
                .connect_timeout(Duration::from_secs(10))
                .build()
                .unwrap_or_default(),
        }
    }

    fn method(method: HttpMethod) -> reqwest::Method {
        match method {
            HttpMethod::Get => reqwest::Method::GET,
            HttpMethod::Put => reqwest::Method::PUT,
            HttpMethod::Post => reqwest::Method::POST,
            HttpMethod::Patch => reqwest::Method::PATCH,
            HttpMethod::Delete => reqwest::Method::DELETE,
        }
    }
}

#[async_trait]
impl HttpBackend for ReqwestBackend {
    async fn send(&self, request: HttpRequest) -> AzureResult<HttpResponse> {
        let mut builder = self
            .http
            .request(Self::method(request.method), &request.url);
        for (name, value) in &request.headers {
            builder = builder.header(name.as_str(), value.as_str());
        }
        if let Some(body) = request.body {
            builder = builder.body(body);
        }

        let resp = builder.send().await.map_err(|e| {
            AzureError::new(
                AzureErrorKind::Network,
                format!("{} {}: {e}", request.method, request.url),
            )
        })?;

        let status = resp.status().as_u16();
        let headers = resp
            .headers()
            .iter()
            .filter_map(|(k, v)| v.to_str().ok().map(|v| (k.as_str().to_string(), v.to_string())))
            .collect();
        let body = resp
            .bytes()
            .await
            .map_err(|e| AzureError::new(AzureErrorKind::Network, format!("reading body: {e}")))?
            .to_vec();

        Ok(HttpResponse {
            status,
            headers,
            body,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn header_lookup_is_case_insensitive() {
        let resp = HttpResponse {
            status: 202,
            headers: vec![("azure-asyncoperation".into(), "https://x/op".into())],
            body: Vec::new(),
        };
        assert_eq!(resp.header("Azure-AsyncOperation"), Some("https://x/op"));
        assert_eq!(resp.header("Location"), None);
    }

    #[test]
    fn empty_body_is_no_model() {
        let resp = HttpResponse {
            status: 204,
            headers: Vec::new(),
            body: b"  \n".to_vec(),
        };
        let model: Option<serde_json::Value> = resp.json_opt().unwrap();
        assert!(model.is_none());
    }

    #[test]
    fn invalid_json_is_parse_error() {
        let resp = HttpResponse {
            status: 200,
            headers: Vec::new(),
            body: b"{not json".to_vec(),
        };
        let err = resp.json::<serde_json::Value>().unwrap_err();
        assert_eq!(err.kind, AzureErrorKind::Parse);
    }

    #[test]
    fn request_builder_sets_content_type() {
        let req = HttpRequest::new(HttpMethod::Put, "https://x")
            .body("application/json", br#"{"a":1}"#.to_vec());
        assert_eq!(req.header_value("content-type"), Some("application/json"));
        assert_eq!(req.json_body().unwrap()["a"], 1);
    }

    #[test]
    fn method_display() {
        assert_eq!(HttpMethod::Patch.to_string(), "PATCH");
    }
}
