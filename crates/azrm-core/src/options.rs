//! Per-operation request description and typed responses.

use serde::de::DeserializeOwned;

use crate::error::AzureResult;
use crate::http::{HttpMethod, HttpResponse};

pub const CONTENT_TYPE_JSON: &str = "application/json; charset=utf-8";

/// Optional query-string / header parameters of an operation.
///
/// Implementations only emit the parameters that are set.
pub trait OperationOptions {
    fn to_headers(&self) -> Vec<(String, String)> {
        Vec::new()
    }

    fn to_query(&self) -> Vec<(String, String)> {
        Vec::new()
    }
}

/// No optional parameters.
impl OperationOptions for () {}

/// Everything needed to turn an operation call into a request.
#[derive(Debug, Clone, PartialEq)]
pub struct RequestOptions {
    pub method: HttpMethod,
    /// Path relative to the management endpoint, e.g. a resource ID plus suffix.
    pub path: String,
    pub expected_status_codes: Vec<u16>,
    pub query: Vec<(String, String)>,
    pub headers: Vec<(String, String)>,
    pub content_type: &'static str,
}

impl RequestOptions {
    pub fn new(method: HttpMethod, path: impl Into<String>, expected: &[u16]) -> Self {
        Self {
            method,
            path: path.into(),
            expected_status_codes: expected.to_vec(),
            query: Vec::new(),
            headers: Vec::new(),
            content_type: CONTENT_TYPE_JSON,
        }
    }

    /// Merge an operation's optional parameters into the request.
    pub fn with_options(mut self, options: &impl OperationOptions) -> Self {
        self.query.extend(options.to_query());
        self.headers.extend(options.to_headers());
        self
    }

    pub fn query_value(&self, key: &str) -> Option<&str> {
        self.query
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    pub fn accepts(&self, status: u16) -> bool {
        self.expected_status_codes.contains(&status)
    }
}

/// Result of a simple operation: the status, headers and decoded body.
#[derive(Debug, Clone, PartialEq)]
pub struct OperationResponse<T> {
    pub status: u16,
    pub headers: Vec<(String, String)>,
    pub model: Option<T>,
}

impl<T: DeserializeOwned> OperationResponse<T> {
    pub fn from_http(resp: HttpResponse) -> AzureResult<Self> {
        let model = resp.json_opt()?;
        Ok(Self {
            status: resp.status,
            headers: resp.headers,
            model,
        })
    }
}

impl OperationResponse<()> {
    /// For operations whose body, if any, is not part of the contract.
    pub fn without_model(resp: HttpResponse) -> Self {
        Self {
            status: resp.status,
            headers: resp.headers,
            model: None,
        }
    }
}

/// Aggregated result of a paged list operation.
#[derive(Debug, Clone, PartialEq)]
pub struct ListOperationResponse<T> {
    /// Status of the last page fetched.
    pub status: u16,
    pub items: Vec<T>,
}
