//! Fake HTTP backend for tests.
//!
//! Responses are served in the order they were queued; every request is
//! recorded so tests can assert on method, URL, headers and body.

use std::collections::VecDeque;
use std::sync::{Arc, Mutex, MutexGuard};

use async_trait::async_trait;

use crate::error::AzureResult;
use crate::http::{HttpBackend, HttpRequest, HttpResponse};

#[derive(Clone, Default)]
pub struct FakeBackend {
    responses: Arc<Mutex<VecDeque<HttpResponse>>>,
    requests: Arc<Mutex<Vec<HttpRequest>>>,
}

fn lock<T>(m: &Mutex<T>) -> MutexGuard<'_, T> {
    m.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}

impl FakeBackend {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a raw response.
    pub fn with_response(self, response: HttpResponse) -> Self {
        lock(&self.responses).push_back(response);
        self
    }

    /// Queue a JSON response.
    pub fn with_json(self, status: u16, body: serde_json::Value) -> Self {
        self.with_json_headers(status, &[], body)
    }

    /// Queue a JSON response carrying extra headers.
    pub fn with_json_headers(
        self,
        status: u16,
        headers: &[(&str, &str)],
        body: serde_json::Value,
    ) -> Self {
        self.with_response(HttpResponse {
            status,
            headers: headers
                .iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect(),
            body: serde_json::to_vec(&body).unwrap_or_default(),
        })
    }

    /// Queue a response with no body.
    pub fn with_status(self, status: u16, headers: &[(&str, &str)]) -> Self {
        self.with_response(HttpResponse {
            status,
            headers: headers
                .iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect(),
            body: Vec::new(),
        })
    }

    /// Every request received so far, oldest first.
    pub fn requests(&self) -> Vec<HttpRequest> {
        lock(&self.requests).clone()
    }

    pub fn last_request(&self) -> Option<HttpRequest> {
        lock(&self.requests).last().cloned()
    }

    pub fn remaining(&self) -> usize {
        lock(&self.responses).len()
    }
}

#[async_trait]
impl HttpBackend for FakeBackend {
    async fn send(&self, request: HttpRequest) -> AzureResult<HttpResponse> {
        lock(&self.requests).push(request);
        let next = lock(&self.responses).pop_front();
        Ok(next.unwrap_or_else(|| HttpResponse {
            status: 404,
            headers: Vec::new(),
            body: br#"{"error":{"code":"NoCannedResponse","message":"fake backend has no response queued"}}"#
                .to_vec(),
        }))
    }
}
