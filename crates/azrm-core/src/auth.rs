//! Azure AD OAuth2 authentication.
//!
//! Client-credentials (service-principal) flow against the Microsoft
//! Identity Platform v2.0 token endpoint.

use chrono::{Duration, Utc};
use log::debug;

use crate::config::{AzureCredentials, AzureToken, TokenResponse, ARM_SCOPE};
use crate::error::{AzureError, AzureErrorKind, AzureResult};
use crate::http::{HttpBackend, HttpMethod, HttpRequest};

const FORM_CONTENT_TYPE: &str = "application/x-www-form-urlencoded";

/// Token endpoint URL for a given tenant.
pub fn token_url(creds: &AzureCredentials) -> String {
    format!("{}/{}/oauth2/v2.0/token", creds.authority(), creds.tenant_id)
}

/// Acquire a management-plane token using the client-credentials grant.
pub async fn acquire_token(
    backend: &dyn HttpBackend,
    creds: &AzureCredentials,
) -> AzureResult<AzureToken> {
    if !creds.is_complete() {
        return Err(AzureError::new(
            AzureErrorKind::Validation,
            "client_id, client_secret, and tenant_id are all required",
        ));
    }

    let url = token_url(creds);
    debug!("Azure token request → {}", url);

    let form = url::form_urlencoded::Serializer::new(String::new())
        .append_pair("grant_type", "client_credentials")
        .append_pair("client_id", &creds.client_id)
        .append_pair("client_secret", &creds.client_secret)
        .append_pair("scope", ARM_SCOPE)
        .finish();

    let request = HttpRequest::new(HttpMethod::Post, url).body(FORM_CONTENT_TYPE, form.into_bytes());
    let resp = backend.send(request).await?;
    if !(200..300).contains(&resp.status) {
        let mut err = AzureError::from_status(resp.status, &resp.text());
        err.kind = AzureErrorKind::Auth;
        return Err(err);
    }

    let token: TokenResponse = resp.json()?;
    Ok(token_from_response(token))
}

/// Convert the raw token endpoint response into our cached `AzureToken`.
fn token_from_response(resp: TokenResponse) -> AzureToken {
    let expires_at = resp
        .expires_in
        .map(|secs| Utc::now() + Duration::seconds(secs as i64));

    AzureToken {
        access_token: resp.access_token,
        token_type: resp.token_type,
        expires_at,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::http::HttpResponse;
    use crate::testing::FakeBackend;

    fn creds() -> AzureCredentials {
        AzureCredentials {
            client_id: "cid".into(),
            client_secret: "a secret&more".into(),
            tenant_id: "my-tenant-123".into(),
            subscription_id: "sub1".into(),
            authority_host: None,
        }
    }

    #[test]
    fn token_url_construction() {
        assert_eq!(
            token_url(&creds()),
            "https://login.microsoftonline.com/my-tenant-123/oauth2/v2.0/token"
        );
    }

    #[test]
    fn token_from_response_with_expiry() {
        let t = token_from_response(TokenResponse {
            access_token: "tok123".into(),
            token_type: "Bearer".into(),
            expires_in: Some(3600),
        });
        assert_eq!(t.access_token, "tok123");
        assert!(t.expires_at.is_some());
        assert!(!t.is_expired());
    }

    #[test]
    fn token_from_response_no_expiry() {
        let t = token_from_response(TokenResponse {
            access_token: "x".into(),
            token_type: "Bearer".into(),
            expires_in: None,
        });
        assert!(t.expires_at.is_none());
        assert!(!t.is_expired());
    }

    #[tokio::test]
    async fn acquire_token_validation() {
        let backend = FakeBackend::new();
        let err = acquire_token(&backend, &AzureCredentials::default())
            .await
            .unwrap_err();
        assert_eq!(err.kind, AzureErrorKind::Validation);
        assert!(backend.requests().is_empty());
    }

    #[tokio::test]
    async fn acquire_token_posts_form() {
        let backend = FakeBackend::new().with_json(
            200,
            serde_json::json!({"access_token": "tok", "token_type": "Bearer", "expires_in": 3599}),
        );
        let token = acquire_token(&backend, &creds()).await.unwrap();
        assert_eq!(token.access_token, "tok");

        let sent = backend.requests();
        assert_eq!(sent.len(), 1);
        assert_eq!(sent[0].method, HttpMethod::Post);
        assert_eq!(sent[0].header_value("Content-Type"), Some(FORM_CONTENT_TYPE));
        let body = String::from_utf8(sent[0].body.clone().unwrap()).unwrap();
        assert!(body.contains("grant_type=client_credentials"));
        assert!(body.contains("client_secret=a+secret%26more"));
        assert!(body.contains("scope=https%3A%2F%2Fmanagement.azure.com%2F.default"));
    }

    #[tokio::test]
    async fn acquire_token_rejected() {
        let backend = FakeBackend::new().with_response(HttpResponse {
            status: 401,
            headers: Vec::new(),
            body: br#"{"error":{"code":"invalid_client","message":"bad secret"}}"#.to_vec(),
        });
        let err = acquire_token(&backend, &creds()).await.unwrap_err();
        assert_eq!(err.kind, AzureErrorKind::Auth);
        assert_eq!(err.status_code, Some(401));
    }
}
