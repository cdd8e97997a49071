//! Error type shared by every ARM operation.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Categorised error kinds for ARM operations.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum AzureErrorKind {
    Auth,
    NotFound,
    Conflict,
    Forbidden,
    RateLimit,
    BadRequest,
    ServerError,
    UnexpectedStatus,
    Network,
    Parse,
    Validation,
    NotAuthenticated,
    OperationFailed,
    PollTimeout,
}

impl fmt::Display for AzureErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Auth => write!(f, "Authentication error"),
            Self::NotFound => write!(f, "Resource not found"),
            Self::Conflict => write!(f, "Resource conflict"),
            Self::Forbidden => write!(f, "Forbidden"),
            Self::RateLimit => write!(f, "Rate limit exceeded"),
            Self::BadRequest => write!(f, "Bad request"),
            Self::ServerError => write!(f, "Server error"),
            Self::UnexpectedStatus => write!(f, "Unexpected status code"),
            Self::Network => write!(f, "Network error"),
            Self::Parse => write!(f, "Parse error"),
            Self::Validation => write!(f, "Validation error"),
            Self::NotAuthenticated => write!(f, "Not authenticated"),
            Self::OperationFailed => write!(f, "Long-running operation failed"),
            Self::PollTimeout => write!(f, "Timed out polling long-running operation"),
        }
    }
}

/// Main error type for ARM operations.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AzureError {
    pub kind: AzureErrorKind,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status_code: Option<u16>,
    /// `error.code` from the ARM error envelope, when the body carried one.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error_code: Option<String>,
}

/// ARM error envelope: `{"error": {"code": "...", "message": "..."}}`.
#[derive(Debug, Deserialize)]
struct ErrorEnvelope {
    error: ErrorDetail,
}

#[derive(Debug, Deserialize)]
struct ErrorDetail {
    #[serde(default)]
    code: Option<String>,
    #[serde(default)]
    message: Option<String>,
}

impl AzureError {
    pub fn new(kind: AzureErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
            status_code: None,
            error_code: None,
        }
    }

    pub fn with_status(kind: AzureErrorKind, message: impl Into<String>, status: u16) -> Self {
        Self {
            kind,
            message: message.into(),
            status_code: Some(status),
            error_code: None,
        }
    }

    /// Classify a failed response, pulling `code`/`message` out of the ARM
    /// error envelope when present and falling back to the raw body.
    pub fn from_status(status: u16, body: &str) -> Self {
        let kind = match status {
            400 => AzureErrorKind::BadRequest,
            401 => AzureErrorKind::Auth,
            403 => AzureErrorKind::Forbidden,
            404 => AzureErrorKind::NotFound,
            409 => AzureErrorKind::Conflict,
            429 => AzureErrorKind::RateLimit,
            500..=599 => AzureErrorKind::ServerError,
            _ => AzureErrorKind::UnexpectedStatus,
        };

        match serde_json::from_str::<ErrorEnvelope>(body) {
            Ok(envelope) => {
                let code = envelope.error.code;
                let message = match (&code, envelope.error.message) {
                    (Some(c), Some(m)) => format!("{c}: {m}"),
                    (None, Some(m)) => m,
                    (Some(c), None) => c.clone(),
                    (None, None) => body.to_string(),
                };
                Self {
                    kind,
                    message,
                    status_code: Some(status),
                    error_code: code,
                }
            }
            Err(_) => Self::with_status(kind, body.to_string(), status),
        }
    }

    /// The response status was not one the operation accepts.
    pub fn unexpected_status(status: u16, expected: &[u16], body: &str) -> Self {
        let mut err = Self::from_status(status, body);
        if err.kind == AzureErrorKind::UnexpectedStatus {
            err.message = format!("expected one of {expected:?}, got {status}: {}", err.message);
        }
        err
    }

    pub fn not_authenticated() -> Self {
        Self::new(
            AzureErrorKind::NotAuthenticated,
            "no bearer token available and no credentials configured",
        )
    }

    pub fn parse(context: &str, err: impl fmt::Display) -> Self {
        Self::new(AzureErrorKind::Parse, format!("{context}: {err}"))
    }
}

impl fmt::Display for AzureError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.status_code {
            Some(status) => write!(f, "[{}] ({}) {}", self.kind, status, self.message),
            None => write!(f, "[{}] {}", self.kind, self.message),
        }
    }
}

impl std::error::Error for AzureError {}

impl From<AzureError> for String {
    fn from(e: AzureError) -> String {
        e.to_string()
    }
}

pub type AzureResult<T> = Result<T, AzureError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display() {
        let e = AzureError::new(AzureErrorKind::Network, "connection reset");
        assert_eq!(e.to_string(), "[Network error] connection reset");
    }

    #[test]
    fn status_mapping() {
        assert_eq!(AzureError::from_status(400, "").kind, AzureErrorKind::BadRequest);
        assert_eq!(AzureError::from_status(401, "").kind, AzureErrorKind::Auth);
        assert_eq!(AzureError::from_status(403, "").kind, AzureErrorKind::Forbidden);
        assert_eq!(AzureError::from_status(404, "").kind, AzureErrorKind::NotFound);
        assert_eq!(AzureError::from_status(409, "").kind, AzureErrorKind::Conflict);
        assert_eq!(AzureError::from_status(429, "").kind, AzureErrorKind::RateLimit);
        assert_eq!(AzureError::from_status(503, "").kind, AzureErrorKind::ServerError);
        assert_eq!(AzureError::from_status(302, "").kind, AzureErrorKind::UnexpectedStatus);
    }

    #[test]
    fn arm_envelope_is_extracted() {
        let body = r#"{"error":{"code":"ResourceNotFound","message":"The site 'x' was not found."}}"#;
        let e = AzureError::from_status(404, body);
        assert_eq!(e.error_code.as_deref(), Some("ResourceNotFound"));
        assert_eq!(e.message, "ResourceNotFound: The site 'x' was not found.");
        assert_eq!(e.status_code, Some(404));
    }

    #[test]
    fn raw_body_kept_when_not_json() {
        let e = AzureError::from_status(500, "upstream exploded");
        assert_eq!(e.message, "upstream exploded");
        assert!(e.error_code.is_none());
    }

    #[test]
    fn unexpected_status_lists_expected_codes() {
        let e = AzureError::unexpected_status(201, &[200, 204], "");
        assert_eq!(e.kind, AzureErrorKind::UnexpectedStatus);
        assert!(e.message.contains("[200, 204]"));
    }

    #[test]
    fn error_into_string() {
        let s: String = AzureError::from_status(404, "gone").into();
        assert!(s.contains("404"));
    }
}
