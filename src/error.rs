//! Error types shared by the client, the credential loaders and the samples.
//!
//! Every library function returns [`Result<T>`]. The binary prints the error
//! and exits non-zero; nothing in the crate retries.

use serde::Deserialize;

/// Application-wide error type.
///
/// # Error Categories
///
/// - **Transport Errors**: the HTTP request could not be sent or read
/// - **API Errors**: the Merchant API answered with a non-2xx status
/// - **Credential Errors**: no usable credentials, or the token exchange failed
/// - **Configuration Errors**: missing or malformed config files and env vars
/// - **Sample Errors**: missing parameters, invalid input, failed batches
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// Request could not be sent or the response body could not be read.
    ///
    /// Wraps any `reqwest::Error` (connection refused, timeout, TLS).
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The API returned an error envelope.
    ///
    /// `status` is the HTTP status, `code` the canonical gRPC status name
    /// (e.g. `NOT_FOUND`, `PERMISSION_DENIED`).
    #[error("API error {status} {code}: {message}")]
    Api {
        status: u16,
        code: String,
        message: String,
    },

    /// Credentials are missing or the OAuth2 exchange was rejected.
    #[error("Authentication error: {0}")]
    Auth(String),

    /// Configuration could not be loaded.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Reading or writing a local file failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A JSON document could not be encoded or decoded.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// A request could not be built from the given input.
    ///
    /// The String contains details about what was invalid.
    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    /// A sample was run without a parameter it needs.
    #[error("Missing parameter '{0}' (pass it with -p {0}=<value>)")]
    MissingParam(String),

    /// Some requests of a concurrent batch failed.
    #[error("{failed} of {total} requests failed")]
    Batch { failed: usize, total: usize },
}

/// Shorthand used across the crate.
pub type Result<T> = std::result::Result<T, AppError>;

impl AppError {
    /// True when the API rejected the call for lack of access.
    pub fn is_permission_denied(&self) -> bool {
        matches!(self, AppError::Api { status: 403, .. })
            || matches!(self, AppError::Api { code, .. } if code == "PERMISSION_DENIED")
    }

    /// Build an [`AppError::Api`] from a non-2xx response body.
    ///
    /// Google APIs answer with `{"error": {"code": 404, "message": "...", "status": "NOT_FOUND"}}`.
    /// Bodies that do not match keep the raw text as the message.
    pub fn from_api_response(status: u16, body: &str) -> Self {
        match serde_json::from_str::<ErrorEnvelope>(body) {
            Ok(envelope) => AppError::Api {
                status,
                code: envelope.error.status.unwrap_or_else(|| "UNKNOWN".to_string()),
                message: envelope.error.message.unwrap_or_default(),
            },
            Err(_) => AppError::Api {
                status,
                code: "UNKNOWN".to_string(),
                message: body.trim().to_string(),
            },
        }
    }
}

impl From<josekit::JoseError> for AppError {
    fn from(err: josekit::JoseError) -> Self {
        AppError::Auth(format!("failed to sign assertion: {}", err))
    }
}

impl From<envy::Error> for AppError {
    fn from(err: envy::Error) -> Self {
        AppError::Config(err.to_string())
    }
}

impl From<url::ParseError> for AppError {
    fn from(err: url::ParseError) -> Self {
        AppError::Config(format!("invalid URL: {}", err))
    }
}

#[derive(Debug, Deserialize)]
struct ErrorEnvelope {
    error: ErrorBody,
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    message: Option<String>,
    status: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_google_error_envelope() {
        let body = r#"{"error":{"code":404,"message":"Product not found","status":"NOT_FOUND"}}"#;
        let err = AppError::from_api_response(404, body);
        assert_eq!(
            err.to_string(),
            "API error 404 NOT_FOUND: Product not found"
        );
        assert!(!err.is_permission_denied());
    }

    #[test]
    fn keeps_raw_text_when_body_is_not_an_envelope() {
        let err = AppError::from_api_response(502, "Bad Gateway\n");
        match err {
            AppError::Api { code, message, .. } => {
                assert_eq!(code, "UNKNOWN");
                assert_eq!(message, "Bad Gateway");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn permission_denied_is_detected_by_status_name() {
        let body = r#"{"error":{"code":403,"message":"denied","status":"PERMISSION_DENIED"}}"#;
        assert!(AppError::from_api_response(403, body).is_permission_denied());
    }

    #[test]
    fn missing_param_names_the_flag() {
        let err = AppError::MissingParam("productId".into());
        assert_eq!(
            err.to_string(),
            "Missing parameter 'productId' (pass it with -p productId=<value>)"
        );
    }
}
