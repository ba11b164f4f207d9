//! Credential file formats.
//!
//! These are the JSON documents Google tooling writes: service account keys,
//! authorized-user tokens and OAuth2 client secrets.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{AppError, Result};

/// Service account key downloaded from the Cloud console.
#[derive(Debug, Clone, Deserialize)]
pub struct ServiceAccountKey {
    pub client_email: String,

    /// PKCS#8 PEM private key
    pub private_key: String,

    /// Sent as the `kid` header of the signed assertion
    #[serde(default)]
    pub private_key_id: Option<String>,
}

/// Stored user credentials, written by the `login` command.
///
/// # JSON Example
///
/// ```json
/// {
///   "type": "authorized_user",
///   "client_id": "123.apps.googleusercontent.com",
///   "client_secret": "secret",
///   "refresh_token": "1//0g..."
/// }
/// ```
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct AuthorizedUser {
    pub client_id: String,
    pub client_secret: String,
    pub refresh_token: String,
}

/// Credential file referenced by `GOOGLE_APPLICATION_CREDENTIALS`.
#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum CredentialFile {
    ServiceAccount(ServiceAccountKey),
    AuthorizedUser(AuthorizedUser),
}

/// OAuth2 client secrets for an installed (or web) application.
#[derive(Debug, Clone, Deserialize)]
pub struct ClientSecrets {
    #[serde(alias = "web")]
    pub installed: InstalledApp,
}

#[derive(Debug, Clone, Deserialize)]
pub struct InstalledApp {
    pub client_id: String,
    pub client_secret: String,
}

/// Successful answer of the OAuth2 token endpoint.
#[derive(Debug, Clone, Deserialize)]
pub struct TokenResponse {
    pub access_token: String,

    /// Lifetime in seconds; Google always sends it, some mocks do not
    #[serde(default)]
    pub expires_in: Option<i64>,

    #[serde(default)]
    pub refresh_token: Option<String>,
}

/// Error answer of the OAuth2 token endpoint (RFC 6749 §5.2).
#[derive(Debug, Deserialize)]
pub(crate) struct TokenError {
    pub error: String,
    #[serde(default)]
    pub error_description: Option<String>,
}

/// Read a JSON credential file, naming the file in any error.
pub(crate) fn read_json<T: for<'de> Deserialize<'de>>(path: &Path) -> Result<T> {
    let contents = std::fs::read_to_string(path).map_err(|e| {
        AppError::Auth(format!("cannot read {}: {}", path.display(), e))
    })?;
    serde_json::from_str(&contents)
        .map_err(|e| AppError::Auth(format!("malformed credentials in {}: {}", path.display(), e)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn credential_file_is_selected_by_type() {
        let json = r#"{
            "type": "authorized_user",
            "client_id": "id",
            "client_secret": "secret",
            "refresh_token": "refresh"
        }"#;
        match serde_json::from_str::<CredentialFile>(json).unwrap() {
            CredentialFile::AuthorizedUser(user) => assert_eq!(user.refresh_token, "refresh"),
            other => panic!("unexpected credentials: {other:?}"),
        }
    }

    #[test]
    fn web_client_secrets_are_accepted() {
        let json = r#"{"web": {"client_id": "id", "client_secret": "secret"}}"#;
        let secrets: ClientSecrets = serde_json::from_str(json).unwrap();
        assert_eq!(secrets.installed.client_id, "id");
    }

    #[test]
    fn token_json_missing_refresh_token_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("token.json");
        std::fs::write(&path, r#"{"client_id": "id", "client_secret": "secret"}"#).unwrap();
        let err = read_json::<AuthorizedUser>(&path).unwrap_err();
        assert!(err.to_string().contains("token.json"));
    }
}
