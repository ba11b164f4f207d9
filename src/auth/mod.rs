//! OAuth2 credentials for the Merchant API.
//!
//! Credentials are looked up in this order:
//!
//! 1. A pre-issued access token (`MERCHANT_ACCESS_TOKEN`)
//! 2. The file named by `GOOGLE_APPLICATION_CREDENTIALS`
//! 3. `service-account.json` in the configuration directory
//! 4. `token.json` in the configuration directory (written by `login`)
//!
//! Access tokens are cached and refreshed shortly before they expire.

pub mod credentials;
pub mod service_account;
pub mod user_flow;

use std::path::{Path, PathBuf};
use std::time::SystemTime;

use chrono::{DateTime, Duration, Utc};
use tokio::sync::Mutex;

use crate::config::Config;
use crate::error::{AppError, Result};
use credentials::{AuthorizedUser, CredentialFile, ServiceAccountKey, TokenError, TokenResponse};

/// OAuth2 scope of the Merchant API.
pub const CONTENT_SCOPE: &str = "https://www.googleapis.com/auth/content";

pub const SERVICE_ACCOUNT_FILE: &str = "service-account.json";
pub const TOKEN_FILE: &str = "token.json";
pub const CLIENT_SECRETS_FILE: &str = "client-secrets.json";

/// Tokens this close to expiry are refreshed before use.
const REFRESH_MARGIN_SECS: i64 = 60;

/// Where access tokens come from.
#[derive(Debug, Clone)]
pub enum CredentialSource {
    /// Bearer token used as-is, never refreshed
    StaticToken(String),
    ServiceAccount(ServiceAccountKey),
    AuthorizedUser(AuthorizedUser),
}

impl CredentialSource {
    /// Find credentials following the documented search order.
    ///
    /// `adc_path` is the value of `GOOGLE_APPLICATION_CREDENTIALS`, if set.
    ///
    /// # Errors
    ///
    /// - `Auth` telling the user to run `login` if only client secrets exist
    /// - `Auth` listing every checked path if nothing was found
    pub fn discover(config: &Config, adc_path: Option<&Path>) -> Result<Self> {
        if let Some(token) = config.access_token.as_ref().filter(|t| !t.is_empty()) {
            tracing::debug!("Using access token from MERCHANT_ACCESS_TOKEN");
            return Ok(CredentialSource::StaticToken(token.clone()));
        }

        if let Some(path) = adc_path {
            tracing::debug!("Loading credentials from {}", path.display());
            return Ok(match credentials::read_json::<CredentialFile>(path)? {
                CredentialFile::ServiceAccount(key) => CredentialSource::ServiceAccount(key),
                CredentialFile::AuthorizedUser(user) => CredentialSource::AuthorizedUser(user),
            });
        }

        let service_account = config.path(SERVICE_ACCOUNT_FILE);
        if service_account.exists() {
            tracing::debug!("Loading service account from {}", service_account.display());
            return Ok(CredentialSource::ServiceAccount(credentials::read_json(
                &service_account,
            )?));
        }

        let token = config.path(TOKEN_FILE);
        if token.exists() {
            tracing::debug!("Loading stored user credentials from {}", token.display());
            return Ok(CredentialSource::AuthorizedUser(credentials::read_json(
                &token,
            )?));
        }

        let secrets = config.path(CLIENT_SECRETS_FILE);
        if secrets.exists() {
            return Err(AppError::Auth(format!(
                "found {} but no stored token; run `merchant-samples login` first",
                secrets.display()
            )));
        }

        let checked: Vec<PathBuf> = vec![service_account, token, secrets];
        Err(AppError::Auth(format!(
            "no credentials found; set GOOGLE_APPLICATION_CREDENTIALS or create one of: {}",
            checked
                .iter()
                .map(|p| p.display().to_string())
                .collect::<Vec<_>>()
                .join(", ")
        )))
    }

    /// Short label for log lines.
    pub fn kind(&self) -> &'static str {
        match self {
            CredentialSource::StaticToken(_) => "access token",
            CredentialSource::ServiceAccount(_) => "service account",
            CredentialSource::AuthorizedUser(_) => "authorized user",
        }
    }
}

/// A bearer token and the instant it stops being valid.
#[derive(Debug, Clone)]
struct AccessToken {
    value: String,
    expires_at: Option<DateTime<Utc>>,
}

impl AccessToken {
    fn is_fresh(&self, now: DateTime<Utc>) -> bool {
        match self.expires_at {
            Some(expires_at) => expires_at - Duration::seconds(REFRESH_MARGIN_SECS) > now,
            None => true,
        }
    }
}

/// Issues bearer tokens for API requests.
///
/// Shared by reference between concurrent requests; the cache lock is held
/// across a refresh so only one token exchange runs at a time.
pub struct Authenticator {
    http: reqwest::Client,
    source: CredentialSource,
    token_uri: String,
    cached: Mutex<Option<AccessToken>>,
}

impl Authenticator {
    pub fn new(
        http: reqwest::Client,
        source: CredentialSource,
        token_uri: impl Into<String>,
    ) -> Self {
        Self {
            http,
            source,
            token_uri: token_uri.into(),
            cached: Mutex::new(None),
        }
    }

    /// Discover credentials for `config`, honouring `GOOGLE_APPLICATION_CREDENTIALS`.
    pub fn from_config(http: reqwest::Client, config: &Config) -> Result<Self> {
        let adc = std::env::var_os("GOOGLE_APPLICATION_CREDENTIALS").map(PathBuf::from);
        let source = CredentialSource::discover(config, adc.as_deref())?;
        tracing::info!("Authenticating with {}", source.kind());
        Ok(Self::new(http, source, config.token_uri.clone()))
    }

    pub fn source(&self) -> &CredentialSource {
        &self.source
    }

    /// Return a valid access token, exchanging credentials when needed.
    ///
    /// # Process
    ///
    /// 1. Return the cached token if it is valid for at least another minute
    /// 2. Otherwise build the grant for the credential kind
    /// 3. POST it to the token endpoint and cache the answer
    pub async fn access_token(&self) -> Result<String> {
        let mut cached = self.cached.lock().await;
        let now = Utc::now();

        if let Some(token) = cached.as_ref().filter(|t| t.is_fresh(now)) {
            return Ok(token.value.clone());
        }

        let token = match &self.source {
            CredentialSource::StaticToken(value) => AccessToken {
                value: value.clone(),
                expires_at: None,
            },
            CredentialSource::ServiceAccount(key) => {
                let assertion = service_account::sign_assertion(
                    key,
                    &self.token_uri,
                    CONTENT_SCOPE,
                    SystemTime::now(),
                )?;
                let response = exchange(
                    &self.http,
                    &self.token_uri,
                    &[
                        ("grant_type", "urn:ietf:params:oauth:grant-type:jwt-bearer"),
                        ("assertion", assertion.as_str()),
                    ],
                )
                .await?;
                into_access_token(response, now)
            }
            CredentialSource::AuthorizedUser(user) => {
                let response = exchange(
                    &self.http,
                    &self.token_uri,
                    &[
                        ("grant_type", "refresh_token"),
                        ("client_id", user.client_id.as_str()),
                        ("client_secret", user.client_secret.as_str()),
                        ("refresh_token", user.refresh_token.as_str()),
                    ],
                )
                .await?;
                into_access_token(response, now)
            }
        };

        tracing::debug!("Obtained new access token ({})", self.source.kind());
        let value = token.value.clone();
        *cached = Some(token);
        Ok(value)
    }
}

fn into_access_token(response: TokenResponse, now: DateTime<Utc>) -> AccessToken {
    AccessToken {
        value: response.access_token,
        expires_at: response.expires_in.map(|secs| now + Duration::seconds(secs)),
    }
}

/// POST a form-encoded grant to the token endpoint.
///
/// # Errors
///
/// Returns `Auth` with the endpoint's `error` / `error_description` on rejection.
pub(crate) async fn exchange(
    http: &reqwest::Client,
    token_uri: &str,
    form: &[(&str, &str)],
) -> Result<TokenResponse> {
    let response = http.post(token_uri).form(form).send().await?;
    let status = response.status();
    let body = response.text().await?;

    if !status.is_success() {
        let reason = match serde_json::from_str::<TokenError>(&body) {
            Ok(err) => match err.error_description {
                Some(description) => format!("{}: {}", err.error, description),
                None => err.error,
            },
            Err(_) => body.trim().to_string(),
        };
        return Err(AppError::Auth(format!(
            "token endpoint returned {}: {}",
            status.as_u16(),
            reason
        )));
    }

    Ok(serde_json::from_str(&body)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(dir: &Path) -> Config {
        Config::with_endpoint("http://localhost", dir)
    }

    #[test]
    fn access_token_from_env_wins() {
        let dir = tempfile::tempdir().unwrap();
        let mut config = config(dir.path());
        config.access_token = Some("ya29.token".into());
        let source = CredentialSource::discover(&config, None).unwrap();
        assert!(matches!(source, CredentialSource::StaticToken(t) if t == "ya29.token"));
    }

    #[test]
    fn stored_token_is_used_when_no_service_account() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(
            dir.path().join(TOKEN_FILE),
            r#"{"client_id":"id","client_secret":"secret","refresh_token":"r"}"#,
        )
        .unwrap();
        let source = CredentialSource::discover(&config(dir.path()), None).unwrap();
        assert_eq!(source.kind(), "authorized user");
    }

    #[test]
    fn client_secrets_alone_asks_for_login() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join(CLIENT_SECRETS_FILE), "{}").unwrap();
        let err = CredentialSource::discover(&config(dir.path()), None).unwrap_err();
        assert!(err.to_string().contains("login"));
    }

    #[test]
    fn nothing_found_lists_checked_paths() {
        let dir = tempfile::tempdir().unwrap();
        let err = CredentialSource::discover(&config(dir.path()), None).unwrap_err();
        let message = err.to_string();
        assert!(message.contains(SERVICE_ACCOUNT_FILE));
        assert!(message.contains(TOKEN_FILE));
    }

    #[test]
    fn tokens_near_expiry_are_not_fresh() {
        let now = Utc::now();
        let token = AccessToken {
            value: "t".into(),
            expires_at: Some(now + Duration::seconds(30)),
        };
        assert!(!token.is_fresh(now));
        let token = AccessToken {
            value: "t".into(),
            expires_at: None,
        };
        assert!(token.is_fresh(now));
    }
}
