//! Installed-application OAuth2 flow used by the `login` command.
//!
//! A loopback HTTP receiver catches the authorization code, which is then
//! exchanged for a refresh token and stored as `token.json`.
//!
//! # Flow
//!
//! 1. Bind a receiver on `127.0.0.1` with an OS-assigned port
//! 2. Print the consent URL (with `state` and a PKCE S256 challenge)
//! 3. Wait for `/oauth2callback?code=...&state=...`
//! 4. Exchange the code at the token endpoint
//! 5. Write `client_id`, `client_secret` and `refresh_token` to `token.json`

use std::path::PathBuf;
use std::sync::{Arc, Mutex};

use axum::{
    Router,
    extract::{Query, State},
    response::Html,
    routing::get,
};
use base64::Engine;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use serde::Deserialize;
use sha2::{Digest, Sha256};
use tokio::sync::oneshot;
use tower_http::trace::TraceLayer;

use super::credentials::{self, AuthorizedUser, ClientSecrets};
use super::{CLIENT_SECRETS_FILE, CONTENT_SCOPE, TOKEN_FILE};
use crate::config::Config;
use crate::error::{AppError, Result};

/// Path the consent screen redirects back to.
pub const CALLBACK_PATH: &str = "/oauth2callback";

/// PKCE verifier and its S256 challenge (RFC 7636).
#[derive(Debug, Clone)]
pub struct Pkce {
    pub verifier: String,
    pub challenge: String,
}

impl Pkce {
    /// Generate a fresh verifier from 32 random bytes.
    pub fn generate() -> Self {
        let bytes: [u8; 32] = rand::random();
        Self::from_verifier(URL_SAFE_NO_PAD.encode(bytes))
    }

    pub fn from_verifier(verifier: String) -> Self {
        let challenge = URL_SAFE_NO_PAD.encode(Sha256::digest(verifier.as_bytes()));
        Self {
            verifier,
            challenge,
        }
    }
}

/// Random value tying the callback to this login attempt.
fn generate_state() -> String {
    let bytes: [u8; 16] = rand::random();
    hex::encode(bytes)
}

/// Build the consent URL the user opens in a browser.
pub fn authorization_url(
    auth_uri: &str,
    client_id: &str,
    redirect_uri: &str,
    state: &str,
    pkce: &Pkce,
) -> Result<url::Url> {
    Ok(url::Url::parse_with_params(
        auth_uri,
        &[
            ("client_id", client_id),
            ("redirect_uri", redirect_uri),
            ("response_type", "code"),
            ("scope", CONTENT_SCOPE),
            ("state", state),
            ("code_challenge", pkce.challenge.as_str()),
            ("code_challenge_method", "S256"),
            ("access_type", "offline"),
            ("prompt", "consent"),
        ],
    )?)
}

#[derive(Debug, Deserialize)]
struct CallbackParams {
    code: Option<String>,
    state: Option<String>,
    error: Option<String>,
}

/// Shared with the callback handler. The sender is taken by the first callback.
#[derive(Clone)]
struct CallbackState {
    expected_state: String,
    sender: Arc<Mutex<Option<oneshot::Sender<Result<String>>>>>,
}

/// Router receiving the OAuth2 redirect.
///
/// The receiver yields the authorization code, or an `Auth` error if the
/// consent was denied or the `state` did not match.
pub fn callback_router(expected_state: String) -> (Router, oneshot::Receiver<Result<String>>) {
    let (tx, rx) = oneshot::channel();
    let state = CallbackState {
        expected_state,
        sender: Arc::new(Mutex::new(Some(tx))),
    };
    let router = Router::new()
        .route(CALLBACK_PATH, get(handle_callback))
        .layer(TraceLayer::new_for_http())
        .with_state(state);
    (router, rx)
}

async fn handle_callback(
    State(state): State<CallbackState>,
    Query(params): Query<CallbackParams>,
) -> Html<&'static str> {
    let outcome = match params {
        CallbackParams {
            error: Some(error), ..
        } => Err(AppError::Auth(format!("authorization denied: {}", error))),
        CallbackParams {
            state: Some(received),
            ..
        } if received != state.expected_state => Err(AppError::Auth(
            "state mismatch in OAuth2 callback".to_string(),
        )),
        CallbackParams {
            code: Some(code),
            state: Some(_),
            ..
        } => Ok(code),
        _ => Err(AppError::Auth(
            "OAuth2 callback is missing code or state".to_string(),
        )),
    };

    let page = if outcome.is_ok() {
        "<h1>Authorization complete</h1><p>You may close this window.</p>"
    } else {
        "<h1>Authorization failed</h1><p>Check the terminal for details.</p>"
    };

    // Only the first callback is delivered
    let sender = match state.sender.lock() {
        Ok(mut guard) => guard.take(),
        Err(_) => None,
    };
    if let Some(sender) = sender {
        let _ = sender.send(outcome);
    }

    Html(page)
}

/// Run the installed-application flow and store `token.json`.
///
/// # Errors
///
/// - `Auth` if `client-secrets.json` is missing, consent is denied or the
///   token endpoint does not issue a refresh token
/// - `Io` if the receiver cannot bind or `token.json` cannot be written
pub async fn login(config: &Config, http: &reqwest::Client) -> Result<PathBuf> {
    let secrets_path = config.path(CLIENT_SECRETS_FILE);
    if !secrets_path.exists() {
        return Err(AppError::Auth(format!(
            "OAuth2 client secrets not found at {}",
            secrets_path.display()
        )));
    }
    let secrets: ClientSecrets = credentials::read_json(&secrets_path)?;
    let client = secrets.installed;

    // Bind first so the redirect URI carries the real port
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await?;
    let redirect_uri = format!("http://{}{}", listener.local_addr()?, CALLBACK_PATH);

    let state = generate_state();
    let pkce = Pkce::generate();
    let url = authorization_url(
        &config.auth_uri,
        &client.client_id,
        &redirect_uri,
        &state,
        &pkce,
    )?;

    println!("Visit the following URL to authorize the samples:\n\n{}\n", url);
    tracing::info!("Waiting for OAuth2 callback on {}", redirect_uri);

    let (router, receiver) = callback_router(state);
    let (shutdown_tx, shutdown_rx) = oneshot::channel::<()>();
    let server = tokio::spawn(async move {
        axum::serve(listener, router)
            .with_graceful_shutdown(async move {
                let _ = shutdown_rx.await;
            })
            .await
    });

    let outcome = receiver
        .await
        .map_err(|_| AppError::Auth("OAuth2 receiver stopped before a callback".to_string()));
    let _ = shutdown_tx.send(());
    let _ = server.await;
    let code = outcome??;

    let response = super::exchange(
        http,
        &config.token_uri,
        &[
            ("grant_type", "authorization_code"),
            ("code", code.as_str()),
            ("redirect_uri", redirect_uri.as_str()),
            ("client_id", client.client_id.as_str()),
            ("client_secret", client.client_secret.as_str()),
            ("code_verifier", pkce.verifier.as_str()),
        ],
    )
    .await?;

    let refresh_token = response.refresh_token.ok_or_else(|| {
        AppError::Auth("token endpoint did not return a refresh token".to_string())
    })?;

    let stored = AuthorizedUser {
        client_id: client.client_id,
        client_secret: client.client_secret,
        refresh_token,
    };
    let token_path = config.path(TOKEN_FILE);
    store_token(&token_path, &stored)?;
    tracing::info!("Stored refresh token in {}", token_path.display());

    Ok(token_path)
}

/// Write stored user credentials in the `authorized_user` format.
pub fn store_token(path: &std::path::Path, user: &AuthorizedUser) -> Result<()> {
    let mut document = serde_json::to_value(user)?;
    if let Some(object) = document.as_object_mut() {
        object.insert("type".into(), "authorized_user".into());
    }
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(path, serde_json::to_string_pretty(&document)?)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use tower::ServiceExt;

    #[test]
    fn pkce_challenge_matches_rfc_7636_example() {
        let pkce = Pkce::from_verifier("dBjftJeZ4CVP-mB92K27uhbUJU1p1r_wW1gFWFOEjXk".into());
        assert_eq!(pkce.challenge, "E9Melhoa2OwvFWjiUc8uc8Klz3Ka4KSVUtaqKRSpyaM");
    }

    #[test]
    fn authorization_url_carries_state_and_challenge() {
        let pkce = Pkce::from_verifier("verifier".into());
        let url = authorization_url(
            "https://accounts.example/auth",
            "client",
            "http://127.0.0.1:1234/oauth2callback",
            "abc",
            &pkce,
        )
        .unwrap();
        let pairs: std::collections::HashMap<_, _> = url.query_pairs().into_owned().collect();
        assert_eq!(pairs["state"], "abc");
        assert_eq!(pairs["code_challenge_method"], "S256");
        assert_eq!(pairs["code_challenge"], pkce.challenge);
        assert_eq!(pairs["scope"], CONTENT_SCOPE);
    }

    #[tokio::test]
    async fn callback_with_matching_state_yields_code() {
        let (router, receiver) = callback_router("expected".into());
        let response = router
            .oneshot(
                Request::builder()
                    .uri("/oauth2callback?code=4%2Fabc&state=expected")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(receiver.await.unwrap().unwrap(), "4/abc");
    }

    #[tokio::test]
    async fn callback_with_wrong_state_is_rejected() {
        let (router, receiver) = callback_router("expected".into());
        router
            .oneshot(
                Request::builder()
                    .uri("/oauth2callback?code=abc&state=forged")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        let err = receiver.await.unwrap().unwrap_err();
        assert!(err.to_string().contains("state mismatch"));
    }

    #[tokio::test]
    async fn denied_consent_is_reported() {
        let (router, receiver) = callback_router("expected".into());
        router
            .oneshot(
                Request::builder()
                    .uri("/oauth2callback?error=access_denied&state=expected")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        let err = receiver.await.unwrap().unwrap_err();
        assert!(err.to_string().contains("access_denied"));
    }

    #[test]
    fn stored_token_is_readable_as_credential_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(TOKEN_FILE);
        let user = AuthorizedUser {
            client_id: "id".into(),
            client_secret: "secret".into(),
            refresh_token: "refresh".into(),
        };
        store_token(&path, &user).unwrap();
        let parsed: credentials::CredentialFile = credentials::read_json(&path).unwrap();
        assert!(matches!(parsed, credentials::CredentialFile::AuthorizedUser(_)));
    }
}
