//! In-process mock of the Merchant API and the OAuth2 token endpoint.
//!
//! Routes answer with canned JSON; every request is recorded so tests can
//! assert on paths, query strings, headers and bodies.

#![allow(dead_code)]

use std::collections::{HashMap, VecDeque};
use std::sync::{Arc, Mutex};

use axum::Router;
use axum::body::Bytes;
use axum::extract::State;
use axum::http::{HeaderMap, Method, StatusCode, Uri};
use axum::response::{IntoResponse, Response};
use serde_json::{Value, json};

use merchant_api_samples::auth::{Authenticator, CredentialSource};
use merchant_api_samples::client::MerchantClient;
use merchant_api_samples::config::{Config, MerchantInfo};
use merchant_api_samples::samples::SampleContext;

pub const ACCOUNT_ID: &str = "123";
pub const TOKEN: &str = "test-token";

/// One request received by the mock.
#[derive(Debug, Clone)]
pub struct Recorded {
    pub method: Method,
    pub path: String,
    pub query: Option<String>,
    pub authorization: Option<String>,
    pub body: String,
}

impl Recorded {
    pub fn json(&self) -> Value {
        serde_json::from_str(&self.body).unwrap_or(Value::Null)
    }

    pub fn query_pairs(&self) -> HashMap<String, String> {
        url::form_urlencoded::parse(self.query.as_deref().unwrap_or("").as_bytes())
            .into_owned()
            .collect()
    }
}

#[derive(Default)]
struct MockState {
    /// Responses per `METHOD path`; the last one repeats once the queue is drained
    routes: Mutex<HashMap<String, VecDeque<(StatusCode, Value)>>>,
    requests: Mutex<Vec<Recorded>>,
}

/// Running mock server.
pub struct MockApi {
    pub base_url: String,
    state: Arc<MockState>,
}

impl MockApi {
    pub async fn start() -> Self {
        let state = Arc::new(MockState::default());
        let app = Router::new().fallback(handle).with_state(state.clone());

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let base_url = format!("http://{}", listener.local_addr().unwrap());
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        Self { base_url, state }
    }

    /// Answer `method path` with `body` (status 200).
    pub fn on(&self, method: Method, path: &str, body: Value) -> &Self {
        self.respond(method, path, StatusCode::OK, body)
    }

    pub fn respond(&self, method: Method, path: &str, status: StatusCode, body: Value) -> &Self {
        self.state
            .routes
            .lock()
            .unwrap()
            .entry(format!("{} {}", method, path))
            .or_default()
            .push_back((status, body));
        self
    }

    /// Answer with Google's error envelope.
    pub fn fail(
        &self,
        method: Method,
        path: &str,
        status: StatusCode,
        code: &str,
        message: &str,
    ) -> &Self {
        self.respond(
            method,
            path,
            status,
            json!({ "error": { "code": status.as_u16(), "message": message, "status": code } }),
        )
    }

    pub fn requests(&self) -> Vec<Recorded> {
        self.state.requests.lock().unwrap().clone()
    }

    pub fn requests_to(&self, path: &str) -> Vec<Recorded> {
        self.requests().into_iter().filter(|r| r.path == path).collect()
    }

    pub fn client(&self) -> MerchantClient {
        let http = reqwest::Client::new();
        let auth = Authenticator::new(
            http.clone(),
            CredentialSource::StaticToken(TOKEN.to_string()),
            format!("{}/token", self.base_url),
        );
        MerchantClient::new(http, &self.base_url, auth)
    }

    pub fn context(&self, params: &[(&str, &str)]) -> SampleContext {
        let config = Config::with_endpoint(self.base_url.clone(), std::env::temp_dir());
        let merchant = MerchantInfo {
            merchant_id: ACCOUNT_ID.to_string(),
            gmb_email: None,
        };
        let params = params
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        SampleContext::new(self.client(), config, merchant, params)
    }
}

async fn handle(
    State(state): State<Arc<MockState>>,
    method: Method,
    uri: Uri,
    headers: HeaderMap,
    body: Bytes,
) -> Response {
    let path = uri.path().to_string();
    state.requests.lock().unwrap().push(Recorded {
        method: method.clone(),
        path: path.clone(),
        query: uri.query().map(str::to_string),
        authorization: headers
            .get("authorization")
            .and_then(|v| v.to_str().ok())
            .map(str::to_string),
        body: String::from_utf8_lossy(&body).into_owned(),
    });

    let mut routes = state.routes.lock().unwrap();
    let answer = routes.get_mut(&format!("{} {}", method, path)).and_then(|queue| {
        if queue.len() > 1 {
            queue.pop_front()
        } else {
            queue.front().cloned()
        }
    });

    match answer {
        Some((status, body)) => (status, axum::Json(body)).into_response(),
        None => (
            StatusCode::NOT_FOUND,
            axum::Json(json!({
                "error": {
                    "code": 404,
                    "message": format!("no route for {} {}", method, path),
                    "status": "NOT_FOUND"
                }
            })),
        )
            .into_response(),
    }
}
