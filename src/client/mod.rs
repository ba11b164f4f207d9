//! Thin REST client for the Merchant API.
//!
//! Every sample talks to the API through [`MerchantClient`]: it attaches the
//! bearer token, encodes JSON bodies, follows page tokens and turns non-2xx
//! answers into [`AppError::Api`].

pub mod names;

use std::sync::Arc;
use std::time::Duration;

use reqwest::Method;
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::auth::Authenticator;
use crate::config::Config;
use crate::error::{AppError, Result};

/// Query parameters of one request.
pub type Query<'a> = [(&'a str, String)];

/// Authenticated client bound to one API endpoint.
///
/// Cloning is cheap: the HTTP connection pool and the token cache are shared.
#[derive(Clone)]
pub struct MerchantClient {
    http: reqwest::Client,
    endpoint: String,
    auth: Arc<Authenticator>,
}

impl MerchantClient {
    /// Build a client for `config`, discovering credentials on the way.
    ///
    /// # Errors
    ///
    /// Returns `Auth` if no credentials are found, `Http` if the HTTP
    /// client cannot be constructed.
    pub fn from_config(config: &Config) -> Result<Self> {
        let http = build_http(config)?;
        let auth = Authenticator::from_config(http.clone(), config)?;
        Ok(Self::new(http, &config.api_endpoint, auth))
    }

    pub fn new(http: reqwest::Client, endpoint: &str, auth: Authenticator) -> Self {
        Self {
            http,
            endpoint: endpoint.trim_end_matches('/').to_string(),
            auth: Arc::new(auth),
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Where the credentials came from, e.g. `service account`.
    pub fn credential_kind(&self) -> &'static str {
        self.auth.source().kind()
    }

    pub async fn get<T: DeserializeOwned>(&self, path: &str, query: &Query<'_>) -> Result<T> {
        self.send(Method::GET, path, query, None::<&()>).await
    }

    pub async fn post<B, T>(&self, path: &str, query: &Query<'_>, body: &B) -> Result<T>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        self.send(Method::POST, path, query, Some(body)).await
    }

    pub async fn patch<B, T>(&self, path: &str, query: &Query<'_>, body: &B) -> Result<T>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        self.send(Method::PATCH, path, query, Some(body)).await
    }

    /// DELETE a resource; the API answers with an empty object.
    pub async fn delete(&self, path: &str, query: &Query<'_>) -> Result<()> {
        let _: Value = self.send(Method::DELETE, path, query, None::<&()>).await?;
        Ok(())
    }

    /// GET every page of a list method and collect the `items_field` arrays.
    ///
    /// # Process
    ///
    /// 1. Request the first page with the caller's query
    /// 2. Append the page's `items_field` array (absent means empty)
    /// 3. Repeat with `pageToken` until `nextPageToken` is empty or missing
    pub async fn list_all<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &Query<'_>,
        items_field: &str,
    ) -> Result<Vec<T>> {
        let mut items = Vec::new();
        let mut page_token: Option<String> = None;
        let mut pages = 0usize;

        loop {
            let mut page_query: Vec<(&str, String)> = query.to_vec();
            if let Some(token) = page_token.take() {
                page_query.push(("pageToken", token));
            }

            let mut page: Value = self.get(path, &page_query).await?;
            pages += 1;

            if let Some(batch) = page.get_mut(items_field).map(Value::take) {
                let batch: Vec<T> = serde_json::from_value(batch)?;
                items.extend(batch);
            }

            match page.get("nextPageToken").and_then(Value::as_str) {
                Some(token) if !token.is_empty() => page_token = Some(token.to_string()),
                _ => break,
            }
        }

        tracing::debug!("Collected {} {} over {} page(s)", items.len(), items_field, pages);
        Ok(items)
    }

    /// Send one request and decode the JSON answer.
    ///
    /// # Process
    ///
    /// 1. Fetch a bearer token (cached between calls)
    /// 2. Send the request with query and optional JSON body
    /// 3. On non-2xx, decode Google's error envelope into `AppError::Api`
    /// 4. Decode the body, treating an empty body as `{}`
    async fn send<B, T>(
        &self,
        method: Method,
        path: &str,
        query: &Query<'_>,
        body: Option<&B>,
    ) -> Result<T>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let token = self.auth.access_token().await?;
        let url = format!("{}{}", self.endpoint, path);
        tracing::debug!("{} {}", method, url);

        let mut request = self
            .http
            .request(method.clone(), &url)
            .bearer_auth(token)
            .query(query);
        if let Some(body) = body {
            request = request.json(body);
        }

        let response = request.send().await?;
        let status = response.status();
        let text = response.text().await?;

        if !status.is_success() {
            tracing::debug!("{} {} failed with {}", method, url, status);
            return Err(AppError::from_api_response(status.as_u16(), &text));
        }

        let text = if text.trim().is_empty() { "{}" } else { text.as_str() };
        Ok(serde_json::from_str(text)?)
    }
}

/// HTTP client shared by API calls and token exchanges.
pub fn build_http(config: &Config) -> Result<reqwest::Client> {
    Ok(reqwest::Client::builder()
        .timeout(Duration::from_secs(config.request_timeout_secs))
        .user_agent(concat!("merchant-api-samples/", env!("CARGO_PKG_VERSION")))
        .build()?)
}
