//! Sample configuration management.
//!
//! Two layers feed every sample:
//! - `Config`: endpoints and paths, read from `MERCHANT_*` environment variables (and `.env`)
//! - `MerchantInfo`: the Merchant Center account the samples act on, read from
//!   `merchant-info.json` in the configuration directory

use std::path::{Path, PathBuf};

use serde::{Deserialize, Deserializer};

use crate::error::{AppError, Result};

/// File holding the merchant id inside the configuration directory.
pub const MERCHANT_INFO_FILE: &str = "merchant-info.json";

/// Sample configuration loaded from environment variables.
///
/// # Environment Variables
///
/// - `MERCHANT_CONFIG_DIR` (optional): directory with `merchant-info.json` and
///   credential files, defaults to `$HOME/shopping-samples/content`
/// - `MERCHANT_API_ENDPOINT` (optional): defaults to `https://merchantapi.googleapis.com`
/// - `MERCHANT_TOKEN_URI` (optional): OAuth2 token endpoint
/// - `MERCHANT_AUTH_URI` (optional): OAuth2 consent endpoint used by `login`
/// - `MERCHANT_REQUEST_TIMEOUT_SECS` (optional): per-request timeout, defaults to 30
/// - `MERCHANT_ACCESS_TOKEN` (optional): pre-issued bearer token, skips credential files
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    #[serde(default = "default_config_dir")]
    pub config_dir: PathBuf,

    #[serde(default = "default_api_endpoint")]
    pub api_endpoint: String,

    #[serde(default = "default_token_uri")]
    pub token_uri: String,

    #[serde(default = "default_auth_uri")]
    pub auth_uri: String,

    #[serde(default = "default_request_timeout_secs")]
    pub request_timeout_secs: u64,

    #[serde(default)]
    pub access_token: Option<String>,
}

fn default_config_dir() -> PathBuf {
    let home = std::env::var_os("HOME").unwrap_or_else(|| ".".into());
    PathBuf::from(home).join("shopping-samples").join("content")
}

fn default_api_endpoint() -> String {
    "https://merchantapi.googleapis.com".to_string()
}

fn default_token_uri() -> String {
    "https://oauth2.googleapis.com/token".to_string()
}

fn default_auth_uri() -> String {
    "https://accounts.google.com/o/oauth2/v2/auth".to_string()
}

/// Default timeout if MERCHANT_REQUEST_TIMEOUT_SECS is not set.
fn default_request_timeout_secs() -> u64 {
    30
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// This method first attempts to load a `.env` file (which is optional),
    /// then reads `MERCHANT_`-prefixed environment variables.
    ///
    /// # Errors
    ///
    /// Returns an error if a variable is present but cannot be parsed
    /// (e.g. a non-numeric `MERCHANT_REQUEST_TIMEOUT_SECS`).
    pub fn from_env() -> Result<Self> {
        // Try to load .env file if it exists (does nothing if not found)
        dotenvy::dotenv().ok();

        // Field names are converted: api_endpoint -> MERCHANT_API_ENDPOINT
        Ok(envy::prefixed("MERCHANT_").from_env::<Config>()?)
    }

    /// Configuration pointing at `endpoint` with every other field defaulted.
    ///
    /// Used to aim the samples at a local mock of the API.
    pub fn with_endpoint(endpoint: impl Into<String>, config_dir: impl Into<PathBuf>) -> Self {
        Self {
            config_dir: config_dir.into(),
            api_endpoint: endpoint.into(),
            token_uri: default_token_uri(),
            auth_uri: default_auth_uri(),
            request_timeout_secs: default_request_timeout_secs(),
            access_token: None,
        }
    }

    /// Path of a file inside the configuration directory.
    pub fn path(&self, file_name: &str) -> PathBuf {
        self.config_dir.join(file_name)
    }

    /// Read `merchant-info.json` from the configuration directory.
    pub fn merchant_info(&self) -> Result<MerchantInfo> {
        MerchantInfo::load(&self.path(MERCHANT_INFO_FILE))
    }
}

/// The Merchant Center account the samples act on.
///
/// # JSON Example
///
/// ```json
/// { "merchantId": 1234567, "gmbEmail": "owner@example.com" }
/// ```
///
/// `merchantId` may be a number or a string; `accountId` is accepted as an alias.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MerchantInfo {
    #[serde(alias = "accountId", deserialize_with = "string_or_number")]
    pub merchant_id: String,

    /// Google Business Profile email, used by the local-feed samples.
    #[serde(default)]
    pub gmb_email: Option<String>,
}

impl MerchantInfo {
    /// Load and validate merchant info from a JSON file.
    ///
    /// # Errors
    ///
    /// - `Config` if the file does not exist or the id is empty
    /// - `Json` if the file is not valid JSON of the expected shape
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(AppError::Config(format!(
                "merchant info not found at {}",
                path.display()
            )));
        }

        let contents = std::fs::read_to_string(path)?;
        let info: MerchantInfo = serde_json::from_str(&contents)?;

        if info.merchant_id.trim().is_empty() {
            return Err(AppError::Config(format!(
                "merchantId is empty in {}",
                path.display()
            )));
        }

        tracing::debug!("Loaded merchant info for account {}", info.merchant_id);
        Ok(info)
    }
}

fn string_or_number<'de, D>(deserializer: D) -> std::result::Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Id {
        Number(u64),
        Text(String),
    }

    Ok(match Id::deserialize(deserializer)? {
        Id::Number(n) => n.to_string(),
        Id::Text(s) => s,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn merchant_id_accepts_numbers_and_strings() {
        let numeric: MerchantInfo = serde_json::from_str(r#"{"merchantId": 1234}"#).unwrap();
        assert_eq!(numeric.merchant_id, "1234");

        let text: MerchantInfo =
            serde_json::from_str(r#"{"accountId": "5678", "gmbEmail": "a@b.c"}"#).unwrap();
        assert_eq!(text.merchant_id, "5678");
        assert_eq!(text.gmb_email.as_deref(), Some("a@b.c"));
    }

    #[test]
    fn missing_merchant_info_names_the_path() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config::with_endpoint("http://localhost", dir.path());
        let err = config.merchant_info().unwrap_err();
        assert!(err.to_string().contains(MERCHANT_INFO_FILE));
    }

    #[test]
    fn empty_merchant_id_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join(MERCHANT_INFO_FILE), r#"{"merchantId": " "}"#).unwrap();
        let config = Config::with_endpoint("http://localhost", dir.path());
        assert!(matches!(config.merchant_info(), Err(AppError::Config(_))));
    }
}
