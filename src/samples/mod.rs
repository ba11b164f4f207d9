//! Registry of runnable samples.
//!
//! Each sample is one async function that follows the same template:
//!
//! 1. Read the account id (from `merchant-info.json` or `-p account_id=...`)
//! 2. Build a typed request, taking optional values from `-p key=value`
//! 3. Call one or more service functions
//! 4. Print the response as pretty JSON plus a one-line summary
//!
//! Samples are registered under dotted names mirroring the API layout, e.g.
//! `accounts.accounts.v1.get_account` or `promotions.v1.insert_promotions_async`.

use std::collections::{BTreeMap, HashMap};

use chrono::{DateTime, Utc};
use futures::future::LocalBoxFuture;
use rand::Rng;
use rand::distr::Alphanumeric;
use serde::Serialize;

use crate::client::MerchantClient;
use crate::config::{Config, MerchantInfo};
use crate::error::{AppError, Result};

/// Register `$run` under `$name`; returns early from the enclosing
/// `register` function if the name is taken.
macro_rules! sample {
    ($registry:expr, $name:literal, $description:literal, $run:path) => {
        $registry.register($crate::samples::Sample {
            name: $name,
            description: $description,
            run: |ctx| Box::pin($run(ctx)),
        })?
    };
}

mod account_settings;
mod accounts;
mod datasources;
mod inventories;
mod issue_resolution;
mod notifications;
mod order_tracking;
mod product_studio;
mod products;
mod promotions;
mod reports;
mod reviews;

/// Entry point of a sample.
pub type SampleFn = for<'a> fn(&'a SampleContext) -> LocalBoxFuture<'a, Result<()>>;

/// One registered sample.
#[derive(Clone, Copy)]
pub struct Sample {
    pub name: &'static str,
    pub description: &'static str,
    pub run: SampleFn,
}

impl std::fmt::Debug for Sample {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Sample")
            .field("name", &self.name)
            .field("description", &self.description)
            .finish()
    }
}

/// Samples by name, kept sorted for listing.
#[derive(Debug, Default)]
pub struct Registry {
    samples: BTreeMap<&'static str, Sample>,
}

impl Registry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a sample.
    ///
    /// # Errors
    ///
    /// Returns `InvalidRequest` if a sample with the same name exists.
    pub fn register(&mut self, sample: Sample) -> Result<()> {
        if self.samples.contains_key(sample.name) {
            return Err(AppError::InvalidRequest(format!(
                "sample '{}' is registered twice",
                sample.name
            )));
        }
        self.samples.insert(sample.name, sample);
        Ok(())
    }

    pub fn find(&self, name: &str) -> Option<&Sample> {
        self.samples.get(name)
    }

    /// Every sample, sorted by name.
    pub fn list(&self) -> impl Iterator<Item = &Sample> {
        self.samples.values()
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }
}

/// Build the registry holding every sample of the crate.
///
/// # Errors
///
/// Returns `InvalidRequest` if two samples share a name.
pub fn registry() -> Result<Registry> {
    let mut registry = Registry::new();
    accounts::register(&mut registry)?;
    account_settings::register(&mut registry)?;
    datasources::register(&mut registry)?;
    inventories::register(&mut registry)?;
    issue_resolution::register(&mut registry)?;
    notifications::register(&mut registry)?;
    order_tracking::register(&mut registry)?;
    product_studio::register(&mut registry)?;
    products::register(&mut registry)?;
    promotions::register(&mut registry)?;
    reports::register(&mut registry)?;
    reviews::register(&mut registry)?;
    tracing::debug!("Registered {} samples", registry.len());
    Ok(registry)
}

/// Everything a sample needs: the client, the account and its parameters.
pub struct SampleContext {
    pub client: MerchantClient,
    pub config: Config,
    pub merchant: MerchantInfo,
    params: HashMap<String, String>,
}

impl SampleContext {
    pub fn new(
        client: MerchantClient,
        config: Config,
        merchant: MerchantInfo,
        params: HashMap<String, String>,
    ) -> Self {
        Self {
            client,
            config,
            merchant,
            params,
        }
    }

    /// Load merchant info and credentials for `config`.
    ///
    /// # Errors
    ///
    /// Returns `Config` if `merchant-info.json` is missing, `Auth` if no
    /// credentials can be found.
    pub fn from_config(config: Config, params: HashMap<String, String>) -> Result<Self> {
        let merchant = config.merchant_info()?;
        let client = MerchantClient::from_config(&config)?;
        Ok(Self::new(client, config, merchant, params))
    }

    /// Account the sample acts on: `-p account_id=...` or the merchant id.
    pub fn account_id(&self) -> &str {
        self.params
            .get("account_id")
            .map(String::as_str)
            .unwrap_or(&self.merchant.merchant_id)
    }

    /// A required parameter.
    ///
    /// # Errors
    ///
    /// Returns `MissingParam` naming `key` when it was not given.
    pub fn param(&self, key: &str) -> Result<&str> {
        self.params
            .get(key)
            .map(String::as_str)
            .ok_or_else(|| AppError::MissingParam(key.to_string()))
    }

    pub fn param_or<'a>(&'a self, key: &str, default: &'a str) -> &'a str {
        self.params.get(key).map(String::as_str).unwrap_or(default)
    }

    pub fn has_param(&self, key: &str) -> bool {
        self.params.contains_key(key)
    }
}

/// Parse `key=value` as given to `-p`.
///
/// # Errors
///
/// Returns `InvalidRequest` if there is no `=` or the key is empty.
pub fn parse_param(raw: &str) -> Result<(String, String)> {
    match raw.split_once('=') {
        Some((key, value)) if !key.trim().is_empty() => {
            Ok((key.trim().to_string(), value.to_string()))
        }
        _ => Err(AppError::InvalidRequest(format!(
            "expected key=value, got '{}'",
            raw
        ))),
    }
}

/// Print a heading and the value as pretty JSON.
pub(crate) fn print_json<T: Serialize>(heading: &str, value: &T) -> Result<()> {
    println!("{}", heading);
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

/// Random alphanumeric id, used for promotion and review ids.
pub(crate) fn random_id(len: usize) -> String {
    rand::rng()
        .sample_iter(&Alphanumeric)
        .take(len)
        .map(char::from)
        .collect()
}

/// UTC instant from Unix seconds.
pub(crate) fn timestamp(seconds: i64) -> Result<DateTime<Utc>> {
    DateTime::from_timestamp(seconds, 0)
        .ok_or_else(|| AppError::InvalidRequest(format!("timestamp {} is out of range", seconds)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn registry_names_are_unique_and_sorted() {
        let registry = registry().unwrap();
        let names: Vec<&str> = registry.list().map(|s| s.name).collect();
        let mut sorted = names.clone();
        sorted.sort();
        sorted.dedup();
        assert_eq!(names, sorted);
        assert!(registry.find("accounts.accounts.v1.get_account").is_some());
        assert!(
            registry
                .find("productsdatasourcesworkflow.v1.create_datasource_and_insert_first_product")
                .is_some()
        );
    }

    #[test]
    fn duplicate_registration_is_rejected() {
        let mut registry = registry().unwrap();
        let existing = *registry.find("accounts.accounts.v1.get_account").unwrap();
        assert!(matches!(
            registry.register(existing),
            Err(AppError::InvalidRequest(_))
        ));
    }

    #[test]
    fn params_need_an_equals_sign() {
        assert_eq!(
            parse_param("answers=0,1,true").unwrap(),
            ("answers".to_string(), "0,1,true".to_string())
        );
        assert_eq!(parse_param("empty=").unwrap().1, "");
        assert!(parse_param("no_equals").is_err());
        assert!(parse_param("=value").is_err());
    }

    #[test]
    fn random_ids_are_alphanumeric() {
        let id = random_id(8);
        assert_eq!(id.len(), 8);
        assert!(id.chars().all(|c| c.is_ascii_alphanumeric()));
    }

    #[test]
    fn timestamps_are_utc_seconds() {
        assert_eq!(timestamp(1726842472).unwrap().to_rfc3339(), "2024-09-20T14:27:52+00:00");
        assert!(timestamp(i64::MAX).is_err());
    }
}
