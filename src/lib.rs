//! Merchant API samples.
//!
//! Runnable examples for the Merchant API over REST/JSON: authentication,
//! typed resources, one service module per sub-API and a registry of
//! samples the `merchant-samples` binary can list and run.

pub mod auth;
pub mod batch;
pub mod client;
pub mod config;
pub mod error;
pub mod issues;
pub mod models;
pub mod samples;
pub mod services;
