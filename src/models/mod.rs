//! Request and response models of the Merchant API.
//!
//! These mirror the subset of the API's JSON schema the samples send and read.

/// Accounts, users, account issues and regions
pub mod account;
/// Price, intervals, custom attributes and int64 encoding
pub mod common;
/// Data sources and file uploads
pub mod datasource;
/// Local and regional inventories
pub mod inventory;
/// Rendered issues, actions and aggregate product statuses
pub mod issue;
pub mod notification;
pub mod order_tracking;
/// Products and product inputs
pub mod product;
pub mod product_studio;
pub mod promotion;
/// Quota groups and LFP merchant state
pub mod quota;
pub mod report;
/// Merchant and product reviews
pub mod review;
/// Pass-through settings resources
pub mod settings;
