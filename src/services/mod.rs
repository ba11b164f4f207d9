//! Typed wrappers around the Merchant API's REST methods.
//!
//! One async function per method; each builds the path and body and hands
//! them to [`crate::client::MerchantClient`].

pub mod account_settings;
pub mod accounts;
pub mod datasources;
pub mod inventories;
pub mod issue_resolution;
pub mod notifications;
pub mod order_tracking;
pub mod product_studio;
pub mod products;
pub mod promotions;
pub mod quota;
pub mod reports;
pub mod reviews;
