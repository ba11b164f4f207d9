//! Resource name helpers.
//!
//! Resource names are hierarchical paths such as
//! `accounts/123/products/en~US~sku1`; REST URLs are
//! `/{api}/{version}/{resource name}`.

use base64::Engine;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;

pub fn account(account_id: &str) -> String {
    format!("accounts/{}", account_id)
}

pub fn product(account_id: &str, product_id: &str) -> String {
    format!("accounts/{}/products/{}", account_id, product_id)
}

pub fn product_input(account_id: &str, product_id: &str) -> String {
    format!("accounts/{}/productInputs/{}", account_id, product_id)
}

pub fn data_source(account_id: &str, data_source_id: &str) -> String {
    format!("accounts/{}/dataSources/{}", account_id, data_source_id)
}

pub fn user(account_id: &str, email: &str) -> String {
    format!("accounts/{}/users/{}", account_id, email)
}

/// Product id in its `contentLanguage~feedLabel~offerId` form.
pub fn product_id(content_language: &str, feed_label: &str, offer_id: &str) -> String {
    format!("{}~{}~{}", content_language, feed_label, offer_id)
}

/// Encode a product id for use in a URL path.
///
/// Offer ids may contain `/` or `%`, which cannot appear in a path segment.
/// Requests carrying the encoded form also send `productIdBase64UrlEncoded=true`.
pub fn encode_product_id(product_id: &str) -> String {
    URL_SAFE_NO_PAD.encode(product_id.as_bytes())
}

/// Last segment of a resource name (`accounts/1/dataSources/9` → `9`).
pub fn id_of(name: &str) -> &str {
    name.rsplit('/').next().unwrap_or(name)
}

/// Accept either a bare id or a full `accounts/{id}` name.
pub fn account_name(id_or_name: &str) -> String {
    if id_or_name.starts_with("accounts/") {
        id_or_name.to_string()
    } else {
        account(id_or_name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builds_nested_names() {
        assert_eq!(
            product("123", &product_id("en", "US", "sku1")),
            "accounts/123/products/en~US~sku1"
        );
        assert_eq!(data_source("1", "9"), "accounts/1/dataSources/9");
    }

    #[test]
    fn encodes_offer_ids_with_slashes() {
        let encoded = encode_product_id("online~en~US~sku123/special");
        assert!(!encoded.contains('/'));
        assert!(!encoded.contains('='));
        assert_eq!(encoded, "b25saW5lfmVuflVTfnNrdTEyMy9zcGVjaWFs");
    }

    #[test]
    fn id_of_returns_last_segment() {
        assert_eq!(id_of("accounts/1/dataSources/9"), "9");
        assert_eq!(id_of("plain"), "plain");
        assert_eq!(account_name("accounts/5"), "accounts/5");
        assert_eq!(account_name("5"), "accounts/5");
    }
}
