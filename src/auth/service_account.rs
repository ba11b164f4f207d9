//! Service account assertion signing (RFC 7523 JWT bearer grant).

use std::time::{Duration, SystemTime};

use josekit::jws::{JwsHeader, RS256};
use josekit::jwt::{self, JwtPayload};

use super::credentials::ServiceAccountKey;
use crate::error::Result;

/// Lifetime requested for each assertion.
const ASSERTION_LIFETIME: Duration = Duration::from_secs(3600);

/// Build the signed assertion exchanged for an access token.
///
/// # Claims
///
/// - `iss`: the service account email
/// - `aud`: the token endpoint the assertion is posted to
/// - `scope`: space separated OAuth2 scopes
/// - `iat` / `exp`: now and now + 1 hour
///
/// # Errors
///
/// Returns `Auth` if the private key is not a valid RSA PEM.
pub fn sign_assertion(
    key: &ServiceAccountKey,
    token_uri: &str,
    scope: &str,
    now: SystemTime,
) -> Result<String> {
    let mut header = JwsHeader::new();
    header.set_token_type("JWT");
    if let Some(kid) = &key.private_key_id {
        header.set_key_id(kid);
    }

    let mut payload = JwtPayload::new();
    payload.set_issuer(&key.client_email);
    payload.set_audience(vec![token_uri]);
    payload.set_issued_at(&now);
    payload.set_expires_at(&(now + ASSERTION_LIFETIME));
    payload.set_claim("scope", Some(scope.into()))?;

    let signer = RS256.signer_from_pem(key.private_key.as_bytes())?;
    Ok(jwt::encode_with_signer(&payload, &header, &signer)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn assertion_verifies_with_the_public_key() {
        let pair = RS256.generate_key_pair(2048).unwrap();
        let key = ServiceAccountKey {
            client_email: "sa@project.iam.gserviceaccount.com".into(),
            private_key: String::from_utf8(pair.to_pem_private_key()).unwrap(),
            private_key_id: Some("kid-1".into()),
        };

        let token = sign_assertion(
            &key,
            "https://oauth2.example/token",
            "https://www.googleapis.com/auth/content",
            SystemTime::now(),
        )
        .unwrap();

        let verifier = RS256.verifier_from_pem(&pair.to_pem_public_key()).unwrap();
        let (payload, header) = jwt::decode_with_verifier(&token, &verifier).unwrap();
        assert_eq!(header.key_id(), Some("kid-1"));
        assert_eq!(payload.issuer(), Some("sa@project.iam.gserviceaccount.com"));
        assert_eq!(payload.audience(), Some(vec!["https://oauth2.example/token"]));
        assert_eq!(
            payload.claim("scope").and_then(|v| v.as_str()),
            Some("https://www.googleapis.com/auth/content")
        );
    }

    #[test]
    fn garbage_key_is_an_auth_error() {
        let key = ServiceAccountKey {
            client_email: "sa@example".into(),
            private_key: "not a key".into(),
            private_key_id: None,
        };
        let err = sign_assertion(&key, "aud", "scope", SystemTime::now()).unwrap_err();
        assert!(matches!(err, crate::error::AppError::Auth(_)));
    }
}
