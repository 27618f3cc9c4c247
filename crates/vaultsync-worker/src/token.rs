//! Minimal HS256 JWT handling for access tokens.
//!
//! - Only JSON objects are supported for header and payload.
//! - base64url WITHOUT padding.
//! - Signatures are checked with `Hmac::verify_slice` (constant time).

use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine as _;
use hmac::{Hmac, Mac};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use sha2::Sha256;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum TokenError {
    #[error("invalid JWT format")]
    Format,

    #[error("unsupported JWT header")]
    UnsupportedHeader,

    #[error("invalid JWT signature")]
    Signature,

    #[error("invalid JWT payload: {0}")]
    Payload(String),

    #[error("token expired")]
    Expired,

    #[error("token has no subject")]
    MissingSubject,

    #[error("invalid HMAC key")]
    Key,
}

#[derive(Debug, Serialize, Deserialize)]
struct JwtHeader {
    alg: String,
    typ: String,
}

/// Claims read from an access token. Other claims the issuer adds are ignored.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccessClaims {
    pub sub: String,
    pub exp: i64,
}

fn b64url_decode(s: &str) -> Result<Vec<u8>, TokenError> {
    URL_SAFE_NO_PAD.decode(s.as_bytes()).map_err(|_| TokenError::Format)
}

fn mac_for(secret: &[u8], signing_input: &str) -> Result<Hmac<Sha256>, TokenError> {
    let mut mac = <Hmac<Sha256> as Mac>::new_from_slice(secret).map_err(|_| TokenError::Key)?;
    mac.update(signing_input.as_bytes());
    Ok(mac)
}

/// Encode claims as an HS256-signed JWT. Tokens are issued elsewhere; this
/// only mints fixtures.
#[cfg(test)]
pub(crate) fn encode_hs256<T: Serialize>(secret: &[u8], claims: &T) -> Result<String, TokenError> {
    let header = JwtHeader {
        alg: "HS256".to_string(),
        typ: "JWT".to_string(),
    };

    let header_json = serde_json::to_vec(&header).map_err(|e| TokenError::Payload(e.to_string()))?;
    let claims_json = serde_json::to_vec(claims).map_err(|e| TokenError::Payload(e.to_string()))?;

    let signing_input = format!(
        "{}.{}",
        URL_SAFE_NO_PAD.encode(header_json),
        URL_SAFE_NO_PAD.encode(claims_json)
    );
    let signature = mac_for(secret, &signing_input)?.finalize().into_bytes();

    Ok(format!("{signing_input}.{}", URL_SAFE_NO_PAD.encode(signature)))
}

/// Decode an HS256 JWT and verify its signature.
///
/// Does not look at `exp`; see [`validate_access_token`].
pub fn decode_hs256<T: DeserializeOwned>(secret: &[u8], token: &str) -> Result<T, TokenError> {
    let token = token.replace(char::is_whitespace, "");
    let parts: Vec<&str> = token.split('.').collect();
    let [header_b64, payload_b64, sig_b64] = parts.as_slice() else {
        return Err(TokenError::Format);
    };

    let header: JwtHeader =
        serde_json::from_slice(&b64url_decode(header_b64)?).map_err(|_| TokenError::Format)?;
    if header.alg != "HS256" || !header.typ.eq_ignore_ascii_case("JWT") {
        return Err(TokenError::UnsupportedHeader);
    }

    let sig = b64url_decode(sig_b64)?;
    mac_for(secret, &format!("{header_b64}.{payload_b64}"))?
        .verify_slice(&sig)
        .map_err(|_| TokenError::Signature)?;

    serde_json::from_slice(&b64url_decode(payload_b64)?)
        .map_err(|e| TokenError::Payload(e.to_string()))
}

/// Pull the token out of an `Authorization: Bearer <token>` header value.
/// The scheme is matched case-insensitively.
pub fn bearer_token(header: Option<&str>) -> Option<String> {
    let (scheme, rest) = header?.trim().split_once(' ')?;
    if !scheme.eq_ignore_ascii_case("bearer") {
        return None;
    }

    let token = rest.trim();
    (!token.is_empty()).then(|| token.to_string())
}

/// Verify an access token and return the user id it was issued for.
pub fn validate_access_token(secret: &str, token: &str, now: i64) -> Result<String, TokenError> {
    let claims: AccessClaims = decode_hs256(secret.as_bytes(), token)?;

    if claims.exp <= now {
        return Err(TokenError::Expired);
    }
    let sub = claims.sub.trim();
    if sub.is_empty() {
        return Err(TokenError::MissingSubject);
    }

    Ok(sub.to_string())
}
