//! JWT bearer-token issue and validation.

use jsonwebtoken::{DecodingKey, EncodingKey, Header, Validation, decode, encode};
use serde::{Deserialize, Serialize};
use std::time::{SystemTime, UNIX_EPOCH};
use uuid::Uuid;

/// Bearer-token lifetime in seconds (7 days). Expiry is the only
/// invalidation mechanism; there is no revocation list.
pub const TOKEN_EXP: u64 = 604_800;

/// User identity extracted from a validated bearer token.
#[derive(Debug, Clone)]
pub struct TokenInfo {
    pub user_id: Uuid,
    pub name: String,
    pub email: Option<String>,
    pub photo: Option<String>,
    pub exp: u64,
}

/// Errors returned by [`validate_token`].
#[derive(Debug, thiserror::Error)]
pub enum AuthError {
    #[error("invalid signature")]
    InvalidSignature,
    #[error("token expired")]
    Expired,
    #[error("malformed token")]
    Malformed,
}

/// JWT claims payload carried by every bearer token.
///
/// | Field | JWT claim | Meaning |
/// |-------|-----------|---------|
/// | `sub` | `sub` | user ID (UUID string) |
/// | `name` | custom | display name |
/// | `email` | custom | account email, absent for some OAuth accounts |
/// | `photo` | custom | public photo path |
/// | `exp` | `exp` | expiration, seconds since epoch |
#[derive(Debug, Serialize, Deserialize)]
pub struct JwtClaims {
    pub sub: String,
    pub name: String,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub photo: Option<String>,
    pub exp: u64,
}

fn now_secs() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .expect("system clock before UNIX epoch")
        .as_secs()
}

/// Identity claims to embed when issuing a token.
#[derive(Debug, Clone)]
pub struct IdentityClaims {
    pub user_id: Uuid,
    pub name: String,
    pub email: Option<String>,
    pub photo: Option<String>,
}

/// Sign a 7-day bearer token embedding the given identity.
///
/// Pure function of secret + claims; returns the encoded JWT and its
/// expiry timestamp.
pub fn issue_token(identity: &IdentityClaims, secret: &str) -> Result<(String, u64), AuthError> {
    let exp = now_secs() + TOKEN_EXP;
    let claims = JwtClaims {
        sub: identity.user_id.to_string(),
        name: identity.name.clone(),
        email: identity.email.clone(),
        photo: identity.photo.clone(),
        exp,
    };
    let token = encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(secret.as_bytes()),
    )
    .map_err(|_| AuthError::Malformed)?;
    Ok((token, exp))
}

/// Decode and validate a bearer token, returning parsed identity.
///
/// Validation: HS256, exp checked, required claims: `exp` + `sub`.
/// Default leeway = 60s tolerates clock skew against the issuer.
pub fn validate_token(token: &str, secret: &str) -> Result<TokenInfo, AuthError> {
    let mut validation = Validation::new(jsonwebtoken::Algorithm::HS256);
    validation.validate_exp = true;
    validation.required_spec_claims.clear();
    validation.set_required_spec_claims(&["exp", "sub"]);

    let data = decode::<JwtClaims>(
        token,
        &DecodingKey::from_secret(secret.as_bytes()),
        &validation,
    )
    .map_err(|e| match e.kind() {
        jsonwebtoken::errors::ErrorKind::ExpiredSignature => AuthError::Expired,
        jsonwebtoken::errors::ErrorKind::InvalidSignature
        | jsonwebtoken::errors::ErrorKind::InvalidEcdsaKey
        | jsonwebtoken::errors::ErrorKind::InvalidRsaKey(_) => AuthError::InvalidSignature,
        _ => AuthError::Malformed,
    })?;

    let claims = data.claims;
    let user_id = claims
        .sub
        .parse::<Uuid>()
        .map_err(|_| AuthError::Malformed)?;

    Ok(TokenInfo {
        user_id,
        name: claims.name,
        email: claims.email,
        photo: claims.photo,
        exp: claims.exp,
    })
}
