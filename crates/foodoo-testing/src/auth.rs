//! Bearer-token helpers for integration tests.
//!
//! Handlers resolve the caller from the `Authorization: Bearer` header. In
//! tests, `TestAuth` mints a real signed token so the extractor path is
//! exercised end to end without a running auth flow.

use axum::http::{HeaderMap, HeaderValue};
use uuid::Uuid;

use foodoo_auth_types::token::{IdentityClaims, issue_token};

/// JWT secret shared by all test fixtures.
pub const TEST_JWT_SECRET: &str = "test-jwt-secret-for-unit-tests-only";

/// Configurable identity minted into test bearer tokens.
pub struct TestAuth {
    pub user_id: Uuid,
    pub name: String,
    pub email: Option<String>,
}

impl TestAuth {
    pub fn new(user_id: Uuid, name: &str) -> Self {
        Self {
            user_id,
            name: name.to_owned(),
            email: Some(format!("{name}@example.com")),
        }
    }

    /// Sign a bearer token for this identity with [`TEST_JWT_SECRET`].
    pub fn token(&self) -> String {
        let claims = IdentityClaims {
            user_id: self.user_id,
            name: self.name.clone(),
            email: self.email.clone(),
            photo: None,
        };
        let (token, _) = issue_token(&claims, TEST_JWT_SECRET).expect("issue test token");
        token
    }

    /// Return headers as if a logged-in client sent the request.
    pub fn headers(&self) -> HeaderMap {
        let mut map = HeaderMap::new();
        map.insert(
            http::header::AUTHORIZATION,
            HeaderValue::from_str(&format!("Bearer {}", self.token())).unwrap(),
        );
        map
    }
}
