//! `Authorization: Bearer` identity extractor.

use axum::extract::{FromRef, FromRequestParts};
use axum::response::{IntoResponse, Response};
use http::StatusCode;
use http::request::Parts;
use uuid::Uuid;

use crate::token::validate_token;

/// JWT signing secret, exposed to the extractor through axum state.
///
/// Routers embed this in their state type and provide
/// `impl FromRef<AppState> for JwtSecret`.
#[derive(Clone)]
pub struct JwtSecret(pub String);

/// Caller identity proven by the bearer token on the request.
///
/// A missing `Authorization` header is rejected with 401; a present but
/// invalid or expired token with 403. Ownership scoping downstream derives
/// solely from `user_id` here, never from client-supplied ids.
#[derive(Debug, Clone)]
pub struct Identity {
    pub user_id: Uuid,
    pub name: String,
    pub email: Option<String>,
    pub photo: Option<String>,
}

/// Rejection for [`Identity`]: 401 when no token was presented, 403 when
/// the presented token does not validate.
#[derive(Debug, thiserror::Error)]
pub enum BearerRejection {
    #[error("no token provided")]
    NoToken,
    #[error("invalid or expired token")]
    InvalidToken,
}

impl BearerRejection {
    pub fn kind(&self) -> &'static str {
        match self {
            Self::NoToken => "NO_TOKEN",
            Self::InvalidToken => "INVALID_TOKEN",
        }
    }
}

impl IntoResponse for BearerRejection {
    fn into_response(self) -> Response {
        let status = match self {
            Self::NoToken => StatusCode::UNAUTHORIZED,
            Self::InvalidToken => StatusCode::FORBIDDEN,
        };
        let body = serde_json::json!({
            "kind": self.kind(),
            "message": self.to_string(),
        });
        (status, axum::Json(body)).into_response()
    }
}

impl<S> FromRequestParts<S> for Identity
where
    JwtSecret: FromRef<S>,
    S: Send + Sync,
{
    type Rejection = BearerRejection;

    // axum-core 0.5 defines this as `fn -> impl Future + Send` (not `async fn`).
    // In Rust 1.82+ precise capturing, `async fn` captures lifetimes differently,
    // causing E0195. Fix: extract values synchronously, return a 'static async move block.
    fn from_request_parts(
        parts: &mut Parts,
        state: &S,
    ) -> impl std::future::Future<Output = Result<Self, Self::Rejection>> + Send {
        let secret = JwtSecret::from_ref(state);
        let bearer = parts
            .headers
            .get(http::header::AUTHORIZATION)
            .and_then(|v| v.to_str().ok())
            .and_then(|s| s.strip_prefix("Bearer "))
            .map(str::to_owned);

        async move {
            let token = bearer.ok_or(BearerRejection::NoToken)?;
            let info =
                validate_token(&token, &secret.0).map_err(|_| BearerRejection::InvalidToken)?;
            Ok(Self {
                user_id: info.user_id,
                name: info.name,
                email: info.email,
                photo: info.photo,
            })
        }
    }
}
