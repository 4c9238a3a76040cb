use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

/// API service domain error variants.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("missing required fields")]
    MissingData,
    #[error("invalid status")]
    InvalidStatus,
    #[error("cannot cancel order in current status")]
    CannotCancel,
    #[error("invalid order id")]
    InvalidOrderId,
    #[error("invalid photo upload")]
    InvalidPhoto,
    #[error("invalid credentials")]
    InvalidCredentials,
    #[error("user not found")]
    UserNotFound,
    #[error("order not found")]
    OrderNotFound,
    #[error("user already exists with this email")]
    EmailTaken,
    #[error("internal error")]
    Internal(#[from] anyhow::Error),
}

impl ApiError {
    pub fn kind(&self) -> &'static str {
        match self {
            Self::MissingData => "MISSING_DATA",
            Self::InvalidStatus => "INVALID_STATUS",
            Self::CannotCancel => "CANNOT_CANCEL",
            Self::InvalidOrderId => "INVALID_ORDER_ID",
            Self::InvalidPhoto => "INVALID_PHOTO",
            Self::InvalidCredentials => "INVALID_CREDENTIALS",
            Self::UserNotFound => "USER_NOT_FOUND",
            Self::OrderNotFound => "ORDER_NOT_FOUND",
            Self::EmailTaken => "EMAIL_TAKEN",
            Self::Internal(_) => "INTERNAL",
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match &self {
            Self::MissingData
            | Self::InvalidStatus
            | Self::CannotCancel
            | Self::InvalidOrderId
            | Self::InvalidPhoto => StatusCode::BAD_REQUEST,
            Self::InvalidCredentials => StatusCode::UNAUTHORIZED,
            Self::UserNotFound | Self::OrderNotFound => StatusCode::NOT_FOUND,
            Self::EmailTaken => StatusCode::CONFLICT,
            Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };
        // Log 500s only — tower-http TraceLayer already records method/uri/status for all
        // requests. 4xx are expected client errors; logging them here would be noise.
        // Internal errors need the anyhow chain logged so the root cause is traceable.
        if let Self::Internal(ref e) = self {
            tracing::error!(error = %e, kind = "INTERNAL", "internal error");
        }
        let body = serde_json::json!({
            "kind": self.kind(),
            "message": self.to_string(),
        });
        (status, axum::Json(body)).into_response()
    }
}
