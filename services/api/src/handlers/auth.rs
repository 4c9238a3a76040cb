use axum::{
    Json,
    extract::{Query, State},
    http::StatusCode,
    response::Redirect,
};
use serde::{Deserialize, Serialize};

use crate::domain::types::{Dob, User};
use crate::error::ApiError;
use crate::infra::google::authorize_url;
use crate::state::AppState;
use crate::usecase::auth::{
    GoogleLoginUseCase, LoginInput, LoginUseCase, SignupInput, SignupUseCase,
};

// ── Shared response shapes ───────────────────────────────────────────────────

/// Public subset of the user record returned from signup/login.
#[derive(Serialize)]
pub struct AuthUserResponse {
    pub id: String,
    pub name: String,
    pub email: Option<String>,
    pub photo: Option<String>,
}

impl From<&User> for AuthUserResponse {
    fn from(user: &User) -> Self {
        Self {
            id: user.id.to_string(),
            name: user.name.clone(),
            email: user.email.clone(),
            photo: user.photo.clone(),
        }
    }
}

#[derive(Serialize)]
pub struct AuthResponse {
    pub token: String,
    pub user: AuthUserResponse,
}

#[derive(Deserialize, Default)]
pub struct DobRequest {
    pub day: Option<String>,
    pub month: Option<String>,
    pub year: Option<String>,
}

impl From<DobRequest> for Dob {
    fn from(dob: DobRequest) -> Self {
        Self {
            day: dob.day,
            month: dob.month,
            year: dob.year,
        }
    }
}

// ── POST /api/auth/signup ────────────────────────────────────────────────────

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SignupRequest {
    pub first_name: String,
    pub last_name: Option<String>,
    pub email_or_phone: String,
    pub password: String,
    #[serde(default)]
    pub dob: Option<DobRequest>,
    pub gender: Option<String>,
}

pub async fn signup(
    State(state): State<AppState>,
    Json(body): Json<SignupRequest>,
) -> Result<(StatusCode, Json<AuthResponse>), ApiError> {
    let usecase = SignupUseCase {
        repo: state.user_repo(),
        jwt_secret: state.jwt_secret.0.clone(),
    };
    let out = usecase
        .execute(SignupInput {
            first_name: body.first_name,
            last_name: body.last_name,
            email: body.email_or_phone,
            password: body.password,
            dob: body.dob.map(Dob::from).unwrap_or_default(),
            gender: body.gender,
        })
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(AuthResponse {
            user: AuthUserResponse::from(&out.user),
            token: out.token,
        }),
    ))
}

// ── POST /api/auth/login ─────────────────────────────────────────────────────

#[derive(Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

pub async fn login(
    State(state): State<AppState>,
    Json(body): Json<LoginRequest>,
) -> Result<Json<AuthResponse>, ApiError> {
    let usecase = LoginUseCase {
        repo: state.user_repo(),
        jwt_secret: state.jwt_secret.0.clone(),
    };
    let out = usecase
        .execute(LoginInput {
            email: body.email,
            password: body.password,
        })
        .await?;

    Ok(Json(AuthResponse {
        user: AuthUserResponse::from(&out.user),
        token: out.token,
    }))
}

// ── GET /api/auth/google ─────────────────────────────────────────────────────

pub async fn google_start(State(state): State<AppState>) -> Redirect {
    let url = authorize_url(&state.google.client_id, &state.google.redirect_url);
    Redirect::temporary(&url)
}

// ── GET /api/auth/google/callback ────────────────────────────────────────────

#[derive(Deserialize)]
pub struct GoogleCallbackQuery {
    pub code: Option<String>,
    pub error: Option<String>,
}

/// Finish the OAuth dance and bounce back to the frontend carrying either
/// `?token=` or `?error=`. The browser is mid-redirect here, so failures
/// are reported in the redirect rather than as an error status.
pub async fn google_callback(
    State(state): State<AppState>,
    Query(query): Query<GoogleCallbackQuery>,
) -> Redirect {
    let origin = &state.frontend_origin;

    let Some(code) = query.code else {
        let reason = query.error.unwrap_or_else(|| "OAuthCancelled".to_owned());
        tracing::warn!(reason = %reason, "google callback without code");
        return Redirect::temporary(&format!("{origin}/?error=OAuthFailed"));
    };

    let usecase = GoogleLoginUseCase {
        repo: state.user_repo(),
        google: state.google.clone(),
        jwt_secret: state.jwt_secret.0.clone(),
    };
    match usecase.execute(&code).await {
        Ok(out) => Redirect::temporary(&format!("{origin}/?token={}", out.token)),
        Err(e) => {
            tracing::warn!(error = %e, "google login failed");
            Redirect::temporary(&format!("{origin}/?error=OAuthFailed"))
        }
    }
}
