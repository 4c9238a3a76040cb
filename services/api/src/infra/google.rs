//! Google OAuth client: code exchange + userinfo fetch over reqwest.

use anyhow::Context as _;
use serde::Deserialize;
use url::Url;

use crate::domain::repository::GoogleAuthPort;
use crate::domain::types::GoogleProfile;
use crate::error::ApiError;

const AUTHORIZE_URL: &str = "https://accounts.google.com/o/oauth2/v2/auth";
const TOKEN_URL: &str = "https://oauth2.googleapis.com/token";
const USERINFO_URL: &str = "https://openidconnect.googleapis.com/v1/userinfo";

/// Build the browser redirect URL that starts the Google sign-in dance.
pub fn authorize_url(client_id: &str, redirect_url: &str) -> String {
    let url = Url::parse_with_params(
        AUTHORIZE_URL,
        [
            ("client_id", client_id),
            ("redirect_uri", redirect_url),
            ("response_type", "code"),
            ("scope", "openid email profile"),
        ],
    )
    .expect("static authorize URL is valid");
    url.into()
}

#[derive(Clone)]
pub struct HttpGoogleAuth {
    pub http: reqwest::Client,
    pub client_id: String,
    pub client_secret: String,
    pub redirect_url: String,
}

#[derive(Deserialize)]
struct TokenResponse {
    access_token: String,
}

#[derive(Deserialize)]
struct UserInfoResponse {
    sub: String,
    email: Option<String>,
    name: Option<String>,
    picture: Option<String>,
}

impl GoogleAuthPort for HttpGoogleAuth {
    async fn exchange_code(&self, code: &str) -> Result<GoogleProfile, ApiError> {
        let params = [
            ("code", code),
            ("client_id", self.client_id.as_str()),
            ("client_secret", self.client_secret.as_str()),
            ("redirect_uri", self.redirect_url.as_str()),
            ("grant_type", "authorization_code"),
        ];
        let resp = self
            .http
            .post(TOKEN_URL)
            .form(&params)
            .send()
            .await
            .context("google token exchange")?;
        // Google answers 4xx for expired or forged codes.
        if !resp.status().is_success() {
            return Err(ApiError::InvalidCredentials);
        }
        let token: TokenResponse = resp
            .json()
            .await
            .context("decode google token response")?;

        let resp = self
            .http
            .get(USERINFO_URL)
            .bearer_auth(&token.access_token)
            .send()
            .await
            .context("google userinfo")?;
        if !resp.status().is_success() {
            return Err(ApiError::InvalidCredentials);
        }
        let info: UserInfoResponse = resp
            .json()
            .await
            .context("decode google userinfo response")?;

        Ok(GoogleProfile {
            sub: info.sub,
            email: info.email,
            name: info.name,
            picture: info.picture,
        })
    }
}
