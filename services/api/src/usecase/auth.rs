use chrono::Utc;
use uuid::Uuid;

use foodoo_auth_types::token::{IdentityClaims, issue_token};

use crate::domain::repository::{GoogleAuthPort, UserRepository};
use crate::domain::types::{Dob, User};
use crate::error::ApiError;

/// Sign a bearer token for the given user.
fn issue_for(user: &User, secret: &str) -> Result<String, ApiError> {
    let claims = IdentityClaims {
        user_id: user.id,
        name: user.name.clone(),
        email: user.email.clone(),
        photo: user.photo.clone(),
    };
    let (token, _exp) = issue_token(&claims, secret).map_err(|e| ApiError::Internal(e.into()))?;
    Ok(token)
}

/// A freshly authenticated user together with their bearer token.
#[derive(Debug)]
pub struct AuthOutput {
    pub user: User,
    pub token: String,
}

// ── Signup ───────────────────────────────────────────────────────────────────

pub struct SignupInput {
    pub first_name: String,
    pub last_name: Option<String>,
    pub email: String,
    pub password: String,
    pub dob: Dob,
    pub gender: Option<String>,
}

pub struct SignupUseCase<R: UserRepository> {
    pub repo: R,
    pub jwt_secret: String,
}

impl<R: UserRepository> SignupUseCase<R> {
    pub async fn execute(&self, input: SignupInput) -> Result<AuthOutput, ApiError> {
        if input.first_name.trim().is_empty()
            || input.email.trim().is_empty()
            || input.password.is_empty()
        {
            return Err(ApiError::MissingData);
        }

        if self.repo.find_by_email(&input.email).await?.is_some() {
            return Err(ApiError::EmailTaken);
        }

        let password_hash = bcrypt::hash(&input.password, bcrypt::DEFAULT_COST)
            .map_err(|e| ApiError::Internal(e.into()))?;

        let name = match &input.last_name {
            Some(last) => format!("{} {}", input.first_name, last).trim().to_owned(),
            None => input.first_name.clone(),
        };

        let now = Utc::now();
        let user = User {
            id: Uuid::new_v4(),
            google_id: None,
            email: Some(input.email),
            name,
            photo: None,
            password_hash: Some(password_hash),
            first_name: Some(input.first_name),
            last_name: input.last_name,
            dob: input.dob,
            gender: input.gender,
            address: None,
            phone: None,
            created_at: now,
            updated_at: now,
        };
        self.repo.create(&user).await?;

        let token = issue_for(&user, &self.jwt_secret)?;
        Ok(AuthOutput { user, token })
    }
}

// ── Login ────────────────────────────────────────────────────────────────────

pub struct LoginInput {
    pub email: String,
    pub password: String,
}

pub struct LoginUseCase<R: UserRepository> {
    pub repo: R,
    pub jwt_secret: String,
}

impl<R: UserRepository> LoginUseCase<R> {
    pub async fn execute(&self, input: LoginInput) -> Result<AuthOutput, ApiError> {
        if input.email.trim().is_empty() || input.password.is_empty() {
            return Err(ApiError::MissingData);
        }

        let user = self
            .repo
            .find_by_email(&input.email)
            .await?
            .ok_or(ApiError::InvalidCredentials)?;

        // OAuth-only accounts have no password hash and cannot password-login.
        let hash = user
            .password_hash
            .as_deref()
            .ok_or(ApiError::InvalidCredentials)?;

        let matches =
            bcrypt::verify(&input.password, hash).map_err(|e| ApiError::Internal(e.into()))?;
        if !matches {
            return Err(ApiError::InvalidCredentials);
        }

        let token = issue_for(&user, &self.jwt_secret)?;
        Ok(AuthOutput { user, token })
    }
}

// ── Google login ─────────────────────────────────────────────────────────────

pub struct GoogleLoginUseCase<R: UserRepository, G: GoogleAuthPort> {
    pub repo: R,
    pub google: G,
    pub jwt_secret: String,
}

impl<R: UserRepository, G: GoogleAuthPort> GoogleLoginUseCase<R, G> {
    /// Exchange the callback code, then find-or-create the user by
    /// Google subject id. No password is ever stored for this path.
    pub async fn execute(&self, code: &str) -> Result<AuthOutput, ApiError> {
        let profile = self.google.exchange_code(code).await?;

        let user = match self.repo.find_by_google_id(&profile.sub).await? {
            Some(user) => user,
            None => {
                let now = Utc::now();
                let user = User {
                    id: Uuid::new_v4(),
                    google_id: Some(profile.sub),
                    email: profile.email,
                    name: profile.name.unwrap_or_else(|| "Foodoo user".to_owned()),
                    photo: profile.picture,
                    password_hash: None,
                    first_name: None,
                    last_name: None,
                    dob: Dob::default(),
                    gender: None,
                    address: None,
                    phone: None,
                    created_at: now,
                    updated_at: now,
                };
                self.repo.create(&user).await?;
                user
            }
        };

        let token = issue_for(&user, &self.jwt_secret)?;
        Ok(AuthOutput { user, token })
    }
}
