use axum::{
    Json,
    extract::{Multipart, State},
};
use serde::Serialize;
use uuid::Uuid;

use foodoo_auth_types::bearer::Identity;

use crate::domain::types::{MAX_PHOTO_BYTES, ProfileChanges, User};
use crate::error::ApiError;
use crate::infra::uploads::{extension_for, save_photo};
use crate::state::AppState;
use crate::usecase::profile::{GetProfileUseCase, UpdateProfileUseCase};

// ── Response shape ───────────────────────────────────────────────────────────

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserResponse {
    pub id: String,
    pub name: String,
    pub email: Option<String>,
    pub photo: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub dob: DobResponse,
    pub gender: Option<String>,
    pub address: Option<String>,
    pub phone: Option<String>,
    #[serde(serialize_with = "foodoo_core::serde::to_rfc3339_ms")]
    pub created_at: chrono::DateTime<chrono::Utc>,
    #[serde(serialize_with = "foodoo_core::serde::to_rfc3339_ms")]
    pub updated_at: chrono::DateTime<chrono::Utc>,
}

#[derive(Serialize)]
pub struct DobResponse {
    pub day: Option<String>,
    pub month: Option<String>,
    pub year: Option<String>,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            id: user.id.to_string(),
            name: user.name,
            email: user.email,
            photo: user.photo,
            first_name: user.first_name,
            last_name: user.last_name,
            dob: DobResponse {
                day: user.dob.day,
                month: user.dob.month,
                year: user.dob.year,
            },
            gender: user.gender,
            address: user.address,
            phone: user.phone,
            created_at: user.created_at,
            updated_at: user.updated_at,
        }
    }
}

// ── GET /api/user/me ─────────────────────────────────────────────────────────

pub async fn get_me(
    identity: Identity,
    State(state): State<AppState>,
) -> Result<Json<UserResponse>, ApiError> {
    let usecase = GetProfileUseCase {
        repo: state.user_repo(),
    };
    let user = usecase.execute(identity.user_id).await?;
    Ok(Json(UserResponse::from(user)))
}

// ── PUT /api/user/me ─────────────────────────────────────────────────────────

/// Partial profile update via multipart form: optional `name`, `address`,
/// `phone` text parts and an optional `photo` file part (image, ≤ 5 MiB).
pub async fn update_me(
    identity: Identity,
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Json<UserResponse>, ApiError> {
    let mut changes = ProfileChanges::default();

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|_| ApiError::MissingData)?
    {
        // `text()`/`bytes()` consume the field, so detach the name first.
        let name = field.name().map(str::to_owned);
        match name.as_deref() {
            Some("name") => {
                changes.name = Some(field.text().await.map_err(|_| ApiError::MissingData)?);
            }
            Some("address") => {
                changes.address = Some(field.text().await.map_err(|_| ApiError::MissingData)?);
            }
            Some("phone") => {
                changes.phone = Some(field.text().await.map_err(|_| ApiError::MissingData)?);
            }
            Some("photo") => {
                let ext = field
                    .content_type()
                    .and_then(extension_for)
                    .ok_or(ApiError::InvalidPhoto)?;
                let data = field.bytes().await.map_err(|_| ApiError::InvalidPhoto)?;
                if data.is_empty() || data.len() > MAX_PHOTO_BYTES {
                    return Err(ApiError::InvalidPhoto);
                }
                let filename = format!("user-{}.{ext}", Uuid::new_v4());
                save_photo(&state.upload_dir, &filename, &data).await?;
                changes.photo = Some(format!("/uploads/{filename}"));
            }
            // Unknown parts are ignored rather than rejected.
            _ => {}
        }
    }

    let usecase = UpdateProfileUseCase {
        repo: state.user_repo(),
    };
    let user = usecase.execute(identity.user_id, changes).await?;
    Ok(Json(UserResponse::from(user)))
}
