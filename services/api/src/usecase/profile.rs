use uuid::Uuid;

use crate::domain::repository::UserRepository;
use crate::domain::types::{ProfileChanges, User};
use crate::error::ApiError;

// ── GetProfile ───────────────────────────────────────────────────────────────

pub struct GetProfileUseCase<R: UserRepository> {
    pub repo: R,
}

impl<R: UserRepository> GetProfileUseCase<R> {
    pub async fn execute(&self, user_id: Uuid) -> Result<User, ApiError> {
        self.repo
            .find_by_id(user_id)
            .await?
            .ok_or(ApiError::UserNotFound)
    }
}

// ── UpdateProfile ────────────────────────────────────────────────────────────

pub struct UpdateProfileUseCase<R: UserRepository> {
    pub repo: R,
}

impl<R: UserRepository> UpdateProfileUseCase<R> {
    pub async fn execute(
        &self,
        user_id: Uuid,
        changes: ProfileChanges,
    ) -> Result<User, ApiError> {
        if changes.is_empty() {
            return Err(ApiError::MissingData);
        }
        self.repo
            .update_profile(user_id, &changes)
            .await?
            .ok_or(ApiError::UserNotFound)
    }
}
