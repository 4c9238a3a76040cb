use uuid::Uuid;

use foodoo_api::domain::types::ProfileChanges;
use foodoo_api::error::ApiError;
use foodoo_api::usecase::profile::{GetProfileUseCase, UpdateProfileUseCase};

use crate::helpers::{MockUserRepo, test_user};

// ── GetProfile ───────────────────────────────────────────────────────────────

#[tokio::test]
async fn should_return_own_profile() {
    let user = test_user();
    let usecase = GetProfileUseCase {
        repo: MockUserRepo::new(vec![user.clone()]),
    };
    let fetched = usecase.execute(user.id).await.unwrap();
    assert_eq!(fetched.id, user.id);
    assert_eq!(fetched.name, "Test User");
}

#[tokio::test]
async fn should_return_not_found_for_vanished_user() {
    let usecase = GetProfileUseCase {
        repo: MockUserRepo::empty(),
    };
    let result = usecase.execute(Uuid::new_v4()).await;
    assert!(matches!(result, Err(ApiError::UserNotFound)));
}

// ── UpdateProfile ────────────────────────────────────────────────────────────

#[tokio::test]
async fn should_apply_partial_profile_update() {
    let user = test_user();
    let repo = MockUserRepo::new(vec![user.clone()]);
    let users = repo.users_handle();

    let usecase = UpdateProfileUseCase { repo };
    let updated = usecase
        .execute(
            user.id,
            ProfileChanges {
                name: Some("Renamed".to_owned()),
                address: Some("12 Curry Lane".to_owned()),
                phone: None,
                photo: None,
            },
        )
        .await
        .unwrap();

    assert_eq!(updated.name, "Renamed");
    assert_eq!(updated.address.as_deref(), Some("12 Curry Lane"));
    // Untouched fields survive the update.
    assert_eq!(updated.email, user.email);

    let stored = users.lock().unwrap();
    assert_eq!(stored[0].name, "Renamed");
}

#[tokio::test]
async fn should_record_uploaded_photo_path() {
    let user = test_user();
    let usecase = UpdateProfileUseCase {
        repo: MockUserRepo::new(vec![user.clone()]),
    };
    let updated = usecase
        .execute(
            user.id,
            ProfileChanges {
                photo: Some("/uploads/user-abc.png".to_owned()),
                ..Default::default()
            },
        )
        .await
        .unwrap();
    assert_eq!(updated.photo.as_deref(), Some("/uploads/user-abc.png"));
}

#[tokio::test]
async fn should_reject_update_without_any_fields() {
    let user = test_user();
    let usecase = UpdateProfileUseCase {
        repo: MockUserRepo::new(vec![user.clone()]),
    };
    let result = usecase.execute(user.id, ProfileChanges::default()).await;
    assert!(matches!(result, Err(ApiError::MissingData)));
}

#[tokio::test]
async fn should_return_not_found_when_updating_vanished_user() {
    let usecase = UpdateProfileUseCase {
        repo: MockUserRepo::empty(),
    };
    let result = usecase
        .execute(
            Uuid::new_v4(),
            ProfileChanges {
                name: Some("ghost".to_owned()),
                ..Default::default()
            },
        )
        .await;
    assert!(matches!(result, Err(ApiError::UserNotFound)));
}
