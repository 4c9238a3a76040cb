#![allow(async_fn_in_trait)]

use chrono::{DateTime, Utc};
use uuid::Uuid;

use foodoo_domain::order::OrderStatus;

use crate::domain::types::{GoogleProfile, Order, ProfileChanges, User};
use crate::error::ApiError;

/// Repository for user accounts.
pub trait UserRepository: Send + Sync {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<User>, ApiError>;
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, ApiError>;
    async fn find_by_google_id(&self, google_id: &str) -> Result<Option<User>, ApiError>;
    async fn create(&self, user: &User) -> Result<(), ApiError>;

    /// Apply a partial profile update. Returns the updated record, or
    /// `None` when the user no longer exists.
    async fn update_profile(
        &self,
        id: Uuid,
        changes: &ProfileChanges,
    ) -> Result<Option<User>, ApiError>;
}

/// Repository for orders and their line items.
pub trait OrderRepository: Send + Sync {
    /// Insert an order together with its items (single transaction).
    async fn create(&self, order: &Order) -> Result<(), ApiError>;

    /// All orders owned by the user, newest first, items in position order.
    async fn list_by_user(&self, user_id: Uuid) -> Result<Vec<Order>, ApiError>;

    /// Fetch an order only when it is owned by `user_id`. An ownership
    /// mismatch is indistinguishable from non-existence.
    async fn find_for_user(&self, id: Uuid, user_id: Uuid) -> Result<Option<Order>, ApiError>;

    /// Set the status (and optionally `delivered_at`) of a caller-owned
    /// order. Returns the updated record, or `None` when the order is
    /// absent or owned by someone else.
    async fn update_status(
        &self,
        id: Uuid,
        user_id: Uuid,
        status: OrderStatus,
        delivered_at: Option<DateTime<Utc>>,
    ) -> Result<Option<Order>, ApiError>;
}

/// Port for the external identity provider (Google).
pub trait GoogleAuthPort: Send + Sync {
    /// Exchange an authorization code for the authenticated profile.
    async fn exchange_code(&self, code: &str) -> Result<GoogleProfile, ApiError>;
}
