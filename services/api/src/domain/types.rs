use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use uuid::Uuid;

use foodoo_domain::order::{OrderStatus, PaymentMethod};

/// User account with profile fields.
///
/// Invariant: at least one of `password_hash` / `google_id` is set.
#[derive(Debug, Clone)]
pub struct User {
    pub id: Uuid,
    pub google_id: Option<String>,
    pub email: Option<String>,
    pub name: String,
    pub photo: Option<String>,
    pub password_hash: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub dob: Dob,
    pub gender: Option<String>,
    pub address: Option<String>,
    pub phone: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Date of birth as the free-form day/month/year components the signup
/// form collects. Not parsed into a calendar date.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Dob {
    pub day: Option<String>,
    pub month: Option<String>,
    pub year: Option<String>,
}

/// Partial profile update; `None` fields are left untouched.
#[derive(Debug, Clone, Default)]
pub struct ProfileChanges {
    pub name: Option<String>,
    pub address: Option<String>,
    pub phone: Option<String>,
    pub photo: Option<String>,
}

impl ProfileChanges {
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.address.is_none()
            && self.phone.is_none()
            && self.photo.is_none()
    }
}

/// An order with its line items, owned by exactly one user.
#[derive(Debug, Clone)]
pub struct Order {
    pub id: Uuid,
    pub user_id: Uuid,
    pub items: Vec<OrderItem>,
    pub total: Decimal,
    pub address: String,
    pub phone: Option<String>,
    pub payment_method: PaymentMethod,
    pub status: OrderStatus,
    pub created_at: DateTime<Utc>,
    pub delivered_at: Option<DateTime<Utc>>,
}

/// One ordered quantity of a named dish from a named restaurant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderItem {
    pub restaurant_id: String,
    pub restaurant_name: String,
    pub item_name: String,
    pub quantity: i32,
    pub price: Decimal,
}

impl OrderItem {
    /// An item is acceptable when every name field is non-blank, the
    /// quantity is at least one, and the price is not negative.
    pub fn is_valid(&self) -> bool {
        !self.restaurant_id.trim().is_empty()
            && !self.restaurant_name.trim().is_empty()
            && !self.item_name.trim().is_empty()
            && self.quantity >= 1
            && self.price >= Decimal::ZERO
    }
}

/// Profile fetched from Google's userinfo endpoint after code exchange.
#[derive(Debug, Clone)]
pub struct GoogleProfile {
    /// Google's stable subject id for the account.
    pub sub: String,
    pub email: Option<String>,
    pub name: Option<String>,
    pub picture: Option<String>,
}

/// Maximum accepted profile photo size in bytes (5 MiB).
pub const MAX_PHOTO_BYTES: usize = 5 * 1024 * 1024;
