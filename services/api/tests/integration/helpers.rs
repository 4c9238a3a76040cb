use std::sync::{Arc, Mutex};

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use uuid::Uuid;

use foodoo_api::domain::repository::{GoogleAuthPort, OrderRepository, UserRepository};
use foodoo_api::domain::types::{Dob, GoogleProfile, Order, OrderItem, ProfileChanges, User};
use foodoo_api::error::ApiError;
use foodoo_domain::order::{OrderStatus, PaymentMethod};

pub use foodoo_testing::auth::TEST_JWT_SECRET;

// ── MockUserRepo ─────────────────────────────────────────────────────────────

pub struct MockUserRepo {
    pub users: Arc<Mutex<Vec<User>>>,
}

impl MockUserRepo {
    pub fn new(users: Vec<User>) -> Self {
        Self {
            users: Arc::new(Mutex::new(users)),
        }
    }

    pub fn empty() -> Self {
        Self::new(vec![])
    }

    /// Shared handle to the stored users for post-execution inspection.
    pub fn users_handle(&self) -> Arc<Mutex<Vec<User>>> {
        Arc::clone(&self.users)
    }
}

impl UserRepository for MockUserRepo {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<User>, ApiError> {
        Ok(self
            .users
            .lock()
            .unwrap()
            .iter()
            .find(|u| u.id == id)
            .cloned())
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<User>, ApiError> {
        Ok(self
            .users
            .lock()
            .unwrap()
            .iter()
            .find(|u| u.email.as_deref() == Some(email))
            .cloned())
    }

    async fn find_by_google_id(&self, google_id: &str) -> Result<Option<User>, ApiError> {
        Ok(self
            .users
            .lock()
            .unwrap()
            .iter()
            .find(|u| u.google_id.as_deref() == Some(google_id))
            .cloned())
    }

    async fn create(&self, user: &User) -> Result<(), ApiError> {
        self.users.lock().unwrap().push(user.clone());
        Ok(())
    }

    async fn update_profile(
        &self,
        id: Uuid,
        changes: &ProfileChanges,
    ) -> Result<Option<User>, ApiError> {
        let mut users = self.users.lock().unwrap();
        let Some(user) = users.iter_mut().find(|u| u.id == id) else {
            return Ok(None);
        };
        if let Some(ref name) = changes.name {
            user.name = name.clone();
        }
        if let Some(ref address) = changes.address {
            user.address = Some(address.clone());
        }
        if let Some(ref phone) = changes.phone {
            user.phone = Some(phone.clone());
        }
        if let Some(ref photo) = changes.photo {
            user.photo = Some(photo.clone());
        }
        user.updated_at = Utc::now();
        Ok(Some(user.clone()))
    }
}

// ── MockOrderRepo ────────────────────────────────────────────────────────────

pub struct MockOrderRepo {
    pub orders: Arc<Mutex<Vec<Order>>>,
}

impl MockOrderRepo {
    pub fn new(orders: Vec<Order>) -> Self {
        Self {
            orders: Arc::new(Mutex::new(orders)),
        }
    }

    pub fn empty() -> Self {
        Self::new(vec![])
    }

    pub fn orders_handle(&self) -> Arc<Mutex<Vec<Order>>> {
        Arc::clone(&self.orders)
    }
}

impl OrderRepository for MockOrderRepo {
    async fn create(&self, order: &Order) -> Result<(), ApiError> {
        self.orders.lock().unwrap().push(order.clone());
        Ok(())
    }

    async fn list_by_user(&self, user_id: Uuid) -> Result<Vec<Order>, ApiError> {
        let mut owned: Vec<Order> = self
            .orders
            .lock()
            .unwrap()
            .iter()
            .filter(|o| o.user_id == user_id)
            .cloned()
            .collect();
        owned.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(owned)
    }

    async fn find_for_user(&self, id: Uuid, user_id: Uuid) -> Result<Option<Order>, ApiError> {
        Ok(self
            .orders
            .lock()
            .unwrap()
            .iter()
            .find(|o| o.id == id && o.user_id == user_id)
            .cloned())
    }

    async fn update_status(
        &self,
        id: Uuid,
        user_id: Uuid,
        status: OrderStatus,
        delivered_at: Option<DateTime<Utc>>,
    ) -> Result<Option<Order>, ApiError> {
        let mut orders = self.orders.lock().unwrap();
        let Some(order) = orders.iter_mut().find(|o| o.id == id && o.user_id == user_id) else {
            return Ok(None);
        };
        order.status = status;
        if delivered_at.is_some() {
            order.delivered_at = delivered_at;
        }
        Ok(Some(order.clone()))
    }
}

// ── MockGoogleAuth ───────────────────────────────────────────────────────────

/// Fakes the code exchange: any code succeeds when a profile is configured.
pub struct MockGoogleAuth {
    pub profile: Option<GoogleProfile>,
}

impl MockGoogleAuth {
    pub fn with_profile(profile: GoogleProfile) -> Self {
        Self {
            profile: Some(profile),
        }
    }

    pub fn failing() -> Self {
        Self { profile: None }
    }
}

impl GoogleAuthPort for MockGoogleAuth {
    async fn exchange_code(&self, _code: &str) -> Result<GoogleProfile, ApiError> {
        self.profile.clone().ok_or(ApiError::InvalidCredentials)
    }
}

// ── Test fixture helpers ─────────────────────────────────────────────────────

pub fn test_user() -> User {
    let now = Utc::now();
    User {
        id: Uuid::parse_str("00000000-0000-0000-0000-000000000001").unwrap(),
        google_id: None,
        email: Some("user@example.com".to_owned()),
        name: "Test User".to_owned(),
        photo: None,
        // bcrypt cost 4 keeps the fixtures fast; production uses DEFAULT_COST.
        password_hash: Some(bcrypt::hash("hunter2", 4).unwrap()),
        first_name: Some("Test".to_owned()),
        last_name: Some("User".to_owned()),
        dob: Dob::default(),
        gender: None,
        address: None,
        phone: None,
        created_at: now,
        updated_at: now,
    }
}

pub fn test_oauth_user() -> User {
    let now = Utc::now();
    User {
        id: Uuid::parse_str("00000000-0000-0000-0000-000000000002").unwrap(),
        google_id: Some("google-sub-123".to_owned()),
        email: Some("oauth@example.com".to_owned()),
        name: "OAuth User".to_owned(),
        photo: Some("https://example.com/p.png".to_owned()),
        password_hash: None,
        first_name: None,
        last_name: None,
        dob: Dob::default(),
        gender: None,
        address: None,
        phone: None,
        created_at: now,
        updated_at: now,
    }
}

pub fn test_item() -> OrderItem {
    OrderItem {
        restaurant_id: "r1".to_owned(),
        restaurant_name: "R1".to_owned(),
        item_name: "Pizza".to_owned(),
        quantity: 2,
        price: Decimal::from(200),
    }
}

pub fn test_order(user_id: Uuid, status: OrderStatus) -> Order {
    Order {
        id: Uuid::new_v4(),
        user_id,
        items: vec![test_item()],
        total: Decimal::from(440),
        address: "X".to_owned(),
        phone: None,
        payment_method: PaymentMethod::Cod,
        status,
        created_at: Utc::now(),
        delivered_at: None,
    }
}
