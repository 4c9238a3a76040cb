use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use uuid::Uuid;

use foodoo_domain::order::{OrderStatus, PaymentMethod};

use crate::domain::repository::OrderRepository;
use crate::domain::types::{Order, OrderItem};
use crate::error::ApiError;

// ── CreateOrder ──────────────────────────────────────────────────────────────

pub struct CreateOrderInput {
    pub items: Vec<OrderItem>,
    pub total: Decimal,
    pub address: String,
    pub phone: Option<String>,
    pub payment_method: PaymentMethod,
}

pub struct CreateOrderUseCase<R: OrderRepository> {
    pub repo: R,
}

impl<R: OrderRepository> CreateOrderUseCase<R> {
    /// Insert a new order owned by the caller. The status is forced to
    /// `pending` regardless of input; the total is client-supplied and
    /// stored as-is.
    pub async fn execute(&self, user_id: Uuid, input: CreateOrderInput) -> Result<Order, ApiError> {
        if input.items.is_empty() {
            return Err(ApiError::MissingData);
        }
        if input.items.iter().any(|item| !item.is_valid()) {
            return Err(ApiError::MissingData);
        }
        if input.total <= Decimal::ZERO {
            return Err(ApiError::MissingData);
        }
        if input.address.trim().is_empty() {
            return Err(ApiError::MissingData);
        }

        let order = Order {
            id: Uuid::new_v4(),
            user_id,
            items: input.items,
            total: input.total,
            address: input.address,
            phone: input.phone,
            payment_method: input.payment_method,
            status: OrderStatus::Pending,
            created_at: Utc::now(),
            delivered_at: None,
        };
        self.repo.create(&order).await?;
        Ok(order)
    }
}

// ── ListOrders ───────────────────────────────────────────────────────────────

pub struct ListOrdersUseCase<R: OrderRepository> {
    pub repo: R,
}

impl<R: OrderRepository> ListOrdersUseCase<R> {
    pub async fn execute(&self, user_id: Uuid) -> Result<Vec<Order>, ApiError> {
        self.repo.list_by_user(user_id).await
    }
}

// ── GetOrder ─────────────────────────────────────────────────────────────────

pub struct GetOrderUseCase<R: OrderRepository> {
    pub repo: R,
}

impl<R: OrderRepository> GetOrderUseCase<R> {
    /// Ownership mismatch is indistinguishable from non-existence so the
    /// existence of other users' orders never leaks.
    pub async fn execute(&self, user_id: Uuid, order_id: Uuid) -> Result<Order, ApiError> {
        self.repo
            .find_for_user(order_id, user_id)
            .await?
            .ok_or(ApiError::OrderNotFound)
    }
}

// ── UpdateOrderStatus ────────────────────────────────────────────────────────

pub struct UpdateOrderStatusUseCase<R: OrderRepository> {
    pub repo: R,
}

impl<R: OrderRepository> UpdateOrderStatusUseCase<R> {
    /// Transitions are caller-driven and unconstrained within the enum;
    /// moving into `delivered` stamps the delivery time, every other
    /// target leaves it untouched.
    pub async fn execute(
        &self,
        user_id: Uuid,
        order_id: Uuid,
        status: OrderStatus,
    ) -> Result<Order, ApiError> {
        let delivered_at: Option<DateTime<Utc>> =
            (status == OrderStatus::Delivered).then(Utc::now);
        self.repo
            .update_status(order_id, user_id, status, delivered_at)
            .await?
            .ok_or(ApiError::OrderNotFound)
    }
}

// ── CancelOrder ──────────────────────────────────────────────────────────────

pub struct CancelOrderUseCase<R: OrderRepository> {
    pub repo: R,
}

impl<R: OrderRepository> CancelOrderUseCase<R> {
    /// Cancellation is only permitted from `pending` or `confirmed`.
    pub async fn execute(&self, user_id: Uuid, order_id: Uuid) -> Result<Order, ApiError> {
        let order = self
            .repo
            .find_for_user(order_id, user_id)
            .await?
            .ok_or(ApiError::OrderNotFound)?;

        if !order.status.is_cancellable() {
            return Err(ApiError::CannotCancel);
        }

        self.repo
            .update_status(order_id, user_id, OrderStatus::Cancelled, None)
            .await?
            .ok_or(ApiError::OrderNotFound)
    }
}
