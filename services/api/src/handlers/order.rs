use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use foodoo_auth_types::bearer::Identity;
use foodoo_domain::order::{OrderStatus, PaymentMethod};

use crate::domain::types::{Order, OrderItem};
use crate::error::ApiError;
use crate::state::AppState;
use crate::usecase::order::{
    CancelOrderUseCase, CreateOrderInput, CreateOrderUseCase, GetOrderUseCase, ListOrdersUseCase,
    UpdateOrderStatusUseCase,
};

// ── Response shapes ──────────────────────────────────────────────────────────

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderItemResponse {
    pub restaurant_id: String,
    pub restaurant_name: String,
    pub item_name: String,
    pub quantity: i32,
    pub price: Decimal,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderResponse {
    pub id: String,
    pub items: Vec<OrderItemResponse>,
    pub total: Decimal,
    pub address: String,
    pub phone: Option<String>,
    pub payment_method: PaymentMethod,
    pub status: OrderStatus,
    #[serde(serialize_with = "foodoo_core::serde::to_rfc3339_ms")]
    pub created_at: chrono::DateTime<chrono::Utc>,
    #[serde(serialize_with = "foodoo_core::serde::opt_to_rfc3339_ms")]
    pub delivered_at: Option<chrono::DateTime<chrono::Utc>>,
}

impl From<Order> for OrderResponse {
    fn from(order: Order) -> Self {
        Self {
            id: order.id.to_string(),
            items: order
                .items
                .into_iter()
                .map(|item| OrderItemResponse {
                    restaurant_id: item.restaurant_id,
                    restaurant_name: item.restaurant_name,
                    item_name: item.item_name,
                    quantity: item.quantity,
                    price: item.price,
                })
                .collect(),
            total: order.total,
            address: order.address,
            phone: order.phone,
            payment_method: order.payment_method,
            status: order.status,
            created_at: order.created_at,
            delivered_at: order.delivered_at,
        }
    }
}

/// Mutating endpoints wrap the record: `{"order": ...}`.
#[derive(Serialize)]
pub struct OrderEnvelope {
    pub order: OrderResponse,
}

fn parse_order_id(id: &str) -> Result<Uuid, ApiError> {
    id.parse().map_err(|_| ApiError::InvalidOrderId)
}

// ── GET /api/orders/my ───────────────────────────────────────────────────────

pub async fn get_my_orders(
    identity: Identity,
    State(state): State<AppState>,
) -> Result<Json<Vec<OrderResponse>>, ApiError> {
    let usecase = ListOrdersUseCase {
        repo: state.order_repo(),
    };
    let orders = usecase.execute(identity.user_id).await?;
    Ok(Json(orders.into_iter().map(OrderResponse::from).collect()))
}

// ── POST /api/orders ─────────────────────────────────────────────────────────

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderItemRequest {
    pub restaurant_id: String,
    pub restaurant_name: String,
    pub item_name: String,
    pub quantity: i32,
    pub price: Decimal,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateOrderRequest {
    pub items: Vec<OrderItemRequest>,
    pub total: Decimal,
    pub address: String,
    pub phone: Option<String>,
    pub payment_method: Option<PaymentMethod>,
}

pub async fn create_order(
    identity: Identity,
    State(state): State<AppState>,
    Json(body): Json<CreateOrderRequest>,
) -> Result<(StatusCode, Json<OrderEnvelope>), ApiError> {
    let usecase = CreateOrderUseCase {
        repo: state.order_repo(),
    };
    let order = usecase
        .execute(
            identity.user_id,
            CreateOrderInput {
                items: body
                    .items
                    .into_iter()
                    .map(|item| OrderItem {
                        restaurant_id: item.restaurant_id,
                        restaurant_name: item.restaurant_name,
                        item_name: item.item_name,
                        quantity: item.quantity,
                        price: item.price,
                    })
                    .collect(),
                total: body.total,
                address: body.address,
                phone: body.phone,
                payment_method: body.payment_method.unwrap_or_default(),
            },
        )
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(OrderEnvelope {
            order: OrderResponse::from(order),
        }),
    ))
}

// ── GET /api/orders/{id} ─────────────────────────────────────────────────────

pub async fn get_order(
    identity: Identity,
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<OrderResponse>, ApiError> {
    let order_id = parse_order_id(&id)?;
    let usecase = GetOrderUseCase {
        repo: state.order_repo(),
    };
    let order = usecase.execute(identity.user_id, order_id).await?;
    Ok(Json(OrderResponse::from(order)))
}

// ── PATCH /api/orders/{id}/status ────────────────────────────────────────────

#[derive(Deserialize)]
pub struct UpdateStatusRequest {
    pub status: String,
}

pub async fn update_order_status(
    identity: Identity,
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(body): Json<UpdateStatusRequest>,
) -> Result<Json<OrderEnvelope>, ApiError> {
    let order_id = parse_order_id(&id)?;
    let status: OrderStatus = body.status.parse().map_err(|_| ApiError::InvalidStatus)?;

    let usecase = UpdateOrderStatusUseCase {
        repo: state.order_repo(),
    };
    let order = usecase.execute(identity.user_id, order_id, status).await?;
    Ok(Json(OrderEnvelope {
        order: OrderResponse::from(order),
    }))
}

// ── DELETE /api/orders/{id} ──────────────────────────────────────────────────

pub async fn cancel_order(
    identity: Identity,
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<OrderEnvelope>, ApiError> {
    let order_id = parse_order_id(&id)?;
    let usecase = CancelOrderUseCase {
        repo: state.order_repo(),
    };
    let order = usecase.execute(identity.user_id, order_id).await?;
    Ok(Json(OrderEnvelope {
        order: OrderResponse::from(order),
    }))
}
