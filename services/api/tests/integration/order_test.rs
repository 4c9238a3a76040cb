use chrono::Duration;
use rust_decimal::Decimal;
use uuid::Uuid;

use foodoo_api::error::ApiError;
use foodoo_api::usecase::order::{
    CancelOrderUseCase, CreateOrderInput, CreateOrderUseCase, GetOrderUseCase, ListOrdersUseCase,
    UpdateOrderStatusUseCase,
};
use foodoo_domain::order::{OrderStatus, PaymentMethod};

use crate::helpers::{MockOrderRepo, test_item, test_order};

fn create_input() -> CreateOrderInput {
    CreateOrderInput {
        items: vec![test_item()],
        total: Decimal::from(440),
        address: "X".to_owned(),
        phone: None,
        payment_method: PaymentMethod::Cod,
    }
}

// ── Create → list round trip ─────────────────────────────────────────────────

#[tokio::test]
async fn should_round_trip_created_order_through_list() {
    let user_id = Uuid::new_v4();
    let repo = MockOrderRepo::empty();
    let orders = repo.orders_handle();

    let created = CreateOrderUseCase { repo }
        .execute(user_id, create_input())
        .await
        .unwrap();

    let listed = ListOrdersUseCase {
        repo: MockOrderRepo {
            orders: orders.clone(),
        },
    }
    .execute(user_id)
    .await
    .unwrap();

    assert_eq!(listed.len(), 1);
    let order = &listed[0];
    assert_eq!(order.id, created.id);
    assert_eq!(order.status, OrderStatus::Pending);
    assert_eq!(order.total, Decimal::from(440));
    assert_eq!(order.address, "X");
    assert_eq!(order.items.len(), 1);
    assert_eq!(order.items[0].item_name, "Pizza");
    assert_eq!(order.items[0].restaurant_name, "R1");
    assert_eq!(order.items[0].price, Decimal::from(200));
    assert_eq!(order.items[0].quantity, 2);
}

#[tokio::test]
async fn should_list_own_orders_newest_first() {
    let user_id = Uuid::new_v4();
    let mut older = test_order(user_id, OrderStatus::Pending);
    older.created_at -= Duration::hours(2);
    let newer = test_order(user_id, OrderStatus::Confirmed);
    let newer_id = newer.id;

    let usecase = ListOrdersUseCase {
        repo: MockOrderRepo::new(vec![older, newer]),
    };
    let listed = usecase.execute(user_id).await.unwrap();

    assert_eq!(listed.len(), 2);
    assert_eq!(listed[0].id, newer_id, "newest order comes first");
}

// ── Ownership scoping ────────────────────────────────────────────────────────

#[tokio::test]
async fn should_hide_other_users_orders_behind_not_found() {
    let owner = Uuid::new_v4();
    let stranger = Uuid::new_v4();
    let order = test_order(owner, OrderStatus::Pending);
    let order_id = order.id;
    let orders = MockOrderRepo::new(vec![order]).orders_handle();

    let get = GetOrderUseCase {
        repo: MockOrderRepo {
            orders: orders.clone(),
        },
    };
    assert!(matches!(
        get.execute(stranger, order_id).await,
        Err(ApiError::OrderNotFound)
    ));

    let update = UpdateOrderStatusUseCase {
        repo: MockOrderRepo {
            orders: orders.clone(),
        },
    };
    assert!(matches!(
        update
            .execute(stranger, order_id, OrderStatus::Confirmed)
            .await,
        Err(ApiError::OrderNotFound)
    ));

    let cancel = CancelOrderUseCase {
        repo: MockOrderRepo { orders },
    };
    assert!(matches!(
        cancel.execute(stranger, order_id).await,
        Err(ApiError::OrderNotFound)
    ));
}

#[tokio::test]
async fn should_fetch_own_order_by_id() {
    let owner = Uuid::new_v4();
    let order = test_order(owner, OrderStatus::Preparing);
    let order_id = order.id;

    let usecase = GetOrderUseCase {
        repo: MockOrderRepo::new(vec![order]),
    };
    let fetched = usecase.execute(owner, order_id).await.unwrap();
    assert_eq!(fetched.id, order_id);
    assert_eq!(fetched.status, OrderStatus::Preparing);
}

// ── Status updates ───────────────────────────────────────────────────────────

#[tokio::test]
async fn should_stamp_delivered_at_only_on_delivered() {
    let owner = Uuid::new_v4();
    let order = test_order(owner, OrderStatus::OutForDelivery);
    let order_id = order.id;
    let orders = MockOrderRepo::new(vec![order]).orders_handle();

    let usecase = UpdateOrderStatusUseCase {
        repo: MockOrderRepo {
            orders: orders.clone(),
        },
    };

    let updated = usecase
        .execute(owner, order_id, OrderStatus::Preparing)
        .await
        .unwrap();
    assert_eq!(updated.status, OrderStatus::Preparing);
    assert!(updated.delivered_at.is_none());

    let delivered = usecase
        .execute(owner, order_id, OrderStatus::Delivered)
        .await
        .unwrap();
    assert_eq!(delivered.status, OrderStatus::Delivered);
    assert!(delivered.delivered_at.is_some());
}

#[tokio::test]
async fn should_allow_any_enum_status_transition() {
    // Transitions are deliberately unconstrained beyond enum membership.
    let owner = Uuid::new_v4();
    let order = test_order(owner, OrderStatus::Delivered);
    let order_id = order.id;

    let usecase = UpdateOrderStatusUseCase {
        repo: MockOrderRepo::new(vec![order]),
    };
    let updated = usecase
        .execute(owner, order_id, OrderStatus::Pending)
        .await
        .unwrap();
    assert_eq!(updated.status, OrderStatus::Pending);
}

// ── Cancellation ─────────────────────────────────────────────────────────────

#[tokio::test]
async fn should_cancel_from_pending_and_confirmed() {
    let owner = Uuid::new_v4();
    for status in [OrderStatus::Pending, OrderStatus::Confirmed] {
        let order = test_order(owner, status);
        let order_id = order.id;
        let usecase = CancelOrderUseCase {
            repo: MockOrderRepo::new(vec![order]),
        };
        let cancelled = usecase.execute(owner, order_id).await.unwrap();
        assert_eq!(cancelled.status, OrderStatus::Cancelled);
    }
}

#[tokio::test]
async fn should_refuse_cancel_once_preparing_or_later() {
    let owner = Uuid::new_v4();
    for status in [
        OrderStatus::Preparing,
        OrderStatus::OutForDelivery,
        OrderStatus::Delivered,
        OrderStatus::Cancelled,
    ] {
        let order = test_order(owner, status);
        let order_id = order.id;
        let usecase = CancelOrderUseCase {
            repo: MockOrderRepo::new(vec![order]),
        };
        let result = usecase.execute(owner, order_id).await;
        assert!(
            matches!(result, Err(ApiError::CannotCancel)),
            "expected CannotCancel from {status:?}, got {result:?}"
        );
    }
}
