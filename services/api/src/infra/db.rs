use anyhow::Context as _;
use chrono::{DateTime, Utc};
use sea_orm::{
    ActiveModelTrait, ActiveValue::Set, ColumnTrait, DatabaseConnection, DatabaseTransaction,
    EntityTrait, QueryFilter, QueryOrder, TransactionTrait,
};
use uuid::Uuid;

use foodoo_api_schema::{order_items, orders, users};
use foodoo_domain::order::{OrderStatus, PaymentMethod};

use crate::domain::repository::{OrderRepository, UserRepository};
use crate::domain::types::{Dob, Order, OrderItem, ProfileChanges, User};
use crate::error::ApiError;

// ── User repository ──────────────────────────────────────────────────────────

#[derive(Clone)]
pub struct DbUserRepository {
    pub db: DatabaseConnection,
}

impl UserRepository for DbUserRepository {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<User>, ApiError> {
        let model = users::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .context("find user by id")?;
        Ok(model.map(user_from_model))
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<User>, ApiError> {
        let model = users::Entity::find()
            .filter(users::Column::Email.eq(email))
            .one(&self.db)
            .await
            .context("find user by email")?;
        Ok(model.map(user_from_model))
    }

    async fn find_by_google_id(&self, google_id: &str) -> Result<Option<User>, ApiError> {
        let model = users::Entity::find()
            .filter(users::Column::GoogleId.eq(google_id))
            .one(&self.db)
            .await
            .context("find user by google id")?;
        Ok(model.map(user_from_model))
    }

    async fn create(&self, user: &User) -> Result<(), ApiError> {
        users::ActiveModel {
            id: Set(user.id),
            google_id: Set(user.google_id.clone()),
            email: Set(user.email.clone()),
            name: Set(user.name.clone()),
            photo: Set(user.photo.clone()),
            password_hash: Set(user.password_hash.clone()),
            first_name: Set(user.first_name.clone()),
            last_name: Set(user.last_name.clone()),
            dob_day: Set(user.dob.day.clone()),
            dob_month: Set(user.dob.month.clone()),
            dob_year: Set(user.dob.year.clone()),
            gender: Set(user.gender.clone()),
            address: Set(user.address.clone()),
            phone: Set(user.phone.clone()),
            created_at: Set(user.created_at),
            updated_at: Set(user.updated_at),
        }
        .insert(&self.db)
        .await
        .context("create user")?;
        Ok(())
    }

    async fn update_profile(
        &self,
        id: Uuid,
        changes: &ProfileChanges,
    ) -> Result<Option<User>, ApiError> {
        let existing = users::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .context("find user for profile update")?;
        if existing.is_none() {
            return Ok(None);
        }

        let mut am = users::ActiveModel {
            id: Set(id),
            ..Default::default()
        };
        if let Some(ref name) = changes.name {
            am.name = Set(name.clone());
        }
        if let Some(ref address) = changes.address {
            am.address = Set(Some(address.clone()));
        }
        if let Some(ref phone) = changes.phone {
            am.phone = Set(Some(phone.clone()));
        }
        if let Some(ref photo) = changes.photo {
            am.photo = Set(Some(photo.clone()));
        }
        am.updated_at = Set(Utc::now());

        let model = am
            .update(&self.db)
            .await
            .context("update user profile")?;
        Ok(Some(user_from_model(model)))
    }
}

fn user_from_model(model: users::Model) -> User {
    User {
        id: model.id,
        google_id: model.google_id,
        email: model.email,
        name: model.name,
        photo: model.photo,
        password_hash: model.password_hash,
        first_name: model.first_name,
        last_name: model.last_name,
        dob: Dob {
            day: model.dob_day,
            month: model.dob_month,
            year: model.dob_year,
        },
        gender: model.gender,
        address: model.address,
        phone: model.phone,
        created_at: model.created_at,
        updated_at: model.updated_at,
    }
}

// ── Order repository ─────────────────────────────────────────────────────────

#[derive(Clone)]
pub struct DbOrderRepository {
    pub db: DatabaseConnection,
}

impl OrderRepository for DbOrderRepository {
    async fn create(&self, order: &Order) -> Result<(), ApiError> {
        self.db
            .transaction::<_, (), sea_orm::DbErr>(|txn| {
                let order = order.clone();
                Box::pin(async move {
                    insert_order(txn, &order).await?;
                    for (position, item) in order.items.iter().enumerate() {
                        insert_order_item(txn, order.id, position as i32, item).await?;
                    }
                    Ok(())
                })
            })
            .await
            .context("create order with items")?;
        Ok(())
    }

    async fn list_by_user(&self, user_id: Uuid) -> Result<Vec<Order>, ApiError> {
        let models = orders::Entity::find()
            .filter(orders::Column::UserId.eq(user_id))
            .order_by_desc(orders::Column::CreatedAt)
            .all(&self.db)
            .await
            .context("list orders by user")?;

        let mut results = Vec::with_capacity(models.len());
        for model in models {
            let items = load_items(&self.db, model.id).await?;
            results.push(order_from_model(model, items)?);
        }
        Ok(results)
    }

    async fn find_for_user(&self, id: Uuid, user_id: Uuid) -> Result<Option<Order>, ApiError> {
        let model = orders::Entity::find_by_id(id)
            .filter(orders::Column::UserId.eq(user_id))
            .one(&self.db)
            .await
            .context("find order for user")?;
        match model {
            Some(model) => {
                let items = load_items(&self.db, model.id).await?;
                Ok(Some(order_from_model(model, items)?))
            }
            None => Ok(None),
        }
    }

    async fn update_status(
        &self,
        id: Uuid,
        user_id: Uuid,
        status: OrderStatus,
        delivered_at: Option<DateTime<Utc>>,
    ) -> Result<Option<Order>, ApiError> {
        let existing = orders::Entity::find_by_id(id)
            .filter(orders::Column::UserId.eq(user_id))
            .one(&self.db)
            .await
            .context("find order for status update")?;
        if existing.is_none() {
            return Ok(None);
        }

        let mut am = orders::ActiveModel {
            id: Set(id),
            status: Set(status.as_str().to_owned()),
            ..Default::default()
        };
        if let Some(ts) = delivered_at {
            am.delivered_at = Set(Some(ts));
        }

        let model = am
            .update(&self.db)
            .await
            .context("update order status")?;
        let items = load_items(&self.db, model.id).await?;
        Ok(Some(order_from_model(model, items)?))
    }
}

async fn insert_order(txn: &DatabaseTransaction, order: &Order) -> Result<(), sea_orm::DbErr> {
    orders::ActiveModel {
        id: Set(order.id),
        user_id: Set(order.user_id),
        total: Set(order.total),
        address: Set(order.address.clone()),
        phone: Set(order.phone.clone()),
        payment_method: Set(order.payment_method.as_str().to_owned()),
        status: Set(order.status.as_str().to_owned()),
        created_at: Set(order.created_at),
        delivered_at: Set(order.delivered_at),
    }
    .insert(txn)
    .await?;
    Ok(())
}

async fn insert_order_item(
    txn: &DatabaseTransaction,
    order_id: Uuid,
    position: i32,
    item: &OrderItem,
) -> Result<(), sea_orm::DbErr> {
    order_items::ActiveModel {
        id: Set(Uuid::new_v4()),
        order_id: Set(order_id),
        restaurant_id: Set(item.restaurant_id.clone()),
        restaurant_name: Set(item.restaurant_name.clone()),
        item_name: Set(item.item_name.clone()),
        quantity: Set(item.quantity),
        price: Set(item.price),
        position: Set(position),
    }
    .insert(txn)
    .await?;
    Ok(())
}

async fn load_items(db: &DatabaseConnection, order_id: Uuid) -> Result<Vec<OrderItem>, ApiError> {
    let models = order_items::Entity::find()
        .filter(order_items::Column::OrderId.eq(order_id))
        .order_by_asc(order_items::Column::Position)
        .all(db)
        .await
        .context("load order items")?;
    Ok(models
        .into_iter()
        .map(|model| OrderItem {
            restaurant_id: model.restaurant_id,
            restaurant_name: model.restaurant_name,
            item_name: model.item_name,
            quantity: model.quantity,
            price: model.price,
        })
        .collect())
}

fn order_from_model(model: orders::Model, items: Vec<OrderItem>) -> Result<Order, ApiError> {
    let status = model
        .status
        .parse::<OrderStatus>()
        .context("order status stored in db")?;
    let payment_method = model
        .payment_method
        .parse::<PaymentMethod>()
        .context("payment method stored in db")?;
    Ok(Order {
        id: model.id,
        user_id: model.user_id,
        items,
        total: model.total,
        address: model.address,
        phone: model.phone,
        payment_method,
        status,
        created_at: model.created_at,
        delivered_at: model.delivered_at,
    })
}
