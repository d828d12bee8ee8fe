use sea_orm::ActiveValue::{NotSet, Set, Unchanged};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, Condition, ConnectionTrait, EntityTrait, QueryFilter,
    QueryOrder, TransactionTrait,
};
use serde_json::Value;

use crate::{
    dto::orders::{NewOrder, OrderFilter, OrderPayload, OrderQuery, OrderWithItems},
    entity::orders::{ActiveModel as OrderActive, Column as OrderCol, Entity as Orders},
    error::{AppError, AppResult},
    models::{Item, Order},
    services::item_service,
    state::AppState,
};

pub async fn get<C: ConnectionTrait>(conn: &C, id: i32) -> AppResult<Option<Order>> {
    tracing::debug!(order_id = id, "looking up order");
    Ok(Orders::find_by_id(id).one(conn).await?.map(Order::from))
}

pub async fn all<C: ConnectionTrait>(conn: &C) -> AppResult<Vec<Order>> {
    find_where(conn, Condition::all()).await
}

pub async fn find_by_customer_id<C: ConnectionTrait>(
    conn: &C,
    customer_id: i32,
) -> AppResult<Vec<Order>> {
    find_where(conn, Condition::all().add(OrderCol::CustomerId.eq(customer_id))).await
}

pub async fn find_by_status<C: ConnectionTrait>(conn: &C, status: &str) -> AppResult<Vec<Order>> {
    find_where(conn, Condition::all().add(OrderCol::Status.eq(status))).await
}

pub async fn find_by_date<C: ConnectionTrait>(
    conn: &C,
    date: chrono::NaiveDateTime,
) -> AppResult<Vec<Order>> {
    find_where(conn, Condition::all().add(OrderCol::Date.eq(date))).await
}

pub async fn find<C: ConnectionTrait>(conn: &C, filter: &OrderFilter) -> AppResult<Vec<Order>> {
    tracing::debug!(?filter, "querying orders");
    match filter {
        OrderFilter::CustomerId(customer_id) => find_by_customer_id(conn, *customer_id).await,
        OrderFilter::Status(status) => find_by_status(conn, status).await,
        OrderFilter::Date(date) => find_by_date(conn, *date).await,
        OrderFilter::All => all(conn).await,
    }
}

async fn find_where<C: ConnectionTrait>(conn: &C, condition: Condition) -> AppResult<Vec<Order>> {
    let orders = Orders::find()
        .filter(condition)
        .order_by_asc(OrderCol::Id)
        .all(conn)
        .await?
        .into_iter()
        .map(Order::from)
        .collect();
    Ok(orders)
}

/// Inserts when `id` is `None`, otherwise overwrites every field of that row.
pub async fn save<C: ConnectionTrait>(
    conn: &C,
    id: Option<i32>,
    payload: &OrderPayload,
) -> AppResult<Order> {
    let mut active = OrderActive {
        id: NotSet,
        customer_id: Set(payload.customer_id),
        date: Set(payload.date),
        status: Set(payload.status.clone()),
    };
    let model = match id {
        Some(id) => {
            active.id = Unchanged(id);
            active.update(conn).await?
        }
        None => active.insert(conn).await?,
    };
    Ok(Order::from(model))
}

/// Removes the order's items, then the order. Returns whether an order row
/// was removed.
pub async fn delete<C: ConnectionTrait>(conn: &C, id: i32) -> AppResult<bool> {
    let items = item_service::delete_by_order_id(conn, id).await?;
    let result = Orders::delete_by_id(id).exec(conn).await?;
    tracing::debug!(order_id = id, items, "deleted order");
    Ok(result.rows_affected > 0)
}

pub async fn remove_all<C: ConnectionTrait>(conn: &C) -> AppResult<()> {
    item_service::remove_all(conn).await?;
    Orders::delete_many().exec(conn).await?;
    Ok(())
}

fn not_found(id: i32) -> AppError {
    AppError::NotFound(format!("Order with id '{id}' was not found."))
}

pub async fn list_orders(state: &AppState, query: OrderQuery) -> AppResult<Vec<Order>> {
    let filter = query.filter()?;
    find(&state.orm, &filter).await
}

pub async fn get_order(state: &AppState, id: i32) -> AppResult<Order> {
    get(&state.orm, id).await?.ok_or_else(|| not_found(id))
}

pub async fn list_order_items(state: &AppState, id: i32) -> AppResult<Vec<Item>> {
    item_service::find_by_order_id(&state.orm, id).await
}

/// Creates the order and all of its items in one transaction. The payload
/// is validated in full first, so a bad item leaves nothing behind.
pub async fn create_order(state: &AppState, data: &Value) -> AppResult<OrderWithItems> {
    let new_order = NewOrder::from_json(data)?;

    let txn = state.orm.begin().await?;
    let order = save(&txn, None, &new_order.order).await?;
    let mut items = Vec::with_capacity(new_order.items.len());
    for payload in &new_order.items {
        items.push(item_service::save(&txn, None, order.id, payload).await?);
    }
    txn.commit().await?;

    tracing::info!(order_id = order.id, items = items.len(), "order created");
    Ok(OrderWithItems { order, items })
}

pub async fn update_order(state: &AppState, id: i32, data: &Value) -> AppResult<Order> {
    if get(&state.orm, id).await?.is_none() {
        return Err(not_found(id));
    }
    let payload = OrderPayload::from_json(data)?;
    let order = save(&state.orm, Some(id), &payload).await?;
    tracing::info!(order_id = id, "order updated");
    Ok(order)
}

pub async fn cancel_order(state: &AppState, id: i32) -> AppResult<Order> {
    let existing = Orders::find_by_id(id)
        .one(&state.orm)
        .await?
        .ok_or_else(|| not_found(id))?;

    let mut active: OrderActive = existing.into();
    active.status = Set("cancelled".into());
    let order = active.update(&state.orm).await?;

    tracing::info!(order_id = id, "order cancelled");
    Ok(Order::from(order))
}

/// Idempotent: deleting an absent order succeeds.
pub async fn delete_order(state: &AppState, id: i32) -> AppResult<()> {
    let txn = state.orm.begin().await?;
    let deleted = delete(&txn, id).await?;
    txn.commit().await?;

    if deleted {
        tracing::info!(order_id = id, "order deleted");
    }
    Ok(())
}

pub async fn reset(state: &AppState) -> AppResult<()> {
    remove_all(&state.orm).await?;
    tracing::warn!("all orders and items removed");
    Ok(())
}
