use sea_orm::ActiveValue::{NotSet, Set, Unchanged};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, Condition, ConnectionTrait, EntityTrait, QueryFilter,
    QueryOrder,
};
use serde_json::Value;

use crate::{
    dto::items::{ItemFilter, ItemPayload, ItemQuery},
    entity::items::{ActiveModel as ItemActive, Column as ItemCol, Entity as Items},
    error::{AppError, AppResult},
    models::Item,
    state::AppState,
};

pub async fn get<C: ConnectionTrait>(conn: &C, id: i32) -> AppResult<Option<Item>> {
    tracing::debug!(item_id = id, "looking up item");
    Ok(Items::find_by_id(id).one(conn).await?.map(Item::from))
}

pub async fn all<C: ConnectionTrait>(conn: &C) -> AppResult<Vec<Item>> {
    find_where(conn, Condition::all()).await
}

/// Items belonging to one order. An unknown order simply has none.
pub async fn find_by_order_id<C: ConnectionTrait>(conn: &C, order_id: i32) -> AppResult<Vec<Item>> {
    find_where(conn, Condition::all().add(ItemCol::OrderId.eq(order_id))).await
}

pub async fn find_by_product_id<C: ConnectionTrait>(
    conn: &C,
    product_id: i32,
) -> AppResult<Vec<Item>> {
    find_where(conn, Condition::all().add(ItemCol::ProductId.eq(product_id))).await
}

pub async fn find_by_quantity<C: ConnectionTrait>(conn: &C, quantity: i32) -> AppResult<Vec<Item>> {
    find_where(conn, Condition::all().add(ItemCol::Quantity.eq(quantity))).await
}

pub async fn find_by_price<C: ConnectionTrait>(conn: &C, price: f64) -> AppResult<Vec<Item>> {
    find_where(conn, Condition::all().add(ItemCol::Price.eq(price))).await
}

pub async fn find_by_name<C: ConnectionTrait>(conn: &C, name: &str) -> AppResult<Vec<Item>> {
    find_where(conn, Condition::all().add(ItemCol::Name.eq(name))).await
}

pub async fn find<C: ConnectionTrait>(conn: &C, filter: &ItemFilter) -> AppResult<Vec<Item>> {
    tracing::debug!(?filter, "querying items");
    match filter {
        ItemFilter::OrderId(order_id) => find_by_order_id(conn, *order_id).await,
        ItemFilter::ProductId(product_id) => find_by_product_id(conn, *product_id).await,
        ItemFilter::Quantity(quantity) => find_by_quantity(conn, *quantity).await,
        ItemFilter::Price(price) => find_by_price(conn, *price).await,
        ItemFilter::Name(name) => find_by_name(conn, name).await,
        ItemFilter::All => all(conn).await,
    }
}

async fn find_where<C: ConnectionTrait>(conn: &C, condition: Condition) -> AppResult<Vec<Item>> {
    let items = Items::find()
        .filter(condition)
        .order_by_asc(ItemCol::Id)
        .all(conn)
        .await?
        .into_iter()
        .map(Item::from)
        .collect();
    Ok(items)
}

/// Inserts when `id` is `None`, otherwise overwrites every field of that row.
/// `order_id` is always supplied by the caller, never by the request body.
pub async fn save<C: ConnectionTrait>(
    conn: &C,
    id: Option<i32>,
    order_id: i32,
    payload: &ItemPayload,
) -> AppResult<Item> {
    let mut active = ItemActive {
        id: NotSet,
        order_id: Set(order_id),
        product_id: Set(payload.product_id),
        name: Set(payload.name.clone()),
        quantity: Set(payload.quantity),
        price: Set(payload.price),
    };
    let model = match id {
        Some(id) => {
            active.id = Unchanged(id);
            active.update(conn).await?
        }
        None => active.insert(conn).await?,
    };
    Ok(Item::from(model))
}

pub async fn delete<C: ConnectionTrait>(conn: &C, id: i32) -> AppResult<bool> {
    let result = Items::delete_by_id(id).exec(conn).await?;
    Ok(result.rows_affected > 0)
}

/// Returns the number of items removed.
pub async fn delete_by_order_id<C: ConnectionTrait>(conn: &C, order_id: i32) -> AppResult<u64> {
    let result = Items::delete_many()
        .filter(ItemCol::OrderId.eq(order_id))
        .exec(conn)
        .await?;
    Ok(result.rows_affected)
}

pub async fn remove_all<C: ConnectionTrait>(conn: &C) -> AppResult<()> {
    Items::delete_many().exec(conn).await?;
    Ok(())
}

fn not_found(id: i32) -> AppError {
    AppError::NotFound(format!("Item with id '{id}' was not found."))
}

pub async fn list_items(state: &AppState, query: ItemQuery) -> AppResult<Vec<Item>> {
    let filter = query.filter()?;
    find(&state.orm, &filter).await
}

pub async fn get_item(state: &AppState, id: i32) -> AppResult<Item> {
    get(&state.orm, id).await?.ok_or_else(|| not_found(id))
}

/// Replaces the item's fields and moves it under `order_id` from the URL.
pub async fn update_item(
    state: &AppState,
    order_id: i32,
    item_id: i32,
    data: &Value,
) -> AppResult<Item> {
    if get(&state.orm, item_id).await?.is_none() {
        return Err(not_found(item_id));
    }
    let payload = ItemPayload::from_json(data)?;
    let item = save(&state.orm, Some(item_id), order_id, &payload).await?;
    tracing::info!(order_id, item_id, "item updated");
    Ok(item)
}

pub async fn delete_item(state: &AppState, order_id: i32, item_id: i32) -> AppResult<()> {
    let item = get(&state.orm, item_id)
        .await?
        .ok_or_else(|| not_found(item_id))?;
    if item.order_id != order_id {
        return Err(AppError::NotFound(format!(
            "Item id '{item_id}' has order id '{}' not '{order_id}'.",
            item.order_id
        )));
    }

    delete(&state.orm, item_id).await?;
    tracing::info!(order_id, item_id, "item deleted");
    Ok(())
}
