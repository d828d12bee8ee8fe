use axum::{
    Json, Router,
    extract::State,
    http::StatusCode,
    routing::get,
};

use crate::{
    dto::items::{ItemPayload, ItemQuery},
    error::AppResult,
    models::Item,
    response::ErrorBody,
    routes::params::{IdPath, JsonBody, QueryParams},
    services::item_service,
    state::AppState,
};

// Updates and deletes are addressed through the owning order and are
// mounted by the orders router.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_items))
        .route("/query", get(query_items))
        .route("/{item_id}", get(get_item))
}

#[utoipa::path(
    get,
    path = "/items",
    params(
        ("order_id" = Option<i32>, Query, description = "Items of this order"),
        ("product_id" = Option<i32>, Query, description = "Items for this product"),
        ("quantity" = Option<i32>, Query, description = "Items with this quantity"),
        ("price" = Option<f64>, Query, description = "Items with this price"),
        ("name" = Option<String>, Query, description = "Items with exactly this name"),
    ),
    responses(
        (status = 200, description = "All items, or those matching the first given filter", body = [Item]),
        (status = 400, description = "Filter value has the wrong type", body = ErrorBody),
    ),
    tag = "Items"
)]
pub async fn list_items(
    State(state): State<AppState>,
    QueryParams(query): QueryParams<ItemQuery>,
) -> AppResult<Json<Vec<Item>>> {
    let items = item_service::list_items(&state, query).await?;
    Ok(Json(items))
}

#[utoipa::path(
    get,
    path = "/items/query",
    params(
        ("order_id" = Option<i32>, Query, description = "Checked first"),
        ("product_id" = Option<i32>, Query, description = "Checked second"),
        ("quantity" = Option<i32>, Query, description = "Checked third"),
        ("price" = Option<f64>, Query, description = "Checked fourth"),
        ("name" = Option<String>, Query, description = "Checked last, case-sensitive"),
    ),
    responses(
        (status = 200, description = "Items matching the first given filter", body = [Item]),
        (status = 400, description = "Filter value has the wrong type", body = ErrorBody),
    ),
    tag = "Items"
)]
pub async fn query_items(
    state: State<AppState>,
    query: QueryParams<ItemQuery>,
) -> AppResult<Json<Vec<Item>>> {
    list_items(state, query).await
}

#[utoipa::path(
    get,
    path = "/items/{item_id}",
    params(("item_id" = i32, Path, description = "Item ID")),
    responses(
        (status = 200, description = "The item", body = Item),
        (status = 404, description = "Item not found", body = ErrorBody),
    ),
    tag = "Items"
)]
pub async fn get_item(
    State(state): State<AppState>,
    IdPath(item_id): IdPath<i32>,
) -> AppResult<Json<Item>> {
    let item = item_service::get_item(&state, item_id).await?;
    Ok(Json(item))
}

#[utoipa::path(
    put,
    path = "/orders/{order_id}/items/{item_id}",
    params(
        ("order_id" = i32, Path, description = "Order the item is assigned to"),
        ("item_id" = i32, Path, description = "Item ID"),
    ),
    request_body(content = ItemPayload, content_type = "application/json"),
    responses(
        (status = 200, description = "Updated item", body = Item),
        (status = 400, description = "The posted data was not valid", body = ErrorBody),
        (status = 404, description = "Item not found", body = ErrorBody),
        (status = 415, description = "Content-Type is not application/json", body = ErrorBody),
    ),
    tag = "Items"
)]
pub async fn update_item(
    State(state): State<AppState>,
    IdPath((order_id, item_id)): IdPath<(i32, i32)>,
    JsonBody(body): JsonBody,
) -> AppResult<Json<Item>> {
    let item = item_service::update_item(&state, order_id, item_id, &body).await?;
    Ok(Json(item))
}

#[utoipa::path(
    delete,
    path = "/orders/{order_id}/items/{item_id}",
    params(
        ("order_id" = i32, Path, description = "Order ID"),
        ("item_id" = i32, Path, description = "Item ID"),
    ),
    responses(
        (status = 204, description = "Item deleted"),
        (status = 404, description = "Item not found or not part of the order", body = ErrorBody),
    ),
    tag = "Items"
)]
pub async fn delete_item(
    State(state): State<AppState>,
    IdPath((order_id, item_id)): IdPath<(i32, i32)>,
) -> AppResult<StatusCode> {
    item_service::delete_item(&state, order_id, item_id).await?;
    Ok(StatusCode::NO_CONTENT)
}
