use axum::{
    Json, Router,
    extract::State,
    http::{HeaderMap, StatusCode, header},
    response::IntoResponse,
    routing::{delete, get, put},
};

use crate::{
    dto::orders::{NewOrder, OrderPayload, OrderQuery, OrderWithItems},
    error::AppResult,
    models::{Item, Order},
    response::ErrorBody,
    routes::{
        absolute_url, items,
        params::{IdPath, JsonBody, QueryParams},
    },
    services::order_service,
    state::AppState,
};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_orders).post(create_order))
        .route("/query", get(query_orders))
        .route("/reset", delete(reset_orders))
        .route(
            "/{order_id}",
            get(get_order).put(update_order).delete(delete_order),
        )
        .route("/{order_id}/cancel", put(cancel_order))
        .route("/{order_id}/items", get(list_order_items))
        .route(
            "/{order_id}/items/{item_id}",
            put(items::update_item).delete(items::delete_item),
        )
}

#[utoipa::path(
    post,
    path = "/orders",
    request_body(content = NewOrder, content_type = "application/json"),
    responses(
        (status = 201, description = "Order created with its items", body = OrderWithItems,
            headers(("Location" = String, description = "URL of the new order"))),
        (status = 400, description = "The posted data was not valid", body = ErrorBody),
        (status = 415, description = "Content-Type is not application/json", body = ErrorBody),
    ),
    tag = "Orders"
)]
pub async fn create_order(
    State(state): State<AppState>,
    headers: HeaderMap,
    JsonBody(body): JsonBody,
) -> AppResult<impl IntoResponse> {
    let created = order_service::create_order(&state, &body).await?;
    let location = absolute_url(&state, &headers, &format!("/orders/{}", created.order.id));
    Ok((StatusCode::CREATED, [(header::LOCATION, location)], Json(created)))
}

#[utoipa::path(
    get,
    path = "/orders",
    params(
        ("customer_id" = Option<i32>, Query, description = "Orders placed by this customer"),
        ("status" = Option<String>, Query, description = "Orders with this status"),
        ("date" = Option<String>, Query, description = "Orders placed at YYYY-MM-DDTHH:MM"),
    ),
    responses(
        (status = 200, description = "All orders, or those matching the first given filter", body = [Order]),
        (status = 400, description = "Filter value has the wrong type", body = ErrorBody),
    ),
    tag = "Orders"
)]
pub async fn list_orders(
    State(state): State<AppState>,
    QueryParams(query): QueryParams<OrderQuery>,
) -> AppResult<Json<Vec<Order>>> {
    let orders = order_service::list_orders(&state, query).await?;
    Ok(Json(orders))
}

#[utoipa::path(
    get,
    path = "/orders/query",
    params(
        ("customer_id" = Option<i32>, Query, description = "Checked first"),
        ("status" = Option<String>, Query, description = "Checked second"),
        ("date" = Option<String>, Query, description = "Checked last, YYYY-MM-DDTHH:MM"),
    ),
    responses(
        (status = 200, description = "Orders matching the first given filter", body = [Order]),
        (status = 400, description = "Filter value has the wrong type", body = ErrorBody),
    ),
    tag = "Orders"
)]
pub async fn query_orders(
    state: State<AppState>,
    query: QueryParams<OrderQuery>,
) -> AppResult<Json<Vec<Order>>> {
    list_orders(state, query).await
}

#[utoipa::path(
    get,
    path = "/orders/{order_id}",
    params(("order_id" = i32, Path, description = "Order ID")),
    responses(
        (status = 200, description = "The order", body = Order),
        (status = 404, description = "Order not found", body = ErrorBody),
    ),
    tag = "Orders"
)]
pub async fn get_order(
    State(state): State<AppState>,
    IdPath(order_id): IdPath<i32>,
) -> AppResult<Json<Order>> {
    let order = order_service::get_order(&state, order_id).await?;
    Ok(Json(order))
}

#[utoipa::path(
    get,
    path = "/orders/{order_id}/items",
    params(("order_id" = i32, Path, description = "Order ID")),
    responses(
        (status = 200, description = "Items of the order, empty when there are none", body = [Item]),
    ),
    tag = "Orders"
)]
pub async fn list_order_items(
    State(state): State<AppState>,
    IdPath(order_id): IdPath<i32>,
) -> AppResult<Json<Vec<Item>>> {
    let items = order_service::list_order_items(&state, order_id).await?;
    Ok(Json(items))
}

#[utoipa::path(
    put,
    path = "/orders/{order_id}",
    params(("order_id" = i32, Path, description = "Order ID")),
    request_body(content = OrderPayload, content_type = "application/json"),
    responses(
        (status = 200, description = "Updated order", body = Order),
        (status = 400, description = "The posted data was not valid", body = ErrorBody),
        (status = 404, description = "Order not found", body = ErrorBody),
        (status = 415, description = "Content-Type is not application/json", body = ErrorBody),
    ),
    tag = "Orders"
)]
pub async fn update_order(
    State(state): State<AppState>,
    IdPath(order_id): IdPath<i32>,
    JsonBody(body): JsonBody,
) -> AppResult<Json<Order>> {
    let order = order_service::update_order(&state, order_id, &body).await?;
    Ok(Json(order))
}

#[utoipa::path(
    put,
    path = "/orders/{order_id}/cancel",
    params(("order_id" = i32, Path, description = "Order ID")),
    responses(
        (status = 200, description = "Order with status \"cancelled\"", body = Order),
        (status = 404, description = "Order not found", body = ErrorBody),
    ),
    tag = "Orders"
)]
pub async fn cancel_order(
    State(state): State<AppState>,
    IdPath(order_id): IdPath<i32>,
) -> AppResult<Json<Order>> {
    let order = order_service::cancel_order(&state, order_id).await?;
    Ok(Json(order))
}

#[utoipa::path(
    delete,
    path = "/orders/{order_id}",
    params(("order_id" = i32, Path, description = "Order ID")),
    responses(
        (status = 204, description = "Order and its items deleted, or there was no such order"),
    ),
    tag = "Orders"
)]
pub async fn delete_order(
    State(state): State<AppState>,
    IdPath(order_id): IdPath<i32>,
) -> AppResult<StatusCode> {
    order_service::delete_order(&state, order_id).await?;
    Ok(StatusCode::NO_CONTENT)
}

#[utoipa::path(
    delete,
    path = "/orders/reset",
    responses(
        (status = 204, description = "Every order and item removed"),
    ),
    tag = "Orders"
)]
pub async fn reset_orders(State(state): State<AppState>) -> AppResult<StatusCode> {
    order_service::reset(&state).await?;
    Ok(StatusCode::NO_CONTENT)
}
