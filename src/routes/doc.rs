use axum::{Json, Router, routing::get};
use utoipa::{OpenApi, openapi::OpenApi as OpenApiSpec};
use utoipa_scalar::{Scalar, Servable};

use crate::{
    dto::{
        items::ItemPayload,
        orders::{NewOrder, OrderPayload, OrderWithItems},
    },
    models::{Item, Order},
    response::{ErrorBody, ServiceInfo},
    routes::{health, items, orders},
    state::AppState,
};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Orders Microservice",
        version = "1.0.0",
        description = "This is a microservice for orders."
    ),
    paths(
        health::index,
        health::health_check,
        orders::create_order,
        orders::list_orders,
        orders::query_orders,
        orders::get_order,
        orders::list_order_items,
        orders::update_order,
        orders::cancel_order,
        orders::delete_order,
        orders::reset_orders,
        items::list_items,
        items::query_items,
        items::get_item,
        items::update_item,
        items::delete_item
    ),
    components(
        schemas(
            Order,
            Item,
            OrderPayload,
            ItemPayload,
            NewOrder,
            OrderWithItems,
            ErrorBody,
            ServiceInfo,
            health::HealthData
        )
    ),
    tags(
        (name = "Health", description = "Service metadata and health"),
        (name = "Orders", description = "Order endpoints"),
        (name = "Items", description = "Item endpoints"),
    )
)]
pub struct ApiDoc;

/// Scalar UI at `/docs` and the raw document at `/v1/spec`.
pub fn docs_router() -> Router<AppState> {
    Router::new()
        .merge(Scalar::with_url("/docs", ApiDoc::openapi()))
        .route("/v1/spec", get(openapi_spec))
}

async fn openapi_spec() -> Json<OpenApiSpec> {
    Json(ApiDoc::openapi())
}
