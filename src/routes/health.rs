use axum::{Json, extract::State, http::HeaderMap};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::{
    error::AppResult,
    response::{ErrorBody, ServiceInfo},
    routes::absolute_url,
    state::AppState,
};

#[derive(Serialize, Deserialize, ToSchema)]
pub struct HealthData {
    pub status: String,
}

#[utoipa::path(
    get,
    path = "/",
    responses(
        (status = 200, description = "Service metadata", body = ServiceInfo),
    ),
    tag = "Health"
)]
pub async fn index(State(state): State<AppState>, headers: HeaderMap) -> Json<ServiceInfo> {
    let paths = vec![
        absolute_url(&state, &headers, "/orders"),
        absolute_url(&state, &headers, "/items"),
    ];
    Json(ServiceInfo::new(paths))
}

#[utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 200, description = "OK", body = HealthData),
        (status = 500, description = "Database unreachable", body = ErrorBody),
    ),
    tag = "Health"
)]
pub async fn health_check(State(state): State<AppState>) -> AppResult<Json<HealthData>> {
    state.orm.ping().await?;

    Ok(Json(HealthData {
        status: "ok".to_string(),
    }))
}
