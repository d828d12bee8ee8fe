#![allow(dead_code)]

use axum::{
    Router,
    body::Body,
    http::{HeaderMap, Request, StatusCode, header},
};
use http_body_util::BodyExt;
use orders_service::{
    db::{create_orm_conn, run_migrations},
    routes::create_router,
    state::AppState,
};
use serde_json::{Value, json};
use tower::ServiceExt;

/// Fresh in-memory database with the schema applied.
pub async fn setup_state() -> anyhow::Result<AppState> {
    let orm = create_orm_conn("sqlite::memory:").await?;
    run_migrations(&orm).await?;
    Ok(AppState::new(orm))
}

pub struct TestApp {
    pub state: AppState,
    router: Router,
}

pub struct TestResponse {
    pub status: StatusCode,
    pub headers: HeaderMap,
    pub body: Value,
}

impl TestApp {
    pub async fn new() -> anyhow::Result<Self> {
        let state = setup_state().await?;
        Ok(Self {
            router: create_router(state.clone()),
            state,
        })
    }

    pub async fn request(
        &self,
        method: &str,
        uri: &str,
        content_type: Option<&str>,
        body: Option<String>,
    ) -> anyhow::Result<TestResponse> {
        let mut builder = Request::builder().method(method).uri(uri);
        if let Some(content_type) = content_type {
            builder = builder.header(header::CONTENT_TYPE, content_type);
        }
        let request = builder.body(body.map(Body::from).unwrap_or_else(Body::empty))?;

        let response = self.router.clone().oneshot(request).await?;
        let status = response.status();
        let headers = response.headers().clone();
        let bytes = response.into_body().collect().await?.to_bytes();
        let body = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes)?
        };

        Ok(TestResponse {
            status,
            headers,
            body,
        })
    }

    pub async fn get(&self, uri: &str) -> anyhow::Result<TestResponse> {
        self.request("GET", uri, None, None).await
    }

    pub async fn delete(&self, uri: &str) -> anyhow::Result<TestResponse> {
        self.request("DELETE", uri, None, None).await
    }

    pub async fn post_json(&self, uri: &str, body: &Value) -> anyhow::Result<TestResponse> {
        self.request("POST", uri, Some("application/json"), Some(body.to_string()))
            .await
    }

    pub async fn put_json(&self, uri: &str, body: &Value) -> anyhow::Result<TestResponse> {
        self.request("PUT", uri, Some("application/json"), Some(body.to_string()))
            .await
    }

    /// Creates an order through the API and returns the 201 body.
    pub async fn create_order(&self, body: &Value) -> anyhow::Result<Value> {
        let resp = self.post_json("/orders", body).await?;
        assert_eq!(resp.status, StatusCode::CREATED, "create failed: {}", resp.body);
        Ok(resp.body)
    }
}

pub fn order_body(customer_id: i32, date: &str, status: &str, items: Value) -> Value {
    json!({
        "customer_id": customer_id,
        "date": date,
        "status": status,
        "items": items,
    })
}

pub fn item_body(product_id: i32, name: &str, quantity: i32, price: f64) -> Value {
    json!({
        "product_id": product_id,
        "name": name,
        "quantity": quantity,
        "price": price,
    })
}

pub fn id_of(value: &Value) -> i64 {
    value["id"].as_i64().expect("record id")
}
