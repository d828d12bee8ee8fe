use std::any::Any;

use axum::{
    Router,
    http::{HeaderMap, StatusCode, Uri, header},
    middleware,
    response::{IntoResponse, Response},
    routing::get,
};
use tower_http::{catch_panic::CatchPanicLayer, limit::RequestBodyLimitLayer};

use crate::{error::AppError, state::AppState};

pub mod doc;
pub mod health;
pub mod items;
pub mod orders;
pub mod params;

/// Largest request body accepted, in bytes.
pub const MAX_BODY_BYTES: usize = 1024 * 1024;

// Build the API router without binding state; it will be provided at the top level.
pub fn create_api_router() -> Router<AppState> {
    Router::new()
        .nest("/orders", orders::router())
        .nest("/items", items::router())
}

/// The complete application with every error path rendered as JSON.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(health::index))
        .route("/health", get(health::health_check))
        .merge(create_api_router())
        .merge(doc::docs_router())
        .fallback(not_found)
        .layer(RequestBodyLimitLayer::new(MAX_BODY_BYTES))
        .layer(middleware::map_response(json_framework_errors))
        .layer(CatchPanicLayer::custom(internal_error_from_panic))
        .with_state(state)
}

/// `APP_PUBLIC_URL` when configured, otherwise `http://<Host>`.
pub(crate) fn absolute_url(state: &AppState, headers: &HeaderMap, path: &str) -> String {
    let base = match &state.public_url {
        Some(url) => url.clone(),
        None => {
            let host = headers
                .get(header::HOST)
                .and_then(|value| value.to_str().ok())
                .unwrap_or("localhost");
            format!("http://{host}")
        }
    };
    format!("{base}{path}")
}

async fn not_found(uri: Uri) -> AppError {
    AppError::NotFound(format!(
        "The requested URL {} was not found on the server.",
        uri.path()
    ))
}

// Axum answers a known path with an unknown method with an empty 405, and
// the body limit layer rejects a large Content-Length with a plain-text 413.
async fn json_framework_errors(response: Response) -> Response {
    let is_json = response
        .headers()
        .get(header::CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .is_some_and(|value| value.starts_with(params::JSON_MEDIA_TYPE));
    if is_json {
        return response;
    }

    match response.status() {
        StatusCode::METHOD_NOT_ALLOWED => {
            let allow = response.headers().get(header::ALLOW).cloned();
            let mut json = AppError::MethodNotAllowed(
                "The method is not allowed for the requested URL.".to_string(),
            )
            .into_response();
            if let Some(allow) = allow {
                json.headers_mut().insert(header::ALLOW, allow);
            }
            json
        }
        StatusCode::PAYLOAD_TOO_LARGE => {
            AppError::PayloadTooLarge(too_large_message()).into_response()
        }
        _ => response,
    }
}

pub(crate) fn too_large_message() -> String {
    format!("The request body exceeds the limit of {MAX_BODY_BYTES} bytes.")
}

fn internal_error_from_panic(err: Box<dyn Any + Send + 'static>) -> Response {
    let detail = if let Some(s) = err.downcast_ref::<String>() {
        s.clone()
    } else if let Some(s) = err.downcast_ref::<&str>() {
        s.to_string()
    } else {
        "handler panicked".to_string()
    };
    AppError::Internal(anyhow::anyhow!(detail)).into_response()
}
