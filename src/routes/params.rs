use axum::{
    body::Bytes,
    extract::{FromRequest, FromRequestParts, Path, Query, Request},
    http::{HeaderMap, StatusCode, header, request::Parts},
};
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::error::{AppError, AppResult};

pub const JSON_MEDIA_TYPE: &str = "application/json";

/// Integer path parameters. A segment that does not parse is reported as a
/// missing resource rather than a bad request.
#[derive(Debug)]
pub struct IdPath<T>(pub T);

impl<S, T> FromRequestParts<S> for IdPath<T>
where
    T: DeserializeOwned + Send,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        match Path::<T>::from_request_parts(parts, state).await {
            Ok(Path(value)) => Ok(Self(value)),
            Err(_) => Err(AppError::NotFound(format!(
                "The requested URL {} was not found on the server.",
                parts.uri.path()
            ))),
        }
    }
}

/// Query string filters. Rejections become JSON 400s.
#[derive(Debug)]
pub struct QueryParams<T>(pub T);

impl<S, T> FromRequestParts<S> for QueryParams<T>
where
    T: DeserializeOwned + Send,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Query(value) = Query::<T>::from_request_parts(parts, state)
            .await
            .map_err(|err| AppError::Validation(err.body_text()))?;
        Ok(Self(value))
    }
}

/// A JSON request body. Checks the media type before reading anything.
#[derive(Debug)]
pub struct JsonBody(pub Value);

impl<S> FromRequest<S> for JsonBody
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        check_content_type(req.headers())?;

        let bytes = Bytes::from_request(req, state).await.map_err(|err| {
            if err.status() == StatusCode::PAYLOAD_TOO_LARGE {
                AppError::PayloadTooLarge(super::too_large_message())
            } else {
                AppError::Validation(err.body_text())
            }
        })?;
        let value = serde_json::from_slice(&bytes).map_err(|err| {
            AppError::Validation(format!("The request body is not valid JSON: {err}"))
        })?;

        Ok(Self(value))
    }
}

/// Compares only the media type essence, so `application/json; charset=utf-8`
/// is accepted.
pub fn check_content_type(headers: &HeaderMap) -> AppResult<()> {
    let content_type = headers
        .get(header::CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .unwrap_or("");
    let essence = content_type.split(';').next().unwrap_or("").trim();
    if essence.eq_ignore_ascii_case(JSON_MEDIA_TYPE) {
        return Ok(());
    }

    Err(AppError::UnsupportedMediaType(format!(
        "Content-Type must be {JSON_MEDIA_TYPE}"
    )))
}
