use axum::{
    body::Bytes,
    extract::{FromRequest, FromRequestParts, RawPathParams, Request},
    http::{HeaderMap, header},
};
use serde_json::{Map, Value};

use crate::{
    error::AppError,
    validation::{RequestInput, Validate, Violation, evaluate},
};

/// Extractor that runs `T`'s rule chains over the path parameters and JSON
/// body, rejecting the request with every violation found before the handler
/// is reached.
#[derive(Debug, Clone)]
pub struct Valid<T>(pub T);

impl<S, T> FromRequest<S> for Valid<T>
where
    S: Send + Sync,
    T: Validate + Send,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let (mut parts, body) = req.into_parts();

        let params = RawPathParams::from_request_parts(&mut parts, state)
            .await?
            .iter()
            .map(|(key, value)| (key.to_string(), value.to_string()))
            .collect();

        let headers = parts.headers.clone();
        let bytes = Bytes::from_request(Request::from_parts(parts, body), state).await?;
        let input = RequestInput::new(params, json_body(&headers, &bytes)?);

        report(evaluate(T::RULES, &input))?;

        T::from_input(&input).map(Valid).ok_or_else(|| {
            AppError::Internal(anyhow::anyhow!(
                "validated input could not be converted"
            ))
        })
    }
}

/// Stop the request when any rule failed; otherwise let it through untouched.
pub fn report(violations: Vec<Violation>) -> Result<(), AppError> {
    if violations.is_empty() {
        return Ok(());
    }
    tracing::debug!(count = violations.len(), "request failed validation");
    Err(AppError::Validation(violations))
}

/// Bodies without a JSON content type, and empty ones, read as `{}`.
fn json_body(headers: &HeaderMap, bytes: &Bytes) -> Result<Value, AppError> {
    if bytes.is_empty() || !is_json(headers) {
        return Ok(Value::Object(Map::new()));
    }
    serde_json::from_slice(bytes).map_err(AppError::MalformedBody)
}

fn is_json(headers: &HeaderMap) -> bool {
    let Some(content_type) = headers
        .get(header::CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
    else {
        return false;
    };

    let essence = content_type
        .split(';')
        .next()
        .unwrap_or_default()
        .trim()
        .to_ascii_lowercase();
    essence.ends_with("/json") || essence.ends_with("+json")
}
