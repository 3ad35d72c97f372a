//! Extractor for parameters nested under a required key.
//!
//! Write endpoints take their fields wrapped in a resource key:
//!
//! ```json
//! { "book": { "title": "1984", "author_id": 1, "publisher_id": 1 } }
//! ```
//!
//! A body without the key, or with a `null`/empty value under it, is rejected
//! with 400 and `"param is missing or the value is empty: <key>"`.

use axum::{
    body::Bytes,
    extract::{FromRequest, FromRequestParts, Path, Request},
    http::request::Parts,
};
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::error::AppError;

/// The `{id}` path segment, exactly as the client sent it.
///
/// Identifiers are parsed by the services so that a non-numeric id reports
/// the raw text in its 404 message. A segment that cannot be decoded at all
/// is rejected with a JSON 400.
#[derive(Debug)]
pub struct RecordId(pub String);

impl<S> FromRequestParts<S> for RecordId
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(id) = Path::<String>::from_request_parts(parts, state)
            .await
            .map_err(|e| AppError::bad_request(e.body_text()))?;

        Ok(Self(id))
    }
}

/// Parameters that must arrive nested under [`RequiredParam::KEY`].
pub trait RequiredParam: DeserializeOwned {
    const KEY: &'static str;
}

/// Extracts `T` from the JSON body's `T::KEY` member.
#[derive(Debug)]
pub struct Required<T>(pub T);

impl<S, T> FromRequest<S> for Required<T>
where
    S: Send + Sync,
    T: RequiredParam,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let body = Bytes::from_request(req, state)
            .await
            .map_err(|e| AppError::bad_request(e.body_text()))?;

        let value = nested_value(&body, T::KEY)?;

        let params = serde_json::from_value(value)
            .map_err(|e| AppError::bad_request(format!("Invalid value for {}: {}", T::KEY, e)))?;

        Ok(Self(params))
    }
}

/// Pulls the value stored under `key` out of a JSON object body.
fn nested_value(body: &[u8], key: &str) -> Result<Value, AppError> {
    if body.iter().all(u8::is_ascii_whitespace) {
        return Err(AppError::param_missing(key));
    }

    let root: Value = serde_json::from_slice(body)
        .map_err(|e| AppError::bad_request(format!("Malformed JSON body: {e}")))?;

    let value = match root {
        Value::Object(mut members) => members.remove(key),
        _ => None,
    };

    match value {
        Some(value) if !is_blank(&value) => Ok(value),
        _ => Err(AppError::param_missing(key)),
    }
}

fn is_blank(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::String(s) => s.trim().is_empty(),
        Value::Array(items) => items.is_empty(),
        Value::Object(members) => members.is_empty(),
        Value::Bool(_) | Value::Number(_) => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn missing(result: Result<Value, AppError>) -> bool {
        matches!(
            result,
            Err(AppError::BadRequest { ref message })
                if message == "param is missing or the value is empty: book"
        )
    }

    #[test]
    fn test_empty_body_is_missing() {
        assert!(missing(nested_value(b"", "book")));
        assert!(missing(nested_value(b"  \n", "book")));
    }

    #[test]
    fn test_absent_key_is_missing() {
        assert!(missing(nested_value(b"{}", "book")));
        assert!(missing(nested_value(br#"{"author": {"name": "x"}}"#, "book")));
        assert!(missing(nested_value(b"[1, 2]", "book")));
    }

    #[test]
    fn test_empty_values_are_missing() {
        assert!(missing(nested_value(br#"{"book": null}"#, "book")));
        assert!(missing(nested_value(br#"{"book": {}}"#, "book")));
        assert!(missing(nested_value(br#"{"book": ""}"#, "book")));
        assert!(missing(nested_value(br#"{"book": []}"#, "book")));
    }

    #[test]
    fn test_present_value_is_returned() {
        let value = nested_value(br#"{"book": {"title": "1984"}, "page": 1}"#, "book").unwrap();
        assert_eq!(value, json!({"title": "1984"}));
    }

    #[test]
    fn test_malformed_json_is_bad_request() {
        let err = nested_value(b"{\"book\": ", "book").unwrap_err();
        assert!(matches!(err, AppError::BadRequest { .. }));
        assert!(err.to_string().starts_with("Malformed JSON body"));
    }
}
