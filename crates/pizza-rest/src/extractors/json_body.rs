//! Lenient JSON body extractor.
//!
//! Unlike `axum::Json`, [`JsonBody`] does not look at `Content-Type` and
//! only decodes the first JSON value in the body; anything after it is
//! ignored. An empty body is a decode error.
//!
//! Decoding is forgiving in the same places the existing clients rely on:
//! a `null` body or field leaves the zero value in place, and object keys
//! match regardless of case.

use crate::responses::AppError;
use axum::{
    async_trait,
    body::Bytes,
    extract::{FromRequest, Request},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use pizza_core::{PizzaError, PizzaResult};
use serde::de::DeserializeOwned;
use serde_json::{Map, Value};

/// JSON extractor that rejects with a plain-text body.
///
/// Decode failures are 400. Body read failures keep their own status, so an
/// oversized body is 413.
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonBody<T>(pub T);

#[async_trait]
impl<T, S> FromRequest<S> for JsonBody<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = Response;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let bytes = Bytes::from_request(req, state).await.map_err(|rejection| {
            if rejection.status() == StatusCode::BAD_REQUEST {
                AppError(PizzaError::decode(rejection.body_text())).into_response()
            } else {
                rejection.into_response()
            }
        })?;

        decode_first(&bytes)
            .map(JsonBody)
            .map_err(|e| AppError(e).into_response())
    }
}

/// Decodes the first JSON value of `bytes`.
pub fn decode_first<T: DeserializeOwned>(bytes: &[u8]) -> PizzaResult<T> {
    let mut values = serde_json::Deserializer::from_slice(bytes).into_iter::<Value>();

    let value = match values.next() {
        Some(Ok(value)) => value,
        Some(Err(e)) => return Err(PizzaError::decode(e.to_string())),
        None => return Err(PizzaError::decode("EOF")),
    };

    serde_json::from_value(normalize(value)).map_err(|e| PizzaError::decode(e.to_string()))
}

/// Drops `null` members and lowercases keys; a top-level `null` is `{}`.
fn normalize(value: Value) -> Value {
    match value {
        Value::Null => Value::Object(Map::new()),
        Value::Object(fields) => Value::Object(
            fields
                .into_iter()
                .filter(|(_, v)| !v.is_null())
                .map(|(k, v)| (k.to_lowercase(), v))
                .collect(),
        ),
        other => other,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;

    #[derive(Debug, Default, Deserialize, PartialEq)]
    #[serde(default)]
    struct Credentials {
        login: String,
        phone: i64,
    }

    #[test]
    fn test_decode_object() {
        let credentials: Credentials = decode_first(br#"{"login":"alice","phone":5}"#).unwrap();
        assert_eq!(
            credentials,
            Credentials {
                login: "alice".to_string(),
                phone: 5
            }
        );
    }

    #[test]
    fn test_trailing_bytes_ignored() {
        let credentials: Credentials =
            decode_first(br#"{"login":"alice"} {"login":"bob"} garbage"#).unwrap();
        assert_eq!(credentials.login, "alice");
    }

    #[test]
    fn test_empty_body_is_eof() {
        let err = decode_first::<Credentials>(b"").unwrap_err();
        assert_eq!(err.to_string(), "EOF");
        assert_eq!(decode_first::<Credentials>(b"  \n").unwrap_err().status_code(), 400);
    }

    #[test]
    fn test_syntax_error() {
        let err = decode_first::<Credentials>(br#"{"login":"#).unwrap_err();
        assert!(matches!(err, PizzaError::Decode(_)));
    }

    #[test]
    fn test_type_error() {
        let err = decode_first::<Credentials>(br#"{"phone":"555"}"#).unwrap_err();
        assert!(matches!(err, PizzaError::Decode(_)));
    }

    #[test]
    fn test_null_fields_keep_zero_values() {
        let credentials: Credentials = decode_first(br#"{"login":null,"phone":null}"#).unwrap();
        assert_eq!(credentials, Credentials::default());

        let credentials: Credentials =
            decode_first(br#"{"login":"alice","phone":null}"#).unwrap();
        assert_eq!(credentials.login, "alice");
        assert_eq!(credentials.phone, 0);
    }

    #[test]
    fn test_null_body_is_all_defaults() {
        let credentials: Credentials = decode_first(b"null").unwrap();
        assert_eq!(credentials, Credentials::default());
    }

    #[test]
    fn test_keys_match_any_case() {
        let credentials: Credentials = decode_first(br#"{"LOGIN":"alice","Phone":7}"#).unwrap();
        assert_eq!(
            credentials,
            Credentials {
                login: "alice".to_string(),
                phone: 7
            }
        );
    }

    #[test]
    fn test_non_object_body_rejected() {
        let err = decode_first::<Credentials>(b"[1,2]").unwrap_err();
        assert!(matches!(err, PizzaError::Decode(_)));
        let err = decode_first::<Credentials>(b"42").unwrap_err();
        assert!(matches!(err, PizzaError::Decode(_)));
    }
}
