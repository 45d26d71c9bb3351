//! JSON body extractor with the API's error body.
//!
//! Axum's own `Json` rejects malformed bodies with a plain-text response and,
//! for a missing content type, a 415. `ApiJson<T>` reports every body problem
//! as 400 `Invalid JSON: ...` in the regular error envelope instead. Field
//! presence and field rules are checked by the services afterwards.

use axum::{
    async_trait,
    extract::{rejection::JsonRejection, FromRequest, Request},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use hardware_core::ErrorResponse;
use serde::de::DeserializeOwned;
use tracing::debug;

/// JSON extractor whose rejection uses [`ErrorResponse`].
#[derive(Debug, Clone, Copy, Default)]
pub struct ApiJson<T>(pub T);

impl<T> std::ops::Deref for ApiJson<T> {
    type Target = T;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

/// Rejection for [`ApiJson`].
#[derive(Debug)]
pub struct InvalidJson(pub JsonRejection);

impl IntoResponse for InvalidJson {
    fn into_response(self) -> Response {
        let body = ErrorResponse {
            error: format!("Invalid JSON: {}", self.0.body_text()),
            code: "INVALID_JSON".to_string(),
            details: None,
        };
        (StatusCode::BAD_REQUEST, Json(body)).into_response()
    }
}

#[async_trait]
impl<T, S> FromRequest<S> for ApiJson<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = InvalidJson;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state).await.map_err(|rejection| {
            debug!("Rejected request body: {}", rejection.body_text());
            InvalidJson(rejection)
        })?;
        Ok(ApiJson(value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::header::CONTENT_TYPE;
    use serde::Deserialize;

    #[derive(Debug, Deserialize)]
    struct Payload {
        name: Option<String>,
    }

    fn json_request(body: &'static str) -> Request {
        Request::builder()
            .method("POST")
            .uri("/")
            .header(CONTENT_TYPE, "application/json")
            .body(Body::from(body))
            .unwrap()
    }

    #[tokio::test]
    async fn test_accepts_valid_body() {
        let ApiJson(payload) = ApiJson::<Payload>::from_request(json_request(r#"{"name": "saw"}"#), &())
            .await
            .unwrap();
        assert_eq!(payload.name.as_deref(), Some("saw"));
    }

    #[tokio::test]
    async fn test_malformed_body_is_bad_request() {
        let rejection = ApiJson::<Payload>::from_request(json_request("{not json"), &())
            .await
            .unwrap_err();
        assert_eq!(rejection.into_response().status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_missing_content_type_is_bad_request() {
        let request = Request::builder()
            .method("POST")
            .uri("/")
            .body(Body::from(r#"{"name": "saw"}"#))
            .unwrap();
        let rejection = ApiJson::<Payload>::from_request(request, &()).await.unwrap_err();
        assert_eq!(rejection.into_response().status(), StatusCode::BAD_REQUEST);
    }
}
