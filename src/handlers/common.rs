use crate::errors::ServiceError;
use axum::{
    extract::{FromRequest, Request},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{de::DeserializeOwned, Serialize};

/// Standard success response
pub fn success_response<T: Serialize>(data: T) -> Response {
    (StatusCode::OK, Json(data)).into_response()
}

/// Standard created response
pub fn created_response<T: Serialize>(data: T) -> Response {
    (StatusCode::CREATED, Json(data)).into_response()
}

/// JSON body extractor whose rejections use the API error body.
///
/// Malformed JSON, a missing content type, missing fields and mistyped fields all become
/// `400 {"message": "Invalid request body", "error": ...}`.
#[derive(Debug, Clone, Copy, Default)]
pub struct ApiJson<T>(pub T);

#[axum::async_trait]
impl<S, T> FromRequest<S> for ApiJson<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = ServiceError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        match Json::<T>::from_request(req, state).await {
            Ok(Json(value)) => Ok(ApiJson(value)),
            Err(rejection) => Err(ServiceError::BadRequest(rejection.body_text())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{body::Body, routing::post, Router};
    use serde::Deserialize;
    use tower::ServiceExt;

    #[derive(Deserialize)]
    struct Payload {
        #[allow(dead_code)]
        name: String,
    }

    async fn accept(ApiJson(_payload): ApiJson<Payload>) -> StatusCode {
        StatusCode::NO_CONTENT
    }

    async fn send(body: &'static str, content_type: Option<&str>) -> StatusCode {
        let mut builder = axum::http::Request::builder().method("POST").uri("/");
        if let Some(ct) = content_type {
            builder = builder.header("content-type", ct);
        }
        Router::new()
            .route("/", post(accept))
            .oneshot(builder.body(Body::from(body)).unwrap())
            .await
            .unwrap()
            .status()
    }

    #[tokio::test]
    async fn rejections_become_bad_request() {
        assert_eq!(send(r#"{"name":"x"}"#, Some("application/json")).await, StatusCode::NO_CONTENT);
        assert_eq!(send("{not json", Some("application/json")).await, StatusCode::BAD_REQUEST);
        assert_eq!(send(r#"{"other":1}"#, Some("application/json")).await, StatusCode::BAD_REQUEST);
        assert_eq!(send(r#"{"name":"x"}"#, None).await, StatusCode::BAD_REQUEST);
    }
}
