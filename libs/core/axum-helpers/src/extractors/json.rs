//! JSON body and query extractors that reject with [`AppError`].
//!
//! The stock `Json` and `Query` extractors answer decode failures with plain
//! text. These wrappers keep the status axum picks (400/415/422) but render
//! it as an [`ErrorResponse`](crate::errors::ErrorResponse).

use crate::errors::AppError;
use axum::{
    extract::{FromRequest, FromRequestParts, Query, Request},
    http::request::Parts,
};
use serde::de::DeserializeOwned;

/// `axum::Json` with an [`AppError`] rejection.
///
/// # Example
/// ```ignore
/// use axum_helpers::extractors::AppJson;
///
/// async fn create(AppJson(body): AppJson<CreateLogEvent>) { /* ... */ }
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct AppJson<T>(pub T);

impl<T, S> FromRequest<S> for AppJson<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let axum::Json(value) = axum::Json::<T>::from_request(req, state).await?;
        Ok(Self(value))
    }
}

/// `axum::extract::Query` with an [`AppError`] rejection.
#[derive(Debug, Clone, Copy, Default)]
pub struct AppQuery<T>(pub T);

impl<T, S> FromRequestParts<S> for AppQuery<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Query(value) = Query::<T>::from_request_parts(parts, state).await?;
        Ok(Self(value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{body::Body, http::StatusCode, response::IntoResponse};
    use serde::Deserialize;

    #[derive(Debug, Deserialize)]
    struct Payload {
        #[allow(dead_code)]
        service: String,
    }

    #[tokio::test]
    async fn test_malformed_json_is_client_error() {
        let req = Request::builder()
            .method("POST")
            .header("content-type", "application/json")
            .body(Body::from("{\"service\":"))
            .unwrap();

        let err = AppJson::<Payload>::from_request(req, &()).await.unwrap_err();
        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_missing_content_type_is_unsupported_media_type() {
        let req = Request::builder()
            .method("POST")
            .body(Body::from("{\"service\":\"auth\"}"))
            .unwrap();

        let err = AppJson::<Payload>::from_request(req, &()).await.unwrap_err();
        assert_eq!(err.status(), StatusCode::UNSUPPORTED_MEDIA_TYPE);
    }
}
