//! HTTP handlers for the logs API

use crate::error::StoreError;
use crate::models::{CountResponse, CreateLogEvent, LogCountQuery};
use crate::repository::LogRepository;
use crate::service::LogService;
use axum::extract::State;
use axum::http::StatusCode;
use axum::routing::{get, post};
use axum::{Json, Router};
use axum_helpers::{AppJson, AppQuery, ClientIp};
use std::sync::Arc;
use tracing::instrument;

/// Logs router state
pub type LogsState<R> = Arc<LogService<R>>;

/// Create the logs router
///
/// Routes are absolute (`/logs`, `/logs/count`); merge rather than nest.
pub fn logs_router<R: LogRepository + 'static>() -> Router<LogsState<R>> {
    Router::new()
        .route("/logs", post(create_log::<R>))
        .route("/logs/count", get(count_logs::<R>))
}

/// Record a log event
#[utoipa::path(
    post,
    path = "/logs",
    request_body = CreateLogEvent,
    responses(
        (status = 204, description = "Event stored"),
        (status = 400, response = axum_helpers::errors::responses::BadRequestResponse),
        (status = 429, response = axum_helpers::errors::responses::TooManyRequestsResponse),
        (status = 503, response = axum_helpers::errors::responses::ServiceUnavailableResponse),
        (status = 504, response = axum_helpers::errors::responses::GatewayTimeoutResponse)
    ),
    tag = "logs"
)]
#[instrument(skip(state, create))]
pub async fn create_log<R: LogRepository>(
    State(state): State<LogsState<R>>,
    ClientIp(ip): ClientIp,
    AppJson(create): AppJson<CreateLogEvent>,
) -> Result<StatusCode, StoreError> {
    state.record(create, ip).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// Count log events matching service and tag exactly
#[utoipa::path(
    get,
    path = "/logs/count",
    params(LogCountQuery),
    responses(
        (status = 200, description = "Matching event count", body = CountResponse),
        (status = 400, response = axum_helpers::errors::responses::BadRequestResponse),
        (status = 429, response = axum_helpers::errors::responses::TooManyRequestsResponse),
        (status = 503, response = axum_helpers::errors::responses::ServiceUnavailableResponse),
        (status = 504, response = axum_helpers::errors::responses::GatewayTimeoutResponse)
    ),
    tag = "logs"
)]
#[instrument(skip(state))]
pub async fn count_logs<R: LogRepository>(
    State(state): State<LogsState<R>>,
    AppQuery(query): AppQuery<LogCountQuery>,
) -> Result<Json<CountResponse>, StoreError> {
    let count = state.count(&query).await?;
    Ok(Json(CountResponse { count }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repository::mock::MockLogRepository;
    use axum::body::Body;
    use axum::extract::ConnectInfo;
    use axum::http::{Request, header};
    use http_body_util::BodyExt;
    use std::net::SocketAddr;
    use std::time::Duration;
    use tower::ServiceExt;

    fn app(repo: MockLogRepository) -> Router {
        logs_router().with_state(Arc::new(LogService::new(repo)))
    }

    fn request(method: &str, uri: &str, body: Body) -> Request<Body> {
        let mut req = Request::builder()
            .method(method)
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(body)
            .unwrap();
        let peer: SocketAddr = "198.51.100.4:50000".parse().unwrap();
        req.extensions_mut().insert(ConnectInfo(peer));
        req
    }

    async fn json_body(response: axum::response::Response) -> serde_json::Value {
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn test_create_log_returns_204_with_empty_body() {
        let mut repo = MockLogRepository::new();
        repo.expect_insert()
            .withf(|event| event.ip == "198.51.100.4" && event.service == "auth")
            .times(1)
            .returning(|_| Ok(()));

        let response = app(repo)
            .oneshot(request(
                "POST",
                "/logs",
                Body::from(r#"{"service":"auth","tag":"login_fail"}"#),
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NO_CONTENT);
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        assert!(bytes.is_empty());
    }

    #[tokio::test]
    async fn test_create_log_malformed_json_never_reaches_store() {
        let mut repo = MockLogRepository::new();
        repo.expect_insert().never();

        let response = app(repo)
            .oneshot(request("POST", "/logs", Body::from("{not json")))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body = json_body(response).await;
        assert_eq!(body["error"], "INVALID_JSON");
    }

    #[tokio::test]
    async fn test_create_log_store_unavailable_is_503() {
        let mut repo = MockLogRepository::new();
        repo.expect_insert().returning(|_| {
            Err(StoreError::Unavailable {
                message: "server selection timeout".into(),
            })
        });

        let response = app(repo)
            .oneshot(request(
                "POST",
                "/logs",
                Body::from(r#"{"service":"auth","tag":"x"}"#),
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);
        let body = json_body(response).await;
        assert_eq!(body["error"], "STORE_UNAVAILABLE");
        assert_eq!(body["message"], "Event store is unavailable");
    }

    #[tokio::test]
    async fn test_count_returns_json_count() {
        let mut repo = MockLogRepository::new();
        repo.expect_count_matching()
            .withf(|service, tag| service == "auth" && tag == "login_ok")
            .returning(|_, _| Ok(7));

        let response = app(repo)
            .oneshot(request(
                "GET",
                "/logs/count?service=auth&tag=login_ok",
                Body::empty(),
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(json_body(response).await, serde_json::json!({ "count": 7 }));
    }

    #[tokio::test]
    async fn test_count_without_params_matches_empty_fields() {
        let mut repo = MockLogRepository::new();
        repo.expect_count_matching()
            .withf(|service, tag| service.is_empty() && tag.is_empty())
            .returning(|_, _| Ok(0));

        let response = app(repo)
            .oneshot(request("GET", "/logs/count", Body::empty()))
            .await
            .unwrap();

        assert_eq!(json_body(response).await["count"], 0);
    }

    #[tokio::test]
    async fn test_count_timeout_is_504() {
        let mut repo = MockLogRepository::new();
        repo.expect_count_matching().returning(|_, _| {
            Err(StoreError::Timeout {
                operation: "count",
                after: Duration::from_secs(5),
            })
        });

        let response = app(repo)
            .oneshot(request("GET", "/logs/count?service=a&tag=b", Body::empty()))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::GATEWAY_TIMEOUT);
    }
}
