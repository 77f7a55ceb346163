use super::tracker::{Admission, QuotaTracker};
use crate::errors::AppError;
use crate::extractors::ClientIp;
use axum::{
    extract::{Request, State},
    http::{HeaderMap, HeaderName, HeaderValue},
    middleware::Next,
    response::{IntoResponse, Response},
};

pub const X_RATELIMIT_LIMIT: HeaderName = HeaderName::from_static("x-ratelimit-limit");
pub const X_RATELIMIT_REMAINING: HeaderName = HeaderName::from_static("x-ratelimit-remaining");
pub const X_RATELIMIT_RESET: HeaderName = HeaderName::from_static("x-ratelimit-reset");

fn apply_headers(headers: &mut HeaderMap, admission: &Admission) {
    headers.insert(X_RATELIMIT_LIMIT, HeaderValue::from(admission.limit));
    headers.insert(X_RATELIMIT_REMAINING, HeaderValue::from(admission.remaining));
    headers.insert(X_RATELIMIT_RESET, HeaderValue::from(admission.reset));
}

/// Quota admission middleware
///
/// Keys the quota on the resolved client address. Allowed requests reach the
/// handler; denied ones get `429 Limit exceeded` without touching it. A
/// counter store that stays down past the retry budget yields `503`, never a
/// silent allow.
///
/// Attach it with `route_layer` so only matched routes consume quota;
/// unknown paths and wrong methods fall through to the 404 and 405 handlers.
///
/// # Example
///
/// ```ignore
/// use axum::{Router, routing::post};
/// use axum_helpers::rate_limit::{QuotaTracker, rate_limit_middleware};
///
/// let routes = Router::new()
///     .route("/logs", post(create_log))
///     .route_layer(axum::middleware::from_fn_with_state(tracker, rate_limit_middleware));
/// ```
pub async fn rate_limit_middleware(
    State(tracker): State<QuotaTracker>,
    ClientIp(ip): ClientIp,
    request: Request,
    next: Next,
) -> Response {
    let client_key = ip.to_string();

    match tracker.admit(&client_key).await {
        Ok(admission) if admission.is_allowed() => {
            let mut response = next.run(request).await;
            apply_headers(response.headers_mut(), &admission);
            response
        }
        Ok(admission) => {
            tracing::info!(client = %client_key, limit = admission.limit, "Request over quota");
            let mut response = AppError::TooManyRequests(client_key).into_response();
            apply_headers(response.headers_mut(), &admission);
            response
        }
        Err(e) => {
            tracing::error!(client = %client_key, error = %e, "Quota check failed");
            AppError::QuotaUnavailable(e.to_string()).into_response()
        }
    }
}
