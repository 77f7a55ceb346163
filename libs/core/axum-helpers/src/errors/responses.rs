//! Reusable OpenAPI response types for consistent API documentation.

use super::ErrorResponse;
#[allow(unused_imports)]
use serde_json::json;
use utoipa::ToResponse;

#[derive(ToResponse)]
#[response(
    description = "Bad Request - body or query could not be decoded",
    content_type = "application/json",
    example = json!({
        "code": 1002,
        "error": "INVALID_JSON",
        "message": "Failed to deserialize the JSON body into the target type"
    })
)]
pub struct BadRequestResponse(pub ErrorResponse);

#[derive(ToResponse)]
#[response(
    description = "Too Many Requests - client quota exhausted for the current window",
    content_type = "application/json",
    example = json!({
        "code": 1029,
        "error": "RATE_LIMITED",
        "message": "Limit exceeded"
    })
)]
pub struct TooManyRequestsResponse(pub ErrorResponse);

#[derive(ToResponse)]
#[response(
    description = "Service Unavailable - event store or rate limiter unreachable",
    content_type = "application/json",
    example = json!({
        "code": 2001,
        "error": "STORE_UNAVAILABLE",
        "message": "Event store is unavailable"
    })
)]
pub struct ServiceUnavailableResponse(pub ErrorResponse);

#[derive(ToResponse)]
#[response(
    description = "Gateway Timeout - event store operation exceeded its deadline",
    content_type = "application/json",
    example = json!({
        "code": 2002,
        "error": "STORE_TIMEOUT",
        "message": "Event store operation timed out"
    })
)]
pub struct GatewayTimeoutResponse(pub ErrorResponse);
