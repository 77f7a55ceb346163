//! Log event models

use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

/// A stored log event
///
/// Written once per accepted `POST /logs` and never modified. The document
/// layout is `{ service, ip, tag }`; MongoDB assigns `_id`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct LogEvent {
    /// Reporting service, as supplied by the caller
    #[schema(example = "auth")]
    pub service: String,
    /// Resolved client address, never taken from the body
    #[schema(example = "203.0.113.7")]
    pub ip: String,
    /// Free-form label
    #[schema(example = "login_fail")]
    pub tag: String,
}

impl LogEvent {
    pub fn new(create: CreateLogEvent, ip: impl Into<String>) -> Self {
        Self {
            service: create.service,
            ip: ip.into(),
            tag: create.tag,
        }
    }
}

/// Body of `POST /logs`
///
/// Missing fields decode as empty strings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, ToSchema)]
#[serde(default)]
pub struct CreateLogEvent {
    #[schema(example = "auth")]
    pub service: String,
    #[schema(example = "login_fail")]
    pub tag: String,
}

/// Query of `GET /logs/count`
///
/// An omitted parameter is the empty string and only matches events whose
/// field is literally empty. It is not a wildcard.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, IntoParams)]
#[serde(default)]
#[into_params(parameter_in = Query)]
pub struct LogCountQuery {
    /// Exact service to match
    pub service: String,
    /// Exact tag to match
    pub tag: String,
}

/// Response of `GET /logs/count`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct CountResponse {
    #[schema(example = 1)]
    pub count: u64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_log_event_missing_fields_default_to_empty() {
        let create: CreateLogEvent = serde_json::from_str(r#"{"service":"auth"}"#).unwrap();
        assert_eq!(create.service, "auth");
        assert_eq!(create.tag, "");
    }

    #[test]
    fn test_log_event_ip_comes_from_caller_not_body() {
        let create: CreateLogEvent =
            serde_json::from_str(r#"{"service":"auth","tag":"login_ok","ip":"1.1.1.1"}"#).unwrap();
        let event = LogEvent::new(create, "203.0.113.7");

        assert_eq!(event.ip, "203.0.113.7");
    }

    #[test]
    fn test_log_event_document_layout() {
        let event = LogEvent {
            service: "auth".into(),
            ip: "10.0.0.1".into(),
            tag: "login_ok".into(),
        };
        let doc = mongodb::bson::to_document(&event).unwrap();

        let keys: Vec<_> = doc.keys().map(String::as_str).collect();
        assert_eq!(keys, ["service", "ip", "tag"]);
    }

    #[test]
    fn test_count_response_shape() {
        let json = serde_json::to_value(CountResponse { count: 3 }).unwrap();
        assert_eq!(json, serde_json::json!({ "count": 3 }));
    }
}
