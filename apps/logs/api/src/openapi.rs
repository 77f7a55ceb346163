//! OpenAPI documentation configuration

use utoipa::OpenApi;

/// Service-level metadata
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Logs API",
        version = "0.1.0",
        description = "Rate-limited event logging backed by MongoDB and Redis"
    ),
    servers(
        (url = "http://localhost:8080", description = "Local development server")
    )
)]
struct ServiceDoc;

/// Combined OpenAPI documentation for all APIs
///
/// The log routes sit at the root, so the domain document is merged rather
/// than nested under a prefix.
pub struct ApiDoc;

impl OpenApi for ApiDoc {
    fn openapi() -> utoipa::openapi::OpenApi {
        let mut doc = ServiceDoc::openapi();
        doc.merge(domain_logs::ApiDoc::openapi());
        doc
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_paths_are_at_the_root() {
        let doc = ApiDoc::openapi();
        assert!(doc.paths.paths.contains_key("/logs"));
        assert!(doc.paths.paths.contains_key("/logs/count"));
        assert_eq!(doc.info.title, "Logs API");
    }
}
