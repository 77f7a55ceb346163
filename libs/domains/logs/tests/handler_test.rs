//! Logs router against an in-memory repository.
//!
//! The repository here behaves like the MongoDB one (append, exact count), so
//! these tests cover the HTTP contract end to end without Docker.

use async_trait::async_trait;
use axum::Router;
use axum::body::Body;
use axum::extract::ConnectInfo;
use axum::http::{Request, StatusCode, header};
use domain_logs::{LogEvent, LogRepository, LogService, Result, logs_router};
use http_body_util::BodyExt;
use std::net::SocketAddr;
use std::sync::{Arc, Mutex};
use tower::ServiceExt;

#[derive(Clone, Default)]
struct InMemoryLogRepository {
    events: Arc<Mutex<Vec<LogEvent>>>,
}

impl InMemoryLogRepository {
    fn events(&self) -> Vec<LogEvent> {
        self.events.lock().unwrap().clone()
    }
}

#[async_trait]
impl LogRepository for InMemoryLogRepository {
    async fn insert(&self, event: LogEvent) -> Result<()> {
        self.events.lock().unwrap().push(event);
        Ok(())
    }

    async fn count_matching(&self, service: &str, tag: &str) -> Result<u64> {
        let events = self.events.lock().unwrap();
        Ok(events
            .iter()
            .filter(|e| e.service == service && e.tag == tag)
            .count() as u64)
    }
}

fn app(repo: InMemoryLogRepository) -> Router {
    logs_router().with_state(Arc::new(LogService::new(repo)))
}

fn with_peer(mut req: Request<Body>, peer: &str) -> Request<Body> {
    let addr: SocketAddr = peer.parse().unwrap();
    req.extensions_mut().insert(ConnectInfo(addr));
    req
}

fn post_log(service: &str, tag: &str) -> Request<Body> {
    let body = serde_json::json!({ "service": service, "tag": tag }).to_string();
    with_peer(
        Request::post("/logs")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body))
            .unwrap(),
        "203.0.113.10:40000",
    )
}

async fn count(app: &Router, query: &str) -> u64 {
    let req = with_peer(
        Request::get(format!("/logs/count{}", query))
            .body(Body::empty())
            .unwrap(),
        "203.0.113.10:40000",
    );
    let response = app.clone().oneshot(req).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let body: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
    body["count"].as_u64().unwrap()
}

#[tokio::test]
async fn test_login_scenario() {
    let app = app(InMemoryLogRepository::default());

    for (service, tag) in [("auth", "login_fail"), ("auth", "login_ok")] {
        let response = app.clone().oneshot(post_log(service, tag)).await.unwrap();
        assert_eq!(response.status(), StatusCode::NO_CONTENT);
    }

    assert_eq!(count(&app, "?service=auth&tag=login_fail").await, 1);
    assert_eq!(count(&app, "?service=auth&tag=login_ok").await, 1);
    assert_eq!(count(&app, "?service=auth&tag=nonexistent").await, 0);
}

#[tokio::test]
async fn test_acknowledged_post_is_counted() {
    let app = app(InMemoryLogRepository::default());
    let before = count(&app, "?service=billing&tag=charge").await;

    let response = app.clone().oneshot(post_log("billing", "charge")).await.unwrap();
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    assert!(count(&app, "?service=billing&tag=charge").await > before);
}

#[tokio::test]
async fn test_omitted_params_match_only_empty_fields() {
    let app = app(InMemoryLogRepository::default());

    app.clone().oneshot(post_log("auth", "")).await.unwrap();
    app.clone().oneshot(post_log("", "")).await.unwrap();

    assert_eq!(count(&app, "").await, 1);
    assert_eq!(count(&app, "?service=auth").await, 1);
    assert_eq!(count(&app, "?tag=").await, 1);
}

#[tokio::test]
async fn test_source_ip_comes_from_connection() {
    let repo = InMemoryLogRepository::default();
    let app = app(repo.clone());

    let req = with_peer(
        Request::post("/logs")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(
                r#"{"service":"auth","tag":"t","ip":"1.2.3.4"}"#,
            ))
            .unwrap(),
        "192.0.2.55:1234",
    );
    app.oneshot(req).await.unwrap();

    assert_eq!(repo.events()[0].ip, "192.0.2.55");
}

#[tokio::test]
async fn test_concurrent_posts_are_all_counted() {
    let app = app(InMemoryLogRepository::default());

    let tasks: Vec<_> = (0..20)
        .map(|_| {
            let app = app.clone();
            tokio::spawn(async move { app.oneshot(post_log("jobs", "done")).await.unwrap() })
        })
        .collect();
    for task in tasks {
        assert_eq!(task.await.unwrap().status(), StatusCode::NO_CONTENT);
    }

    assert_eq!(count(&app, "?service=jobs&tag=done").await, 20);
}
