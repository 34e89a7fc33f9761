#![allow(dead_code)]

use std::sync::Arc;

use axum::body::Body;
use axum::http::{Method, Request};
use axum::response::Response;
use axum::Router;
use http_body_util::BodyExt;
use tower::ServiceExt;

use helpdesk_api::calendars::CalendarRegistry;
use helpdesk_api::config::ServerConfig;
use helpdesk_api::router::build_app_router;
use helpdesk_api::state::AppState;

/// Build a test `ServerConfig` with safe defaults.
///
/// Uses `http://localhost:5173` as CORS origin (matching the dev default)
/// and a 30-second request timeout.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:5173".to_string()],
        request_timeout_secs: 30,
        calendars_path: None,
        max_tickets_per_request: 5,
        max_working_span_days: 31,
    }
}

/// Build the full application router with the built-in calendars plus a
/// fully closed calendar (`closed`).
///
/// Goes through [`build_app_router`] so integration tests exercise the same
/// middleware stack that production uses.
pub fn build_test_app() -> Router {
    let config = test_config();
    let mut calendars: Vec<_> = CalendarRegistry::with_defaults()
        .unwrap()
        .list()
        .cloned()
        .collect();
    calendars.push(
        helpdesk_core::business_calendar::BusinessCalendar::new("closed", "Closed", [None; 7])
            .unwrap(),
    );

    let state = AppState {
        config: Arc::new(config.clone()),
        calendars: Arc::new(CalendarRegistry::new(calendars).unwrap()),
    };

    build_app_router(state, &config)
}

/// Send a GET request.
pub async fn get(app: Router, uri: &str) -> Response {
    let request = Request::builder()
        .method(Method::GET)
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    app.oneshot(request).await.unwrap()
}

/// Send a POST request with a JSON body.
pub async fn post_json(app: Router, uri: &str, body: serde_json::Value) -> Response {
    let request = Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(serde_json::to_vec(&body).unwrap()))
        .unwrap();
    app.oneshot(request).await.unwrap()
}

/// Collect a response body and parse it as JSON.
pub async fn body_json(response: Response) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}
