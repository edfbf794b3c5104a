//! Test utilities for integration tests
use std::sync::{Arc, RwLock};
use std::time::Duration;

use axum::{Router, body::Body};

use xroot::ai::SharedResponder;
use xroot::api::AppState;
use xroot::api::app;
use xroot::core::AppConfig;

/// Creates a test application router that replies without delay.
pub async fn test_app() -> Router {
    test_app_with_delay(Duration::ZERO).await
}

/// Creates a test application router whose conversation endpoint
/// waits `reply_delay` before answering.
pub async fn test_app_with_delay(reply_delay: Duration) -> Router {
    let app_config = AppConfig {
        reply_delay,
        client_reply_delay: Duration::ZERO,
        api_url: String::from("http://127.0.0.1:3000"),
    };
    let app_state = AppState::new(app_config);
    app(Arc::new(RwLock::new(app_state)))
}

/// Creates a test application router that gets conversation replies
/// from `responder`.
pub async fn test_app_with_responder(responder: SharedResponder) -> Router {
    let app_state = AppState::new_with_responder(responder);
    app(Arc::new(RwLock::new(app_state)))
}

/// Serves the test app on an ephemeral port and returns its base URL.
pub async fn spawn_test_server() -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind test listener");
    let addr = listener.local_addr().unwrap();
    let app = test_app().await;
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    format!("http://{}", addr)
}

pub async fn body_to_string(body: Body) -> String {
    let bytes = axum::body::to_bytes(body, usize::MAX)
        .await
        .expect("Failed to read body");
    String::from_utf8(bytes.to_vec()).expect("Body was not utf-8")
}

pub async fn body_to_json(body: Body) -> serde_json::Value {
    serde_json::from_str(&body_to_string(body).await).expect("Body was not JSON")
}
