//! HTTP API module
//!
//! This module contains all HTTP endpoint handlers and response structures.

pub mod handlers;
pub mod responses;

use std::sync::Arc;
use axum::{
    routing::{get, post},
    Router,
};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::state::AppState;
use handlers::*;

/// Create the HTTP router with all endpoints
pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/start", post(start_handler))
        .route("/pause", post(pause_handler))
        .route("/reset", post(reset_handler))
        .route("/status", get(status_handler))
        .route("/health", get(health_handler))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use axum::{
        body::{to_bytes, Body},
        http::{Request, StatusCode},
    };
    use tower::ServiceExt;

    use super::*;
    use crate::timer::{Notifier, PhaseDurations, Transition};

    struct Silent;

    impl Notifier for Silent {
        fn notify(&self, _transition: Transition) {}
    }

    fn test_state() -> Arc<AppState> {
        Arc::new(AppState::new(
            20020,
            "127.0.0.1".to_string(),
            PhaseDurations::new(90, 20).unwrap(),
            Arc::new(Silent),
        ))
    }

    async fn call(state: &Arc<AppState>, method: &str, uri: &str) -> (StatusCode, serde_json::Value) {
        let req = Request::builder()
            .method(method)
            .uri(uri)
            .body(Body::empty())
            .unwrap();
        let resp = create_router(Arc::clone(state)).oneshot(req).await.unwrap();
        let status = resp.status();
        let bytes = to_bytes(resp.into_body(), usize::MAX).await.unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[tokio::test]
    async fn start_returns_working_snapshot() {
        let state = test_state();
        let (status, body) = call(&state, "POST", "/start").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["status"], "ok");
        assert_eq!(body["timer"]["phase"], "working");
        assert_eq!(body["timer"]["display_time"], "01:30");
    }

    #[tokio::test]
    async fn pause_while_stopped_is_conflict() {
        let state = test_state();
        let (status, body) = call(&state, "POST", "/pause").await;
        assert_eq!(status, StatusCode::CONFLICT);
        assert_eq!(body["status"], "error");
        assert_eq!(body["timer"]["phase"], "stopped");
    }

    #[tokio::test]
    async fn pause_resume_and_reset() {
        let state = test_state();
        call(&state, "POST", "/start").await;
        state.tick().unwrap();

        let (status, body) = call(&state, "POST", "/pause").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["timer"]["phase"], "paused");
        assert_eq!(body["timer"]["remaining_secs"], 89);

        let (_, body) = call(&state, "POST", "/start").await;
        assert_eq!(body["timer"]["phase"], "working");
        assert_eq!(body["timer"]["remaining_secs"], 89);

        let (_, body) = call(&state, "POST", "/reset").await;
        assert_eq!(body["timer"]["phase"], "stopped");
        assert_eq!(body["timer"]["remaining_secs"], 90);
    }

    #[tokio::test]
    async fn status_reports_read_model() {
        let state = test_state();
        call(&state, "POST", "/start").await;

        let (status, body) = call(&state, "GET", "/status").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["timer"]["phase"], "working");
        assert_eq!(body["time_saved"], "0h 0m");
        assert_eq!(body["last_action"], "start");
        assert_eq!(body["port"], 20020);
    }

    #[tokio::test]
    async fn health_is_ok() {
        let state = test_state();
        let (status, body) = call(&state, "GET", "/health").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["status"], "ok");
    }
}
