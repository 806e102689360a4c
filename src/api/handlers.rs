//! HTTP endpoint handlers

use std::sync::Arc;
use axum::{
    extract::State,
    http::StatusCode,
    response::Json,
};
use tracing::{error, info, warn};

use crate::state::{AppState, StateError};
use super::responses::{ApiResponse, StatusResponse, HealthResponse};

/// Handle POST /start - Start working or resume a paused phase
pub async fn start_handler(State(state): State<Arc<AppState>>) -> Result<Json<ApiResponse>, StatusCode> {
    match state.start() {
        Ok(timer) => {
            info!("Start endpoint called - timer {}", timer.phase);
            Ok(Json(ApiResponse::ok(format!("Timer {}", timer.phase), timer)))
        }
        Err(e) => {
            error!("Failed to start timer: {}", e);
            Err(StatusCode::INTERNAL_SERVER_ERROR)
        }
    }
}

/// Handle POST /pause - Pause the active phase
pub async fn pause_handler(
    State(state): State<Arc<AppState>>,
) -> Result<(StatusCode, Json<ApiResponse>), StatusCode> {
    match state.pause() {
        Ok(timer) => {
            info!("Pause endpoint called - timer paused at {}", timer.display_time);
            Ok((StatusCode::OK, Json(ApiResponse::ok("Timer paused".to_string(), timer))))
        }
        Err(StateError::Timer(e)) => {
            warn!("Pause rejected: {}", e);
            match state.snapshot() {
                Ok(timer) => Ok((StatusCode::CONFLICT, Json(ApiResponse::error(e.to_string(), timer)))),
                Err(_) => Err(StatusCode::INTERNAL_SERVER_ERROR),
            }
        }
        Err(e) => {
            error!("Failed to pause timer: {}", e);
            Err(StatusCode::INTERNAL_SERVER_ERROR)
        }
    }
}

/// Handle POST /reset - Stop the timer and queue a full work phase
pub async fn reset_handler(State(state): State<Arc<AppState>>) -> Result<Json<ApiResponse>, StatusCode> {
    match state.reset() {
        Ok(timer) => {
            info!("Reset endpoint called - timer stopped");
            Ok(Json(ApiResponse::ok("Timer reset".to_string(), timer)))
        }
        Err(e) => {
            error!("Failed to reset timer: {}", e);
            Err(StatusCode::INTERNAL_SERVER_ERROR)
        }
    }
}

/// Handle GET /status - Return current timer status
pub async fn status_handler(State(state): State<Arc<AppState>>) -> Result<Json<StatusResponse>, StatusCode> {
    let timer = match state.snapshot() {
        Ok(t) => t,
        Err(e) => {
            error!("Failed to get timer state: {}", e);
            return Err(StatusCode::INTERNAL_SERVER_ERROR);
        }
    };

    let (last_action, last_action_time) = state.get_last_action();

    Ok(Json(StatusResponse {
        time_saved: timer.time_saved(),
        timer,
        uptime: state.get_uptime(),
        port: state.port,
        host: state.host.clone(),
        last_action,
        last_action_time,
    }))
}

/// Handle GET /health - Health check endpoint
pub async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse::ok())
}
