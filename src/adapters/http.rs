use crate::core::policy::RoastEngine;
use crate::domain::model::{RoastOutcome, RoastRequest, RoastResult};
use crate::utils::error::{Result, RoastError};
use axum::body::Bytes;
use axum::extract::rejection::BytesRejection;
use axum::extract::{DefaultBodyLimit, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Json, Response};
use axum::routing::{get, post};
use axum::Router;
use chrono::{DateTime, Utc};
use serde_json::json;
use std::any::Any;
use std::sync::Arc;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

pub struct AppState {
    pub engine: RoastEngine,
    pub started_at: DateTime<Utc>,
}

impl AppState {
    pub fn new(engine: RoastEngine) -> Self {
        Self {
            engine,
            started_at: Utc::now(),
        }
    }
}

/// Request bodies above this size are answered with the generic roast.
pub const MAX_BODY_BYTES: usize = 64 * 1024;

pub fn router(state: Arc<AppState>) -> Router {
    router_with_body_limit(state, MAX_BODY_BYTES)
}

pub fn router_with_body_limit(state: Arc<AppState>, max_body_bytes: usize) -> Router {
    Router::new()
        .route("/api/roast", post(api_roast))
        .route("/api/health", get(api_health))
        .with_state(state)
        .layer(DefaultBodyLimit::max(max_body_bytes))
        .layer(CatchPanicLayer::custom(panic_response))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
}

/// 綁定位址並持續服務直到程序結束。
pub async fn serve(bind: &str, max_body_bytes: usize, state: Arc<AppState>) -> Result<()> {
    let listener = tokio::net::TcpListener::bind(bind)
        .await
        .map_err(|e| RoastError::ServerError {
            message: format!("Failed to bind to {bind}: {e}"),
        })?;

    tracing::info!("🚀 regret-roast listening on {}", bind);
    axum::serve(listener, router_with_body_limit(state, max_body_bytes))
        .await
        .map_err(|e| RoastError::ServerError {
            message: e.to_string(),
        })
}

async fn api_roast(
    State(state): State<Arc<AppState>>,
    body: std::result::Result<Bytes, BytesRejection>,
) -> Json<RoastResult> {
    let body = match body {
        Ok(body) => body,
        Err(e) => {
            tracing::warn!("Unreadable roast request body: {}", e);
            return Json(RoastOutcome::guard().into());
        }
    };

    let payload: serde_json::Value = match serde_json::from_slice(&body) {
        Ok(value) => value,
        Err(e) => {
            tracing::warn!("Unparsable roast request body: {}", e);
            return Json(RoastOutcome::guard().into());
        }
    };

    let request = RoastRequest::from_json(&payload);
    let outcome = state.engine.roast(&request).await;
    tracing::info!(
        "🔥 Roast served (intensity={}, source={:?})",
        request.intensity,
        outcome.source
    );

    Json(outcome.into())
}

async fn api_health(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    let uptime = (Utc::now() - state.started_at).num_seconds().max(0);

    Json(json!({
        "status": "ok",
        "provider_enabled": state.engine.provider_enabled(),
        "uptime_seconds": uptime,
        "started_at": state.started_at.to_rfc3339(),
    }))
}

fn panic_response(err: Box<dyn Any + Send + 'static>) -> Response {
    let detail = err
        .downcast_ref::<String>()
        .map(String::as_str)
        .or_else(|| err.downcast_ref::<&str>().copied())
        .unwrap_or("unknown panic");
    tracing::error!("❌ Roast handler panicked: {}", detail);

    let result: RoastResult = RoastOutcome::guard().into();
    (StatusCode::INTERNAL_SERVER_ERROR, Json(result)).into_response()
}
