//! # Status Stub
//!
//! A small httpbin-style server for running scenarios without the public
//! internet. `GET /status/{code}` answers with `code`, `GET /delay/{seconds}`
//! answers 200 after waiting.

use axum::{
    extract::Path,
    http::StatusCode,
    response::{IntoResponse, Json, Response},
    routing::get,
    Router,
};
use endpoint_core::VERSION;
use serde_json::{json, Value};
use std::net::SocketAddr;
use std::time::Duration;
use tokio::net::{TcpListener, ToSocketAddrs};
use tracing::{error, info, instrument};

/// Routes served by the stub
pub mod endpoints {
    pub const HEALTH: &str = "/health";
    pub const STATUS: &str = "/status/{code}";
    pub const DELAY: &str = "/delay/{seconds}";
}

/// Longest wait `/delay` honours, as httpbin does.
pub const MAX_DELAY_SECS: u64 = 10;

pub fn router() -> Router {
    Router::new()
        .route(endpoints::HEALTH, get(health_check))
        .route(endpoints::STATUS, get(status))
        .route(endpoints::DELAY, get(delay))
}

/// Serve the stub on `listener` until the task is dropped.
pub async fn serve(listener: TcpListener) -> std::io::Result<()> {
    info!("Status Stub listening on {}", listener.local_addr()?);
    axum::serve(listener, router()).await
}

/// Bind `addr` and serve in a background task, returning the bound address.
pub async fn spawn(addr: impl ToSocketAddrs) -> std::io::Result<SocketAddr> {
    let listener = TcpListener::bind(addr).await?;
    let local_addr = listener.local_addr()?;

    tokio::spawn(async move {
        if let Err(err) = serve(listener).await {
            error!("Status Stub stopped: {err}");
        }
    });
    Ok(local_addr)
}

#[instrument]
async fn health_check() -> Json<Value> {
    Json(json!({
        "status": "healthy",
        "service": "status-stub",
        "version": VERSION
    }))
}

#[instrument]
async fn status(Path(code): Path<String>) -> Response {
    match code.parse::<u16>().ok().and_then(|code| StatusCode::from_u16(code).ok()) {
        Some(status) => status.into_response(),
        None => (
            StatusCode::BAD_REQUEST,
            Json(json!({ "error": format!("invalid status code: {code}") })),
        )
            .into_response(),
    }
}

#[instrument]
async fn delay(Path(seconds): Path<u64>) -> Json<Value> {
    let seconds = seconds.min(MAX_DELAY_SECS);
    tokio::time::sleep(Duration::from_secs(seconds)).await;
    Json(json!({ "delay": seconds }))
}
