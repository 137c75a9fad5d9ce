//! CodeArena · Practice Platform Backend
//!
//! - Axum HTTP + WebSocket API
//! - Static problem catalogue, leaderboard and profile data
//! - Simulated run/submit/hint and assistant replies (fixed-delay timers)
//! - Static SPA fallback (./static/index.html)
//!
//! Important env variables:
//!   PORT              : u16 (default 3000)
//!   ARENA_CONFIG_PATH : path to TOML config (timings + optional problem bank)
//!   LOG_LEVEL         : tracing filter, e.g. "debug" or full directives
//!   LOG_FORMAT        : "pretty" (default) or "json"

mod telemetry;
mod util;
mod domain;
mod config;
mod seeds;
mod state;
mod protocol;
mod logic;
mod timer;
mod evaluation;
mod chat;
mod session;
mod routes;

use std::{net::SocketAddr, sync::Arc};
use tokio::net::TcpListener;
use tracing::{info, instrument, warn};

use crate::routes::build_router;
use crate::state::AppState;

#[instrument(level = "info", skip_all)]
#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
  telemetry::init_tracing();

  // Build shared application state (catalogue, static pages, timings).
  let state = Arc::new(AppState::new());

  // Build the HTTP router with routes, CORS and tracing layers.
  let app = build_router(state.clone());

  // Read port from env or default to 3000.
  let addr: SocketAddr = std::env::var("PORT")
    .ok()
    .and_then(|p| p.parse::<u16>().ok())
    .map(|port| SocketAddr::from(([0, 0, 0, 0], port)))
    .unwrap_or_else(|| SocketAddr::from(([0, 0, 0, 0], 3000)));

  let listener = TcpListener::bind(addr).await?;
  info!(target: "codearena", %addr, "HTTP server listening");
  axum::serve(listener, app)
    .with_graceful_shutdown(shutdown_signal())
    .await?;
  info!(target: "codearena", "HTTP server stopped");
  Ok(())
}

/// Resolves on Ctrl+C. Open WebSocket sessions are dropped with the server,
/// which aborts their pending timers.
async fn shutdown_signal() {
  if let Err(e) = tokio::signal::ctrl_c().await {
    warn!(target: "codearena", error = %e, "Failed to listen for Ctrl+C; running until killed");
    std::future::pending::<()>().await;
  }
  info!(target: "codearena", "Shutdown signal received");
}
