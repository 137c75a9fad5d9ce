//! Router assembly: HTTP endpoints, WebSocket upgrade, static files, CORS, and HTTP tracing.

use std::sync::Arc;

use axum::{routing::get, Router};
use tower_http::{
    cors::{Any, CorsLayer},
    services::{ServeDir, ServeFile},
    trace::{DefaultMakeSpan, DefaultOnRequest, DefaultOnResponse, TraceLayer},
};
use tracing::Level;

use crate::state::AppState;

pub mod http;
pub mod ws;

/// Build the application router with:
/// - WebSocket at `/ws` (one connection = one view session)
/// - read-only JSON API under `/api/v1/...`
/// - Static SPA from `./static` with index fallback
/// - CORS (allow any origin/method/headers)
/// - HTTP trace layer (per-request spans w/ method, path, status, latency)
pub fn build_router(state: Arc<AppState>) -> Router {
    let static_service = ServeDir::new("./static")
        .append_index_html_on_directories(true)
        .not_found_service(ServeFile::new("./static/index.html"));

    Router::new()
        // WebSocket
        .route("/ws", get(ws::ws_upgrade))
        // HTTP API
        .route("/api/v1/health", get(http::http_health))
        .route("/api/v1/home", get(http::http_get_home))
        .route("/api/v1/problems", get(http::http_get_problems))
        .route("/api/v1/problems/:id", get(http::http_get_problem))
        .route("/api/v1/languages", get(http::http_get_languages))
        .route("/api/v1/hint", get(http::http_get_hint))
        .route("/api/v1/leaderboard", get(http::http_get_leaderboard))
        .route("/api/v1/profile", get(http::http_get_profile))
        .route("/api/v1/assistant/quick_actions", get(http::http_get_quick_actions))
        // State + CORS + HTTP tracing
        .with_state(state)
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                .on_request(DefaultOnRequest::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO)),
        )
        // Frontend fallback
        .fallback_service(static_service)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ArenaConfig;
    use crate::seeds::HINT_TEXT;
    use axum::{
        body::{to_bytes, Body},
        http::{Request, StatusCode},
    };
    use serde_json::Value;
    use tower::ServiceExt;

    async fn get_json(uri: &str) -> (StatusCode, Value) {
        let app = build_router(Arc::new(AppState::from_config(ArenaConfig::default())));
        let res = app
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();
        let status = res.status();
        let bytes = to_bytes(res.into_body(), usize::MAX).await.unwrap();
        let json = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
        (status, json)
    }

    #[tokio::test]
    async fn health_ok() {
        let (status, body) = get_json("/api/v1/health").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["ok"], true);
    }

    #[tokio::test]
    async fn problem_list_filters_by_search_and_difficulty() {
        let (_, body) = get_json("/api/v1/problems").await;
        assert_eq!(body["total"], 6);

        let (_, body) = get_json("/api/v1/problems?search=hash&difficulty=easy").await;
        assert_eq!(body["total"], 1);
        assert_eq!(body["problems"][0]["title"], "Two Sum");
        assert_eq!(body["problems"][0]["description"], "Find two numbers in an array that add up to a target sum.");

        let (_, body) = get_json("/api/v1/problems?difficulty=legendary").await;
        assert_eq!(body["total"], 0);
    }

    #[tokio::test]
    async fn problem_detail_and_fallback() {
        let (_, body) = get_json("/api/v1/problems/6").await;
        assert_eq!(body["title"], "Regular Expression Matching");
        assert_eq!(body["difficulty"], "hard");

        let (status, body) = get_json("/api/v1/problems/1000").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["title"], "Two Sum");
        assert_eq!(body["examples"].as_array().map(|a| a.len()), Some(2));
        assert_eq!(body["acceptance"].as_f64().map(|a| (a * 10.0).round()), Some(892.0));
    }

    #[tokio::test]
    async fn static_pages_are_served() {
        let (_, body) = get_json("/api/v1/hint?problemId=3").await;
        assert_eq!(body["text"], HINT_TEXT);

        let (_, body) = get_json("/api/v1/leaderboard?period=monthly").await;
        assert_eq!(body["period"], "monthly");
        assert_eq!(body["entries"][0]["username"], "CodeMaster2024");
        assert_eq!(body["entries"][7]["rank"], 8);
        assert_eq!(body["topPerformers"].as_array().map(|a| a.len()), Some(3));

        let (status, body) = get_json("/api/v1/leaderboard?period=yearly").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["period"], "weekly");
        assert_eq!(body["entries"][0]["rank"], 1);

        let (_, body) = get_json("/api/v1/profile").await;
        assert_eq!(body["user"]["username"], "alexj_codes");
        assert_eq!(body["recentActivity"][1]["type"], "attempted");

        let (_, body) = get_json("/api/v1/languages").await;
        assert_eq!(body[1]["value"], "cpp");
        assert_eq!(body[1]["label"], "C++");

        let (_, body) = get_json("/api/v1/assistant/quick_actions").await;
        assert_eq!(body["actions"].as_array().map(|a| a.len()), Some(4));

        let (_, body) = get_json("/api/v1/home").await;
        assert_eq!(body["stats"][0]["value"], "10K+");
    }
}
