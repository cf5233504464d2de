//! Axum route handlers for the chat server.
//!
//! # Routes
//!
//! - `GET  /`         — Landing page with resources and the mode greeting
//! - `POST /chat`     — `{"message": ...}` → `{"message": ...}`
//! - `GET  /health`   — Returns `{"status": "ok", "mode": "live"|"demo", ...}`
//! - `GET  /static/*` — Front-end assets

use std::any::Any;
use std::path::PathBuf;
use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, State},
    response::{Html, IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use serde_json::Value;
use tower_http::{catch_panic::CatchPanicLayer, services::ServeDir, trace::TraceLayer};

use crate::assistant::Assistant;
use crate::config::{Settings, DEFAULT_STATIC_DIR};
use crate::server::error::ServerError;
use crate::server::landing::LandingPage;
use crate::server::types::{ChatRequest, ChatResponse, HealthResponse};

/// Shared application state for the HTTP server.
#[derive(Clone)]
pub struct AppState {
    /// Mode flag, live handle and keyword table.
    pub assistant: Arc<Assistant>,
    /// Compiled landing page template.
    pub landing: Arc<LandingPage>,
    /// Directory served under `/static`.
    pub static_dir: PathBuf,
}

impl AppState {
    pub fn new(assistant: Assistant) -> Result<Self, tera::Error> {
        Ok(Self {
            assistant: Arc::new(assistant),
            landing: Arc::new(LandingPage::new()?),
            static_dir: PathBuf::from(DEFAULT_STATIC_DIR),
        })
    }

    /// Run startup mode selection and build the state.
    pub fn from_settings(settings: &Settings) -> Result<Self, tera::Error> {
        let mut state = Self::new(Assistant::from_settings(settings))?;
        state.static_dir = settings.static_dir.clone();
        Ok(state)
    }
}

/// Build the axum router with all routes.
pub fn app_router(state: AppState) -> Router {
    let static_files = ServeDir::new(&state.static_dir);

    Router::new()
        .route("/", get(index_handler))
        .route("/chat", post(chat_handler))
        .route("/health", get(health_handler))
        .nest_service("/static", static_files)
        .layer(CatchPanicLayer::custom(handle_panic))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// GET / — landing page.
async fn index_handler(State(state): State<AppState>) -> Result<Html<String>, ServerError> {
    state
        .landing
        .render(state.assistant.greeting())
        .map(Html)
        .map_err(|e| ServerError::Unexpected(format!("Failed to render landing page: {}", e)))
}

/// POST /chat — resolve one message. No history is kept between calls.
async fn chat_handler(
    State(state): State<AppState>,
    payload: Result<Json<Value>, JsonRejection>,
) -> Result<Json<ChatResponse>, ServerError> {
    let Json(body) = payload.map_err(|e| ServerError::Unexpected(e.body_text()))?;
    let request = parse_chat_request(body)?;
    let message = request.message.trim();
    if message.is_empty() {
        return Err(ServerError::EmptyMessage);
    }

    let reply = state.assistant.resolve(message).await;
    tracing::debug!(source = ?reply.source, mode = %state.assistant.mode(), "Resolved chat reply");

    Ok(Json(ChatResponse {
        message: reply.message,
    }))
}

/// Decode a chat body.
///
/// A missing `message` decodes as empty; a non-object body or a non-string
/// message is a server error, not a client one.
fn parse_chat_request(body: Value) -> Result<ChatRequest, ServerError> {
    if !body.is_object() {
        return Err(ServerError::Unexpected(
            "request body is not a JSON object".to_string(),
        ));
    }
    serde_json::from_value(body)
        .map_err(|e| ServerError::Unexpected(format!("invalid chat request: {}", e)))
}

/// GET /health — liveness probe.
async fn health_handler(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        service: "safety-assistant",
        version: crate::VERSION,
        mode: state.assistant.mode(),
    })
}

/// Turn a handler panic into the generic 500 body.
fn handle_panic(err: Box<dyn Any + Send + 'static>) -> Response {
    let detail = if let Some(s) = err.downcast_ref::<String>() {
        s.clone()
    } else if let Some(s) = err.downcast_ref::<&str>() {
        s.to_string()
    } else {
        "unknown panic".to_string()
    };
    ServerError::Unexpected(format!("handler panicked: {}", detail)).into_response()
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use tower::ServiceExt;

    use crate::assistant::replies::{
        CONTENT_BLOCKED_RESPONSE, DEMO_GENERAL_RESPONSE, DEMO_RATE_LIMIT_RESPONSE,
        UNEXPECTED_ERROR_RESPONSE,
    };
    use crate::assistant::resolver::tests::{rate_limited, server_error, ScriptedLLM};
    use crate::assistant::Mode;
    use crate::llms::base_llm::Generation;

    fn demo_state() -> AppState {
        AppState::from_settings(&Settings::default()).unwrap()
    }

    fn live_state(llm: Arc<ScriptedLLM>) -> AppState {
        AppState::new(Assistant::live(llm)).unwrap()
    }

    fn chat_request(body: &str) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri("/chat")
            .header("Content-Type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    async fn send(state: &AppState, request: Request<Body>) -> (StatusCode, Value) {
        let response = app_router(state.clone()).oneshot(request).await.unwrap();
        let status = response.status();
        let body = axum::body::to_bytes(response.into_body(), 64 * 1024)
            .await
            .unwrap();
        (status, serde_json::from_slice(&body).unwrap())
    }

    #[tokio::test]
    async fn test_no_credentials_answers_from_keyword_table() {
        let state = demo_state();
        assert_eq!(state.assistant.mode(), Mode::Demo);

        let (status, json) = send(&state, chat_request(r#"{"message": "  Need PPE advice  "}"#)).await;
        assert_eq!(status, StatusCode::OK);
        assert!(json["message"].as_str().unwrap().starts_with("For PPE advice"));
    }

    #[tokio::test]
    async fn test_empty_and_missing_message_are_bad_requests() {
        let llm = ScriptedLLM::new(vec![]);
        let state = live_state(llm.clone());

        for body in [r#"{"message": ""}"#, r#"{"message": "   \n\t"}"#, "{}"] {
            let (status, json) = send(&state, chat_request(body)).await;
            assert_eq!(status, StatusCode::BAD_REQUEST, "body {body}");
            assert_eq!(json["error"], "No message provided");
        }
        assert_eq!(llm.calls(), 0);
    }

    #[tokio::test]
    async fn test_malformed_bodies_are_server_errors() {
        let state = demo_state();

        for body in ["not json", r#"{"message": 42}"#, r#"{"message": null}"#, "[1, 2]"] {
            let (status, json) = send(&state, chat_request(body)).await;
            assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR, "body {body}");
            assert_eq!(json["message"], UNEXPECTED_ERROR_RESPONSE);
        }
    }

    #[test]
    fn test_parse_chat_request() {
        let request = parse_chat_request(serde_json::json!({"message": " hi ", "extra": 1})).unwrap();
        assert_eq!(request.message, " hi ");

        let request = parse_chat_request(serde_json::json!({})).unwrap();
        assert_eq!(request.message, "");

        for body in [
            serde_json::json!({"message": 42}),
            serde_json::json!({"message": null}),
            serde_json::json!(["hello"]),
        ] {
            assert!(matches!(
                parse_chat_request(body),
                Err(ServerError::Unexpected(_))
            ));
        }
    }

    #[tokio::test]
    async fn test_live_reply_passthrough() {
        let llm = ScriptedLLM::new(vec![Ok(Generation::text("Follow the PASS method."))]);
        let state = live_state(llm.clone());

        let body = serde_json::to_string(&ChatRequest {
            message: "extinguisher?".to_string(),
        })
        .unwrap();
        let (status, json) = send(&state, chat_request(&body)).await;
        assert_eq!(status, StatusCode::OK);
        let reply: ChatResponse = serde_json::from_value(json).unwrap();
        assert_eq!(reply.message, "Follow the PASS method.");
        assert_eq!(llm.calls(), 1);
    }

    #[tokio::test]
    async fn test_rate_limit_then_live_again() {
        let llm = ScriptedLLM::new(vec![Err(rate_limited()), Ok(Generation::text("Now I can help."))]);
        let state = live_state(llm.clone());

        let (_, json) = send(&state, chat_request(r#"{"message": "hello"}"#)).await;
        assert_eq!(json["message"], DEMO_RATE_LIMIT_RESPONSE);

        let (_, json) = send(&state, chat_request(r#"{"message": "hello"}"#)).await;
        assert_eq!(json["message"], "Now I can help.");
        assert_eq!(llm.calls(), 2);
    }

    #[tokio::test]
    async fn test_generic_failure_switches_later_requests_to_demo() {
        let llm = ScriptedLLM::new(vec![Err(server_error())]);
        let state = live_state(llm.clone());

        let (status, json) = send(&state, chat_request(r#"{"message": "schedule"}"#)).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["message"], DEMO_GENERAL_RESPONSE);

        let (_, json) = send(&state, chat_request(r#"{"message": "training schedule"}"#)).await;
        assert!(json["message"].as_str().unwrap().starts_with("Check the official training calendar"));
        assert_eq!(llm.calls(), 1);

        let (_, json) = send(
            &state,
            Request::builder().uri("/health").body(Body::empty()).unwrap(),
        )
        .await;
        assert_eq!(json["mode"], "demo");
    }

    #[tokio::test]
    async fn test_blocked_reply_keeps_live_mode() {
        let llm = ScriptedLLM::new(vec![Ok(Generation::blocked(None))]);
        let state = live_state(llm);

        let (status, json) = send(&state, chat_request(r#"{"message": "bad idea"}"#)).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["message"], CONTENT_BLOCKED_RESPONSE);
        assert_eq!(state.assistant.mode(), Mode::Live);
    }

    #[tokio::test]
    async fn test_health_endpoint() {
        let state = live_state(ScriptedLLM::new(vec![]));
        let (status, json) = send(
            &state,
            Request::builder().uri("/health").body(Body::empty()).unwrap(),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["status"], "ok");
        assert_eq!(json["mode"], "live");
        assert_eq!(json["version"], crate::VERSION);
    }

    #[tokio::test]
    async fn test_index_renders_mode_greeting() {
        let state = demo_state();
        let response = app_router(state)
            .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert!(response.headers()["content-type"]
            .to_str()
            .unwrap()
            .starts_with("text/html"));

        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let html = String::from_utf8(body.to_vec()).unwrap();
        assert!(html.contains("AI Safety Assistant (demo mode)"));
        assert!(html.contains("Understanding Hazard Symbols"));
    }

    #[tokio::test]
    async fn test_static_assets_are_served() {
        let state = demo_state();
        let response = app_router(state)
            .oneshot(
                Request::builder()
                    .uri("/static/js/script.js")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_panic_maps_to_generic_500() {
        let response = handle_panic(Box::new("boom"));
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let body = axum::body::to_bytes(response.into_body(), 1024).await.unwrap();
        let json: Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(json["message"], UNEXPECTED_ERROR_RESPONSE);
    }
}
