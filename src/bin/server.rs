//! Safety assistant HTTP server binary.
//!
//! # Environment Variables
//!
//! See [`safety_assistant::config`] for the full list. The most relevant:
//!
//! - `GEMINI_API_KEY` — Gemini credential; without it the server runs in demo mode
//! - `PORT` — HTTP port (default: 5000)
//! - `RUST_LOG` — Tracing filter (default: "info,safety_assistant=debug")
//!
//! # Usage
//!
//! ```bash
//! GEMINI_API_KEY=... cargo run --bin server
//! ```

use anyhow::Context;
use safety_assistant::{app_router, AppState, Settings};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Read settings first so RUST_LOG from .env reaches the filter
    let settings = Settings::from_env();

    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,safety_assistant=debug".into()),
        )
        .init();

    let settings = settings.context("Failed to read configuration")?;
    if let Some(path) = &settings.env_file {
        tracing::info!("Loaded environment from {}", path.display());
    }

    if settings.uses_default_session_secret() {
        tracing::warn!("SESSION_SECRET is not set; using the built-in placeholder");
    }

    let state = AppState::from_settings(&settings).context("Failed to compile landing page")?;
    let mode = state.assistant.mode();
    let app = app_router(state);

    let bind_addr = settings.bind_addr();
    tracing::info!("safety-assistant starting on {} in {} mode", bind_addr, mode);
    tracing::info!("Endpoints:");
    tracing::info!("  GET  /       — landing page");
    tracing::info!("  POST /chat   — chat");
    tracing::info!("  GET  /health — liveness probe");

    let listener = tokio::net::TcpListener::bind(&bind_addr)
        .await
        .with_context(|| format!("Failed to bind {}", bind_addr))?;

    axum::serve(listener, app).await.context("Server failed")?;
    Ok(())
}
