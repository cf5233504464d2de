//! HTTP server for the safety assistant.
//!
//! # Endpoints
//!
//! - `GET  /`       — Landing page
//! - `POST /chat`   — Single-turn chat
//! - `GET  /health` — Liveness probe

pub mod error;
pub mod landing;
pub mod routes;
pub mod types;

pub use error::ServerError;
pub use routes::{app_router, AppState};
pub use types::{ChatRequest, ChatResponse};
