//! Bugtriage Server
//!
//! HTTP API for automated bug report triage. Endpoints:
//! - `POST /triage` - classify one report (or delegate a `bugs` batch)
//! - `POST /batch-triage` - classify 1..=20 reports with per-item
//!   failure isolation
//! - `GET /health`, `GET /ai-status`, `GET /metrics`

pub mod config;
pub mod routes;
pub mod state;

pub use config::{EmbeddingConfig, ServerConfig};
pub use routes::create_router;
pub use state::AppState;
