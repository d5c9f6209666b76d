//! Axum HTTP API server.
//!
//! This crate provides:
//! - `POST /process` driving the clip pipeline
//! - Health and readiness probes
//! - Prometheus metrics
//! - Request-id, security-header, CORS, and body-limit middleware

pub mod config;
pub mod error;
pub mod handlers;
pub mod metrics;
pub mod middleware;
pub mod routes;
pub mod state;

pub use config::ApiConfig;
pub use error::{ApiError, ApiResult};
pub use routes::create_router;
pub use state::AppState;
