//! HTTP boundary
//!
//! Thin axum layer over the domain services:
//! - JSON error responses with status mapping
//! - Request tracing
//! - Localhost-only CORS by default
//! - Graceful shutdown

pub mod error;
pub mod routes;
pub mod server;

pub use error::ApiError;
pub use server::{run_server, AppState, ServerConfig};
