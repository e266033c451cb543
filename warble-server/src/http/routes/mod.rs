//! Route handlers organized by resource

pub mod accounts;
pub mod health;
pub mod messages;

use std::sync::Arc;

use axum::Router;

use super::server::AppState;

/// Versioned API routes, mounted under `/api/v1`.
pub fn api_router() -> Router<Arc<AppState>> {
    Router::new()
        .merge(accounts::router())
        .merge(messages::router())
}
