//! API Routes
//!
//! - `POST /uploadfile/` - document upload and summarization
//! - `GET /openapi.json` - machine-readable API description
//! - `GET /health` - liveness probe

pub mod docs;
pub mod health;
pub mod upload;

use axum::Router;
use tracing::info;

use crate::middleware;
use crate::models::AppState;

/// Create the main application router with the CORS and logging layers
/// applied to every route.
pub fn create_router(state: AppState) -> Router {
    info!("Creating application router");

    let cors = middleware::cors_layer(&state.config);

    Router::new()
        .merge(upload::router(state.clone()))
        .merge(docs::router(state))
        .merge(health::router())
        .layer(cors)
        .layer(axum::middleware::from_fn(middleware::log_request))
}
