// Smart Reader - summarize uploaded docx documents with a GPT backend

pub mod config;
pub mod extract;
pub mod llm;
pub mod middleware;
pub mod models;
pub mod prompt;
pub mod routes;

// Re-exports for convenience
pub use config::Config;
pub use models::AppState;

pub fn create_router(state: AppState) -> axum::Router {
    routes::create_router(state)
}
