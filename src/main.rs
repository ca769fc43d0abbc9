use std::net::SocketAddr;
use std::sync::Arc;

use tokio::net::TcpListener;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use smart_reader::llm::OpenAiClient;
use smart_reader::{config::Config, routes::create_router, AppState};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Configuration errors are fatal; nothing is served with bad settings.
    let config = Config::from_env()?;

    // Initialize tracing; RUST_LOG wins over the configured numeric level.
    let level = config.tracing_level();
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                tracing_subscriber::EnvFilter::new(format!(
                    "smart_reader={level},tower_http={level}"
                ))
            }),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!(title = %config.title, version = %config.version, "Configuration loaded");

    let summarizer = Arc::new(OpenAiClient::new(&config)?);
    let state = AppState {
        config: Arc::new(config),
        summarizer,
    };

    let app = create_router(state);

    let addr = SocketAddr::from(([0, 0, 0, 0], 8000));
    info!("Server listening on {}", addr);

    let listener = TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .await
        .map_err(|e| anyhow::anyhow!("Server error: {}", e))?;

    Ok(())
}
