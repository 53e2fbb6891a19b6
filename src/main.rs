use mcp_chat_backend::{config::AppConfig, routes, state::AppState};
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(false)
        .init();

    let config = AppConfig::from_env();
    config.log_gaps();
    let bind_addr = config.bind_addr.clone();
    let model = config.openai_model.clone();

    let state = Arc::new(AppState::from_config(config)?);

    let cors = CorsLayer::very_permissive();

    let app = routes::create_router()
        .route("/", axum::routing::get(|| async { "YOU ARE CONNECTED " }))
        .with_state(state)
        .layer(cors);

    let listener = tokio::net::TcpListener::bind(&bind_addr).await?;

    tracing::info!(%model, "🚀 chat backend running at http://{}", bind_addr);
    axum::serve(listener, app).await?;
    Ok(())
}
