use anyhow::{Context, Result};
use itch_slides_server::{AppState, Config, build_app};
use tokio::net::TcpListener;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,itch_slides_server=debug,tower_http=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Config::from_env().context("Failed to load configuration")?;
    tracing::info!(
        default_url = %config.default_url,
        allowed_domain = %config.allowed_domain,
        max_slides = config.max_slides,
        "Configuration loaded"
    );

    let state = AppState::from_config(&config)?;
    let app = build_app(state, Some(config.static_dir.clone()), config.request_timeout());

    let addr = format!("0.0.0.0:{}", config.port);
    let listener = TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;

    tracing::info!("Server listening on http://{}", addr);
    tracing::info!("Serving static files from {}", config.static_dir.display());

    axum::serve(listener, app).await.context("Server error")?;

    Ok(())
}
