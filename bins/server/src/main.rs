//! Fiscora API Server
//!
//! Main entry point for the Fiscora backend service.

use std::sync::Arc;

use tokio::net::TcpListener;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use fiscora_api::{AppState, create_router};
use fiscora_db::connect;
use fiscora_shared::{AppConfig, JwtConfig, JwtService};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "fiscora=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = AppConfig::load().map_err(|e| anyhow::anyhow!("configuration error: {e}"))?;

    let db = connect(&config.database.url).await?;
    info!("Connected to database");

    let jwt = JwtService::new(JwtConfig {
        secret: config.jwt.secret.clone(),
        access_token_minutes: config.jwt.access_token_minutes,
        refresh_token_days: config.jwt.refresh_token_days,
    });

    let state = AppState {
        db: Arc::new(db),
        jwt: Arc::new(jwt),
    };

    let app = create_router(state);

    let addr = format!("{}:{}", config.server.host, config.server.port);
    let listener = TcpListener::bind(&addr).await?;
    info!("Server listening on {}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
