//! Service entry point

use std::net::SocketAddr;
use std::sync::Arc;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use forecast_service::config::{ServiceConfig, DEFAULT_COMMODITY, KNOWN_COMMODITIES};
use forecast_service::orchestrator::Orchestrator;
use forecast_service::routes::{router, AppState};
use market_history::MarketHistory;
use price_model::ModelRepository;

#[tokio::main]
async fn main() {
    // Load .env file (optional - won't fail if missing)
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "forecast_service=info,tower_http=info".into()),
        )
        .init();

    let config = ServiceConfig::from_env();

    let repository =
        ModelRepository::load(&config.data_dir, &KNOWN_COMMODITIES, DEFAULT_COMMODITY);
    if repository.is_cold() {
        tracing::warn!(
            data_dir = %config.data_dir.display(),
            "no model artifacts loaded; forecast requests will fail until one is provided"
        );
    } else {
        tracing::info!(models = repository.len(), "model repository ready");
    }

    let history = MarketHistory::new(config.data_dir.clone());
    let state = AppState {
        orchestrator: Arc::new(Orchestrator::new(repository, history)),
    };

    let addr: SocketAddr = format!("{}:{}", config.host, config.port)
        .parse()
        .expect("Invalid HOST:PORT configuration");

    tracing::info!(
        "forecast_service v{} listening on {}",
        env!("CARGO_PKG_VERSION"),
        addr
    );

    let listener = tokio::net::TcpListener::bind(addr).await.unwrap();
    axum::serve(listener, router(state)).await.unwrap();
}
