use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use anyhow::Result;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::{debug, info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use prep_api::analysis::analyzer::{AnswerAnalyzer, LlmAnswerAnalyzer};
use prep_api::config::Config;
use prep_api::constants::RATE_LIMIT_SWEEP_INTERVAL_SECONDS;
use prep_api::llm_client::{self, LlmClient};
use prep_api::rate_limit::RateLimiter;
use prep_api::routes::build_router;
use prep_api::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!(
                "{}={}",
                env!("CARGO_PKG_NAME").replace('-', "_"),
                &config.rust_log
            ))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting PrepScore API v{}", env!("CARGO_PKG_VERSION"));

    let analyzer: Option<Arc<dyn AnswerAnalyzer>> = match &config.anthropic_api_key {
        Some(key) => {
            let llm = LlmClient::new(key.clone())?;
            info!("Answer analysis enabled (model: {})", llm_client::MODEL);
            Some(Arc::new(LlmAnswerAnalyzer(llm)))
        }
        None => {
            warn!("ANTHROPIC_API_KEY not set; answer analysis disabled");
            None
        }
    };

    let state = AppState::new(config.clone(), analyzer);
    info!(
        "Rate limit: {} requests per {}s",
        config.rate_limit_requests, config.rate_limit_window_seconds
    );
    spawn_rate_limit_sweeper(state.rate_limiter.clone());

    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

/// Drops expired rate-limit windows so idle clients do not accumulate.
fn spawn_rate_limit_sweeper(limiter: Arc<RateLimiter>) {
    tokio::spawn(async move {
        let mut interval =
            tokio::time::interval(Duration::from_secs(RATE_LIMIT_SWEEP_INTERVAL_SECONDS));
        loop {
            interval.tick().await;
            let removed = limiter.purge_expired(chrono::Utc::now());
            if removed > 0 {
                debug!(
                    removed,
                    active = limiter.len(),
                    "purged expired rate-limit windows"
                );
            }
        }
    });
}
