use std::sync::Arc;

use anyhow::Result;
use spacetrail::application::{ports::content::ContentClient, services::ApplicationServices};
use spacetrail::config::AppConfig;
use spacetrail::infrastructure::{
    cache::PageCache, cms::CmsHttpClient, session::PreviewCookieCodec, time::SystemClock,
};
use spacetrail::presentation::http::{routes::build_router, state::HttpState};
use std::net::SocketAddr;
use tokio::signal;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() {
    if let Err(err) = bootstrap().await {
        tracing::error!(error = %err, "fatal error");
        eprintln!("fatal error: {err}");
        std::process::exit(1);
    }
}

async fn bootstrap() -> Result<()> {
    dotenvy::dotenv().ok();
    init_tracing();

    let config = AppConfig::from_env()?;

    let http = reqwest::Client::builder()
        .timeout(config.cms_timeout())
        .build()?;
    let content: Arc<dyn ContentClient> =
        Arc::new(CmsHttpClient::new(http, config.cms_base_url()));

    let services = Arc::new(ApplicationServices::new(
        Arc::clone(&content),
        config.page_size(),
    ));
    let preview_cookies = Arc::new(PreviewCookieCodec::new(config.preview_cookie_key()));
    let page_cache = Arc::new(PageCache::new(Arc::new(SystemClock)));

    let state = HttpState {
        services,
        preview_cookies,
        page_cache,
        listing_ttl: config.listing_revalidate(),
        post_ttl: config.post_revalidate(),
    };

    let app = build_router(state);

    let listener = tokio::net::TcpListener::bind(config.listen_addr()).await?;
    let address: SocketAddr = listener.local_addr()?;
    tracing::info!("listening on {address}");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

fn init_tracing() {
    let env_filter = std::env::var("RUST_LOG")
        .ok()
        .unwrap_or_else(|| "info,tower_http=info".to_string());

    let subscriber = tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(env_filter))
        .with(tracing_subscriber::fmt::layer());

    if subscriber.try_init().is_err() {
        tracing::warn!("tracing subscriber already initialised");
    }
}

async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("failed to install CTRL+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install terminate handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {}
        _ = terminate => {}
    }
    tracing::info!("shutdown signal received");
}
