//! Msgboard API server binary

use anyhow::{Context, Result};
use std::net::SocketAddr;
use std::sync::Arc;
use tracing::{error, info, warn, Level};
use tracing_subscriber::FmtSubscriber;

use msgboard_server::config::Config;
use msgboard_server::services::MessageService;
use msgboard_server::storage::{PgMessageStore, RedisCache};
use msgboard_server::{router, AppState};

#[tokio::main]
async fn main() {
    // Initialize tracing
    let subscriber = FmtSubscriber::builder()
        .with_max_level(Level::INFO)
        .finish();
    if let Err(e) = tracing::subscriber::set_global_default(subscriber) {
        eprintln!("[FATAL] Failed to initialize logging: {}", e);
        std::process::exit(1);
    }

    info!("Starting Msgboard API v{}", env!("CARGO_PKG_VERSION"));

    if let Err(e) = run_server().await {
        error!("Server failed: {:#}", e);
        std::process::exit(1);
    }
}

async fn run_server() -> Result<()> {
    let config = Config::from_env().context("Failed to load configuration")?;
    info!(
        "Config loaded: bind={}, store={}:{}/{}, cache={}:{}",
        config.bind_address,
        config.postgres_host,
        config.postgres_port,
        config.postgres_db,
        config.redis_host,
        config.redis_port
    );

    // The pool is lazy: an unreachable database still lets the process come
    // up degraded and fail individual requests later.
    let store = PgMessageStore::connect(&config).context("Failed to configure message store")?;
    if let Err(e) = store.init_schema().await {
        warn!("Schema init failed, continuing degraded: {:#}", e);
    } else {
        info!("Message table ready");
    }

    let cache = RedisCache::connect(&config).context("Failed to configure cache")?;

    let service = Arc::new(MessageService::new(Arc::new(store), Arc::new(cache)));
    let state = AppState { service };

    let app = router(state);

    let addr: SocketAddr = config
        .bind_address
        .parse()
        .context("Failed to parse bind address")?;
    info!("Server listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .context("Failed to bind to address")?;

    axum::serve(listener, app).await.context("Server error")?;

    Ok(())
}
