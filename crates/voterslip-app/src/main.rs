use std::sync::Arc;

use salvo::caching_headers::CachingHeaders;
use salvo::conn::TcpListener;
use salvo::logging::Logger;
use salvo::{Listener, Router};
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, reload, util::SubscriberInitExt};

use voterslip_app::app::api::routes;
use voterslip_app::config::ConfigHandler;
use voterslip_app::store_handler::StoreHandler;
use voterslip_core::config::load_config;
use voterslip_store::firebase::FirebaseStore;
use voterslip_store::memory::MemoryStore;
use voterslip_store::store::VoterStore;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let (filter_layer, filter_handle) = reload::Layer::new(EnvFilter::new("debug"));

    tracing_subscriber::registry()
        .with(filter_layer)
        .with(
            fmt::layer()
                .with_target(true)
                .with_thread_ids(true)
                .with_file(true)
                .with_line_number(true),
        )
        .init();

    tracing::info!("Starting voterslip lookup server");

    let config = load_config()?;

    tracing::info!(config = ?config, "Configuration loaded");

    if let Ok(filter) = EnvFilter::try_new(config.logging.level.as_str()) {
        if let Err(e) = filter_handle.modify(|current| *current = filter) {
            tracing::warn!(error = %e, "Failed to update log filter from config");
        }
    } else {
        tracing::warn!(level = %config.logging.level, "Invalid log level in config, keeping debug");
    }

    let store: Arc<dyn VoterStore> = if config.store.is_remote() {
        tracing::info!(base_url = %config.store.base_url, "Using remote voter store");
        Arc::new(FirebaseStore::from_config(&config.store)?)
    } else {
        tracing::warn!("No store.base_url configured; serving the built-in demo roll");
        Arc::new(MemoryStore::demo())
    };

    let bind_addr = config.server.bind_addr();
    let acceptor = TcpListener::new(bind_addr.clone()).bind().await;

    let router = Router::new()
        .hoop(Logger::new())
        .hoop(CachingHeaders::new())
        .hoop(StoreHandler { store })
        .hoop(ConfigHandler {
            settings: config.clone(),
        })
        .push(routes());

    tracing::info!("Server listening on {bind_addr}");

    salvo::Server::new(acceptor).serve(router).await;

    Ok(())
}
