use std::sync::Arc;

use corkboard_app::app::api::routes;
use corkboard_app::config::ConfigHandler;
use corkboard_app::notifier_handler::NotifierHandler;
use corkboard_app::store_handler::StoreHandler;
use corkboard_core::config::load_config;
use corkboard_service::notify::Notifier;
use corkboard_store::EventStore;
use corkboard_store::memory::MemoryStore;
use salvo::conn::TcpListener;
use salvo::{Listener, Router};
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, reload, util::SubscriberInitExt};

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

    tracing::info!("Starting Corkboard events server");

    let config = load_config()?;

    tracing::info!(config = ?config, "Configuration loaded");

    if let Ok(filter) = EnvFilter::try_new(config.logging.level.as_str()) {
        if let Err(e) = filter_handle.modify(|current| *current = filter) {
            tracing::warn!(error = %e, "Failed to update log filter from config");
        }
    } else {
        tracing::warn!(level = %config.logging.level, "Invalid log level in config, keeping debug");
    }

    let store: Arc<dyn EventStore + Send + Sync> = Arc::new(MemoryStore::new());
    let notifier = Arc::new(Notifier::new(
        config.submissions.webhook_url.clone(),
        config.server.origin(),
    ));

    if notifier.is_configured() {
        tracing::info!("Submission webhook enabled");
    }

    let bind_addr = format!("{}:{}", config.server.host, config.server.port);
    let acceptor = TcpListener::new(bind_addr.clone()).bind().await;

    let router = Router::new()
        .hoop(StoreHandler { store })
        .hoop(ConfigHandler {
            settings: config.clone(),
        })
        .hoop(NotifierHandler { notifier })
        .push(routes());

    tracing::info!("Server listening on {bind_addr}");

    salvo::Server::new(acceptor).serve(router).await;

    Ok(())
}
