use std::sync::Arc;

use contacts_api::api::{self, AppState};
use contacts_api::config::{Config, StoreKind};
use contacts_api::domain::repositories::ContactRepository;
use contacts_api::infrastructure::repositories::{
    connect, InMemoryContactRepository, MongoContactRepository,
};
use contacts_api::service::ContactService;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    // Load environment variables
    dotenv::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            tracing::error!("Invalid configuration: {}", e);
            std::process::exit(1);
        }
    };

    let repository: Arc<dyn ContactRepository> = match config.store {
        StoreKind::Mongo => {
            tracing::info!("Connecting to MongoDB...");
            let db = match connect(&config.mongodb_uri, &config.mongodb_database).await {
                Ok(db) => db,
                Err(e) => {
                    tracing::error!("{}", e);
                    std::process::exit(1);
                }
            };
            tracing::info!(database = %config.mongodb_database, "MongoDB connected successfully");
            Arc::new(MongoContactRepository::new(&db))
        }
        StoreKind::Memory => {
            tracing::warn!("Using in-memory contact store; data is lost on exit");
            Arc::new(InMemoryContactRepository::new())
        }
    };

    let app = api::router(AppState::new(ContactService::new(repository)));

    // Start server
    let addr = config.listen_addr();
    let listener = match tokio::net::TcpListener::bind(addr).await {
        Ok(listener) => listener,
        Err(e) => {
            tracing::error!("Failed to bind {}: {}", addr, e);
            std::process::exit(1);
        }
    };
    tracing::info!("Server listening on {}", addr);

    if let Err(e) = axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
    {
        tracing::error!("Server failed: {}", e);
        std::process::exit(1);
    }

    tracing::info!("Server stopped");
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
    }
}
