use coursehub::{
    CoursehubService, InMemoryStorage, MongoStorage, Storage, api,
    config::CONFIG,
};
use std::net::SocketAddr;
use std::sync::Arc;
use tracing::{error, info, warn};

async fn serve<S: Storage + 'static>(storage: S) -> Result<(), Box<dyn std::error::Error>> {
    let service = Arc::new(CoursehubService::new(storage));
    let app = api::app(service);

    let addr = SocketAddr::from(([0, 0, 0, 0], CONFIG.port));
    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!("Server running on port {}", CONFIG.port);
    axum::serve(listener, app).await?;

    Ok(())
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize tracing
    tracing_subscriber::fmt().with_env_filter(CONFIG.log_level.as_str()).init();
    info!(config = ?*CONFIG, "starting coursehub");

    if CONFIG.uses_memory_store() {
        warn!("Using in-memory storage; data is lost on exit");
        return serve(InMemoryStorage::new()).await;
    }

    // A store that cannot be reached at startup is fatal: no retry.
    let storage = match MongoStorage::connect(&CONFIG.database_url, &CONFIG.database_name).await {
        Ok(storage) => {
            info!("MongoDB connected");
            storage
        }
        Err(e) => {
            error!("MongoDB connection error: {}", e);
            std::process::exit(1);
        }
    };
    serve(storage).await
}
