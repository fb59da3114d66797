use std::sync::Arc;

use account_service::config;
use account_service::database::manager;
use account_service::database::memory::MemoryAccountStore;
use account_service::database::postgres::PgAccountStore;
use account_service::database::store::AccountStore;
use account_service::routes::{app, AppState};

#[tokio::main]
async fn main() {
    // Load .env if present so cargo run picks up DATABASE_URL, PORT, etc.
    let _ = dotenvy::dotenv();

    let config = config::config();

    tracing_subscriber::fmt::init();
    tracing::info!("Starting Account API in {:?} mode", config.environment);

    let store: Arc<dyn AccountStore> = match config.database.url.as_deref() {
        Some(url) => {
            let pool = manager::connect(url, &config.database)
                .await
                .unwrap_or_else(|e| panic!("failed to connect to database: {}", e));

            let store = PgAccountStore::new(pool);
            store
                .ensure_schema()
                .await
                .unwrap_or_else(|e| panic!("failed to prepare accounts table: {}", e));

            Arc::new(store)
        }
        None => {
            tracing::warn!("DATABASE_URL not set, using in-memory account store");
            Arc::new(MemoryAccountStore::new())
        }
    };

    let app = app(AppState { store });

    let bind_addr = format!("0.0.0.0:{}", config.server.port);
    let listener = tokio::net::TcpListener::bind(&bind_addr)
        .await
        .unwrap_or_else(|e| panic!("failed to bind {}: {}", bind_addr, e));

    tracing::info!("Account API listening on http://{}", bind_addr);

    axum::serve(listener, app).await.expect("server");
}
