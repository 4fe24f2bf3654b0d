use std::sync::Arc;

use anyhow::Context;
use bingo_hall::config::Config;
use bingo_hall::database::init;
use bingo_hall::model::AppState;
use bingo_hall::store::{BingoStore, MemoryStore, PgStore};
use bingo_hall::{api, logging};
use tracing::{info, warn};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // A missing .env is fine; the process environment still applies.
    dotenv::dotenv().ok();

    let config = Config::from_env().context("Invalid configuration.")?;
    logging::init_tracing(&config.log_filter);

    let store: Arc<dyn BingoStore> = match &config.database_url {
        Some(url) => {
            let pool = init::connect(url, config.max_connections)
                .await
                .context("Failed to connect to the database.")?;
            init::run_migrations(&pool)
                .await
                .context("Failed to prepare the database schema.")?;
            info!(target: "startup", backend = "postgres", "store ready");
            Arc::new(PgStore::new(pool))
        }
        None => {
            warn!(target: "startup", backend = "memory", "DATABASE_URL not set; state is lost on restart");
            Arc::new(MemoryStore::new())
        }
    };

    let app = api::router(AppState::new(store));
    let (host, port) = config.bind_target();
    let listener = tokio::net::TcpListener::bind((host, port))
        .await
        .with_context(|| format!("Failed to bind {host}:{port}."))?;
    let addr = listener.local_addr()?;
    info!(target: "startup", %addr, "listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Server error.")?;
    Ok(())
}

async fn shutdown_signal() {
    if let Err(why) = tokio::signal::ctrl_c().await {
        warn!(target: "shutdown", error = %why, "failed to listen for ctrl-c");
    }
    info!(target: "shutdown", "shutting down");
}
