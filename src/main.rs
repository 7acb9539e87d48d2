#[deny(clippy::all)]
use checkins::{CheckInStore, PgCheckInStore};
use config::Config;
use dotenv::dotenv;
use poem::{listener::TcpListener, Server};
use std::sync::Arc;
use tokio::time::Duration;
use tracing::info;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

mod analyze;
mod app;
mod checkins;
mod config;
mod db;
mod frontend;
mod health;
mod utils;

#[tokio::main]
async fn main() -> Result<(), std::io::Error> {
    dotenv().ok(); // This line loads the environment variables from the ".env" file.
    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(EnvFilter::from_env("RUST_LOG"))
        .init();

    info!("Starting check-in passport");
    let config = Config::from_env();

    let pool = db::connect(config.database_url.as_deref()).await;
    let store = pool
        .clone()
        .map(|pool| Arc::new(PgCheckInStore::new(pool)) as Arc<dyn CheckInStore>);

    let app = app::build_app(&config, store);

    info!(addr = %config.listen_addr(), "Server running");
    Server::new(TcpListener::bind(config.listen_addr()))
        .run_with_graceful_shutdown(
            app,
            async move {
                let _ = tokio::signal::ctrl_c().await;
                if let Some(pool) = pool {
                    pool.close().await;
                }
            },
            Some(Duration::from_secs(5)),
        )
        .await
}
