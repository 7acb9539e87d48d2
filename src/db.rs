use sqlx::{
    postgres::{PgConnectOptions, PgPool, PgPoolOptions, PgSslMode},
    Executor,
};
use std::str::FromStr;
use tracing::{error, info, warn};

const MIN_CONNECTIONS: u32 = 1;
const MAX_CONNECTIONS: u32 = 10;

const SCHEMA: &str = include_str!("../sql/check_ins.sql");

// left behind when the deployment platform fails to substitute variables
const TEMPLATE_MARKERS: [&str; 2] = ["${", "POSTGRES_"];
const PRIVATE_HOST_MARKERS: [&str; 2] = ["zeabur.internal", "localhost"];

pub fn database_url_is_usable(url: &str) -> bool {
    !url.trim().is_empty() && !TEMPLATE_MARKERS.iter().any(|marker| url.contains(marker))
}

pub fn requires_tls(url: &str) -> bool {
    !PRIVATE_HOST_MARKERS
        .iter()
        .any(|marker| url.contains(marker))
}

/// Creates the `check_ins` table when it is missing. Safe to run against a
/// database that already has it.
pub async fn ensure_schema(pool: &PgPool) -> Result<(), sqlx::Error> {
    pool.execute(SCHEMA).await?;
    Ok(())
}

fn connect_options(url: &str) -> Result<PgConnectOptions, sqlx::Error> {
    let ssl_mode = if requires_tls(url) {
        PgSslMode::Require
    } else {
        PgSslMode::Prefer
    };
    Ok(PgConnectOptions::from_str(url)?.ssl_mode(ssl_mode))
}

/// Opens the shared pool and makes sure the `check_ins` table exists.
///
/// Returns `None` when no usable connection string is configured or the
/// first connection cannot be established; the server keeps running and
/// data endpoints report the database as unavailable. A failed schema
/// setup is only logged, the connected pool is still handed back.
pub async fn connect(database_url: Option<&str>) -> Option<PgPool> {
    let database_url = match database_url {
        Some(url) if database_url_is_usable(url) => url,
        _ => {
            error!("DATABASE_URL is missing or still contains template placeholders");
            return None;
        }
    };

    let options = match connect_options(database_url) {
        Ok(options) => options,
        Err(err) => {
            error!(error = %err, "Invalid DATABASE_URL");
            return None;
        }
    };

    let pool = PgPoolOptions::new()
        .min_connections(MIN_CONNECTIONS)
        .max_connections(MAX_CONNECTIONS)
        .connect_with(options)
        .await;

    let pool = match pool {
        Ok(pool) => pool,
        Err(err) => {
            error!(error = %err, "Failed to connect to Postgres");
            return None;
        }
    };

    match ensure_schema(&pool).await {
        Ok(_) => info!("Table check_ins is ready"),
        Err(err) => warn!(error = %err, "Schema initialisation failed"),
    }

    Some(pool)
}
