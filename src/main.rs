mod api;
mod config;
mod db;
mod errors;
mod models;
mod players;

use api::ApiServer;
use config::Config;
use players::MongoPlayerStore;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> ExitCode {
    init_tracing();

    // ── 1. Configuration ───────────────────────────────────────────
    let config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            tracing::error!("{}", e);
            return ExitCode::FAILURE;
        }
    };

    // ── 2. Connect and verify MongoDB ──────────────────────────────
    let db = match db::connect(&config).await {
        Ok(db) => db,
        Err(e) => {
            tracing::error!("{}", e);
            return ExitCode::FAILURE;
        }
    };
    tracing::info!(database = %config.db_name, "MongoDB Connected");

    // ── 3. Serve until Ctrl+C ──────────────────────────────────────
    let server = ApiServer::new(MongoPlayerStore::new(&db));
    if let Err(e) = server.run(config.port).await {
        tracing::error!("Server failed: {:#}", e);
        return ExitCode::FAILURE;
    }

    ExitCode::SUCCESS
}

/// `RUST_LOG` picks the filter (default `info`); `LOG_FORMAT=json` switches
/// to one JSON object per line.
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let builder = tracing_subscriber::fmt().with_env_filter(filter);

    match std::env::var("LOG_FORMAT").as_deref() {
        Ok("json") => builder.json().init(),
        _ => builder.init(),
    }
}
