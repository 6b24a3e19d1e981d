use crate::config::Config;
use crate::errors::StartupError;
use mongodb::bson::doc;
use mongodb::{Client, Database};
use std::time::Duration;

/// How long the startup liveness check may take.
pub const PING_TIMEOUT: Duration = Duration::from_secs(10);

/// Builds the client from `MONGO_URI` and pings the server once. The
/// returned handle is shared for the lifetime of the process; the driver
/// pools connections internally.
pub async fn connect(config: &Config) -> Result<Database, StartupError> {
    let client = Client::with_uri_str(&config.mongo_uri)
        .await
        .map_err(StartupError::Connect)?;

    let db = client.database(&config.db_name);

    tokio::time::timeout(PING_TIMEOUT, async {
        db.run_command(doc! { "ping": 1 }).await
    })
    .await
    .map_err(|_| StartupError::PingTimeout(PING_TIMEOUT))?
    .map_err(StartupError::Ping)?;

    Ok(db)
}
