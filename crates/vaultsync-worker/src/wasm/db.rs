use std::time::Duration;

use sea_orm::{ConnectOptions, Database, DatabaseConnection, DbErr};

use crate::config::WorkerConfig;

const CONNECT_TIMEOUT: Duration = Duration::from_secs(5);
const IDLE_TIMEOUT: Duration = Duration::from_secs(30);

/// Open a connection scoped to the current request. An isolate may serve
/// many requests, but nothing is shared between them.
pub async fn db_connect(cfg: &WorkerConfig) -> Result<DatabaseConnection, DbErr> {
    let mut options = ConnectOptions::new(cfg.libsql_url.clone());
    options
        .max_connections(1)
        .min_connections(0)
        .connect_timeout(CONNECT_TIMEOUT)
        .acquire_timeout(CONNECT_TIMEOUT)
        .idle_timeout(IDLE_TIMEOUT)
        .sqlx_logging(false);
    if let Some(token) = cfg.libsql_auth_token.clone() {
        options.libsql_auth_token(token);
    }

    Database::connect(options).await
}
