use sea_orm::DatabaseConnection;
use tokio::net::TcpListener;

use crate::server::{
    config::{Config, DocumentSyncMode},
    error::Error,
};

/// Connect to the database and run migrations
pub async fn connect_to_database(config: &Config) -> Result<DatabaseConnection, Error> {
    use migration::{Migrator, MigratorTrait};
    use sea_orm::{ConnectOptions, Database};

    let mut opt = ConnectOptions::new(&config.database_url);
    opt.sqlx_logging(false);

    let db = Database::connect(opt).await?;

    Migrator::up(&db, None).await?;

    Ok(db)
}

/// Bind the HTTP listener to the configured address
pub async fn bind_listener(config: &Config) -> Result<TcpListener, Error> {
    let listener = TcpListener::bind(&config.listen_addr).await?;

    Ok(listener)
}

/// Log the settings that change how the server behaves
pub fn log_settings(config: &Config) {
    tracing::info!(
        negative_amount_policy = %config.negative_amount_policy,
        "Billing calculator configured"
    );

    match config.document_sync.mode {
        DocumentSyncMode::Simulate => {
            tracing::info!("Document sync running in simulate mode; no mailbox will be contacted")
        }
        DocumentSyncMode::Live => {
            let host = config
                .document_sync
                .mailbox
                .as_ref()
                .map(|mailbox| mailbox.host.as_str())
                .unwrap_or_default();

            tracing::info!(mailbox_host = %host, "Document sync running in live mode")
        }
    }
}
