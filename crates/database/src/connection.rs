use std::time::Duration;

use bson::doc;
use configuration::StoreSettings;
use core_types::LearnerProfile;
use mongodb::options::ClientOptions;
use mongodb::{Client, Collection, Database};
use tracing::info;

use crate::error::DbError;

/// A live handle to the document-store service.
///
/// The handle is built once by [`connect`] and passed explicitly to every
/// repository that needs it; no process-global connection state exists.
/// Cloning is cheap and all clones share the underlying connection pool.
#[derive(Debug, Clone)]
pub struct StoreClient {
    client: Client,
    database: Database,
    profile_collection: String,
    operation_timeout: Duration,
}

impl StoreClient {
    pub(crate) fn profiles(&self) -> Collection<LearnerProfile> {
        self.database.collection(&self.profile_collection)
    }

    pub(crate) fn operation_timeout(&self) -> Duration {
        self.operation_timeout
    }

    /// Releases the connection deterministically.
    ///
    /// Outstanding clones of this handle stop working once shutdown
    /// completes.
    pub async fn disconnect(self) {
        self.client.shutdown().await;
        info!("disconnected from the document store");
    }
}

/// Establishes a verified connection to the document-store service.
///
/// Applies the configured connect bound to both connection establishment and
/// server selection, then issues a ping: the driver connects lazily, and the
/// ping makes `connect` fail fast on an unreachable endpoint instead of
/// failing the first store operation.
pub async fn connect(settings: &StoreSettings) -> Result<StoreClient, DbError> {
    let mut options = ClientOptions::parse(&settings.uri)
        .await
        .map_err(|e| DbError::ConnectionConfig(e.to_string()))?;
    options.connect_timeout = Some(settings.connect_timeout());
    options.server_selection_timeout = Some(settings.connect_timeout());

    let client = Client::with_options(options)?;
    let database = client.database(&settings.database);

    let ping = database.run_command(doc! { "ping": 1 });
    match tokio::time::timeout(settings.connect_timeout(), ping).await {
        Ok(outcome) => {
            outcome?;
        }
        Err(_) => {
            return Err(DbError::Timeout {
                limit: settings.connect_timeout(),
            });
        }
    }

    info!(database = %settings.database, "connected to the document store");

    Ok(StoreClient {
        client,
        database,
        profile_collection: settings.profile_collection.clone(),
        operation_timeout: settings.operation_timeout(),
    })
}

/// Establishes a connection from `.env`-provided settings.
///
/// This reads the `.env` file, resolves the layered configuration
/// (defaults, `config.toml`, `LEARNER_*` environment overrides) and then
/// delegates to [`connect`].
pub async fn connect_from_env() -> Result<StoreClient, DbError> {
    dotenvy::dotenv().map_err(|e| DbError::ConnectionConfig(e.to_string()))?;

    let settings =
        configuration::load_settings().map_err(|e| DbError::ConnectionConfig(e.to_string()))?;

    connect(&settings.store).await
}
