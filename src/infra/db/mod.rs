//! Database connection lifecycle.
//!
//! The handle is created once at process start and passed to the adapters
//! that need it; adapters never connect on their own.

use mongodb::{
    bson::{doc, Document},
    options::ClientOptions,
    Client, Collection,
};

use crate::config::DEFAULT_DATABASE_NAME;
use crate::errors::AppResult;

/// Connected MongoDB handle
#[derive(Clone)]
pub struct Database {
    client: Client,
    database: mongodb::Database,
}

impl Database {
    /// Connect and verify the server answers a `ping`.
    ///
    /// `database_name` wins over the database embedded in `url`; if neither
    /// is given, [`DEFAULT_DATABASE_NAME`] is used.
    pub async fn connect(url: &str, database_name: Option<&str>) -> AppResult<Self> {
        let options = ClientOptions::parse(url).await?;
        let name = database_name
            .map(str::to_owned)
            .or_else(|| options.default_database.clone())
            .unwrap_or_else(|| DEFAULT_DATABASE_NAME.to_string());

        let client = Client::with_options(options)?;
        let database = client.database(&name);

        let connected = Self { client, database };
        connected.ping().await?;

        tracing::info!(database = %name, "Database connected");
        Ok(connected)
    }

    /// Gracefully close every pooled connection.
    pub async fn disconnect(&self) {
        self.client.clone().shutdown().await;
        tracing::info!("Database disconnected");
    }

    /// Get a typed handle to a collection.
    ///
    /// Cheap; may be called any number of times for the same name.
    pub fn collection<T: Send + Sync>(&self, name: &str) -> Collection<T> {
        self.database.collection::<T>(name)
    }

    /// Get a raw document handle to a collection.
    pub fn documents(&self, name: &str) -> Collection<Document> {
        self.collection::<Document>(name)
    }

    /// Name of the database in use.
    pub fn name(&self) -> &str {
        self.database.name()
    }

    /// Check database connectivity with a `ping` command.
    pub async fn ping(&self) -> AppResult<()> {
        self.database.run_command(doc! { "ping": 1 }).await?;
        Ok(())
    }
}
