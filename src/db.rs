use anyhow::{Context, Result};
use mongodb::bson::{doc, Bson, Document};
use mongodb::options::{ClientOptions, FindOneOptions};
use mongodb::{Client, Collection, Database};
use std::fmt;
use std::time::Duration;
use tokio::sync::OnceCell;

use crate::config::Config;
use crate::models::NewItem;

pub const ITEMS_COLLECTION: &str = "items";

/// Why a database handle could not be produced
#[derive(Debug)]
pub enum ConnectionError {
    /// No connection string was configured
    NotConfigured,
    /// The server could not be reached within the connect timeout
    Unreachable(anyhow::Error),
}

impl fmt::Display for ConnectionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConnectionError::NotConfigured => write!(f, "MONGODB_URI is not set"),
            ConnectionError::Unreachable(err) => write!(f, "{:#}", err),
        }
    }
}

impl std::error::Error for ConnectionError {}

/// An open, verified MongoDB connection
#[derive(Clone)]
pub struct MongoDb {
    client: Client,
    db: Database,
}

impl MongoDb {
    /// Open a client against `uri` and verify it answers a ping within `timeout`.
    ///
    /// The driver connects lazily, so the ping is what actually proves the
    /// server is reachable. The timeout covers the whole attempt, including SRV
    /// and TXT lookups for `mongodb+srv://` URIs.
    pub async fn connect(uri: &str, database: &str, timeout: Duration) -> Result<Self> {
        tokio::time::timeout(timeout, Self::open(uri, database, timeout))
            .await
            .map_err(|_| {
                anyhow::anyhow!("Timed out after {}ms connecting to MongoDB", timeout.as_millis())
            })?
    }

    async fn open(uri: &str, database: &str, timeout: Duration) -> Result<Self> {
        let mut options = ClientOptions::parse(uri)
            .await
            .context("Invalid MongoDB connection string")?;
        options.server_selection_timeout = Some(timeout);
        options.connect_timeout = Some(timeout);
        options.app_name = Some("items-api".to_string());

        let client = Client::with_options(options).context("Failed to create MongoDB client")?;
        let db = client.database(database);

        let mongo = Self { client, db };
        mongo.health_check().await?;

        tracing::info!(database = %database, "Connected to MongoDB");
        Ok(mongo)
    }

    pub async fn health_check(&self) -> Result<()> {
        self.client
            .database("admin")
            .run_command(doc! { "ping": 1 }, None)
            .await
            .context("MongoDB ping failed")?;
        Ok(())
    }

    pub fn items(&self) -> Collection<Document> {
        self.db.collection(ITEMS_COLLECTION)
    }

    /// Insert a new item and return its assigned id as text
    pub async fn insert_item(&self, item: &NewItem) -> Result<String> {
        let result = self
            .items()
            .insert_one(doc! { "name": &item.name }, None)
            .await
            .context("insert_one on items failed")?;

        let id = display_id(&result.inserted_id);
        tracing::debug!("Inserted item with id: {}", id);
        Ok(id)
    }

    /// Fetch the item with the greatest `_id`, which for ObjectIds is the most
    /// recently created one.
    pub async fn latest_item(&self) -> Result<Option<Document>> {
        let options = FindOneOptions::builder().sort(doc! { "_id": -1 }).build();

        let item = self
            .items()
            .find_one(None, options)
            .await
            .context("find_one on items failed")?;

        Ok(item)
    }
}

/// Render a document id as text: hex for ObjectIds, relaxed extended JSON otherwise.
pub fn display_id(id: &Bson) -> String {
    match id {
        Bson::ObjectId(oid) => oid.to_hex(),
        Bson::String(s) => s.clone(),
        other => other.clone().into_relaxed_extjson().to_string(),
    }
}

/// Lazily opens and caches the single process-wide MongoDB connection.
///
/// Initialization runs at most once at a time. A failed attempt leaves the
/// cache empty so the next caller tries again.
pub struct ConnectionManager {
    uri: Option<String>,
    database: String,
    timeout: Duration,
    cell: OnceCell<MongoDb>,
}

impl ConnectionManager {
    pub fn new(uri: Option<String>, database: impl Into<String>, timeout: Duration) -> Self {
        Self {
            uri,
            database: database.into(),
            timeout,
            cell: OnceCell::new(),
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(
            config.mongodb_uri.clone(),
            config.mongodb_database.clone(),
            config.mongodb_connect_timeout,
        )
    }

    /// Return the cached connection, opening it first if needed.
    pub async fn get_connection(&self) -> Result<&MongoDb, ConnectionError> {
        let Some(uri) = self.uri.as_deref() else {
            tracing::error!("MONGODB_URI environment variable not set");
            return Err(ConnectionError::NotConfigured);
        };

        let database = self.database.as_str();
        let timeout = self.timeout;

        self.cell
            .get_or_try_init(|| async move {
                MongoDb::connect(uri, database, timeout)
                    .await
                    .map_err(|e| {
                        tracing::error!("Error connecting to MongoDB: {:#}", e);
                        ConnectionError::Unreachable(e)
                    })
            })
            .await
    }

    /// Ping the database, connecting first if needed.
    pub async fn ping(&self) -> Result<(), ConnectionError> {
        let mongo = self.get_connection().await?;
        mongo
            .health_check()
            .await
            .map_err(ConnectionError::Unreachable)
    }

    pub fn is_connected(&self) -> bool {
        self.cell.initialized()
    }
}
