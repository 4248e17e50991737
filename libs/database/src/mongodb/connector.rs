use core_config::mongodb::MongoConfig;
use mongodb::{Client, options::ClientOptions};
use std::time::Duration;
use tracing::info;

use crate::common::{RetryConfig, retry, retry_with_backoff};

/// Error type for MongoDB operations
#[derive(Debug, thiserror::Error)]
pub enum MongoError {
    #[error("MongoDB error: {0}")]
    Mongo(#[from] mongodb::error::Error),

    #[error("Connection failed: {0}")]
    ConnectionFailed(String),
}

/// Connect to MongoDB and return a Client
///
/// # Arguments
/// * `uri` - MongoDB connection string (e.g., "mongodb://localhost:27017")
///
/// # Example
/// ```ignore
/// use database::mongodb::connect;
///
/// let client = connect("mongodb://localhost:27017").await?;
/// let db = client.database("product");
/// ```
pub async fn connect(uri: &str) -> Result<Client, MongoError> {
    info!("Attempting to connect to MongoDB at {}", uri);

    let mut options = ClientOptions::parse(uri).await?;

    // Set reasonable defaults
    options.max_pool_size = Some(100);
    options.min_pool_size = Some(5);
    options.connect_timeout = Some(Duration::from_secs(10));
    options.server_selection_timeout = Some(Duration::from_secs(30));

    let client = Client::with_options(options)?;

    // Verify connection by listing databases (lightweight ping)
    client
        .list_database_names()
        .await
        .map_err(|e| MongoError::ConnectionFailed(e.to_string()))?;

    info!("Successfully connected to MongoDB");
    Ok(client)
}

/// Connect using a [`MongoConfig`]
///
/// This is the recommended way to connect when using configuration.
pub async fn connect_from_config(config: &MongoConfig) -> Result<Client, MongoError> {
    connect(&config.uri).await
}

/// Connect to MongoDB with automatic retry on failure
///
/// Uses exponential backoff with jitter to retry connection attempts.
/// Useful for handling transient network issues during startup.
///
/// # Example
/// ```ignore
/// use database::mongodb::connect_with_retry;
/// use database::common::RetryConfig;
///
/// // Default retry: 3 attempts, 100ms initial delay
/// let client = connect_with_retry("mongodb://localhost:27017", None).await?;
///
/// // Custom retry: 5 attempts, 500ms initial delay
/// let config = RetryConfig::new()
///     .with_max_retries(5)
///     .with_initial_delay(500);
/// let client = connect_with_retry("mongodb://localhost:27017", Some(config)).await?;
/// ```
pub async fn connect_with_retry(
    uri: &str,
    retry_config: Option<RetryConfig>,
) -> Result<Client, MongoError> {
    let uri_owned = uri.to_string();

    match retry_config {
        Some(config) => retry_with_backoff(|| connect(&uri_owned), config).await,
        None => retry(|| connect(&uri_owned)).await,
    }
}
