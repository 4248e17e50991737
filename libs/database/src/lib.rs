//! Database library providing the MongoDB connector and utilities for the
//! catalog service.
//!
//! # Example
//!
//! ```ignore
//! use database::mongodb;
//!
//! let client = mongodb::connect("mongodb://localhost:27017").await?;
//! let db = client.database("product");
//! let collection = db.collection::<Document>("product");
//! ```

pub mod common;
pub mod mongodb;

pub use common::{RetryConfig, retry, retry_with_backoff};
pub use mongodb::MongoError;
