//! MongoDB database connector and utilities
//!
//! Provides connection management and MongoDB-specific helpers.

mod connector;
mod health;

pub use connector::{MongoError, connect, connect_from_config, connect_with_retry};
pub use health::{HealthStatus, check_health};

// Re-export MongoDB types for convenience
pub use mongodb::{Client, Collection, Database};
