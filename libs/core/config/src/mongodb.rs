use crate::{env_required, ConfigError, FromEnv};

/// MongoDB connection configuration.
///
/// Only the URI lives here; database and collection names are owned by the
/// repositories that use them.
#[derive(Clone, Debug)]
pub struct MongoConfig {
    pub uri: String,
}

impl MongoConfig {
    pub fn new(uri: impl Into<String>) -> Self {
        Self { uri: uri.into() }
    }
}

impl FromEnv for MongoConfig {
    /// Requires MONGO_URI to be set (no default)
    fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            uri: env_required("MONGO_URI")?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mongo_config_from_env_success() {
        temp_env::with_var("MONGO_URI", Some("mongodb://localhost:27017"), || {
            let config = MongoConfig::from_env().unwrap();
            assert_eq!(config.uri, "mongodb://localhost:27017");
        });
    }

    #[test]
    fn test_mongo_config_from_env_missing() {
        temp_env::with_var_unset("MONGO_URI", || {
            let err = MongoConfig::from_env().unwrap_err();
            assert!(err.to_string().contains("MONGO_URI"));
        });
    }

    #[test]
    fn test_mongo_config_new() {
        let config = MongoConfig::new("mongodb://prod-host:27017");
        assert_eq!(config.uri, "mongodb://prod-host:27017");
    }
}
