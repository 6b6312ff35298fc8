use std::time::Duration;

use serde::Deserialize;

use crate::error::ConfigError;

/// The root configuration structure for the application.
#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub store: StoreSettings,
}

/// Connection parameters for the document-store service.
#[derive(Debug, Clone, Deserialize)]
pub struct StoreSettings {
    /// Endpoint address of the document-store service
    /// (e.g. "mongodb://localhost:27017").
    pub uri: String,
    /// The database that holds all platform collections.
    pub database: String,
    /// Collection holding the learner-profile documents.
    pub profile_collection: String,
    /// Collection reserved for course documents. Course storage has no
    /// operations yet; the name is part of the deployment surface so it is
    /// configured alongside the profile collection.
    pub course_collection: String,
    /// Bound on establishing and verifying the connection, in seconds.
    #[serde(default = "default_connect_timeout_secs")]
    pub connect_timeout_secs: u64,
    /// Bound on a single store operation round trip, in seconds.
    #[serde(default = "default_operation_timeout_secs")]
    pub operation_timeout_secs: u64,
}

fn default_connect_timeout_secs() -> u64 {
    10
}

fn default_operation_timeout_secs() -> u64 {
    5
}

impl StoreSettings {
    pub fn connect_timeout(&self) -> Duration {
        Duration::from_secs(self.connect_timeout_secs)
    }

    pub fn operation_timeout(&self) -> Duration {
        Duration::from_secs(self.operation_timeout_secs)
    }
}

impl Settings {
    /// Rejects settings that could only fail later, at connection time, with
    /// a far less specific error.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let store = &self.store;
        for (field, value) in [
            ("store.uri", &store.uri),
            ("store.database", &store.database),
            ("store.profile_collection", &store.profile_collection),
            ("store.course_collection", &store.course_collection),
        ] {
            if value.trim().is_empty() {
                return Err(ConfigError::ValidationError(format!(
                    "`{field}` must not be empty"
                )));
            }
        }
        Ok(())
    }
}
