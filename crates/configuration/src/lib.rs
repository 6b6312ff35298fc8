//! # Configuration Crate
//!
//! Typed settings for the learner-profile platform. Settings are read from
//! `config.toml` and can be overridden through the environment (prefix
//! `LEARNER`, `__` as the nesting separator, e.g. `LEARNER_STORE__URI`).

pub mod error;
pub mod settings;

// Re-export the core types to provide a clean public API.
pub use error::ConfigError;
pub use settings::{Settings, StoreSettings};

/// Loads the application configuration.
///
/// This function is the primary entry point for this crate. It layers
/// built-in defaults, the optional `config.toml` file, and environment
/// overrides, then deserializes the result into our strongly-typed
/// `Settings` struct.
pub fn load_settings() -> Result<Settings, ConfigError> {
    let builder = config::Config::builder()
        // Defaults make a missing config.toml equivalent to a local setup.
        .set_default("store.uri", "mongodb://localhost:27017")?
        .set_default("store.database", "learning_platform")?
        .set_default("store.profile_collection", "users")?
        .set_default("store.course_collection", "courses")?
        .add_source(config::File::with_name("config.toml").required(false))
        .add_source(config::Environment::with_prefix("LEARNER").separator("__"))
        .build()?;

    let settings = builder.try_deserialize::<Settings>()?;
    settings.validate()?;
    Ok(settings)
}

#[cfg(test)]
mod tests {
    use super::*;
    use config::{File, FileFormat};

    fn parse(toml: &str) -> Settings {
        config::Config::builder()
            .add_source(File::from_str(toml, FileFormat::Toml))
            .build()
            .unwrap()
            .try_deserialize::<Settings>()
            .unwrap()
    }

    #[test]
    fn full_settings_file_parses() {
        let settings = parse(
            r#"
            [store]
            uri = "mongodb://db.internal:27017"
            database = "platform"
            profile_collection = "profiles"
            course_collection = "courses"
            connect_timeout_secs = 3
            operation_timeout_secs = 2
            "#,
        );
        assert_eq!(settings.store.uri, "mongodb://db.internal:27017");
        assert_eq!(settings.store.profile_collection, "profiles");
        assert_eq!(settings.store.connect_timeout().as_secs(), 3);
        assert_eq!(settings.store.operation_timeout().as_secs(), 2);
    }

    #[test]
    fn timeouts_fall_back_to_defaults_when_omitted() {
        let settings = parse(
            r#"
            [store]
            uri = "mongodb://localhost:27017"
            database = "platform"
            profile_collection = "users"
            course_collection = "courses"
            "#,
        );
        assert_eq!(settings.store.connect_timeout().as_secs(), 10);
        assert_eq!(settings.store.operation_timeout().as_secs(), 5);
    }

    #[test]
    fn blank_collection_name_fails_validation() {
        let settings = parse(
            r#"
            [store]
            uri = "mongodb://localhost:27017"
            database = "platform"
            profile_collection = "  "
            course_collection = "courses"
            "#,
        );
        let err = settings.validate().unwrap_err();
        assert!(matches!(err, ConfigError::ValidationError(_)));
        assert!(err.to_string().contains("store.profile_collection"));
    }

    #[test]
    fn built_in_defaults_yield_a_valid_local_setup() {
        let settings = load_settings().unwrap();
        assert!(settings.store.uri.starts_with("mongodb://"));
        assert_eq!(settings.store.profile_collection, "users");
        assert_eq!(settings.store.course_collection, "courses");
    }
}
