use crate::error::ConfigError;
use std::path::Path;

// Declare the modules that make up this crate.
pub mod error;
pub mod logging;
pub mod settings;

// Re-export the core types to provide a clean public API.
pub use logging::init_tracing;
pub use settings::{Config, DatasetSettings, LoggingSettings, OutputFormat, ReportSettings};

/// Prefix for environment overrides, e.g. `TELEINSIGHT_DATASET__PATH`.
///
/// A single `_` follows the prefix; `__` separates nested keys.
pub const ENV_PREFIX: &str = "TELEINSIGHT";

/// Loads the application configuration.
///
/// Sources are layered: built-in defaults, then the TOML file at `path` (which
/// may be absent), then `TELEINSIGHT_*` environment variables. The merged result
/// is deserialized into the strongly-typed `Config` and validated.
pub fn load_config(path: &Path) -> Result<Config, ConfigError> {
    load_layered(path, environment())
}

fn environment() -> config::Environment {
    config::Environment::with_prefix(ENV_PREFIX)
        .prefix_separator("_")
        .separator("__")
        .try_parsing(true)
}

fn load_layered(path: &Path, env: config::Environment) -> Result<Config, ConfigError> {
    let builder = config::Config::builder()
        .add_source(config::File::from(path).required(false))
        .add_source(env)
        .build()?;

    // Attempt to deserialize the entire configuration into our `Config` struct
    let config = builder.try_deserialize::<Config>()?;
    validate(&config)?;

    Ok(config)
}

fn validate(config: &Config) -> Result<(), ConfigError> {
    if config.reports.top_n == 0 {
        return Err(ConfigError::ValidationError(
            "reports.top_n must be at least 1".to_string(),
        ));
    }
    if config.dataset.path.as_os_str().is_empty() {
        return Err(ConfigError::ValidationError(
            "dataset.path must not be empty".to_string(),
        ));
    }
    Ok(())
}
