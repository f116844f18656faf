//! Error types for mapping and configuration.

use thiserror::Error;

/// Errors raised while building a mapping.
#[derive(Debug, Error)]
pub enum MappingError {
    /// A field references a type with no registered capability.
    #[error("there is no plugin for field type \"{field_type}\" (field \"{field_id}\")")]
    UnrecognizedFieldType {
        field_type: String,
        field_id: String,
    },
}

/// Errors raised while loading a field-type configuration file.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("invalid config: {0}")]
    Invalid(String),
}

/// Result type for mapping operations.
pub type MappingResult<T> = Result<T, MappingError>;

/// Result type for configuration loading.
pub type ConfigResult<T> = Result<T, ConfigError>;
