use serde::de::DeserializeOwned;
use std::path::Path;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    FileError(#[from] std::io::Error),
    #[error("Failed to parse YAML: {0}")]
    YamlError(#[from] serde_yaml::Error),
    #[error("Invalid configuration: {0}")]
    ValidationError(String),
}

/// Reads a YAML file into any deserializable configuration type.
pub fn load_yaml<T: DeserializeOwned, P: AsRef<Path>>(path: P) -> Result<T, ConfigError> {
    let file_contents = std::fs::read_to_string(path)?;
    Ok(serde_yaml::from_str(&file_contents)?)
}
