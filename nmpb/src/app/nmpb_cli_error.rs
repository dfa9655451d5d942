use crate::model::EmissionError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum NmpbCliError {
    #[error("failure reading emission model configuration: {0}")]
    ConfigurationError(String),
    #[error("failure computing emission: {source}")]
    EmissionError {
        #[from]
        source: EmissionError,
    },
    #[error("failure reading configuration: {source}")]
    StdIoError {
        #[from]
        source: std::io::Error,
    },
    #[error("failure decoding TOML: {source}")]
    TomlError {
        #[from]
        source: toml::de::Error,
    },
    #[error("failure with JSON: {source}")]
    SerdeJsonError {
        #[from]
        source: serde_json::Error,
    },
}
