use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AztroError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("invalid configuration: {0}")]
    Config(#[from] toml::de::Error),

    #[error("ephemeris path cannot be passed to the native library: {0}")]
    EphemerisPath(PathBuf),

    #[error("an ephemeris session is already open")]
    ProviderBusy,

    #[error("no record with id {0}")]
    RecordNotFound(u32),
}

pub type Result<T> = std::result::Result<T, AztroError>;
