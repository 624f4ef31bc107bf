use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid scene config: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("Unknown surface: {0}")]
    UnknownSurface(String),
}
