use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum SpecError {
    #[error("Failed to read spec file '{path}': {source}")]
    ReadSpec {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Invalid yaml file '{path}': {source}")]
    ParseSpec {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },
}
