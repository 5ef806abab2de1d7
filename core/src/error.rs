use std::io;
use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ScanError {
    #[error("unable to get subnet: no non-loopback IPv4 interface found")]
    NoSubnet,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read relay config {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to write relay config {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("relay config has no 'source:' declaration")]
    MissingSource,
}

impl ConfigError {
    /// Storage failures, as opposed to a malformed document.
    pub fn is_io(&self) -> bool {
        matches!(self, ConfigError::Read { .. } | ConfigError::Write { .. })
    }
}

#[derive(Debug, Error)]
pub enum SupervisorError {
    #[error("failed to spawn relay '{program}': {source}")]
    Spawn {
        program: String,
        #[source]
        source: io::Error,
    },
}

/// Everything the [`crate::controller::Controller`] can report.
#[derive(Debug, Error)]
pub enum ControlError {
    #[error("'{0}' is not an IPv4 address")]
    InvalidAddress(String),

    #[error(transparent)]
    Scan(#[from] ScanError),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Supervisor(#[from] SupervisorError),
}
