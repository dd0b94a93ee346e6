//! Error type for config persistence.

use std::path::PathBuf;

/// Failure while loading, saving, or reloading the config file.
///
/// File-level variants carry the path of the offending file so log lines
/// point at the actual `config.ron` involved, not just the errno.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// The config file exists but could not be read.
    #[error("cannot read config file {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The config file or its directory could not be written.
    #[error("cannot write config file {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The config file is not valid RON for the current schema.
    #[error("malformed config file {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: ron::error::SpannedError,
    },

    /// The in-memory config could not be serialized to RON.
    #[error("cannot serialize config: {0}")]
    Serialize(#[source] ron::Error),
}
