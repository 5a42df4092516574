//! Error types for the demo generators.
//!
//! Every failure of a generator run is a [`FilesystemError`]: the pipeline only
//! ever touches the filesystem, and nothing is recovered locally. Problems with
//! the optional YAML configuration are reported separately as [`ConfigError`].

use std::ffi::OsString;
use std::path::PathBuf;

/// A filesystem failure while scanning a source directory or writing an artifact.
#[derive(Debug, thiserror::Error)]
pub enum FilesystemError {
    /// The source directory could not be opened (missing, not a directory,
    /// permission denied).
    #[error("cannot read directory {path:?}: {source}")]
    ReadDir {
        path: PathBuf,
        source: std::io::Error,
    },

    /// An entry of an already opened directory could not be read.
    #[error("cannot read entry in {path:?}: {source}")]
    ReadEntry {
        path: PathBuf,
        source: std::io::Error,
    },

    /// An entry name is not valid Unicode and cannot be written to an artifact.
    #[error("entry {name:?} in {path:?} is not valid Unicode")]
    NonUnicodeName { path: PathBuf, name: OsString },

    /// The output file could not be created, written or flushed.
    #[error("cannot write {path:?}: {source}")]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },
}

impl FilesystemError {
    /// The path the failing operation was working on.
    pub fn path(&self) -> &std::path::Path {
        match self {
            Self::ReadDir { path, .. }
            | Self::ReadEntry { path, .. }
            | Self::NonUnicodeName { path, .. }
            | Self::Write { path, .. } => path,
        }
    }
}

/// A problem with the YAML configuration file or with its values.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("cannot read config file {path:?}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("cannot parse config file {path:?}: {source}")]
    Parse {
        path: PathBuf,
        source: serde_yaml::Error,
    },

    #[error("invalid config value: {message}")]
    Invalid { message: String },
}

impl ConfigError {
    pub fn invalid(msg: impl Into<String>) -> Self {
        Self::Invalid {
            message: msg.into(),
        }
    }
}

/// Convenience alias for generator operations.
pub type Result<T> = std::result::Result<T, FilesystemError>;
