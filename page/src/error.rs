//! Error types for content validation and static export.

#[cfg(feature = "ssr")]
use std::path::PathBuf;

use thiserror::Error;

use crate::content::ContentId;

/// A content record broke the data-model invariants.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ContentError {
    /// Title is empty or whitespace.
    #[error("content item {id} has an empty title")]
    EmptyTitle {
        /// Identifier of the offending item
        id: ContentId,
    },
    /// Destination is not an absolute http(s) link.
    #[error("`{url}` is not an absolute http(s) URL")]
    InvalidUrl {
        /// The rejected value
        url: String,
    },
    /// Two items in one feed share an identifier.
    #[error("duplicate content id {0}")]
    DuplicateId(ContentId),
}

/// Failure while writing the static page to disk.
#[cfg(feature = "ssr")]
#[derive(Debug, Error)]
pub enum ExportError {
    /// Reading or writing a file failed.
    #[error("i/o error on {}: {source}", path.display())]
    Io {
        /// File or directory involved
        path: PathBuf,
        /// Underlying error
        #[source]
        source: std::io::Error,
    },
    /// The config file exists but is not valid TOML for [`crate::config::ManzConfig`].
    #[error("invalid config {}: {source}", path.display())]
    Config {
        /// Config file path
        path: PathBuf,
        /// Parse error
        #[source]
        source: toml::de::Error,
    },
}
