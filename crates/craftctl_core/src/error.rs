//! Error types for server directory management.

use std::path::PathBuf;

use thiserror::Error;

/// Result type alias using [`CraftError`].
pub type Result<T> = std::result::Result<T, CraftError>;

/// Top-level error type for every craftctl operation.
///
/// All variants are fatal to the invoking command. The only non-fatal
/// condition (setting a property the file did not know about) is reported
/// through `tracing` instead.
#[derive(Debug, Error)]
pub enum CraftError {
    /// The properties file does not exist.
    #[error("Config file not found: {}", path.display())]
    ConfigNotFound {
        /// Path that was looked up.
        path: PathBuf,
    },

    /// The requested property is absent or empty.
    #[error("Property not found: {0}")]
    PropertyNotFound(String),

    /// No manifest entry matched the requested version.
    #[error("Version not found: {0}")]
    VersionNotFound(String),

    /// A remote fetch failed.
    #[error("Failed to download '{url}': {message}")]
    Download {
        /// URL that was requested.
        url: String,
        /// Transport or status error.
        message: String,
    },

    /// The icon source could not be decoded or encoded as an image.
    #[error("Failed to process image: {0}")]
    ImageDecode(String),

    /// Invalid or insufficient command arguments.
    #[error("Invalid arguments: {0}")]
    Argument(String),

    /// Filesystem error on a specific path.
    #[error("IO error on '{}': {source}", path.display())]
    Io {
        /// Path being read or written.
        path: PathBuf,
        /// Underlying error.
        #[source]
        source: std::io::Error,
    },

    /// A manifest or version document was not the expected JSON.
    #[error("Failed to parse document from '{url}': {message}")]
    ManifestParse {
        /// URL the document came from.
        url: String,
        /// Parser message.
        message: String,
    },

    /// The version exists but publishes no server binary.
    #[error("Version {0} has no server download")]
    NoServerDownload(String),

    /// The downloaded binary does not have the advertised size.
    #[error("Downloaded {actual} bytes, expected {expected}")]
    SizeMismatch {
        /// Size advertised by the version metadata.
        expected: u64,
        /// Bytes actually written.
        actual: u64,
    },

    /// The tool settings file is malformed.
    #[error("Failed to parse settings file '{}': {message}", path.display())]
    SettingsParse {
        /// Settings file path.
        path: PathBuf,
        /// Parser message.
        message: String,
    },

    /// The server process could not be spawned.
    #[error("Failed to launch '{program}': {source}")]
    Launch {
        /// Program that was executed.
        program: String,
        /// Underlying error.
        #[source]
        source: std::io::Error,
    },
}

impl CraftError {
    /// Wrap an IO error with the path it happened on.
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    /// Build a download error from anything printable.
    pub fn download(url: &str, message: impl std::fmt::Display) -> Self {
        Self::Download {
            url: url.to_string(),
            message: message.to_string(),
        }
    }
}
