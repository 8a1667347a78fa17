//! Error types for plush-core.
//!
//! The analysis pipeline itself never fails; errors only arise while loading
//! configuration or turning a source file into plain text.

use camino::Utf8PathBuf;
use thiserror::Error;

/// Errors that can occur when working with configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Failed to deserialize configuration.
    #[error("invalid configuration: {0}")]
    Deserialize(#[from] Box<figment::Error>),

    /// Configuration file not found after searching all locations.
    #[error("no configuration file found")]
    NotFound,
}

/// Result type alias using [`ConfigError`].
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Errors that can occur while decoding a manuscript into plain text.
#[derive(Error, Debug)]
pub enum SourceError {
    /// The file could not be read.
    #[error("failed to read {path}")]
    Io {
        /// The file that was being read.
        path: Utf8PathBuf,
        /// The underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// The file exceeds the configured input limit.
    #[error("input too large: {path} is {size} bytes (limit: {limit} bytes)")]
    TooLarge {
        /// The offending file.
        path: Utf8PathBuf,
        /// Actual file size in bytes.
        size: u64,
        /// Configured limit in bytes.
        limit: usize,
    },

    /// The file extension is not one of the supported manuscript formats.
    #[error("unsupported file type: {path} (expected .txt, .docx, or .rtf)")]
    UnsupportedFormat {
        /// The offending file.
        path: Utf8PathBuf,
    },

    /// The bytes are not valid UTF-8.
    #[error("text is not valid UTF-8: {0}")]
    Decode(#[from] std::string::FromUtf8Error),

    /// The `.docx` zip container could not be opened.
    #[error("invalid .docx container: {0}")]
    Container(#[from] zip::result::ZipError),

    /// The `.docx` container has no readable main document part.
    #[error("invalid .docx document part: {0}")]
    DocumentPart(#[source] std::io::Error),

    /// The `.docx` document XML is malformed.
    #[error("malformed .docx XML: {0}")]
    Xml(#[from] quick_xml::Error),
}

/// Result type alias using [`SourceError`].
pub type SourceResult<T> = Result<T, SourceError>;
