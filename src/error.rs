//! Error handling types and utilities.

use std::path::PathBuf;
use thiserror::Error;

/// A specialized Result type for the document search pipeline.
pub type Result<T> = std::result::Result<T, SearchError>;

/// Errors raised by the `docx-reader` tool.
///
/// None of these are caught inside the pipeline; they propagate to the server
/// layer, which turns them into a caller-visible failure.
#[derive(Debug, Error)]
pub enum SearchError {
    /// The query was empty after trimming.
    #[error("Query cannot be empty")]
    EmptyQuery,

    /// The configured source document does not exist.
    #[error("File {filename} not found in {}", dir.display())]
    DocumentNotFound { filename: String, dir: PathBuf },

    /// The document exists but could not be read.
    #[error("Failed to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The document could not be converted to markup.
    #[error(transparent)]
    Conversion(#[from] ConversionError),
}

/// Error returned when a `.docx` container cannot be turned into markup.
#[derive(Debug, Error)]
pub enum ConversionError {
    /// The bytes are not a readable ZIP archive.
    #[error("Document is not a valid DOCX archive: {0}")]
    Archive(#[from] zip::result::ZipError),

    /// A required part is missing from the archive.
    #[error("Document is missing {0}")]
    MissingPart(&'static str),

    /// A part could not be read from the archive.
    #[error("Failed to read {part}: {source}")]
    ReadPart {
        part: &'static str,
        #[source]
        source: std::io::Error,
    },

    /// A part is not well-formed XML.
    #[error("Failed to parse {part}: {source}")]
    Xml {
        part: &'static str,
        #[source]
        source: roxmltree::Error,
    },
}
