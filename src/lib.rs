pub mod cli;
pub mod config;
pub mod docx;
pub mod error;
pub mod format;
pub mod language;
pub mod search;
pub mod section;
pub mod server;
pub mod tools;
pub mod tracing;

pub use config::Config;
pub use error::{ConversionError, Result, SearchError};
pub use format::{DocxReaderOutput, RelevantSection, SearchResponse};
pub use server::DocSearchServer;
pub use tools::docx_reader::{DocxReaderRequest, handle_docx_reader, search_document};
