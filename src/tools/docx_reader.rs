//! `docx-reader` tool: find the sections of the configured document that match a query.

use crate::config::Config;
use crate::docx::convert_docx;
use crate::error::{Result, SearchError};
use crate::format::{SearchResponse, build_response};
use crate::language::detect_language;
use crate::search::{expand_parents_to_children, query_words, score_sections};
use crate::section::{build_relationships, extract_sections};
use rmcp::schemars;
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize, schemars::JsonSchema)]
pub struct DocxReaderRequest {
    /// Keyword search text
    pub query: String,
    /// The user's original message, used only to pick the response language
    #[serde(default)]
    pub user_input: Option<String>,
}

impl DocxReaderRequest {
    pub fn new(query: impl Into<String>) -> Self {
        Self {
            query: query.into(),
            user_input: None,
        }
    }

    #[must_use]
    pub fn with_user_input(mut self, user_input: impl Into<String>) -> Self {
        self.user_input = Some(user_input.into());
        self
    }
}

/// Read the configured document and search it.
///
/// The query is validated before the filesystem is touched.
pub async fn handle_docx_reader(config: &Config, request: DocxReaderRequest) -> Result<SearchResponse> {
    let query = request.query.trim();
    if query.is_empty() {
        return Err(SearchError::EmptyQuery);
    }

    let lang = request.user_input.as_deref().map(detect_language);
    tracing::debug!("user_input: {:?}", request.user_input);
    tracing::info!("Query: {:?}, language: {:?}", query, lang);

    let path = config.document_path();
    let exists = tokio::fs::try_exists(&path)
        .await
        .map_err(|source| SearchError::Read {
            path: path.clone(),
            source,
        })?;
    if !exists {
        return Err(SearchError::DocumentNotFound {
            filename: config.document_name.clone(),
            dir: config.document_dir(),
        });
    }

    let bytes = tokio::fs::read(&path)
        .await
        .map_err(|source| SearchError::Read {
            path: path.clone(),
            source,
        })?;

    search_document(&bytes, &config.document_name, query, lang)
}

/// Run the search pipeline over raw `.docx` bytes.
///
/// `query` must already be trimmed and non-empty; `filename` is only used in
/// the rendered summary.
pub fn search_document(
    bytes: &[u8],
    filename: &str,
    query: &str,
    lang: Option<&str>,
) -> Result<SearchResponse> {
    let markup = convert_docx(bytes)?;
    let sections = extract_sections(&markup);
    let relationships = build_relationships(&sections);

    let words = query_words(query);
    tracing::debug!("Query words: {:?}", words);

    let scored = score_sections(&sections, &words);
    let top_sections = expand_parents_to_children(&sections, &scored, &words);

    Ok(build_response(filename, query, &top_sections, &relationships, lang))
}
