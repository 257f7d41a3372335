//! Shared test fixtures and utilities for integration tests.
//!
//! # Available Fixtures
//!
//! - `brd_workspace`: a temp directory holding a small requirements document at
//!   the default `src/documents/[AIVIN] - BRD.docx` location, plus a [`Config`]
//!   pointing at it.
//! - `empty_workspace`: the same layout with no document on disk.
//!
//! Documents are real `.docx` archives built with [`DocxBuilder`], so every test
//! exercises the converter as well as the search pipeline.

use docx_search_mcp::Config;
use docx_search_mcp::config::{DEFAULT_DOCUMENT_DIR, DEFAULT_DOCUMENT_NAME};
use rstest::fixture;
use std::io::{Cursor, Write};
use std::path::{Path, PathBuf};
use tempfile::TempDir;
use zip::write::SimpleFileOptions;

const W_NS: &str = "http://schemas.openxmlformats.org/wordprocessingml/2006/main";

/// A temporary directory for test isolation, removed on drop.
#[allow(dead_code)] // Methods used across different integration test crates
pub struct TempWorkspace {
    _temp: TempDir,
    root: PathBuf,
}

#[allow(dead_code)] // Methods used across different integration test crates
impl TempWorkspace {
    /// Creates a new empty temporary workspace.
    pub fn new() -> Self {
        let temp = TempDir::new().expect("Failed to create temp directory");
        let root = temp.path().to_path_buf();
        Self { _temp: temp, root }
    }

    /// Returns the root path of this workspace.
    pub fn path(&self) -> &Path {
        &self.root
    }

    /// Creates a file with the given bytes, creating parent directories as needed.
    ///
    /// # Panics
    /// Panics if file creation fails.
    pub fn create_file(&self, path: &str, content: &[u8]) {
        let full_path = self.root.join(path);
        if let Some(parent) = full_path.parent() {
            std::fs::create_dir_all(parent).unwrap_or_else(|e| {
                panic!("Failed to create parent directory for '{}': {}", path, e)
            });
        }
        std::fs::write(&full_path, content)
            .unwrap_or_else(|e| panic!("Failed to write file '{}': {}", path, e));
    }
}

impl Default for TempWorkspace {
    fn default() -> Self {
        Self::new()
    }
}

/// Builds a minimal `.docx` archive paragraph by paragraph.
///
/// # Example
///
/// ```ignore
/// let bytes = DocxBuilder::new()
///     .heading(1, "1. Overview")
///     .paragraph("Some text")
///     .build();
/// ```
#[derive(Debug, Default)]
pub struct DocxBuilder {
    body: String,
}

#[allow(dead_code)] // Methods used across different integration test crates
impl DocxBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a paragraph styled `Heading{level}`.
    pub fn heading(mut self, level: u8, text: &str) -> Self {
        self.body.push_str(&format!(
            r#"<w:p><w:pPr><w:pStyle w:val="Heading{level}"/></w:pPr><w:r><w:t>{}</w:t></w:r></w:p>"#,
            escape(text)
        ));
        self
    }

    /// Appends an unstyled paragraph.
    pub fn paragraph(mut self, text: &str) -> Self {
        self.body.push_str(&format!(
            "<w:p><w:r><w:t>{}</w:t></w:r></w:p>",
            escape(text)
        ));
        self
    }

    /// Produces the archive bytes.
    ///
    /// # Panics
    /// Panics if the archive cannot be written.
    pub fn build(&self) -> Vec<u8> {
        let mut writer = zip::ZipWriter::new(Cursor::new(Vec::new()));
        writer
            .start_file("word/document.xml", SimpleFileOptions::default())
            .expect("Failed to start document part");
        write!(
            writer,
            r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?><w:document xmlns:w="{W_NS}"><w:body>{}</w:body></w:document>"#,
            self.body
        )
        .expect("Failed to write document part");
        writer
            .finish()
            .expect("Failed to finish archive")
            .into_inner()
    }
}

fn escape(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

/// The requirements document most tests search.
pub fn sample_brd() -> DocxBuilder {
    DocxBuilder::new()
        .paragraph("Prepared by the product team")
        .heading(1, "1. Introduction")
        .paragraph("This document describes the AIVIN assistant.")
        .heading(1, "2. Scope")
        .paragraph("The assistant answers questions about internal policies.")
        .heading(1, "3. Stakeholders")
        .paragraph("Operations, support and compliance teams.")
        .heading(1, "4. Requirements")
        .paragraph("All requirements below are mandatory for launch.")
        .heading(2, "4.1 Performance")
        .paragraph("Answers must be returned within two seconds.")
        .heading(2, "4.2 Security")
        .paragraph("Access is restricted to authenticated staff.")
        .heading(3, "4.2.1 Audit logging")
        .paragraph("Every query is logged for ninety days.")
        .heading(1, "5. Glossary")
        .paragraph("BRD: business requirements document.")
        .heading(1, "6. Revision history")
}

/// A workspace with a document at the default location and a matching config.
#[allow(dead_code)] // Fields used across different integration test crates
pub struct DocumentWorkspace {
    pub workspace: TempWorkspace,
    pub config: Config,
}

#[allow(dead_code)] // Methods used across different integration test crates
impl DocumentWorkspace {
    /// Creates a workspace without writing any document.
    pub fn empty() -> Self {
        docx_search_mcp::tracing::init();
        let workspace = TempWorkspace::new();
        let dir = workspace.path().join(DEFAULT_DOCUMENT_DIR);
        let config = Config::new(dir.display().to_string(), DEFAULT_DOCUMENT_NAME);
        Self { workspace, config }
    }

    /// Creates a workspace holding `document` at the configured path.
    pub fn with_document(document: &DocxBuilder) -> Self {
        let this = Self::empty();
        let relative = format!("{}/{}", DEFAULT_DOCUMENT_DIR, DEFAULT_DOCUMENT_NAME);
        this.workspace.create_file(&relative, &document.build());
        this
    }
}

#[fixture]
pub fn brd_workspace() -> DocumentWorkspace {
    DocumentWorkspace::with_document(&sample_brd())
}

#[fixture]
pub fn empty_workspace() -> DocumentWorkspace {
    DocumentWorkspace::empty()
}
