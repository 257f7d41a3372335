//! DOCX to markup conversion.
//!
//! A Word document is flattened into an ordered list of [`Block`]s, one per
//! body-level paragraph or table. Headings keep their level (1-6); everything
//! else is plain text. Section extraction walks this list by index instead of
//! navigating the XML tree.

mod convert;

pub use convert::convert_docx;

/// What a markup block represents.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlockKind {
    /// A heading at the given level, 1 being the most significant.
    Heading(u8),
    /// Any non-heading content (paragraph, list item, table).
    Text,
}

/// One body-level node of the converted document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Block {
    pub kind: BlockKind,
    /// Trimmed text of the node.
    pub text: String,
}

impl Block {
    pub fn heading(level: u8, text: impl Into<String>) -> Self {
        Self {
            kind: BlockKind::Heading(level),
            text: text.into(),
        }
    }

    pub fn text(text: impl Into<String>) -> Self {
        Self {
            kind: BlockKind::Text,
            text: text.into(),
        }
    }

    /// Heading level, or `None` for text blocks.
    pub const fn heading_level(&self) -> Option<u8> {
        match self.kind {
            BlockKind::Heading(level) => Some(level),
            BlockKind::Text => None,
        }
    }
}

/// A converted document: body blocks in document order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MarkupDocument {
    blocks: Vec<Block>,
}

impl MarkupDocument {
    pub const fn new(blocks: Vec<Block>) -> Self {
        Self { blocks }
    }

    pub fn blocks(&self) -> &[Block] {
        &self.blocks
    }

    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }

    /// Full text of the body, one block per line.
    pub fn body_text(&self) -> String {
        self.blocks
            .iter()
            .map(|block| block.text.as_str())
            .collect::<Vec<_>>()
            .join("\n")
    }
}

impl FromIterator<Block> for MarkupDocument {
    fn from_iter<I: IntoIterator<Item = Block>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}
