//! Hierarchical sections of a document and their structural relationships.

mod extract;
mod relations;

pub use extract::{FALLBACK_TITLE, extract_sections};
pub use relations::{MAX_NEIGHBORS, RelationshipMap, SectionRelationship, build_relationships};

/// A contiguous span of a document bounded by a heading.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Section {
    /// Heading depth, 1 being the most significant.
    pub level: u8,
    /// Trimmed heading text.
    pub title: String,
    /// Text between this heading and the next heading at the same or a higher level.
    pub content: String,
    /// Zero-based position in document order.
    pub index: usize,
}
