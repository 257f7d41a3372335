use super::Section;
use std::collections::HashMap;

/// Maximum number of same-level neighbors recorded per section.
pub const MAX_NEIGHBORS: usize = 4;

/// Structural context of a section.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SectionRelationship {
    /// Title of the nearest preceding section exactly one level up.
    pub parent: Option<String>,
    /// Titles of other sections at the same level, in document order.
    pub neighbors: Vec<String>,
}

/// Relationships keyed by section index.
pub type RelationshipMap = HashMap<usize, SectionRelationship>;

/// Derive parent and neighbor titles for every section.
///
/// Quadratic in the number of sections, which is bounded by the heading count
/// of a single document.
pub fn build_relationships(sections: &[Section]) -> RelationshipMap {
    sections
        .iter()
        .map(|section| {
            let neighbors = sections
                .iter()
                .filter(|s| s.level == section.level && s.index != section.index)
                .take(MAX_NEIGHBORS)
                .map(|s| s.title.clone())
                .collect();

            let parent = sections
                .iter()
                .rev()
                .find(|s| s.level + 1 == section.level && s.index < section.index)
                .map(|s| s.title.clone());

            (section.index, SectionRelationship { parent, neighbors })
        })
        .collect()
}
