use super::Section;
use crate::docx::MarkupDocument;

/// Title of the single section produced for documents without headings.
pub const FALLBACK_TITLE: &str = "Document";

/// Split a converted document into sections by heading level.
///
/// A section's content runs until the next heading whose level is at or above
/// its own, so deeper headings (and their text) are included in the parent's
/// content. Text before the first heading is not part of any section.
///
/// Documents with no headings yield one level-1 section titled
/// [`FALLBACK_TITLE`] holding the whole body.
pub fn extract_sections(markup: &MarkupDocument) -> Vec<Section> {
    let blocks = markup.blocks();
    let mut sections = Vec::new();

    for (position, block) in blocks.iter().enumerate() {
        let Some(level) = block.heading_level() else {
            continue;
        };

        let mut content = String::new();
        for next in &blocks[position + 1..] {
            if next.heading_level().is_some_and(|next_level| next_level <= level) {
                break;
            }
            content.push_str(next.text.trim());
            content.push('\n');
        }

        sections.push(Section {
            level,
            title: block.text.trim().to_string(),
            content: content.trim().to_string(),
            index: sections.len(),
        });
    }

    if sections.is_empty() {
        tracing::debug!("No headings found, treating the whole body as one section");
        sections.push(Section {
            level: 1,
            title: FALLBACK_TITLE.to_string(),
            content: markup.body_text().trim().to_string(),
            index: 0,
        });
    }

    sections
}
