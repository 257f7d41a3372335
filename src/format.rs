//! Response assembly: the rendered summary and the structured payload.

use crate::search::ScoredSection;
use crate::section::RelationshipMap;
use rmcp::schemars;
use serde::{Deserialize, Serialize};

/// Stand-in for a section embedding. No vectors are computed.
pub const PLACEHOLDER_EMBEDDING: &str = "placeholder";

/// A returned section with its structural context.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, schemars::JsonSchema)]
pub struct RelevantSection {
    pub title: String,
    pub content: String,
    pub embedding: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parent: Option<String>,
    pub neighbors: Vec<String>,
}

/// Structured output of the `docx-reader` tool.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, schemars::JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct DocxReaderOutput {
    pub relevant_sections: Vec<RelevantSection>,
}

/// Everything the tool returns for one query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchResponse {
    /// Human-readable summary, sent as text content.
    pub summary: String,
    /// Machine-readable payload, sent as structured content.
    pub output: DocxReaderOutput,
}

/// Label for the n-th section rendered in the summary body.
fn relevance_label(rank: usize) -> &'static str {
    match rank {
        0 => "Most Relevant",
        1 => "Highly Relevant",
        2 => "Relevant",
        _ => "Related",
    }
}

/// Build the tool response from the final ranked sections.
///
/// Every section appears in the header list and the structured payload;
/// sections with blank content are left out of the rendered body.
pub fn build_response(
    filename: &str,
    query: &str,
    top_sections: &[ScoredSection],
    relationships: &RelationshipMap,
    lang: Option<&str>,
) -> SearchResponse {
    let relevant_sections: Vec<RelevantSection> = top_sections
        .iter()
        .map(|scored| {
            let rels = relationships.get(&scored.index()).cloned().unwrap_or_default();
            RelevantSection {
                title: scored.section.title.clone(),
                content: scored.section.content.clone(),
                embedding: PLACEHOLDER_EMBEDDING.to_string(),
                parent: rels.parent,
                neighbors: rels.neighbors,
            }
        })
        .collect();

    tracing::debug!(
        "Top scores: {:?}",
        top_sections
            .iter()
            .map(|s| format!("{}: {}", s.title(), s.score))
            .collect::<Vec<_>>()
    );

    let combined_content = top_sections
        .iter()
        .filter(|s| !s.section.content.trim().is_empty())
        .enumerate()
        .map(|(rank, s)| {
            format!(
                "## {}: {}\n\n{}\n\n---",
                relevance_label(rank),
                s.title(),
                s.section.content
            )
        })
        .collect::<Vec<_>>()
        .join("\n\n");

    let mut summary = format!(
        "Found {} relevant sections in the document \"{}\" (may include child sections of relevant parents).\n\
         Top matches for \"{}\":\n",
        relevant_sections.len(),
        filename,
        query
    );
    let matches = top_sections
        .iter()
        .map(|s| format!("- {} (relevance score: {})", s.title(), s.score))
        .collect::<Vec<_>>()
        .join("\n");
    summary.push_str(&matches);
    summary.push_str("\n\n");
    summary.push_str(&combined_content);

    let summary = match lang {
        Some(lang) => {
            tracing::info!("Responding in language: {}", lang);
            format!("Respond in {lang}\n\n{summary}")
        }
        None => summary,
    };

    tracing::info!(
        "Returning combined response with {} sections ({} chars)",
        relevant_sections.len(),
        summary.chars().count()
    );

    SearchResponse {
        summary,
        output: DocxReaderOutput { relevant_sections },
    }
}
