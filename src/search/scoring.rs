//! Section relevance scoring.
//!
//! Per query word, in order of precedence:
//! - A whole number matching the title's leading section number: +3, nothing else.
//! - Word contained in the title: +3.
//! - Word contained in the title or content: +1, and no suffix fallback.
//! - Otherwise the first suffix-stripped variant contained in the text: +1.
//!
//! The title and content bonuses stack for the same word.

use super::tokenize::{is_whole_number, suffix_variants, title_starts_with_number};
use crate::section::Section;

/// Points for a title hit (or a section-number hit).
const TITLE_SCORE: f64 = 3.0;
/// Points for a content hit (or a stemmed content hit).
const CONTENT_SCORE: f64 = 1.0;

/// A section with its relevance to the current query.
#[derive(Debug, Clone, PartialEq)]
pub struct ScoredSection {
    pub section: Section,
    pub score: f64,
}

impl ScoredSection {
    pub fn index(&self) -> usize {
        self.section.index
    }

    pub fn title(&self) -> &str {
        &self.section.title
    }
}

/// Score `text` (a section's title and content) against lowercase query words.
pub fn calculate_relevance_score(text: &str, query_words: &[String], section_title: &str) -> f64 {
    let lower_text = text.to_lowercase();
    let lower_title = section_title.to_lowercase();
    let mut score = 0.0;

    for word in query_words {
        if is_whole_number(word) && title_starts_with_number(section_title, word) {
            tracing::debug!(
                "Main section match: \"{}\" matches main section \"{}\"",
                word,
                section_title
            );
            score += TITLE_SCORE;
            continue;
        }

        if lower_title.contains(word.as_str()) {
            score += TITLE_SCORE;
        }

        if lower_text.contains(word.as_str()) {
            score += CONTENT_SCORE;
            continue;
        }

        if suffix_variants(word).any(|stem| stem != word.as_str() && lower_text.contains(stem)) {
            score += CONTENT_SCORE;
        }
    }

    score
}

/// Score every section and sort by descending score.
///
/// The sort is stable, so equal scores keep document order.
pub fn score_sections(sections: &[Section], query_words: &[String]) -> Vec<ScoredSection> {
    let mut scored: Vec<ScoredSection> = sections
        .iter()
        .map(|section| {
            let text = format!("{} {}", section.title, section.content);
            ScoredSection {
                score: calculate_relevance_score(&text, query_words, &section.title),
                section: section.clone(),
            }
        })
        .collect();

    scored.sort_by(|a, b| b.score.total_cmp(&a.score));
    scored
}
