//! Final result selection with parent-to-children expansion.

use super::scoring::ScoredSection;
use crate::section::Section;

/// Number of sections a search aims to return. Expansion may exceed it.
pub const RESULT_TARGET: usize = 5;

/// Amount by which an expanded child scores below its parent.
const CHILD_SCORE_DISCOUNT: f64 = 0.1;
/// Floor for an expanded child's score.
const MIN_CHILD_SCORE: f64 = 0.1;

/// Pick the sections to return from a descending `scored` list.
///
/// The first of the top [`RESULT_TARGET`] sections that scores above zero, has
/// a query word in its title and a whole-number title prefix such as `"4."` is
/// expanded: every later section numbered under it (`"4.1"`, `"4.2"`, ...) is
/// included at a slightly lower score. At most one section is expanded. The
/// remaining top sections follow, everything is re-sorted by score, and the
/// list is backfilled from lower ranks if it is still short.
pub fn expand_parents_to_children(
    sections: &[Section],
    scored: &[ScoredSection],
    query_words: &[String],
) -> Vec<ScoredSection> {
    let initial = &scored[..scored.len().min(RESULT_TARGET)];
    let mut final_sections: Vec<ScoredSection> = Vec::new();
    let mut expanded: Option<usize> = None;

    for candidate in initial {
        if expanded.is_some() {
            break;
        }
        if candidate.score <= 0.0 || !title_matches_query(candidate.title(), query_words) {
            continue;
        }
        let Some(prefix) = whole_number_prefix(candidate.title()) else {
            continue;
        };

        let children: Vec<&Section> = sections
            .iter()
            .filter(|s| s.index > candidate.index() && is_numbered_under(&s.title, prefix))
            .collect();
        if children.is_empty() {
            continue;
        }

        tracing::info!(
            "Appending parent \"{}\" with {} children",
            candidate.title(),
            children.len()
        );

        let child_score = (candidate.score - CHILD_SCORE_DISCOUNT).max(MIN_CHILD_SCORE);
        final_sections.push(candidate.clone());
        final_sections.extend(children.into_iter().map(|child| ScoredSection {
            section: child.clone(),
            score: child_score,
        }));
        expanded = Some(candidate.index());
    }

    for candidate in initial {
        let is_expanded = expanded == Some(candidate.index());
        if !is_expanded && !contains_index(&final_sections, candidate.index()) {
            final_sections.push(candidate.clone());
        }
    }

    final_sections.sort_by(|a, b| b.score.total_cmp(&a.score));

    if final_sections.len() < RESULT_TARGET {
        let missing = RESULT_TARGET - final_sections.len();
        let backfill: Vec<ScoredSection> = scored
            .iter()
            .skip(RESULT_TARGET)
            .filter(|s| !contains_index(&final_sections, s.index()))
            .take(missing)
            .cloned()
            .collect();
        final_sections.extend(backfill);
    }

    final_sections
}

fn title_matches_query(title: &str, query_words: &[String]) -> bool {
    let title = title.to_lowercase();
    query_words
        .iter()
        .any(|word| title.contains(word.to_lowercase().as_str()))
}

/// The first whitespace-delimited segment of `title` if it looks like `"4."`.
///
/// Headings typed as `"4.<tab>Title"` count too.
fn whole_number_prefix(title: &str) -> Option<&str> {
    let first = title.split_whitespace().next()?;
    let digits = first.strip_suffix('.')?;
    (!digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit())).then_some(first)
}

/// Whether `title` is numbered directly under `prefix`, e.g. `"4.1 ..."` under `"4."`.
fn is_numbered_under(title: &str, prefix: &str) -> bool {
    title
        .strip_prefix(prefix)
        .is_some_and(|rest| rest.starts_with(|c: char| c.is_ascii_digit()))
}

fn contains_index(sections: &[ScoredSection], index: usize) -> bool {
    sections.iter().any(|s| s.index() == index)
}
