//! Lexical section search.
//!
//! This module tokenizes queries, scores sections against them and ranks the
//! results, pulling in numbered sub-sections of a strongly matching top-level
//! section.

pub(crate) mod ranking;
pub(crate) mod scoring;
pub(crate) mod tokenize;

pub use ranking::{RESULT_TARGET, expand_parents_to_children};
pub use scoring::{ScoredSection, calculate_relevance_score, score_sections};
pub use tokenize::query_words;
