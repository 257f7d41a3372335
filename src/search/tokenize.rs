//! Query tokenization and the light-weight suffix stripping used for fallback matches.

/// Suffixes tried, in order, when a query word does not appear verbatim.
pub(crate) const STRIPPED_SUFFIXES: &[&str] = &["s", "es", "ing", "ed", "ly", "er", "est"];

/// Split a query into lowercase, non-empty, whitespace-delimited words.
pub fn query_words(query: &str) -> Vec<String> {
    query
        .to_lowercase()
        .split_whitespace()
        .map(str::to_string)
        .collect()
}

/// Variants of `word` with one trailing suffix removed, in [`STRIPPED_SUFFIXES`] order.
///
/// Words that do not end in a given suffix yield themselves for that slot, so
/// callers should skip variants equal to `word`.
pub(crate) fn suffix_variants(word: &str) -> impl Iterator<Item = &str> {
    STRIPPED_SUFFIXES
        .iter()
        .map(move |suffix| word.strip_suffix(suffix).unwrap_or(word))
}

/// Whether `word` consists only of ASCII digits.
pub(crate) fn is_whole_number(word: &str) -> bool {
    !word.is_empty() && word.bytes().all(|b| b.is_ascii_digit())
}

/// Whether `title` starts with `number` as a whole section number.
///
/// `"4"` matches `"4. Scope"` and `"4"`, but neither `"41. Other"` nor the
/// sub-section `"4.1 Sub"`.
pub(crate) fn title_starts_with_number(title: &str, number: &str) -> bool {
    let Some(rest) = title.strip_prefix(number) else {
        return false;
    };
    if rest.starts_with(|c: char| c.is_ascii_digit()) {
        return false;
    }
    !rest
        .strip_prefix('.')
        .is_some_and(|sub| sub.starts_with(|c: char| c.is_ascii_digit()))
}
