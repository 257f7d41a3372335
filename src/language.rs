//! Response language hint from the user's original input.

/// Vietnamese diacritics that do not normally occur in English text.
const VIETNAMESE_CHARS: &str = "àáâãăằắẵẳặèéêìíòóôõŏỏọùúûũưừứựỳỹđ\
                                ÀÁÂÃĂẰẮẴẲẶÈÉÊÌÍÒÓÔÕŎỎỌÙÚÛŨƯỪỨỰỲỸĐ";

pub const VIETNAMESE: &str = "Vietnamese";
pub const ENGLISH: &str = "English";

/// Guess the language to respond in.
pub fn detect_language(text: &str) -> &'static str {
    if text.chars().any(|c| VIETNAMESE_CHARS.contains(c)) {
        VIETNAMESE
    } else {
        ENGLISH
    }
}
