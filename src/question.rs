//! Question word detection and normalization.

use std::collections::HashMap;

use once_cell::sync::Lazy;
use regex::Regex;

/// Question indicators in priority order. At equal positions the earlier
/// alternative wins, so `how many` must precede `how` and the
/// `(are|is) the(re)?` phrase must precede bare `is`/`are`.
pub const QUESTION_PATTERNS: &[&str] = &[
    "who",
    "what",
    "where",
    "when",
    "why",
    "how many",
    "how",
    "show",
    "which",
    "(are|is) the(re)?",
    "is",
    "are",
    "does",
    "did",
    "do",
    "can",
    "need",
    "have",
    "has",
    "pull up",
    "list",
];

/// Canonical forms for matched question words.
pub const CANONICAL_FORMS: &[(&str, &str)] = &[
    ("are there", "be there"),
    ("is there", "be there"),
    ("is the", "be the"),
    ("does", "do"),
    ("did", "do"),
    ("is", "be"),
    ("are", "be"),
    ("have", "has"),
];

static QUESTION_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(&format!(r"(?i)\b({})\b", QUESTION_PATTERNS.join("|")))
        .expect("Invalid question word regex")
});

static CANONICAL: Lazy<HashMap<&'static str, &'static str>> =
    Lazy::new(|| CANONICAL_FORMS.iter().copied().collect());

/// Finds the leftmost question word in `text` and returns its canonical,
/// lower-cased form. Returns an empty string when nothing matches.
pub fn extract_question_word(text: &str) -> String {
    let found = match QUESTION_REGEX.find(text) {
        Some(found) => found.as_str().to_lowercase(),
        None => return String::new(),
    };

    match CANONICAL.get(found.as_str()) {
        Some(canonical) => (*canonical).to_string(),
        None => found,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wh_words_pass_through_lower_cased() {
        assert_eq!(extract_question_word("What is the weather"), "what");
        assert_eq!(extract_question_word("WHERE did it go"), "where");
        assert_eq!(extract_question_word("Show me the logs"), "show");
    }

    #[test]
    fn copula_phrases_are_canonicalized() {
        assert_eq!(extract_question_word("Is there a meeting today"), "be there");
        assert_eq!(extract_question_word("are there any seats"), "be there");
        assert_eq!(extract_question_word("Is the door locked"), "be the");
        assert_eq!(extract_question_word("Is it raining"), "be");
    }

    #[test]
    fn auxiliaries_are_canonicalized() {
        assert_eq!(extract_question_word("Did she call"), "do");
        assert_eq!(extract_question_word("Does it work"), "do");
        assert_eq!(extract_question_word("Have you eaten"), "has");
    }

    #[test]
    fn longer_alternative_wins_at_the_same_position() {
        assert_eq!(extract_question_word("How many tickets are left"), "how many");
        assert_eq!(extract_question_word("how    much"), "how");
        assert_eq!(extract_question_word("Please pull up the report"), "pull up");
    }

    #[test]
    fn leftmost_match_wins_over_declaration_order() {
        assert_eq!(extract_question_word("Can you tell me who called"), "can");
    }

    #[test]
    fn whole_words_only() {
        assert_eq!(extract_question_word("no question here"), "");
        assert_eq!(extract_question_word("whoever listed this"), "");
        assert_eq!(extract_question_word(""), "");
    }

    #[test]
    fn repeatable() {
        let text = "Is there a meeting today";
        assert_eq!(extract_question_word(text), extract_question_word(text));
    }
}
