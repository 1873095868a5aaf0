//! Runs a fixture through the extractors and compares against its expectations.

use layered_phrases::{
    collect_noun_chunks, extract_question_word, Document, VerbPhrase, VerbPhraseQuery,
};

use crate::fixture::PhraseFixture;
use crate::SpecResult;

/// Outcome of one expectation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckOutcome {
    /// Stable identifier: `question_word`, `noun_chunks`, `noun_chunk_pos`, `verb_phrases[N]`
    pub check: String,
    pub expected: String,
    pub actual: String,
}

impl CheckOutcome {
    fn new(check: impl Into<String>, expected: String, actual: String) -> Self {
        Self {
            check: check.into(),
            expected,
            actual,
        }
    }

    pub fn passed(&self) -> bool {
        self.expected == self.actual
    }
}

/// Every check performed for one fixture.
#[derive(Debug, Clone, Default)]
pub struct FixtureResult {
    pub checks: Vec<CheckOutcome>,
}

impl FixtureResult {
    pub fn passed(&self) -> usize {
        self.checks.iter().filter(|c| c.passed()).count()
    }

    pub fn failures(&self) -> impl Iterator<Item = &CheckOutcome> {
        self.checks.iter().filter(|c| !c.passed())
    }

    pub fn success(&self) -> bool {
        self.checks.iter().all(CheckOutcome::passed)
    }
}

/// Build the fixture's document, run every extractor it has expectations for,
/// and record each comparison.
pub fn run_fixture(fixture: &PhraseFixture) -> SpecResult<FixtureResult> {
    let doc = Document::from_annotation(fixture.annotation.clone())?;
    let expect = &fixture.expect;
    let mut result = FixtureResult::default();

    if let Some(expected) = &expect.question_word {
        result.checks.push(CheckOutcome::new(
            "question_word",
            format!("{:?}", expected),
            format!("{:?}", extract_question_word(&fixture.text())),
        ));
    }

    if expect.noun_chunks.is_some() || expect.noun_chunk_pos.is_some() {
        let chunks = collect_noun_chunks(&doc);

        if let Some(expected) = &expect.noun_chunks {
            result.checks.push(CheckOutcome::new(
                "noun_chunks",
                format!("{:?}", expected),
                format!("{:?}", chunks.lemmas),
            ));
        }
        if let Some(expected) = &expect.noun_chunk_pos {
            result.checks.push(CheckOutcome::new(
                "noun_chunk_pos",
                format!("{:?}", expected),
                format!("{:?}", chunks.pos),
            ));
        }
    }

    for (idx, verb) in expect.verb_phrases.iter().enumerate() {
        let query = VerbPhraseQuery::new(&verb.pattern, verb.ignore_tags.iter().cloned())?;
        let actual: Vec<String> = query
            .extract(doc.as_span())
            .iter()
            .map(VerbPhrase::lemma_text)
            .collect();

        result.checks.push(CheckOutcome::new(
            format!("verb_phrases[{}]", idx),
            format!("{:?}", verb.phrases),
            format!("{:?}", actual),
        ));
    }

    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{parse_fixture, SpecError};

    const FIXTURE: &str = r#"
[annotation]
text = "Did it ship"
tokens = [
  { text = "Did", lemma = "do", pos = "AUX", tag = "VBD", dep = "aux", head = 2 },
  { text = "it", lemma = "it", pos = "PRON", tag = "PRP", dep = "nsubj", head = 2 },
  { text = "ship", lemma = "ship", pos = "VERB", tag = "VB", dep = "ROOT", head = 2 },
]
noun_chunks = [{ start = 1, end = 2 }]

[expect]
question_word = "do"
noun_chunks = ["it"]
noun_chunk_pos = ["PRON"]

[[expect.verb_phrases]]
phrases = ["do"]

[[expect.verb_phrases]]
pattern = "^nothing$"
phrases = ["ship"]
"#;

    #[test]
    fn records_every_check() {
        let fixture = parse_fixture(FIXTURE).unwrap();
        let result = run_fixture(&fixture).unwrap();

        let ids: Vec<_> = result.checks.iter().map(|c| c.check.as_str()).collect();
        assert_eq!(
            ids,
            vec![
                "question_word",
                "noun_chunks",
                "noun_chunk_pos",
                "verb_phrases[0]",
                "verb_phrases[1]"
            ]
        );
        assert_eq!(result.passed(), 4);
        assert!(!result.success());

        let failed: Vec<_> = result.failures().collect();
        assert_eq!(failed.len(), 1);
        assert_eq!(failed[0].check, "verb_phrases[1]");
        assert_eq!(failed[0].expected, r#"["ship"]"#);
        assert_eq!(failed[0].actual, "[]");
    }

    #[test]
    fn bad_annotation_is_an_error() {
        let mut fixture = parse_fixture(FIXTURE).unwrap();
        fixture.annotation.tokens[0].head = 7;
        assert!(matches!(run_fixture(&fixture), Err(SpecError::Annotation(_))));
    }

    #[test]
    fn bad_pattern_is_an_error() {
        let mut fixture = parse_fixture(FIXTURE).unwrap();
        fixture.expect.verb_phrases[0].pattern = "(".to_string();
        assert!(matches!(run_fixture(&fixture), Err(SpecError::Query(_))));
    }
}
