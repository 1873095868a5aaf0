//! Fixture file format.
//!
//! A fixture is a TOML document holding one annotated utterance and the
//! extraction results expected from it:
//!
//! ```toml
//! title = "Copula question"
//!
//! [annotation]
//! text = "Is it open"
//! tokens = [
//!   { text = "Is", lemma = "be", pos = "AUX", tag = "VBZ", dep = "ROOT", head = 0 },
//!   ...
//! ]
//!
//! [expect]
//! question_word = "be"
//! noun_chunks = ["it"]
//!
//! [[expect.verb_phrases]]
//! pattern = ""
//! phrases = ["be open"]
//! ```

use layered_phrases::AnnotatedDoc;
use serde::{Deserialize, Serialize};

use crate::{SpecError, SpecResult};

/// A parsed fixture file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PhraseFixture {
    /// Optional human-readable title
    #[serde(default)]
    pub title: Option<String>,
    /// The annotator output under test
    pub annotation: AnnotatedDoc,
    /// What the extractors should produce
    #[serde(default)]
    pub expect: Expectations,
}

impl PhraseFixture {
    /// The utterance text, or the token texts joined by spaces.
    pub fn text(&self) -> String {
        match &self.annotation.text {
            Some(text) => text.clone(),
            None => self
                .annotation
                .tokens
                .iter()
                .map(|token| token.text.as_str())
                .collect::<Vec<_>>()
                .join(" "),
        }
    }

    /// Number of individual checks this fixture declares.
    pub fn check_count(&self) -> usize {
        let expect = &self.expect;
        usize::from(expect.question_word.is_some())
            + usize::from(expect.noun_chunks.is_some())
            + usize::from(expect.noun_chunk_pos.is_some())
            + expect.verb_phrases.len()
    }
}

/// Expected extraction results. Absent fields are not checked.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Expectations {
    /// Canonical question word (`""` for none)
    #[serde(default)]
    pub question_word: Option<String>,
    /// Lemma renderings of every noun chunk, in order
    #[serde(default)]
    pub noun_chunks: Option<Vec<String>>,
    /// POS renderings of every noun chunk, in order
    #[serde(default)]
    pub noun_chunk_pos: Option<Vec<String>>,
    /// One entry per verb phrase query
    #[serde(default)]
    pub verb_phrases: Vec<VerbPhraseExpectation>,
}

/// Verb phrases expected for one anchor pattern and ignore-tag set.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct VerbPhraseExpectation {
    #[serde(default)]
    pub pattern: String,
    #[serde(default)]
    pub ignore_tags: Vec<String>,
    /// Lemma renderings of the expected phrases
    pub phrases: Vec<String>,
}

/// Parse fixture source text.
pub fn parse_fixture(content: &str) -> SpecResult<PhraseFixture> {
    toml::from_str(content).map_err(|e| SpecError::Parse {
        line: e
            .span()
            .map(|span| line_of(content, span.start))
            .unwrap_or(0),
        message: e.message().to_string(),
    })
}

/// 1-based line number of a byte offset.
fn line_of(content: &str, offset: usize) -> usize {
    content
        .get(..offset)
        .map(|before| before.matches('\n').count() + 1)
        .unwrap_or(0)
}
