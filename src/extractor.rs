//! One-stop extraction over an annotated utterance.

use serde::{Deserialize, Serialize};

use crate::{
    collect_noun_chunks, extract_question_word, Annotator, Document, NounChunks, PhraseError,
    VerbPhraseQuery,
};

/// Runtime settings for [`PhraseExtractor`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExtractorConfig {
    /// Regex searched in verb dependents' lemmas; empty matches everything
    pub verb_anchor_pattern: String,
    /// Fine-grained tags that veto a verb phrase when they follow it
    pub verb_ignore_tags: Vec<String>,
}

impl ExtractorConfig {
    pub fn from_ron(source: &str) -> Result<Self, PhraseError> {
        Ok(ron::from_str(source)?)
    }

    pub fn with_verb_anchor_pattern(mut self, pattern: impl Into<String>) -> Self {
        self.verb_anchor_pattern = pattern.into();
        self
    }

    pub fn with_verb_ignore_tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.verb_ignore_tags = tags.into_iter().map(Into::into).collect();
        self
    }
}

/// Everything extracted from one document.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct PhraseReport {
    pub noun_chunks: NounChunks,
    /// Verb phrases rendered as space-joined lemmas
    pub verb_phrases: Vec<String>,
    /// Canonical question word, empty when there is none
    pub question_word: String,
}

/// Runs the noun chunk, verb phrase and question word extractors together.
#[derive(Debug, Clone)]
pub struct PhraseExtractor {
    verb_query: VerbPhraseQuery,
}

impl PhraseExtractor {
    pub fn new(config: &ExtractorConfig) -> Result<Self, PhraseError> {
        Ok(Self {
            verb_query: VerbPhraseQuery::new(
                &config.verb_anchor_pattern,
                config.verb_ignore_tags.iter().cloned(),
            )?,
        })
    }

    pub fn verb_query(&self) -> &VerbPhraseQuery {
        &self.verb_query
    }

    /// The question word is read from the document text when present, and
    /// from the space-joined token texts otherwise.
    pub fn extract(&self, doc: &Document) -> PhraseReport {
        let question_word = match doc.text() {
            Some(text) => extract_question_word(text),
            None => extract_question_word(&doc.as_span().text()),
        };

        PhraseReport {
            noun_chunks: collect_noun_chunks(doc),
            verb_phrases: self
                .verb_query
                .extract(doc.as_span())
                .iter()
                .map(|phrase| phrase.lemma_text())
                .collect(),
            question_word,
        }
    }

    /// Annotates `text` and extracts from the result.
    pub fn analyze<A: Annotator>(&self, annotator: &A, text: &str) -> Result<PhraseReport, A::Error> {
        let doc = annotator.annotate(text)?;
        Ok(self.extract(&doc))
    }
}

impl Default for PhraseExtractor {
    fn default() -> Self {
        Self {
            verb_query: VerbPhraseQuery::any(),
        }
    }
}
