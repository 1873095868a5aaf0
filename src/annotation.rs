//! Serialized annotation handed over by an external annotator.
//!
//! The shape mirrors what a dependency parser exports per token: surface
//! text, lemma, coarse and fine tags, the dependency label and the absolute
//! index of the governor. A sentence root is its own governor.

use serde::{Deserialize, Serialize};

use crate::Document;

/// One annotated token.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnnotatedToken {
    pub text: String,
    pub lemma: String,
    /// Universal POS tag (`NOUN`, `VERB`, ...)
    pub pos: String,
    /// Fine-grained tag (`NN`, `VBZ`, ...)
    pub tag: String,
    /// Dependency label relating this token to its head
    pub dep: String,
    /// Absolute token index of the head
    pub head: usize,
}

impl AnnotatedToken {
    pub fn new(
        text: impl Into<String>,
        lemma: impl Into<String>,
        pos: impl Into<String>,
        tag: impl Into<String>,
        dep: impl Into<String>,
        head: usize,
    ) -> Self {
        Self {
            text: text.into(),
            lemma: lemma.into(),
            pos: pos.into(),
            tag: tag.into(),
            dep: dep.into(),
            head,
        }
    }
}

/// A half-open token range `[start, end)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnnotatedSpan {
    pub start: usize,
    pub end: usize,
    /// Designated root. Derived from the heads when absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub root: Option<usize>,
}

impl AnnotatedSpan {
    pub fn new(start: usize, end: usize) -> Self {
        Self {
            start,
            end,
            root: None,
        }
    }

    pub fn with_root(mut self, root: usize) -> Self {
        self.root = Some(root);
        self
    }
}

/// A whole annotated document.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnnotatedDoc {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    pub tokens: Vec<AnnotatedToken>,
    /// Sentence boundaries. One sentence over all tokens when absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sents: Option<Vec<AnnotatedSpan>>,
    /// Parser-native noun chunk candidates.
    #[serde(default)]
    pub noun_chunks: Vec<AnnotatedSpan>,
}

impl AnnotatedDoc {
    pub fn new(tokens: Vec<AnnotatedToken>) -> Self {
        Self {
            tokens,
            ..Self::default()
        }
    }

    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = Some(text.into());
        self
    }

    pub fn with_sents(mut self, sents: Vec<AnnotatedSpan>) -> Self {
        self.sents = Some(sents);
        self
    }

    pub fn with_noun_chunks(mut self, noun_chunks: Vec<AnnotatedSpan>) -> Self {
        self.noun_chunks = noun_chunks;
        self
    }
}

/// Produces annotated documents from raw text.
///
/// Tokenization, tagging and parsing live behind this trait; nothing in this
/// crate implements it.
pub trait Annotator {
    type Error;

    fn annotate(&self, text: &str) -> Result<Document, Self::Error>;
}
