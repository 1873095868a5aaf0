//! Noun phrase construction by left-dependency expansion.
//!
//! Two layers:
//!
//! - [`build_noun_phrase_left`] grows a phrase from one anchor token by walking
//!   its left dependents right-to-left until a non-nominal dependent is hit.
//! - [`collect_noun_chunks`] combines the annotator's own noun chunks with
//!   phrases grown from modifier-like tokens across every sentence.

use log::{debug, trace};
use serde::Serialize;

use crate::doc::join;
use crate::{DepRole, Document, PosClass, Token};

/// Builds the noun phrase rooted at `anchor`, head first.
///
/// The result starts with the anchor, followed by its left dependents from
/// nearest to farthest (each expanded recursively). Expansion stops at the
/// first left dependent whose coarse tag is not noun-eligible; that dependent
/// and everything further left are excluded. Callers reverse the sequence to
/// get reading order.
pub fn build_noun_phrase_left(anchor: Token<'_>) -> Vec<Token<'_>> {
    let mut phrase = Vec::new();
    extend_left(anchor, &mut phrase);
    phrase
}

fn extend_left<'a>(token: Token<'a>, phrase: &mut Vec<Token<'a>>) {
    phrase.push(token);

    for left in token.lefts().rev() {
        if !PosClass::NounEligible.contains(left.pos()) {
            trace!("noun phrase boundary at {:?}", left);
            return;
        }

        if left.n_lefts() > 0 {
            extend_left(left, phrase);
        } else {
            phrase.extend(
                left.rights()
                    .filter(|right| PosClass::RightNoun.contains(right.pos())),
            );
            phrase.push(left);
        }
    }
}

/// Noun chunks rendered as parallel lemma and POS strings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct NounChunks {
    /// Space-joined lemmas per chunk
    pub lemmas: Vec<String>,
    /// Space-joined coarse tags per chunk, parallel to `lemmas`
    pub pos: Vec<String>,
}

impl NounChunks {
    pub fn len(&self) -> usize {
        self.lemmas.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lemmas.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.lemmas
            .iter()
            .map(String::as_str)
            .zip(self.pos.iter().map(String::as_str))
    }

    pub fn contains_lemmas(&self, lemmas: &str) -> bool {
        self.lemmas.iter().any(|existing| existing == lemmas)
    }

    pub fn into_parts(self) -> (Vec<String>, Vec<String>) {
        (self.lemmas, self.pos)
    }

    fn push(&mut self, tokens: &[Token<'_>]) {
        let lemmas = join(tokens.iter().map(|token| token.lemma()));
        let pos = join(tokens.iter().map(|token| token.pos().as_str()));
        debug!("noun chunk {:?} [{}]", lemmas, pos);
        self.lemmas.push(lemmas);
        self.pos.push(pos);
    }
}

/// Collects every noun chunk in `doc`.
///
/// Each native chunk is emitted when its root is an object-like relation or a
/// noun, and emitted again when made only of nouns and conjunctions; neither
/// path deduplicates. After each native chunk, every modifier-like token that
/// precedes its head, or hangs off a noun-eligible head, seeds
/// [`build_noun_phrase_left`]; those phrases are added only when their lemma
/// rendering is new. A document without native chunks yields nothing.
pub fn collect_noun_chunks(doc: &Document) -> NounChunks {
    let mut chunks = NounChunks::default();

    for chunk in doc.noun_chunks() {
        let tokens: Vec<_> = chunk.tokens().collect();
        let root = chunk.root();
        if DepRole::Object.contains(root.dep()) || PosClass::ObjectHead.contains(root.pos()) {
            chunks.push(&tokens);
        }

        if tokens
            .iter()
            .all(|token| PosClass::PureNoun.contains(token.pos()))
        {
            chunks.push(&tokens);
        }

        push_modifier_phrases(doc, &mut chunks);
    }

    chunks
}

fn push_modifier_phrases(doc: &Document, chunks: &mut NounChunks) {
    for sent in doc.sents() {
        for token in sent.tokens() {
            if !DepRole::Modifier.contains(token.dep()) {
                continue;
            }

            let head = token.head();
            if !(head.lefts().any(|left| left == token)
                || PosClass::NounEligible.contains(head.pos()))
            {
                continue;
            }

            let mut phrase = build_noun_phrase_left(token);
            phrase.reverse();

            let lemmas = join(phrase.iter().map(|token| token.lemma()));
            if chunks.contains_lemmas(&lemmas) {
                trace!("skipping repeated noun phrase {:?}", lemmas);
                continue;
            }
            chunks.push(&phrase);
        }
    }
}
