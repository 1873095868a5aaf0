//! Verb phrase extraction.
//!
//! Phrases are deliberately short: the verbal core plus adjacent auxiliaries,
//! particles, adverbs and adjectives. Following noun and prepositional phrases
//! are never absorbed.

use std::collections::HashSet;

use log::{debug, trace};
use regex::Regex;

use crate::doc::join;
use crate::tags::{is_punctuation, CLAUSAL_COMPLEMENT};
use crate::{PhraseError, Pos, PosClass, Span, Token};

/// A contiguous predicate span. Never empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VerbPhrase<'a> {
    tokens: Vec<Token<'a>>,
}

impl<'a> VerbPhrase<'a> {
    pub fn tokens(&self) -> &[Token<'a>] {
        &self.tokens
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// Index of the first token in the document.
    pub fn start(&self) -> usize {
        self.tokens[0].i()
    }

    /// Index one past the last token in the document.
    pub fn end(&self) -> usize {
        self.tokens[self.tokens.len() - 1].i() + 1
    }

    pub fn text(&self) -> String {
        join(self.tokens.iter().map(|token| token.text()))
    }

    pub fn lemma_text(&self) -> String {
        join(self.tokens.iter().map(|token| token.lemma()))
    }

    pub fn into_tokens(self) -> Vec<Token<'a>> {
        self.tokens
    }
}

/// Which verbs to report and which fine-grained tags veto a phrase.
#[derive(Debug, Clone)]
pub struct VerbPhraseQuery {
    anchor: Regex,
    ignore_tags: HashSet<String>,
}

impl VerbPhraseQuery {
    /// `pattern` is searched (unanchored) in the lemmas of a verb's children and
    /// grandchildren; an empty pattern matches every lemma.
    pub fn new<I, S>(pattern: &str, ignore_tags: I) -> Result<Self, PhraseError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let anchor = Regex::new(pattern).map_err(|source| PhraseError::InvalidPattern {
            pattern: pattern.to_string(),
            source,
        })?;

        Ok(Self {
            anchor,
            ignore_tags: ignore_tags.into_iter().map(Into::into).collect(),
        })
    }

    /// Every verb with at least one dependent, no ignore tags.
    pub fn any() -> Self {
        Self {
            anchor: Regex::new("").expect("empty regex compiles"),
            ignore_tags: HashSet::new(),
        }
    }

    pub fn pattern(&self) -> &str {
        self.anchor.as_str()
    }

    fn is_ignored(&self, token: Token<'_>) -> bool {
        self.ignore_tags.contains(token.tag())
    }

    fn triggers(&self, verb: Token<'_>) -> bool {
        verb.children().any(|child| self.anchor.is_match(child.lemma()))
            || verb
                .children()
                .flat_map(Token::children)
                .any(|grandchild| self.anchor.is_match(grandchild.lemma()))
    }

    /// Scans `span` left to right and returns the verb phrases it anchors.
    pub fn extract<'a>(&self, span: Span<'a>) -> Vec<VerbPhrase<'a>> {
        let mut phrases = Vec::new();
        let mut i = 0;

        while i < span.len() {
            let token = match span.get(i) {
                Some(token) => token,
                None => break,
            };

            if PosClass::VerbAnchor.contains(token.pos())
                && !is_punctuation(token.lemma())
                && self.triggers(token)
            {
                let (phrase, consumed, discard) = self.grow(token);
                i += consumed;

                if discard {
                    debug!("discarding verb phrase {:?}", phrase);
                } else {
                    debug!("verb phrase {:?}", phrase);
                    phrases.push(VerbPhrase { tokens: phrase });
                }
            }

            i += 1;
        }

        phrases
    }

    /// Returns the phrase tokens, how many neighbors were absorbed, and
    /// whether the phrase is vetoed.
    fn grow<'a>(&self, anchor: Token<'a>) -> (Vec<Token<'a>>, usize, bool) {
        // The first auxiliary, verb or particle on the left may start the phrase early.
        let start = match anchor
            .lefts()
            .find(|left| PosClass::VerbStart.contains(left.pos()))
        {
            Some(left) if left.dep() != CLAUSAL_COMPLEMENT => left,
            _ => anchor,
        };

        if start.pos() == Pos::Adj {
            trace!("verb phrase would start at adjective {:?}", start);
            return (vec![start], 0, true);
        }

        let mut phrase = vec![start];
        let mut current = start;
        let mut consumed = 0;
        let mut discard = false;

        // Running off the end of the document ends the phrase.
        while let Ok(next) = current.nbor(1) {
            if !PosClass::VerbExtension.contains(next.pos()) {
                break;
            }

            phrase.push(next);
            current = next;
            consumed += 1;

            if !self.ignore_tags.is_empty() {
                match current.nbor(1) {
                    Ok(after) if self.is_ignored(after) => discard = true,
                    Ok(_) => {}
                    Err(_) => break,
                }
            }
        }

        (phrase, consumed, discard)
    }
}

impl Default for VerbPhraseQuery {
    fn default() -> Self {
        Self::any()
    }
}

/// Compiles `anchor_pattern` and extracts verb phrases from `span`.
///
/// See [`VerbPhraseQuery::extract`].
pub fn extract_verb_phrases<'a>(
    span: Span<'a>,
    anchor_pattern: &str,
    ignore_tags: &[&str],
) -> Result<Vec<VerbPhrase<'a>>, PhraseError> {
    let query = VerbPhraseQuery::new(anchor_pattern, ignore_tags.iter().copied())?;
    Ok(query.extract(span))
}
