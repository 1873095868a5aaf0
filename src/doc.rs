//! Arena-backed document model.
//!
//! A [`Document`] owns every token record in a single `Vec`. Governor and
//! dependent relations are token indices, so a [`Token`] is nothing more
//! than a document reference plus a position and can be copied freely.

use std::fmt;
use std::ops::Range;

use crate::annotation::{AnnotatedDoc, AnnotatedSpan};
use crate::{AnnotationError, OutOfRange, Pos};

#[derive(Debug, Clone)]
struct TokenRecord {
    text: String,
    lemma: String,
    pos: Pos,
    tag: String,
    dep: String,
    head: usize,
    lefts: Vec<usize>,
    rights: Vec<usize>,
}

/// An annotated, dependency-parsed document.
#[derive(Clone)]
pub struct Document {
    text: Option<String>,
    tokens: Vec<TokenRecord>,
    sents: Vec<Range<usize>>,
    /// Native noun chunk ranges with their root index
    noun_chunks: Vec<(Range<usize>, usize)>,
}

impl fmt::Debug for Document {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Document")
            .field("token_count", &self.tokens.len())
            .field("sentence_count", &self.sents.len())
            .field("noun_chunk_count", &self.noun_chunks.len())
            .finish()
    }
}

impl Document {
    /// Build a document from an annotator's output, checking the tree shape once.
    pub fn from_annotation(annotation: AnnotatedDoc) -> Result<Self, AnnotationError> {
        let len = annotation.tokens.len();

        let mut tokens = Vec::with_capacity(len);
        for (idx, token) in annotation.tokens.into_iter().enumerate() {
            if token.head >= len {
                return Err(AnnotationError::HeadOutOfRange {
                    token: idx,
                    head: token.head,
                    len,
                });
            }
            tokens.push(TokenRecord {
                pos: token.pos.parse()?,
                text: token.text,
                lemma: token.lemma,
                tag: token.tag,
                dep: token.dep,
                head: token.head,
                lefts: Vec::new(),
                rights: Vec::new(),
            });
        }

        check_acyclic(&tokens)?;

        for idx in 0..len {
            let head = tokens[idx].head;
            if head == idx {
                continue;
            }
            if idx < head {
                tokens[head].lefts.push(idx);
            } else {
                tokens[head].rights.push(idx);
            }
        }

        let sents = match annotation.sents {
            Some(sents) => sents
                .iter()
                .map(|span| check_span("sentence", span, len))
                .collect::<Result<Vec<_>, _>>()?,
            None if len == 0 => Vec::new(),
            None => vec![0..len],
        };

        let mut noun_chunks = Vec::with_capacity(annotation.noun_chunks.len());
        for span in &annotation.noun_chunks {
            let range = check_span("noun chunk", span, len)?;
            let root = match span.root {
                Some(root) if range.contains(&root) => root,
                Some(root) => {
                    return Err(AnnotationError::RootOutsideSpan {
                        start: range.start,
                        end: range.end,
                        root,
                    })
                }
                None => derive_root(&tokens, &range).ok_or(AnnotationError::CyclicHead {
                    token: range.start,
                })?,
            };
            noun_chunks.push((range, root));
        }

        Ok(Self {
            text: annotation.text,
            tokens,
            sents,
            noun_chunks,
        })
    }

    pub fn from_json(json: &str) -> Result<Self, AnnotationError> {
        Self::from_annotation(serde_json::from_str(json)?)
    }

    pub fn from_ron(source: &str) -> Result<Self, AnnotationError> {
        Self::from_annotation(ron::from_str(source)?)
    }

    /// Original text, if the annotator supplied it.
    pub fn text(&self) -> Option<&str> {
        self.text.as_deref()
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    pub fn token(&self, index: usize) -> Option<Token<'_>> {
        if index < self.tokens.len() {
            Some(Token { doc: self, index })
        } else {
            None
        }
    }

    pub fn tokens(&self) -> impl DoubleEndedIterator<Item = Token<'_>> + ExactSizeIterator {
        (0..self.tokens.len()).map(move |index| Token { doc: self, index })
    }

    /// The whole document as one span.
    pub fn as_span(&self) -> Span<'_> {
        Span {
            doc: self,
            start: 0,
            end: self.tokens.len(),
        }
    }

    pub fn sents(&self) -> impl Iterator<Item = Span<'_>> {
        self.sents.iter().map(move |range| Span {
            doc: self,
            start: range.start,
            end: range.end,
        })
    }

    /// Parser-native noun chunk candidates.
    pub fn noun_chunks(&self) -> impl Iterator<Item = ChunkSpan<'_>> {
        self.noun_chunks.iter().map(move |(range, root)| ChunkSpan {
            span: Span {
                doc: self,
                start: range.start,
                end: range.end,
            },
            root: *root,
        })
    }

    fn record(&self, index: usize) -> &TokenRecord {
        &self.tokens[index]
    }
}

fn check_span(
    kind: &'static str,
    span: &AnnotatedSpan,
    len: usize,
) -> Result<Range<usize>, AnnotationError> {
    if span.end > len || span.start > span.end {
        return Err(AnnotationError::SpanOutOfRange {
            kind,
            start: span.start,
            end: span.end,
            len,
        });
    }
    if span.start == span.end {
        return Err(AnnotationError::EmptySpan {
            kind,
            start: span.start,
            end: span.end,
        });
    }
    Ok(span.start..span.end)
}

/// Every head chain must end at a token that governs itself.
fn check_acyclic(tokens: &[TokenRecord]) -> Result<(), AnnotationError> {
    // 0 = unvisited, 1 = on the current chain, 2 = known to reach a root
    let mut state = vec![0u8; tokens.len()];
    let mut chain = Vec::new();

    for start in 0..tokens.len() {
        let mut current = start;
        while state[current] == 0 {
            state[current] = 1;
            chain.push(current);
            let head = tokens[current].head;
            if head == current {
                break;
            }
            current = head;
        }
        if state[current] == 1 && tokens[current].head != current {
            return Err(AnnotationError::CyclicHead { token: start });
        }
        for idx in chain.drain(..) {
            state[idx] = 2;
        }
    }

    Ok(())
}

/// First token in the range governed from outside the range (or by itself).
fn derive_root(tokens: &[TokenRecord], range: &Range<usize>) -> Option<usize> {
    range.clone().find(|&idx| {
        let head = tokens[idx].head;
        head == idx || !range.contains(&head)
    })
}

/// A view of one token inside a [`Document`].
#[derive(Clone, Copy)]
pub struct Token<'a> {
    doc: &'a Document,
    index: usize,
}

impl<'a> Token<'a> {
    /// Position in the document.
    pub fn i(self) -> usize {
        self.index
    }

    pub fn doc(self) -> &'a Document {
        self.doc
    }

    pub fn text(self) -> &'a str {
        &self.doc.record(self.index).text
    }

    pub fn lemma(self) -> &'a str {
        &self.doc.record(self.index).lemma
    }

    pub fn pos(self) -> Pos {
        self.doc.record(self.index).pos
    }

    pub fn tag(self) -> &'a str {
        &self.doc.record(self.index).tag
    }

    pub fn dep(self) -> &'a str {
        &self.doc.record(self.index).dep
    }

    /// The governor. A sentence root is its own head.
    pub fn head(self) -> Token<'a> {
        Token {
            doc: self.doc,
            index: self.doc.record(self.index).head,
        }
    }

    pub fn is_root(self) -> bool {
        self.doc.record(self.index).head == self.index
    }

    /// Dependents positioned before this token, in document order.
    pub fn lefts(self) -> impl DoubleEndedIterator<Item = Token<'a>> + ExactSizeIterator + 'a {
        let doc = self.doc;
        doc.record(self.index)
            .lefts
            .iter()
            .map(move |&index| Token { doc, index })
    }

    /// Dependents positioned after this token, in document order.
    pub fn rights(self) -> impl DoubleEndedIterator<Item = Token<'a>> + ExactSizeIterator + 'a {
        let doc = self.doc;
        doc.record(self.index)
            .rights
            .iter()
            .map(move |&index| Token { doc, index })
    }

    pub fn n_lefts(self) -> usize {
        self.doc.record(self.index).lefts.len()
    }

    /// All direct dependents in document order.
    pub fn children(self) -> impl Iterator<Item = Token<'a>> + 'a {
        self.lefts().chain(self.rights())
    }

    /// The token `offset` positions away in the document.
    pub fn nbor(self, offset: isize) -> Result<Token<'a>, OutOfRange> {
        let err = OutOfRange {
            index: self.index,
            offset,
        };
        let target = if offset >= 0 {
            self.index.checked_add(offset as usize)
        } else {
            self.index.checked_sub(offset.unsigned_abs())
        };
        match target {
            Some(index) if index < self.doc.tokens.len() => Ok(Token {
                doc: self.doc,
                index,
            }),
            _ => Err(err),
        }
    }
}

impl PartialEq for Token<'_> {
    fn eq(&self, other: &Self) -> bool {
        std::ptr::eq(self.doc, other.doc) && self.index == other.index
    }
}

impl Eq for Token<'_> {}

impl fmt::Debug for Token<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}#{}({}/{}/{})",
            self.text(),
            self.index,
            self.pos(),
            self.tag(),
            self.dep()
        )
    }
}

/// A contiguous run of tokens `[start, end)` within a [`Document`].
#[derive(Clone, Copy)]
pub struct Span<'a> {
    doc: &'a Document,
    start: usize,
    end: usize,
}

impl<'a> Span<'a> {
    pub fn doc(self) -> &'a Document {
        self.doc
    }

    pub fn start(self) -> usize {
        self.start
    }

    pub fn end(self) -> usize {
        self.end
    }

    pub fn len(self) -> usize {
        self.end - self.start
    }

    pub fn is_empty(self) -> bool {
        self.start == self.end
    }

    /// Token at a position relative to the span start.
    pub fn get(self, offset: usize) -> Option<Token<'a>> {
        if offset < self.len() {
            Some(Token {
                doc: self.doc,
                index: self.start + offset,
            })
        } else {
            None
        }
    }

    pub fn tokens(self) -> impl DoubleEndedIterator<Item = Token<'a>> + ExactSizeIterator {
        let doc = self.doc;
        (self.start..self.end).map(move |index| Token { doc, index })
    }

    /// First token whose head lies outside the span, or that governs itself.
    pub fn root(self) -> Option<Token<'a>> {
        derive_root(&self.doc.tokens, &(self.start..self.end)).map(|index| Token {
            doc: self.doc,
            index,
        })
    }

    pub fn text(self) -> String {
        join(self.tokens().map(Token::text))
    }

    pub fn lemma_text(self) -> String {
        join(self.tokens().map(Token::lemma))
    }
}

impl fmt::Debug for Span<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Span({}..{} {:?})", self.start, self.end, self.text())
    }
}

/// A parser-native noun chunk: a span with a designated root.
#[derive(Debug, Clone, Copy)]
pub struct ChunkSpan<'a> {
    span: Span<'a>,
    root: usize,
}

impl<'a> ChunkSpan<'a> {
    pub fn span(self) -> Span<'a> {
        self.span
    }

    pub fn root(self) -> Token<'a> {
        Token {
            doc: self.span.doc,
            index: self.root,
        }
    }

    pub fn tokens(self) -> impl DoubleEndedIterator<Item = Token<'a>> + ExactSizeIterator {
        self.span.tokens()
    }
}

pub(crate) fn join<'s>(parts: impl Iterator<Item = &'s str>) -> String {
    parts.collect::<Vec<_>>().join(" ")
}
