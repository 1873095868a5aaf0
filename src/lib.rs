#![doc(
    html_logo_url = "https://raw.githubusercontent.com/storyscript/layered-nlp/main/assets/layered-nlp.svg",
    issue_tracker_base_url = "https://github.com/storyscript/layered-nlp/issues/"
)]

//! Phrase extraction over dependency-parsed text.
//!
//! This crate is a heuristic layer on top of an external annotator (anything
//! producing lemmas, Universal POS tags, fine-grained tags and a dependency
//! tree). It picks out:
//!
//! - **Noun chunks**: the annotator's own chunks plus phrases grown leftwards
//!   from modifier-like tokens ([`collect_noun_chunks`], [`build_noun_phrase_left`])
//! - **Verb phrases**: short predicate spans around verbs whose dependents
//!   match a pattern ([`extract_verb_phrases`], [`VerbPhraseQuery`])
//! - **Question words**: the leftmost question indicator in raw text, in
//!   canonical form ([`extract_question_word`])
//!
//! ## Usage
//!
//! ```
//! use layered_phrases::{AnnotatedDoc, AnnotatedSpan, AnnotatedToken, Document, PhraseExtractor};
//!
//! let annotation = AnnotatedDoc::new(vec![
//!     AnnotatedToken::new("Did", "do", "AUX", "VBD", "aux", 2),
//!     AnnotatedToken::new("she", "she", "PRON", "PRP", "nsubj", 2),
//!     AnnotatedToken::new("call", "call", "VERB", "VB", "ROOT", 2),
//!     AnnotatedToken::new("the", "the", "DET", "DT", "det", 4),
//!     AnnotatedToken::new("office", "office", "NOUN", "NN", "dobj", 2),
//! ])
//! .with_text("Did she call the office")
//! .with_noun_chunks(vec![AnnotatedSpan::new(3, 5)]);
//!
//! let doc = Document::from_annotation(annotation).unwrap();
//! let report = PhraseExtractor::default().extract(&doc);
//!
//! assert_eq!(report.question_word, "do");
//! assert_eq!(report.noun_chunks.lemmas, vec!["the office", "she"]);
//! assert_eq!(report.verb_phrases, vec!["do"]);
//! ```
//!
//! All extractors are pure functions of their input; a [`Document`] is never
//! mutated after construction and can be shared across threads.

mod annotation;
mod display;
mod doc;
mod errors;
mod extractor;
mod noun_phrase;
mod question;
mod tags;
mod verb_phrase;

pub use annotation::{AnnotatedDoc, AnnotatedSpan, AnnotatedToken, Annotator};
pub use display::PhraseDisplay;
pub use doc::{ChunkSpan, Document, Span, Token};
pub use errors::{AnnotationError, OutOfRange, PhraseError};
pub use extractor::{ExtractorConfig, PhraseExtractor, PhraseReport};
pub use noun_phrase::{build_noun_phrase_left, collect_noun_chunks, NounChunks};
pub use question::{extract_question_word, CANONICAL_FORMS, QUESTION_PATTERNS};
pub use tags::{DepRole, Pos, PosClass, CLAUSAL_COMPLEMENT, PUNCTUATION};
pub use verb_phrase::{extract_verb_phrases, VerbPhrase, VerbPhraseQuery};
