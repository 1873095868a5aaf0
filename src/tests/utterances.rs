//! End-to-end extraction over hand-annotated utterances.

use crate::{
    build_noun_phrase_left, collect_noun_chunks, extract_question_word, extract_verb_phrases,
    AnnotatedDoc, AnnotatedSpan, AnnotatedToken, Document, Pos, VerbPhrase,
};

fn tok(text: &str, lemma: &str, pos: &str, tag: &str, dep: &str, head: usize) -> AnnotatedToken {
    AnnotatedToken::new(text, lemma, pos, tag, dep, head)
}

pub(super) const TICKETS: &str = "How many open tickets are assigned to me";

pub(super) fn tickets() -> Document {
    Document::from_annotation(
        AnnotatedDoc::new(vec![
            tok("How", "how", "ADV", "WRB", "advmod", 1),
            tok("many", "many", "ADJ", "JJ", "amod", 3),
            tok("open", "open", "ADJ", "JJ", "amod", 3),
            tok("tickets", "ticket", "NOUN", "NNS", "nsubjpass", 5),
            tok("are", "be", "AUX", "VBP", "auxpass", 5),
            tok("assigned", "assign", "VERB", "VBN", "ROOT", 5),
            tok("to", "to", "ADP", "IN", "prep", 5),
            tok("me", "I", "PRON", "PRP", "pobj", 6),
        ])
        .with_text(TICKETS)
        .with_noun_chunks(vec![AnnotatedSpan::new(1, 4), AnnotatedSpan::new(7, 8)]),
    )
    .unwrap()
}

pub(super) const MEETING: &str = "Is there a meeting scheduled for tomorrow";

pub(super) fn meeting() -> Document {
    Document::from_annotation(
        AnnotatedDoc::new(vec![
            tok("Is", "be", "AUX", "VBZ", "ROOT", 0),
            tok("there", "there", "PRON", "EX", "expl", 0),
            tok("a", "a", "DET", "DT", "det", 3),
            tok("meeting", "meeting", "NOUN", "NN", "attr", 0),
            tok("scheduled", "schedule", "VERB", "VBN", "acl", 3),
            tok("for", "for", "ADP", "IN", "prep", 4),
            tok("tomorrow", "tomorrow", "NOUN", "NN", "pobj", 5),
        ])
        .with_text(MEETING)
        .with_noun_chunks(vec![AnnotatedSpan::new(2, 4), AnnotatedSpan::new(6, 7)]),
    )
    .unwrap()
}

fn lemmas(phrases: &[VerbPhrase<'_>]) -> Vec<String> {
    phrases.iter().map(VerbPhrase::lemma_text).collect()
}

#[test]
fn tickets_noun_chunks() {
    let chunks = collect_noun_chunks(&tickets());

    assert_eq!(
        chunks.lemmas,
        vec!["many open ticket", "how", "many", "open", "I"]
    );
    assert_eq!(chunks.pos, vec!["ADJ ADJ NOUN", "ADV", "ADJ", "ADJ", "PRON"]);
}

#[test]
fn tickets_noun_phrase_from_subject() {
    let doc = tickets();
    let mut phrase = build_noun_phrase_left(doc.token(3).unwrap());
    phrase.reverse();

    let lemmas: Vec<_> = phrase.iter().map(|token| token.lemma()).collect();
    assert_eq!(lemmas, vec!["many", "open", "ticket"]);
}

#[test]
fn tickets_verb_phrases() {
    let doc = tickets();

    let all = extract_verb_phrases(doc.as_span(), "", &[]).unwrap();
    assert_eq!(lemmas(&all), vec!["be assign"]);

    // child lemma, grandchild lemma
    for pattern in &["^ticket$", "^I$", "open"] {
        let found = extract_verb_phrases(doc.as_span(), pattern, &[]).unwrap();
        assert_eq!(lemmas(&found), vec!["be assign"], "pattern {}", pattern);
    }

    let vetoed = extract_verb_phrases(doc.as_span(), "", &["IN"]).unwrap();
    assert!(vetoed.is_empty());
}

#[test]
fn tickets_question_word() {
    assert_eq!(extract_question_word(TICKETS), "how many");
}

#[test]
fn meeting_noun_chunks_repeat_pure_nouns() {
    let chunks = collect_noun_chunks(&meeting());

    assert_eq!(
        chunks.lemmas,
        vec!["a meeting", "schedule", "tomorrow", "tomorrow"]
    );
    assert_eq!(chunks.pos, vec!["DET NOUN", "VERB", "NOUN", "NOUN"]);
}

#[test]
fn meeting_verb_phrases() {
    let doc = meeting();
    let phrases = extract_verb_phrases(doc.as_span(), "", &[]).unwrap();
    assert_eq!(lemmas(&phrases), vec!["be", "schedule"]);

    let phrases = extract_verb_phrases(doc.as_span(), "^tomorrow$", &[]).unwrap();
    assert_eq!(lemmas(&phrases), vec!["schedule"]);
}

#[test]
fn meeting_question_word() {
    assert_eq!(extract_question_word(MEETING), "be there");
}

#[test]
fn no_verb_phrase_is_a_lone_adjective() {
    for doc in &[tickets(), meeting()] {
        for phrase in extract_verb_phrases(doc.as_span(), "", &[]).unwrap() {
            assert!(!(phrase.len() == 1 && phrase.tokens()[0].pos() == Pos::Adj));
        }
    }
}

// "Cats sleep . Dogs bark ." as two sentences
pub(super) fn two_sentences() -> Document {
    Document::from_annotation(
        AnnotatedDoc::new(vec![
            tok("Cats", "cat", "NOUN", "NNS", "nsubj", 1),
            tok("sleep", "sleep", "VERB", "VBP", "ROOT", 1),
            tok(".", ".", "PUNCT", ".", "punct", 1),
            tok("Dogs", "dog", "NOUN", "NNS", "nsubj", 4),
            tok("bark", "bark", "VERB", "VBP", "ROOT", 4),
            tok(".", ".", "PUNCT", ".", "punct", 4),
        ])
        .with_sents(vec![AnnotatedSpan::new(0, 3), AnnotatedSpan::new(3, 6)])
        .with_noun_chunks(vec![AnnotatedSpan::new(3, 4)]),
    )
    .unwrap()
}

#[test]
fn sentences_are_scanned_independently() {
    let doc = two_sentences();

    let chunks = collect_noun_chunks(&doc);
    // the modifier pass after "Dogs" still reaches the first sentence
    assert_eq!(chunks.lemmas, vec!["dog", "dog", "cat"]);

    let per_sentence: Vec<Vec<String>> = doc
        .sents()
        .map(|sent| lemmas(&extract_verb_phrases(sent, "", &[]).unwrap()))
        .collect();
    assert_eq!(per_sentence, vec![vec!["sleep"], vec!["bark"]]);
}
