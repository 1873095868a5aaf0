use std::fmt::{self, Write};

use unicode_width::UnicodeWidthStr;

use crate::{Span, Token, VerbPhrase};

/// One underlined row: inclusive document token range plus its label.
struct IncludedPhrase {
    first: usize,
    last: usize,
    label: String,
}

/// Renders a span's tokens with extracted phrases underlined beneath them.
///
/// ```text
/// She  has  quickly  finished  the  report
///      ╰────────────────────╯VerbPhrase(have quickly finish)
///                              ╰─────────╯NounChunk(the report)
/// ```
pub struct PhraseDisplay<'a> {
    span: Span<'a>,
    include: Vec<IncludedPhrase>,
}

impl<'a> PhraseDisplay<'a> {
    pub fn new(span: Span<'a>) -> Self {
        PhraseDisplay {
            span,
            include: Vec::new(),
        }
    }

    fn push(&mut self, tokens: &[Token<'a>], kind: &str) {
        let first = tokens.iter().map(|token| token.i()).min();
        let last = tokens.iter().map(|token| token.i()).max();
        if let (Some(first), Some(last)) = (first, last) {
            // phrases reaching outside the displayed span are skipped
            if first < self.span.start() || last >= self.span.end() {
                return;
            }
            let lemmas: Vec<_> = tokens.iter().map(|token| token.lemma()).collect();
            self.include.push(IncludedPhrase {
                first,
                last,
                label: format!("{}({})", kind, lemmas.join(" ")),
            });
        }
    }

    pub fn include_verb_phrases(&mut self, phrases: &[VerbPhrase<'a>]) {
        for phrase in phrases {
            self.push(phrase.tokens(), "VerbPhrase");
        }
    }

    /// Include a left-expanded noun phrase. Tokens may come in any order.
    pub fn include_noun_phrase(&mut self, tokens: &[Token<'a>]) {
        let mut ordered = tokens.to_vec();
        ordered.sort_by_key(|token| token.i());
        self.push(&ordered, "NounPhrase");
    }

    /// Include the annotator's native noun chunks.
    pub fn include_native_chunks(&mut self) {
        for chunk in self.span.doc().noun_chunks() {
            let tokens: Vec<_> = chunk.tokens().collect();
            self.push(&tokens, "NounChunk");
        }
    }

    pub fn with_verb_phrases(mut self, phrases: &[VerbPhrase<'a>]) -> Self {
        self.include_verb_phrases(phrases);
        self
    }

    pub fn with_native_chunks(mut self) -> Self {
        self.include_native_chunks();
        self
    }
}

impl fmt::Display for PhraseDisplay<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        const SPACE_PADDING: usize = 2;
        let mut start_cols = Vec::with_capacity(self.span.len());
        let mut end_cols = Vec::with_capacity(self.span.len());

        let mut opening_line = String::new();
        for (idx, token) in self.span.tokens().enumerate() {
            if idx > 0 {
                opening_line.extend(std::iter::repeat(' ').take(SPACE_PADDING));
            }
            start_cols.push(UnicodeWidthStr::width(&*opening_line));
            opening_line.push_str(token.text());
            end_cols.push(UnicodeWidthStr::width(&*opening_line));
        }

        f.write_str(&opening_line)?;

        for phrase in &self.include {
            f.write_char('\n')?;

            let start_col = start_cols[phrase.first - self.span.start()];
            let end_col = end_cols[phrase.last - self.span.start()];
            for _ in 0..start_col {
                f.write_char(' ')?;
            }

            f.write_char('╰')?;
            for _ in (start_col + 1)..end_col.saturating_sub(1) {
                f.write_char('─')?;
            }
            if end_col - start_col > 1 {
                f.write_char('╯')?;
            }

            f.write_str(&phrase.label)?;
        }

        Ok(())
    }
}
