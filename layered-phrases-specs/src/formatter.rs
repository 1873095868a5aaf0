//! Human-readable reporting for failed checks.

use crate::runner::CheckOutcome;
use std::fmt::Write;

/// Format a failed check with the utterance for context.
pub fn format_failure(fixture_name: &str, outcome: &CheckOutcome, text: Option<&str>) -> String {
    let mut output = String::new();

    writeln!(output, "\nFAIL: {} [{}]", fixture_name, outcome.check).unwrap();
    if let Some(text) = text {
        writeln!(output, "  text: {}", text).unwrap();
    }
    writeln!(output, "  expected: {}", outcome.expected).unwrap();
    writeln!(output, "  actual:   {}", outcome.actual).unwrap();

    if let Some(hint) = generate_hint(outcome) {
        writeln!(output, "  hint: {}", hint).unwrap();
    }

    output
}

/// Format a summary line for one fixture.
pub fn format_summary(
    fixture_name: &str,
    passed: usize,
    failed: usize,
    expected_failures: usize,
    regressions: usize,
) -> String {
    let mut output = String::new();

    let status = if regressions > 0 { "FAIL" } else { "PASS" };

    writeln!(output, "\n{}: {}", status, fixture_name).unwrap();
    writeln!(
        output,
        "  {} passed, {} failed ({} expected, {} regressions)",
        passed, failed, expected_failures, regressions
    )
    .unwrap();

    output
}

fn generate_hint(outcome: &CheckOutcome) -> Option<&'static str> {
    if outcome.check.starts_with("verb_phrases") && outcome.actual == "[]" {
        return Some(
            "no verb anchored a phrase - check the pattern matches a dependent lemma and that no ignore tag follows the phrase",
        );
    }
    if outcome.check == "noun_chunks" || outcome.check == "noun_chunk_pos" {
        return Some("modifier phrases follow each native chunk, pure-noun chunks are emitted twice");
    }
    if outcome.check == "question_word" {
        return Some("the leftmost whole-word match wins, then it is canonicalized");
    }
    None
}
