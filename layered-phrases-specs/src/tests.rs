use crate::{
    format_failure, format_summary, load_all_fixtures, load_fixture, run_fixture,
    ExpectedFailures, FailureState, HarnessResult, PhraseFixture,
};
use std::path::{Path, PathBuf};

fn fixtures_dir() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("fixtures")
}

fn fixture(name: &str) -> PhraseFixture {
    load_fixture(&fixtures_dir().join(name))
        .unwrap_or_else(|e| panic!("Failed to load fixture {}: {}", name, e))
}

#[test]
fn test_passive_question_fixture() {
    let fixture = fixture("passive-question.toml");

    assert_eq!(fixture.title.as_deref(), Some("Passive question with a quantity"));
    assert_eq!(fixture.annotation.tokens.len(), 8);
    assert_eq!(fixture.annotation.noun_chunks.len(), 2);
    assert_eq!(fixture.check_count(), 6);

    let result = run_fixture(&fixture).unwrap();
    assert!(result.success(), "{:?}", result.failures().collect::<Vec<_>>());
}

#[test]
fn test_nested_fixture_names() {
    let names: Vec<_> = load_all_fixtures(&fixtures_dir())
        .unwrap()
        .into_iter()
        .map(|(name, _)| name.replace('\\', "/"))
        .collect();

    assert!(names.contains(&"questions/existential-question.toml".to_string()));
    assert!(names.contains(&"questions/auxiliary-question.toml".to_string()));
}

#[test]
fn test_sentences_fixture_has_no_question_word() {
    let fixture = fixture("two-sentences.toml");
    assert!(fixture.annotation.text.is_none());
    assert_eq!(fixture.text(), "Cats sleep . Dogs bark .");
    assert_eq!(fixture.annotation.sents.as_ref().map(Vec::len), Some(2));
}

/// Runs every fixture and fails on any check not listed in `expected-failures.toml`.
#[test]
fn test_all_fixtures() {
    let expected = ExpectedFailures::load(
        &Path::new(env!("CARGO_MANIFEST_DIR")).join("expected-failures.toml"),
    )
    .unwrap();

    let mut harness = HarnessResult::new();
    let mut report = String::new();

    for (name, fixture) in load_all_fixtures(&fixtures_dir()).unwrap() {
        let name = name.replace('\\', "/");
        let result = run_fixture(&fixture)
            .unwrap_or_else(|e| panic!("Failed to run fixture {}: {}", name, e));

        let mut expected_here = 0;
        let mut regressions_here = 0;
        for outcome in &result.checks {
            if outcome.passed() {
                harness.record_pass();
                continue;
            }

            let state = expected.is_expected(&name, &outcome.check);
            harness.record_failure(state);
            if state == FailureState::Regression {
                regressions_here += 1;
                report.push_str(&format_failure(&name, outcome, Some(&fixture.text())));
            } else {
                expected_here += 1;
            }
        }

        if regressions_here > 0 {
            report.push_str(&format_summary(
                &name,
                result.passed(),
                expected_here + regressions_here,
                expected_here,
                regressions_here,
            ));
        }
    }

    assert!(harness.total > 0);
    assert!(harness.success(), "{}", report);
}
