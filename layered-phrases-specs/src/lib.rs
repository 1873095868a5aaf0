#![doc(
    html_logo_url = "https://raw.githubusercontent.com/storyscript/layered-nlp/main/assets/layered-nlp.svg",
    issue_tracker_base_url = "https://github.com/storyscript/layered-nlp/issues/"
)]

//! Fixture-driven testing infrastructure for layered-phrases.
//!
//! Each fixture is a TOML file holding one annotated utterance and the noun
//! chunks, verb phrases and question word expected from it. The harness runs
//! every fixture and compares results check by check; failures listed in
//! `expected-failures.toml` are tolerated, anything else is a regression.
//!
//! ## Modules
//!
//! - [`fixture`] - Fixture format and parsing
//! - [`loader`] - Loading fixtures from disk
//! - [`runner`] - Running the extractors against a fixture
//! - [`formatter`] - Human-readable failure reports
//! - [`failures`] - Expected failures tracking via TOML
//! - [`errors`] - Error types for the harness

pub mod errors;
pub mod failures;
pub mod fixture;
pub mod formatter;
pub mod loader;
pub mod runner;

pub use errors::{SpecError, SpecResult};
pub use failures::{ExpectedFailures, FailureEntry, FailureState, HarnessResult};
pub use fixture::{parse_fixture, Expectations, PhraseFixture, VerbPhraseExpectation};
pub use formatter::{format_failure, format_summary};
pub use loader::{load_all_fixtures, load_fixture};
pub use runner::{run_fixture, CheckOutcome, FixtureResult};

#[cfg(test)]
mod tests;
