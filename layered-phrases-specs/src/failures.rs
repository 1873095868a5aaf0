//! Expected failures tracking via TOML file.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Loaded expected failures configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ExpectedFailures {
    /// Known failures (heuristic limitations, won't fix soon).
    #[serde(default)]
    pub known: Vec<FailureEntry>,
    /// Pending failures (awaiting fix).
    #[serde(default)]
    pub pending: Vec<FailureEntry>,
}

/// A single expected failure entry.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FailureEntry {
    /// Fixture path relative to the fixtures directory.
    pub fixture: String,
    /// Check identifier (e.g., "noun_chunks" or "verb_phrases[1]").
    pub check: String,
    /// Human-readable reason.
    #[serde(default)]
    pub reason: Option<String>,
    /// Date added (YYYY-MM-DD).
    #[serde(default)]
    pub added: Option<String>,
}

/// Failure lifecycle state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureState {
    /// Known limitation, won't fix soon.
    Known,
    /// Awaiting fix, not blocking.
    Pending,
    /// Expected to pass - failure is a regression.
    Regression,
}

impl ExpectedFailures {
    /// Load from a TOML file. A missing file means no expected failures.
    pub fn load(path: &Path) -> Result<Self, String> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)
            .map_err(|e| format!("Failed to read {}: {}", path.display(), e))?;

        toml::from_str(&content)
            .map_err(|e| format!("Failed to parse {}: {}", path.display(), e))
    }

    /// Classify a failing check.
    pub fn is_expected(&self, fixture: &str, check: &str) -> FailureState {
        if self.find(&self.known, fixture, check) {
            return FailureState::Known;
        }
        if self.find(&self.pending, fixture, check) {
            return FailureState::Pending;
        }
        FailureState::Regression
    }

    fn find(&self, entries: &[FailureEntry], fixture: &str, check: &str) -> bool {
        entries
            .iter()
            .any(|entry| entry.fixture == fixture && entry.check == check)
    }

    /// Count total expected failures.
    pub fn count(&self) -> usize {
        self.known.len() + self.pending.len()
    }

    /// Get entry for a specific failure (if expected).
    pub fn get_entry(&self, fixture: &str, check: &str) -> Option<&FailureEntry> {
        self.known
            .iter()
            .chain(self.pending.iter())
            .find(|e| e.fixture == fixture && e.check == check)
    }
}

/// Result of running the harness.
#[derive(Debug, Clone, Default)]
pub struct HarnessResult {
    /// Total checks performed.
    pub total: usize,
    /// Passed checks.
    pub passed: usize,
    /// Expected failures (known + pending).
    pub expected_failures: usize,
    /// Regressions (unexpected failures).
    pub regressions: usize,
}

impl HarnessResult {
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the exit code (0 = pass, 1 = regressions).
    pub fn exit_code(&self) -> i32 {
        if self.regressions > 0 {
            1
        } else {
            0
        }
    }

    /// Check if all tests passed (no regressions).
    pub fn success(&self) -> bool {
        self.regressions == 0
    }

    pub fn record_pass(&mut self) {
        self.total += 1;
        self.passed += 1;
    }

    pub fn record_failure(&mut self, state: FailureState) {
        self.total += 1;
        match state {
            FailureState::Known | FailureState::Pending => {
                self.expected_failures += 1;
            }
            FailureState::Regression => {
                self.regressions += 1;
            }
        }
    }
}
