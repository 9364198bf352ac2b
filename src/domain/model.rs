use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A source URL and the destination it is expected to 301 to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RedirectPair {
    pub source: String,
    pub destination: String,
}

impl RedirectPair {
    pub fn new(source: impl Into<String>, destination: impl Into<String>) -> Self {
        Self {
            source: source.into(),
            destination: destination.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum CheckResult {
    NotFound,
    GoodRedirect,
    BadRedirect { expected: String, actual: String },
    UnexpectedStatus { status: u16 },
}

impl CheckResult {
    pub fn is_success(&self) -> bool {
        matches!(self, CheckResult::GoodRedirect)
    }

    /// Binds the result to the source URL it was observed for, for printing.
    pub fn line<'a>(&'a self, source: &'a str) -> ResultLine<'a> {
        ResultLine {
            source,
            result: self,
        }
    }
}

pub struct ResultLine<'a> {
    source: &'a str,
    result: &'a CheckResult,
}

impl fmt::Display for ResultLine<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let source = self.source;
        match self.result {
            CheckResult::NotFound => write!(f, "ERROR: 404 response for {}", source),
            CheckResult::GoodRedirect => write!(f, "SUCCESS: Good redirect for {}", source),
            CheckResult::BadRedirect { expected, actual } => write!(
                f,
                "ERROR: Wrong 301 redirect for {}! Expected '{}' but got '{}'",
                source, expected, actual
            ),
            CheckResult::UnexpectedStatus { status } => write!(
                f,
                "Wrong response for '{}': status code {}",
                source, status
            ),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CheckedPair {
    #[serde(flatten)]
    pub pair: RedirectPair,
    pub result: CheckResult,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunSummary {
    pub input_file: String,
    pub started_at: DateTime<Utc>,
    pub elapsed_ms: u64,
    pub total: usize,
    pub good: usize,
    pub bad: usize,
    pub not_found: usize,
    pub unexpected: usize,
    pub results: Vec<CheckedPair>,
}

impl RunSummary {
    pub fn new(input_file: impl Into<String>, started_at: DateTime<Utc>) -> Self {
        Self {
            input_file: input_file.into(),
            started_at,
            elapsed_ms: 0,
            total: 0,
            good: 0,
            bad: 0,
            not_found: 0,
            unexpected: 0,
            results: Vec::new(),
        }
    }

    pub fn record(&mut self, pair: RedirectPair, result: CheckResult) {
        self.total += 1;
        match &result {
            CheckResult::GoodRedirect => self.good += 1,
            CheckResult::BadRedirect { .. } => self.bad += 1,
            CheckResult::NotFound => self.not_found += 1,
            CheckResult::UnexpectedStatus { .. } => self.unexpected += 1,
        }
        self.results.push(CheckedPair { pair, result });
    }

    pub fn failed(&self) -> usize {
        self.total - self.good
    }
}
