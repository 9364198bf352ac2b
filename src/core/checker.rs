use crate::domain::model::{CheckResult, RedirectPair};
use crate::domain::ports::{ProbeResponse, RedirectProbe};
use crate::utils::error::Result;
use std::io::Write;

pub struct RedirectChecker<P: RedirectProbe> {
    probe: P,
}

impl<P: RedirectProbe> RedirectChecker<P> {
    pub fn new(probe: P) -> Self {
        Self { probe }
    }

    /// One GET to the source, classified. Transport failures are returned as errors.
    pub async fn check_redirect(&self, pair: &RedirectPair) -> Result<CheckResult> {
        let response = self.probe.probe(&pair.source).await?;
        Ok(classify(&response, &pair.destination))
    }

    /// Checks the pair and writes its result line to `out`.
    pub async fn check_and_report<W: Write>(
        &self,
        pair: &RedirectPair,
        out: &mut W,
    ) -> Result<CheckResult> {
        let result = self.check_redirect(pair).await?;
        writeln!(out, "{}", result.line(&pair.source))?;

        if result.is_success() {
            tracing::debug!("✅ {} -> {}", pair.source, pair.destination);
        } else {
            tracing::debug!("❌ {}: {:?}", pair.source, result);
        }
        Ok(result)
    }
}

pub fn classify(response: &ProbeResponse, destination: &str) -> CheckResult {
    match response.status {
        404 => CheckResult::NotFound,
        301 => {
            let actual = response.location.as_deref().unwrap_or_default();
            if actual == destination {
                CheckResult::GoodRedirect
            } else {
                CheckResult::BadRedirect {
                    expected: destination.to_string(),
                    actual: actual.to_string(),
                }
            }
        }
        status => CheckResult::UnexpectedStatus { status },
    }
}
