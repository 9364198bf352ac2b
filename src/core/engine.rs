use crate::core::checker::RedirectChecker;
use crate::core::loader;
use crate::domain::model::RunSummary;
use crate::domain::ports::{ConfigProvider, RedirectProbe, Storage};
use crate::utils::error::Result;
use crate::utils::monitor::SystemMonitor;
use chrono::Utc;
use std::io::Write;
use std::time::Instant;

/// Loads every pair up front, then checks them one at a time in input order.
pub struct CheckEngine<P: RedirectProbe, S: Storage, C: ConfigProvider> {
    checker: RedirectChecker<P>,
    storage: S,
    config: C,
    monitor: SystemMonitor,
}

impl<P: RedirectProbe, S: Storage, C: ConfigProvider> CheckEngine<P, S, C> {
    pub fn new(probe: P, storage: S, config: C) -> Self {
        Self::new_with_monitoring(probe, storage, config, false)
    }

    pub fn new_with_monitoring(probe: P, storage: S, config: C, enable_monitoring: bool) -> Self {
        Self {
            checker: RedirectChecker::new(probe),
            storage,
            config,
            monitor: SystemMonitor::new(enable_monitoring),
        }
    }

    /// Runs the whole check, writing one result line per pair to `out`.
    ///
    /// A malformed input file fails before any request is sent. A transport
    /// failure stops the run at the pair that caused it.
    pub async fn run<W: Write>(&self, out: &mut W) -> Result<RunSummary> {
        let started_at = Utc::now();
        let start = Instant::now();
        let filename = self.config.filename();

        // Load every pair before the first request
        tracing::info!("📥 Loading redirects from {}", filename);
        let data = self.storage.read_file(filename).await?;
        let pairs = loader::load_redirects_from_reader(
            data.as_slice(),
            filename,
            self.config.skip_header(),
            self.config.from_domain(),
            self.config.to_domain(),
        )?;
        tracing::info!("Loaded {} redirect pairs", pairs.len());
        self.monitor.log_stats("Load");

        // Check
        let total = pairs.len();
        let mut summary = RunSummary::new(filename, started_at);
        for (index, pair) in pairs.into_iter().enumerate() {
            let result = match self.checker.check_and_report(&pair, out).await {
                Ok(result) => result,
                Err(e) => {
                    tracing::error!("Aborting after {} of {} checks: {}", index, total, e);
                    // Lines already printed stay visible
                    if let Err(flush_err) = out.flush() {
                        tracing::warn!("Could not flush output: {}", flush_err);
                    }
                    return Err(e);
                }
            };
            summary.record(pair, result);
        }
        out.flush()?;
        self.monitor.log_stats("Check");

        // Summarise
        summary.elapsed_ms = start.elapsed().as_millis() as u64;
        tracing::info!(
            "🏁 Checked {} redirects in {}ms: {} good, {} wrong target, {} not found, {} unexpected status",
            summary.total,
            summary.elapsed_ms,
            summary.good,
            summary.bad,
            summary.not_found,
            summary.unexpected
        );

        // Write the report, if asked for
        if let Some(report_path) = self.config.report_path() {
            let json = serde_json::to_string_pretty(&summary)?;
            self.storage.write_file(report_path, json.as_bytes()).await?;
            tracing::info!("📁 Report saved to: {}", report_path);
        }

        self.monitor.log_final_stats();
        Ok(summary)
    }
}
