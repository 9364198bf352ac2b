use crate::config::file_config::FileConfig;
use crate::config::CheckerConfig;
use clap::Parser;

#[derive(Debug, Clone, Parser)]
#[command(name = "redirect-checker")]
#[command(about = "Check URL redirects based on a given list")]
pub struct CliConfig {
    /// Two-column CSV of source and expected destination URLs
    pub filename: String,

    /// Discard the first row of the CSV
    #[arg(long)]
    pub skip_header: bool,

    /// Prefix every source URL with `<value>/`
    #[arg(long)]
    pub from_domain: Option<String>,

    /// Prefix every expected destination with `<value>/`
    #[arg(long)]
    pub to_domain: Option<String>,

    /// TOML file with default settings
    #[arg(long)]
    pub config: Option<String>,

    /// Per-request timeout in seconds (no timeout by default)
    #[arg(long)]
    pub timeout: Option<u64>,

    /// User-Agent header sent with every request
    #[arg(long)]
    pub user_agent: Option<String>,

    /// Write a JSON summary of the run to this path
    #[arg(long)]
    pub report: Option<String>,

    /// Log process CPU and memory usage per phase
    #[arg(long)]
    pub monitor: bool,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,

    /// Emit logs as JSON lines
    #[arg(long)]
    pub log_json: bool,
}

impl CliConfig {
    /// Merges flags over the config file; flags win, boolean switches are OR-ed.
    pub fn into_checker_config(self, file: Option<&FileConfig>) -> CheckerConfig {
        let file_default = FileConfig::default();
        let file = file.unwrap_or(&file_default);

        CheckerConfig {
            filename: self.filename,
            skip_header: self.skip_header || file.skip_header().unwrap_or(false),
            from_domain: self
                .from_domain
                .or_else(|| file.from_domain().map(str::to_string)),
            to_domain: self
                .to_domain
                .or_else(|| file.to_domain().map(str::to_string)),
            timeout_seconds: self.timeout.or(file.timeout_seconds()),
            user_agent: self
                .user_agent
                .or_else(|| file.user_agent().map(str::to_string)),
            report_path: self
                .report
                .or_else(|| file.report_path().map(str::to_string)),
            monitor: self.monitor || file.monitoring_enabled(),
        }
    }
}
