#[cfg(feature = "cli")]
pub mod cli;
pub mod file_config;

use crate::domain::ports::ConfigProvider;
use crate::utils::error::Result;
use crate::utils::validation::{self, Validate};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Settings for one run, after CLI flags and the optional config file are merged.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheckerConfig {
    pub filename: String,
    pub skip_header: bool,
    pub from_domain: Option<String>,
    pub to_domain: Option<String>,
    pub timeout_seconds: Option<u64>,
    pub user_agent: Option<String>,
    pub report_path: Option<String>,
    pub monitor: bool,
}

impl CheckerConfig {
    pub fn new(filename: impl Into<String>) -> Self {
        Self {
            filename: filename.into(),
            ..Self::default()
        }
    }

    pub fn timeout(&self) -> Option<Duration> {
        self.timeout_seconds.map(Duration::from_secs)
    }
}

fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.is_empty())
}

impl ConfigProvider for CheckerConfig {
    fn filename(&self) -> &str {
        &self.filename
    }

    fn skip_header(&self) -> bool {
        self.skip_header
    }

    fn from_domain(&self) -> Option<&str> {
        non_empty(&self.from_domain)
    }

    fn to_domain(&self) -> Option<&str> {
        non_empty(&self.to_domain)
    }

    fn report_path(&self) -> Option<&str> {
        self.report_path.as_deref()
    }
}

impl Validate for CheckerConfig {
    fn validate(&self) -> Result<()> {
        validation::validate_path("filename", &self.filename)?;

        // Sources must be requestable; destinations are only compared as strings.
        if let Some(domain) = non_empty(&self.from_domain) {
            validation::validate_url("from_domain", domain)?;
        }

        if let Some(timeout) = self.timeout_seconds {
            validation::validate_range("timeout", timeout, 1, 3600)?;
        }

        if let Some(user_agent) = &self.user_agent {
            validation::validate_non_empty_string("user_agent", user_agent)?;
        }

        if let Some(path) = &self.report_path {
            validation::validate_path("report", path)?;
        }

        Ok(())
    }
}
