use crate::utils::error::{CheckerError, Result};
use crate::utils::validation::{self, Validate};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Optional defaults loaded with `--config`. Every section and key may be omitted.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FileConfig {
    pub input: Option<InputConfig>,
    pub http: Option<HttpConfig>,
    pub report: Option<ReportConfig>,
    pub monitoring: Option<MonitoringConfig>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct InputConfig {
    pub skip_header: Option<bool>,
    pub from_domain: Option<String>,
    pub to_domain: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct HttpConfig {
    pub timeout_seconds: Option<u64>,
    pub user_agent: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ReportConfig {
    pub enabled: Option<bool>,
    pub path: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MonitoringConfig {
    #[serde(default)]
    pub enabled: bool,
}

impl FileConfig {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(CheckerError::IoError)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| CheckerError::ConfigError {
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// Replaces `${VAR}` with the environment value; unknown variables are left as-is.
    fn substitute_env_vars(content: &str) -> Result<String> {
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| CheckerError::ConfigError {
            message: format!("Invalid substitution pattern: {}", e),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    pub fn skip_header(&self) -> Option<bool> {
        self.input.as_ref().and_then(|i| i.skip_header)
    }

    pub fn from_domain(&self) -> Option<&str> {
        self.input.as_ref().and_then(|i| i.from_domain.as_deref())
    }

    pub fn to_domain(&self) -> Option<&str> {
        self.input.as_ref().and_then(|i| i.to_domain.as_deref())
    }

    pub fn timeout_seconds(&self) -> Option<u64> {
        self.http.as_ref().and_then(|h| h.timeout_seconds)
    }

    pub fn user_agent(&self) -> Option<&str> {
        self.http.as_ref().and_then(|h| h.user_agent.as_deref())
    }

    /// Report path, when the `[report]` section is present and not disabled.
    pub fn report_path(&self) -> Option<&str> {
        let report = self.report.as_ref()?;
        if report.enabled == Some(false) {
            return None;
        }
        report.path.as_deref()
    }

    pub fn monitoring_enabled(&self) -> bool {
        self.monitoring.as_ref().map(|m| m.enabled).unwrap_or(false)
    }
}

impl Validate for FileConfig {
    fn validate(&self) -> Result<()> {
        if let Some(report) = &self.report {
            if report.enabled == Some(true) {
                let path = validation::validate_required_field("report.path", &report.path)?;
                validation::validate_path("report.path", path)?;
            }
        }

        if let Some(timeout) = self.timeout_seconds() {
            validation::validate_range("http.timeout_seconds", timeout, 1, 3600)?;
        }

        Ok(())
    }
}
