use crate::utils::error::{CheckerError, Result};
use url::Url;

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

fn invalid(field_name: &str, value: impl ToString, reason: impl Into<String>) -> CheckerError {
    CheckerError::InvalidConfigValueError {
        field: field_name.to_string(),
        value: value.to_string(),
        reason: reason.into(),
    }
}

/// Accepts absolute `http` and `https` URLs only.
pub fn validate_url(field_name: &str, url_str: &str) -> Result<()> {
    if url_str.is_empty() {
        return Err(invalid(field_name, url_str, "URL cannot be empty"));
    }

    let url = Url::parse(url_str)
        .map_err(|e| invalid(field_name, url_str, format!("Invalid URL format: {}", e)))?;
    match url.scheme() {
        "http" | "https" => Ok(()),
        scheme => Err(invalid(
            field_name,
            url_str,
            format!("Unsupported URL scheme: {}", scheme),
        )),
    }
}

pub fn validate_path(field_name: &str, path: &str) -> Result<()> {
    if path.is_empty() {
        return Err(invalid(field_name, path, "Path cannot be empty"));
    }
    if path.contains('\0') {
        return Err(invalid(field_name, path, "Path contains null bytes"));
    }
    Ok(())
}

pub fn validate_required_field<'a, T>(field_name: &str, value: &'a Option<T>) -> Result<&'a T> {
    value.as_ref().ok_or_else(|| CheckerError::MissingConfigError {
        field: field_name.to_string(),
    })
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(invalid(
            field_name,
            value,
            "Value cannot be empty or whitespace-only",
        ));
    }
    Ok(())
}

pub fn validate_range<T: PartialOrd + std::fmt::Display + Copy>(
    field_name: &str,
    value: T,
    min: T,
    max: T,
) -> Result<()> {
    if value < min || value > max {
        return Err(invalid(
            field_name,
            value,
            format!("Value must be between {} and {}", min, max),
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_url() {
        assert!(validate_url("from_domain", "https://example.com").is_ok());
        assert!(validate_url("from_domain", "http://localhost:8080").is_ok());
        assert!(validate_url("from_domain", "").is_err());
        assert!(validate_url("from_domain", "example.com").is_err());
        assert!(validate_url("from_domain", "ftp://example.com").is_err());
    }

    #[test]
    fn test_validate_path() {
        assert!(validate_path("filename", "redirects.csv").is_ok());
        assert!(validate_path("filename", "").is_err());
        assert!(validate_path("filename", "bad\0name.csv").is_err());
    }

    #[test]
    fn test_validate_required_field() {
        let present = Some("report.json".to_string());
        let missing: Option<String> = None;

        assert_eq!(
            validate_required_field("report.path", &present).unwrap(),
            "report.json"
        );
        assert!(matches!(
            validate_required_field("report.path", &missing),
            Err(CheckerError::MissingConfigError { .. })
        ));
    }

    #[test]
    fn test_validate_range() {
        assert!(validate_range("http.timeout_seconds", 10u64, 1, 3600).is_ok());
        assert!(validate_range("http.timeout_seconds", 0u64, 1, 3600).is_err());
        assert!(validate_range("http.timeout_seconds", 3601u64, 1, 3600).is_err());
    }

    #[test]
    fn test_validate_non_empty_string() {
        assert!(validate_non_empty_string("http.user_agent", "checker/1.0").is_ok());
        assert!(validate_non_empty_string("http.user_agent", "   ").is_err());
    }
}
