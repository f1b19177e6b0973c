//! Configuration validation.
//!
//! # Responsibilities
//! - Semantic validation (serde handles syntactic)
//! - Validate value ranges (poll interval > 0, addresses parse)
//!
//! # Design Decisions
//! - Returns all validation errors, not just first
//! - Validation is pure function: AppConfig → Result<(), Vec<ValidationError>>
//! - Sitemap set content is not validated here

use std::net::SocketAddr;
use thiserror::Error;

use crate::config::schema::AppConfig;

const LOG_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];

/// A single semantic problem in the configuration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("sitemaps.path must not be empty")]
    EmptySitemapPath,

    #[error("sitemaps.poll_interval_secs must be greater than zero")]
    ZeroPollInterval,

    #[error("observability.log_level '{0}' is not one of trace, debug, info, warn, error")]
    UnknownLogLevel(String),

    #[error("observability.metrics_address '{0}' is not a valid socket address")]
    InvalidMetricsAddress(String),

    #[error("tenant.request_url_prefix '{0}' must not contain whitespace")]
    InvalidTenantPrefix(String),
}

/// Check an `AppConfig` for semantic errors.
pub fn validate_config(config: &AppConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    if config.sitemaps.path.trim().is_empty() {
        errors.push(ValidationError::EmptySitemapPath);
    }

    if config.sitemaps.poll_interval_secs == 0 {
        errors.push(ValidationError::ZeroPollInterval);
    }

    let level = config.observability.log_level.to_lowercase();
    if !LOG_LEVELS.contains(&level.as_str()) {
        errors.push(ValidationError::UnknownLogLevel(
            config.observability.log_level.clone(),
        ));
    }

    if config.observability.metrics_enabled
        && config.observability.metrics_address.parse::<SocketAddr>().is_err()
    {
        errors.push(ValidationError::InvalidMetricsAddress(
            config.observability.metrics_address.clone(),
        ));
    }

    if let Some(prefix) = &config.tenant.request_url_prefix {
        if prefix.chars().any(char::is_whitespace) {
            errors.push(ValidationError::InvalidTenantPrefix(prefix.clone()));
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        assert!(validate_config(&AppConfig::default()).is_ok());
    }

    #[test]
    fn test_collects_all_errors() {
        let mut config = AppConfig::default();
        config.sitemaps.path = "  ".into();
        config.sitemaps.poll_interval_secs = 0;
        config.observability.log_level = "verbose".into();
        config.observability.metrics_enabled = true;
        config.observability.metrics_address = "not-an-address".into();
        config.tenant.request_url_prefix = Some("site 1".into());

        let errors = validate_config(&config).unwrap_err();
        assert_eq!(errors.len(), 5);
        assert!(errors.contains(&ValidationError::EmptySitemapPath));
        assert!(errors.contains(&ValidationError::UnknownLogLevel("verbose".into())));
    }

    #[test]
    fn test_metrics_address_ignored_when_disabled() {
        let mut config = AppConfig::default();
        config.observability.metrics_address = "not-an-address".into();
        assert!(validate_config(&config).is_ok());
    }

    #[test]
    fn test_log_level_case_insensitive() {
        let mut config = AppConfig::default();
        config.observability.log_level = "DEBUG".into();
        assert!(validate_config(&config).is_ok());
    }
}
