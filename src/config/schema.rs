//! Configuration schema definitions.
//!
//! All types derive Serde traits for deserialization from config files.

use serde::{Deserialize, Serialize};

use crate::tenant::TenantContext;

/// Root configuration for the sitemap route service.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct AppConfig {
    /// Tenant settings (URL prefix).
    pub tenant: TenantConfig,

    /// Where sitemap sets are read from.
    pub sitemaps: SitemapSourceConfig,

    /// Observability settings.
    pub observability: ObservabilityConfig,
}

/// Tenant configuration.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct TenantConfig {
    /// Request URL prefix of the tenant (e.g., "site1"). Unset for the default tenant.
    pub request_url_prefix: Option<String>,
}

impl TenantContext for TenantConfig {
    fn request_url_prefix(&self) -> Option<&str> {
        self.request_url_prefix.as_deref()
    }
}

/// Sitemap set document location.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct SitemapSourceConfig {
    /// Path to the sitemap set document (TOML, or JSON by `.json` extension).
    pub path: String,

    /// Rebuild routes when the document changes.
    pub watch: bool,

    /// Poll interval for the file watcher in seconds.
    pub poll_interval_secs: u64,
}

impl Default for SitemapSourceConfig {
    fn default() -> Self {
        Self {
            path: "sitemaps.toml".to_string(),
            watch: true,
            poll_interval_secs: 2,
        }
    }
}

/// Observability configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ObservabilityConfig {
    /// Log level (trace, debug, info, warn, error).
    pub log_level: String,

    /// Enable metrics endpoint.
    pub metrics_enabled: bool,

    /// Metrics endpoint bind address.
    pub metrics_address: String,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            metrics_enabled: false,
            metrics_address: "127.0.0.1:9090".to_string(),
        }
    }
}
