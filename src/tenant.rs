//! Tenant context and URL prefix handling.
//!
//! # Responsibilities
//! - Expose the tenant's request URL prefix to the routing layer
//! - Normalize the prefix once (trailing separators stripped)
//! - Apply the prefix identically to root paths and query paths

use std::fmt;

/// Supplies the tenant's request URL prefix.
pub trait TenantContext {
    /// Raw prefix as configured, e.g. `Some("site1/")`. `None` or empty for the default tenant.
    fn request_url_prefix(&self) -> Option<&str>;
}

/// Normalized tenant prefix, without trailing separators.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TenantPrefix(String);

impl TenantPrefix {
    pub fn new(raw: Option<&str>) -> Self {
        Self(raw.unwrap_or_default().trim_end_matches('/').to_string())
    }

    pub fn from_context(context: &impl TenantContext) -> Self {
        Self::new(context.request_url_prefix())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Prefix a request path: `prefix/path`, or `path` untouched without a prefix.
    pub fn apply(&self, path: &str) -> String {
        if self.0.is_empty() {
            path.to_string()
        } else {
            format!("{}/{}", self.0, path)
        }
    }

    /// Effective root of a sitemap set: leading separators dropped, then prefixed.
    pub fn root(&self, root_path: &str) -> String {
        self.apply(root_path.trim_start_matches('/'))
    }
}

impl fmt::Display for TenantPrefix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl TenantContext for Option<String> {
    fn request_url_prefix(&self) -> Option<&str> {
        self.as_deref()
    }
}

impl TenantContext for &str {
    fn request_url_prefix(&self) -> Option<&str> {
        Some(*self)
    }
}
