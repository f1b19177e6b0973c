//! Sitemap route resolution.
//!
//! Flattens hierarchical sitemap set configuration into a prefix-aware
//! route index, built lazily on first lookup and swapped atomically on
//! rebuild.

pub mod config;
pub mod error;
pub mod lifecycle;
pub mod observability;
pub mod routing;
pub mod sitemap;
pub mod tenant;

pub use config::AppConfig;
pub use error::{RouteError, RouteResult};
pub use routing::{RouteIndex, SitemapRoute};
pub use sitemap::{NodeId, SitemapNode, SitemapSet, SitemapSetProvider};
pub use tenant::{TenantContext, TenantPrefix};
