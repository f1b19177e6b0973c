//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! service config file (TOML)
//!     → loader.rs (parse & deserialize)
//!     → validation.rs (semantic checks)
//!     → AppConfig (validated, immutable)
//!
//! On sitemap document change:
//!     watcher.rs detects change
//!     → sitemap::file::load_sets reloads the document
//!     → fresh set list sent to SitemapRoute::run_rebuilds
//!     → atomic swap of the route index
//! ```
//!
//! # Design Decisions
//! - Config is immutable once loaded
//! - All fields have defaults to allow minimal configs
//! - Validation separates syntactic (serde) from semantic checks
//! - Sitemap documents are watched, the service config is not

pub mod loader;
pub mod schema;
pub mod validation;
pub mod watcher;

pub use schema::AppConfig;
pub use schema::ObservabilityConfig;
pub use schema::SitemapSourceConfig;
pub use schema::TenantConfig;
