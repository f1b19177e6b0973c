//! Sitemap configuration subsystem.
//!
//! # Data Flow
//! ```text
//! sitemap document (TOML/JSON) or in-memory list
//!     → provider.rs (SitemapSetProvider::fetch_sets)
//!     → model.rs (SitemapSet → SitemapNode tree)
//!     → handed to routing::index for flattening
//! ```
//!
//! # Design Decisions
//! - Sets are owned by the provider; routing only reads them
//! - Disabled sets are still returned by providers; filtering happens at build time
//! - No semantic validation of node paths or ids

pub mod file;
pub mod model;
pub mod provider;

pub use file::FileSitemapProvider;
pub use model::{NodeId, SitemapNode, SitemapSet};
pub use provider::{ProviderError, SitemapSetProvider, StaticSitemapProvider};
