//! Sitemap routing subsystem.
//!
//! # Data Flow
//! ```text
//! Request path (e.g. "sitemap/blog.xml")
//!     → router.rs (lazy build if no index, apply tenant prefix)
//!     → index.rs (O(1) lookup)
//!     → Return: node id, or explicit not-found
//!
//! Index Build (first lookup, or on configuration change):
//!     SitemapSetProvider::fetch_sets() (or a pre-fetched list)
//!     → Skip disabled sets
//!     → Flatten node trees under "{tenant}/{root}"
//!     → Reject duplicate paths
//!     → Atomically publish the new RouteIndex
//! ```
//!
//! # Design Decisions
//! - Index is immutable once built; rebuilds swap the whole index
//! - Readers never observe a partially built index
//! - Failed builds keep the previous index (fail closed, stay available)

pub mod index;
pub mod router;

pub use index::RouteIndex;
pub use router::SitemapRoute;
