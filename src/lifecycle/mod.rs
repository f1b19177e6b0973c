//! Lifecycle management subsystem.
//!
//! # Data Flow
//! ```text
//! Signals (signals.rs):
//!     SIGINT (Ctrl+C) → Shutdown::trigger
//!
//! Shutdown (shutdown.rs):
//!     trigger → broadcast to rebuild loop and other long-running tasks → exit
//! ```
//!
//! # Design Decisions
//! - Long-running tasks subscribe before they start, so no signal is missed
//! - File watchers stop when their handle is dropped, after the broadcast

pub mod shutdown;
pub mod signals;

pub use shutdown::Shutdown;
