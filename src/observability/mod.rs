//! Observability subsystem.
//!
//! # Data Flow
//! ```text
//! Routing decisions produce:
//!     → logging.rs (structured log events via tracing)
//!
//! Consumers:
//!     → Log aggregation (stdout, file, remote)
//! ```
//!
//! # Design Decisions
//! - Structured logging via the tracing crate
//! - Log level configurable via config and environment
//! - The routing core only emits events; subscriber setup is opt-in

pub mod logging;

pub use logging::init_logging;
