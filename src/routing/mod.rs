//! Routing subsystem.
//!
//! # Data Flow
//! ```text
//! Incoming Request (path, method)
//!     → router.rs (version prefix parse, ordered rule scan)
//!     → rule.rs (evaluate path pattern, extract params)
//!     → Return: Route, typed error, or legacy fallback
//!
//! Rule Compilation (at startup):
//!     RuleConfig[]
//!     → Classify paths (literal vs pattern)
//!     → Compile pattern paths as anchored regexes
//!     → Freeze as immutable VersionedRouter
//! ```
//!
//! # Design Decisions
//! - Rules compiled at startup, immutable at runtime
//! - First match wins (registration order)
//! - A path match with a rejected verb does not stop the scan
//! - Unversioned paths delegate to a pluggable legacy resolver

pub mod error;
pub mod legacy;
pub mod route;
pub mod router;
pub mod rule;

pub use error::{RouteError, RouteResult};
pub use legacy::{LegacyRouteResolver, SegmentLegacyResolver};
pub use route::Route;
pub use router::VersionedRouter;
pub use rule::Rule;
