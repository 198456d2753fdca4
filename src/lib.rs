//! Versioned HTTP Route Selection Library

pub mod config;
pub mod observability;
pub mod routing;

pub use config::schema::RouterConfig;
pub use routing::error::RouteError;
pub use routing::legacy::{LegacyRouteResolver, SegmentLegacyResolver};
pub use routing::route::Route;
pub use routing::router::VersionedRouter;
