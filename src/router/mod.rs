//! Routing module
//!
//! Route registry and request dispatch: exact path matching in registration
//! order, with standardized JSON error responses for every failure outcome.

mod dispatch;
mod registry;

pub use registry::{HandlerFn, Route, RouteTarget, Router};
