//! Route registry module
//!
//! Holds the ordered list of (method, path, handler) registrations built
//! during startup. Insertion order is significant: it is the order routes
//! are tested against a request.

use std::collections::HashMap;
use std::sync::Arc;

use crate::http::{Framed, HttpMethod};

/// Handler invoked for a matched route.
///
/// Dispatch supplies no arguments; anything a handler needs it captures at
/// registration time. The handler produces the response for the request.
pub type HandlerFn = Arc<dyn Fn() -> Framed + Send + Sync>;

/// Target of a registered route
#[derive(Clone)]
pub enum RouteTarget {
    /// Direct handler reference, resolvable by construction
    Func(HandlerFn),
    /// Name resolved against the named-handler table at dispatch time
    Named(String),
}

/// A single (method, path, target) registration. Never mutated after
/// creation; owned exclusively by the registry.
#[derive(Clone)]
pub struct Route {
    pub method: HttpMethod,
    pub path: String,
    pub target: RouteTarget,
}

/// Route registry and dispatcher.
///
/// Populated during startup, then shared read-only behind an `Arc` for the
/// lifetime of the process. Registration must complete before the first
/// dispatch call; dispatch takes `&self` and never mutates the registry, so
/// concurrent requests cannot interleave with registration.
#[derive(Default)]
pub struct Router {
    routes: Vec<Route>,
    named: HashMap<String, HandlerFn>,
}

impl Router {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a route with a direct handler function. Always succeeds;
    /// duplicate paths are kept and resolved by insertion order.
    pub fn register<F>(&mut self, method: HttpMethod, path: &str, handler: F)
    where
        F: Fn() -> Framed + Send + Sync + 'static,
    {
        self.routes.push(Route {
            method,
            path: path.to_string(),
            target: RouteTarget::Func(Arc::new(handler)),
        });
    }

    /// Register a route whose handler is looked up by name at dispatch time.
    ///
    /// The name does not have to exist yet; a dispatch that reaches a route
    /// with an unregistered name produces the 500 error response.
    pub fn register_named(&mut self, method: HttpMethod, path: &str, name: &str) {
        self.routes.push(Route {
            method,
            path: path.to_string(),
            target: RouteTarget::Named(name.to_string()),
        });
    }

    /// Add a handler to the named-handler table
    pub fn add_named_handler<F>(&mut self, name: &str, handler: F)
    where
        F: Fn() -> Framed + Send + Sync + 'static,
    {
        self.named.insert(name.to_string(), Arc::new(handler));
    }

    /// Number of registered routes
    #[must_use]
    pub fn route_count(&self) -> usize {
        self.routes.len()
    }

    /// Registered routes in insertion order
    pub(crate) fn routes(&self) -> &[Route] {
        &self.routes
    }

    /// Resolve a handler from the named-handler table
    pub(crate) fn named_handler(&self, name: &str) -> Option<&HandlerFn> {
        self.named.get(name)
    }
}
