//! Request dispatch module
//!
//! Matches one incoming request against the registry in insertion order and
//! produces exactly one framed response.

use hyper::StatusCode;
use serde_json::json;

use super::registry::{HandlerFn, RouteTarget, Router};
use crate::http::{self, Framed};

/// Outcome of scanning the registry for one request
enum Outcome<'a> {
    /// Path and method matched a resolvable handler
    Matched(&'a HandlerFn),
    /// Path matched but the method differs
    MethodNotAllowed,
    /// Path and method matched but the named handler is not registered
    HandlerMissing,
    /// No registered path matched the request path
    NotFound,
}

impl Router {
    /// Dispatch one request against the registry.
    ///
    /// `method_token` is the raw request method; `request_target` is the
    /// request URI, whose query string and fragment are stripped before the
    /// exact path comparison. Exactly one response comes back: the matched
    /// handler's, or one of the standardized JSON error responses.
    #[must_use]
    pub fn dispatch(&self, method_token: &str, request_target: &str) -> Framed {
        match self.scan(method_token, request_path(request_target)) {
            Outcome::Matched(handler) => handler(),
            Outcome::MethodNotAllowed => http::send_json(
                &json!({
                    "message": format!("{method_token} method is not allowed for this route.")
                }),
                StatusCode::METHOD_NOT_ALLOWED,
            ),
            Outcome::HandlerMissing => http::send_json(
                &json!({ "message": "The specified function does not exist" }),
                StatusCode::INTERNAL_SERVER_ERROR,
            ),
            Outcome::NotFound => {
                http::send_json(&json!({ "message": "Not Found" }), StatusCode::NOT_FOUND)
            }
        }
    }

    /// Scan routes in insertion order.
    ///
    /// The first route whose path equals the request path decides the
    /// outcome: a wrong method ends the whole pass even if a later route
    /// carries the same path with the correct method.
    fn scan(&self, method_token: &str, path: &str) -> Outcome<'_> {
        for route in self.routes() {
            if route.path != path {
                continue;
            }
            if !route.method.matches_token(method_token) {
                return Outcome::MethodNotAllowed;
            }
            return match &route.target {
                RouteTarget::Func(handler) => Outcome::Matched(handler),
                RouteTarget::Named(name) => self
                    .named_handler(name)
                    .map_or(Outcome::HandlerMissing, Outcome::Matched),
            };
        }
        Outcome::NotFound
    }
}

/// Path component of a request target: query string and fragment stripped,
/// no other normalization. Trailing slashes and case are significant.
fn request_path(target: &str) -> &str {
    let end = target.find(['?', '#']).unwrap_or(target.len());
    &target[..end]
}
