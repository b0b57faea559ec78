//! API endpoint module
//!
//! Registers this service's JSON endpoints against the route registry.

use std::sync::Arc;

use serde_json::json;

use crate::config::Config;
use crate::http::{self, Framed, HttpMethod};
use crate::router::Router;

/// Build the route registry for this service.
///
/// Registration completes before the listener accepts its first connection;
/// the returned router is shared read-only afterwards.
#[must_use]
pub fn build_router(config: &Arc<Config>) -> Router {
    let mut router = Router::new();

    router.register(HttpMethod::Get, "/healthz", || {
        http::send_ok(&json!({ "status": "ok" }))
    });

    let cfg = Arc::clone(config);
    router.register(HttpMethod::Get, "/api/config", move || config_snapshot(&cfg));

    // The status endpoint goes through the named-handler table; the route
    // and the handler are registered independently.
    router.add_named_handler("server_status", server_status);
    router.register_named(HttpMethod::Get, "/api/status", "server_status");

    router
}

/// Service identity and version
fn server_status() -> Framed {
    http::send_ok(&json!({
        "service": env!("CARGO_PKG_NAME"),
        "version": env!("CARGO_PKG_VERSION"),
        "status": "running",
    }))
}

/// Sanitized view of the runtime configuration
fn config_snapshot(config: &Config) -> Framed {
    http::send_ok(&json!({
        "server": {
            "host": config.server.host,
            "port": config.server.port,
        },
        "logging": config.logging,
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use hyper::StatusCode;

    fn test_router() -> Router {
        let config = Arc::new(Config::load_from("no_such_config_file").unwrap());
        build_router(&config)
    }

    #[test]
    fn test_health_endpoint_dispatches() {
        let router = test_router();
        let framed = router.dispatch("GET", "/healthz");
        assert_eq!(framed.status(), StatusCode::OK);
    }

    #[test]
    fn test_status_endpoint_resolves_named_handler() {
        let router = test_router();
        let framed = router.dispatch("GET", "/api/status");
        assert_eq!(framed.status(), StatusCode::OK);

        let body: serde_json::Value = serde_json::from_slice(framed.body()).unwrap();
        assert_eq!(body["service"], "rust_apiserver");
        assert_eq!(body["status"], "running");
    }

    #[test]
    fn test_config_endpoint_reports_defaults() {
        let router = test_router();
        let framed = router.dispatch("GET", "/api/config");
        assert_eq!(framed.status(), StatusCode::OK);

        let body: serde_json::Value = serde_json::from_slice(framed.body()).unwrap();
        assert_eq!(body["server"]["port"], 8080);
    }

    #[test]
    fn test_health_endpoint_rejects_wrong_method() {
        let router = test_router();
        let framed = router.dispatch("POST", "/healthz");
        assert_eq!(framed.status(), StatusCode::METHOD_NOT_ALLOWED);
    }
}
