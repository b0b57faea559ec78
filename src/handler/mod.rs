//! Request handler module
//!
//! Hyper service entry point: hands every request to the router and unseals
//! the framed response at the connection boundary. This is the only place a
//! [`Framed`](crate::http::Framed) value is consumed.

use std::convert::Infallible;
use std::sync::Arc;

use http_body_util::Full;
use hyper::body::Bytes;
use hyper::{Request, Response};

use crate::config::AppState;
use crate::logger;

/// Main entry point for HTTP request handling
pub async fn handle_request(
    req: Request<hyper::body::Incoming>,
    state: Arc<AppState>,
) -> Result<Response<Full<Bytes>>, Infallible> {
    let method = req.method().as_str();
    let target = req
        .uri()
        .path_and_query()
        .map_or(req.uri().path(), |pq| pq.as_str());

    logger::log_headers_count(req.headers().len(), state.config.logging.show_headers);

    // One dispatch pass, exactly one framed response back
    let framed = state.router.dispatch(method, target);

    if state.config.logging.access_log {
        logger::log_dispatch(method, target, framed.status().as_u16(), framed.body().len());
    }

    Ok(framed.into_response())
}
