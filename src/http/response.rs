//! JSON response framing module
//!
//! Builds the wire response for every emission: a fixed header set, a
//! pretty-printed JSON body, and the [`Framed`] seal that ends request
//! processing.

use http_body_util::Full;
use hyper::body::Bytes;
use hyper::{HeaderMap, Response, StatusCode};
use serde::Serialize;

use crate::logger;

// Fixed headers sent with every JSON emission, in this order
const ACCESS_CONTROL_ALLOW_ORIGIN: (&str, &str) = ("Access-Control-Allow-Origin", "*");
const CONTENT_TYPE_JSON: (&str, &str) = ("Content-Type", "application/json; charset=UTF-8");
const CACHE_CONTROL_NO_CACHE: (&str, &str) = ("Cache-Control", "no-cache, must-revalidate");
// Expired date for immediate expiry
const EXPIRES_HEADER: (&str, &str) = ("Expires", "Mon, 26 Jul 1997 05:00:00 GMT");
const PRAGMA_NO_CACHE: (&str, &str) = ("Pragma", "no-cache");

/// A response that has already been framed and sealed.
///
/// This is the only value handlers and dispatch can produce, and the
/// connection service consumes it exactly once. Once a `Framed` exists the
/// request is over: neither dispatch nor handler code runs after it.
#[derive(Debug)]
pub struct Framed(Response<Bytes>);

impl Framed {
    /// Status code carried by the sealed response
    #[must_use]
    pub fn status(&self) -> StatusCode {
        self.0.status()
    }

    /// Headers carried by the sealed response
    #[must_use]
    pub fn headers(&self) -> &HeaderMap {
        self.0.headers()
    }

    /// Serialized body bytes
    #[must_use]
    pub fn body(&self) -> &Bytes {
        self.0.body()
    }

    /// Unseal into the wire response; called once, at the connection boundary
    #[must_use]
    pub fn into_response(self) -> Response<Full<Bytes>> {
        self.0.map(Full::new)
    }
}

/// Frame a JSON response with the given payload and status code.
///
/// The payload is serialized with human-readable formatting; the header set
/// is identical for every call and not configurable.
pub fn send_json<T: Serialize>(payload: &T, status: StatusCode) -> Framed {
    let body = match serde_json::to_string_pretty(payload) {
        Ok(json) => json,
        Err(e) => {
            logger::log_error(&format!("Failed to serialize response payload: {e}"));
            return Framed(fallback_response());
        }
    };

    Framed(
        json_builder(status)
            .body(Bytes::from(body))
            .unwrap_or_else(|e| {
                logger::log_error(&format!("Failed to build {status} response: {e}"));
                fallback_response()
            }),
    )
}

/// Frame a `200 OK` JSON response
pub fn send_ok<T: Serialize>(payload: &T) -> Framed {
    send_json(payload, StatusCode::OK)
}

/// Response builder preloaded with the fixed header set
fn json_builder(status: StatusCode) -> hyper::http::response::Builder {
    Response::builder()
        .status(status)
        .header(ACCESS_CONTROL_ALLOW_ORIGIN.0, ACCESS_CONTROL_ALLOW_ORIGIN.1)
        .header(CONTENT_TYPE_JSON.0, CONTENT_TYPE_JSON.1)
        .header(CACHE_CONTROL_NO_CACHE.0, CACHE_CONTROL_NO_CACHE.1)
        .header(EXPIRES_HEADER.0, EXPIRES_HEADER.1)
        .header(PRAGMA_NO_CACHE.0, PRAGMA_NO_CACHE.1)
}

/// Last-resort response when serialization or response building fails
fn fallback_response() -> Response<Bytes> {
    json_builder(StatusCode::INTERNAL_SERVER_ERROR)
        .body(Bytes::from(r#"{"message": "Internal server error"}"#))
        .unwrap_or_else(|_| Response::new(Bytes::from("Internal server error")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    const FIXED_HEADERS: [(&str, &str); 5] = [
        ACCESS_CONTROL_ALLOW_ORIGIN,
        CONTENT_TYPE_JSON,
        CACHE_CONTROL_NO_CACHE,
        EXPIRES_HEADER,
        PRAGMA_NO_CACHE,
    ];

    fn assert_fixed_headers(framed: &Framed) {
        for (name, value) in FIXED_HEADERS {
            let header = framed.headers().get(name);
            assert_eq!(
                header.and_then(|v| v.to_str().ok()),
                Some(value),
                "missing or wrong header: {name}"
            );
        }
    }

    #[test]
    fn test_send_ok_defaults_to_200() {
        let framed = send_ok(&json!({ "status": "ok" }));
        assert_eq!(framed.status(), StatusCode::OK);
    }

    #[test]
    fn test_send_json_sets_status() {
        let framed = send_json(&json!({ "message": "Not Found" }), StatusCode::NOT_FOUND);
        assert_eq!(framed.status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn test_fixed_headers_on_success() {
        let framed = send_ok(&json!({ "id": 1 }));
        assert_fixed_headers(&framed);
    }

    #[test]
    fn test_fixed_headers_on_error_status() {
        let framed = send_json(
            &json!({ "message": "Not Found" }),
            StatusCode::METHOD_NOT_ALLOWED,
        );
        assert_fixed_headers(&framed);
    }

    #[test]
    fn test_body_is_pretty_printed_json() {
        let framed = send_ok(&json!({ "message": "hello" }));
        let body = String::from_utf8(framed.body().to_vec()).unwrap();
        assert_eq!(body, "{\n  \"message\": \"hello\"\n}");
    }

    #[test]
    fn test_body_round_trips_through_serde() {
        let payload = json!({ "items": [1, 2, 3], "total": 3 });
        let framed = send_ok(&payload);
        let parsed: serde_json::Value = serde_json::from_slice(framed.body()).unwrap();
        assert_eq!(parsed, payload);
    }
}
