//! HTTP method vocabulary module
//!
//! Closed set of HTTP verb tokens used for route registration, request
//! comparison, and error messages.

use std::fmt;

/// HTTP request methods accepted for route registration.
///
/// Comparison against a raw request token is exact and case-sensitive;
/// no normalization is performed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HttpMethod {
    Get,
    Post,
    Put,
    Delete,
    Patch,
    Head,
    Options,
    Connect,
    Trace,
}

impl HttpMethod {
    /// Canonical wire token for this method
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Post => "POST",
            Self::Put => "PUT",
            Self::Delete => "DELETE",
            Self::Patch => "PATCH",
            Self::Head => "HEAD",
            Self::Options => "OPTIONS",
            Self::Connect => "CONNECT",
            Self::Trace => "TRACE",
        }
    }

    /// Parse a raw request token; exact match only, so `"get"` is not `GET`
    #[must_use]
    pub fn from_token(token: &str) -> Option<Self> {
        match token {
            "GET" => Some(Self::Get),
            "POST" => Some(Self::Post),
            "PUT" => Some(Self::Put),
            "DELETE" => Some(Self::Delete),
            "PATCH" => Some(Self::Patch),
            "HEAD" => Some(Self::Head),
            "OPTIONS" => Some(Self::Options),
            "CONNECT" => Some(Self::Connect),
            "TRACE" => Some(Self::Trace),
            _ => None,
        }
    }

    /// Check whether a raw request token names this method
    #[must_use]
    pub fn matches_token(self, token: &str) -> bool {
        self.as_str() == token
    }
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL: [HttpMethod; 9] = [
        HttpMethod::Get,
        HttpMethod::Post,
        HttpMethod::Put,
        HttpMethod::Delete,
        HttpMethod::Patch,
        HttpMethod::Head,
        HttpMethod::Options,
        HttpMethod::Connect,
        HttpMethod::Trace,
    ];

    #[test]
    fn test_token_round_trip() {
        for method in ALL {
            assert_eq!(HttpMethod::from_token(method.as_str()), Some(method));
        }
    }

    #[test]
    fn test_from_token_is_case_sensitive() {
        assert_eq!(HttpMethod::from_token("get"), None);
        assert_eq!(HttpMethod::from_token("Get"), None);
        assert_eq!(HttpMethod::from_token("post "), None);
        assert_eq!(HttpMethod::from_token(""), None);
    }

    #[test]
    fn test_matches_token() {
        assert!(HttpMethod::Get.matches_token("GET"));
        assert!(!HttpMethod::Get.matches_token("get"));
        assert!(!HttpMethod::Get.matches_token("POST"));
    }

    #[test]
    fn test_display_prints_token() {
        assert_eq!(HttpMethod::Delete.to_string(), "DELETE");
        assert_eq!(format!("{}", HttpMethod::Options), "OPTIONS");
    }
}
