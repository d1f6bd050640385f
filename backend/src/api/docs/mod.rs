//! Documentation viewer endpoints.
//!
//! Serves the viewer host page, the initializer script built from the typed
//! viewer configuration, and a JSON view of that configuration.

pub mod handlers;
pub mod routes;

use crate::config::Config;
use crate::errors::{ViewerError, ViewerResult};
use crate::viewer::{Origin, ScriptRenderer};
use axum::http::{HeaderMap, header::HOST};

const X_FORWARDED_PROTO: &str = "x-forwarded-proto";
const X_FORWARDED_HOST: &str = "x-forwarded-host";

/// Shared, read-only state for the docs handlers.
#[derive(Debug, Clone)]
pub struct DocsState {
    pub title: String,
    pub public_origin: Option<Origin>,
    pub bundle_base_url: String,
    pub renderer: ScriptRenderer,
}

impl DocsState {
    pub fn from_config(config: &Config) -> Self {
        Self {
            title: config.service_name.clone(),
            public_origin: config.swagger.public_origin.clone(),
            bundle_base_url: config.swagger.bundle_base_url.clone(),
            renderer: ScriptRenderer::new(),
        }
    }

    /// Origin the requesting page was loaded from.
    ///
    /// A configured public origin wins; otherwise the forwarded headers of a
    /// reverse proxy, then the plain `Host` header, are used.
    pub fn resolve_origin(&self, headers: &HeaderMap) -> ViewerResult<Origin> {
        if let Some(origin) = &self.public_origin {
            return Ok(origin.clone());
        }

        let host = first_value(headers, X_FORWARDED_HOST)
            .or_else(|| first_value(headers, HOST.as_str()))
            .ok_or_else(|| ViewerError::invalid_origin("", "missing Host header"))?;

        Origin::from_host(first_value(headers, X_FORWARDED_PROTO), host)
    }
}

// Proxies may append a comma separated chain; the first hop is the client's.
fn first_value<'a>(headers: &'a HeaderMap, name: &str) -> Option<&'a str> {
    headers
        .get(name)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.split(',').next())
        .map(str::trim)
        .filter(|value| !value.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;

    fn state(public_origin: Option<&str>) -> DocsState {
        DocsState {
            title: "API Docs".to_string(),
            public_origin: public_origin.map(|o| Origin::parse(o).unwrap()),
            bundle_base_url: "/assets".to_string(),
            renderer: ScriptRenderer::new(),
        }
    }

    #[test]
    fn test_public_origin_wins() {
        let mut headers = HeaderMap::new();
        headers.insert(HOST, HeaderValue::from_static("internal:3000"));

        let origin = state(Some("https://api.example.com"))
            .resolve_origin(&headers)
            .unwrap();
        assert_eq!(origin.as_str(), "https://api.example.com");
    }

    #[test]
    fn test_origin_from_forwarded_headers() {
        let mut headers = HeaderMap::new();
        headers.insert(HOST, HeaderValue::from_static("internal:3000"));
        headers.insert(X_FORWARDED_HOST, HeaderValue::from_static("docs.example.com"));
        headers.insert(X_FORWARDED_PROTO, HeaderValue::from_static("https, http"));

        let origin = state(None).resolve_origin(&headers).unwrap();
        assert_eq!(origin.as_str(), "https://docs.example.com");
    }

    #[test]
    fn test_origin_from_host_header() {
        let mut headers = HeaderMap::new();
        headers.insert(HOST, HeaderValue::from_static("localhost:3000"));

        let origin = state(None).resolve_origin(&headers).unwrap();
        assert_eq!(origin.as_str(), "http://localhost:3000");
    }

    #[test]
    fn test_missing_host_is_rejected() {
        let result = state(None).resolve_origin(&HeaderMap::new());
        assert!(matches!(result, Err(ViewerError::InvalidOrigin { .. })));
    }
}
