//! Page origin handling.
//!
//! Document URLs are built by appending a fixed suffix to the origin the
//! viewer page was served from, so the origin is normalised once here:
//! lowercase scheme and host, default ports dropped, no trailing slash.

use crate::errors::{ViewerError, ViewerResult};
use std::fmt::{self, Display, Formatter};
use std::str::FromStr;
use url::Url;

/// The `scheme://host[:port]` a viewer page was loaded from.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Origin(String);

impl Origin {
    /// Parses an absolute http(s) origin.
    ///
    /// A single trailing `/` is accepted; any other path, a query or a
    /// fragment is rejected rather than silently dropped.
    pub fn parse(input: &str) -> ViewerResult<Self> {
        let trimmed = input.trim();
        let url = Url::parse(trimmed)
            .map_err(|e| ViewerError::invalid_origin(trimmed, e.to_string()))?;

        if !matches!(url.scheme(), "http" | "https") {
            return Err(ViewerError::invalid_origin(
                trimmed,
                format!("unsupported scheme '{}'", url.scheme()),
            ));
        }

        if url.path() != "/" || url.query().is_some() || url.fragment().is_some() {
            return Err(ViewerError::invalid_origin(
                trimmed,
                "origin must not carry a path, query or fragment",
            ));
        }

        if !url.username().is_empty() || url.password().is_some() {
            return Err(ViewerError::invalid_origin(
                trimmed,
                "origin must not carry credentials",
            ));
        }

        let origin = url.origin();
        if !origin.is_tuple() {
            return Err(ViewerError::invalid_origin(trimmed, "opaque origin"));
        }

        Ok(Self(origin.ascii_serialization()))
    }

    /// Builds an origin from the pieces a reverse proxy or client hands us.
    /// The scheme defaults to `http` when no forwarded protocol is present.
    pub fn from_host(scheme: Option<&str>, host: &str) -> ViewerResult<Self> {
        let scheme = scheme.map(str::trim).filter(|s| !s.is_empty()).unwrap_or("http");
        let host = host.trim();
        if host.is_empty() {
            return Err(ViewerError::invalid_origin(host, "missing host"));
        }
        Self::parse(&format!("{}://{}", scheme, host))
    }

    /// Appends a path suffix such as `/openapi3.json`.
    pub fn join(&self, suffix: &str) -> String {
        format!("{}{}", self.0, suffix)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Display for Origin {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Origin {
    type Err = ViewerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}
