// Request context for URL helpers

use http::header::{HOST, REFERER};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

const FORWARDED_PROTO: &str = "x-forwarded-proto";

/// What the URL helpers need to know about the current request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RequestContext {
    pub https: bool,
    /// Host with optional port, e.g. `example.com:8080`
    pub host: String,
    /// Path and query as sent by the client
    pub request_uri: String,
    pub referer: Option<String>,
}

impl RequestContext {
    /// Plain-HTTP request for `/` on `host`.
    pub fn new(host: impl Into<String>) -> Self {
        Self {
            https: false,
            host: host.into(),
            request_uri: "/".to_string(),
            referer: None,
        }
    }

    pub fn with_https(mut self, https: bool) -> Self {
        self.https = https;
        self
    }

    pub fn with_request_uri(mut self, uri: impl Into<String>) -> Self {
        self.request_uri = uri.into();
        self
    }

    pub fn with_referer(mut self, referer: impl Into<String>) -> Self {
        self.referer = Some(referer.into());
        self
    }

    /// Build from CGI-style server variables.
    ///
    /// `HTTPS` set to anything but `off` means https. Missing `HTTP_HOST` and
    /// `REQUEST_URI` become empty strings.
    pub fn from_server_vars(vars: &HashMap<String, String>) -> Self {
        let https = vars.get("HTTPS").is_some_and(|v| v != "off");
        let host = vars.get("HTTP_HOST").cloned().unwrap_or_default();
        if host.is_empty() {
            swiss_log::debug!("server variables carry no HTTP_HOST");
        }

        Self {
            https,
            host,
            request_uri: vars.get("REQUEST_URI").cloned().unwrap_or_default(),
            referer: vars.get("HTTP_REFERER").cloned(),
        }
    }

    /// Build from an `http` request.
    ///
    /// The scheme comes from the request URI when it is absolute, otherwise
    /// from `X-Forwarded-Proto`. The host comes from the `Host` header, then
    /// the URI authority.
    pub fn from_request<B>(request: &http::Request<B>) -> Self {
        let uri = request.uri();
        let headers = request.headers();
        let header = |name: &str| {
            headers
                .get(name)
                .and_then(|v| v.to_str().ok())
                .map(str::to_string)
        };

        let https = match uri.scheme_str() {
            Some(scheme) => scheme.eq_ignore_ascii_case("https"),
            None => header(FORWARDED_PROTO).is_some_and(|p| p.eq_ignore_ascii_case("https")),
        };

        let host = header(HOST.as_str())
            .or_else(|| uri.authority().map(|a| a.to_string()))
            .unwrap_or_default();

        Self {
            https,
            host,
            request_uri: uri
                .path_and_query()
                .map(|pq| pq.as_str().to_string())
                .unwrap_or_else(|| "/".to_string()),
            referer: header(REFERER.as_str()),
        }
    }

    pub fn scheme(&self) -> &'static str {
        if self.https { "https" } else { "http" }
    }

    /// `scheme://host` followed by the request URI.
    pub fn current_url(&self) -> String {
        format!("{}{}", self.base_url(), self.request_uri)
    }

    /// `scheme://host`
    pub fn base_url(&self) -> String {
        format!("{}://{}", self.scheme(), self.host)
    }

    /// Absolute URL for `path` under the base URL.
    pub fn to(&self, path: &str) -> String {
        format!("{}/{}", self.base_url(), path.trim_start_matches('/'))
    }

    /// The referer, or the base URL when there is none.
    pub fn previous_url(&self) -> String {
        self.referer.clone().unwrap_or_else(|| self.base_url())
    }
}
