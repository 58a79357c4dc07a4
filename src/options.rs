//! Connection options for the Slack Web API client.

use std::collections::HashMap;
use std::time::Duration;

/// Base URL every Web API method is appended to.
pub const SLACK_API_BASE: &str = "https://slack.com/api";

/// Options controlling how requests reach the Web API.
///
/// Nothing here is required: the defaults point at the public Slack endpoint
/// and leave timeouts to the underlying transport.
#[derive(Debug, Clone)]
pub struct ClientOptions {
    /// Base URL, without a trailing slash. Method names are appended as `/{method}`.
    pub base_url: String,
    /// Request timeout. If None, the reqwest default applies.
    pub timeout: Option<Duration>,
    /// HTTP proxy URL applied to all requests.
    pub proxy: Option<String>,
    /// Additional HTTP headers sent with every Web API call.
    pub headers: Option<HashMap<String, String>>,
}

impl Default for ClientOptions {
    fn default() -> Self {
        Self {
            base_url: SLACK_API_BASE.to_string(),
            timeout: None,
            proxy: None,
            headers: None,
        }
    }
}

impl ClientOptions {
    /// Create default options targeting the public Slack API.
    pub fn new() -> Self {
        Self::default()
    }

    /// Point the client at another base URL (a proxy or a mock server).
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        let base_url = base_url.into();
        self.base_url = base_url.trim_end_matches('/').to_string();
        self
    }

    /// Set the timeout.
    pub fn with_timeout(mut self, duration: Duration) -> Self {
        self.timeout = Some(duration);
        self
    }

    /// Set the proxy.
    pub fn with_proxy(mut self, proxy_url: impl Into<String>) -> Self {
        self.proxy = Some(proxy_url.into());
        self
    }

    /// Add a header.
    pub fn with_header(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers
            .get_or_insert_with(HashMap::new)
            .insert(key.into(), value.into());
        self
    }

    /// Full URL for a Web API method.
    pub fn method_url(&self, method: &str) -> String {
        format!("{}/{}", self.base_url, method)
    }
}
